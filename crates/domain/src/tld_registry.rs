//! Top-level domain registry
//!
//! Holds the IANA TLD list (`tlds-alpha-by-domain.txt`) plus a fixed set of
//! composite, two-label extensions. The registry is built once at startup
//! and shared read-only behind an `Arc`.

use fancy_regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Two-label extensions treated as a single unit when matching suffixes.
pub const COMPOSITE_TLDS: &[&str] = &[
    "com.br", "co.uk", "co.jp", "com.au", "gov.br", "net.br", "org.br",
];

/// Where the official list can be downloaded from.
pub const IANA_TLD_LIST_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

// A full IANA list compiles to a large alternation.
const PATTERN_SIZE_LIMIT: usize = 64 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum TldError {
    #[error("TLD file not found at '{0}'. Download the official list from {IANA_TLD_LIST_URL}")]
    NotFound(String),

    #[error("Failed to read TLD file '{0}': {1}")]
    Read(String, String),

    #[error("TLD source '{0}' is empty or contains no valid TLDs")]
    Empty(String),

    #[error("Failed to build TLD suffix pattern: {0}")]
    Pattern(String),
}

pub struct TldRegistry {
    tlds: HashSet<String>,
    suffix_pattern: Regex,
}

impl TldRegistry {
    /// Load the registry from a line-oriented TLD file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TldError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.exists() {
            return Err(TldError::NotFound(display));
        }

        let contents =
            std::fs::read_to_string(path).map_err(|e| TldError::Read(display.clone(), e.to_string()))?;

        Self::parse(&contents, &display)
    }

    /// Build the registry from in-memory text in the same format as the file.
    pub fn from_source(contents: &str) -> Result<Self, TldError> {
        Self::parse(contents, "<memory>")
    }

    fn parse(contents: &str, origin: &str) -> Result<Self, TldError> {
        let tlds: HashSet<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        if tlds.is_empty() {
            return Err(TldError::Empty(origin.to_string()));
        }

        let suffix_pattern = Self::build_suffix_pattern(&tlds)?;

        Ok(Self {
            tlds,
            suffix_pattern,
        })
    }

    /// `\.(alt|alt|...)$`, alternatives ordered longest first so composite
    /// extensions win over their final label.
    fn build_suffix_pattern(tlds: &HashSet<String>) -> Result<Regex, TldError> {
        let mut alternatives: Vec<String> = tlds
            .iter()
            .map(String::as_str)
            .chain(COMPOSITE_TLDS.iter().copied())
            .map(|tld| fancy_regex::escape(tld).into_owned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let pattern = format!(r"(?i)\.({})$", alternatives.join("|"));

        RegexBuilder::new(&pattern)
            .delegate_size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| TldError::Pattern(e.to_string()))
    }

    pub fn is_valid_tld(&self, tld: &str) -> bool {
        if tld.trim().is_empty() {
            return false;
        }
        self.tlds.contains(&tld.to_lowercase())
    }

    pub fn is_composite_tld(&self, extension: &str) -> bool {
        let extension = extension.to_lowercase();
        COMPOSITE_TLDS.iter().any(|c| *c == extension)
    }

    pub fn tld_count(&self) -> usize {
        self.tlds.len()
    }

    pub fn suffix_pattern(&self) -> &Regex {
        &self.suffix_pattern
    }

    /// Longest recognized extension at the end of `domain`, lowercased.
    ///
    /// `example.com.br` yields `com.br`, `example.br` yields `br`.
    pub fn extension_of(&self, domain: &str) -> Option<String> {
        let captures = self.suffix_pattern.captures(domain).ok()??;
        captures.get(1).map(|m| m.as_str().to_lowercase())
    }

    /// `domain` without its trailing extension and the dot before it.
    pub fn strip_extension<'a>(&self, domain: &'a str) -> Option<&'a str> {
        let captures = self.suffix_pattern.captures(domain).ok()??;
        captures.get(0).map(|m| &domain[..m.start()])
    }
}

impl std::fmt::Debug for TldRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TldRegistry")
            .field("tld_count", &self.tlds.len())
            .finish()
    }
}
