//! Domain name validation
//!
//! Rules run in a fixed order and the first failing rule decides the
//! reported reason, so every malformed input maps to one deterministic
//! message.

use crate::tld_registry::TldRegistry;
use fancy_regex::Regex;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

pub const MIN_DOMAIN_LENGTH: usize = 3;
pub const MAX_DOMAIN_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;

/// Accented letters accepted inside labels, in addition to ASCII letters and digits.
pub const ACCENTED_CHARACTERS: &str = "àáâãéêíóôõúüç";
const ACCENTED_CHARACTERS_UPPER: &str = "ÀÁÂÃÉÊÍÓÔÕÚÜÇ";

// Both cases spelled out: `(?i)` folds characters such as U+017F and U+212A
// into ASCII letters.
static DOMAIN_STRUCTURE: LazyLock<Regex> = LazyLock::new(|| {
    let c = format!(
        "a-zA-Z0-9{}{}",
        ACCENTED_CHARACTERS, ACCENTED_CHARACTERS_UPPER
    );
    Regex::new(&format!(
        r"^(?:[{c}](?:[{c}-]{{0,61}}[{c}])?\.)+[a-zA-Z]{{2,}}$"
    ))
    .expect("domain structure pattern is valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainNameViolation {
    #[error("Domain name cannot be empty.")]
    Empty,

    #[error("Domain '{domain}' cannot contain spaces.")]
    ContainsSpaces { domain: String },

    #[error("Domain '{domain}' must be between 3 and 253 characters long. Current: {length}.")]
    InvalidLength { domain: String, length: usize },

    #[error("Domain '{domain}' must have a valid extension (e.g. .com, .com.br).")]
    MissingExtension { domain: String },

    #[error(
        "Domain '{domain}' has an invalid extension '.{tld}'. \
         Use an extension recognized by IANA (e.g. .com, .br, .net, .org, .io)."
    )]
    UnknownTld { domain: String, tld: String },

    #[error(
        "Domain '{domain}' is invalid because it has consecutive dots (..) \
         or starts/ends with a dot."
    )]
    EmptyLabel { domain: String },

    #[error("Label '{label}' in domain '{domain}' exceeds 63 characters. Current: {length}.")]
    LabelTooLong {
        domain: String,
        label: String,
        length: usize,
    },

    #[error("Label '{label}' in domain '{domain}' cannot start or end with a hyphen.")]
    HyphenAtLabelEdge { domain: String, label: String },

    #[error("Label '{label}' in domain '{domain}' cannot contain consecutive hyphens.")]
    ConsecutiveHyphens { domain: String, label: String },

    #[error("Label '{label}' in domain '{domain}' cannot contain only numbers.")]
    NumericLabel { domain: String, label: String },

    #[error(
        "Domain '{domain}' is invalid. A valid domain must contain only letters (a-z), \
         digits (0-9), hyphens, and accented characters (à, á, â, ã, é, ê, í, ó, ô, õ, ú, ü, ç), \
         with an extension recognized by IANA (e.g. .com, .br, .net, .io)."
    )]
    InvalidCharacters { domain: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(DomainNameViolation),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// Structural validator for user-supplied domain names.
#[derive(Debug, Clone)]
pub struct DomainNameRules {
    registry: Arc<TldRegistry>,
}

impl DomainNameRules {
    pub fn new(registry: Arc<TldRegistry>) -> Self {
        Self { registry }
    }

    pub fn validate(&self, input: Option<&str>) -> ValidationOutcome {
        match self.check(input) {
            Ok(()) => ValidationOutcome::Valid,
            Err(violation) => ValidationOutcome::Invalid(violation),
        }
    }

    fn check(&self, input: Option<&str>) -> Result<(), DomainNameViolation> {
        let domain = match input.map(str::trim) {
            Some(d) if !d.is_empty() => d,
            _ => return Err(DomainNameViolation::Empty),
        };

        if domain.contains(' ') {
            return Err(DomainNameViolation::ContainsSpaces {
                domain: domain.to_string(),
            });
        }

        let length = domain.chars().count();
        if !(MIN_DOMAIN_LENGTH..=MAX_DOMAIN_LENGTH).contains(&length) {
            return Err(DomainNameViolation::InvalidLength {
                domain: domain.to_string(),
                length,
            });
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return Err(DomainNameViolation::MissingExtension {
                domain: domain.to_string(),
            });
        }

        let last = labels[labels.len() - 1];
        if self.registry.extension_of(domain).is_none() {
            return Err(DomainNameViolation::UnknownTld {
                domain: domain.to_string(),
                tld: last.to_string(),
            });
        }

        let tld_index = labels.len() - 1;
        for (i, label) in labels.iter().enumerate() {
            self.check_label(domain, label, i == tld_index)?;
        }

        if !DOMAIN_STRUCTURE.is_match(domain).unwrap_or(false) {
            return Err(DomainNameViolation::InvalidCharacters {
                domain: domain.to_string(),
            });
        }

        Ok(())
    }

    fn check_label(&self, domain: &str, label: &str, is_tld: bool) -> Result<(), DomainNameViolation> {
        if label.is_empty() {
            return Err(DomainNameViolation::EmptyLabel {
                domain: domain.to_string(),
            });
        }

        let length = label.chars().count();
        if length > MAX_LABEL_LENGTH {
            return Err(DomainNameViolation::LabelTooLong {
                domain: domain.to_string(),
                label: label.to_string(),
                length,
            });
        }

        if is_tld {
            return Ok(());
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(DomainNameViolation::HyphenAtLabelEdge {
                domain: domain.to_string(),
                label: label.to_string(),
            });
        }

        if label.contains("--") {
            return Err(DomainNameViolation::ConsecutiveHyphens {
                domain: domain.to_string(),
                label: label.to_string(),
            });
        }

        if label.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(DomainNameViolation::NumericLabel {
                domain: domain.to_string(),
                label: label.to_string(),
            });
        }

        Ok(())
    }
}

/// Cache key form of a domain name: trimmed and lowercased.
pub fn normalize_domain_name(name: &str) -> String {
    name.trim().to_lowercase()
}
