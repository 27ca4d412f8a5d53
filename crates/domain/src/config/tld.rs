use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TldConfig {
    /// Local copy of the IANA `tlds-alpha-by-domain.txt` list.
    #[serde(default = "default_tld_path")]
    pub path: String,
}

impl Default for TldConfig {
    fn default() -> Self {
        Self {
            path: default_tld_path(),
        }
    }
}

fn default_tld_path() -> String {
    "tlds-alpha-by-domain.txt".to_string()
}
