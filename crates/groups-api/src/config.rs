use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the groups table (default: "groups")
    pub table_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GROUPS_TABLE` - Name of the groups table (default: "groups")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("GROUPS_TABLE").unwrap_or_else(|_| "groups".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
