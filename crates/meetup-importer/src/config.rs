use crate::error::{ImportError, ImportResult};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "http://api.meetup.com";
pub const DEFAULT_CONTINENT: &str = "Europe";

#[derive(Debug, Clone)]
pub struct ImporterConfig {
    /// Credential sent as the `key` query parameter
    pub meetup_api_key: String,
    pub meetup_api_base_url: String,
    /// TOML registry of known user groups
    pub user_groups_path: PathBuf,
    /// Where the imported meetups are written
    pub meetups_output_path: PathBuf,
    pub continent: String,
}

impl ImporterConfig {
    pub fn from_env() -> ImportResult<Self> {
        Self::from_env_with_api_key(None)
    }

    /// Like `from_env`, but an explicit API key wins over `MEETUP_API_KEY`.
    pub fn from_env_with_api_key(api_key: Option<String>) -> ImportResult<Self> {
        Self::from_lookup(|name| match name {
            "MEETUP_API_KEY" if api_key.is_some() => api_key.clone(),
            _ => env::var(name).ok(),
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ImportResult<Self> {
        let meetup_api_key = lookup("MEETUP_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ImportError::missing_env("MEETUP_API_KEY"))?;

        Ok(Self {
            meetup_api_key,
            meetup_api_base_url: lookup("MEETUP_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            user_groups_path: lookup("USER_GROUPS_PATH")
                .unwrap_or_else(|| "data/user_groups.toml".to_string())
                .into(),
            meetups_output_path: lookup("MEETUPS_OUTPUT_PATH")
                .unwrap_or_else(|| "data/meetups.json".to_string())
                .into(),
            continent: lookup("IMPORT_CONTINENT").unwrap_or_else(|| DEFAULT_CONTINENT.to_string()),
        })
    }
}
