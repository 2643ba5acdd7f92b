//! Configuration constants and utilities for storeline
//!
//! Connection settings come from three places, highest priority first:
//! environment variables, the selected section of the INI profile file, and
//! the compiled-in defaults. The access key has no compiled-in default.

use ini::Ini;
use reqwest::Url;
use std::fmt;
use std::path::Path;

/// Default base URL of the photo API
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Default profile file path for storeline
pub const DEFAULT_PROFILE_PATH: &str = "~/.storeline/profile";

/// Default profile (INI section) name
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "STORELINE_PROFILE_PATH";

/// Environment variable carrying the API access key
pub const ACCESS_KEY_ENV_VAR: &str = "STORELINE_ACCESS_KEY";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV_VAR: &str = "STORELINE_BASE_URL";

const BASE_URL_KEY: &str = "base_url";
const ACCESS_KEY_KEY: &str = "access_key";

/// Errors raised while resolving the client configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no access key configured; set STORELINE_ACCESS_KEY or `access_key` in profile '{profile}'")]
    MissingAccessKey { profile: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to load profile file '{path}': {reason}")]
    Profile { path: String, reason: String },
}

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Settings read from one section of the profile file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    base_url: Option<String>,
    access_key: Option<String>,
}

impl Profile {
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_deref()
    }
}

/// INI-backed store of named connection profiles
#[derive(Debug, Clone)]
pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    /// Load a profile by name.
    ///
    /// A missing file or section yields `Ok(None)`; a file that exists but
    /// cannot be read or parsed is an error.
    pub fn get_profile(&self, name: &str) -> Result<Option<Profile>, ConfigError> {
        let expanded = shellexpand::tilde(&self.path).into_owned();
        if !Path::new(&expanded).exists() {
            tracing::debug!("Profile file '{}' does not exist", expanded);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&expanded).map_err(|e| ConfigError::Profile {
            path: expanded.clone(),
            reason: e.to_string(),
        })?;

        Ok(ini.section(Some(name)).map(|section| Profile {
            base_url: non_blank(section.get(BASE_URL_KEY)),
            access_key: non_blank(section.get(ACCESS_KEY_KEY)),
        }))
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var_os(name)
        .and_then(|val| val.into_string().ok())
        .and_then(|val| non_blank(Some(&val)))
}

/// Resolved connection settings for the photo API
#[derive(Clone)]
pub struct ClientConfig {
    base_url: Url,
    access_key: String,
}

impl ClientConfig {
    pub fn new(base_url: &str, access_key: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            base_url,
            access_key: access_key.into(),
        })
    }

    /// Resolve the configuration for `profile_name` from the environment and
    /// the profile file at [`get_profile_path`].
    pub fn load(profile_name: &str) -> Result<Self, ConfigError> {
        let profile_path = get_profile_path();
        tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

        let profile = IniProfileStore::new(&profile_path)
            .get_profile(profile_name)?
            .unwrap_or_else(|| {
                tracing::debug!("Profile '{}' not found, using blank profile", profile_name);
                Profile::default()
            });

        Self::resolve(
            profile_name,
            &profile,
            env_value(BASE_URL_ENV_VAR),
            env_value(ACCESS_KEY_ENV_VAR),
        )
    }

    fn resolve(
        profile_name: &str,
        profile: &Profile,
        env_base_url: Option<String>,
        env_access_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = env_base_url
            .or_else(|| profile.base_url().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let access_key = env_access_key
            .or_else(|| profile.access_key().map(str::to_string))
            .ok_or_else(|| ConfigError::MissingAccessKey {
                profile: profile_name.to_string(),
            })?;

        Self::new(&base_url, access_key)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("access_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_profile(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_profile_path() {
        assert_eq!(DEFAULT_PROFILE_PATH, "~/.storeline/profile");
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(PROFILE_PATH_ENV_VAR, "STORELINE_PROFILE_PATH");
        assert_eq!(ACCESS_KEY_ENV_VAR, "STORELINE_ACCESS_KEY");
        assert_eq!(BASE_URL_ENV_VAR, "STORELINE_BASE_URL");
    }

    #[test]
    fn test_get_profile_path_env_override() {
        // Save current env var state
        let original = std::env::var_os(PROFILE_PATH_ENV_VAR);

        let test_path = "/custom/profile/path";
        std::env::set_var(PROFILE_PATH_ENV_VAR, test_path);
        assert_eq!(get_profile_path(), test_path);

        std::env::remove_var(PROFILE_PATH_ENV_VAR);
        assert_eq!(get_profile_path(), DEFAULT_PROFILE_PATH);

        // Restore original state
        if let Some(val) = original {
            std::env::set_var(PROFILE_PATH_ENV_VAR, val);
        }
    }

    #[test]
    fn profile_store_should_read_named_section() {
        let file = write_profile(
            "[default]\nbase_url = http://localhost:9000\naccess_key = abc123\n\n[staging]\naccess_key = xyz\n",
        );
        let store = IniProfileStore::new(file.path().to_str().unwrap());

        let default = store.get_profile("default").unwrap().unwrap();
        assert_eq!(default.base_url(), Some("http://localhost:9000"));
        assert_eq!(default.access_key(), Some("abc123"));

        let staging = store.get_profile("staging").unwrap().unwrap();
        assert_eq!(staging.base_url(), None);
        assert_eq!(staging.access_key(), Some("xyz"));
    }

    #[test]
    fn profile_store_should_return_none_for_missing_section_or_file() {
        let file = write_profile("[default]\naccess_key = abc123\n");
        let store = IniProfileStore::new(file.path().to_str().unwrap());
        assert_eq!(store.get_profile("other").unwrap(), None);

        let missing = IniProfileStore::new("/definitely/not/here/profile");
        assert_eq!(missing.get_profile("default").unwrap(), None);
    }

    #[test]
    fn resolve_should_prefer_environment_over_profile() {
        let profile = Profile {
            base_url: Some("http://profile.example".to_string()),
            access_key: Some("profile-key".to_string()),
        };

        let config = ClientConfig::resolve(
            "default",
            &profile,
            Some("http://env.example".to_string()),
            Some("env-key".to_string()),
        )
        .unwrap();

        assert_eq!(config.base_url().as_str(), "http://env.example/");
        assert_eq!(config.access_key(), "env-key");
    }

    #[test]
    fn resolve_should_fall_back_to_default_base_url() {
        let profile = Profile {
            base_url: None,
            access_key: Some("profile-key".to_string()),
        };

        let config = ClientConfig::resolve("default", &profile, None, None).unwrap();
        assert_eq!(config.base_url().as_str(), "https://api.unsplash.com/");
        assert_eq!(config.access_key(), "profile-key");
    }

    #[test]
    fn resolve_should_fail_without_access_key() {
        let result = ClientConfig::resolve("work", &Profile::default(), None, None);
        assert!(matches!(
            result,
            Err(ConfigError::MissingAccessKey { ref profile }) if profile == "work"
        ));
    }

    #[test]
    fn new_should_reject_invalid_base_url() {
        let result = ClientConfig::new("not a url", "key");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn debug_output_should_redact_access_key() {
        let config = ClientConfig::new("https://api.example.com", "super-secret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
