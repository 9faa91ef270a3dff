use std::{env, path::PathBuf};

use dotenv::dotenv;

pub const DEFAULT_HANDOFF_PATH: &str = "nutriplan-session.json";

#[derive(Clone, Debug, PartialEq)]
pub struct AuthConfig {
    pub url: String,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the profile store. Remote saving is off when unset.
    pub api_url: Option<String>,
    /// Remote identity provider. The stub identity is used when unset.
    pub auth: Option<AuthConfig>,
    pub handoff_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let auth = match (var("NUTRIPLAN_AUTH_URL"), var("NUTRIPLAN_AUTH_TOKEN")) {
            (Some(url), Some(token)) => Some(AuthConfig { url, token }),
            _ => None,
        };

        Self {
            api_url: var("NUTRIPLAN_API_URL"),
            auth,
            handoff_path: var("NUTRIPLAN_HANDOFF")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HANDOFF_PATH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        Config::from_vars(|key| vars.get(key).map(|value| value.to_string()))
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(
            config(&[]),
            Config {
                api_url: None,
                auth: None,
                handoff_path: PathBuf::from(DEFAULT_HANDOFF_PATH),
            }
        );
    }

    #[test]
    fn remote_identity_needs_url_and_token() {
        assert_eq!(config(&[("NUTRIPLAN_AUTH_URL", "https://auth")]).auth, None);
        assert_eq!(
            config(&[
                ("NUTRIPLAN_AUTH_URL", "https://auth"),
                ("NUTRIPLAN_AUTH_TOKEN", "secret"),
            ])
            .auth,
            Some(AuthConfig {
                url: "https://auth".to_owned(),
                token: "secret".to_owned(),
            })
        );
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config(&[("NUTRIPLAN_API_URL", " "), ("NUTRIPLAN_HANDOFF", "")]);
        assert_eq!(config.api_url, None);
        assert_eq!(config.handoff_path, PathBuf::from(DEFAULT_HANDOFF_PATH));
    }

    #[test]
    fn explicit_values_are_used() {
        let config = config(&[
            ("NUTRIPLAN_API_URL", "http://localhost:8080"),
            ("NUTRIPLAN_HANDOFF", "/tmp/session.json"),
        ]);
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.handoff_path, PathBuf::from("/tmp/session.json"));
    }
}
