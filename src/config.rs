use std::{env, time::Duration};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5000/predict";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub predict_url: String,
    pub predict_timeout: Option<Duration>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let predict_url = lookup("PREDICT_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_PREDICT_URL.to_string());

        let predict_timeout = lookup("PREDICT_TIMEOUT_SECS").and_then(|value| {
            match value.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(err) => {
                    warn!("ignoring PREDICT_TIMEOUT_SECS={value:?}: {err}");
                    None
                }
            }
        });

        Self {
            port,
            predict_url,
            predict_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let settings = settings(&[]);
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.predict_url, DEFAULT_PREDICT_URL);
        assert_eq!(settings.predict_timeout, None);
    }

    #[test]
    fn reads_overrides() {
        let settings = settings(&[
            ("PORT", "9191"),
            ("PREDICT_URL", " http://model:8000/predict "),
            ("PREDICT_TIMEOUT_SECS", "15"),
        ]);
        assert_eq!(settings.port, 9191);
        assert_eq!(settings.predict_url, "http://model:8000/predict");
        assert_eq!(settings.predict_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn invalid_values_fall_back() {
        let settings = settings(&[("PORT", "http"), ("PREDICT_TIMEOUT_SECS", "soon")]);
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.predict_timeout, None);
    }
}
