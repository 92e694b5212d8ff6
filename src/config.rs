use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "10000".to_string())
                .trim()
                .parse()
                .context("PORT must be a valid number")?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 10000);
        assert_eq!(config.addr(), "0.0.0.0:10000");
    }

    #[test]
    fn reads_host_and_port() {
        let config =
            Config::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "ten-thousand")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
