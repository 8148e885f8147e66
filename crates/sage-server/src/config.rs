use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

/// Secret used when `SAGE_JWT_SECRET` is unset. Fine for local runs only.
pub const DEV_JWT_SECRET: &str = "dev-secret-change-me";

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: PathBuf,
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("SAGE_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = lookup("SAGE_PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .context("SAGE_PORT must be a port number")?;
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", host, port))?;
        let db_path = lookup("SAGE_DB_PATH").unwrap_or_else(|| "sage.db".into()).into();
        let jwt_secret = lookup("SAGE_JWT_SECRET")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEV_JWT_SECRET.into());

        Ok(Self {
            addr,
            db_path,
            jwt_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.db_path, PathBuf::from("sage.db"));
        assert_eq!(config.jwt_secret, DEV_JWT_SECRET);
    }

    #[test]
    fn overrides_are_read() {
        let config = config(&[
            ("SAGE_HOST", "127.0.0.1"),
            ("SAGE_PORT", "8080"),
            ("SAGE_DB_PATH", "/tmp/feedback.db"),
            ("SAGE_JWT_SECRET", "hunter2"),
        ])
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.db_path, PathBuf::from("/tmp/feedback.db"));
        assert_eq!(config.jwt_secret, "hunter2");
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config(&[("SAGE_PORT", "eighty")]).is_err());
    }
}
