use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime settings.
///
/// Precedence, lowest first: built-in defaults, plain `HOST` / `PORT` /
/// `DATABASE_URL` / `LOGLEVEL` env vars, then `REGISTRY_`-prefixed env vars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// sqlx SQLite url, e.g. `sqlite::memory:` or `sqlite://registry.db`
    pub database_url: String,
    pub loglevel: String,
    /// Insert the baseline employees and devices after the schema is ready.
    pub seed_on_startup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "sqlite::memory:".to_string(),
            loglevel: "info".to_string(),
            seed_on_startup: true,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["host", "port", "database_url", "loglevel"]))
            .merge(Env::prefixed("REGISTRY_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_serve_in_memory_store_on_3000() {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .extract()
            .unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
        assert!(cfg.seed_on_startup);
    }

    #[test]
    fn later_providers_override_defaults() {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Serialized::default("port", 8080))
            .merge(Serialized::default("seed_on_startup", false))
            .extract()
            .unwrap();
        assert_eq!(cfg.port, 8080);
        assert!(!cfg.seed_on_startup);
        assert_eq!(cfg.database_url, "sqlite::memory:");
    }
}
