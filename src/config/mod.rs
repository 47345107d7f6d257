use once_cell::sync::Lazy;
use std::env;

/// Runtime configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(4000);

        let database_url = env::var("DATABASE_URL").ok().filter(|s| !s.is_empty());

        Self { port, database_url }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Global configuration singleton.
pub fn config() -> &'static AppConfig {
    &CONFIG
}
