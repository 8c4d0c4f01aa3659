use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_url: String,
    pub db_name: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mongo_url =
            env::var("MONGO_URL").map_err(|_| anyhow::anyhow!("MONGO_URL must be set"))?;
        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "storefront".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            mongo_url,
            db_name,
            host,
            port,
        })
    }
}
