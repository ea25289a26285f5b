use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub contact_path: PathBuf,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("FOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_HOST: {e}"))?;

        let port: u16 = env_or("FOLIO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_PORT: {e}"))?;

        let contact_path = PathBuf::from(env_or("FOLIO_CONTACT_PATH", "data/contact.json"));

        let max_body_size: usize = env_or("FOLIO_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FOLIO_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            contact_path,
            max_body_size,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
