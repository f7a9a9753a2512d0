//! Server configuration from environment variables.

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub jwt_secret: String,
    /// Token lifetime in hours.
    pub token_ttl_hours: u64,
    /// Dev-mode bootstrap admin; both unset disables seeding.
    pub seed_admin_email: Option<String>,
    pub seed_admin_password: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/parish".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let max_connections = env_parse("MAX_CONNECTIONS", 5)?;
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| AppError::Internal("JWT_SECRET must be set".into()))?;
        let token_ttl_hours = env_parse("TOKEN_TTL_HOURS", 24 * 7)?;
        Ok(ServerConfig {
            database_url,
            bind_addr,
            max_connections,
            jwt_secret,
            token_ttl_hours,
            seed_admin_email: std::env::var("SEED_ADMIN_EMAIL").ok(),
            seed_admin_password: std::env::var("SEED_ADMIN_PASSWORD").ok(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match std::env::var(key) {
        Ok(v) => v
            .parse()
            .map_err(|_| AppError::BadRequest(format!("invalid {}: {}", key, v))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_parse_falls_back_to_default() {
        let v: u32 = env_parse("PARISH_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(v, 42);
    }
}
