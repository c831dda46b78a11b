use std::env;

use dotenv::dotenv;

pub const DEFAULT_PORT: u16 = 3000;

/// Process-wide settings, read once at startup and passed to the server
/// bootstrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_port_var(env::var("PORT").ok().as_deref())
    }

    fn from_port_var(raw: Option<&str>) -> Self {
        let port = raw.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_PORT);
        Self { port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_comes_from_env_with_default() {
        let test_data = [
            (None, 3000),
            (Some("8080"), 8080),
            (Some("not-a-port"), 3000),
            (Some(""), 3000),
        ];

        for (i, (raw, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(
                ServerConfig::from_port_var(raw).port,
                expected,
                "Test case #{}",
                i
            );
        }
    }
}
