/// Backend configuration for the orders API.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    /// Point the app at an explicit backend, e.g. a mock server in tests.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Full URL of the paginated orders endpoint.
    pub fn send_url(&self) -> String {
        format!("{}/send", self.api_base_url)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(feature = "env_prod") {
                "https://orders-api.lqxclqxc.com".to_owned()
            } else if cfg!(feature = "env_test") {
                "https://orders-api-test.lqxclqxc.com".to_owned()
            } else {
                // Development default
                "http://localhost:7788".to_owned()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        let config = BusinessConfig::default();

        if cfg!(feature = "env_prod") {
            assert_eq!(config.api_base_url, "https://orders-api.lqxclqxc.com");
        } else if cfg!(feature = "env_test") {
            assert_eq!(config.api_base_url, "https://orders-api-test.lqxclqxc.com");
        } else {
            assert_eq!(config.api_base_url, "http://localhost:7788");
        }
    }

    #[test]
    fn test_send_url() {
        let config = BusinessConfig::new("http://127.0.0.1:9000");
        assert_eq!(config.send_url(), "http://127.0.0.1:9000/send");
    }
}
