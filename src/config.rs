use crate::error::ConfigError;

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://www.amazon.com/s?k=";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ROUTE_PATH: &str = "/api/scrape";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Search URL prefix; the encoded keyword is appended as-is.
    pub search_base_url: String,
    pub route_path: String,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            route_path: DEFAULT_ROUTE_PATH.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads `API_AMAZON_SEARCH`, `API_GET_SCRAPE`, `HOST` and `PORT`,
    /// after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Only the search URL, for commands that never bind a port.
    pub fn search_base_url_from_env() -> String {
        dotenv::dotenv().ok();
        search_base_url_from(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        Ok(Self {
            search_base_url: search_base_url_from(&lookup),
            route_path: var("API_GET_SCRAPE")
                .map(|p| normalize_route(&p))
                .unwrap_or(defaults.route_path),
            host: var("HOST").map(|h| strip_scheme(&h)).unwrap_or(defaults.host),
            port,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn search_base_url_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("API_AMAZON_SEARCH")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SEARCH_BASE_URL.to_string())
}

// HOST is sometimes written as a URL ("http://localhost").
fn strip_scheme(host: &str) -> String {
    let host = host.trim();
    let host = host
        .strip_prefix("http://")
        .or_else(|| host.strip_prefix("https://"))
        .unwrap_or(host);
    host.trim_end_matches('/').to_string()
}

fn normalize_route(path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
