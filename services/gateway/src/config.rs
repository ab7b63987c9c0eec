//! Service configuration
//!
//! Settings come from environment variables with development defaults,
//! covering the storage paths, the bind address, and the CORS origin list.

use std::path::PathBuf;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding one order file per symbol.
    pub orders_dir: PathBuf,
    /// Path to the symbol catalog JSON input.
    pub symbols_file: PathBuf,
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Permitted cross-origin caller origins; `*` means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orders_dir: PathBuf::from("orders"),
            symbols_file: PathBuf::from("symbols.json"),
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Settings {
    /// Create settings from environment variables.
    ///
    /// Recognized variables: `ORDERS_DIR`, `SYMBOLS_FILE`, `HOST`, `PORT`,
    /// `ALLOWED_ORIGINS` (comma-separated list, `*` for any origin).
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let orders_dir = std::env::var("ORDERS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.orders_dir);

        let symbols_file = std::env::var("SYMBOLS_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.symbols_file);

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or(defaults.allowed_origins);

        Self {
            orders_dir,
            symbols_file,
            host,
            port,
            allowed_origins,
        }
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether any origin is permitted.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
