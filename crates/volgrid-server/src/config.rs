//! Server configuration.

use serde::{Deserialize, Serialize};

use volgrid_core::compose::DEFAULT_SPACING;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Where the uploaded dataset CSV is stored
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Directory for generated images
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Vertical spacing between stacked tables, in pixels
    #[serde(default = "default_spacing")]
    pub spacing: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_path() -> String {
    "./data/vol_data.csv".to_string()
}

fn default_output_dir() -> String {
    "./data/images".to_string()
}

fn default_spacing() -> u32 {
    DEFAULT_SPACING
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_path: default_data_path(),
            output_dir: default_output_dir(),
            spacing: default_spacing(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.spacing, DEFAULT_SPACING);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ServerConfig = toml::from_str("port = 9000").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.output_dir, "./data/images");
    }
}
