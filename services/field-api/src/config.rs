//! Service configuration loading and types.
//!
//! Values come from built-in defaults, then an optional YAML file, then
//! command-line flags / environment variables.

use std::net::SocketAddr;
use std::path::Path;

use axum::http::HeaderValue;
use field_common::{FieldError, FieldResult};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:8000`.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Cross-origin policy.
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional YAML file.
    ///
    /// A missing path or missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> FieldResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file does not exist, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = serde_yaml::from_str(&content).map_err(|e| {
            FieldError::InvalidConfig(format!("failed to parse {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Override the listen address when one was given on the command line.
    pub fn with_listen(mut self, listen: Option<String>) -> Self {
        if let Some(listen) = listen {
            self.listen = listen;
        }
        self
    }

    /// Replace the allowed origins when any were given on the command line.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        let origins: Vec<String> = origins
            .into_iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if !origins.is_empty() {
            self.cors.allowed_origins = origins;
        }
        self
    }

    pub fn listen_addr(&self) -> FieldResult<SocketAddr> {
        self.listen.parse().map_err(|_| {
            FieldError::InvalidConfig(format!("invalid listen address: {}", self.listen))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".to_string()
}

/// Cross-origin resource sharing policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to read responses. `*` allows any origin but cannot be
    /// combined with credentials.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Send `Access-Control-Allow-Credentials: true`.
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allow_credentials: default_allow_credentials(),
        }
    }
}

impl CorsConfig {
    /// Build the tower-http CORS layer for this policy.
    ///
    /// All methods and headers are allowed. With credentials enabled they are
    /// mirrored from the preflight request, since browsers reject `*` there.
    pub fn build_layer(&self) -> FieldResult<CorsLayer> {
        let wildcard = self.allowed_origins.iter().any(|o| o == "*");
        if wildcard && self.allow_credentials {
            return Err(FieldError::InvalidConfig(
                "wildcard CORS origin cannot be combined with credentials".to_string(),
            ));
        }

        let origin = if wildcard {
            AllowOrigin::any()
        } else {
            let origins = self
                .allowed_origins
                .iter()
                .map(|o| {
                    HeaderValue::from_str(o).map_err(|_| {
                        FieldError::InvalidConfig(format!("invalid CORS origin: {:?}", o))
                    })
                })
                .collect::<FieldResult<Vec<_>>>()?;
            AllowOrigin::list(origins)
        };

        let (methods, headers) = if self.allow_credentials {
            (AllowMethods::mirror_request(), AllowHeaders::mirror_request())
        } else {
            (AllowMethods::any(), AllowHeaders::any())
        };

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(self.allow_credentials))
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

fn default_allow_credentials() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen, "0.0.0.0:8000");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:5173"]);
        assert!(config.cors.allow_credentials);
        assert_eq!(config.listen_addr().unwrap().port(), 8000);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(ServerConfig::load(None).unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert_eq!(
            ServerConfig::load(Some(&path)).unwrap(),
            ServerConfig::default()
        );
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
listen: "127.0.0.1:9000"
cors:
  allowed_origins:
    - "https://maps.example.com"
    - "http://localhost:5173"
  allow_credentials: false
"#
        )
        .unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.listen, "127.0.0.1:9000");
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert!(!config.cors.allow_credentials);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/field-api.yaml");
        assert_eq!(
            ServerConfig::load(Some(&path)).unwrap(),
            ServerConfig::default()
        );
    }

    #[test]
    fn test_load_partial_yaml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen: \"127.0.0.1:8123\"").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.listen, "127.0.0.1:8123");
        assert_eq!(config.cors, CorsConfig::default());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cors: [not, a, map").unwrap();

        let err = ServerConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfig(_)));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::default()
            .with_listen(Some("127.0.0.1:1234".to_string()))
            .with_cors_origins(vec![" https://a.example ".to_string(), "".to_string()]);

        assert_eq!(config.listen, "127.0.0.1:1234");
        assert_eq!(config.cors.allowed_origins, vec!["https://a.example"]);
    }

    #[test]
    fn test_empty_overrides_keep_values() {
        let config = ServerConfig::default()
            .with_listen(None)
            .with_cors_origins(vec![]);
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_invalid_listen_addr() {
        let config = ServerConfig::default().with_listen(Some("not-an-addr".to_string()));
        assert!(matches!(
            config.listen_addr(),
            Err(FieldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_wildcard_with_credentials_rejected() {
        let cors = CorsConfig {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: true,
        };
        assert!(matches!(
            cors.build_layer(),
            Err(FieldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_wildcard_without_credentials_accepted() {
        let cors = CorsConfig {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: false,
        };
        assert!(cors.build_layer().is_ok());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let cors = CorsConfig {
            allowed_origins: vec!["http://bad\norigin".to_string()],
            allow_credentials: true,
        };
        assert!(matches!(
            cors.build_layer(),
            Err(FieldError::InvalidConfig(_))
        ));
    }
}
