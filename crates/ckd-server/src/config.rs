use std::net::SocketAddr;

use ckd_export::styles::DocumentStyles;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Log output format selected by `CKD_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub styles: DocumentStyles,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Recognized keys: `CKD_BIND_ADDR`, `CKD_LOG_FORMAT` (`text` | `json`),
    /// `CKD_REPORT_FONT`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup("CKD_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid CKD_BIND_ADDR {bind_addr:?}: {e}"))?;

        let log_format = match lookup("CKD_LOG_FORMAT").as_deref() {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid CKD_LOG_FORMAT {other:?}: expected \"text\" or \"json\""
                ));
            }
        };

        let mut styles = DocumentStyles::default();
        if let Some(font) = lookup("CKD_REPORT_FONT").filter(|f| !f.trim().is_empty()) {
            styles.body_font = font;
        }

        Ok(Self {
            bind_addr,
            log_format,
            styles,
        })
    }
}
