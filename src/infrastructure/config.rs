use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub backend: BackendSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    /// Session cookie forwarded with every request
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retry through the raw HTTP endpoint when the RPC service fails
    #[serde(default = "default_fallback_enabled")]
    pub fallback_enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_fallback_enabled() -> bool {
    true
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Reads `config/dashboard.*` (optional) overlaid with `CATER_` environment
/// variables, e.g. `CATER_BACKEND__BASE_URL`.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("CATER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    build_config(builder)
}

fn build_config(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<DashboardConfig> {
    let settings = builder.build()?;
    let mut parsed: DashboardConfig = settings.try_deserialize()?;
    parsed.backend.base_url = parsed.backend.base_url.trim_end_matches('/').to_string();

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> anyhow::Result<DashboardConfig> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml));
        build_config(builder)
    }

    #[test]
    fn test_defaults_applied() {
        let parsed = from_toml(
            r#"
            [backend]
            base_url = "http://localhost:8069/"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.backend.base_url, "http://localhost:8069");
        assert_eq!(parsed.backend.session_id, None);
        assert_eq!(parsed.backend.timeout_secs, 30);
        assert!(parsed.backend.fallback_enabled);
        assert_eq!(parsed.server.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_explicit_values() {
        let parsed = from_toml(
            r#"
            [backend]
            base_url = "https://erp.example.com"
            session_id = "abc123"
            timeout_secs = 5
            fallback_enabled = false

            [server]
            bind_addr = "127.0.0.1:9000"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.backend.session_id.as_deref(), Some("abc123"));
        assert_eq!(parsed.backend.timeout_secs, 5);
        assert!(!parsed.backend.fallback_enabled);
        assert_eq!(parsed.server.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_missing_base_url_rejected() {
        assert!(from_toml("[server]\nbind_addr = \"127.0.0.1:9000\"").is_err());
    }
}
