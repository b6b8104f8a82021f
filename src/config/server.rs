/// Runtime server configuration.
///
/// Values are read from the environment at startup; anything missing or
/// unparseable falls back to the default and is reported with a warning.
use std::str::FromStr;
use log::warn;

/// Default bind host (all interfaces, clients live on other machines).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Which rendition of the `/status` page to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLayout {
    /// Two panels with the current ids and the most recent history entries.
    #[default]
    Dashboard,
    /// Plain table of the whole history, newest first.
    Table,
}

impl FromStr for StatusLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(StatusLayout::Dashboard),
            "table" => Ok(StatusLayout::Table),
            other => Err(format!("unknown status layout '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub status_layout: StatusLayout,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            status_layout: StatusLayout::default(),
        }
    }
}

impl ServerConfig {
    /// Load from `LOBBY_HOST`, `LOBBY_PORT` and `LOBBY_STATUS_LAYOUT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("LOBBY_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or_default(&lookup, "LOBBY_PORT", defaults.port),
            status_layout: parse_or_default(&lookup, "LOBBY_STATUS_LAYOUT", defaults.status_layout),
        }
    }
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("[Config] Invalid value {:?} for {}, using {:?}", raw, key, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.status_layout, StatusLayout::Dashboard);
    }

    #[test]
    fn test_values_are_read() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("LOBBY_HOST", "127.0.0.1"),
            ("LOBBY_PORT", "8080"),
            ("LOBBY_STATUS_LAYOUT", "Table"),
        ]));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.status_layout, StatusLayout::Table);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("LOBBY_HOST", "  "),
            ("LOBBY_PORT", "not-a-port"),
            ("LOBBY_STATUS_LAYOUT", "fancy"),
        ]));
        assert_eq!(config, ServerConfig::default());
    }
}
