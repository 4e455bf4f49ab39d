//! Configuration management for tts-voice-tools.
//!
//! Loads config from YAML files in standard locations. Every section falls
//! back to defaults field by field, so a file only needs the values it changes.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub device_ip: String,
    pub port: u16,
    /// Full base URL; takes precedence over `device_ip`/`port` when set.
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            device_ip: "192.168.1.100".into(),
            port: 8765,
            base_url: None,
            timeout_secs: 5,
        }
    }
}

impl ClientConfig {
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}:{}", self.device_ip, self.port),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Density {
    pub label: String,
    pub size: u32,
}

impl Density {
    pub fn new(label: impl Into<String>, size: u32) -> Self {
        Self {
            label: label.into(),
            size,
        }
    }

    /// Android launcher densities, mdpi through xxxhdpi.
    pub fn launcher_defaults() -> Vec<Self> {
        vec![
            Self::new("mdpi", 48),
            Self::new("hdpi", 72),
            Self::new("xhdpi", 96),
            Self::new("xxhdpi", 144),
            Self::new("xxxhdpi", 192),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [u8; 3],
    pub foreground: [u8; 3],
    /// Alpha of the outer pair of sound-wave arcs.
    pub wave_alpha: u8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [65, 105, 225], // royal blue
            foreground: [255, 255, 255],
            wave_alpha: 150,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub output_dir: PathBuf,
    pub densities: Vec<Density>,
    pub palette: Palette,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_dir: ["android", "app", "src", "main", "res"].iter().collect(),
            densities: Density::launcher_defaults(),
            palette: Palette::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub icons: IconConfig,
}

impl Config {
    /// Load the shared config for `tts-client` and `generate-icons`.
    ///
    /// An explicit `--config` path wins; otherwise the first existing file of
    /// ./tts-voice.yaml, ~/.config/tts-voice/config.yaml and
    /// /etc/tts-voice/config.yaml is used. A missing or unreadable file yields
    /// defaults. Both binaries then apply their own flags on top
    /// (`--url`, `--device-ip`, `--port`, `--timeout`, `--output`), so the
    /// file only supplies values the command line leaves unset.
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = path.map(PathBuf::from).or_else(|| {
            let candidates = [
                std::env::current_dir().ok().map(|d| d.join("tts-voice.yaml")),
                dirs::home_dir().map(|h| h.join(".config/tts-voice/config.yaml")),
                Some(PathBuf::from("/etc/tts-voice/config.yaml")),
            ];
            candidates.into_iter().flatten().find(|p| p.exists())
        });

        let Some(config_path) = resolved else {
            info!("No config file found, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", config_path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", config_path.display());
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_device_service() {
        let config = Config::default();
        assert_eq!(config.client.base_url(), "http://192.168.1.100:8765");
        assert_eq!(config.client.timeout(), Duration::from_secs(5));
        assert_eq!(config.icons.densities.len(), 5);
        assert_eq!(config.icons.densities[0], Density::new("mdpi", 48));
        assert_eq!(config.icons.densities[4], Density::new("xxxhdpi", 192));
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let config = Config::parse(
            "client:\n  device_ip: 10.0.0.7\nicons:\n  palette:\n    wave_alpha: 90\n",
        )
        .unwrap();
        assert_eq!(config.client.base_url(), "http://10.0.0.7:8765");
        assert_eq!(config.icons.palette.wave_alpha, 90);
        assert_eq!(config.icons.palette.background, [65, 105, 225]);
        assert_eq!(config.icons.densities, Density::launcher_defaults());
    }

    #[test]
    fn explicit_base_url_wins() {
        let config = Config::parse("client:\n  base_url: http://phone.lan:9000/\n").unwrap();
        assert_eq!(config.client.base_url(), "http://phone.lan:9000");
    }

    #[test]
    fn custom_density_table() {
        let config =
            Config::parse("icons:\n  densities:\n    - { label: ldpi, size: 36 }\n").unwrap();
        assert_eq!(config.icons.densities, vec![Density::new("ldpi", 36)]);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/tts-voice.yaml")));
        assert_eq!(config.client.port, 8765);
    }
}
