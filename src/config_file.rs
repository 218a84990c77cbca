//! Site configuration file handling.
//!
//! The storefront runs without any file; a JSON config can override the
//! site identity, the WhatsApp contact and the carousel settings. Missing
//! fields fall back to the built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::carousel::{DEFAULT_INTERVAL, Slide};
use crate::content;

/// Longest autoplay interval accepted from a config file
pub const MAX_INTERVAL_MS: u64 = 600_000;

/// WhatsApp contact used by the header button, the hero link and the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatsAppConfig {
    /// Phone number in international format; formatting characters allowed
    pub phone: String,
    /// Prefilled message
    pub message: String,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            phone: "+51 999 999 999".to_string(),
            message: "Hola, quiero información sobre Pick’n GO.".to_string(),
        }
    }
}

/// Carousel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay interval in milliseconds
    pub interval_ms: u64,
    /// Forces the reduced-motion preference; `None` defers to the platform
    pub reduced_motion: Option<bool>,
    /// Replaces the built-in product slides when present
    pub slides: Option<Vec<Slide>>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            reduced_motion: None,
            slides: None,
        }
    }
}

/// Storefront configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub whatsapp: WhatsAppConfig,
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Pick’n GO".to_string(),
            tagline: "Vending para tu local".to_string(),
            whatsapp: WhatsAppConfig::default(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Site name must be specified");
        }

        let digits = self
            .whatsapp
            .phone
            .chars()
            .filter(char::is_ascii_digit)
            .count();
        if digits == 0 {
            anyhow::bail!("WhatsApp phone number must contain digits");
        }
        if !(6..=15).contains(&digits) {
            anyhow::bail!("WhatsApp phone number must have 6-15 digits, found {}", digits);
        }

        let interval = self.carousel.interval_ms;
        if interval == 0 {
            anyhow::bail!("Carousel interval must be greater than zero");
        }
        if interval > MAX_INTERVAL_MS {
            anyhow::bail!(
                "Carousel interval must be at most {}ms, found {}ms",
                MAX_INTERVAL_MS,
                interval
            );
        }

        // An empty slide list is valid: the carousel renders nothing
        if let Some(slides) = &self.carousel.slides {
            for (i, slide) in slides.iter().enumerate() {
                if slide.src.trim().is_empty() {
                    anyhow::bail!("Slide {} has an empty image source", i + 1);
                }
                if slide.alt.trim().is_empty() {
                    anyhow::bail!("Slide {} has an empty caption", i + 1);
                }
            }
        }

        Ok(())
    }

    /// Autoplay interval as a duration
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.carousel.interval_ms)
    }

    /// Configured slides, or the built-in products
    pub fn slides(&self) -> Vec<Slide> {
        self.carousel
            .slides
            .clone()
            .unwrap_or_else(content::default_slides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &[u8]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.carousel.interval_ms, 2600);
        assert!(config.carousel.reduced_motion.is_none());
        assert_eq!(config.slides().len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_roundtrip_save_load() {
        let mut config = SiteConfig::default();
        config.carousel.interval_ms = 4000;
        config.carousel.reduced_motion = Some(true);
        config.whatsapp.phone = "51911222333".to_string();

        let temp_file = NamedTempFile::new().unwrap();
        config.save_to_file(temp_file.path()).unwrap();

        let loaded = SiteConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.interval(), Duration::from_millis(4000));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_file = write_temp(br#"{"carousel": {"interval_ms": 1500}}"#);
        let loaded = SiteConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.carousel.interval_ms, 1500);
        assert_eq!(loaded.name, SiteConfig::default().name);
        assert_eq!(loaded.whatsapp, WhatsAppConfig::default());
    }

    #[test]
    fn test_custom_slides() {
        let temp_file = write_temp(
            br#"{"carousel": {"slides": [{"src": "/a.png", "alt": "A", "label": "01"}]}}"#,
        );
        let loaded = SiteConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.slides(), vec![Slide::new("/a.png", "A", "01")]);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = SiteConfig::load_from_file(Path::new("/nonexistent/path"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_file = write_temp(b"{ invalid json }");
        assert!(SiteConfig::load_from_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_json_wrong_type_fails() {
        let temp_file = write_temp(br#"{"carousel": {"interval_ms": "fast"}}"#);
        assert!(SiteConfig::load_from_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_validation_zero_interval() {
        let mut config = SiteConfig::default();
        config.carousel.interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_interval_too_long() {
        let mut config = SiteConfig::default();
        config.carousel.interval_ms = MAX_INTERVAL_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_phone() {
        let mut config = SiteConfig::default();
        config.whatsapp.phone = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("digits"));
    }

    #[test]
    fn test_validation_empty_name() {
        let mut config = SiteConfig::default();
        config.name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_slide_list_is_valid() {
        let mut config = SiteConfig::default();
        config.carousel.slides = Some(Vec::new());
        assert!(config.validate().is_ok());
        assert!(config.slides().is_empty());
    }

    #[test]
    fn test_validation_slide_without_source() {
        let mut config = SiteConfig::default();
        config.carousel.slides = Some(vec![Slide::new(" ", "A", "01")]);
        assert!(config.validate().is_err());
    }
}
