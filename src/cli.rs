use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config_file::SiteConfig;
use crate::error::{Result, SiteError};

/// Pick'n GO - vending machines for your business, in your terminal
#[derive(Parser, Debug)]
#[command(name = "pickngo")]
#[command(about = "Terminal storefront for the Pick'n GO vending-machine service")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON site configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Request reduced motion: the carousel and marquee stay still.
    ///
    /// Overrides the config file and the PICKNGO_REDUCED_MOTION variable.
    #[arg(long, global = true)]
    pub reduced_motion: bool,

    /// Carousel autoplay interval in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Slide to show first (1-based). Non-integer values are ignored.
    #[arg(long, global = true, value_name = "N", allow_hyphen_values = true)]
    pub start_slide: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the storefront (default)
    Run,
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        file: PathBuf,
    },
    /// Print the WhatsApp link and the page anchors
    Links,
    /// Write the effective configuration (file, defaults and flags) to FILE
    SaveConfig {
        /// Destination JSON file
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve the effective configuration: file (or defaults) with CLI
    /// overrides applied, validated.
    pub fn site_config(&self) -> anyhow::Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::load_from_file(path)?,
            None => SiteConfig::default(),
        };
        if let Some(interval_ms) = self.interval_ms {
            config.carousel.interval_ms = interval_ms;
        }
        if self.reduced_motion {
            config.carousel.reduced_motion = Some(true);
        }
        config.validate()?;
        Ok(config)
    }

    /// The requested first slide as a 0-based target.
    ///
    /// The raw value is kept as `f64` so the carousel can discard `NaN`,
    /// infinities and fractions itself; only unparseable text is an error.
    pub fn start_slide_target(&self) -> Result<Option<f64>> {
        match &self.start_slide {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map(|n| Some(n - 1.0))
                .map_err(|_| SiteError::validation(format!("--start-slide: '{}' is not a number", raw))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_no_subcommand_runs() {
        let cli = parse(&["pickngo"]);
        assert!(cli.command.is_none());
        assert!(!cli.reduced_motion);
    }

    #[test]
    fn test_validate_subcommand() {
        let cli = parse(&["pickngo", "validate", "site.json"]);
        assert_eq!(
            cli.command,
            Some(Commands::Validate {
                file: PathBuf::from("site.json")
            })
        );
    }

    #[test]
    fn test_save_config_subcommand() {
        let cli = parse(&["pickngo", "--interval-ms", "4000", "save-config", "out.json"]);
        assert_eq!(
            cli.command,
            Some(Commands::SaveConfig {
                file: PathBuf::from("out.json")
            })
        );
        assert_eq!(cli.site_config().unwrap().carousel.interval_ms, 4000);
    }

    #[test]
    fn test_overrides_apply() {
        let cli = parse(&["pickngo", "--interval-ms", "1000", "--reduced-motion"]);
        let config = cli.site_config().unwrap();
        assert_eq!(config.carousel.interval_ms, 1000);
        assert_eq!(config.carousel.reduced_motion, Some(true));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let cli = parse(&["pickngo", "--interval-ms", "0"]);
        assert!(cli.site_config().is_err());
    }

    #[test]
    fn test_start_slide_target() {
        assert_eq!(parse(&["pickngo"]).start_slide_target().unwrap(), None);
        assert_eq!(
            parse(&["pickngo", "--start-slide", "3"]).start_slide_target().unwrap(),
            Some(2.0)
        );
        assert_eq!(
            parse(&["pickngo", "--start-slide", "-1"]).start_slide_target().unwrap(),
            Some(-2.0)
        );
        let nan = parse(&["pickngo", "--start-slide", "NaN"]).start_slide_target().unwrap();
        assert!(nan.is_some_and(f64::is_nan));
        assert!(parse(&["pickngo", "--start-slide", "tres"]).start_slide_target().is_err());
    }
}
