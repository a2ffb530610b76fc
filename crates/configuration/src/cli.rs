use crate::error::ConfigError;
use crate::settings::Settings;
use core_types::Industry;
use std::path::PathBuf;

/// Command-line flags that layer on top of the loaded settings.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Path to a settings file (defaults to ./dashboard.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Industry whose benchmark table is used (education, saas, ecommerce).
    #[arg(long, global = true)]
    pub industry: Option<Industry>,

    /// Currency prefix for amounts, e.g. "$".
    #[arg(long, global = true)]
    pub currency: Option<String>,
}

impl ConfigArgs {
    /// Loads the settings and applies the command-line overrides.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let mut settings = crate::load_settings(self.config.as_deref())?;
        if let Some(industry) = self.industry {
            settings.industry = industry;
        }
        if let Some(currency) = &self.currency {
            settings.display.currency_symbol = currency.clone();
        }
        settings.validate()?;
        Ok(settings)
    }
}
