use crate::core::features::FeatureVector;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "wine_model.json";
pub const DEFAULT_PORTRAIT_PATH: &str = "prof.jpeg";
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// The form's prompts draw on stderr, so it stays silent unless asked.
pub const FORM_LOG_FILTER: &str = "off";

#[derive(Debug, Parser)]
#[command(name = "vinometer")]
#[command(version, about = "Rate wine quality with a pre-trained classifier", long_about = None)]
pub struct AppConfig {
    /// Serialized classifier, read once on the first prediction
    #[arg(long = "model", env = "VINOMETER_MODEL", default_value = DEFAULT_MODEL_PATH)]
    pub model_path: PathBuf,

    /// Optional portrait shown in the "About" block
    #[arg(long = "portrait", env = "VINOMETER_PORTRAIT", default_value = DEFAULT_PORTRAIT_PATH)]
    pub portrait_path: PathBuf,

    /// Log filter, e.g. `warn` or `vinometer=debug` [default: off for the form, warn otherwise]
    #[arg(long, env = "VINOMETER_LOG")]
    pub log_level: Option<String>,

    /// Disable ANSI colors in the output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fill in the measurements interactively (default)
    Form,
    /// Rate one wine from comma separated measurements
    Predict {
        /// fixed_acidity, volatile_acidity, citric_acid, residual_sugar, chlorides,
        /// free_sulfur_dioxide, total_sulfur_dioxide, density, pH, sulphates, alcohol
        #[arg(long, allow_hyphen_values = true)]
        features: FeatureVector,
    },
    /// Print the JSON Schema of the model file
    Schema,
}

impl AppConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Form)
    }

    pub fn log_filter(&self) -> &str {
        match (&self.log_level, self.command()) {
            (Some(level), _) => level.as_str(),
            (None, Command::Form) => FORM_LOG_FILTER,
            (None, _) => DEFAULT_LOG_FILTER,
        }
    }
}
