use crate::ui::cli::drivers::{PromptDriver, range_violation};
use anyhow::Result;
use inquire::{Confirm, CustomType, validator::Validation};

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let q = CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_error_message("Please type a number")
            .with_validator(move |x: &f64| {
                Ok(match range_violation(*x, min, max) {
                    None => Validation::Valid,
                    Some(msg) => Validation::Invalid(msg.into()),
                })
            });

        Ok(q.prompt()?)
    }
}
