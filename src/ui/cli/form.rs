use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::core::features::WineSample;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::schema::{field_specs, form_schema};

/// Asks for every measurement of a [`WineSample`], one prompt per field.
///
/// Titles, help texts, defaults and floors all come from the sample's JSON
/// Schema; fields the schema gives no default for start from
/// `WineSample::default()`.
pub fn prompt_sample<D: PromptDriver>(driver: &D) -> Result<WineSample> {
    let schema = form_schema::<WineSample>();
    let specs = field_specs(&schema)?;
    let defaults = serde_json::to_value(WineSample::default())?;

    let mut params = Map::new();
    for s in specs {
        let default = s
            .default
            .or_else(|| defaults.get(&s.name).and_then(Value::as_f64))
            .unwrap_or(0.0);
        let help = s.description.as_deref().unwrap_or("");

        let answer = driver
            .ask_f64(&s.title, help, default, s.min, s.max)
            .with_context(|| format!("reading {}", s.title))?;
        params.insert(s.name.clone(), Value::from(answer));
    }

    Ok(serde_json::from_value(Value::Object(params))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::FEATURE_COUNT;
    use crate::testing::{Answer, ScriptedDriver};

    #[test]
    fn accepting_every_default_gives_default_sample() {
        let driver = ScriptedDriver::new(vec![Answer::Default; FEATURE_COUNT]);
        let sample = prompt_sample(&driver).unwrap();

        assert_eq!(sample, WineSample::default());
        assert_eq!(
            driver.asked(),
            vec![
                "Fixed Acidity",
                "Volatile Acidity",
                "Citric Acid",
                "Residual Sugar",
                "Chlorides",
                "Free Sulfur Dioxide",
                "Total Sulfur Dioxide",
                "Density",
                "pH",
                "Sulphates",
                "Alcohol",
            ]
        );
    }

    #[test]
    fn typed_values_land_in_their_fields() {
        let mut answers = vec![Answer::Default; FEATURE_COUNT];
        answers[0] = Answer::Number(8.1);
        answers[10] = Answer::Number(12.4);
        let driver = ScriptedDriver::new(answers);

        let sample = prompt_sample(&driver).unwrap();
        assert_eq!(sample.fixed_acidity, 8.1);
        assert_eq!(sample.alcohol, 12.4);
        assert_eq!(sample.to_feature_vector().as_slice()[10], 12.4);
    }

    #[test]
    fn negative_values_are_refused_until_valid() {
        let mut answers = vec![Answer::Number(-1.0)];
        answers.extend(vec![Answer::Default; FEATURE_COUNT]);
        let driver = ScriptedDriver::new(answers);

        let sample = prompt_sample(&driver).unwrap();
        assert_eq!(sample.fixed_acidity, 7.0);
        assert_eq!(driver.refused(), vec!["Must be ≥ 0"]);
        assert_eq!(driver.remaining(), 0);
    }

    #[test]
    fn running_out_of_answers_is_an_error() {
        let driver = ScriptedDriver::new(vec![Answer::Default; 3]);
        let err = prompt_sample(&driver).unwrap_err();
        assert!(format!("{err:#}").contains("Residual Sugar"));
    }
}
