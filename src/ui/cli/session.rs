use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::prediction::Predictor;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::form::prompt_sample;
use crate::ui::cli::{Outcome, Renderer};

/// Interactive loop: fill in the form, press "Predict", read the verdict,
/// repeat until the user is done.
pub struct FormSession<'a, D: PromptDriver> {
    driver: &'a D,
    predictor: &'a Predictor,
    renderer: Renderer,
}

impl<'a, D: PromptDriver> FormSession<'a, D> {
    pub fn new(driver: &'a D, predictor: &'a Predictor, renderer: Renderer) -> Self {
        Self {
            driver,
            predictor,
            renderer,
        }
    }

    /// One form submission. `None` when the user declines to predict.
    pub fn run_once<W: Write>(&self, out: &mut W) -> Result<Option<Outcome>> {
        let sample = prompt_sample(self.driver)?;

        if !self
            .driver
            .ask_bool("Predict", "Rate the wine with these measurements", true)?
        {
            debug!("prediction skipped");
            return Ok(None);
        }

        let outcome = Outcome::evaluate(self.predictor, &sample.to_feature_vector());
        self.renderer.outcome(out, &outcome)?;
        Ok(Some(outcome))
    }

    /// Runs until the user stops; returns every outcome shown.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<Outcome>> {
        let mut shown = Vec::new();
        loop {
            if let Some(outcome) = self.run_once(out)? {
                shown.push(outcome);
            }
            writeln!(out)?;
            if !self.driver.ask_bool("Rate another wine?", "", false)? {
                return Ok(shown);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::FEATURE_COUNT;
    use crate::model::ModelLoader;
    use crate::prediction::Verdict;
    use crate::testing::{
        Answer, CountingSource, ScriptedDriver, constant_tree_json, logistic_wine_model_json,
    };
    use std::sync::Arc;

    fn predictor(json: Option<String>) -> (Arc<CountingSource>, Predictor) {
        let source = Arc::new(CountingSource::new(json.map(String::into_bytes)));
        let loader = ModelLoader::new(Box::new(Arc::clone(&source)));
        (source, Predictor::new(Arc::new(loader)))
    }

    fn round(alcohol: Answer, predict: bool, again: bool) -> Vec<Answer> {
        let mut answers = vec![Answer::Default; FEATURE_COUNT - 1];
        answers.push(alcohol);
        answers.push(Answer::Bool(predict));
        answers.push(Answer::Bool(again));
        answers
    }

    fn run(driver: &ScriptedDriver, predictor: &Predictor) -> (Vec<Outcome>, String) {
        let session = FormSession::new(driver, predictor, Renderer::new(false));
        let mut buf = Vec::new();
        let shown = session.run(&mut buf).unwrap();
        (shown, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn rates_several_wines_with_one_model_read() {
        let (source, predictor) = predictor(Some(logistic_wine_model_json()));
        let mut answers = round(Answer::Default, true, true);
        answers.extend(round(Answer::Number(13.0), true, false));
        let driver = ScriptedDriver::new(answers);

        let (shown, text) = run(&driver, &predictor);

        assert_eq!(
            shown,
            vec![Outcome::Rated(Verdict::Bad), Outcome::Rated(Verdict::Good)]
        );
        assert!(text.contains("✗ Bad Quality Wine"));
        assert!(text.contains("✓ Good Quality Wine"));
        assert_eq!(source.reads(), 1);
        assert_eq!(driver.remaining(), 0);
    }

    #[test]
    fn declining_predict_loads_nothing() {
        let (source, predictor) = predictor(Some(logistic_wine_model_json()));
        let driver = ScriptedDriver::new(round(Answer::Default, false, false));

        let (shown, text) = run(&driver, &predictor);

        assert!(shown.is_empty());
        assert!(!text.contains("Quality Wine"));
        assert_eq!(source.reads(), 0);
    }

    #[test]
    fn failure_keeps_the_session_alive() {
        let (source, predictor) = predictor(None);
        let mut answers = round(Answer::Default, true, true);
        answers.extend(round(Answer::Default, true, false));
        let driver = ScriptedDriver::new(answers);

        let (shown, text) = run(&driver, &predictor);

        assert_eq!(shown, vec![Outcome::Failed, Outcome::Failed]);
        assert_eq!(
            text.matches("An error occurred during prediction").count(),
            2
        );
        // the missing file is looked for again on every attempt
        assert_eq!(source.reads(), 2);
    }

    #[test]
    fn out_of_range_model_output_reads_as_bad() {
        let (_, predictor) = predictor(Some(constant_tree_json(2.0)));
        let driver = ScriptedDriver::new(round(Answer::Default, true, false));

        let (shown, _) = run(&driver, &predictor);
        assert_eq!(shown, vec![Outcome::Rated(Verdict::Bad)]);
    }
}
