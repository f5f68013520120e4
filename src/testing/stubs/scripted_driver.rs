use crate::ui::cli::drivers::{PromptDriver, range_violation};
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Accept whatever default the prompt offers.
    Default,
    Number(f64),
    Bool(bool),
}

/// Replays canned answers. Numbers failing the prompt's range check are
/// refused like the terminal would, and the next answer is used instead.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
    refused: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Titles of every prompt shown so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn refused(&self) -> Vec<String> {
        self.refused.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(title.to_string());
        match self.answers.borrow_mut().pop_front() {
            Some(a) => Ok(a),
            None => bail!("script exhausted at prompt {title:?}"),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Default => Ok(default),
            Answer::Bool(b) => Ok(b),
            other => bail!("expected a yes/no answer for {title:?}, got {other:?}"),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        loop {
            let x = match self.next(title)? {
                Answer::Default => default,
                Answer::Number(x) => x,
                other => bail!("expected a number for {title:?}, got {other:?}"),
            };
            match range_violation(x, min, max) {
                None => return Ok(x),
                Some(msg) => self.refused.borrow_mut().push(msg),
            }
        }
    }
}
