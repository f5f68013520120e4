use std::io::{self, Write};

use crate::ui::cli::{Outcome, Portrait};

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

pub const TITLE: &str = "🍷 Wine Quality Prediction";
pub const DESCRIPTION: &str =
    "This app predicts the quality of a wine based on its specifications.";
pub const ABOUT: &str = "This app uses a machine learning model to predict the quality of a wine";
pub const CREATOR: &str = "Andrew O.A.";
pub const LINKS: &str = "GitHub: https://github.com/Andrew-oduola | \
LinkedIn: https://linkedin.com/in/andrew-oduola-django-developer";
pub const PORTRAIT_MISSING: &str = "Profile image not found.";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn header<W: Write>(&self, out: &mut W, portrait: &Portrait) -> io::Result<()> {
        writeln!(out, "{}", self.paint(BOLD, TITLE))?;
        writeln!(out, "{DESCRIPTION}")?;
        writeln!(out)?;
        writeln!(out, "{}", self.paint(GREEN, &format!("Created by {CREATOR}")))?;
        match portrait {
            Portrait::Found { path, .. } => {
                let caption = format!("Portrait: {} ({CREATOR})", path.display());
                writeln!(out, "{}", self.paint(DIM_ITALIC, &caption))?
            }
            Portrait::Missing => writeln!(out, "{}", self.paint(YELLOW, PORTRAIT_MISSING))?,
        }
        writeln!(out)?;
        writeln!(out, "{}", self.paint(BOLD, "About"))?;
        writeln!(out, "{}", self.paint(DIM_ITALIC, ABOUT))?;
        writeln!(out, "{LINKS}")?;
        writeln!(out)
    }

    pub fn outcome<W: Write>(&self, out: &mut W, outcome: &Outcome) -> io::Result<()> {
        let line = match outcome {
            Outcome::Rated(_) if outcome.is_good() => {
                self.paint(&format!("{BOLD}{GREEN}"), &format!("✓ {}", outcome.message()))
            }
            Outcome::Rated(_) => {
                self.paint(&format!("{BOLD}{RED}"), &format!("✗ {}", outcome.message()))
            }
            Outcome::Failed => self.paint(RED, &format!("✗ {}", outcome.message())),
        };
        writeln!(out, "{line}")
    }
}
