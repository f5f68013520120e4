use strum::EnumMessage;
use strum_macros::{EnumIter, EnumMessage, IntoStaticStr};

/// Quality verdict shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumMessage, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Verdict {
    #[strum(message = "Good Quality Wine")]
    Good,
    #[strum(message = "Bad Quality Wine")]
    Bad,
}

impl Verdict {
    /// Only a raw output of exactly `1` is good. Every other value, including
    /// labels outside `{0, 1}` and NaN, is reported as bad.
    pub fn from_raw(raw: f64) -> Self {
        if raw == 1.0 { Verdict::Good } else { Verdict::Bad }
    }

    pub fn label(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.into())
    }

    pub fn is_good(self) -> bool {
        self == Verdict::Good
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
