use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a completed session has been billed. Persisted as the literal
/// strings `"Yes"` / `"No"` for compatibility with existing data files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Invoiced {
    #[serde(rename = "Yes")]
    Yes,
    #[default]
    #[serde(rename = "No")]
    No,
}

impl Invoiced {
    pub fn as_str(&self) -> &'static str {
        match self {
            Invoiced::Yes => "Yes",
            Invoiced::No => "No",
        }
    }

    /// Lenient parse for CSV import and CLI flags; anything that is not an
    /// affirmative reads as `No`.
    pub fn from_str_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Invoiced::Yes,
            _ => Invoiced::No,
        }
    }

    pub fn is_invoiced(&self) -> bool {
        matches!(self, Invoiced::Yes)
    }
}

impl fmt::Display for Invoiced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
