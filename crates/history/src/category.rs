//! crates/history/src/category.rs
//! Record categories and their textual names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a log record.
///
/// The set is closed: every category has a default sink and a default color,
/// and lookups keyed by category can never miss.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Ordinary output.
    #[serde(alias = "LOG")]
    Plain,
    /// Informational output.
    Info,
    /// Error output.
    Error,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 3] = [Self::Plain, Self::Info, Self::Error];

    /// Returns the upper-case label used in rendered and serialized output.
    ///
    /// # Examples
    ///
    /// ```
    /// use history::Category;
    ///
    /// assert_eq!(Category::Plain.as_str(), "PLAIN");
    /// assert_eq!(Category::Info.as_str(), "INFO");
    /// assert_eq!(Category::Error.as_str(), "ERROR");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "PLAIN",
            Self::Info => "INFO",
            Self::Error => "ERROR",
        }
    }

    /// Reports whether records of this category go to the error stream by default.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Category`] from an unrecognised string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised log category: {input}")]
pub struct ParseCategoryError {
    input: String,
}

impl ParseCategoryError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_uppercase().as_str() {
            "PLAIN" | "LOG" => Ok(Self::Plain),
            "INFO" => Ok(Self::Info),
            "ERROR" => Ok(Self::Error),
            _ => Err(ParseCategoryError {
                input: input.to_owned(),
            }),
        }
    }
}
