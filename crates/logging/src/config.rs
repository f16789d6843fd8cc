//! crates/logging/src/config.rs
//! Resolved logger configuration and the fork-time merge rules.

use std::num::NonZeroUsize;

use history::{Category, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::options::LoggerOptions;

/// ANSI escape for red text, the default [`Category::Error`] color.
pub const RED: &str = "\x1b[31m";
/// ANSI escape for cyan text, the default [`Category::Info`] color.
pub const CYAN: &str = "\x1b[36m";
/// ANSI escape for yellow text, the default [`Category::Plain`] color.
pub const YELLOW: &str = "\x1b[33m";

/// Flags deciding when records are printed and which optional segments a
/// renderer includes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PrintPolicy {
    /// Render and write each record as soon as it is emitted.
    pub print_immediately: bool,
    /// Include the creation time.
    pub include_timestamp: bool,
    /// Include the prefix chain.
    pub include_prefixes: bool,
    /// Include the payload when one is present.
    pub include_payload: bool,
}

impl Default for PrintPolicy {
    fn default() -> Self {
        Self {
            print_immediately: true,
            include_timestamp: true,
            include_prefixes: true,
            include_payload: true,
        }
    }
}

/// Color token for each [`Category`].
///
/// Tokens are opaque text written in front of a rendered line, typically ANSI
/// escape sequences. Every category always has a token.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ColorMap {
    plain: String,
    info: String,
    error: String,
}

impl ColorMap {
    /// Builds a map from explicit tokens.
    #[must_use]
    pub fn new(
        plain: impl Into<String>,
        info: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            plain: plain.into(),
            info: info.into(),
            error: error.into(),
        }
    }

    /// A map with an empty token for every category.
    #[must_use]
    pub fn uncolored() -> Self {
        Self::new("", "", "")
    }

    /// Token for `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Plain => &self.plain,
            Category::Info => &self.info,
            Category::Error => &self.error,
        }
    }

    /// Replaces the token for `category`.
    pub fn set(&mut self, category: Category, token: impl Into<String>) {
        let slot = match category {
            Category::Plain => &mut self.plain,
            Category::Info => &mut self.info,
            Category::Error => &mut self.error,
        };
        *slot = token.into();
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::new(YELLOW, CYAN, RED)
    }
}

/// Fully resolved configuration of one logger.
///
/// Every field has a concrete value; defaults are applied when the logger is
/// built. A forked logger receives its own copy, so later changes to either
/// side never reach the other.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoggerConfig {
    /// Print policy flags.
    pub policy: PrintPolicy,
    /// Capacity of the logger's own history buffer.
    pub capacity: NonZeroUsize,
    /// Per-category color tokens.
    pub colors: ColorMap,
    /// Prefix chain stamped on every record, outermost first.
    pub prefixes: Vec<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            policy: PrintPolicy::default(),
            capacity: NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            colors: ColorMap::default(),
            prefixes: Vec::new(),
        }
    }
}

impl LoggerConfig {
    /// Resolves `options` against the defaults.
    pub fn resolve(options: &LoggerOptions) -> Result<Self, ConfigError> {
        Self::default().merge(options)
    }

    /// Derives a child configuration from `self` and the explicitly provided
    /// `options`.
    ///
    /// Each option that is set replaces the inherited value and each unset
    /// option keeps it. Prefixes are the exception: the child's chain is the
    /// replacement list when one is given, otherwise the inherited chain, and
    /// in both cases the extra prefixes are appended after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{LoggerConfig, LoggerOptions};
    ///
    /// let parent = LoggerConfig::resolve(&LoggerOptions::new().prefix("a")).unwrap();
    /// let child = parent.merge(&LoggerOptions::new().extra_prefix("b")).unwrap();
    ///
    /// assert_eq!(child.prefixes, ["a", "b"]);
    /// assert_eq!(parent.prefixes, ["a"]);
    /// ```
    pub fn merge(&self, options: &LoggerOptions) -> Result<Self, ConfigError> {
        let capacity = match options.capacity {
            Some(requested) => NonZeroUsize::new(requested).ok_or(ConfigError::ZeroCapacity)?,
            None => self.capacity,
        };

        let policy = PrintPolicy {
            print_immediately: options
                .print_immediately
                .unwrap_or(self.policy.print_immediately),
            include_timestamp: options
                .include_timestamp
                .unwrap_or(self.policy.include_timestamp),
            include_prefixes: options
                .include_prefixes
                .unwrap_or(self.policy.include_prefixes),
            include_payload: options
                .include_payload
                .unwrap_or(self.policy.include_payload),
        };

        let mut colors = self.colors.clone();
        for (category, token) in &options.colors {
            colors.set(*category, token.as_str());
        }

        let mut prefixes = options
            .prefixes
            .clone()
            .unwrap_or_else(|| self.prefixes.clone());
        prefixes.extend(options.extra_prefixes.iter().cloned());

        Ok(Self {
            policy,
            capacity,
            colors,
            prefixes,
        })
    }
}
