//! Error types for the menu core.
//!
//! Every failure is a typed enum variant. Loader errors carry the 1-based
//! line number at which they were detected so callers can point operators
//! at the offending line of the menu file.

use std::io;

use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Registry errors
// ---------------------------------------------------------------------------

/// Failures raised by [`crate::topping::ToppingRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A topping was defined without a name, or with an empty one.
    #[error("topping name cannot be missing or empty")]
    InvalidName,

    /// A lookup was attempted without a name.
    #[error("topping name cannot be missing")]
    NullName,

    /// A topping with the same (case-insensitive) name already exists.
    #[error("topping already exists with the name {name}")]
    Duplicate { name: String },

    /// No topping with the given (case-insensitive) name exists.
    #[error("no topping exists with the name {name}")]
    Unknown { name: String },
}

// ---------------------------------------------------------------------------
// Pizza errors
// ---------------------------------------------------------------------------

/// Failures raised while building or modifying a pizza.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PizzaError {
    #[error("{count} toppings exceeds the maximum of {max}")]
    TooManyToppings { count: usize, max: usize },

    #[error("pizza name cannot be blank")]
    InvalidName,
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("menu index {index} is out of bounds for {len} items")]
    IndexOutOfBounds { index: usize, len: usize },
}

// ---------------------------------------------------------------------------
// Loader errors
// ---------------------------------------------------------------------------

/// Broad class of a loader failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Wrong header name or spacing, missing blank separators, unusable source.
    Structural,
    /// Bad topping declarations or references.
    Vocabulary,
    /// Too many toppings on a pizza, or a declared count that does not match.
    Cardinality,
    /// The underlying line source failed.
    Io,
}

/// A terminal failure while loading a menu file.
///
/// Every variant carries the 1-based line at which it was detected. For
/// [`MenuError::PizzaCountMismatch`] that is the last line read, since the
/// count can only be checked once the whole source is consumed.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu source is missing at line {line}")]
    NullSource { line: usize },

    #[error("menu source is empty at line {line}")]
    EmptySource { line: usize },

    #[error("name on the first line is not 'PizzaMenu' at line {line}")]
    NameMismatch { line: usize },

    #[error("space is missing after the menu name at line {line}")]
    MissingSpace { line: usize },

    #[error("number of pizzas '{value}' cannot be parsed at line {line}")]
    CountParse { line: usize, value: String },

    #[error("missing blank line at line {line}")]
    MissingBlankLine { line: usize },

    #[error("topping line contains an invalid topping name at line {line}: {source}")]
    InvalidToppingName {
        line: usize,
        #[source]
        source: RegistryError,
    },

    /// A pizza line names a topping that no topping line declared, or its
    /// bracketed list is malformed.
    #[error("pizza line references unknown topping '{reference}' at line {line}")]
    UnknownToppingReference { line: usize, reference: String },

    #[error("pizza line has a blank name at line {line}")]
    InvalidPizzaName { line: usize },

    #[error("pizza has {count} toppings, more than the maximum of {max}, at line {line}")]
    TooManyToppings { line: usize, count: usize, max: usize },

    #[error("menu declares {declared} pizzas but contains {found} pizza lines (read {line} lines)")]
    PizzaCountMismatch {
        line: usize,
        declared: usize,
        found: usize,
    },

    #[error("cannot read line {line}: {source}")]
    SourceRead {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl MenuError {
    /// The 1-based line at which this error was detected.
    pub fn line(&self) -> usize {
        match self {
            MenuError::NullSource { line }
            | MenuError::EmptySource { line }
            | MenuError::NameMismatch { line }
            | MenuError::MissingSpace { line }
            | MenuError::CountParse { line, .. }
            | MenuError::MissingBlankLine { line }
            | MenuError::InvalidToppingName { line, .. }
            | MenuError::UnknownToppingReference { line, .. }
            | MenuError::InvalidPizzaName { line }
            | MenuError::TooManyToppings { line, .. }
            | MenuError::PizzaCountMismatch { line, .. }
            | MenuError::SourceRead { line, .. } => *line,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::NullSource { .. }
            | MenuError::EmptySource { .. }
            | MenuError::NameMismatch { .. }
            | MenuError::MissingSpace { .. }
            | MenuError::CountParse { .. }
            | MenuError::MissingBlankLine { .. }
            | MenuError::InvalidPizzaName { .. } => ErrorCategory::Structural,
            MenuError::InvalidToppingName { .. } | MenuError::UnknownToppingReference { .. } => {
                ErrorCategory::Vocabulary
            }
            MenuError::TooManyToppings { .. } | MenuError::PizzaCountMismatch { .. } => {
                ErrorCategory::Cardinality
            }
            MenuError::SourceRead { .. } => ErrorCategory::Io,
        }
    }

    /// Stable diagnostic code for this failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            MenuError::NullSource { .. } => "E001",
            MenuError::EmptySource { .. } => "E002",
            MenuError::NameMismatch { .. } => "E003",
            MenuError::MissingSpace { .. } => "E004",
            MenuError::CountParse { .. } => "E005",
            MenuError::MissingBlankLine { .. } => "E006",
            MenuError::InvalidToppingName { .. } => "E007",
            MenuError::UnknownToppingReference { .. } => "E008",
            MenuError::InvalidPizzaName { .. } => "E009",
            MenuError::TooManyToppings { .. } => "E010",
            MenuError::PizzaCountMismatch { .. } => "E011",
            MenuError::SourceRead { .. } => "E012",
        }
    }
}
