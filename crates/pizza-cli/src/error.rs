use std::io;

use pizza_core::MenuError;
use thiserror::Error;

/// Process exit codes. Each class of menu-file breakage has its own code so
/// scripts can react to it.
pub mod exit {
    pub const SUCCESS: i32 = 0;
    pub const COULD_NOT_OPEN_FILE: i32 = 1;
    pub const FILE_FORMAT_ERROR: i32 = 2;
    pub const TOO_MANY_TOPPINGS: i32 = 4;
    pub const PIZZA_COUNT_MISMATCH: i32 = 5;
    pub const CANNOT_READ_LINE: i32 = 6;
    pub const USAGE: i32 = 64;
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Could not open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("{file}:{} error[{}]: {source}", source.line(), source.code())]
    Menu {
        file: String,
        #[source]
        source: MenuError,
    },

    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Open { .. } | CliError::Config { .. } => exit::COULD_NOT_OPEN_FILE,
            CliError::Menu { source, .. } => menu_exit_code(source),
            CliError::Usage(_) => exit::USAGE,
        }
    }
}

pub fn menu_exit_code(err: &MenuError) -> i32 {
    match err {
        MenuError::TooManyToppings { .. } => exit::TOO_MANY_TOPPINGS,
        MenuError::PizzaCountMismatch { .. } => exit::PIZZA_COUNT_MISMATCH,
        MenuError::SourceRead { .. } => exit::CANNOT_READ_LINE,
        _ => exit::FILE_FORMAT_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_errors_map_to_distinct_codes() {
        let format = MenuError::MissingBlankLine { line: 2 };
        let toppings = MenuError::TooManyToppings {
            line: 6,
            count: 6,
            max: 5,
        };
        let count = MenuError::PizzaCountMismatch {
            line: 6,
            declared: 2,
            found: 1,
        };
        let read = MenuError::SourceRead {
            line: 3,
            source: io::Error::new(io::ErrorKind::InvalidData, "bad"),
        };
        assert_eq!(menu_exit_code(&format), 2);
        assert_eq!(menu_exit_code(&toppings), 4);
        assert_eq!(menu_exit_code(&count), 5);
        assert_eq!(menu_exit_code(&read), 6);
    }

    #[test]
    fn menu_error_display_points_at_line() {
        let err = CliError::Menu {
            file: "menu.txt".into(),
            source: MenuError::MissingBlankLine { line: 5 },
        };
        assert_eq!(
            err.to_string(),
            "menu.txt:5 error[E006]: missing blank line at line 5"
        );
        assert_eq!(err.exit_code(), exit::FILE_FORMAT_ERROR);
    }
}
