//! Driver errors.
//!
//! Every failure the binary reports is a [`CliError`]; `main` prints it as a
//! single `error: ...` line.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use verse_codegen::ConfigError;

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing input file")]
    MissingInput,

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("missing value for `{0}`")]
    MissingValue(&'static str),

    #[error("invalid indent `{0}` (expected a positive number)")]
    InvalidIndent(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: InputError,
    },
}
