//! CLI error type.

use std::io;
use std::path::PathBuf;

use lua_lexer::TokenizeError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("missing input file (use `-` for stdin)")]
    MissingInput,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("cannot read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error("cannot serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

impl CliError {
    /// Process exit code: 2 for usage errors, 1 for everything else.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::MissingInput | Self::UnexpectedArgument(_) | Self::UnknownOption(_) => 2,
            Self::Read { .. }
            | Self::Stdin(_)
            | Self::Tokenize(_)
            | Self::Json(_)
            | Self::Write(_) => 1,
        }
    }

    pub(crate) fn is_usage(&self) -> bool {
        self.exit_code() == 2
    }
}
