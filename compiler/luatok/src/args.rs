//! Command-line argument parsing.
//!
//! ```text
//! luatok [--json] [--warnings] <file | ->
//! ```

use std::io::Read;
use std::path::PathBuf;

use crate::error::CliError;

/// What the user asked for.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Help,
    Lex(Options),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Options {
    /// Print tokens as a JSON array instead of text.
    pub json: bool,
    /// Report lexer warnings on stderr.
    pub warnings: bool,
    pub input: Input,
}

/// Where the source comes from.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Name used in output headers and warnings.
    pub(crate) fn display_name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_owned(),
            Input::File(path) => path.display().to_string(),
        }
    }

    pub(crate) fn read(&self) -> Result<String, CliError> {
        match self {
            Input::Stdin => {
                let mut source = String::new();
                std::io::stdin()
                    .read_to_string(&mut source)
                    .map_err(CliError::Stdin)?;
                Ok(source)
            }
            Input::File(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Parse arguments, not including the program name.
pub(crate) fn parse<S: AsRef<str>>(args: &[S]) -> Result<Command, CliError> {
    let mut json = false;
    let mut warnings = false;
    let mut input = None;

    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "--json" => json = true,
            "--warnings" | "-W" => warnings = true,
            "-" if input.is_none() => input = Some(Input::Stdin),
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(CliError::UnknownOption(arg.to_owned()));
            }
            _ if input.is_none() => input = Some(Input::File(PathBuf::from(arg))),
            _ => return Err(CliError::UnexpectedArgument(arg.to_owned())),
        }
    }

    let input = input.ok_or(CliError::MissingInput)?;
    Ok(Command::Lex(Options {
        json,
        warnings,
        input,
    }))
}
