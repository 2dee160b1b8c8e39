//! `luatok`: print the token stream of a Lua file.

mod args;
mod error;
mod output;

use std::io::{self, Write};
use std::sync::Once;

use args::{Command, Options};
use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=lua_lexer=debug` or `RUST_LOG=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match args::parse(&args) {
        Ok(Command::Lex(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(err) => fail(&err),
    };

    if let Err(err) = run(&options) {
        fail(&err);
    }
}

fn run(options: &Options) -> Result<(), CliError> {
    let name = options.input.display_name();
    let source = options.input.read()?;
    let lexed = lua_lexer::tokenize(&source)?;
    tracing::debug!(
        input = %name,
        tokens = lexed.tokens.len(),
        warnings = lexed.warnings.len(),
        "lexed input"
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if options.json {
        output::write_json(&mut out, &lexed.tokens)?;
    } else {
        output::write_text(&mut out, &name, &lexed.tokens)?;
    }
    out.flush()?;

    if options.warnings {
        output::write_warnings(&mut io::stderr().lock(), &name, &lexed.warnings)?;
    }
    Ok(())
}

fn fail(err: &CliError) -> ! {
    eprintln!("error: {err}");
    if err.is_usage() {
        eprintln!();
        print_usage();
    }
    std::process::exit(err.exit_code());
}

fn print_usage() {
    eprintln!("Usage: luatok [options] <file.lua | ->");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json           Print tokens as a JSON array of {{type, value}} objects");
    eprintln!("  -W, --warnings   Report lexer warnings on stderr");
    eprintln!("  -h, --help       Show this help");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=lua_lexer=debug) for trace output.");
}
