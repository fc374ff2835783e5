use std::{
    fs::File,
    io::{self, BufReader, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use arithlex::{
    errors::errors::{Error, ErrorImpl, ErrorTip, Result},
    lexer::lexer::scan_detailed,
    repl::repl::{render, run_lines, OutputFormat, Repl, ReplOptions, DEFAULT_PROMPT},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Split arithmetic expressions into tokens, one line at a time.
#[derive(Parser, Debug)]
#[command(name = "arithlex", version)]
struct Cli {
    /// File whose lines are scanned one by one
    file: Option<PathBuf>,

    /// Scan a single expression and exit
    #[arg(short = 'e', long = "eval", value_name = "EXPR")]
    eval: Option<String>,

    /// Prompt shown by the interactive loop
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// How tokens are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::List)]
    format: OutputFormat,

    /// Mark characters that produced no token
    #[arg(long)]
    show_skipped: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> ReplOptions {
        ReplOptions {
            prompt: self.prompt.clone(),
            format: self.format,
            show_skipped: self.show_skipped,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "arithlex=debug" } else { "arithlex=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options();

    if let Some(expr) = &cli.eval {
        let scanned = scan_detailed(expr);
        io::stdout()
            .lock()
            .write_all(render(expr, &scanned, &options).as_bytes())
            .map_err(|error| ErrorImpl::OutputFailed {
                message: error.to_string(),
            })?;
        return Ok(());
    }

    if let Some(path) = &cli.file {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|error| ErrorImpl::InputUnreadable {
            path: name.clone(),
            message: error.to_string(),
        })?;
        run_lines(BufReader::new(file), io::stdout().lock(), &name, &options)?;
        return Ok(());
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        run_lines(stdin.lock(), io::stdout().lock(), "<stdin>", &options)?;
        return Ok(());
    }

    Repl::new(options)?.run()?;
    Ok(())
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error);
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "exiting after failure");
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}
