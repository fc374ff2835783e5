use std::io::{self, BufRead, Write};

use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::{debug, info};

use crate::{
    errors::errors::{ErrorImpl, Result},
    lexer::lexer::{scan_detailed, Scanned},
};

pub const DEFAULT_PROMPT: &str = "> ";

/// How a scanned line is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `[Number("1"), Add("+"), Number("2")]`, one line per input line
    #[default]
    List,
    /// `Kind (text)`, one line per token
    Lines,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplOptions {
    pub prompt: String,
    pub format: OutputFormat,
    pub show_skipped: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        ReplOptions {
            prompt: String::from(DEFAULT_PROMPT),
            format: OutputFormat::default(),
            show_skipped: false,
        }
    }
}

/// Renders the tokens of one line, plus a caret line under skipped
/// characters when `show_skipped` is set.
///
/// ```text
/// [Number("1"), Add("+"), Number("2")]
///   | 1 + 2 $
///   |       ^
/// ```
pub fn render(source: &str, scanned: &Scanned, options: &ReplOptions) -> String {
    let mut out = String::new();

    match options.format {
        OutputFormat::List => {
            let tokens = scanned
                .tokens
                .iter()
                .map(|token| token.to_string())
                .collect::<Vec<_>>();
            out.push_str(&format!("[{}]\n", tokens.join(", ")));
        }
        OutputFormat::Lines => {
            for token in &scanned.tokens {
                out.push_str(&token.debug());
                out.push('\n');
            }
        }
    }

    if options.show_skipped {
        let columns = scanned
            .skipped
            .iter()
            .filter(|span| !span.slice(source).trim().is_empty())
            .map(|span| span.column_in(source))
            .collect::<Vec<_>>();

        if let Some(last) = columns.last() {
            // Tabs are copied so the carets line up with the echoed source.
            let carets = source
                .chars()
                .take(last + 1)
                .enumerate()
                .map(|(column, ch)| match ch {
                    _ if columns.contains(&column) => '^',
                    '\t' => '\t',
                    _ => ' ',
                })
                .collect::<String>();

            out.push_str(&format!("  | {}\n", source));
            out.push_str(&format!("  | {}\n", carets));
        }
    }

    out
}

fn process_line<W: Write>(line: &str, output: &mut W, options: &ReplOptions) -> Result<()> {
    let scanned = scan_detailed(line);
    output
        .write_all(render(line, &scanned, options).as_bytes())
        .map_err(output_failed)?;
    Ok(())
}

fn output_failed(error: io::Error) -> ErrorImpl {
    ErrorImpl::OutputFailed {
        message: error.to_string(),
    }
}

/// Scans every line of a script or pipe until end of input.
///
/// `name` only shows up in error messages. Returns the number of lines
/// scanned.
pub fn run_lines<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    name: &str,
    options: &ReplOptions,
) -> Result<usize> {
    info!(input = name, "scanning lines");
    let mut count = 0;

    for line in input.lines() {
        let line = line.map_err(|error| ErrorImpl::InputUnreadable {
            path: name.to_string(),
            message: error.to_string(),
        })?;

        process_line(&line, &mut output, options)?;
        count += 1;
    }

    output.flush().map_err(output_failed)?;
    debug!(lines = count, "end of input");
    Ok(count)
}

/// Interactive prompt loop backed by a line editor.
pub struct Repl {
    editor: DefaultEditor,
    options: ReplOptions,
}

impl Repl {
    pub fn new(options: ReplOptions) -> Result<Self> {
        let editor = DefaultEditor::new()?;
        Ok(Repl { editor, options })
    }

    /// Runs until end of input. Ctrl-C drops the current line only.
    pub fn run(&mut self) -> Result<usize> {
        info!("starting interactive scanner");
        let mut count = 0;

        loop {
            match self.editor.readline(&self.options.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str())?;
                    }

                    let mut stdout = io::stdout().lock();
                    process_line(&line, &mut stdout, &self.options)?;
                    stdout.flush().map_err(output_failed)?;
                    count += 1;
                }
                Err(ReadlineError::Interrupted) => {
                    debug!("interrupted, line discarded");
                }
                Err(ReadlineError::Eof) => {
                    debug!(lines = count, "end of input");
                    break;
                }
                Err(error) => return Err(error.into()),
            }
        }

        Ok(count)
    }
}
