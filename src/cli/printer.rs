//! Printers: the only place that writes command output.
//!
//! Terminal mode prints one `key: value` line per map entry; json mode prints
//! the map as pretty JSON. Results go to the output stream, errors to the
//! error stream. Write failures (e.g. a closed pipe) are ignored.

use crate::cli::output::{use_color, OutputMap, OutputMode};
use owo_colors::OwoColorize;
use serde_json::{json, Value};
use std::io::{self, Stderr, Stdout, Write};

/// Output operations available to commands.
pub trait Printer {
    /// Print a plain message line.
    fn println(&mut self, message: &str);

    /// Print a map without a trailing newline.
    fn print_map(&mut self, output: &OutputMap);

    /// Print a map followed by a newline.
    fn println_map(&mut self, output: &OutputMap);

    /// Report an error to the user.
    fn error(&mut self, error: &dyn std::error::Error);
}

/// Printer writing to a pair of streams in one output mode.
pub struct StreamPrinter<W: Write, E: Write> {
    mode: OutputMode,
    verbose: bool,
    color: bool,
    error_color: bool,
    out: W,
    err: E,
}

/// Printer bound to the process stdout/stderr.
pub type StdPrinter = StreamPrinter<Stdout, Stderr>;

impl StdPrinter {
    /// Each stream is colored only when it is a terminal.
    pub fn stdio(mode: OutputMode, verbose: bool) -> Self {
        let out = io::stdout();
        let err = io::stderr();
        let color = use_color(&out);
        let error_color = use_color(&err);
        StreamPrinter::new(mode, verbose, out, err)
            .with_color(color)
            .with_error_color(error_color)
    }
}

impl<W: Write, E: Write> StreamPrinter<W, E> {
    pub fn new(mode: OutputMode, verbose: bool, out: W, err: E) -> Self {
        Self {
            mode,
            verbose,
            color: false,
            error_color: false,
            out,
            err,
        }
    }

    /// Color keys on the output stream.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Color error lines on the error stream.
    pub fn with_error_color(mut self, color: bool) -> Self {
        self.error_color = color;
        self
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn format_map(&self, output: &OutputMap) -> String {
        match self.mode {
            OutputMode::Terminal => output
                .iter()
                .map(|(key, value)| {
                    let value = terminal_value(value);
                    if self.color {
                        format!("{}: {}", key.cyan(), value)
                    } else {
                        format!("{}: {}", key, value)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
            OutputMode::Json => {
                serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
            }
        }
    }
}

/// Strings print bare; anything else prints as compact JSON.
fn terminal_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn error_chain(error: &dyn std::error::Error) -> Vec<String> {
    let mut chain = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    chain
}

impl<W: Write, E: Write> Printer for StreamPrinter<W, E> {
    fn println(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    fn print_map(&mut self, output: &OutputMap) {
        if output.is_empty() && self.mode == OutputMode::Terminal {
            return;
        }
        let text = self.format_map(output);
        let _ = write!(self.out, "{}", text);
        let _ = self.out.flush();
    }

    fn println_map(&mut self, output: &OutputMap) {
        if output.is_empty() && self.mode == OutputMode::Terminal {
            return;
        }
        let text = self.format_map(output);
        let _ = writeln!(self.out, "{}", text);
    }

    fn error(&mut self, error: &dyn std::error::Error) {
        let chain = error_chain(error);
        match self.mode {
            OutputMode::Terminal => {
                let head = format!("Error: {}", chain[0]);
                if self.error_color {
                    let _ = writeln!(self.err, "{}", head.red());
                } else {
                    let _ = writeln!(self.err, "{}", head);
                }
                if self.verbose {
                    for cause in &chain[1..] {
                        let _ = writeln!(self.err, "  caused by: {}", cause);
                    }
                }
            }
            OutputMode::Json => {
                let body = if self.verbose && chain.len() > 1 {
                    json!({ "error": chain[0], "causes": &chain[1..] })
                } else {
                    json!({ "error": chain[0] })
                };
                let text =
                    serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string());
                let _ = writeln!(self.err, "{}", text);
            }
        }
    }
}
