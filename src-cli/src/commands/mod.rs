//! Command handlers.
//!
//! Handlers return an [`Outcome`] instead of printing, so the binary decides
//! where output goes and tests can inspect it.

pub mod check;
pub mod config;
pub mod normalize;

use crate::error::CommandError;
use crate::render::Renderer;
use breachscope_lookup::{CheckReport, Verdict};

/// Exit code when no breaches were found.
pub const EXIT_SAFE: u8 = 0;
/// Exit code for errors, including undetermined verdicts under `--strict`.
pub const EXIT_ERROR: u8 = 1;
/// Exit code when the address appears in at least one breach.
pub const EXIT_EXPOSED: u8 = 2;

/// Which stream an outcome is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
}

/// Rendered result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text to write
    pub output: String,
    /// Destination stream
    pub stream: Stream,
    /// Process exit code
    pub code: u8,
}

impl Outcome {
    /// Successful plain output.
    pub fn stdout(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            stream: Stream::Stdout,
            code: EXIT_SAFE,
        }
    }

    /// Render a verdict and pick the matching exit code.
    pub fn verdict(renderer: Renderer, verdict: &Verdict) -> Self {
        Self::rendered(renderer, renderer.verdict(verdict), verdict)
    }

    /// Render a full report and pick the matching exit code.
    pub fn report(renderer: Renderer, report: &CheckReport) -> Self {
        Self::rendered(renderer, renderer.report(report), &report.verdict)
    }

    /// Render an error. JSON errors go to stdout so scripts can parse them.
    pub fn error(renderer: Renderer, err: &CommandError) -> Self {
        Self {
            output: renderer.error(err),
            stream: if renderer.json {
                Stream::Stdout
            } else {
                Stream::Stderr
            },
            code: EXIT_ERROR,
        }
    }

    fn rendered(renderer: Renderer, output: String, verdict: &Verdict) -> Self {
        let code = exit_code(verdict, renderer.strict);
        let stream = if code == EXIT_ERROR && !renderer.json {
            Stream::Stderr
        } else {
            Stream::Stdout
        };
        Self {
            output,
            stream,
            code,
        }
    }

    /// Write the output to its stream.
    pub fn emit(&self) {
        match self.stream {
            Stream::Stdout => print!("{}", self.output),
            Stream::Stderr => eprint!("{}", self.output),
        }
    }
}

/// Exit code for a verdict.
#[must_use]
pub fn exit_code(verdict: &Verdict, strict: bool) -> u8 {
    match verdict {
        Verdict::Safe => EXIT_SAFE,
        Verdict::Exposed { .. } => EXIT_EXPOSED,
        Verdict::Undetermined { .. } if strict => EXIT_ERROR,
        Verdict::Undetermined { .. } => EXIT_SAFE,
    }
}
