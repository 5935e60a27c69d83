/// Line-oriented front end: read an input, split it into lines, hand the
/// lines to one of the ordering procedures.
use std::io;

use crate::bogo::bogosort;
use crate::common::io::{Input, open_input};
use crate::common::io_error_msg;
use crate::context::{Cause, Context};
use crate::miracle::miraclesort;
use crate::slow::slowsort;
use crate::stalin::stalinsort;

/// Algorithms selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Bogosort
    Bogo,
    /// Miraclesort
    Miracle,
    /// Slowsort
    Slow,
    /// Stalinsort
    Stalin,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Interrupted(#[from] Cause),
    #[error("{name}: {}", io_error_msg(.source))]
    Input {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Split `data` into lines on `\n`, dropping one trailing `\r` per line.
/// A final line without terminator is kept; no empty line is invented
/// after a trailing newline. The context is checked once per line.
pub fn split_lines(ctx: &Context, data: &[u8]) -> Result<Vec<Vec<u8>>, Cause> {
    let mut lines = Vec::new();
    let mut start = 0;

    for pos in memchr::memchr_iter(b'\n', data) {
        ctx.check()?;
        lines.push(strip_cr(&data[start..pos]).to_vec());
        start = pos + 1;
    }

    // Handle last line without trailing newline
    if start < data.len() {
        ctx.check()?;
        lines.push(strip_cr(&data[start..]).to_vec());
    }

    Ok(lines)
}

#[inline]
fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Sort `lines` bytewise with `algorithm`.
pub fn sort_lines(
    algorithm: Algorithm,
    ctx: &Context,
    mut lines: Vec<Vec<u8>>,
) -> Result<Vec<Vec<u8>>, Cause> {
    tracing::debug!(?algorithm, lines = lines.len(), "sorting");
    match algorithm {
        Algorithm::Bogo => bogosort(ctx, &mut lines)?,
        Algorithm::Miracle => miraclesort(ctx, &mut lines)?,
        Algorithm::Slow => slowsort(ctx, &mut lines)?,
        Algorithm::Stalin => return stalinsort(ctx, &lines),
    }
    Ok(lines)
}

/// A named input, opened and waiting for its turn to be sorted.
#[derive(Debug)]
pub struct OpenedInput {
    name: String,
    input: Input,
}

impl OpenedInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the input and sort its lines.
    pub fn sort(self, algorithm: Algorithm, ctx: &Context) -> Result<Vec<Vec<u8>>, AppError> {
        let data = self
            .input
            .read_all()
            .map_err(|source| input_error(&self.name, source))?;
        let lines = split_lines(ctx, &data)?;
        Ok(sort_lines(algorithm, ctx, lines)?)
    }
}

/// Open every input (`-` for standard input) before any is read. The first
/// one that cannot be opened is reported.
pub fn open_inputs<S: AsRef<str>>(names: &[S]) -> Result<Vec<OpenedInput>, AppError> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let input = open_input(name).map_err(|source| input_error(name, source))?;
            Ok(OpenedInput {
                name: name.to_string(),
                input,
            })
        })
        .collect()
}

/// Read the input `name` (`-` for standard input) and sort its lines.
pub fn sort_input(algorithm: Algorithm, ctx: &Context, name: &str) -> Result<Vec<Vec<u8>>, AppError> {
    let input = open_input(name).map_err(|source| input_error(name, source))?;
    OpenedInput {
        name: name.to_string(),
        input,
    }
    .sort(algorithm, ctx)
}

fn input_error(name: &str, source: io::Error) -> AppError {
    AppError::Input {
        name: display_name(name).to_string(),
        source,
    }
}

fn display_name(name: &str) -> &str {
    if name == "-" { "standard input" } else { name }
}

/// User-facing text for a failed input.
pub fn failure_message(err: &AppError) -> String {
    match err {
        AppError::Interrupted(Cause::Cancelled) => "sorting cancelled by user".to_string(),
        AppError::Interrupted(Cause::DeadlineExceeded) => {
            "sorting needs more time than expected".to_string()
        }
        AppError::Input { .. } => err.to_string(),
    }
}
