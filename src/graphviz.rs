// SPDX-License-Identifier: MIT

//! Graphviz collaborator: feeds DOT text to the system `dot` binary over a
//! pipe and collects the encoded image bytes. The call blocks until the
//! engine exits; the child process is reaped on every exit path.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Layout engine binary looked up on `PATH`.
const DOT_PROGRAM: &str = "dot";

/// Output encodings offered in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Jpg,
    Png,
    Svg,
}

impl OutputFormat {
    /// Selection order shown in the format combo box.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Jpg, OutputFormat::Png, OutputFormat::Svg];

    /// Lowercase format name, used both as the Graphviz `-T` value and as
    /// the file extension of saved images.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    /// Display name for combo box entries and save dialog filters.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Jpg => "JPG",
            OutputFormat::Png => "PNG",
            OutputFormat::Svg => "SVG",
        }
    }

    /// True when the encoding is a vector format.
    pub fn is_vector(self) -> bool {
        matches!(self, OutputFormat::Svg)
    }
}

/// Render DOT source through the system `dot` binary into `format`.
pub fn render(dot_source: &str, format: OutputFormat) -> Result<Vec<u8>> {
    render_with(DOT_PROGRAM, dot_source, format)
}

fn render_with(program: &str, dot_source: &str, format: OutputFormat) -> Result<Vec<u8>> {
    let mut child = Command::new(program)
        .arg(format!("-T{}", format.extension()))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| {
            Error::RenderFailure(format!(
                "could not start `{program}`: {err}. Is Graphviz installed?"
            ))
        })?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::RenderFailure("no stdin handle for the layout engine".into()))?;
    let write_result = stdin.write_all(dot_source.as_bytes());
    // Closing stdin signals EOF so the engine starts laying out.
    drop(stdin);

    let output = child
        .wait_with_output()
        .map_err(|err| Error::RenderFailure(format!("failed to wait for `{program}`: {err}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::RenderFailure(format!(
            "`{program}` exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    write_result.map_err(|err| {
        Error::RenderFailure(format!("failed to stream DOT to `{program}`: {err}"))
    })?;

    if output.stdout.is_empty() {
        return Err(Error::RenderFailure(format!(
            "`{program}` produced no output"
        )));
    }
    Ok(output.stdout)
}
