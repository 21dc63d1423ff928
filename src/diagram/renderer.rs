//! External renderers that turn a DOT description into an image.

use crate::diagram::error::DiagramError;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::panic;
use std::process::{Command, Stdio};
use std::thread;

/// Where and how to render a diagram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Output file written by the renderer
    pub output: PathBuf,
    /// Image format (`png`, `svg`, `pdf`, ...)
    pub format: String,
    /// Layout engine (`dot`, `neato`, `circo`, ...)
    pub layout: String,
    /// Input scale in points per inch; fractions are allowed
    pub scale: f64,
    /// Extra renderer flags, separated by whitespace
    pub extra: String,
}

impl RenderOptions {
    /// Default settings writing to `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    /// Graphviz command line arguments for these options.
    pub fn arguments(&self) -> Vec<OsString> {
        let mut output = OsString::from("-o");
        output.push(&self.output);

        let mut args = vec![
            output,
            format!("-T{}", self.format).into(),
            format!("-K{}", self.layout).into(),
            format!("-s{}", self.scale).into(),
        ];
        args.extend(self.extra.split_whitespace().map(OsString::from));
        args
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("state_machine.png"),
            format: "png".to_string(),
            layout: "dot".to_string(),
            scale: 72.0,
            extra: "-Gsize=10,5 -Gdpi=200".to_string(),
        }
    }
}

/// Something that can turn a DOT graph into a file.
pub trait Renderer {
    fn render(&self, graph: &str, options: &RenderOptions) -> Result<(), DiagramError>;
}

impl<F> Renderer for F
where
    F: Fn(&str, &RenderOptions) -> Result<(), DiagramError>,
{
    fn render(&self, graph: &str, options: &RenderOptions) -> Result<(), DiagramError> {
        self(graph, options)
    }
}

/// Runs Graphviz (or a compatible program) and feeds the graph on stdin.
///
/// The renderer's output file is never read back or validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphvizRenderer {
    program: PathBuf,
    leading_args: Vec<OsString>,
}

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self::with_program("dot")
    }

    /// Use a different executable with Graphviz-compatible arguments.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Argument placed before the Graphviz flags, e.g. a script for a wrapper.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.leading_args.push(arg.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, graph: &str, options: &RenderOptions) -> Result<(), DiagramError> {
        tracing::debug!(
            program = %self.program.display(),
            output = %options.output.display(),
            format = %options.format,
            "renderer.spawn"
        );

        let mut child = Command::new(&self.program)
            .args(&self.leading_args)
            .args(options.arguments())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| DiagramError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        // Stdin is written on its own thread while stdout and stderr drain.
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(graph.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|payload| panic::resume_unwind(payload));
            (written, output)
        });
        let output = output.map_err(DiagramError::Wait)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!(status = %output.status, stderr = %stderr, "renderer.failed");
            return Err(DiagramError::Failed {
                status: output.status,
                stderr,
            });
        }
        written.map_err(DiagramError::Stdin)?;

        Ok(())
    }
}
