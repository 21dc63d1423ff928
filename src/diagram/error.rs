//! Diagram rendering errors.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// The external renderer could not produce the diagram.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// The renderer process could not be started
    #[error("failed to start renderer '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Writing the graph to the renderer's stdin failed
    #[error("failed to send graph to renderer: {0}")]
    Stdin(#[source] io::Error),

    /// Waiting for the renderer to finish failed
    #[error("failed to wait for renderer: {0}")]
    Wait(#[source] io::Error),

    /// The renderer ran but reported failure
    #[error("renderer exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}
