//! State diagram export.
//!
//! The table is described as a Graphviz digraph by [`to_dot`] and handed to a
//! [`Renderer`]. The default [`GraphvizRenderer`] pipes the description into
//! the `dot` executable, so exporting needs Graphviz installed; nothing on the
//! trigger path depends on this module.

mod dot;
mod error;
mod renderer;

pub use dot::to_dot;
pub use error::DiagramError;
pub use renderer::{GraphvizRenderer, RenderOptions, Renderer};

use crate::engine::StateMachine;
use std::path::PathBuf;

impl<D> StateMachine<D> {
    /// Render the state diagram with Graphviz using default settings.
    pub fn export(&self, output: impl Into<PathBuf>) -> Result<(), DiagramError> {
        self.export_with(&GraphvizRenderer::default(), &RenderOptions::new(output))
    }

    /// Render the state diagram with Graphviz using explicit settings.
    pub fn export_with_details(
        &self,
        output: impl Into<PathBuf>,
        format: &str,
        layout: &str,
        scale: f64,
        extra: &str,
    ) -> Result<(), DiagramError> {
        let options = RenderOptions::new(output)
            .format(format)
            .layout(layout)
            .scale(scale)
            .extra(extra);
        self.export_with(&GraphvizRenderer::default(), &options)
    }

    /// Render the state diagram with any renderer.
    pub fn export_with<R>(&self, renderer: &R, options: &RenderOptions) -> Result<(), DiagramError>
    where
        R: Renderer + ?Sized,
    {
        renderer.render(&to_dot(self.table()), options)
    }
}
