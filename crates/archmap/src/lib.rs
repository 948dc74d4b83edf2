//! Archmap - declarative architecture diagrams rendered through Graphviz.
//!
//! Validation, DOT generation, and rendering for architecture diagrams.
//! Diagrams are declared as a semantic model, checked for structural
//! consistency, and handed to the external Graphviz `dot` tool for layout
//! and image output.

pub mod blogsite;
pub mod config;

mod error;
mod export;
mod structure;

pub use archmap_core::{color, identifier, semantic};

pub use error::ArchmapError;
pub use export::OutputFormat;
pub use structure::{ClusterScope, DiagramGraph};

use std::path::{Path, PathBuf};

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;

/// Builder for validating and rendering architecture diagrams.
///
/// This provides an API for processing diagrams through the validation,
/// DOT generation, and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use archmap::{blogsite, config::AppConfig, DiagramBuilder, OutputFormat};
/// use std::path::Path;
///
/// let diagram = blogsite::diagram();
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = DiagramBuilder::new(config);
///
/// // Inspect the generated DOT source
/// let dot = builder.dot_source(&diagram)
///     .expect("Failed to generate DOT");
///
/// // Or render straight to an image file
/// let written = builder
///     .render_to_file(&diagram, Path::new("architecture_diagram"), OutputFormat::Png)
///     .expect("Failed to render");
/// println!("wrote {}", written.display());
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Generate Graphviz DOT source for a semantic diagram.
    ///
    /// This validates the diagram's structure and emits DOT text. The
    /// output is deterministic: the same diagram and configuration always
    /// produce the same bytes.
    ///
    /// # Errors
    ///
    /// Returns `ArchmapError` for duplicate node IDs, relations with
    /// undeclared endpoints, or an invalid configured background color.
    pub fn dot_source(&self, diagram: &semantic::Diagram) -> Result<String, ArchmapError> {
        info!(title = diagram.title(); "Validating diagram structure");
        let graph = structure::DiagramGraph::from_diagram(diagram)?;
        debug!(
            nodes = graph.node_count(),
            relations = graph.relation_count();
            "Structure validated"
        );

        let dot_graph = export::dot::DotBuilder::new(diagram, self.config.style()).build()?;
        let source = export::dot::to_dot_source(&dot_graph);
        trace!(source = source.as_str(); "Generated DOT source");

        Ok(source)
    }

    /// Render a semantic diagram to a file in the given output format.
    ///
    /// The format's extension is appended to `output` unless already
    /// present. [`OutputFormat::Dot`] writes the DOT source verbatim;
    /// the image formats invoke the external `dot` tool.
    ///
    /// Returns the path of the file actually written.
    ///
    /// # Errors
    ///
    /// Returns `ArchmapError` for validation failures, a missing or
    /// failing `dot` executable, or I/O errors writing the file.
    pub fn render_to_file(
        &self,
        diagram: &semantic::Diagram,
        output: &Path,
        format: OutputFormat,
    ) -> Result<PathBuf, ArchmapError> {
        let source = self.dot_source(diagram)?;
        let output = format.apply_extension(output);

        match format {
            OutputFormat::Dot => {
                export::dot::DotFile::new(&output).export_dot(&source)?;
            }
            OutputFormat::Svg | OutputFormat::Png => {
                export::graphviz::GraphvizRenderer::new(&output, format)?.export_dot(&source)?;
            }
        }

        info!(output = output.display().to_string(), format = format.to_string(); "Diagram rendered");
        Ok(output)
    }
}
