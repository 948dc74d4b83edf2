//! CLI logic for the archmap diagram tool.
//!
//! This module contains the core CLI logic for the archmap diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use archmap::{ArchmapError, DiagramBuilder, OutputFormat, blogsite};

/// Run the archmap CLI application
///
/// This function renders the built-in architecture diagram to the
/// requested output file and format.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ArchmapError` for:
/// - An unknown output format
/// - Configuration loading errors
/// - Diagram validation errors
/// - Rendering errors, including a missing Graphviz installation
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), ArchmapError> {
    info!(
        output_path = args.output,
        format = args.format;
        "Rendering architecture diagram"
    );

    let format: OutputFormat = args.format.parse().map_err(ArchmapError::Config)?;

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Render the built-in topology using the DiagramBuilder API
    let builder = DiagramBuilder::new(app_config);
    let diagram = blogsite::diagram();
    let written = builder.render_to_file(&diagram, args.output.as_ref(), format)?;

    info!(output_file = written.display().to_string(); "Diagram exported successfully");

    Ok(())
}
