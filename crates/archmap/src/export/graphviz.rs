//! Rendering through the external Graphviz `dot` tool.
//!
//! Layout is delegated entirely to Graphviz; this exporter hands the DOT
//! source to the `dot` executable and lets it write the image file.

use std::path::{Path, PathBuf};

use graphviz_rust::cmd::{CommandArg, Format};
use graphviz_rust::exec_dot;
use log::{debug, info};

use crate::export::{Error, Exporter, OutputFormat};

/// Exporter that renders DOT source to an image via the `dot` executable.
pub struct GraphvizRenderer {
    output: PathBuf,
    format: Format,
}

impl GraphvizRenderer {
    /// Creates a renderer targeting `output` in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] for [`OutputFormat::Dot`], which is
    /// plain text and needs no renderer.
    pub fn new(output: &Path, format: OutputFormat) -> Result<Self, Error> {
        let format = match format {
            OutputFormat::Svg => Format::Svg,
            OutputFormat::Png => Format::Png,
            OutputFormat::Dot => {
                return Err(Error::Render(
                    "DOT output is plain text and is written directly".to_string(),
                ));
            }
        };

        Ok(Self {
            output: output.to_path_buf(),
            format,
        })
    }
}

impl Exporter for GraphvizRenderer {
    fn export_dot(&mut self, dot_source: &str) -> Result<(), Error> {
        debug!(output = self.output.display().to_string(); "invoking graphviz");

        exec_dot(
            dot_source.to_string(),
            vec![
                CommandArg::Format(self.format),
                CommandArg::Output(self.output.display().to_string()),
            ],
        )
        .map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => Error::Render(
                "Graphviz 'dot' executable not found; install Graphviz and ensure it is on PATH"
                    .to_string(),
            ),
            _ => Error::Io(err),
        })?;

        info!(output = self.output.display().to_string(); "rendered diagram");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_dot_format_is_rejected() {
        let result = GraphvizRenderer::new(&PathBuf::from("out.dot"), OutputFormat::Dot);
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_image_formats_are_accepted() {
        assert!(GraphvizRenderer::new(&PathBuf::from("out.png"), OutputFormat::Png).is_ok());
        assert!(GraphvizRenderer::new(&PathBuf::from("out.svg"), OutputFormat::Svg).is_ok());
    }
}
