pub mod dot;
pub mod graphviz;

use std::path::Path;
use std::str::FromStr;

// A single Exporter trait for anything that consumes DOT source
pub trait Exporter {
    fn export_dot(&mut self, dot_source: &str) -> Result<(), Error>;
}

/// Output format for the rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Graphviz DOT source, written verbatim without invoking a renderer
    Dot,
    /// Scalable Vector Graphics
    Svg,
    /// Portable Network Graphics
    #[default]
    Png,
}

impl OutputFormat {
    /// Returns the file extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    /// Appends this format's extension to `path` unless the path already
    /// carries it.
    pub fn apply_extension(&self, path: &Path) -> std::path::PathBuf {
        let extension = self.extension();
        match path.extension() {
            Some(existing) if existing.eq_ignore_ascii_case(extension) => path.to_path_buf(),
            _ => {
                let mut file_name = path.as_os_str().to_os_string();
                file_name.push(".");
                file_name.push(extension);
                std::path::PathBuf::from(file_name)
            }
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dot" => Ok(Self::Dot),
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            other => Err(format!(
                "Unknown output format '{other}' (expected dot, svg, or png)"
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug)]
pub enum Error {
    Render(String),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
