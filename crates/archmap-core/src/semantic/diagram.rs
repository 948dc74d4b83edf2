//! Core diagram structure types.
//!
//! This module contains the root types of the semantic diagram model:
//! - [`Diagram`] - The root diagram type with title, direction, and scope
//! - [`Scope`] - Container for diagram elements
//! - [`RankDir`] - Layout direction passed through to the external renderer

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::semantic::element::Element;

/// A scope containing a sequence of diagram elements.
///
/// A scope is the container for nodes, relations, and clusters, and forms
/// the building block for both the top-level diagram and nested clusters.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    elements: Vec<Element>,
}

impl Scope {
    /// Create a new Scope from a list of elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Borrow the elements contained in this scope.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// Layout direction for the rendered diagram.
///
/// The direction is not interpreted by this crate; it is forwarded to the
/// external renderer as its `rankdir` attribute. The names match the
/// renderer's two-letter codes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RankDir {
    /// Top to bottom (default)
    #[default]
    Tb,
    /// Left to right
    Lr,
    /// Bottom to top
    Bt,
    /// Right to left
    Rl,
}

impl FromStr for RankDir {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TB" => Ok(Self::Tb),
            "LR" => Ok(Self::Lr),
            "BT" => Ok(Self::Bt),
            "RL" => Ok(Self::Rl),
            _ => Err("Unsupported rank direction"),
        }
    }
}

impl From<RankDir> for &'static str {
    fn from(val: RankDir) -> Self {
        match val {
            RankDir::Tb => "TB",
            RankDir::Lr => "LR",
            RankDir::Bt => "BT",
            RankDir::Rl => "RL",
        }
    }
}

impl Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A complete architecture diagram: title, layout direction, and content.
///
/// This is the root type of the semantic model. All values are literal
/// constants supplied at construction; there is no update or deletion
/// operation.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    direction: RankDir,
    scope: Scope,
}

impl Diagram {
    /// Create a new Diagram with its title, layout direction, and scope.
    pub fn new(title: impl Into<String>, direction: RankDir, scope: Scope) -> Self {
        Self {
            title: title.into(),
            direction,
            scope,
        }
    }

    /// Get the diagram title, rendered above the diagram.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the configured layout direction for this diagram.
    pub fn direction(&self) -> RankDir {
        self.direction
    }

    /// Borrow the diagram's top-level scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}
