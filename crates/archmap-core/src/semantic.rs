//! Semantic diagram model types.
//!
//! This module contains the declarative representation of an architecture
//! diagram. The model is fully determined at construction time and never
//! mutated afterward: a diagram is built once, validated, exported to DOT,
//! and handed to the external renderer.
//!
//! # Pipeline Position
//!
//! ```text
//! Semantic Model (these types)
//!     ↓ structure
//! Validation Graph (DiagramGraph)
//!     ↓ export
//! DOT source
//!     ↓ graphviz
//! Image file
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - Core structures: [`Diagram`], [`Scope`], [`RankDir`]
//! - [`element`] - Diagram elements: [`Node`], [`Relation`], [`Cluster`]

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
