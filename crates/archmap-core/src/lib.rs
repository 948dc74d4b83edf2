//! Archmap Core Types and Definitions
//!
//! This crate provides the foundational types for the archmap architecture
//! diagram tool. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Semantic**: Semantic model types for diagrams ([`semantic`] module)

pub mod color;
pub mod identifier;
pub mod semantic;
