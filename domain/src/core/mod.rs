//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`]: identifier of a backend model (`gpt-5`, `claude-opus`, ...)
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
