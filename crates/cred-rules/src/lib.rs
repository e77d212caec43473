#![deny(unsafe_code)]

//! Requirement-rule catalog and registry.
//!
//! The built-in catalog covers twelve provider types; each binds the shared
//! requirement templates with per-type required flags. Custom catalogs load
//! from JSON documents with the same shape and replace the built-ins wholesale.

pub mod catalog;
pub mod error;
pub mod registry;
pub mod templates;

pub use crate::catalog::{ProviderTypeRules, builtin_catalog};
pub use crate::error::{Result, RulesError};
pub use crate::registry::RuleRegistry;
pub use crate::templates::RequirementTemplate;
