pub mod aliases;
pub mod resolver;

pub use resolver::{extract_candidate, normalize_label, resolve_label, resolve_provider_type};
