//! CLI library components for the credentialing eligibility checker.

pub mod logging;
pub mod summary;
