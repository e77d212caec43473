pub mod normalize;
pub mod payload;

pub use normalize::normalize_licenses;
pub use payload::{NpiIdentity, ProviderPayload};
