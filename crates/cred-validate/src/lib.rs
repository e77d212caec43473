mod aggregate;
mod dates;
mod engine;
mod matcher;

pub use aggregate::{EMPTY_RULE_SET_MESSAGE, UNKNOWN_PROVIDER_TYPE_MESSAGE, aggregate};
pub use dates::{INVALID_DATE, NO_EXPIRATION, format_expiration, is_unexpired, parse_date};
pub use engine::{evaluate, evaluate_with_registry};
pub use matcher::evaluate_requirement;
