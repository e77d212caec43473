pub mod error;
pub mod license;
pub mod requirement;
pub mod verdict;

pub use error::{EligibilityError, Result};
pub use license::{License, LicenseCategory};
pub use requirement::{BaseRequirement, RequirementRule, RequirementType, RulePredicate};
pub use verdict::{
    EligibilityResult, EvaluatedRequirement, NOT_AVAILABLE, UNKNOWN, ValidationDetail,
};
