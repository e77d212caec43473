//! Folding per-requirement verdicts into one eligibility result.

use cred_model::{EligibilityResult, EvaluatedRequirement};

/// Appended when the provider type could not be resolved from the payload.
pub const UNKNOWN_PROVIDER_TYPE_MESSAGE: &str = "Provider type could not be determined";
/// Appended when a resolved provider type has no configured rules.
pub const EMPTY_RULE_SET_MESSAGE: &str = "No requirement rules configured for provider type";

/// Combine evaluated requirements into the overall verdict.
///
/// Eligible iff every required requirement is valid; optional requirements
/// are reported but never block. Validation messages carry each required
/// failure in rule order, followed by at most one degradation message: an
/// unresolved provider type or an empty rule set each force ineligibility
/// while keeping whatever was evaluated (notably identifier validity) on the
/// result.
pub fn aggregate(
    provider_type: Option<String>,
    requirements: Vec<EvaluatedRequirement>,
) -> EligibilityResult {
    let mut validation_messages: Vec<String> = requirements
        .iter()
        .filter(|requirement| requirement.is_required && !requirement.is_valid)
        .map(|requirement| requirement.validation_message.clone())
        .collect();

    let required_met = requirements
        .iter()
        .filter(|requirement| requirement.is_required)
        .all(|requirement| requirement.is_valid);

    let is_eligible = if provider_type.is_none() {
        validation_messages.push(UNKNOWN_PROVIDER_TYPE_MESSAGE.to_string());
        false
    } else if requirements.is_empty() {
        validation_messages.push(EMPTY_RULE_SET_MESSAGE.to_string());
        false
    } else {
        required_met
    };

    EligibilityResult {
        is_eligible,
        requirements,
        provider_type,
        validation_messages,
    }
}
