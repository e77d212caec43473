//! Requirement matching: one rule against the normalized license set.
//!
//! Matching is existential. A rule first narrows the licenses it considers
//! (category mapping plus any `IssuerContains` / `TypeContains` predicates),
//! then is valid iff at least one considered license passes every validity
//! predicate. Every considered license lands in the verdict's details, valid
//! or not, so a failed requirement still shows what was looked at.

use chrono::NaiveDate;
use tracing::trace;

use cred_ingest::NpiIdentity;
use cred_model::{
    EvaluatedRequirement, License, LicenseCategory, RequirementRule, RequirementType,
    RulePredicate, ValidationDetail,
};

use crate::dates;

/// Evaluate one requirement rule against the full normalized license set.
pub fn evaluate_requirement(
    rule: &RequirementRule,
    licenses: &[License],
    identity: &NpiIdentity,
    as_of: NaiveDate,
) -> EvaluatedRequirement {
    if rule.base.requirement_type == RequirementType::Identifier {
        return evaluate_identifier(rule, identity);
    }

    let Some(category) = target_category(rule) else {
        // Requirement types outside the known set match no credential
        // category and cannot be satisfied.
        return verdict(rule, false, Vec::new());
    };

    let considered: Vec<&License> = licenses
        .iter()
        .filter(|license| license.category == category)
        .filter(|license| !is_cpr_rule(rule) || is_cpr_credential(license))
        .filter(|license| {
            rule.filter_predicates()
                .all(|predicate| selection_matches(license, predicate))
        })
        .collect();

    let is_valid = considered.iter().any(|license| {
        rule.validity_predicates()
            .all(|predicate| validity_holds(license, predicate, as_of))
    });

    trace!(
        rule = %rule.base.name,
        considered = considered.len(),
        is_valid,
        "Requirement evaluated"
    );

    let details = considered
        .into_iter()
        .map(ValidationDetail::from_license)
        .collect();
    verdict(rule, is_valid, details)
}

fn evaluate_identifier(rule: &RequirementRule, identity: &NpiIdentity) -> EvaluatedRequirement {
    let is_valid = identity.is_valid();
    trace!(rule = %rule.base.name, is_valid, "Identifier evaluated");
    verdict(
        rule,
        is_valid,
        vec![ValidationDetail::for_identifier(
            identity.npi.as_deref(),
            is_valid,
        )],
    )
}

fn verdict(
    rule: &RequirementRule,
    is_valid: bool,
    details: Vec<ValidationDetail>,
) -> EvaluatedRequirement {
    EvaluatedRequirement {
        requirement_type: rule.base.requirement_type.clone(),
        name: rule.base.name.clone(),
        is_required: rule.is_required,
        is_valid,
        validation_message: message_for(rule, is_valid).to_string(),
        details,
    }
}

/// Credential category a rule's matches must come from. Identifier rules are
/// handled separately; unknown requirement types map to nothing.
fn target_category(rule: &RequirementRule) -> Option<LicenseCategory> {
    match &rule.base.requirement_type {
        RequirementType::License => Some(LicenseCategory::StateLicense),
        RequirementType::Registration => Some(LicenseCategory::ControlledSubstanceRegistration),
        RequirementType::Certification => Some(if is_cpr_rule(rule) {
            LicenseCategory::Certification
        } else {
            LicenseCategory::BoardCertification
        }),
        RequirementType::Identifier | RequirementType::Unknown(_) => None,
    }
}

/// Certification rules named for CPR select the general certification
/// category, narrowed to CPR credentials, instead of board certifications.
fn is_cpr_rule(rule: &RequirementRule) -> bool {
    rule.base.name.to_lowercase().contains("cpr")
}

fn is_cpr_credential(license: &License) -> bool {
    license.type_contains("cpr") && license.issuer_contains("heart association")
}

fn selection_matches(license: &License, predicate: &RulePredicate) -> bool {
    match predicate {
        RulePredicate::IssuerContains(needle) => license.issuer_contains(needle),
        RulePredicate::TypeContains(needle) => license.type_contains(needle),
        RulePredicate::ActiveStatus | RulePredicate::NotExpired => true,
    }
}

fn validity_holds(license: &License, predicate: &RulePredicate, as_of: NaiveDate) -> bool {
    match predicate {
        RulePredicate::ActiveStatus => license.is_active(),
        RulePredicate::NotExpired => {
            dates::is_unexpired(license.expiration_date.as_deref(), as_of)
        }
        RulePredicate::IssuerContains(_) | RulePredicate::TypeContains(_) => true,
    }
}

fn message_for(rule: &RequirementRule, is_valid: bool) -> &'static str {
    match &rule.base.requirement_type {
        RequirementType::Identifier => {
            if is_valid {
                "Valid NPI found"
            } else {
                "No valid NPI found"
            }
        }
        RequirementType::License => {
            if is_valid {
                "Valid state license found"
            } else {
                "No valid state medical license found"
            }
        }
        RequirementType::Registration => {
            if is_valid {
                "Valid DEA registration found"
            } else {
                "No valid DEA registration found"
            }
        }
        RequirementType::Certification if is_cpr_rule(rule) => {
            if is_valid {
                "Valid CPR certification found"
            } else {
                "No valid CPR certification found"
            }
        }
        RequirementType::Certification => {
            if is_valid {
                "Valid board certification found"
            } else {
                "No valid board certification found"
            }
        }
        RequirementType::Unknown(_) => "No matching records found",
    }
}
