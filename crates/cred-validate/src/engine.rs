//! Evaluation entry points.
//!
//! [`evaluate`] is the core transformation: payload plus an explicit rule
//! set in, [`EligibilityResult`] out. [`evaluate_with_registry`] is the full
//! flow, resolving the provider type from the payload and looking up its
//! rule set first. Both are pure given their inputs; the evaluation date is
//! always explicit.

use chrono::NaiveDate;
use tracing::debug;

use cred_ingest::{ProviderPayload, normalize_licenses};
use cred_model::{EligibilityResult, RequirementRule};
use cred_rules::{RequirementTemplate, RuleRegistry};
use cred_taxonomy::resolve_provider_type;

use crate::aggregate::aggregate;
use crate::matcher::evaluate_requirement;

/// Evaluate a payload against an explicit rule set.
///
/// `provider_type` is the already-resolved type, used for reporting; `None`
/// marks the provider type as undetermined and forces ineligibility.
pub fn evaluate(
    payload: &ProviderPayload,
    provider_type: Option<&str>,
    rules: &[RequirementRule],
    as_of: NaiveDate,
) -> EligibilityResult {
    let licenses = normalize_licenses(payload.raw_licenses());
    let identity = payload.identity();

    debug!(
        licenses = licenses.len(),
        rules = rules.len(),
        as_of = %as_of,
        "Evaluating provider eligibility"
    );

    let evaluated = rules
        .iter()
        .map(|rule| evaluate_requirement(rule, &licenses, &identity, as_of))
        .collect();

    aggregate(provider_type.map(str::to_string), evaluated)
}

/// Resolve the provider type from the payload, look up its rules, evaluate.
///
/// When no provider type can be resolved, identifier validity is still
/// computed (against the standard NPI rule) so the degraded result carries
/// partial information.
pub fn evaluate_with_registry(
    payload: &ProviderPayload,
    registry: &RuleRegistry,
    as_of: NaiveDate,
) -> EligibilityResult {
    let identity = payload.identity();
    let codes = payload.taxonomy_codes();
    let resolved = resolve_provider_type(
        identity.provider_type.as_deref(),
        codes.iter().map(String::as_str),
    );

    match resolved {
        Some(provider_type) => {
            let rules = registry.rules_for(&provider_type).unwrap_or(&[]);
            evaluate(payload, Some(&provider_type), rules, as_of)
        }
        None => {
            debug!("Provider type unresolved; evaluating identifier only");
            let identifier_only = [RequirementTemplate::Npi.rule(true)];
            evaluate(payload, None, &identifier_only, as_of)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid test date")
    }

    #[test]
    fn registry_flow_resolves_type_from_license_codes() {
        let payload = ProviderPayload::from_value(&json!({
            "NPI Validation": { "npi": "1669437901" },
            "Licenses": [
                {
                    "category": "state_license",
                    "code": "163W00000X - Nursing Service Providers - Registered Nurse",
                    "details": {
                        "issuer": "Tennessee Board of Nursing",
                        "type": "Registered Nurse",
                        "status": "Active",
                        "expirationDate": "2999-01-01"
                    }
                }
            ]
        }))
        .expect("payload parses");

        let result = evaluate_with_registry(&payload, &RuleRegistry::builtin(), june_first());
        assert_eq!(
            result.provider_type.as_deref(),
            Some("Nursing Service Providers")
        );
        assert!(result.is_eligible);
    }

    #[test]
    fn unresolved_type_still_reports_identifier_validity() {
        let payload = ProviderPayload::from_value(&json!({
            "NPI Validation": { "npi": "1669437901" },
            "Licenses": []
        }))
        .expect("payload parses");

        let result = evaluate_with_registry(&payload, &RuleRegistry::builtin(), june_first());
        assert!(!result.is_eligible);
        assert_eq!(result.provider_type, None);
        assert_eq!(result.requirements.len(), 1);
        assert!(result.requirements[0].is_valid);
    }

    #[test]
    fn resolved_type_missing_from_registry_degrades_to_empty_rules() {
        let payload = ProviderPayload::from_value(&json!({
            "NPI Validation": {
                "npi": "1669437901",
                "providerType": "Veterinary Providers"
            },
            "Licenses": []
        }))
        .expect("payload parses");

        let result = evaluate_with_registry(&payload, &RuleRegistry::builtin(), june_first());
        assert!(!result.is_eligible);
        assert_eq!(result.provider_type.as_deref(), Some("Veterinary Providers"));
        assert!(result.requirements.is_empty());
        assert_eq!(
            result.validation_messages,
            vec!["No requirement rules configured for provider type"]
        );
    }
}
