//! End-to-end evaluation scenarios: raw registry payloads through
//! normalization, resolution, matching, and aggregation.

use chrono::NaiveDate;
use serde_json::json;

use cred_ingest::ProviderPayload;
use cred_rules::{RequirementTemplate, RuleRegistry};
use cred_validate::{evaluate, evaluate_with_registry};

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid test date")
}

fn payload(value: serde_json::Value) -> ProviderPayload {
    ProviderPayload::from_value(&value).expect("payload parses")
}

/// A physician payload with every credential the MD rule set requires. The
/// state-license status is parameterized so tests can break exactly one
/// requirement.
fn physician_payload(license_status: &str) -> ProviderPayload {
    payload(json!({
        "rawApiResponse": {
            "NPI Validation": {
                "npi": "1669437901",
                "providerName": "JANE Q. SAMPLE M.D.",
                "entityType": "Individual",
                "status": "Active"
            },
            "Licenses": [
                {
                    "category": "state_license",
                    "code": "2084N0402X - Allopathic & Osteopathic Physicians - XYZ",
                    "details": {
                        "issuer": "Tennessee Board of Medical Examiners",
                        "type": "Medical Doctor",
                        "number": "MD-44821",
                        "status": license_status,
                        "expirationDate": "2999-01-01"
                    }
                },
                {
                    "category": "controlled_substance_registration",
                    "issuer": "DEA",
                    "type": "Registration",
                    "number": "BC1234567",
                    "status": "Active",
                    "expirationDate": "2999-06-30"
                },
                {
                    "category": "board_certification",
                    "issuer": "American Board of Medical Specialties (ABMS)",
                    "type": "Internal Medicine",
                    "status": "Active",
                    "expirationDate": "2999-12-31"
                }
            ]
        }
    }))
}

#[test]
fn fully_credentialed_physician_is_eligible() {
    let result = evaluate_with_registry(
        &physician_payload("Active"),
        &RuleRegistry::builtin(),
        june_first(),
    );

    assert!(result.is_eligible);
    assert_eq!(
        result.provider_type.as_deref(),
        Some("Allopathic & Osteopathic Physicians")
    );
    assert_eq!(result.requirements.len(), 4);
    assert!(result.requirements.iter().all(|req| req.is_valid));
    assert!(result.validation_messages.is_empty());
}

#[test]
fn inactive_state_license_blocks_eligibility() {
    let result = evaluate_with_registry(
        &physician_payload("Inactive"),
        &RuleRegistry::builtin(),
        june_first(),
    );

    assert!(!result.is_eligible);
    assert_eq!(
        result.validation_messages,
        vec!["No valid state medical license found"]
    );

    let license = result
        .requirements
        .iter()
        .find(|req| req.name == "State Medical License")
        .expect("license requirement");
    assert!(!license.is_valid);
    // The considered license still shows up so a reviewer sees why.
    assert_eq!(license.details.len(), 1);
    assert_eq!(license.details[0].status, "Inactive");
    assert_eq!(license.details[0].issuer, "Tennessee");
}

#[test]
fn empty_license_array_keeps_identifier_validity() {
    let result = evaluate_with_registry(
        &payload(json!({
            "NPI Validation": {
                "npi": "1669437901",
                "providerType": "Allopathic & Osteopathic Physicians"
            },
            "Licenses": []
        })),
        &RuleRegistry::builtin(),
        june_first(),
    );

    assert!(!result.is_eligible);
    let identifier = result
        .requirements
        .iter()
        .find(|req| req.name == "Valid NPI Number")
        .expect("identifier requirement");
    assert!(identifier.is_valid);
    assert!(
        result
            .requirements
            .iter()
            .filter(|req| req.name != "Valid NPI Number")
            .all(|req| !req.is_valid)
    );
    insta::assert_json_snapshot!(result.validation_messages, @r#"
    [
      "No valid state medical license found",
      "No valid DEA registration found",
      "No valid board certification found"
    ]
    "#);
}

#[test]
fn unknown_provider_type_result_shape() {
    let result = evaluate_with_registry(
        &payload(json!({
            "NPI Validation": { "npi": "1669437901" },
            "Licenses": []
        })),
        &RuleRegistry::builtin(),
        june_first(),
    );

    insta::assert_json_snapshot!(result, @r#"
    {
      "isEligible": false,
      "requirements": [
        {
          "requirement_type": "identifier",
          "name": "Valid NPI Number",
          "is_required": true,
          "is_valid": true,
          "validation_message": "Valid NPI found",
          "details": [
            {
              "issuer": "Unknown",
              "type": "NPI",
              "number": "1669437901",
              "status": "Active",
              "expirationDate": null,
              "boardActions": [],
              "hasBoardAction": false
            }
          ]
        }
      ],
      "validationMessages": [
        "Provider type could not be determined"
      ]
    }
    "#);
}

#[test]
fn custom_rule_set_with_cpr_requirement() {
    let rules = [
        RequirementTemplate::Npi.rule(true),
        RequirementTemplate::CprCertification.rule(true),
    ];
    let result = evaluate(
        &payload(json!({
            "NPI Validation": { "npi": "1669437901" },
            "Licenses": [
                {
                    "category": "certification",
                    "issuer": "American Heart Association",
                    "type": "CPR/BLS Certification",
                    "status": "Active",
                    "expirationDate": "2999-03-01"
                }
            ]
        })),
        Some("Emergency Medical Service Providers"),
        &rules,
        june_first(),
    );

    assert!(result.is_eligible);
    let cpr = result
        .requirements
        .iter()
        .find(|req| req.name == "CPR Certification")
        .expect("cpr requirement");
    assert_eq!(cpr.validation_message, "Valid CPR certification found");
    assert_eq!(cpr.details[0].issuer, "American Heart Association");
}

#[test]
fn optional_requirement_failures_do_not_block() {
    let result = evaluate_with_registry(
        &payload(json!({
            "NPI Validation": {
                "npi": "1669437901",
                "providerType": "Nursing Service Providers"
            },
            "Licenses": [
                {
                    "category": "state_license",
                    "issuer": "Tennessee Board of Nursing",
                    "type": "Registered Nurse",
                    "status": "Active",
                    "expirationDate": "2999-01-01"
                }
            ]
        })),
        &RuleRegistry::builtin(),
        june_first(),
    );

    assert!(result.is_eligible);
    assert!(result.validation_messages.is_empty());
    // DEA and board certification fail but are optional for nursing.
    let failed: Vec<_> = result
        .requirements
        .iter()
        .filter(|req| !req.is_valid)
        .collect();
    assert_eq!(failed.len(), 2);
    assert!(failed.iter().all(|req| !req.is_required));
}

#[test]
fn details_fields_override_top_level_during_evaluation() {
    let result = evaluate_with_registry(
        &payload(json!({
            "NPI Validation": {
                "npi": "1669437901",
                "providerType": "Nursing Service Providers"
            },
            "Licenses": [
                {
                    "category": "state_license",
                    "status": "Inactive",
                    "details": { "status": "Active" }
                }
            ]
        })),
        &RuleRegistry::builtin(),
        june_first(),
    );

    let license = result
        .requirements
        .iter()
        .find(|req| req.name == "State Medical License")
        .expect("license requirement");
    assert!(license.is_valid);
    assert_eq!(license.details[0].status, "Active");
}

#[test]
fn board_actions_surface_without_blocking_validity() {
    let result = evaluate_with_registry(
        &payload(json!({
            "NPI Validation": {
                "npi": "1669437901",
                "providerType": "Nursing Service Providers"
            },
            "Licenses": [
                {
                    "category": "state_license",
                    "issuer": "Tennessee Board of Nursing",
                    "status": "Active",
                    "boardActionData": {
                        "boardActionTexts": ["Probation, resolved 2021"]
                    }
                }
            ]
        })),
        &RuleRegistry::builtin(),
        june_first(),
    );

    assert!(result.is_eligible);
    let license = result
        .requirements
        .iter()
        .find(|req| req.name == "State Medical License")
        .expect("license requirement");
    assert!(license.is_valid);
    assert!(license.details[0].has_board_action);
    assert_eq!(
        license.details[0].board_actions,
        vec!["Probation, resolved 2021".to_string()]
    );
}
