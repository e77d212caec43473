//! Evaluation outputs: per-license detail projections, per-requirement
//! verdicts, and the overall eligibility result.

use serde::{Deserialize, Serialize};

use crate::license::{License, LicenseCategory};
use crate::requirement::RequirementType;

/// Sentinel shown for absent issuer/type/status fields.
pub const UNKNOWN: &str = "Unknown";
/// Sentinel shown for an absent license number.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Presentation-boundary projection of one considered license.
///
/// This is where absent fields become the `"Unknown"` / `"Not Available"`
/// sentinels reviewers expect; the internal [`License`] model never carries
/// them. One detail is emitted per considered license, valid or not, so a
/// reviewer can see why a requirement failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDetail {
    pub issuer: String,
    #[serde(rename = "type")]
    pub license_type: String,
    pub number: String,
    pub status: String,
    pub expiration_date: Option<String>,
    pub board_actions: Vec<String>,
    pub has_board_action: bool,
}

impl ValidationDetail {
    /// Project a license for display, filling sentinels and canonicalizing
    /// well-known issuers.
    pub fn from_license(license: &License) -> Self {
        let issuer = license
            .issuer
            .as_deref()
            .map(|issuer| canonical_issuer(license.category, issuer))
            .unwrap_or_else(|| UNKNOWN.to_string());

        ValidationDetail {
            issuer,
            license_type: license
                .license_type
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            number: license
                .number
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            status: license.status.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            expiration_date: license.expiration_date.clone(),
            board_actions: license.board_actions.clone(),
            has_board_action: license.has_board_action,
        }
    }

    /// Detail row for the identifier requirement; carries the NPI itself and
    /// a status mirroring the computed validity.
    pub fn for_identifier(npi: Option<&str>, is_active: bool) -> Self {
        ValidationDetail {
            issuer: UNKNOWN.to_string(),
            license_type: "NPI".to_string(),
            number: npi.unwrap_or_default().to_string(),
            status: if is_active {
                "Active".to_string()
            } else {
                "Inactive".to_string()
            },
            expiration_date: None,
            board_actions: Vec::new(),
            has_board_action: false,
        }
    }
}

/// Replace well-known issuer spellings with their display names.
fn canonical_issuer(category: LicenseCategory, issuer: &str) -> String {
    let lowered = issuer.to_lowercase();
    match category {
        LicenseCategory::StateLicense if lowered.contains("tennessee") => {
            "Tennessee".to_string()
        }
        LicenseCategory::BoardCertification
            if lowered.contains("american board of medical specialties") =>
        {
            "ABMS - American Board of Medical Specialties".to_string()
        }
        LicenseCategory::Certification if lowered.contains("american heart association") => {
            "American Heart Association".to_string()
        }
        _ => issuer.to_string(),
    }
}

/// Verdict for one requirement rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedRequirement {
    pub requirement_type: RequirementType,
    pub name: String,
    pub is_required: bool,
    pub is_valid: bool,
    pub validation_message: String,
    #[serde(default)]
    pub details: Vec<ValidationDetail>,
}

/// Overall eligibility verdict for one provider evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub is_eligible: bool,
    pub requirements: Vec<EvaluatedRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,
    pub validation_messages: Vec<String>,
}

impl EligibilityResult {
    pub fn required_count(&self) -> usize {
        self.requirements
            .iter()
            .filter(|requirement| requirement.is_required)
            .count()
    }

    pub fn failed_required_count(&self) -> usize {
        self.requirements
            .iter()
            .filter(|requirement| requirement.is_required && !requirement.is_valid)
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_required_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_projection_fills_sentinels() {
        let license = License::new(LicenseCategory::StateLicense).with_status("Active");
        let detail = ValidationDetail::from_license(&license);
        assert_eq!(detail.issuer, "Unknown");
        assert_eq!(detail.license_type, "Unknown");
        assert_eq!(detail.number, "Not Available");
        assert_eq!(detail.status, "Active");
        assert_eq!(detail.expiration_date, None);
    }

    #[test]
    fn well_known_issuers_canonicalize_per_category() {
        let state = License::new(LicenseCategory::StateLicense)
            .with_issuer("Tennessee Board of Medical Examiners");
        assert_eq!(ValidationDetail::from_license(&state).issuer, "Tennessee");

        let board = License::new(LicenseCategory::BoardCertification)
            .with_issuer("American Board of Medical Specialties (ABMS)");
        assert_eq!(
            ValidationDetail::from_license(&board).issuer,
            "ABMS - American Board of Medical Specialties"
        );

        let cpr = License::new(LicenseCategory::Certification)
            .with_issuer("AMERICAN HEART ASSOCIATION");
        assert_eq!(
            ValidationDetail::from_license(&cpr).issuer,
            "American Heart Association"
        );

        // Canonicalization is category-scoped.
        let mismatched = License::new(LicenseCategory::Certification)
            .with_issuer("Tennessee Board of Medical Examiners");
        assert_eq!(
            ValidationDetail::from_license(&mismatched).issuer,
            "Tennessee Board of Medical Examiners"
        );
    }

    #[test]
    fn identifier_detail_reflects_validity() {
        let present = ValidationDetail::for_identifier(Some("1669437901"), true);
        assert_eq!(present.number, "1669437901");
        assert_eq!(present.status, "Active");
        assert_eq!(present.license_type, "NPI");

        let absent = ValidationDetail::for_identifier(None, false);
        assert_eq!(absent.number, "");
        assert_eq!(absent.status, "Inactive");

        // A present but deactivated identifier keeps its number visible.
        let deactivated = ValidationDetail::for_identifier(Some("1669437901"), false);
        assert_eq!(deactivated.number, "1669437901");
        assert_eq!(deactivated.status, "Inactive");
    }

    #[test]
    fn result_counts_track_required_failures() {
        let result = EligibilityResult {
            is_eligible: false,
            requirements: vec![
                EvaluatedRequirement {
                    requirement_type: RequirementType::Identifier,
                    name: "Valid NPI Number".to_string(),
                    is_required: true,
                    is_valid: true,
                    validation_message: "Valid NPI found".to_string(),
                    details: vec![],
                },
                EvaluatedRequirement {
                    requirement_type: RequirementType::License,
                    name: "State Medical License".to_string(),
                    is_required: true,
                    is_valid: false,
                    validation_message: "No valid state medical license found".to_string(),
                    details: vec![],
                },
                EvaluatedRequirement {
                    requirement_type: RequirementType::Certification,
                    name: "Board Certification".to_string(),
                    is_required: false,
                    is_valid: false,
                    validation_message: "No valid board certification found".to_string(),
                    details: vec![],
                },
            ],
            provider_type: Some("Nursing Service Providers".to_string()),
            validation_messages: vec!["No valid state medical license found".to_string()],
        };

        assert_eq!(result.required_count(), 2);
        assert_eq!(result.failed_required_count(), 1);
        assert!(result.has_failures());
    }
}
