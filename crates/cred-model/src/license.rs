//! Normalized credential records.
//!
//! External registries report licenses, registrations, and certifications as
//! loosely shaped JSON with inconsistent casing and optional nesting. The
//! normalizer reduces each well-formed entry to a [`License`], the canonical
//! record every downstream check operates on.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credential category, derived from the raw `category` field.
///
/// Raw category strings are matched case-insensitively with `-` treated as
/// `_`, so `"STATE_LICENSE"`, `"state-license"`, and `"state_license"` all
/// parse to [`LicenseCategory::StateLicense`]. Anything unrecognized falls
/// back to [`LicenseCategory::Other`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LicenseCategory {
    /// A state-issued practice license.
    StateLicense,
    /// A controlled-substance registration (e.g. DEA).
    ControlledSubstanceRegistration,
    /// A medical board certification (e.g. ABMS member boards).
    BoardCertification,
    /// Any other certification (e.g. CPR).
    Certification,
    /// Unrecognized category; the raw entry is kept on the license source.
    Other,
}

impl LicenseCategory {
    /// Parse a raw category string. Never fails; unknown values map to `Other`.
    pub fn parse(raw: &str) -> Self {
        let key = raw.trim().to_lowercase().replace('-', "_");
        match key.as_str() {
            "state_license" => LicenseCategory::StateLicense,
            "controlled_substance_registration" => LicenseCategory::ControlledSubstanceRegistration,
            "board_certification" => LicenseCategory::BoardCertification,
            "certification" => LicenseCategory::Certification,
            _ => LicenseCategory::Other,
        }
    }

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseCategory::StateLicense => "state_license",
            LicenseCategory::ControlledSubstanceRegistration => {
                "controlled_substance_registration"
            }
            LicenseCategory::BoardCertification => "board_certification",
            LicenseCategory::Certification => "certification",
            LicenseCategory::Other => "other",
        }
    }
}

impl fmt::Display for LicenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for LicenseCategory {
    fn from(raw: String) -> Self {
        LicenseCategory::parse(&raw)
    }
}

impl From<LicenseCategory> for String {
    fn from(category: LicenseCategory) -> Self {
        category.as_str().to_string()
    }
}

/// A normalized credential record.
///
/// Fields the registry did not supply stay `None`; sentinel strings such as
/// `"Unknown"` belong to presentation projections, never to this model, so
/// matching logic cannot accidentally treat a sentinel as real data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// Always populated; `Other` when the raw category was unrecognized.
    pub category: LicenseCategory,
    /// Issuing body, e.g. a state medical board or `"DEA"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// License type label, e.g. `"Medical Doctor"` or `"CPR"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    /// License or registration number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Free-text status; compared case-insensitively against `"active"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Expiration date text exactly as received; parsed at evaluation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Issue date text exactly as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    /// Disciplinary action texts recorded against the license.
    #[serde(default)]
    pub board_actions: Vec<String>,
    /// True whenever `board_actions` is non-empty, or when the raw entry
    /// flagged an action without carrying the texts.
    #[serde(default)]
    pub has_board_action: bool,
    /// The original raw entry, retained for traceability. Normalization
    /// passes it through unchanged, so renormalizing keeps pointing at the
    /// first-seen record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl License {
    /// New license of a category with every optional field absent.
    pub fn new(category: LicenseCategory) -> Self {
        License {
            category,
            issuer: None,
            license_type: None,
            number: None,
            status: None,
            expiration_date: None,
            issue_date: None,
            board_actions: Vec::new(),
            has_board_action: false,
            raw: None,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_type(mut self, license_type: impl Into<String>) -> Self {
        self.license_type = Some(license_type.into());
        self
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration_date = Some(expiration.into());
        self
    }

    /// True when `status` case-insensitively equals `"active"`.
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("active"))
    }

    /// Case-insensitive substring check on the issuer. Absent issuer never
    /// matches.
    pub fn issuer_contains(&self, needle: &str) -> bool {
        contains_ignore_case(self.issuer.as_deref(), needle)
    }

    /// Case-insensitive substring check on the license type.
    pub fn type_contains(&self, needle: &str) -> bool {
        contains_ignore_case(self.license_type.as_deref(), needle)
    }
}

fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|value| value.to_lowercase().contains(&needle.to_lowercase()))
}
