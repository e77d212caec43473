#![deny(unsafe_code)]

//! Built-in provider-type catalog.
//!
//! Twelve provider types, each carrying the identifier and state-license
//! rules as required plus DEA registration and board certification with
//! per-type required flags. The flags mirror the credentialing policy the
//! registry shipped with; custom rule documents can replace the whole
//! catalog at load time.

use serde::{Deserialize, Serialize};

use cred_model::RequirementRule;
use cred_taxonomy::aliases;

use crate::templates::RequirementTemplate;

/// One provider type and its bound rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderTypeRules {
    /// Short code, e.g. `"MD"` or `"RPH"`.
    pub code: String,
    /// Canonical display name; also the resolver lookup key.
    pub name: String,
    pub rules: Vec<RequirementRule>,
}

/// (code, name, DEA required, board certification required)
const BUILTIN: &[(&str, &str, bool, bool)] = &[
    ("MD", aliases::ALLOPATHIC_OSTEOPATHIC, true, true),
    ("BH", aliases::BEHAVIORAL_HEALTH, false, true),
    ("DC", aliases::CHIROPRACTIC, false, false),
    ("DDS", aliases::DENTAL, true, true),
    ("DN", aliases::DIETARY_NUTRITIONAL, false, false),
    ("EMS", aliases::EMERGENCY_MEDICAL, false, false),
    ("OD", aliases::EYE_AND_VISION, true, true),
    ("RN", aliases::NURSING, false, false),
    ("RPH", aliases::PHARMACY, true, true),
    ("PA", aliases::PA_ADVANCED_PRACTICE, true, true),
    ("DPM", aliases::PODIATRIC, true, true),
    ("SLP", aliases::SPEECH_LANGUAGE_HEARING, false, false),
];

/// The built-in catalog, in declaration order.
pub fn builtin_catalog() -> Vec<ProviderTypeRules> {
    BUILTIN
        .iter()
        .map(|&(code, name, dea_required, cert_required)| ProviderTypeRules {
            code: code.to_string(),
            name: name.to_string(),
            rules: vec![
                RequirementTemplate::Npi.rule(true),
                RequirementTemplate::StateLicense.rule(true),
                RequirementTemplate::DeaRegistration.rule(dea_required),
                RequirementTemplate::BoardCertification.rule(cert_required),
            ],
        })
        .collect()
}
