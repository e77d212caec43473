//! Alias table mapping normalized provider-type spellings to canonical names.

/// Canonical names of the provider types the built-in rule catalog knows.
pub const ALLOPATHIC_OSTEOPATHIC: &str = "Allopathic & Osteopathic Physicians";
pub const BEHAVIORAL_HEALTH: &str = "Behavioral Health & Social Service Providers";
pub const CHIROPRACTIC: &str = "Chiropractic Providers";
pub const DENTAL: &str = "Dental Providers";
pub const DIETARY_NUTRITIONAL: &str = "Dietary & Nutritional Service Providers";
pub const EMERGENCY_MEDICAL: &str = "Emergency Medical Service Providers";
pub const EYE_AND_VISION: &str = "Eye and Vision Services Providers";
pub const NURSING: &str = "Nursing Service Providers";
pub const PHARMACY: &str = "Pharmacy Service Providers";
pub const PA_ADVANCED_PRACTICE: &str =
    "Physician Assistants & Advanced Practice Nursing Providers";
pub const PODIATRIC: &str = "Podiatric Medicine & Surgery Service Providers";
pub const SPEECH_LANGUAGE_HEARING: &str = "Speech, Language and Hearing Service Providers";

/// Entries keyed by the normalized form (see [`crate::normalize_label`]).
///
/// Besides the historical shorthand aliases, every canonical name appears
/// under its own normalized form so punctuation and case variants of known
/// types resolve canonically.
const ALIASES: &[(&str, &str)] = &[
    // shorthand and legacy spellings
    ("md do", ALLOPATHIC_OSTEOPATHIC),
    ("allopathic and osteopathic physicians", ALLOPATHIC_OSTEOPATHIC),
    // normalized canonical names
    ("allopathic osteopathic physicians", ALLOPATHIC_OSTEOPATHIC),
    ("behavioral health social service providers", BEHAVIORAL_HEALTH),
    ("chiropractic providers", CHIROPRACTIC),
    ("dental providers", DENTAL),
    ("dietary nutritional service providers", DIETARY_NUTRITIONAL),
    ("emergency medical service providers", EMERGENCY_MEDICAL),
    ("eye and vision services providers", EYE_AND_VISION),
    ("nursing service providers", NURSING),
    ("pharmacy service providers", PHARMACY),
    (
        "physician assistants advanced practice nursing providers",
        PA_ADVANCED_PRACTICE,
    ),
    ("podiatric medicine surgery service providers", PODIATRIC),
    ("speech language and hearing service providers", SPEECH_LANGUAGE_HEARING),
];

/// Look up a normalized label in the alias table.
pub fn canonical_for(normalized: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, canonical)| *canonical)
}
