//! Provider-type resolution from noisy registry strings.
//!
//! Provider types arrive either as free text or embedded in a license `code`
//! field shaped like `"<taxonomy-code> - <Provider Type Name> - ..."`. Both
//! paths funnel through one normalization function and one alias table; no
//! caller does its own string matching.

use crate::aliases;

/// Normalize a provider-type label for lookup: lowercase, keep only
/// `[a-z0-9]` and whitespace, collapse runs of whitespace, trim.
pub fn normalize_label(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Candidate provider-type name inside a structured `code` string: the
/// second `" - "`-delimited segment.
pub fn extract_candidate(code: &str) -> Option<&str> {
    let mut parts = code.split(" - ");
    parts.next()?;
    parts.next().filter(|segment| !segment.is_empty())
}

/// Resolve one label: alias hits return the canonical name, misses return
/// the label unchanged.
pub fn resolve_label(raw: &str) -> String {
    let normalized = normalize_label(raw);
    match aliases::canonical_for(&normalized) {
        Some(canonical) => canonical.to_string(),
        None => {
            tracing::trace!(label = %raw, "provider type label not in alias table");
            raw.to_string()
        }
    }
}

/// Resolve the provider type from an explicit label and/or license `code`
/// strings, in that order. Yields `None` only when no candidate exists at
/// all.
pub fn resolve_provider_type<'a>(
    explicit: Option<&str>,
    codes: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    if let Some(label) = explicit
        && !label.trim().is_empty()
    {
        return Some(resolve_label(label));
    }
    for code in codes {
        if let Some(candidate) = extract_candidate(code) {
            return Some(resolve_label(candidate));
        }
    }
    None
}
