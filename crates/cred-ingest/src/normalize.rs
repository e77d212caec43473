//! Credential normalization: raw registry entries to [`License`] values.
//!
//! Registry entries are arbitrarily shaped. Some nest the useful fields
//! under a `details` sub-object, some carry board actions as a structured
//! `boardActionData` block and some as a flat `boardActions` array, and any
//! field may be missing or mistyped. Normalization reads every field through
//! a details-over-top-level merged view, keeps the original entry for
//! traceability, and silently discards entries that are not objects or lack
//! a string `category`. Order is preserved; nothing here errors.

use serde_json::{Map, Value};

use cred_model::{License, LicenseCategory};

/// Normalize a raw `"Licenses"` array. Discarded entries are visible only
/// through the output length (and a debug event per discard).
pub fn normalize_licenses(entries: &[Value]) -> Vec<License> {
    let mut licenses = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match normalize_entry(entry) {
            Some(license) => licenses.push(license),
            None => {
                tracing::debug!(index, "discarding malformed license entry");
            }
        }
    }
    licenses
}

fn normalize_entry(entry: &Value) -> Option<License> {
    let object = entry.as_object()?;
    let details = object.get("details").and_then(Value::as_object);

    let category = merged(object, details, "category").and_then(Value::as_str)?;

    let board_actions = collect_board_actions(
        merged(object, details, "boardActionData"),
        merged(object, details, "boardActions"),
    );
    let flagged = merged(object, details, "hasBoardAction")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Some(License {
        category: LicenseCategory::parse(category),
        issuer: merged_text(object, details, "issuer"),
        license_type: merged_text(object, details, "type"),
        number: merged_text(object, details, "number"),
        status: merged_text(object, details, "status"),
        expiration_date: merged_text(object, details, "expirationDate"),
        issue_date: merged_text(object, details, "issueDate"),
        has_board_action: flagged || !board_actions.is_empty(),
        board_actions,
        // Renormalizing a serialized license keeps its original provenance
        // instead of wrapping it another level.
        raw: Some(object.get("raw").cloned().unwrap_or_else(|| entry.clone())),
    })
}

/// Merged view of one field: `details` wins, top level fills the gaps.
fn merged<'a>(
    object: &'a Map<String, Value>,
    details: Option<&'a Map<String, Value>>,
    key: &str,
) -> Option<&'a Value> {
    details
        .and_then(|details| details.get(key))
        .or_else(|| object.get(key))
}

fn merged_text(
    object: &Map<String, Value>,
    details: Option<&Map<String, Value>>,
    key: &str,
) -> Option<String> {
    merged(object, details, key)
        .and_then(Value::as_str)
        .map(String::from)
}

/// Board actions come from `boardActionData.boardActionTexts` when that
/// block exists, else from a flat `boardActions` array. Non-string elements
/// are dropped.
fn collect_board_actions(action_data: Option<&Value>, flat: Option<&Value>) -> Vec<String> {
    let structured = action_data
        .and_then(Value::as_object)
        .and_then(|data| data.get("boardActionTexts"))
        .and_then(Value::as_array);
    structured
        .or_else(|| flat.and_then(Value::as_array))
        .map(|texts| {
            texts
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
