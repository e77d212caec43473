//! Access to the raw provider payload returned by the registry lookup.
//!
//! The payload is a JSON object with an `"NPI Validation"` block and a
//! `"Licenses"` array, sometimes wrapped in one or two `rawApiResponse`
//! envelopes by intermediate caching layers. Everything here is tolerant:
//! missing or oddly typed fields read as absent, and only a non-object root
//! is a contract violation.

use serde::Serialize;
use serde_json::{Map, Value};

use cred_model::{EligibilityError, Result};

const ENVELOPE_KEY: &str = "rawApiResponse";
const NPI_VALIDATION_KEY: &str = "NPI Validation";
const LICENSES_KEY: &str = "Licenses";

/// Identity fields extracted from the `"NPI Validation"` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NpiIdentity {
    pub npi: Option<String>,
    pub provider_name: Option<String>,
    pub entity_type: Option<String>,
    pub enumeration_date: Option<String>,
    pub update_date: Option<String>,
    pub status: Option<String>,
    pub provider_type: Option<String>,
}

impl NpiIdentity {
    /// True when an NPI value exists and, if a status is reported, that
    /// status is active. No expiration semantics apply to identifiers.
    pub fn is_valid(&self) -> bool {
        let has_npi = self.npi.as_deref().is_some_and(|npi| !npi.is_empty());
        let status_ok = match self.status.as_deref() {
            Some(status) => status.eq_ignore_ascii_case("active"),
            None => true,
        };
        has_npi && status_ok
    }
}

/// A provider payload with envelopes stripped, ready for extraction.
#[derive(Debug, Clone)]
pub struct ProviderPayload {
    root: Map<String, Value>,
}

impl ProviderPayload {
    /// Unwrap `rawApiResponse` envelopes (at most two levels) and take the
    /// payload object. A root that is not a JSON object is the one contract
    /// violation this module reports.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut current = value;
        for _ in 0..2 {
            match current.get(ENVELOPE_KEY) {
                Some(inner) if inner.is_object() => current = inner,
                _ => break,
            }
        }
        let root = current
            .as_object()
            .ok_or(EligibilityError::PayloadNotObject)?;
        Ok(ProviderPayload { root: root.clone() })
    }

    /// Parse a JSON document and wrap it.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        ProviderPayload::from_value(&value)
    }

    /// The raw `"Licenses"` entries; absent or non-array reads as empty.
    pub fn raw_licenses(&self) -> &[Value] {
        self.root
            .get(LICENSES_KEY)
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    /// Identity fields from `"NPI Validation"`; every field is optional and
    /// empty strings read as absent.
    pub fn identity(&self) -> NpiIdentity {
        let Some(block) = self.root.get(NPI_VALIDATION_KEY).and_then(Value::as_object) else {
            return NpiIdentity::default();
        };
        NpiIdentity {
            npi: string_field(block, "npi"),
            provider_name: string_field(block, "providerName"),
            entity_type: string_field(block, "entityType"),
            enumeration_date: string_field(block, "enumerationDate"),
            update_date: string_field(block, "updateDate"),
            status: string_field(block, "status"),
            provider_type: string_field(block, "providerType"),
        }
    }

    /// Taxonomy `code` strings from the license entries, in order. Each
    /// entry contributes its top-level `code`, falling back to
    /// `details.code`.
    pub fn taxonomy_codes(&self) -> Vec<String> {
        self.raw_licenses()
            .iter()
            .filter_map(|entry| {
                let object = entry.as_object()?;
                match string_field(object, "code") {
                    Some(code) => Some(code),
                    None => object
                        .get("details")
                        .and_then(Value::as_object)
                        .and_then(|details| string_field(details, "code")),
                }
            })
            .collect()
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
