#![deny(unsafe_code)]

//! Rule registry keyed by normalized provider-type name.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use cred_model::RequirementRule;
use cred_taxonomy::normalize_label;

use crate::catalog::{ProviderTypeRules, builtin_catalog};
use crate::error::{Result, RulesError};

/// Lookup table from normalized provider-type name to its rule set.
///
/// Keys are produced by [`cred_taxonomy::normalize_label`], so lookups
/// tolerate the same spelling drift the resolver does.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    entries: BTreeMap<String, ProviderTypeRules>,
}

impl RuleRegistry {
    /// Registry backed by the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table violates the duplicate invariants,
    /// which would be a programming error in the catalog itself.
    pub fn builtin() -> Self {
        Self::from_catalog(builtin_catalog()).expect("builtin catalog is duplicate-free")
    }

    /// Builds a registry from a catalog, rejecting duplicate provider
    /// types and duplicate requirement types within one provider type.
    pub fn from_catalog(catalog: Vec<ProviderTypeRules>) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for entry in catalog {
            let mut seen = Vec::with_capacity(entry.rules.len());
            for rule in &entry.rules {
                if seen.contains(&rule.base.requirement_type) {
                    return Err(RulesError::DuplicateRequirement {
                        provider_type: entry.name.clone(),
                        requirement_type: rule.base.requirement_type.to_string(),
                    });
                }
                seen.push(rule.base.requirement_type.clone());
            }

            let key = normalize_label(&entry.name);
            let name = entry.name.clone();
            if entries.insert(key, entry).is_some() {
                return Err(RulesError::DuplicateProviderType { name });
            }
        }
        debug!(provider_types = entries.len(), "Rule registry loaded");
        Ok(Self { entries })
    }

    /// Parses a catalog document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let catalog: Vec<ProviderTypeRules> = serde_json::from_str(text)?;
        Self::from_catalog(catalog)
    }

    /// Loads a catalog document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| RulesError::io(path, e))?;
        let catalog: Vec<ProviderTypeRules> =
            serde_json::from_str(&text).map_err(|e| RulesError::json(path, e))?;
        Self::from_catalog(catalog)
    }

    /// Rule set for a provider type, looked up through name normalization.
    pub fn rules_for(&self, provider_type: &str) -> Option<&[RequirementRule]> {
        self.entries
            .get(&normalize_label(provider_type))
            .map(|entry| entry.rules.as_slice())
    }

    /// Catalog entry for a provider type, if registered.
    pub fn entry_for(&self, provider_type: &str) -> Option<&ProviderTypeRules> {
        self.entries.get(&normalize_label(provider_type))
    }

    /// All registered provider types, sorted by normalized name.
    pub fn provider_types(&self) -> impl Iterator<Item = &ProviderTypeRules> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
