//! Requirement rules evaluated against a provider's credentials.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable requirement-type key connecting a rule to a credential category.
///
/// Keys are matched case-insensitively on the wire (`"LICENSE"` and
/// `"license"` are the same rule type). Types outside the known set are kept
/// verbatim so foreign rule sets still load; they evaluate to invalid because
/// no credential category corresponds to them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequirementType {
    /// State practice license.
    License,
    /// Controlled-substance registration.
    Registration,
    /// Board or other certification.
    Certification,
    /// Provider identifier (NPI).
    Identifier,
    /// Anything else, preserved as received.
    Unknown(String),
}

impl RequirementType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "license" => RequirementType::License,
            "registration" => RequirementType::Registration,
            "certification" => RequirementType::Certification,
            "identifier" | "npi" => RequirementType::Identifier,
            _ => RequirementType::Unknown(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RequirementType::License => "license",
            RequirementType::Registration => "registration",
            RequirementType::Certification => "certification",
            RequirementType::Identifier => "identifier",
            RequirementType::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for RequirementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for RequirementType {
    fn from(raw: String) -> Self {
        RequirementType::parse(&raw)
    }
}

impl From<RequirementType> for String {
    fn from(requirement_type: RequirementType) -> Self {
        requirement_type.as_str().to_string()
    }
}

/// One validation predicate attached to a requirement rule.
///
/// The set is closed: rules configure behavior by combining these kinds, not
/// by free-form key/value maps. `IssuerContains` and `TypeContains` narrow
/// which licenses a rule considers at all; `ActiveStatus` and `NotExpired`
/// decide whether a considered license counts as a valid match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RulePredicate {
    /// License status must case-insensitively equal `"active"`.
    ActiveStatus,
    /// Expiration date, when present, must parse and lie strictly in the
    /// future; unparseable dates fail.
    NotExpired,
    /// Issuer must contain the given text, case-insensitively.
    IssuerContains(String),
    /// License type must contain the given text, case-insensitively.
    TypeContains(String),
}

impl RulePredicate {
    /// True for predicates that narrow the candidate set rather than judge
    /// validity.
    pub fn is_filter(&self) -> bool {
        matches!(
            self,
            RulePredicate::IssuerContains(_) | RulePredicate::TypeContains(_)
        )
    }
}

/// A credentialing condition independent of any provider type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRequirement {
    pub id: u32,
    pub requirement_type: RequirementType,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation_rules: Vec<RulePredicate>,
}

/// A base requirement bound to one provider type's rule set.
///
/// Within a single rule set the `requirement_type` values must be unique;
/// the rule registry rejects sets that violate this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRule {
    #[serde(flatten)]
    pub base: BaseRequirement,
    pub is_required: bool,
}

impl RequirementRule {
    /// Filter predicates (`IssuerContains` / `TypeContains`) in rule order.
    pub fn filter_predicates(&self) -> impl Iterator<Item = &RulePredicate> {
        self.base
            .validation_rules
            .iter()
            .filter(|predicate| predicate.is_filter())
    }

    /// Validity predicates (`ActiveStatus` / `NotExpired`) in rule order.
    pub fn validity_predicates(&self) -> impl Iterator<Item = &RulePredicate> {
        self.base
            .validation_rules
            .iter()
            .filter(|predicate| !predicate.is_filter())
    }
}
