#![deny(unsafe_code)]

//! Requirement templates shared by every provider type's rule set.
//!
//! Rules are not invented per provider type; each type combines these fixed
//! templates with its own required/optional flags. Predicate lists encode
//! the matching policy: `IssuerContains` / `TypeContains` narrow which
//! licenses a rule looks at, `ActiveStatus` / `NotExpired` decide validity.

use cred_model::{BaseRequirement, RequirementRule, RequirementType, RulePredicate};

/// The fixed requirement templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementTemplate {
    Npi,
    StateLicense,
    DeaRegistration,
    BoardCertification,
    CprCertification,
}

impl RequirementTemplate {
    pub fn all() -> [RequirementTemplate; 5] {
        [
            RequirementTemplate::Npi,
            RequirementTemplate::StateLicense,
            RequirementTemplate::DeaRegistration,
            RequirementTemplate::BoardCertification,
            RequirementTemplate::CprCertification,
        ]
    }

    /// Configuration key, as rule documents spell it.
    pub fn key(self) -> &'static str {
        match self {
            RequirementTemplate::Npi => "npi",
            RequirementTemplate::StateLicense => "stateLicense",
            RequirementTemplate::DeaRegistration => "deaRegistration",
            RequirementTemplate::BoardCertification => "boardCertification",
            RequirementTemplate::CprCertification => "cprCertification",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        RequirementTemplate::all()
            .into_iter()
            .find(|template| template.key() == key)
    }

    /// The template's base requirement, predicates included.
    pub fn base(self) -> BaseRequirement {
        match self {
            RequirementTemplate::Npi => BaseRequirement {
                id: 1,
                requirement_type: RequirementType::Identifier,
                name: "Valid NPI Number".to_string(),
                description: "Provider must have a valid NPI number".to_string(),
                // Identifier validity is special-cased; no predicates apply.
                validation_rules: vec![],
            },
            RequirementTemplate::StateLicense => BaseRequirement {
                id: 2,
                requirement_type: RequirementType::License,
                name: "State Medical License".to_string(),
                description: "Valid state medical license".to_string(),
                validation_rules: vec![RulePredicate::ActiveStatus, RulePredicate::NotExpired],
            },
            RequirementTemplate::DeaRegistration => BaseRequirement {
                id: 3,
                requirement_type: RequirementType::Registration,
                name: "DEA Registration".to_string(),
                description: "Valid DEA registration".to_string(),
                validation_rules: vec![
                    RulePredicate::ActiveStatus,
                    RulePredicate::NotExpired,
                    RulePredicate::IssuerContains("dea".to_string()),
                ],
            },
            RequirementTemplate::BoardCertification => BaseRequirement {
                id: 4,
                requirement_type: RequirementType::Certification,
                name: "Board Certification".to_string(),
                description: "Valid medical board certification".to_string(),
                validation_rules: vec![
                    RulePredicate::ActiveStatus,
                    RulePredicate::NotExpired,
                    RulePredicate::IssuerContains("abms".to_string()),
                ],
            },
            RequirementTemplate::CprCertification => BaseRequirement {
                id: 5,
                requirement_type: RequirementType::Certification,
                name: "CPR Certification".to_string(),
                description: "Current CPR certification".to_string(),
                validation_rules: vec![
                    RulePredicate::ActiveStatus,
                    RulePredicate::NotExpired,
                    RulePredicate::TypeContains("cpr".to_string()),
                    RulePredicate::IssuerContains("heart association".to_string()),
                ],
            },
        }
    }

    /// Bind the template into a provider type's rule set.
    pub fn rule(self, is_required: bool) -> RequirementRule {
        RequirementRule {
            base: self.base(),
            is_required,
        }
    }
}
