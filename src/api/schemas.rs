//! Request schemas
//!
//! The JSON Schemas under `schemas/` are embedded at build time and compiled
//! once when the API state is created.

use jsonschema::Validator;
use serde_json::Value;

use super::rejection::ApiError;
use crate::errors::JoblyError;

/// Every payload shape the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    CompanyNew,
    CompanyUpdate,
    CompanySearch,
    JobNew,
    JobUpdate,
    JobSearch,
}

impl SchemaKind {
    const ALL: [SchemaKind; 6] = [
        SchemaKind::CompanyNew,
        SchemaKind::CompanyUpdate,
        SchemaKind::CompanySearch,
        SchemaKind::JobNew,
        SchemaKind::JobUpdate,
        SchemaKind::JobSearch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SchemaKind::CompanyNew => "companyNew",
            SchemaKind::CompanyUpdate => "companyUpdate",
            SchemaKind::CompanySearch => "companySearch",
            SchemaKind::JobNew => "jobNew",
            SchemaKind::JobUpdate => "jobUpdate",
            SchemaKind::JobSearch => "jobSearch",
        }
    }

    fn source(self) -> &'static str {
        match self {
            SchemaKind::CompanyNew => include_str!("../../schemas/companyNew.json"),
            SchemaKind::CompanyUpdate => include_str!("../../schemas/companyUpdate.json"),
            SchemaKind::CompanySearch => include_str!("../../schemas/companySearch.json"),
            SchemaKind::JobNew => include_str!("../../schemas/jobNew.json"),
            SchemaKind::JobUpdate => include_str!("../../schemas/jobUpdate.json"),
            SchemaKind::JobSearch => include_str!("../../schemas/jobSearch.json"),
        }
    }
}

/// Compiled validators, indexed by [`SchemaKind`].
pub struct SchemaRegistry {
    validators: Vec<(SchemaKind, Validator)>,
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.validators.iter().map(|(kind, _)| kind.name()))
            .finish()
    }
}

impl SchemaRegistry {
    pub fn new() -> Result<Self, JoblyError> {
        let mut validators = Vec::with_capacity(SchemaKind::ALL.len());

        for kind in SchemaKind::ALL {
            let schema: Value = serde_json::from_str(kind.source())
                .map_err(|e| JoblyError::Schema(format!("{}: {}", kind.name(), e)))?;
            let validator = jsonschema::validator_for(&schema)
                .map_err(|e| JoblyError::Schema(format!("{}: {}", kind.name(), e)))?;
            validators.push((kind, validator));
        }

        Ok(Self { validators })
    }

    /// Collect every violation of `kind`'s schema into a 400 error.
    pub fn validate(&self, kind: SchemaKind, instance: &Value) -> Result<(), ApiError> {
        let Some((_, validator)) = self.validators.iter().find(|(k, _)| *k == kind) else {
            return Err(ApiError::Internal(format!("schema {} not loaded", kind.name())));
        };

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    format!("instance {}", e)
                } else {
                    format!("instance{} {}", path.replace('/', "."), e)
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Invalid(errors))
        }
    }
}
