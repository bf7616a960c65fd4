use std::path::Path;

use crate::domain::{
    entities::{GenerationConfig, GenerationRequest},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &GenerationRequest) -> Result<(), DomainError> {
        request.validate()
    }

    pub fn validate_config(config: &GenerationConfig) -> Result<(), DomainError> {
        if config.stub_source_dir() == Path::new("") {
            return Err(DomainError::MissingRequiredField {
                field: "stubs_path",
            });
        }
        Ok(())
    }
}
