pub mod config;
pub mod request;
pub mod stub;

pub use crate::domain::DomainError;
pub use config::GenerationConfig;
pub use request::{GenerationRequest, GenerationRequestBuilder};
pub use stub::{GeneratedFile, StubFile};
