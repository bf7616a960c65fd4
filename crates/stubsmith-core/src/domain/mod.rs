//! Core domain layer for stubsmith.
//!
//! This module contains the pure stub-processing rules with no I/O. File
//! enumeration and writing are handled via ports defined in the application
//! layer.
//!
//! ## What lives here
//!
//! - **Suffix matching**: [`PreserveSuffixes`] normalisation and lookup
//! - **Name rewriting**: [`derive_file_name`]
//! - **Content rewriting**: [`DeclarationScanner`] / [`rewrite_declaration`]
//! - **Entities**: [`GenerationConfig`], [`GenerationRequest`], [`StubFile`],
//!   [`GeneratedFile`]
//!
// Public API - what the world sees
pub mod declaration;
pub mod entities;
pub mod error;
pub mod naming;
pub mod suffix;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use declaration::{DEFAULT_KEYWORD, Declaration, DeclarationScanner, rewrite_declaration};
pub use entities::{
    GeneratedFile, GenerationConfig, GenerationRequest, GenerationRequestBuilder, StubFile,
};
pub use error::{DomainError, ErrorCategory};
pub use naming::{derive_file_name, split_file_name};
pub use suffix::PreserveSuffixes;
pub use validation::DomainValidator;
