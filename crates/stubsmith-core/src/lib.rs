//! stubsmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the stubsmith
//! code generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stubsmith-cli (CLI)            │
//! │   (profiles, flags, output, exit codes) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (StubProcessor)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stubsmith-adapters (Infrastructure)  │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (PreserveSuffixes, DeclarationScanner)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stubsmith_core::{
//!     application::{StubProcessor, ports::Filesystem},
//!     domain::{GenerationConfig, GenerationRequest},
//! };
//!
//! # fn demo(filesystem: Box<dyn Filesystem>) -> stubsmith_core::error::StubsmithResult<()> {
//! // 1. Resolve a config (normally from a named profile)
//! let config = GenerationConfig::new("stubs", "app")
//!     .with_preserve_suffixes(["Controller", "Service"]);
//!
//! // 2. Describe the request
//! let request = GenerationRequest::builder().base_name("User").build()?;
//!
//! // 3. Generate with an injected filesystem adapter
//! let written = StubProcessor::new(filesystem).generate(&config, &request)?;
//! println!("{written} files generated");
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{GenerationReport, StubProcessor, ports::Filesystem};
    pub use crate::domain::{
        DeclarationScanner, GeneratedFile, GenerationConfig, GenerationRequest, PreserveSuffixes,
        StubFile, derive_file_name, rewrite_declaration,
    };
    pub use crate::error::{StubsmithError, StubsmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
