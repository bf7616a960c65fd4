//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate files from a stub profile".

pub mod stub_processor;

pub use stub_processor::{GenerationReport, StubProcessor};
