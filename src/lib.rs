// src/lib.rs
//! Credential tooling core: password strength estimation and generation,
//! a free-text/CSV credential import parser, and a security audit over
//! stored credential records.
//!
//! Everything in the library layer is synchronous and side-effect-free;
//! randomness in generation is the only non-determinism. The surrounding
//! application owns persistence and hands records back and forth as plain
//! data.

pub mod audit;
pub mod cli;
pub mod core;
pub mod generators;
pub mod importers;
pub mod models;
pub mod utils;

pub use audit::{analyze, SecurityIssue, SecurityReport};
pub use generators::{estimate_strength, generate_password, StrengthEstimate, MAX_SCORE};
pub use importers::{parse, parse_file, ImportError, ImportFormat, DEFAULT_CATEGORY};
pub use models::{Credential, GenerationOptions, ParsedCredential, Strength};
