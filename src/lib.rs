//! # phototools
//!
//! Batch tools for directories of scanned photos.
//!
//! ## Usage
//!
//! ```bash
//! phototools rename <DIR> [--dry-run]
//! phototools pad <DIR> [black|white]
//! phototools neg <DIR>
//! phototools merge <DIR> <AMOUNT> <row|column> <row|column> [--dry-run]
//! ```
//!
//! ## Modules
//!
//! - `abstractions` - Trait-based image I/O so batches can run against a mock
//! - `app` - Logging setup and fatal error handling
//! - `batch` - Orchestration of the four batch commands
//! - `cli` - Argument parsing and command routing
//! - `config` - Layered configuration from TOML and the environment
//! - `core` - Pure filename resequencing and grid layout planning
//! - `error` - Error type with codes and exit statuses
pub mod abstractions;
pub mod app;
pub mod batch;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
