//! Tests for the costlens host
//!
//! - `project` - YAML project files
//! - `app` - Request handling and report rendering
//! - `cli` - Argument parsing into requests
//! - `logging` - Log rotation

mod cli;
