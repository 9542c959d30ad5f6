//! Configuration system for canopath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `canopath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of directories and modes
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (CANOPATH_*)
//! 3. Project config (`canopath.yaml`, nearest ancestor of the working dir)
//! 4. User config (`~/.canopath/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use canopath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("exec mode: {}", config.exec_mode());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DirMode, MkdirConfig};
pub use validator::ConfigValidator;
