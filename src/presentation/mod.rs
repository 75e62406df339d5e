//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Rendering plans (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Plan rendering for `regen plan`
//!
//! ## Usage
//!
//! ```ignore
//! use regen::presentation::factory;
//!
//! let use_case = factory::create_run_use_case(&project_root, &config, ChildStdout::Inherit)?;
//! let report = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use factory::{create_run_use_case, run_options, ConcreteRunUseCase};
