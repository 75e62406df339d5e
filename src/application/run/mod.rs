//! Run Module
//!
//! Orchestrates one regeneration pass.
//!
//! ## Structure
//!
//! - `options` - Run parameters (`RunOptions`)
//! - `result` - Run outcome (`RunReport`)
//! - `use_case` - Pipeline logic (`RunUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use regen::application::run::{RunOptions, RunUseCase};
//!
//! let use_case = RunUseCase::new(discovery, store, runner, fs, layout);
//! let report = use_case.execute(&RunOptions::for_project(root))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::RunOptions;
pub use result::RunReport;
pub use use_case::RunUseCase;
