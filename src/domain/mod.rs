//! Domain Layer
//!
//! The core of regen - change detection without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Fingerprint sets
//! - `value_objects/` - Immutable value types (Unit, Layout, ContentHash)
//! - `services/` - Invalidation planner
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or processes directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
