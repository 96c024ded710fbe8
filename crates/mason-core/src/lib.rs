//! Mason Core - scaffolding domain and services.
//!
//! This crate holds everything the `mason` CLI needs to create a project
//! once its arguments are parsed: the [`options::ProjectOptions`] value
//! object, default-skeleton generation, template copying with placeholder
//! substitution, and the [`scaffold::ScaffoldService`] orchestrator.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            mason-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            ScaffoldService              │
//! │     (validate, plan, write, rollback)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Filesystem port (trait)         │
//! │   LocalFilesystem / MemoryFilesystem    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The filesystem is the only external dependency, reached through a port so
//! every flow runs unchanged under the in-memory test adapter.

pub mod error;
pub mod fs;
pub mod options;
pub mod render;
pub mod scaffold;
pub mod skeleton;
pub mod structure;
pub mod templates;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::error::{ErrorCategory, ScaffoldError, ScaffoldResult};
    pub use crate::fs::{Filesystem, LocalFilesystem, MemoryFilesystem};
    pub use crate::options::{ProjectOptions, validate_project_name};
    pub use crate::render::RenderContext;
    pub use crate::scaffold::ScaffoldService;
    pub use crate::skeleton::{BUILD_MANIFEST, project_skeleton};
    pub use crate::structure::ProjectStructure;
    pub use crate::templates::available_templates;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
