//! Mason Args - flag registry and argument dispatcher.
//!
//! A deliberately small alternative to full CLI frameworks: callers register
//! named callbacks (with auto-derived or explicit short forms) in a
//! [`FlagRegistry`], then run a single dispatch pass over the raw process
//! argument vector. Each `-`/`--` token is resolved against the registry and
//! its callback is invoked with the adjacent value, if one follows.
//!
//! ## Lifecycle
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  FlagRegistry::new()         │   empty registry
//! └──────────────┬───────────────┘
//!                │ add_flag / add_flag_with_short
//!                ▼
//! ┌──────────────────────────────┐
//! │  registered descriptors      │   insertion-ordered Vec
//! └──────────────┬───────────────┘
//!                │ dispatch(self, args, required_positionals)
//!                ▼
//! ┌──────────────────────────────┐
//! │  callbacks fire in encounter │   registry consumed and dropped
//! │  order, left to right        │
//! └──────────────────────────────┘
//! ```
//!
//! The registry is single-use: `dispatch` takes it by value, so the borrow
//! checker rejects any attempt to reuse it afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use std::cell::RefCell;
//! use mason_args::FlagRegistry;
//!
//! let verbose = RefCell::new(false);
//! let name = RefCell::new(None::<String>);
//!
//! let mut registry = FlagRegistry::new();
//! registry.add_flag("verbose", |_| *verbose.borrow_mut() = true);
//! registry.add_flag("name", |value| {
//!     *name.borrow_mut() = value.map(str::to_owned);
//! });
//!
//! let args = ["prog", "project", "-n", "demo", "--verbose"];
//! registry.dispatch(&args, 1);
//!
//! assert!(*verbose.borrow());
//! assert_eq!(name.borrow().as_deref(), Some("demo"));
//! ```

pub mod dispatch;
pub mod registry;

pub use registry::{Flag, FlagHandle, FlagRegistry, derive_short_form};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
