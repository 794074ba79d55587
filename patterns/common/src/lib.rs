//! # Patterns Common
//!
//! Shared building blocks for the interview pattern crates.
//!
//! ## Modules
//!
//! - [`arena`]: Singly linked lists stored in an index-based arena
//! - [`error`]: The [`PatternError`] type for contract violations
//! - [`exercise`]: Metadata describing each exercise (pattern, difficulty, complexity)
//! - [`telemetry`]: One-shot `tracing` subscriber setup for binaries
//!
//! ## Design Principles
//!
//! 1. **No `Rc<RefCell<T>>`**: list nodes live in a `Vec` and link through [`NodeId`]s
//! 2. **Explicit absence**: "no successor" is `Option<NodeId>`, never a null pointer
//! 3. **Sentinels for not-found**: misses return `None`/`-1`; errors are for broken inputs

pub mod arena;
pub mod error;
pub mod exercise;
pub mod telemetry;

// Re-export main types for convenience
pub use arena::{ListNode, NodeArena, NodeId};
pub use error::{PatternError, Result};
pub use exercise::{Difficulty, ExerciseInfo, Pattern};
