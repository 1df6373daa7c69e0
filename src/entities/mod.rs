//! Entities module - document model and reorder operations.
//!
//! The document tree is the single source of truth for animation order;
//! everything the UI shows is a projection rebuilt from it.

pub mod document;
pub mod reorder;

pub use document::Anm2Document;
pub use reorder::{Direction, animation_index, move_animation, shift_animation};
