//! Animations panel widget
//!
//! Ordered list of Animation names with move/rename/delete controls.
//! The list is a projection of the document's current child order,
//! rebuilt by the caller every frame; all edits go out as events.

mod animations;
pub mod animations_ui;

pub use animations::{AnimationsActions, AnimationsState};
pub use animations_ui::render;
