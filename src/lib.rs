//! anm2-reorderer - reorder tool for .anm2 animation files
//!
//! Re-exports all modules for use by the binary target.

// Core plumbing (event queue, event types)
pub mod core;

// App modules
pub mod cli;
pub mod entities;
pub mod main_events;
pub mod widgets;

// Re-export commonly used types from core
pub use core::event_bus::{BoxedEvent, EventBus, downcast_event};

// Re-export entities
pub use entities::{Anm2Document, Direction};
