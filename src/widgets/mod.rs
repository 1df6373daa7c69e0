//! UI widgets - self-contained panels communicating via the event queue.

pub mod animations;
pub mod file_dialogs;
