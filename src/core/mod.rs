//! Core plumbing: event queue and event types.

pub mod doc_events;
pub mod event_bus;
