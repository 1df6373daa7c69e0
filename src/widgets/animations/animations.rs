//! Animations panel actions and state.

use crate::core::event_bus::{BoxedEvent, Event};

/// Panel result - all actions via events
#[derive(Default)]
pub struct AnimationsActions {
    pub events: Vec<BoxedEvent>,
}

impl AnimationsActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push event to be dispatched
    pub fn send<E: Event>(&mut self, event: E) {
        self.events.push(Box::new(event));
    }
}

/// Widget-local state that survives across frames (rename modal).
#[derive(Default)]
pub struct AnimationsState {
    pub rename_target: Option<String>,
    pub rename_buffer: String,
    pub rename_needs_focus: bool,
}

impl AnimationsState {
    /// Open the rename modal for `name`, pre-filled with the current name.
    pub fn open_rename(&mut self, name: &str) {
        self.rename_target = Some(name.to_string());
        self.rename_buffer = name.to_string();
        self.rename_needs_focus = true;
    }

    pub fn close_rename(&mut self) {
        self.rename_target = None;
        self.rename_buffer.clear();
        self.rename_needs_focus = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::doc_events::SelectAnimationEvent;
    use crate::core::event_bus::downcast_event;

    #[test]
    fn test_actions_collect_events() {
        let mut actions = AnimationsActions::new();
        actions.send(SelectAnimationEvent("Idle".to_string()));
        assert_eq!(actions.events.len(), 1);
        assert!(downcast_event::<SelectAnimationEvent>(&actions.events[0]).is_some());
    }

    #[test]
    fn test_rename_state_lifecycle() {
        let mut state = AnimationsState::default();
        state.open_rename("Walk");
        assert_eq!(state.rename_target.as_deref(), Some("Walk"));
        assert_eq!(state.rename_buffer, "Walk");
        assert!(state.rename_needs_focus);

        state.close_rename();
        assert!(state.rename_target.is_none());
        assert!(state.rename_buffer.is_empty());
    }
}
