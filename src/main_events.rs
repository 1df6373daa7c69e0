//! Application event handling - extracted from main.rs for clarity.
//!
//! In-memory mutations (select, move, rename, delete) are applied
//! immediately against [`AppState`]. Anything that needs a file dialog
//! or file I/O is returned as a deferred action in [`EventResult`] and
//! executed by the app after the poll loop, so dialogs never run while
//! the event queue is being drained.

use log::{debug, error, warn};
use std::path::PathBuf;

use crate::core::doc_events::*;
use crate::core::event_bus::{BoxedEvent, downcast_event};
use crate::entities::{Anm2Document, Direction};

/// The single open document plus the UI-facing bits derived from it.
///
/// Replace-on-load rule: a successful load replaces `document`
/// wholesale and resets selection and error; a failed load reports the
/// error and leaves the previously loaded document (if any) and
/// selection untouched.
#[derive(Default)]
pub struct AppState {
    pub document: Option<Anm2Document>,
    /// Selected animation, tracked by name so selection follows the
    /// element through reorders rather than sticking to a row index.
    pub selected: Option<String>,
    pub error_msg: Option<String>,
}

impl AppState {
    /// Current name projection. Empty when nothing is loaded or the
    /// file has no Animations element.
    pub fn animation_names(&self) -> Vec<String> {
        self.document
            .as_ref()
            .map(Anm2Document::animation_names)
            .unwrap_or_default()
    }

    /// Load `path`, replacing any open document on success.
    pub fn load_document(&mut self, path: PathBuf) {
        match Anm2Document::load(&path) {
            Ok(doc) => {
                self.document = Some(doc);
                self.selected = None;
                self.error_msg = None;
            }
            Err(e) => {
                error!("{}", e);
                self.error_msg = Some(e);
            }
        }
    }

    /// Save to `path`, or back to the load path when `path` is None.
    /// No-op when no document is open.
    pub fn save_document(&mut self, path: Option<PathBuf>) {
        let Some(doc) = self.document.as_mut() else {
            return;
        };
        let result = match path {
            Some(path) => doc.save(path),
            None => doc.save_in_place(),
        };
        if let Err(e) = result {
            error!("{}", e);
            self.error_msg = Some(e);
        }
    }
}

/// Result of handling an app event - may contain deferred actions.
#[derive(Default)]
pub struct EventResult {
    pub load_document: Option<PathBuf>,
    pub save_document: Option<PathBuf>,
    pub quick_save: bool,
    pub show_open_dialog: bool,
    pub show_save_as_dialog: bool,
    pub exit: bool,
}

/// Handle a single app event (called from the main poll loop).
/// Returns Some(result) if the event was recognized, None otherwise.
pub fn handle_app_event(event: &BoxedEvent, state: &mut AppState) -> Option<EventResult> {
    let mut result = EventResult::default();

    // === Animation list (immediate, in-memory) ===
    if let Some(e) = downcast_event::<SelectAnimationEvent>(event) {
        state.selected = Some(e.0.clone());
        return Some(result);
    }
    if let Some(e) = downcast_event::<MoveAnimationEvent>(event) {
        move_animation(state, &e.name, e.direction);
        return Some(result);
    }
    if let Some(e) = downcast_event::<RenameAnimationEvent>(event) {
        rename_animation(state, &e.old_name, &e.new_name);
        return Some(result);
    }
    if let Some(e) = downcast_event::<DeleteAnimationEvent>(event) {
        delete_animation(state, &e.0);
        return Some(result);
    }

    // === File actions (deferred) ===
    if let Some(e) = downcast_event::<LoadDocumentEvent>(event) {
        result.load_document = Some(e.0.clone());
        return Some(result);
    }
    if let Some(e) = downcast_event::<SaveDocumentEvent>(event) {
        result.save_document = Some(e.0.clone());
        return Some(result);
    }
    if downcast_event::<QuickSaveEvent>(event).is_some() {
        result.quick_save = true;
        return Some(result);
    }
    if downcast_event::<OpenFileDialogEvent>(event).is_some() {
        result.show_open_dialog = true;
        return Some(result);
    }
    if downcast_event::<SaveAsDialogEvent>(event).is_some() {
        result.show_save_as_dialog = true;
        return Some(result);
    }
    if downcast_event::<ExitEvent>(event).is_some() {
        result.exit = true;
        return Some(result);
    }

    None
}

fn move_animation(state: &mut AppState, name: &str, direction: Direction) {
    let Some(doc) = state.document.as_mut() else {
        return;
    };
    if doc.shift_animation(name, direction) {
        // Keep the moved name selected so the row follows the element
        // to its new position.
        state.selected = Some(name.to_string());
        debug!("Moved {:?} {:?}", name, direction);
    }
}

fn rename_animation(state: &mut AppState, old_name: &str, new_name: &str) {
    if new_name.is_empty() || new_name == old_name {
        return;
    }
    let Some(doc) = state.document.as_mut() else {
        return;
    };
    match doc.rename_animation(old_name, new_name) {
        Ok(()) => {
            if state.selected.as_deref() == Some(old_name) {
                state.selected = Some(new_name.to_string());
            }
            debug!("Renamed {:?} to {:?}", old_name, new_name);
        }
        Err(e) => {
            warn!("Rename failed: {}", e);
            state.error_msg = Some(e.to_string());
        }
    }
}

fn delete_animation(state: &mut AppState, name: &str) {
    let Some(doc) = state.document.as_mut() else {
        return;
    };
    match doc.delete_animation(name) {
        Ok(()) => {
            if state.selected.as_deref() == Some(name) {
                state.selected = None;
            }
            debug!("Deleted {:?}", name);
        }
        Err(e) => {
            warn!("Delete failed: {}", e);
            state.error_msg = Some(e.to_string());
        }
    }
}
