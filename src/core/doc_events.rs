//! Document and animation-list events.

use std::path::PathBuf;

use crate::entities::Direction;

// === File menu ===

/// Show the Open file picker
#[derive(Clone, Debug)]
pub struct OpenFileDialogEvent;

/// Show the Save As file picker
#[derive(Clone, Debug)]
pub struct SaveAsDialogEvent;

/// Quick save event - saves to the loaded path or falls back to Save As
#[derive(Clone, Debug)]
pub struct QuickSaveEvent;

#[derive(Clone, Debug)]
pub struct LoadDocumentEvent(pub PathBuf);

#[derive(Clone, Debug)]
pub struct SaveDocumentEvent(pub PathBuf);

#[derive(Clone, Debug)]
pub struct ExitEvent;

// === Animation list ===

#[derive(Clone, Debug)]
pub struct SelectAnimationEvent(pub String);

#[derive(Clone, Debug)]
pub struct MoveAnimationEvent {
    pub name: String,
    pub direction: Direction,
}

#[derive(Clone, Debug)]
pub struct RenameAnimationEvent {
    pub old_name: String,
    pub new_name: String,
}

#[derive(Clone, Debug)]
pub struct DeleteAnimationEvent(pub String);
