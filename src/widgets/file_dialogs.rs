//! Shared file dialog helpers for widget and menu UI.

/// Create configured file dialog for .anm2 selection.
pub fn create_anm2_dialog(title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .add_filter("anm2 animation files", &["anm2", "xml"])
        .add_filter("All files", &["*"])
        .set_title(title)
}
