/// Window-level UI flags that are not part of the page content.
#[derive(Debug, Default)]
pub struct AppState {
    pub show_about_dialog: bool,
    /// Minimized state seen on the previous frame
    pub was_minimized: bool,
}
