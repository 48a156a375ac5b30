//! Sidebar view-model: navigation area with the New Note action.

use crate::ui::UiIntent;

/// Navigation sidebar. Currently a single action; sections come later.
#[derive(Debug, Default)]
pub struct Sidebar;

impl Sidebar {
    pub fn new() -> Self {
        Self
    }

    /// New Note button.
    pub fn create_intent(&self) -> UiIntent {
        UiIntent::CreateNote
    }
}
