//! Topbar view-model: search box plus the quick-create action.

use crate::ui::UiIntent;

/// Search input state for the topbar.
#[derive(Debug, Default)]
pub struct Topbar {
    query: String,
}

impl Topbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search box contents.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Records a keystroke's full value and emits the matching search
    /// intent.
    pub fn input(&mut self, value: impl Into<String>) -> UiIntent {
        self.query = value.into();
        UiIntent::Search(self.query.clone())
    }

    /// Clears the search box.
    pub fn clear(&mut self) -> UiIntent {
        self.input("")
    }

    /// Quick-create action next to the search box.
    pub fn create_intent(&self) -> UiIntent {
        UiIntent::CreateNote
    }
}
