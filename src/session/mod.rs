//! In-memory editing session. The raw text is the single source of
//! truth; the category list is reparsed from it on every change, and
//! cell edits write back through to the text so the two stay in sync.


use crate::catalog::{catalog_to_text, generate_combination, parse_text_input, Category, Selection};

#[derive(Debug, Clone, Default)]
pub struct Session {
    text: String,
    categories: Vec<Category>,
    selection: Selection,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.set_text(text);
        session
    }

    /// Replace the source text, reparse, and drop selection entries
    /// whose indices no longer resolve.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.categories = parse_text_input(&self.text);
        self.selection = self.selection.pruned(&self.categories);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn toggle(&mut self, category: usize, option: usize) {
        self.selection.toggle(category, option);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The current combination string, recomputed on every call.
    pub fn combination(&self) -> String {
        generate_combination(&self.categories, &self.selection)
    }

    /// Rename one category in place. Out-of-range indices are no-ops.
    pub fn rename_category(&mut self, index: usize, name: &str) {
        if let Some(category) = self.categories.get_mut(index) {
            category.name = name.to_string();
            self.sync_text();
        }
    }

    /// Rewrite one option's text in place. Out-of-range indices are
    /// no-ops.
    pub fn rewrite_option(&mut self, category: usize, option: usize, value: &str) {
        if let Some(slot) = self
            .categories
            .get_mut(category)
            .and_then(|cat| cat.options.get_mut(option))
        {
            *slot = value.to_string();
            self.sync_text();
        }
    }

    fn sync_text(&mut self) {
        self.text = catalog_to_text(&self.categories);
    }
}
