use serde::{Deserialize, Serialize};

/// A named group of selectable text options, derived from one input line.
///
/// Categories carry no identity across parses: every reparse of the
/// source text rebuilds the full list from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub options: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// Render this category back to its one-line text form.
    pub fn to_line(&self) -> String {
        format!("{}: {}", self.name, self.options.join(", "))
    }
}

/// Render a category list back to the text form the parser accepts,
/// one category per line.
pub fn catalog_to_text(categories: &[Category]) -> String {
    categories
        .iter()
        .map(Category::to_line)
        .collect::<Vec<_>>()
        .join("\n")
}
