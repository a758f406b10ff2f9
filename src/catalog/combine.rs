use super::model::Category;
use super::selection::Selection;

/// Derive the display string for the current selections.
///
/// One segment per category with at least one chosen option, in category
/// order: `"<name>: <opt>, <opt>"`, segments joined with `" | "`. Chosen
/// options appear in index order. Indices that point past the current
/// category or option bounds contribute nothing; selections can go stale
/// between a reparse and the next toggle, and that must never fault.
pub fn generate_combination(categories: &[Category], selection: &Selection) -> String {
    let segments: Vec<String> = categories
        .iter()
        .enumerate()
        .filter_map(|(index, category)| {
            let chosen = selection.options_for(index)?;
            let options: Vec<&str> = chosen
                .iter()
                .filter_map(|&opt| category.options.get(opt).map(String::as_str))
                .collect();
            if options.is_empty() {
                return None;
            }
            Some(format!("{}: {}", category.name, options.join(", ")))
        })
        .collect();
    segments.join(" | ")
}
