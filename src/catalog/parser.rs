use super::model::Category;

/// Parse a raw text blob into an ordered category list.
///
/// One category per line, `<name>: <option>, <option>, ...`. Only the
/// first colon is structural, so option values may themselves contain
/// colons. Lines with no name part or no surviving options are skipped
/// silently; partial input is still usable.
pub fn parse_text_input(input: &str) -> Vec<Category> {
    input.trim().lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Category> {
    let (name, options_str) = line.split_once(':')?;
    // The name side must be non-empty before trimming; a line starting
    // with its colon has no name part at all. A whitespace-only name
    // survives and trims down to an empty label.
    if name.is_empty() {
        return None;
    }
    let name = name.trim();

    let options: Vec<String> = options_str
        .split(',')
        .map(str::trim)
        .filter(|opt| !opt.is_empty())
        .map(str::to_string)
        .collect();
    if options.is_empty() {
        return None;
    }

    Some(Category::new(name, options))
}
