//! CSS rule text built from lists of items.

/// Build one CSS rule whose selector list comes from `items`.
///
/// Each item is turned into a selector by `selector`, selectors are joined
/// with `", "`, and the declarations in `style` are wrapped in braces. No
/// items means no rule, so the result is empty.
pub fn make_styles_from_items<T>(
    items: &[T],
    selector: impl Fn(&T) -> String,
    style: &str,
) -> String {
    if items.is_empty() {
        return String::new();
    }

    let selectors: Vec<String> = items.iter().map(selector).collect();
    format!("{} {{ {} }}", selectors.join(", "), style)
}
