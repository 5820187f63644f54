//! Class-string composition helpers.

/// Joins class fragments with single spaces.
///
/// Each fragment may itself hold several classes. Empty fragments are skipped
/// and a class that already appeared is dropped, keeping first-seen order.
pub fn merge_classes<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for class in fragments.into_iter().flat_map(str::split_whitespace) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}

pub(crate) fn merge_layout_class(base: String, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.trim().is_empty() => {
            merge_classes([base.as_str(), layout_class])
        }
        _ => base,
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
