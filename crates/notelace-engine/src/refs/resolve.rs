use relative_path::{Component, RelativePath, RelativePathBuf};

/// Resolves a raw page reference against the location of the current page.
///
/// A reference starting with `/` is already absolute: the separator is
/// stripped and the rest normalized. Anything else is joined to the
/// directory containing `current_page` and normalized. `..` segments that
/// would climb above the space root are dropped.
///
/// Pure and idempotent: resolving `/` + an already-resolved reference
/// yields the same reference.
pub fn resolve_path(current_page: &str, reference: &str) -> String {
    let joined = match reference.strip_prefix('/') {
        Some(absolute) => RelativePath::new(absolute).normalize(),
        None => {
            let dir = RelativePath::new(current_page)
                .parent()
                .unwrap_or_else(|| RelativePath::new(""));
            dir.join_normalized(reference)
        }
    };

    // normalize() keeps leading `..` components; clamp them to the root.
    let mut out = RelativePathBuf::new();
    for component in joined.components() {
        if let Component::Normal(segment) = component {
            out.push(segment);
        }
    }
    out.into_string()
}
