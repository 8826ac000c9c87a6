//! Public URL normalization for stored images

/// Resolve a stored image reference to a public URL.
///
/// Absolute (`http://`, `https://`) and protocol-relative (`//`) URLs are returned
/// unchanged. Anything else is treated as a path relative to the public storage
/// directory served under `{base_url}/storage/`.
pub fn normalize_image_url(path: Option<&str>, base_url: &str) -> Option<String> {
    let path = path?.trim();
    if path.is_empty() {
        return None;
    }

    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        return Some(path.to_string());
    }

    let relative = path.trim_start_matches('/');
    let relative = relative.strip_prefix("storage/").unwrap_or(relative);

    Some(format!(
        "{}/storage/{}",
        base_url.trim_end_matches('/'),
        relative
    ))
}
