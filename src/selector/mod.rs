use crate::domain::Icon;

/// Pick the biggest icon with the most preferred extension.
///
/// Preferences are tried in order; within one extension the largest icon
/// wins. With no preferences, or when none of them match, the largest icon
/// overall is returned.
pub fn select_best<S: AsRef<str>>(mut icons: Vec<Icon>, preference: &[S]) -> Option<Icon> {
    if icons.is_empty() {
        return None;
    }
    icons.sort_by(|a, b| b.size().cmp(&a.size()));
    if icons.len() == 1 || preference.is_empty() {
        return icons.into_iter().next();
    }

    let chosen = preference
        .iter()
        .map(|pref| normalize_ext(pref.as_ref()))
        .find_map(|pref| icons.iter().position(|icon| icon.ext() == pref))
        .unwrap_or(0);

    Some(icons.swap_remove(chosen))
}

/// `".PNG"` and `"png"` name the same preference.
fn normalize_ext(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}
