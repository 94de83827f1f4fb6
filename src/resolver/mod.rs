use url::Url;

/// Resolve `path` against the host of `root`, dropping query and fragment.
///
/// Only the hostname of `root` is kept; whatever path it carries is
/// discarded in favour of `path`, and a protocol-relative `path` keeps only
/// its path on the root's host. Relative segments such as `../x` are not
/// joined against the root's path. An empty string means the link could
/// not be resolved.
pub fn resolve(root: &str, path: &str) -> String {
    if root.is_empty() || path.is_empty() {
        return String::new();
    }
    if path.starts_with("http") {
        return path.to_string();
    }

    let root = if root.starts_with("http") {
        root.to_string()
    } else {
        format!("https://{root}")
    };
    let Some(host) = Url::parse(&root).ok().and_then(|u| u.host_str().map(str::to_owned)) else {
        return String::new();
    };

    let mut path_only = path.split(&['?', '#'][..]).next().unwrap_or_default();
    // A protocol-relative link carries its own authority; only its path is kept.
    if let Some(rest) = path_only.strip_prefix("//") {
        path_only = rest.find('/').map_or("/", |at| &rest[at..]);
    }
    let Ok(mut resolved) = Url::parse(&format!("https://{host}")) else {
        return String::new();
    };
    if path_only.starts_with('/') {
        resolved.set_path(path_only);
    } else {
        resolved.set_path(&format!("/{path_only}"));
    }
    resolved.to_string()
}
