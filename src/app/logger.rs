/// Sink for the pipeline's informational trace lines and per-link failures.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

/// Forwards every message to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "pageicon", "{}", message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _message: &str) {}
}

const MAX_LOGGED_LEN: usize = 100;

/// Shortens `s` to at most 100 characters, marking the cut with `...`.
///
/// Embedded data-URIs can run to hundreds of kilobytes, which would
/// otherwise swamp the log.
pub fn truncate(s: &str) -> String {
    if s.chars().count() <= MAX_LOGGED_LEN {
        return s.to_string();
    }
    let mut out: String = s.chars().take(MAX_LOGGED_LEN - 3).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate("https://example.com/icon.png"), "https://example.com/icon.png");
    }

    #[test]
    fn test_truncate_long_string() {
        let long = format!("data:image/png;base64,{}", "A".repeat(500));
        let out = truncate(&long);
        assert_eq!(out.chars().count(), 100);
        assert!(out.starts_with("data:image/png;base64,AAAA"));
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_boundary() {
        let long = "é".repeat(150);
        let out = truncate(&long);
        assert_eq!(out.chars().count(), 100);
    }

    #[test]
    fn test_noop_logger_accepts_messages() {
        NoopLogger.log("ignored");
    }
}
