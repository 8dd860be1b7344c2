//! Asset locations.

/// Resolve `src` against a page origin. Absolute URLs pass through.
pub fn resolve_against(origin: &str, src: &str) -> String {
    if src.contains("://") {
        return src.to_string();
    }
    join_url(origin, src)
}

fn join_url(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://example.com/", "/attractive.png"),
            "https://example.com/attractive.png"
        );
        assert_eq!(
            join_url("http://localhost:8080", "img/a.png"),
            "http://localhost:8080/img/a.png"
        );
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve_against("https://example.com", "attractive.png"),
            "https://example.com/attractive.png"
        );
    }

    #[test]
    fn test_absolute_passes_through() {
        assert_eq!(
            resolve_against("https://example.com", "https://cdn.example.org/a.png"),
            "https://cdn.example.org/a.png"
        );
    }
}
