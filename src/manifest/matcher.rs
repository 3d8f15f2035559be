use glob::{MatchOptions, Pattern};
use std::collections::HashMap;

/// Match options for removal patterns: case-insensitive, with `*` free to
/// span the vendor/name separator.
fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: false,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    }
}

/// Select the keys one removal request applies to.
///
/// An exact key match takes precedence and selects only that key, even when
/// the request would also match other keys as a glob pattern. Otherwise the
/// request is resolved case-insensitively: first as an exact name through a
/// lowercased-key index, then as a glob pattern over all keys. An empty
/// result means the request matched nothing.
pub fn select_removals(keys: &[String], requested: &str) -> Vec<String> {
    if keys.iter().any(|key| key == requested) {
        return vec![requested.to_string()];
    }

    let index: HashMap<String, &String> =
        keys.iter().map(|key| (key.to_lowercase(), key)).collect();
    if let Some(original) = index.get(&requested.to_lowercase()) {
        return vec![(*original).clone()];
    }

    let Ok(pattern) = Pattern::new(requested) else {
        // an unparseable pattern cannot match anything; the caller reports
        // the request as not required
        return Vec::new();
    };
    keys.iter()
        .filter(|key| pattern.matches_with(key, match_options()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_exact_match_wins_over_glob() {
        let keys = keys(&["foo/*", "foo/bar"]);
        assert_eq!(select_removals(&keys, "foo/*"), vec!["foo/*"]);
    }

    #[test]
    fn test_case_insensitive_exact() {
        let keys = keys(&["Foo/Bar"]);
        assert_eq!(select_removals(&keys, "foo/bar"), vec!["Foo/Bar"]);
    }

    #[test]
    fn test_glob_spans_vendor_separator() {
        let keys = keys(&["acme/a", "acme/b", "other/c"]);
        assert_eq!(select_removals(&keys, "acme/*"), vec!["acme/a", "acme/b"]);
        assert_eq!(select_removals(&keys, "*"), keys);
    }

    #[test]
    fn test_glob_case_insensitive() {
        let keys = keys(&["Foo/Bar", "foo/baz"]);
        assert_eq!(select_removals(&keys, "foo/*"), keys);
    }

    #[test]
    fn test_question_mark_matches_single_char() {
        let keys = keys(&["acme/pkg1", "acme/pkg22"]);
        assert_eq!(select_removals(&keys, "acme/pkg?"), vec!["acme/pkg1"]);
    }

    #[test]
    fn test_no_match() {
        let keys = keys(&["vendor/pkg"]);
        assert!(select_removals(&keys, "vendor/other").is_empty());
        assert!(select_removals(&[], "anything").is_empty());
    }

    #[test]
    fn test_invalid_pattern_matches_nothing() {
        let keys = keys(&["vendor/pkg"]);
        assert!(select_removals(&keys, "vendor/[pkg").is_empty());
    }
}
