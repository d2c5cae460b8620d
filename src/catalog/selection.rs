//! Selection Module
//!
//! Search filtering and count limiting over an ordered cafe list.

/// Lowercases `text` one character at a time.
///
/// Unlike `str::to_lowercase` this never applies the context-sensitive
/// final-sigma rule, so a substring folds to a substring of the folded whole.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Returns true if `name` contains `needle` ignoring case.
///
/// `needle` must already be folded with [`fold_case`]. An empty needle
/// matches everything.
pub fn matches_search(name: &str, needle: &str) -> bool {
    needle.is_empty() || fold_case(name).contains(needle)
}

/// Keeps the cafes whose name contains `search`, case-insensitively.
///
/// Order is preserved. An empty `search` keeps every cafe.
pub fn filter_by_search<'a>(cafes: &'a [String], search: &str) -> Vec<&'a str> {
    let needle = fold_case(search);
    cafes
        .iter()
        .map(String::as_str)
        .filter(|name| matches_search(name, &needle))
        .collect()
}

/// Truncates `cafes` to at most `limit` entries; `None` means unlimited.
pub fn apply_limit<T>(mut cafes: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        cafes.truncate(limit);
    }
    cafes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moscow() -> Vec<String> {
        ["Мир кофе", "Сладкоежка", "Кофе и завтраки", "Сытый студент"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let cafes = moscow();
        assert_eq!(
            filter_by_search(&cafes, "КОФЕ"),
            vec!["Мир кофе", "Кофе и завтраки"]
        );
    }

    #[test]
    fn test_empty_search_keeps_all() {
        let cafes = moscow();
        assert_eq!(filter_by_search(&cafes, "").len(), cafes.len());
    }

    #[test]
    fn test_no_matches() {
        assert!(filter_by_search(&moscow(), "фасоль").is_empty());
    }

    #[test]
    fn test_fold_case_keeps_sigma_uniform() {
        assert_eq!(fold_case("ΚΑΦΕΣ"), "καφεσ");
        assert_eq!(fold_case("Σ"), "σ");
    }

    #[test]
    fn test_search_matches_trailing_sigma() {
        let cafes = vec!["ΚΑΦΕΣ".to_string(), "ΟΔΟΣ ΣΤΑΔΙΟΥ".to_string()];
        assert_eq!(filter_by_search(&cafes, "Σ"), vec!["ΚΑΦΕΣ", "ΟΔΟΣ ΣΤΑΔΙΟΥ"]);
        assert_eq!(filter_by_search(&cafes, "εσ"), vec!["ΚΑΦΕΣ"]);
    }

    #[test]
    fn test_limit() {
        assert_eq!(apply_limit(vec![1, 2, 3], Some(2)), vec![1, 2]);
        assert_eq!(apply_limit(vec![1, 2, 3], Some(0)), Vec::<i32>::new());
        assert_eq!(apply_limit(vec![1, 2, 3], Some(100)), vec![1, 2, 3]);
        assert_eq!(apply_limit(vec![1, 2, 3], None), vec![1, 2, 3]);
    }
}
