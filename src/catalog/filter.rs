//! Display subset of the catalog for a category selector and search text.

use crate::types::{CategoryFilter, Script, ScriptId};

/// Returns the scripts matching both the category selector and the query,
/// in catalog order. An empty query matches every script.
pub fn filter_scripts<'a>(
    scripts: &'a [Script],
    favorites: &[ScriptId],
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a Script> {
    let needle = query.to_lowercase();
    scripts
        .iter()
        .filter(|script| matches_category(script, favorites, category))
        .filter(|script| matches_text(script, &needle))
        .collect()
}

fn matches_category(script: &Script, favorites: &[ScriptId], category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Favorites => favorites.contains(&script.id),
        CategoryFilter::Category(name) => script.category == *name,
    }
}

/// `needle` must already be lowercased.
fn matches_text(script: &Script, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    script.title.to_lowercase().contains(needle)
        || script.description.to_lowercase().contains(needle)
        || script.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::default_scripts;

    fn titles(scripts: &[&Script]) -> Vec<String> {
        scripts.iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn test_category_selects_exact_name() {
        let scripts = default_scripts();
        let result = filter_scripts(
            &scripts,
            &[],
            &CategoryFilter::Category("Developer".to_string()),
            "",
        );
        assert_eq!(titles(&result), vec!["JSON Formatter"]);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let scripts = default_scripts();
        let result = filter_scripts(
            &scripts,
            &[],
            &CategoryFilter::Category("developer".to_string()),
            "",
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_query_matches_title_and_description_case_insensitively() {
        let scripts = default_scripts();
        let result = filter_scripts(&scripts, &[], &CategoryFilter::All, "dark");
        assert_eq!(titles(&result), vec!["Dark Mode Enforcer"]);

        let result = filter_scripts(&scripts, &[], &CategoryFilter::All, "READABILITY");
        assert_eq!(titles(&result), vec!["JSON Formatter"]);
    }

    #[test]
    fn test_query_matches_tags() {
        let scripts = default_scripts();
        let result = filter_scripts(&scripts, &[], &CategoryFilter::All, "css");
        assert_eq!(titles(&result), vec!["Dark Mode Enforcer"]);
    }

    #[test]
    fn test_empty_query_matches_all_in_order() {
        let scripts = default_scripts();
        let result = filter_scripts(&scripts, &[], &CategoryFilter::All, "");
        let ids: Vec<ScriptId> = result.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_favorites_selector_keeps_catalog_order() {
        let scripts = default_scripts();
        let result = filter_scripts(&scripts, &[3, 1, 99], &CategoryFilter::Favorites, "");
        let ids: Vec<ScriptId> = result.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_both_predicates_must_hold() {
        let scripts = default_scripts();
        let result = filter_scripts(
            &scripts,
            &[],
            &CategoryFilter::Category("Automation".to_string()),
            "json",
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence_satisfying_predicates() {
        let scripts = default_scripts();
        let favorites = [2, 3];
        let selectors = [
            CategoryFilter::All,
            CategoryFilter::Favorites,
            CategoryFilter::Category("Automation".to_string()),
            CategoryFilter::Category("UI/UX".to_string()),
            CategoryFilter::Category("Missing".to_string()),
        ];
        let queries = ["", "a", "mode", "JSON", "zzz"];

        for selector in &selectors {
            for query in queries {
                let result = filter_scripts(&scripts, &favorites, selector, query);

                let positions: Vec<usize> = result
                    .iter()
                    .map(|r| scripts.iter().position(|s| s.id == r.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));

                let needle = query.to_lowercase();
                for script in &result {
                    assert!(matches_category(script, &favorites, selector));
                    assert!(matches_text(script, &needle));
                }
            }
        }
    }
}
