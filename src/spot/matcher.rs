//! Spot matcher
//! Decides whether a colorant should be disabled for a given filter spec.

use serde::{Deserialize, Serialize};

use super::names::normalize;

/// Which colorants a disable pass targets
///
/// "No filters" is never inferred from an empty list: callers pick
/// `MatchAll` or `MatchNone` explicitly, and an empty `MatchAny` matches
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterSpec {
    MatchAll,
    MatchNone,
    /// Normalized substrings; a name matches when it contains any of them
    MatchAny(Vec<String>),
}

impl FilterSpec {
    /// Builds a `MatchAny` spec from raw user filters.
    ///
    /// Filters are normalized the same way colorant names are; filters that
    /// normalize to nothing but whitespace are dropped, as are duplicates.
    pub fn from_filters<I, S>(filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for filter in filters {
            let value = normalize(filter.as_ref());
            if !value.trim().is_empty() && !normalized.contains(&value) {
                normalized.push(value);
            }
        }
        FilterSpec::MatchAny(normalized)
    }

    /// Command-line rule: no filters means every colorant is disabled.
    pub fn from_cli<S: AsRef<str>>(filters: &[S]) -> Self {
        if filters.is_empty() {
            FilterSpec::MatchAll
        } else {
            Self::from_filters(filters)
        }
    }

    pub fn must_disable(&self, raw_name: &str) -> bool {
        must_disable(raw_name, self)
    }
}

/// Tests a colorant name against `spec`.
///
/// The name is normalized first; `MatchAny` filters are expected to be
/// normalized already (see [`FilterSpec::from_filters`]).
pub fn must_disable(raw_name: &str, spec: &FilterSpec) -> bool {
    match spec {
        FilterSpec::MatchAll => true,
        FilterSpec::MatchNone => false,
        FilterSpec::MatchAny(filters) => {
            let name = normalize(raw_name);
            filters.iter().any(|filter| name.contains(filter.as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 5] = ["Pantone 877 C", "Pantone#20877#20C", "Cutter", "", "None"];

    #[test]
    fn test_partial_case_insensitive_match() {
        let spec = FilterSpec::from_filters(["877"]);
        assert!(must_disable("Pantone 877 C", &spec));
        assert!(must_disable("Pantone#20877#20C", &spec));
        assert!(!must_disable("Pantone 871 C", &spec));

        let spec = FilterSpec::from_filters(["PANTONE#20877"]);
        assert!(must_disable("pantone 877 c", &spec));

        let spec = FilterSpec::from_filters(["magenta"]);
        assert!(must_disable("Pantone Process Magenta C", &spec));
    }

    #[test]
    fn test_any_filter_matches() {
        let spec = FilterSpec::from_filters(["varnish", "cut"]);
        assert!(must_disable("Die Cut", &spec));
        assert!(must_disable("Spot Varnish", &spec));
        assert!(!must_disable("Gold", &spec));
    }

    #[test]
    fn test_match_all_and_match_none() {
        for name in NAMES {
            assert!(must_disable(name, &FilterSpec::MatchAll));
            assert!(!must_disable(name, &FilterSpec::MatchNone));
        }
    }

    #[test]
    fn test_empty_match_any_matches_nothing() {
        let spec = FilterSpec::from_filters(Vec::<String>::new());
        assert_eq!(spec, FilterSpec::MatchAny(vec![]));
        for name in NAMES {
            assert!(!must_disable(name, &spec));
        }
    }

    #[test]
    fn test_empty_filters_are_dropped() {
        let spec = FilterSpec::from_filters(["", "877", "877"]);
        assert_eq!(spec, FilterSpec::MatchAny(vec!["877".to_string()]));
    }

    #[test]
    fn test_whitespace_filters_are_dropped() {
        let spec = FilterSpec::from_filters(["  ", "#20", "\t", " 877"]);
        assert_eq!(spec, FilterSpec::MatchAny(vec![" 877".to_string()]));
        assert!(!spec.must_disable("Gold Leaf"));
        assert!(spec.must_disable("Pantone 877 C"));
        assert!(!FilterSpec::from_filters(["   "]).must_disable("Die Cut"));
    }

    #[test]
    fn test_from_cli() {
        assert_eq!(FilterSpec::from_cli::<&str>(&[]), FilterSpec::MatchAll);
        assert_eq!(
            FilterSpec::from_cli(&["Gold"]),
            FilterSpec::MatchAny(vec!["gold".to_string()])
        );
    }

    #[test]
    fn test_none_is_terminal() {
        let spec = FilterSpec::from_filters(["877"]);
        assert!(!spec.must_disable("None"));
    }
}
