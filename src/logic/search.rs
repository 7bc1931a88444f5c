//! Search Logic
//!
//! Pure derivation of the visible country list from the directory, the
//! selected region and the search text. Directory order is preserved; nothing
//! is sorted.

use crate::api::Country;

/// Region selector value meaning "no region filter"
pub const ALL_REGIONS: &str = "Filter By Region";

/// Regions offered by the region dropdown, in display order
pub const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

/// Check a record's region against the selector (exact, case-sensitive)
pub fn region_matches(selected_region: &str, region: &str) -> bool {
    selected_region == ALL_REGIONS || region == selected_region
}

/// Case-insensitive substring match on the common name
///
/// # Examples
/// ```
/// use wheretui::logic::search::name_matches;
///
/// assert!(name_matches("gh", "Ghana"));
/// assert!(name_matches("", "Ghana"));
/// assert!(!name_matches("zz", "Ghana"));
/// ```
pub fn name_matches(query: &str, name: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Indices into `directory` of the records that are visible
pub fn filter_indices(directory: &[Country], selected_region: &str, query: &str) -> Vec<usize> {
    directory
        .iter()
        .enumerate()
        .filter(|(_, country)| region_matches(selected_region, &country.region))
        .filter(|(_, country)| name_matches(query, country.common_name()))
        .map(|(idx, _)| idx)
        .collect()
}

/// Visible records, borrowed from the directory in directory order
pub fn filter_countries<'a>(
    directory: &'a [Country],
    selected_region: &str,
    query: &str,
) -> Vec<&'a Country> {
    filter_indices(directory, selected_region, query)
        .into_iter()
        .map(|idx| &directory[idx])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CountryName;

    fn country(name: &str, region: &str) -> Country {
        Country {
            name: CountryName {
                common: name.to_string(),
                ..Default::default()
            },
            region: region.to_string(),
            ..Default::default()
        }
    }

    fn directory() -> Vec<Country> {
        vec![
            country("Ghana", "Africa"),
            country("Germany", "Europe"),
            country("Togo", "Africa"),
            country("Guyana", "Americas"),
            country("Georgia", "Asia"),
        ]
    }

    fn names(countries: &[&Country]) -> Vec<String> {
        countries.iter().map(|c| c.name.common.clone()).collect()
    }

    #[test]
    fn test_sentinel_and_empty_query_match_all() {
        let dir = directory();
        assert_eq!(filter_countries(&dir, ALL_REGIONS, "").len(), dir.len());
    }

    #[test]
    fn test_region_filter_is_exact() {
        let dir = directory();
        assert_eq!(names(&filter_countries(&dir, "Africa", "")), ["Ghana", "Togo"]);
        assert!(filter_countries(&dir, "africa", "").is_empty());
        assert!(filter_countries(&dir, "Afr", "").is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let dir = directory();
        assert_eq!(
            names(&filter_countries(&dir, ALL_REGIONS, "GE")),
            ["Germany", "Georgia"]
        );
        assert_eq!(names(&filter_countries(&dir, ALL_REGIONS, "ana")), ["Ghana", "Guyana"]);
    }

    #[test]
    fn test_region_and_query_combine() {
        let dir = directory();
        assert_eq!(names(&filter_countries(&dir, "Africa", "o")), ["Togo"]);
        assert!(filter_countries(&dir, "Europe", "togo").is_empty());
    }

    #[test]
    fn test_empty_directory() {
        assert!(filter_countries(&[], ALL_REGIONS, "").is_empty());
        assert!(filter_countries(&[], "Asia", "x").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let dir = directory();
        assert_eq!(filter_indices(&dir, ALL_REGIONS, "g"), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_is_idempotent_and_matches_rule() {
        let dir = vec![
            country("Ghana", "Africa"),
            country("Germany", "Europe"),
            country("ΣΊΣΥΦΟΣ", "Europe"),
            country("İstanbul", "Asia"),
            country("Japan", "Asia"),
        ];
        let regions = [ALL_REGIONS, "Africa", "Europe", "asia", "Antarctic"];
        let queries = ["", "g", "GER", "an", "σίσυφος", "İst", "zz"];

        for region in regions {
            for query in queries {
                let first = filter_countries(&dir, region, query);
                let second = filter_countries(&dir, region, query);
                assert_eq!(first, second, "region={region} query={query}");

                let expected: Vec<&Country> = dir
                    .iter()
                    .filter(|c| region == ALL_REGIONS || c.region == region)
                    .filter(|c| {
                        c.name.common.to_lowercase().contains(&query.to_lowercase())
                    })
                    .collect();
                assert_eq!(first, expected, "region={region} query={query}");
            }
        }

        // Wrong-case region never matches
        assert!(filter_countries(&dir, "asia", "").is_empty());
        let lowered = "ΣΊΣΥΦΟΣ".to_lowercase();
        assert_eq!(names(&filter_countries(&dir, "Europe", &lowered)), ["ΣΊΣΥΦΟΣ"]);
    }

    #[test]
    fn test_unicode_names() {
        let dir = vec![country("Côte d'Ivoire", "Africa"), country("Åland Islands", "Europe")];
        assert_eq!(names(&filter_countries(&dir, ALL_REGIONS, "CÔTE")), ["Côte d'Ivoire"]);
        assert_eq!(names(&filter_countries(&dir, ALL_REGIONS, "åland")), ["Åland Islands"]);
    }
}
