//! Detail view derivation
//!
//! Turns a `Country` into the strings the detail view shows.

use crate::api::Country;
use crate::logic::formatting::{format_population, join_capitals, or_na, NOT_AVAILABLE};

/// Display fields of the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDetails {
    pub name: String,
    pub native_name: String,
    pub population: String,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub top_level_domain: String,
    pub currencies: String,
    pub languages: String,
}

impl CountryDetails {
    pub fn derive(country: &Country) -> Self {
        Self {
            name: country.name.common.clone(),
            native_name: native_name(country),
            population: format_population(country.population),
            region: country.region.clone(),
            subregion: or_na(country.subregion.as_deref()).to_string(),
            capital: join_capitals(&country.capital),
            top_level_domain: or_na(country.tld.first().map(String::as_str)).to_string(),
            currencies: non_empty_or_na(currency_list(country)),
            languages: non_empty_or_na(language_list(country)),
        }
    }
}

/// Common form of the first native name
pub fn native_name(country: &Country) -> String {
    or_na(
        country
            .name
            .native_name
            .first()
            .map(|native| native.common.as_str()),
    )
    .to_string()
}

/// Currency names joined with ", "
pub fn currency_list(country: &Country) -> String {
    country
        .currencies
        .values()
        .map(|currency| currency.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Language names joined with "," (no space)
pub fn language_list(country: &Country) -> String {
    country
        .languages
        .values()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

fn non_empty_or_na(value: String) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CountryName, Currency, NativeName, OrderedMap};

    fn belgium() -> Country {
        Country {
            name: CountryName {
                common: "Belgium".to_string(),
                official: "Kingdom of Belgium".to_string(),
                native_name: OrderedMap(vec![
                    ("deu".to_string(), NativeName { official: "Königreich Belgien".to_string(), common: "Belgien".to_string() }),
                    ("fra".to_string(), NativeName { official: "Royaume de Belgique".to_string(), common: "Belgique".to_string() }),
                    ("nld".to_string(), NativeName { official: "Koninkrijk België".to_string(), common: "België".to_string() }),
                ]),
            },
            population: 11555997,
            region: "Europe".to_string(),
            subregion: Some("Western Europe".to_string()),
            capital: vec!["Brussels".to_string()],
            tld: vec![".be".to_string()],
            currencies: OrderedMap(vec![(
                "EUR".to_string(),
                Currency { name: "Euro".to_string(), symbol: Some("€".to_string()) },
            )]),
            languages: OrderedMap(vec![
                ("deu".to_string(), "German".to_string()),
                ("fra".to_string(), "French".to_string()),
                ("nld".to_string(), "Dutch".to_string()),
            ]),
            cca3: "BEL".to_string(),
            borders: Some(vec!["FRA".to_string(), "DEU".to_string(), "LUX".to_string(), "NLD".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_derive_full_record() {
        let details = CountryDetails::derive(&belgium());
        assert_eq!(details.name, "Belgium");
        assert_eq!(details.native_name, "Belgien");
        assert_eq!(details.population, "11,555,997");
        assert_eq!(details.region, "Europe");
        assert_eq!(details.subregion, "Western Europe");
        assert_eq!(details.capital, "Brussels");
        assert_eq!(details.top_level_domain, ".be");
        assert_eq!(details.currencies, "Euro");
        assert_eq!(details.languages, "German,French,Dutch");
    }

    #[test]
    fn test_multiple_currencies_join_with_comma_space() {
        let mut country = belgium();
        country.currencies = OrderedMap(vec![
            ("BTN".to_string(), Currency { name: "Bhutanese ngultrum".to_string(), symbol: None }),
            ("INR".to_string(), Currency { name: "Indian rupee".to_string(), symbol: Some("₹".to_string()) }),
        ]);
        assert_eq!(currency_list(&country), "Bhutanese ngultrum, Indian rupee");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let country = Country {
            name: CountryName { common: "Antarctica".to_string(), ..Default::default() },
            region: "Antarctic".to_string(),
            ..Default::default()
        };
        let details = CountryDetails::derive(&country);
        assert_eq!(details.native_name, "N/A");
        assert_eq!(details.subregion, "N/A");
        assert_eq!(details.capital, "N/A");
        assert_eq!(details.top_level_domain, "N/A");
        assert_eq!(details.currencies, "N/A");
        assert_eq!(details.languages, "N/A");
    }
}
