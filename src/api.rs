use reqwest::{Client, StatusCode};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use thiserror::Error;

/// Default upstream: REST Countries v3.1
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Mapping that keeps the upstream document order of its keys.
///
/// The first native name, and the order currencies and languages are joined in,
/// both depend on the order the upstream delivers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn first(&self) -> Option<&V> {
        self.0.first().map(|(_, v)| v)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Helper function to deserialize null as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub common: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub native_name: OrderedMap<NativeName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// One entry of the country directory, as delivered by the upstream
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: CountryName,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capital: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tld: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currencies: OrderedMap<Currency>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: OrderedMap<String>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub cca3: String,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// Border codes, empty when the upstream omits the field
    pub fn border_codes(&self) -> &[String] {
        self.borders.as_deref().unwrap_or(&[])
    }
}

/// Read-only source of country data.
///
/// `RestCountriesClient` is the production implementation; tests substitute
/// in-memory sources.
pub trait CountrySource: Clone + Send + Sync + 'static {
    /// Full country list
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Country>, FetchError>> + Send;

    /// Single country by three-letter code. `None` when the upstream has no match.
    fn fetch_by_code(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<Option<Country>, FetchError>> + Send;

    /// Raw bytes of a flag image
    fn fetch_flag(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

#[derive(Clone)]
pub struct RestCountriesClient {
    base_url: String,
    fields: Option<Vec<String>>,
    client: Client,
}

impl RestCountriesClient {
    pub fn new(base_url: String, fields: Option<Vec<String>>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fields,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the list-all endpoint, with the optional field projection
    pub fn all_url(&self) -> String {
        let mut url = format!("{}/all", self.base_url);
        if let Some(fields) = self.fields.as_ref().filter(|f| !f.is_empty()) {
            url.push_str("?fields=");
            url.push_str(&fields.join(","));
        }
        url
    }

    pub fn alpha_url(&self, code: &str) -> String {
        format!("{}/alpha/{}", self.base_url, urlencoding::encode(code))
    }

    async fn get_text(&self, url: &str) -> Result<(StatusCode, String), FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }
}

impl CountrySource for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        let url = self.all_url();
        let (status, text) = self.get_text(&url).await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        serde_json::from_str(&text).map_err(|source| FetchError::Decode { url, source })
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Option<Country>, FetchError> {
        let url = self.alpha_url(code);
        let (status, text) = self.get_text(&url).await?;

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(code, "alpha lookup found no country");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        let countries: Vec<Country> =
            serde_json::from_str(&text).map_err(|source| FetchError::Decode { url, source })?;

        Ok(countries.into_iter().next())
    }

    async fn fetch_flag(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GHANA: &str = r#"{
        "name": {
            "common": "Ghana",
            "official": "Republic of Ghana",
            "nativeName": { "eng": { "official": "Republic of Ghana", "common": "Ghana" } }
        },
        "tld": [".gh"],
        "cca3": "GHA",
        "currencies": { "GHS": { "name": "Ghanaian cedi", "symbol": "₵" } },
        "capital": ["Accra"],
        "region": "Africa",
        "subregion": "Western Africa",
        "languages": { "eng": "English" },
        "borders": ["BFA", "CIV", "TGO"],
        "population": 31072940,
        "flags": { "png": "https://flagcdn.com/w320/gh.png", "svg": "https://flagcdn.com/gh.svg" }
    }"#;

    #[test]
    fn test_parse_full_country() {
        let country: Country = serde_json::from_str(GHANA).unwrap();
        assert_eq!(country.common_name(), "Ghana");
        assert_eq!(country.population, 31072940);
        assert_eq!(country.capital, vec!["Accra"]);
        assert_eq!(country.border_codes(), ["BFA", "CIV", "TGO"]);
        assert_eq!(country.currencies.get("GHS").unwrap().name, "Ghanaian cedi");
        assert_eq!(
            country.flags.png.as_deref(),
            Some("https://flagcdn.com/w320/gh.png")
        );
    }

    #[test]
    fn test_parse_sparse_country() {
        // Antarctica-like record: no capital, no currencies, no borders
        let json = r#"{ "name": { "common": "Antarctica", "nativeName": {} },
                        "region": "Antarctic", "population": 1000, "cca3": "ATA",
                        "capital": null, "currencies": null }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert!(country.capital.is_empty());
        assert!(country.tld.is_empty());
        assert!(country.currencies.is_empty());
        assert!(country.languages.is_empty());
        assert!(country.borders.is_none());
        assert!(country.border_codes().is_empty());
        assert!(country.subregion.is_none());
    }

    #[test]
    fn test_ordered_map_keeps_document_order() {
        let json = r#"{ "name": { "common": "Switzerland", "nativeName": {
                            "fra": { "common": "Suisse" },
                            "gsw": { "common": "Schweiz" },
                            "ita": { "common": "Svizzera" },
                            "roh": { "common": "Svizra" } } },
                        "languages": { "fra": "French", "gsw": "Swiss German", "ita": "Italian", "roh": "Romansh" } }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.name.native_name.first().unwrap().common, "Suisse");
        let languages: Vec<&String> = country.languages.values().collect();
        assert_eq!(languages, ["French", "Swiss German", "Italian", "Romansh"]);
    }

    #[test]
    fn test_all_url_with_fields() {
        let client = RestCountriesClient::new(
            "https://restcountries.com/v3.1/".to_string(),
            Some(vec!["name".to_string(), "cca3".to_string()]),
        );
        assert_eq!(
            client.all_url(),
            "https://restcountries.com/v3.1/all?fields=name,cca3"
        );
    }

    #[test]
    fn test_all_url_without_fields() {
        let client = RestCountriesClient::new(DEFAULT_BASE_URL.to_string(), None);
        assert_eq!(client.all_url(), "https://restcountries.com/v3.1/all");
        assert_eq!(
            client.alpha_url("TGO"),
            "https://restcountries.com/v3.1/alpha/TGO"
        );
    }
}
