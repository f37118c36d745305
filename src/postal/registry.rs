//! Postal code rules per country, loaded from XML.

use std::collections::BTreeMap;

use crate::core::xml::for_each_element;
use crate::core::{MasterDataError, ValidationError, is_known_country_code};

use super::format::PostalCodeFormat;

const BUNDLED_XML: &str = include_str!("data/postal_codes.xml");

/// Trim surrounding whitespace and upper-case ASCII letters.
fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Postal code rules of one country.
#[derive(Debug, Clone)]
pub struct PostalCodeCountry {
    iso: String,
    formats: Vec<PostalCodeFormat>,
    valid_codes: Vec<String>,
    note: Option<String>,
}

impl PostalCodeCountry {
    pub fn new(iso: impl Into<String>) -> Self {
        Self {
            iso: iso.into(),
            formats: Vec::new(),
            valid_codes: Vec::new(),
            note: None,
        }
    }

    pub fn add_format(&mut self, format: PostalCodeFormat) {
        self.formats.push(format);
    }

    /// Add an explicitly enumerated postal code.
    pub fn add_valid_code(&mut self, code: &str) {
        self.valid_codes.push(normalize(code));
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = Some(note.into());
    }

    pub fn iso(&self) -> &str {
        &self.iso
    }

    pub fn formats(&self) -> &[PostalCodeFormat] {
        &self.formats
    }

    pub fn valid_codes(&self) -> &[String] {
        &self.valid_codes
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Whether the country uses postal codes at all.
    pub fn has_postal_codes(&self) -> bool {
        !self.formats.is_empty() || !self.valid_codes.is_empty()
    }

    /// Match against any format or enumerated code.
    ///
    /// Countries without postal codes accept any input.
    pub fn is_valid_postal_code(&self, code: &str) -> bool {
        if !self.has_postal_codes() {
            return true;
        }
        let code = normalize(code);
        self.formats.iter().any(|f| f.is_valid(&code)) || self.valid_codes.contains(&code)
    }

    /// One sample per format followed by the enumerated codes.
    pub fn examples(&self) -> Vec<String> {
        self.formats
            .iter()
            .map(PostalCodeFormat::example)
            .chain(self.valid_codes.iter().cloned())
            .collect()
    }
}

/// Postal code rules for all known countries, keyed by ISO code.
#[derive(Debug, Clone, Default)]
pub struct PostalCodeRegistry {
    countries: BTreeMap<String, PostalCodeCountry>,
}

impl PostalCodeRegistry {
    /// The rules shipped with this crate.
    pub fn bundled() -> Result<Self, MasterDataError> {
        Self::from_xml(BUNDLED_XML)
    }

    /// Read rules from a `<postalcodes>` document.
    ///
    /// Each `<country iso="..">` may contain `<format>`, `<validcode>` and
    /// `<note>` children. Unknown elements are skipped with a warning.
    pub fn from_xml(xml: &str) -> Result<Self, MasterDataError> {
        let mut registry = Self::default();
        let mut pending: Option<PostalCodeCountry> = None;

        for_each_element(xml, |ancestors, el| {
            let parent = ancestors.last().filter(|p| p.name == "country");
            match (el.name.as_str(), parent) {
                ("format", Some(parent)) => {
                    let iso = parent.required_attr("iso")?;
                    let format = PostalCodeFormat::parse(iso, el.text.trim())?;
                    pending
                        .get_or_insert_with(|| PostalCodeCountry::new(iso))
                        .add_format(format);
                }
                ("validcode", Some(parent)) => {
                    let iso = parent.required_attr("iso")?;
                    pending
                        .get_or_insert_with(|| PostalCodeCountry::new(iso))
                        .add_valid_code(&el.text);
                }
                ("note", Some(parent)) => {
                    let iso = parent.required_attr("iso")?;
                    pending
                        .get_or_insert_with(|| PostalCodeCountry::new(iso))
                        .set_note(el.text.trim());
                }
                ("country", _) => {
                    let iso = el.required_attr("iso")?;
                    let country = pending.take().unwrap_or_else(|| PostalCodeCountry::new(iso));
                    registry.insert(country)?;
                }
                ("postalcodes", None) if ancestors.is_empty() => {}
                (other, _) => {
                    tracing::warn!(element = other, "skipping unknown postal code element");
                }
            }
            Ok(())
        })?;

        tracing::debug!(countries = registry.countries.len(), "loaded postal code formats");
        Ok(registry)
    }

    /// Add a country, rejecting unknown ISO codes and duplicates.
    pub fn insert(&mut self, country: PostalCodeCountry) -> Result<(), MasterDataError> {
        if !is_known_country_code(&country.iso) {
            return Err(MasterDataError::InvalidArgument(format!(
                "unknown country code '{}'",
                country.iso
            )));
        }
        if self.countries.contains_key(&country.iso) {
            return Err(MasterDataError::DuplicateKey {
                registry: "postal codes",
                key: country.iso.clone(),
            });
        }
        self.countries.insert(country.iso.clone(), country);
        Ok(())
    }

    pub fn country(&self, iso: &str) -> Option<&PostalCodeCountry> {
        self.countries.get(&iso.to_ascii_uppercase())
    }

    /// All countries with postal code information, in ISO code order.
    pub fn countries(&self) -> impl Iterator<Item = &PostalCodeCountry> {
        self.countries.values()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Whether `country` is known to use postal codes.
    pub fn has_postal_codes(&self, country: &str) -> bool {
        self.country(country).is_some_and(PostalCodeCountry::has_postal_codes)
    }

    /// Check a postal code; countries without information accept anything.
    pub fn is_valid_postal_code(&self, country: &str, code: &str) -> bool {
        self.country(country)
            .is_none_or(|c| c.is_valid_postal_code(code))
    }

    /// Like [`Self::is_valid_postal_code`] but with an error describing the
    /// expected formats.
    pub fn validate_postal_code(&self, country: &str, code: &str) -> Result<(), ValidationError> {
        if self.is_valid_postal_code(country, code) {
            return Ok(());
        }
        let expected = self
            .country(country)
            .map(|c| c.examples().join(", "))
            .unwrap_or_default();
        Err(ValidationError::with_code(
            "postal_code",
            format!("'{code}' is not a valid postal code for {country}, expected e.g. {expected}"),
            "postal_code.invalid_format",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PostalCodeRegistry {
        PostalCodeRegistry::bundled().unwrap()
    }

    #[test]
    fn austria_four_digits() {
        let r = registry();
        assert!(r.is_valid_postal_code("AT", "1234"));
        assert!(!r.is_valid_postal_code("AT", "123"));
        assert!(!r.is_valid_postal_code("AT", "12345"));
        assert!(!r.is_valid_postal_code("AT", "A123"));
    }

    #[test]
    fn germany_and_poland() {
        let r = registry();
        assert!(r.is_valid_postal_code("DE", "10115"));
        assert!(!r.is_valid_postal_code("DE", "1011"));
        assert!(r.is_valid_postal_code("PL", "00-950"));
        assert!(!r.is_valid_postal_code("PL", "00950"));
    }

    #[test]
    fn unknown_country_fails_open() {
        let r = registry();
        assert!(r.country("ZZ").is_none());
        assert!(r.is_valid_postal_code("ZZ", "anything"));
        assert!(r.validate_postal_code("ZZ", "").is_ok());
    }

    #[test]
    fn countries_without_postal_codes() {
        let r = registry();
        assert!(!r.has_postal_codes("HK"));
        assert!(r.is_valid_postal_code("HK", ""));
        assert!(r.is_valid_postal_code("HK", "whatever"));
        assert_eq!(r.country("HK").unwrap().note(), Some("No postal codes in use"));
        assert!(r.has_postal_codes("AT"));
    }

    #[test]
    fn input_is_normalized() {
        let r = registry();
        assert!(r.is_valid_postal_code("AT", " 1010 "));
        assert!(r.is_valid_postal_code("GB", "sw1a 1aa"));
        assert!(r.is_valid_postal_code("gb", "GIR 0AA"));
    }

    #[test]
    fn enumerated_codes() {
        let r = registry();
        assert!(r.is_valid_postal_code("VA", "00120"));
        assert!(!r.is_valid_postal_code("VA", "00121"));
        assert!(r.is_valid_postal_code("LI", "9490"));
        assert!(!r.is_valid_postal_code("LI", "9500"));
        assert!(r.is_valid_postal_code("SM", "47890"));
        assert!(!r.is_valid_postal_code("SM", "47880"));
    }

    #[test]
    fn country_code_tokens() {
        let r = registry();
        assert!(r.is_valid_postal_code("AD", "AD100"));
        assert!(r.is_valid_postal_code("LV", "LV-1010"));
        assert!(!r.is_valid_postal_code("LV", "1010"));
    }

    #[test]
    fn validation_error_code() {
        let err = registry().validate_postal_code("AT", "123").unwrap_err();
        assert_eq!(err.code.as_deref(), Some("postal_code.invalid_format"));
        assert_eq!(err.field, "postal_code");
        assert!(err.message.contains("1234"));
    }

    #[test]
    fn every_example_is_valid() {
        let r = registry();
        for country in r.countries() {
            for example in country.examples() {
                assert!(
                    country.is_valid_postal_code(&example),
                    "{}: {example}",
                    country.iso()
                );
            }
        }
    }

    #[test]
    fn duplicate_country_rejected() {
        let xml = r#"<postalcodes><country iso="AT"><format>NNNN</format></country><country iso="AT"/></postalcodes>"#;
        assert!(matches!(
            PostalCodeRegistry::from_xml(xml),
            Err(MasterDataError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn unknown_elements_are_skipped() {
        let xml = r#"<postalcodes><country iso="AT"><format>NNNN</format><remark>x</remark></country><legacy/></postalcodes>"#;
        let r = PostalCodeRegistry::from_xml(xml).unwrap();
        assert_eq!(r.len(), 1);
        assert!(r.is_valid_postal_code("AT", "1010"));
    }

    #[test]
    fn invalid_documents() {
        assert!(PostalCodeRegistry::from_xml(r#"<postalcodes><country/></postalcodes>"#).is_err());
        assert!(PostalCodeRegistry::from_xml(r#"<postalcodes><country iso="QQ"/></postalcodes>"#).is_err());
        assert!(PostalCodeRegistry::from_xml(r#"<postalcodes><country iso="AT"><format/></country></postalcodes>"#).is_err());
    }
}
