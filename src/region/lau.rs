//! LAU (Local Administrative Units) mapped to NUTS 3 regions.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::MasterDataError;
use crate::core::xml::for_each_element;

use super::nuts::{MAX_NUTS_LEVEL, NutsRegistry};

const BUNDLED_XML: &str = include_str!("data/lau.xml");

/// A local administrative unit (municipality) and its NUTS 3 region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LauItem {
    pub id: String,
    pub nuts_code: String,
    pub display_name: String,
}

impl LauItem {
    pub fn country_code(&self) -> &str {
        self.nuts_code.get(..2).unwrap_or_default()
    }
}

/// Local administrative units keyed by their national code.
#[derive(Debug, Clone, Default)]
pub struct LauRegistry {
    items: BTreeMap<String, LauItem>,
}

impl LauRegistry {
    /// The LAU items shipped with this crate.
    pub fn bundled() -> Result<Self, MasterDataError> {
        Self::from_xml(BUNDLED_XML)
    }

    /// Read `<lau><item id=".." nuts=".." name=".."/>...</lau>`.
    pub fn from_xml(xml: &str) -> Result<Self, MasterDataError> {
        let mut registry = Self::default();
        for_each_element(xml, |ancestors, el| {
            match el.name.as_str() {
                "item" => registry.insert(LauItem {
                    id: el.required_attr("id")?.to_string(),
                    nuts_code: el.required_attr("nuts")?.to_string(),
                    display_name: el.required_attr("name")?.to_string(),
                })?,
                "lau" if ancestors.is_empty() => {}
                other => tracing::warn!(element = other, "skipping unknown LAU element"),
            }
            Ok(())
        })?;
        tracing::debug!(items = registry.len(), "loaded LAU items");
        Ok(registry)
    }

    /// Like [`Self::from_xml`], additionally requiring every item to point
    /// at a NUTS 3 region present in `nuts`.
    pub fn from_xml_checked(xml: &str, nuts: &NutsRegistry) -> Result<Self, MasterDataError> {
        let registry = Self::from_xml(xml)?;
        registry.check_against(nuts)?;
        Ok(registry)
    }

    /// Verify that every item refers to a known NUTS 3 region.
    pub fn check_against(&self, nuts: &NutsRegistry) -> Result<(), MasterDataError> {
        for item in self.items.values() {
            match nuts.get(&item.nuts_code) {
                Some(region) if region.level() == MAX_NUTS_LEVEL => {}
                Some(_) => {
                    return Err(MasterDataError::InvalidArgument(format!(
                        "LAU '{}' refers to '{}', which is not a NUTS 3 region",
                        item.id, item.nuts_code
                    )));
                }
                None => {
                    return Err(MasterDataError::InvalidArgument(format!(
                        "LAU '{}' refers to unknown NUTS code '{}'",
                        item.id, item.nuts_code
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, item: LauItem) -> Result<(), MasterDataError> {
        if item.id.is_empty() {
            return Err(MasterDataError::InvalidArgument("empty LAU code".into()));
        }
        if self.items.contains_key(&item.id) {
            return Err(MasterDataError::DuplicateKey {
                registry: "LAU",
                key: item.id,
            });
        }
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&LauItem> {
        self.items.get(id)
    }

    /// Units located in the region `nuts_prefix` at any NUTS level.
    pub fn items_in_nuts<'a>(&'a self, nuts_prefix: &'a str) -> impl Iterator<Item = &'a LauItem> + 'a {
        self.items
            .values()
            .filter(move |item| item.nuts_code.starts_with(nuts_prefix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LauItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
