//! NUTS (Nomenclature of Territorial Units for Statistics) hierarchy.

use std::collections::BTreeMap;
use std::ops::Bound;

use serde::Serialize;

use crate::core::xml::for_each_element;
use crate::core::{MasterDataError, is_known_country_code};

const BUNDLED_XML: &str = include_str!("data/nuts.xml");

/// Deepest NUTS level (NUTS 3).
pub const MAX_NUTS_LEVEL: usize = 3;

/// A NUTS region, e.g. `AT130` (Wien).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutsItem {
    id: String,
    display_name: String,
}

impl NutsItem {
    /// Create an item after checking the id shape: a NUTS country prefix
    /// followed by up to three upper-case alphanumeric characters.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, MasterDataError> {
        let id = id.into();
        let well_formed = (2..=2 + MAX_NUTS_LEVEL).contains(&id.len())
            && id
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
            && is_nuts_country_prefix(&id[..2]);
        if !well_formed {
            return Err(MasterDataError::InvalidArgument(format!(
                "invalid NUTS code '{id}'"
            )));
        }
        Ok(Self {
            id,
            display_name: display_name.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The NUTS country prefix, e.g. `EL` for Greece.
    pub fn country_code(&self) -> &str {
        &self.id[..2]
    }

    /// The ISO 3166-1 code of the country (`EL` → `GR`, `UK` → `GB`).
    pub fn iso_country_code(&self) -> &str {
        match self.country_code() {
            "EL" => "GR",
            "UK" => "GB",
            cc => cc,
        }
    }

    /// 0 for a country, up to 3.
    pub fn level(&self) -> usize {
        self.id.len() - 2
    }

    /// Code of the enclosing region; `None` at level 0.
    pub fn parent_id(&self) -> Option<&str> {
        (self.level() > 0).then(|| &self.id[..self.id.len() - 1])
    }
}

/// NUTS deviates from ISO 3166-1 for Greece and the United Kingdom.
fn is_nuts_country_prefix(prefix: &str) -> bool {
    matches!(prefix, "EL" | "UK") || is_known_country_code(prefix)
}

/// The NUTS hierarchy, keyed by code.
#[derive(Debug, Clone, Default)]
pub struct NutsRegistry {
    items: BTreeMap<String, NutsItem>,
}

impl NutsRegistry {
    /// The NUTS items shipped with this crate.
    pub fn bundled() -> Result<Self, MasterDataError> {
        Self::from_xml(BUNDLED_XML)
    }

    /// Read `<nuts><item id=".." name=".."/>...</nuts>`.
    pub fn from_xml(xml: &str) -> Result<Self, MasterDataError> {
        let mut items = Vec::new();
        for_each_element(xml, |ancestors, el| {
            match el.name.as_str() {
                "item" => items.push(NutsItem::new(el.required_attr("id")?, el.required_attr("name")?)?),
                "nuts" if ancestors.is_empty() => {}
                other => tracing::warn!(element = other, "skipping unknown NUTS element"),
            }
            Ok(())
        })?;
        let registry = Self::from_items(items)?;
        tracing::debug!(items = registry.len(), "loaded NUTS items");
        Ok(registry)
    }

    /// Build from items in any order. Every non-root item needs its parent.
    pub fn from_items(items: impl IntoIterator<Item = NutsItem>) -> Result<Self, MasterDataError> {
        let mut map = BTreeMap::new();
        for item in items {
            if map.contains_key(&item.id) {
                return Err(MasterDataError::DuplicateKey {
                    registry: "NUTS",
                    key: item.id,
                });
            }
            map.insert(item.id.clone(), item);
        }
        for item in map.values() {
            if let Some(parent) = item.parent_id() {
                if !map.contains_key(parent) {
                    return Err(MasterDataError::InvalidArgument(format!(
                        "NUTS item '{}' has no parent '{parent}'",
                        item.id
                    )));
                }
            }
        }
        Ok(Self { items: map })
    }

    pub fn get(&self, id: &str) -> Option<&NutsItem> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Direct children of `id`, in code order.
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a NutsItem> + 'a {
        self.items
            .range::<str, _>((Bound::Included(id), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(id))
            .map(|(_, item)| item)
            .filter(move |item| item.parent_id() == Some(id))
    }

    /// All items of one country, including the country itself.
    pub fn items_of_country<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a NutsItem> + 'a {
        self.items.values().filter(move |item| item.country_code() == country)
    }

    pub fn items_at_level(&self, level: usize) -> impl Iterator<Item = &NutsItem> {
        self.items.values().filter(move |item| item.level() == level)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NutsItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
