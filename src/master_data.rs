//! All reference registries loaded once and shared read-only.

use crate::bank::IbanRegistry;
use crate::core::MasterDataError;
use crate::postal::PostalCodeRegistry;
use crate::region::{LauRegistry, NutsRegistry};
use crate::vat::VatinStructures;
use crate::vehicle::VehicleSigns;

/// The loaded reference tables.
///
/// Build it once at startup and share it, e.g. behind an `Arc`; nothing in
/// it changes after construction.
#[derive(Debug, Clone)]
pub struct MasterData {
    pub postal: PostalCodeRegistry,
    pub nuts: NutsRegistry,
    pub lau: LauRegistry,
    pub iban: IbanRegistry,
    pub vatin: VatinStructures,
    pub vehicle_signs: VehicleSigns,
}

impl MasterData {
    /// Load every registry from the data bundled with this crate.
    pub fn load() -> Result<Self, MasterDataError> {
        MasterDataBuilder::new().build()
    }

    pub fn builder<'a>() -> MasterDataBuilder<'a> {
        MasterDataBuilder::new()
    }
}

/// Loads [`MasterData`], optionally replacing bundled tables.
#[derive(Debug, Default)]
pub struct MasterDataBuilder<'a> {
    postal_xml: Option<&'a str>,
    nuts_xml: Option<&'a str>,
    lau_xml: Option<&'a str>,
    iban: Option<IbanRegistry>,
}

impl<'a> MasterDataBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Postal code formats from a `<postalcodes>` document.
    pub fn postal_xml(mut self, xml: &'a str) -> Self {
        self.postal_xml = Some(xml);
        self
    }

    /// NUTS items from a `<nuts>` document.
    pub fn nuts_xml(mut self, xml: &'a str) -> Self {
        self.nuts_xml = Some(xml);
        self
    }

    /// LAU items from a `<lau>` document.
    pub fn lau_xml(mut self, xml: &'a str) -> Self {
        self.lau_xml = Some(xml);
        self
    }

    /// A custom IBAN registry (e.g. with validity periods).
    pub fn iban(mut self, registry: IbanRegistry) -> Self {
        self.iban = Some(registry);
        self
    }

    /// Load all registries. LAU items must refer to NUTS 3 regions of the
    /// loaded NUTS registry.
    pub fn build(self) -> Result<MasterData, MasterDataError> {
        let postal = match self.postal_xml {
            Some(xml) => PostalCodeRegistry::from_xml(xml)?,
            None => PostalCodeRegistry::bundled()?,
        };
        let nuts = match self.nuts_xml {
            Some(xml) => NutsRegistry::from_xml(xml)?,
            None => NutsRegistry::bundled()?,
        };
        let lau = match self.lau_xml {
            Some(xml) => LauRegistry::from_xml(xml)?,
            None => LauRegistry::bundled()?,
        };
        lau.check_against(&nuts)?;
        let iban = match self.iban {
            Some(registry) => registry,
            None => IbanRegistry::bundled()?,
        };
        let vatin = VatinStructures::bundled()?;
        let vehicle_signs = VehicleSigns::new();

        tracing::debug!(
            postal_countries = postal.len(),
            nuts = nuts.len(),
            lau = lau.len(),
            iban_countries = iban.len(),
            "master data loaded"
        );
        Ok(MasterData {
            postal,
            nuts,
            lau,
            iban,
            vatin,
            vehicle_signs,
        })
    }
}
