//! Net prices with VAT and quantity-based price graduations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Change, MasterDataError, is_known_currency_code, round_to_currency};

/// Net unit price with the VAT percentage applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub net: Decimal,
    /// VAT rate in percent (e.g. `19` for 19 %).
    pub vat_percentage: Decimal,
}

impl Price {
    pub fn new(net: Decimal, vat_percentage: Decimal) -> Self {
        Self {
            net,
            vat_percentage,
        }
    }

    /// VAT amount, rounded half-up to `currency`. `None` on overflow.
    pub fn vat_amount(&self, currency: &str) -> Option<Decimal> {
        let vat = self
            .net
            .checked_mul(self.vat_percentage)?
            .checked_div(Decimal::ONE_HUNDRED)?;
        Some(round_to_currency(vat, currency))
    }

    /// Net plus VAT, rounded half-up to `currency`. `None` on overflow.
    pub fn gross(&self, currency: &str) -> Option<Decimal> {
        let factor = Decimal::ONE_HUNDRED.checked_add(self.vat_percentage)?;
        let gross = self
            .net
            .checked_mul(factor)?
            .checked_div(Decimal::ONE_HUNDRED)?;
        Some(round_to_currency(gross, currency))
    }
}

/// One quantity tier of a [`PriceGraduation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PriceGraduationItemData")]
pub struct PriceGraduationItem {
    min_quantity: u32,
    unit_price: Price,
}

#[derive(Deserialize)]
struct PriceGraduationItemData {
    min_quantity: u32,
    unit_price: Price,
}

impl TryFrom<PriceGraduationItemData> for PriceGraduationItem {
    type Error = MasterDataError;

    fn try_from(data: PriceGraduationItemData) -> Result<Self, Self::Error> {
        Self::new(data.min_quantity, data.unit_price)
    }
}

impl PriceGraduationItem {
    /// A tier applying from `min_quantity` (at least 1) units on.
    pub fn new(min_quantity: u32, unit_price: Price) -> Result<Self, MasterDataError> {
        if min_quantity == 0 {
            return Err(MasterDataError::InvalidArgument(
                "minimum quantity must be at least 1".into(),
            ));
        }
        Ok(Self {
            min_quantity,
            unit_price,
        })
    }

    pub fn min_quantity(&self) -> u32 {
        self.min_quantity
    }

    pub fn unit_price(&self) -> &Price {
        &self.unit_price
    }
}

/// Quantity-tiered unit prices in one currency, ordered by minimum quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PriceGraduationData")]
pub struct PriceGraduation {
    currency: String,
    items: Vec<PriceGraduationItem>,
}

#[derive(Deserialize)]
struct PriceGraduationData {
    currency: String,
    items: Vec<PriceGraduationItem>,
}

impl TryFrom<PriceGraduationData> for PriceGraduation {
    type Error = MasterDataError;

    fn try_from(data: PriceGraduationData) -> Result<Self, Self::Error> {
        let mut graduation = Self::new(&data.currency)?;
        for item in data.items {
            graduation.add_item(item)?;
        }
        Ok(graduation)
    }
}

impl PriceGraduation {
    pub fn new(currency: &str) -> Result<Self, MasterDataError> {
        if !is_known_currency_code(currency) {
            return Err(MasterDataError::InvalidArgument(format!(
                "unknown currency '{currency}'"
            )));
        }
        Ok(Self {
            currency: currency.to_string(),
            items: Vec::new(),
        })
    }

    /// A graduation with a single tier starting at quantity 1.
    pub fn single(currency: &str, unit_price: Price) -> Result<Self, MasterDataError> {
        let mut graduation = Self::new(currency)?;
        graduation.add_item(PriceGraduationItem::new(1, unit_price)?)?;
        Ok(graduation)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Add a tier; its minimum quantity must not be taken yet.
    pub fn add_item(&mut self, item: PriceGraduationItem) -> Result<(), MasterDataError> {
        match self
            .items
            .binary_search_by_key(&item.min_quantity, |i| i.min_quantity)
        {
            Ok(_) => Err(MasterDataError::DuplicateKey {
                registry: "price graduation",
                key: item.min_quantity.to_string(),
            }),
            Err(idx) => {
                self.items.insert(idx, item);
                Ok(())
            }
        }
    }

    pub fn remove_item(&mut self, min_quantity: u32) -> Change {
        let before = self.items.len();
        self.items.retain(|i| i.min_quantity != min_quantity);
        Change::from(self.items.len() != before)
    }

    /// The tier with the lowest minimum quantity.
    pub fn smallest_item(&self) -> Option<&PriceGraduationItem> {
        self.items.first()
    }

    /// The tier applying to `quantity`: greatest minimum not above it.
    pub fn item_for_quantity(&self, quantity: u32) -> Option<&PriceGraduationItem> {
        let idx = self.items.partition_point(|i| i.min_quantity <= quantity);
        idx.checked_sub(1).map(|i| &self.items[i])
    }

    /// Net total for `quantity` units at the applicable tier.
    ///
    /// `None` below the smallest tier or when the total overflows.
    pub fn total_for_quantity(&self, quantity: u32) -> Option<Decimal> {
        let item = self.item_for_quantity(quantity)?;
        let total = item.unit_price.net.checked_mul(Decimal::from(quantity))?;
        Some(round_to_currency(total, &self.currency))
    }

    pub fn items(&self) -> &[PriceGraduationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn graduation() -> PriceGraduation {
        let mut g = PriceGraduation::new("EUR").unwrap();
        for (min, net) in [(100, dec!(8.50)), (1, dec!(10.00)), (10, dec!(9.25))] {
            g.add_item(PriceGraduationItem::new(min, Price::new(net, dec!(19))).unwrap())
                .unwrap();
        }
        g
    }

    #[test]
    fn gross_and_vat() {
        let p = Price::new(dec!(9.99), dec!(19));
        assert_eq!(p.gross("EUR"), Some(dec!(11.89)));
        assert_eq!(p.vat_amount("EUR"), Some(dec!(1.90)));
        assert_eq!(Price::new(dec!(100), dec!(7)).gross("JPY"), Some(dec!(107)));
    }

    #[test]
    fn overflow_is_none() {
        let huge = Price::new(Decimal::MAX, dec!(19));
        assert_eq!(huge.gross("EUR"), None);
        assert_eq!(huge.vat_amount("EUR"), None);
        let g = PriceGraduation::single("EUR", huge).unwrap();
        assert_eq!(g.total_for_quantity(2), None);
        assert_eq!(g.total_for_quantity(1), Some(Decimal::MAX));
    }

    #[test]
    fn tiers_are_sorted() {
        let mins: Vec<_> = graduation().items().iter().map(|i| i.min_quantity()).collect();
        assert_eq!(mins, [1, 10, 100]);
        assert_eq!(graduation().smallest_item().unwrap().min_quantity(), 1);
    }

    #[test]
    fn tier_lookup() {
        let g = graduation();
        assert!(g.item_for_quantity(0).is_none());
        assert_eq!(g.item_for_quantity(1).unwrap().unit_price().net, dec!(10.00));
        assert_eq!(g.item_for_quantity(9).unwrap().min_quantity(), 1);
        assert_eq!(g.item_for_quantity(10).unwrap().min_quantity(), 10);
        assert_eq!(g.item_for_quantity(5000).unwrap().min_quantity(), 100);
        assert_eq!(g.total_for_quantity(12), Some(dec!(111.00)));
    }

    #[test]
    fn duplicate_min_quantity_rejected() {
        let mut g = graduation();
        let item = PriceGraduationItem::new(10, Price::new(dec!(1), dec!(0))).unwrap();
        assert!(matches!(
            g.add_item(item),
            Err(MasterDataError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn zero_quantity_and_unknown_currency() {
        assert!(PriceGraduationItem::new(0, Price::new(dec!(1), dec!(0))).is_err());
        assert!(PriceGraduation::new("EURO").is_err());
    }

    #[test]
    fn remove_and_single() {
        let mut g = graduation();
        assert_eq!(g.remove_item(10), Change::Changed);
        assert_eq!(g.remove_item(10), Change::Unchanged);
        let single = PriceGraduation::single("EUR", Price::new(dec!(5), dec!(19))).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.total_for_quantity(3), Some(dec!(15)));
    }
}
