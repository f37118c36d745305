//! Dated exchange ratios between two currencies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Change, MasterDataError, is_known_currency_code, round_to_currency};

/// Conversion factor valid from a date on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExchangeRatioData")]
pub struct ExchangeRatio {
    date: NaiveDate,
    ratio: Decimal,
}

#[derive(Deserialize)]
struct ExchangeRatioData {
    date: NaiveDate,
    ratio: Decimal,
}

impl TryFrom<ExchangeRatioData> for ExchangeRatio {
    type Error = MasterDataError;

    fn try_from(data: ExchangeRatioData) -> Result<Self, Self::Error> {
        Self::new(data.date, data.ratio)
    }
}

impl ExchangeRatio {
    /// Create a ratio; it must be strictly positive.
    pub fn new(date: NaiveDate, ratio: Decimal) -> Result<Self, MasterDataError> {
        if ratio <= Decimal::ZERO {
            return Err(MasterDataError::InvalidArgument(format!(
                "exchange ratio must be positive, got {ratio}"
            )));
        }
        Ok(Self { date, ratio })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn ratio(&self) -> Decimal {
        self.ratio
    }
}

/// Dated ratios converting amounts of `base` into `currency`, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExchangeRatioListData")]
pub struct ExchangeRatioList {
    base: String,
    currency: String,
    ratios: Vec<ExchangeRatio>,
}

#[derive(Deserialize)]
struct ExchangeRatioListData {
    base: String,
    currency: String,
    ratios: Vec<ExchangeRatio>,
}

/// Ratios may arrive in any order; two ratios for one date are rejected.
impl TryFrom<ExchangeRatioListData> for ExchangeRatioList {
    type Error = MasterDataError;

    fn try_from(data: ExchangeRatioListData) -> Result<Self, Self::Error> {
        let mut list = Self::new(&data.base, &data.currency)?;
        for ratio in data.ratios {
            if list.ratios.binary_search_by_key(&ratio.date, |r| r.date).is_ok() {
                return Err(MasterDataError::DuplicateKey {
                    registry: "exchange ratios",
                    key: ratio.date.to_string(),
                });
            }
            list.add(ratio);
        }
        Ok(list)
    }
}

impl ExchangeRatioList {
    pub fn new(base: &str, currency: &str) -> Result<Self, MasterDataError> {
        for code in [base, currency] {
            if !is_known_currency_code(code) {
                return Err(MasterDataError::InvalidArgument(format!(
                    "unknown currency '{code}'"
                )));
            }
        }
        Ok(Self {
            base: base.to_string(),
            currency: currency.to_string(),
            ratios: Vec::new(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Insert a ratio; an existing ratio for the same date is replaced.
    pub fn add(&mut self, ratio: ExchangeRatio) -> Change {
        match self.ratios.binary_search_by_key(&ratio.date, |r| r.date) {
            Ok(idx) if self.ratios[idx] == ratio => Change::Unchanged,
            Ok(idx) => {
                self.ratios[idx] = ratio;
                Change::Changed
            }
            Err(idx) => {
                self.ratios.insert(idx, ratio);
                Change::Changed
            }
        }
    }

    pub fn remove(&mut self, date: NaiveDate) -> Change {
        match self.ratios.binary_search_by_key(&date, |r| r.date) {
            Ok(idx) => {
                self.ratios.remove(idx);
                Change::Changed
            }
            Err(_) => Change::Unchanged,
        }
    }

    /// The newest ratio dated on or before `date`.
    pub fn ratio_at(&self, date: NaiveDate) -> Option<&ExchangeRatio> {
        let idx = self.ratios.partition_point(|r| r.date <= date);
        idx.checked_sub(1).map(|i| &self.ratios[i])
    }

    pub fn latest(&self) -> Option<&ExchangeRatio> {
        self.ratios.last()
    }

    /// Convert a `base` amount into `currency` using the ratio valid at
    /// `date`, rounded to the target currency's minor unit.
    ///
    /// `None` if no ratio is in force on `date` or the product overflows.
    pub fn convert(&self, amount: Decimal, date: NaiveDate) -> Option<Decimal> {
        let ratio = self.ratio_at(date)?;
        let converted = amount.checked_mul(ratio.ratio)?;
        Some(round_to_currency(converted, &self.currency))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExchangeRatio> {
        self.ratios.iter()
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn list() -> ExchangeRatioList {
        let mut list = ExchangeRatioList::new("EUR", "CHF").unwrap();
        list.add(ExchangeRatio::new(date(2024, 3, 1), dec!(0.95)).unwrap());
        list.add(ExchangeRatio::new(date(2024, 1, 1), dec!(0.93)).unwrap());
        list.add(ExchangeRatio::new(date(2024, 2, 1), dec!(0.94)).unwrap());
        list
    }

    #[test]
    fn kept_sorted() {
        let dates: Vec<_> = list().iter().map(ExchangeRatio::date).collect();
        assert_eq!(dates, [date(2024, 1, 1), date(2024, 2, 1), date(2024, 3, 1)]);
    }

    #[test]
    fn same_date_replaces() {
        let mut list = list();
        let replacement = ExchangeRatio::new(date(2024, 2, 1), dec!(0.945)).unwrap();
        assert_eq!(list.add(replacement), Change::Changed);
        assert_eq!(list.add(replacement), Change::Unchanged);
        assert_eq!(list.len(), 3);
        assert_eq!(list.ratio_at(date(2024, 2, 15)).unwrap().ratio(), dec!(0.945));
    }

    #[test]
    fn ratio_lookup_by_date() {
        let list = list();
        assert!(list.ratio_at(date(2023, 12, 31)).is_none());
        assert_eq!(list.ratio_at(date(2024, 1, 1)).unwrap().ratio(), dec!(0.93));
        assert_eq!(list.ratio_at(date(2024, 2, 29)).unwrap().ratio(), dec!(0.94));
        assert_eq!(list.ratio_at(date(2030, 1, 1)).unwrap().ratio(), dec!(0.95));
        assert_eq!(list.latest().unwrap().date(), date(2024, 3, 1));
    }

    #[test]
    fn conversion_rounds_to_target() {
        let list = list();
        assert_eq!(list.convert(dec!(10.01), date(2024, 1, 15)), Some(dec!(9.31)));
        assert_eq!(list.convert(dec!(1), date(2020, 1, 1)), None);

        let mut yen = ExchangeRatioList::new("EUR", "JPY").unwrap();
        yen.add(ExchangeRatio::new(date(2024, 1, 1), dec!(157.3)).unwrap());
        assert_eq!(yen.convert(dec!(10), date(2024, 1, 1)), Some(dec!(1573)));
    }

    #[test]
    fn remove() {
        let mut list = list();
        assert_eq!(list.remove(date(2024, 2, 1)), Change::Changed);
        assert_eq!(list.remove(date(2024, 2, 1)), Change::Unchanged);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn invalid_input() {
        assert!(ExchangeRatio::new(date(2024, 1, 1), dec!(0)).is_err());
        assert!(ExchangeRatio::new(date(2024, 1, 1), dec!(-1)).is_err());
        assert!(ExchangeRatioList::new("EUR", "XXX1").is_err());
    }

    #[test]
    fn overflow_is_none() {
        let mut list = ExchangeRatioList::new("EUR", "USD").unwrap();
        list.add(ExchangeRatio::new(date(2024, 1, 1), dec!(1000)).unwrap());
        assert_eq!(list.convert(Decimal::MAX, date(2024, 1, 1)), None);
        assert_eq!(list.convert(Decimal::MIN, date(2024, 1, 1)), None);
    }
}
