//! Distinguishing signs of vehicles in international traffic.

use std::collections::BTreeMap;

use crate::core::MasterDataError;

/// International vehicle registration codes and the countries using them.
///
/// The relation is many-to-many: Guernsey has two signs, `ROK` is recorded
/// for both Koreas and the United Kingdom uses `GB` as well as `UK`. Callers
/// choose between "all values" and "exactly one or an error".
#[derive(Debug, Clone)]
pub struct VehicleSigns {
    by_sign: BTreeMap<&'static str, Vec<&'static str>>,
    by_country: BTreeMap<&'static str, Vec<&'static str>>,
}

impl Default for VehicleSigns {
    fn default() -> Self {
        Self::new()
    }
}

fn single(
    what: &'static str,
    key: &str,
    values: &[&'static str],
) -> Result<Option<&'static str>, MasterDataError> {
    match values {
        [] => Ok(None),
        [one] => Ok(Some(*one)),
        many => Err(MasterDataError::Ambiguous {
            what,
            key: key.to_string(),
            candidates: many.iter().map(|v| v.to_string()).collect(),
        }),
    }
}

impl VehicleSigns {
    pub fn new() -> Self {
        let mut by_sign: BTreeMap<_, Vec<_>> = BTreeMap::new();
        let mut by_country: BTreeMap<_, Vec<_>> = BTreeMap::new();
        for &(sign, country) in VEHICLE_SIGNS {
            by_sign.entry(sign).or_default().push(country);
            by_country.entry(country).or_default().push(sign);
        }
        for values in by_sign.values_mut().chain(by_country.values_mut()) {
            values.sort_unstable();
        }
        Self {
            by_sign,
            by_country,
        }
    }

    /// All ISO country codes using `sign`, sorted.
    pub fn countries_for_sign(&self, sign: &str) -> &[&'static str] {
        self.by_sign
            .get(sign.to_ascii_uppercase().as_str())
            .map_or(&[], Vec::as_slice)
    }

    /// The one country using `sign`, or `Ambiguous` if there are several.
    pub fn single_country_for_sign(
        &self,
        sign: &str,
    ) -> Result<Option<&'static str>, MasterDataError> {
        single("vehicle sign", sign, self.countries_for_sign(sign))
    }

    /// All vehicle signs of an ISO country, sorted.
    pub fn signs_for_country(&self, country: &str) -> &[&'static str] {
        self.by_country
            .get(country.to_ascii_uppercase().as_str())
            .map_or(&[], Vec::as_slice)
    }

    /// The one sign of `country`, or `Ambiguous` if there are several.
    pub fn single_sign_for_country(
        &self,
        country: &str,
    ) -> Result<Option<&'static str>, MasterDataError> {
        single("country", country, self.signs_for_country(country))
    }

    pub fn signs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_sign.keys().copied()
    }

    pub fn countries(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_country.keys().copied()
    }
}

/// (sign, ISO country) sorted by sign, then country.
static VEHICLE_SIGNS: &[(&str, &str)] = &[
    ("A", "AT"),
    ("AFG", "AF"),
    ("AL", "AL"),
    ("AND", "AD"),
    ("ARM", "AM"),
    ("AUS", "AU"),
    ("AZ", "AZ"),
    ("B", "BE"),
    ("BD", "BD"),
    ("BDS", "BB"),
    ("BG", "BG"),
    ("BIH", "BA"),
    ("BOL", "BO"),
    ("BR", "BR"),
    ("BRN", "BH"),
    ("BRU", "BN"),
    ("BS", "BS"),
    ("BY", "BY"),
    ("C", "CU"),
    ("CDN", "CA"),
    ("CH", "CH"),
    ("CI", "CI"),
    ("CL", "LK"),
    ("CO", "CO"),
    ("CR", "CR"),
    ("CY", "CY"),
    ("CZ", "CZ"),
    ("D", "DE"),
    ("DK", "DK"),
    ("DOM", "DO"),
    ("DZ", "DZ"),
    ("E", "ES"),
    ("EAK", "KE"),
    ("EAT", "TZ"),
    ("EAU", "UG"),
    ("EC", "EC"),
    ("ER", "ER"),
    ("ES", "SV"),
    ("EST", "EE"),
    ("ET", "EG"),
    ("ETH", "ET"),
    ("F", "FR"),
    ("FIN", "FI"),
    ("FJI", "FJ"),
    ("FL", "LI"),
    ("FO", "FO"),
    ("GB", "GB"),
    ("GBA", "GG"),
    ("GBG", "GG"),
    ("GBJ", "JE"),
    ("GBM", "IM"),
    ("GBZ", "GI"),
    ("GCA", "GT"),
    ("GE", "GE"),
    ("GH", "GH"),
    ("GR", "GR"),
    ("GUY", "GY"),
    ("H", "HU"),
    ("HK", "HK"),
    ("HR", "HR"),
    ("I", "IT"),
    ("IL", "IL"),
    ("IND", "IN"),
    ("IR", "IR"),
    ("IRL", "IE"),
    ("IRQ", "IQ"),
    ("IS", "IS"),
    ("J", "JP"),
    ("JA", "JM"),
    ("JOR", "JO"),
    ("K", "KH"),
    ("KS", "KG"),
    ("KSA", "SA"),
    ("KWT", "KW"),
    ("KZ", "KZ"),
    ("L", "LU"),
    ("LAO", "LA"),
    ("LAR", "LY"),
    ("LS", "LS"),
    ("LT", "LT"),
    ("LV", "LV"),
    ("M", "MT"),
    ("MA", "MA"),
    ("MAL", "MY"),
    ("MC", "MC"),
    ("MD", "MD"),
    ("MEX", "MX"),
    ("MGL", "MN"),
    ("MK", "MK"),
    ("MNE", "ME"),
    ("MOC", "MZ"),
    ("MS", "MU"),
    ("MW", "MW"),
    ("N", "NO"),
    ("NAM", "NA"),
    ("NEP", "NP"),
    ("NIC", "NI"),
    ("NL", "NL"),
    ("NZ", "NZ"),
    ("P", "PT"),
    ("PA", "PA"),
    ("PE", "PE"),
    ("PK", "PK"),
    ("PL", "PL"),
    ("PY", "PY"),
    ("Q", "QA"),
    ("RA", "AR"),
    ("RB", "BW"),
    ("RC", "TW"),
    ("RCH", "CL"),
    ("RG", "GN"),
    ("RH", "HT"),
    ("RI", "ID"),
    ("RIM", "MR"),
    ("RL", "LB"),
    ("RM", "MG"),
    ("RMM", "ML"),
    ("RN", "NE"),
    ("RO", "RO"),
    ("ROK", "KP"),
    ("ROK", "KR"),
    ("ROU", "UY"),
    ("RP", "PH"),
    ("RSM", "SM"),
    ("RUS", "RU"),
    ("RWA", "RW"),
    ("S", "SE"),
    ("SD", "SZ"),
    ("SGP", "SG"),
    ("SK", "SK"),
    ("SLO", "SI"),
    ("SME", "SR"),
    ("SN", "SN"),
    ("SO", "SO"),
    ("SRB", "RS"),
    ("SUD", "SD"),
    ("SY", "SC"),
    ("SYR", "SY"),
    ("T", "TH"),
    ("TG", "TG"),
    ("TJ", "TJ"),
    ("TM", "TM"),
    ("TN", "TN"),
    ("TR", "TR"),
    ("TT", "TT"),
    ("UA", "UA"),
    ("UAE", "AE"),
    ("UK", "GB"),
    ("USA", "US"),
    ("UZ", "UZ"),
    ("V", "VA"),
    ("VN", "VN"),
    ("WAG", "GM"),
    ("WAL", "SL"),
    ("WAN", "NG"),
    ("YAR", "YE"),
    ("YV", "VE"),
    ("Z", "ZM"),
    ("ZA", "ZA"),
    ("ZW", "ZW"),
];
