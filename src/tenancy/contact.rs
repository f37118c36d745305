//! E-mail addresses and telephone numbers with change-tracking setters.

use serde::{Deserialize, Serialize};

use crate::core::{Change, ValidationError, set_if_changed};

/// Usage of a contact channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContactKind {
    #[default]
    Business,
    Private,
    Mobile,
    Fax,
    Other,
}

/// An e-mail address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmailAddress {
    address: String,
    kind: ContactKind,
    personal_name: Option<String>,
}

const MAX_LOCAL_PART: usize = 64;
const MAX_ADDRESS: usize = 254;

fn invalid_email(address: &str, reason: &str) -> ValidationError {
    ValidationError::with_code(
        "email_address",
        format!("'{address}' {reason}"),
        "email_address.invalid",
    )
}

impl EmailAddress {
    pub fn new(address: impl Into<String>, kind: ContactKind) -> Self {
        Self {
            address: address.into().trim().to_string(),
            kind,
            personal_name: None,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn kind(&self) -> ContactKind {
        self.kind
    }

    pub fn personal_name(&self) -> Option<&str> {
        self.personal_name.as_deref()
    }

    pub fn set_address(&mut self, address: &str) -> Change {
        set_if_changed(&mut self.address, address.trim().to_string())
    }

    pub fn set_kind(&mut self, kind: ContactKind) -> Change {
        set_if_changed(&mut self.kind, kind)
    }

    /// Empty names clear the personal name.
    pub fn set_personal_name(&mut self, name: Option<&str>) -> Change {
        let name = name.map(str::trim).filter(|n| !n.is_empty()).map(String::from);
        set_if_changed(&mut self.personal_name, name)
    }

    /// Structural check: `local@domain` with a dotted domain of
    /// alphanumeric or hyphenated labels.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let address = self.address.as_str();
        if address.len() > MAX_ADDRESS {
            return Err(invalid_email(address, "is too long"));
        }
        let Some((local, domain)) = address.rsplit_once('@') else {
            return Err(invalid_email(address, "has no '@'"));
        };
        if local.is_empty() || local.len() > MAX_LOCAL_PART {
            return Err(invalid_email(address, "has an invalid local part"));
        }
        let local_ok = local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(c))
            && !local.starts_with('.')
            && !local.ends_with('.')
            && !local.contains("..");
        if !local_ok {
            return Err(invalid_email(address, "has an invalid local part"));
        }
        let labels: Vec<&str> = domain.split('.').collect();
        let domain_ok = labels.len() >= 2
            && labels.iter().all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            });
        if !domain_ok {
            return Err(invalid_email(address, "has an invalid domain"));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.personal_name {
            Some(name) => write!(f, "{name} <{}>", self.address),
            None => f.write_str(&self.address),
        }
    }
}

/// A telephone number split into its dialling parts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TelephoneNumber {
    kind: ContactKind,
    country_code: String,
    area_code: String,
    line: String,
    direct_dial: String,
}

impl TelephoneNumber {
    /// Parts are trimmed; a leading `+` on the country code is dropped.
    pub fn new(
        kind: ContactKind,
        country_code: impl Into<String>,
        area_code: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            country_code: country_code.into().trim().trim_start_matches('+').to_string(),
            area_code: area_code.into().trim().to_string(),
            line: line.into().trim().to_string(),
            direct_dial: String::new(),
        }
    }

    pub fn kind(&self) -> ContactKind {
        self.kind
    }

    /// International dialling code without `+`, e.g. `43`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn direct_dial(&self) -> &str {
        &self.direct_dial
    }

    pub fn set_kind(&mut self, kind: ContactKind) -> Change {
        set_if_changed(&mut self.kind, kind)
    }

    pub fn set_country_code(&mut self, country_code: &str) -> Change {
        let country_code = country_code.trim().trim_start_matches('+');
        set_if_changed(&mut self.country_code, country_code.to_string())
    }

    pub fn set_area_code(&mut self, area_code: &str) -> Change {
        set_if_changed(&mut self.area_code, area_code.trim().to_string())
    }

    pub fn set_line(&mut self, line: &str) -> Change {
        set_if_changed(&mut self.line, line.trim().to_string())
    }

    pub fn set_direct_dial(&mut self, direct_dial: &str) -> Change {
        set_if_changed(&mut self.direct_dial, direct_dial.trim().to_string())
    }

    /// No line number set.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// `+CC AREA LINE-DD`, leaving out empty parts.
    pub fn as_string(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if !self.country_code.is_empty() {
            parts.push(format!("+{}", self.country_code));
        }
        if !self.area_code.is_empty() {
            parts.push(self.area_code.clone());
        }
        if !self.line.is_empty() {
            parts.push(self.line.clone());
        }
        let mut out = parts.join(" ");
        if !self.direct_dial.is_empty() {
            out.push('-');
            out.push_str(&self.direct_dial);
        }
        out
    }
}

impl std::fmt::Display for TelephoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_string())
    }
}
