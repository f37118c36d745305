//! Tenants and the business objects they own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bookkeeping::Bookkeeping;
use crate::core::{Change, MasterDataError, set_if_changed};

/// Common surface of identifiable, bookkept objects.
pub trait BusinessObject {
    /// Stable type name such as `"tenant"`.
    fn object_type(&self) -> &str;

    fn id(&self) -> &str;

    fn bookkeeping(&self) -> &Bookkeeping;

    fn is_deleted(&self) -> bool {
        self.bookkeeping().is_deleted()
    }

    fn last_change_at(&self) -> DateTime<Utc> {
        self.bookkeeping().last_change_at()
    }
}

fn require_id(kind: &str, id: String) -> Result<String, MasterDataError> {
    if id.trim().is_empty() {
        return Err(MasterDataError::InvalidArgument(format!("{kind} id must not be empty")));
    }
    Ok(id)
}

/// An organisation owning a separate set of business data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TenantData")]
pub struct Tenant {
    id: String,
    display_name: String,
    bookkeeping: Bookkeeping,
}

#[derive(Deserialize)]
struct TenantData {
    id: String,
    display_name: String,
    bookkeeping: Bookkeeping,
}

impl TryFrom<TenantData> for Tenant {
    type Error = MasterDataError;

    fn try_from(data: TenantData) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_id("tenant", data.id)?,
            display_name: data.display_name,
            bookkeeping: data.bookkeeping,
        })
    }
}

impl Tenant {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        at: DateTime<Utc>,
        by: impl Into<String>,
    ) -> Result<Self, MasterDataError> {
        Ok(Self {
            id: require_id("tenant", id.into())?,
            display_name: display_name.into(),
            bookkeeping: Bookkeeping::new(at, by),
        })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Rename; a real change is recorded as a modification.
    pub fn set_display_name(
        &mut self,
        display_name: impl Into<String>,
        at: DateTime<Utc>,
        by: impl Into<String>,
    ) -> Change {
        let change = set_if_changed(&mut self.display_name, display_name.into());
        if change.is_changed() {
            self.bookkeeping.mark_modified(at, by);
        }
        change
    }

    pub fn bookkeeping_mut(&mut self) -> &mut Bookkeeping {
        &mut self.bookkeeping
    }
}

impl BusinessObject for Tenant {
    fn object_type(&self) -> &str {
        "tenant"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn bookkeeping(&self) -> &Bookkeeping {
        &self.bookkeeping
    }
}

/// Any payload owned by exactly one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "TenantObjectData<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct TenantObject<T> {
    tenant_id: String,
    object_type: String,
    id: String,
    data: T,
    bookkeeping: Bookkeeping,
}

#[derive(Deserialize)]
struct TenantObjectData<T> {
    tenant_id: String,
    object_type: String,
    id: String,
    data: T,
    bookkeeping: Bookkeeping,
}

impl<T> TryFrom<TenantObjectData<T>> for TenantObject<T> {
    type Error = MasterDataError;

    fn try_from(raw: TenantObjectData<T>) -> Result<Self, Self::Error> {
        Ok(Self {
            tenant_id: require_id("tenant", raw.tenant_id)?,
            object_type: raw.object_type,
            id: require_id("object", raw.id)?,
            data: raw.data,
            bookkeeping: raw.bookkeeping,
        })
    }
}

impl<T> TenantObject<T> {
    pub fn new(
        tenant: &Tenant,
        object_type: impl Into<String>,
        id: impl Into<String>,
        data: T,
        at: DateTime<Utc>,
        by: impl Into<String>,
    ) -> Result<Self, MasterDataError> {
        Ok(Self {
            tenant_id: tenant.id.clone(),
            object_type: object_type.into(),
            id: require_id("object", id.into())?,
            data,
            bookkeeping: Bookkeeping::new(at, by),
        })
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn belongs_to(&self, tenant: &Tenant) -> bool {
        self.tenant_id == tenant.id
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn bookkeeping_mut(&mut self) -> &mut Bookkeeping {
        &mut self.bookkeeping
    }

    /// Replace the payload; a real change is recorded as a modification.
    pub fn set_data(&mut self, data: T, at: DateTime<Utc>, by: impl Into<String>) -> Change
    where
        T: PartialEq,
    {
        let change = set_if_changed(&mut self.data, data);
        if change.is_changed() {
            self.bookkeeping.mark_modified(at, by);
        }
        change
    }
}

impl<T> BusinessObject for TenantObject<T> {
    fn object_type(&self) -> &str {
        &self.object_type
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn bookkeeping(&self) -> &Bookkeeping {
        &self.bookkeeping
    }
}
