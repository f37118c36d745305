//! Tenants, tenant-owned business objects and contact value objects.
//!
//! Every object carries [`Bookkeeping`] (created, last modified, logically
//! deleted). Setters report whether they changed anything through
//! [`Change`](crate::core::Change) so callers know when to persist.

mod bookkeeping;
mod contact;
mod tenant;

pub use bookkeeping::{Bookkeeping, Stamp};
pub use contact::{ContactKind, EmailAddress, TelephoneNumber};
pub use tenant::{BusinessObject, Tenant, TenantObject};
