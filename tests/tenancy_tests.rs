#![cfg(feature = "tenancy")]

use chrono::{DateTime, TimeZone, Utc};
use masterdata::Change;
use masterdata::tenancy::*;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
struct Customer {
    name: String,
    email: EmailAddress,
}

// ---------------------------------------------------------------------------
// Bookkeeping
// ---------------------------------------------------------------------------

#[test]
fn delete_undelete_cycle() {
    let mut bk = Bookkeeping::new(at(1, 8), "alice");
    assert_eq!(bk.last_change_at(), at(1, 8));
    assert_eq!(bk.mark_undeleted(at(2, 8), "bob"), Change::Unchanged);

    assert_eq!(bk.mark_deleted(at(3, 8), "bob"), Change::Changed);
    assert_eq!(bk.mark_deleted(at(4, 8), "carol"), Change::Unchanged);
    assert_eq!(bk.deleted().unwrap().by, "bob");
    assert!(!bk.is_deleted_at(at(3, 7)));
    assert!(bk.is_deleted_at(at(3, 8)));

    assert_eq!(bk.mark_undeleted(at(5, 8), "carol"), Change::Changed);
    assert!(!bk.is_deleted());
    assert_eq!(bk.last_modified().unwrap().by, "carol");
    assert_eq!(bk.last_change_at(), at(5, 8));
    assert_eq!(bk.created(), &Stamp::new(at(1, 8), "alice"));
}

#[test]
fn bookkeeping_timestamps_are_utc() {
    let mut bk = Bookkeeping::new(at(1, 8), "alice");
    bk.mark_deleted(at(2, 9), "bob");
    let json = serde_json::to_string(&bk).unwrap();
    assert!(json.contains(r#""at":"2024-05-01T08:00:00Z""#), "{json}");
    let back: Bookkeeping = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bk);
}

// ---------------------------------------------------------------------------
// Tenants and tenant objects
// ---------------------------------------------------------------------------

#[test]
fn objects_track_changes_through_the_trait() {
    let tenant = Tenant::new("acme", "ACME GmbH", at(1, 8), "admin").unwrap();
    let customer = Customer {
        name: "Muster KG".into(),
        email: EmailAddress::new("office@muster.at", ContactKind::Business),
    };
    let mut obj =
        TenantObject::new(&tenant, "customer", "c-1", customer.clone(), at(1, 9), "alice").unwrap();

    let objects: Vec<&dyn BusinessObject> = vec![&tenant, &obj];
    let types: Vec<&str> = objects.iter().map(|o| o.object_type()).collect();
    assert_eq!(types, ["tenant", "customer"]);

    assert_eq!(obj.set_data(customer.clone(), at(2, 9), "bob"), Change::Unchanged);
    let renamed = Customer {
        name: "Muster & Co KG".into(),
        ..customer
    };
    assert_eq!(obj.set_data(renamed, at(2, 9), "bob"), Change::Changed);
    assert_eq!(obj.last_change_at(), at(2, 9));
    assert_eq!(obj.tenant_id(), "acme");
    assert_eq!(obj.data().name, "Muster & Co KG");
}

#[test]
fn empty_object_id_rejected() {
    let tenant = Tenant::new("acme", "ACME", at(1, 8), "admin").unwrap();
    assert!(TenantObject::new(&tenant, "customer", "", (), at(1, 9), "alice").is_err());
    assert!(Tenant::new("", "ACME", at(1, 8), "admin").is_err());
}

#[test]
fn deserialized_tenants_keep_their_id() {
    let tenant = Tenant::new("acme", "ACME", at(1, 8), "admin").unwrap();
    let json = serde_json::to_string(&tenant).unwrap();
    assert_eq!(serde_json::from_str::<Tenant>(&json).unwrap(), tenant);

    let blank = json.replace(r#""id":"acme""#, r#""id":" ""#);
    assert!(serde_json::from_str::<Tenant>(&blank).is_err());

    let obj = TenantObject::new(&tenant, "note", "n-1", 42u32, at(1, 9), "alice").unwrap();
    let json = serde_json::to_string(&obj).unwrap();
    assert_eq!(serde_json::from_str::<TenantObject<u32>>(&json).unwrap(), obj);
    let blank = json.replace(r#""id":"n-1""#, r#""id":"""#);
    assert!(serde_json::from_str::<TenantObject<u32>>(&blank).is_err());
}

// ---------------------------------------------------------------------------
// Contact value objects
// ---------------------------------------------------------------------------

#[test]
fn email_display_and_validation() {
    let mut email = EmailAddress::new("max.muster@example.at", ContactKind::Private);
    assert!(email.is_valid());
    email.set_personal_name(Some("Max Muster"));
    insta::assert_snapshot!(email.to_string(), @"Max Muster <max.muster@example.at>");

    assert_eq!(email.set_address("not-an-address"), Change::Changed);
    let err = email.validate().unwrap_err();
    assert_eq!(err.field, "email_address");
    assert_eq!(err.code.as_deref(), Some("email_address.invalid"));
}

#[test]
fn telephone_number_formatting() {
    let mut phone = TelephoneNumber::new(ContactKind::Mobile, "+49", "30", "1234567");
    assert_eq!(phone.country_code(), "49");
    assert_eq!(phone.set_country_code("+49"), Change::Unchanged);
    assert_eq!(phone.set_country_code("43"), Change::Changed);
    assert_eq!(phone.set_country_code("+49"), Change::Changed);
    phone.set_direct_dial("0");
    insta::assert_snapshot!(phone.as_string(), @"+49 30 1234567-0");
    assert_eq!(phone.kind(), ContactKind::Mobile);
}
