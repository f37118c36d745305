use masterdata::bank::{Bic, IbanRegistry};
use masterdata::barcode::{ChecksumMode, Ean13, compact_upca, isbn10_to_isbn13};
use masterdata::leitweg::LeitwegId;
use masterdata::vat::VatinStructures;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== IBAN ===\n");

    let registry = IbanRegistry::bundled()?;
    let ibans = [
        "DE89 3704 0044 0532 0130 00",
        "AT61 1904 3002 3457 3201",
        "GB82 WEST 1234 5698 7654 33", // wrong checksum
        "BA40 1290 0794 0102 8494",    // fixed check digits violated
        "US64 SVBK US6S 3300 9588 79", // no IBAN country
    ];
    for iban in &ibans {
        match registry.parse(iban) {
            Ok(parsed) => println!("  {iban} => valid, BBAN {}", parsed.bban()),
            Err(e) => println!("  {iban} => INVALID: {e}"),
        }
    }

    println!("\n=== BIC ===\n");

    for bic in ["COBADEFFXXX", "bkauatww", "DEUTZZFF"] {
        match Bic::parse(bic) {
            Ok(parsed) => println!("  {bic} => {} (branch {:?})", parsed.to_bic11(), parsed.branch_code()),
            Err(e) => println!("  {bic} => INVALID: {e}"),
        }
    }

    println!("\n=== VATIN ===\n");

    let structures = VatinStructures::bundled()?;
    for vatin in ["DE123456789", "ATU13585627", "EL094259216", "DE012345678"] {
        match structures.validate_vatin(vatin) {
            Ok(v) => println!("  {vatin} => valid (prefix={}, number={})", v.prefix, v.number),
            Err(e) => println!("  {vatin} => {e}"),
        }
    }

    println!("\n=== Leitweg-ID ===\n");

    for id in ["04011000-1234512345-06", "04011000-1234512345-07", "991-33333TEST-88"] {
        match LeitwegId::parse(id) {
            Ok(parsed) => println!("  {id} => valid (coarse={})", parsed.coarse()),
            Err(e) => println!("  {id} => INVALID: {e}"),
        }
    }

    println!("\n=== Barcodes ===\n");

    println!("  EAN-13 400638133393 => {}", Ean13::new("400638133393").with_correct_checksum()?);
    match compact_upca("042100005264", ChecksumMode::Check)? {
        Some(upce) => println!("  UPC-A 042100005264 => UPC-E {upce}"),
        None => println!("  UPC-A 042100005264 => not compactable"),
    }
    if let Some(isbn13) = isbn10_to_isbn13("0-321-31255-4") {
        println!("  ISBN 0-321-31255-4 => {isbn13}");
    }

    Ok(())
}
