use masterdata::MasterData;
use masterdata::paper::PaperSize;
use masterdata::trade::{Incoterm, IncotermsVersion};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = MasterData::load()?;

    println!("=== Postal codes ===\n");

    for (country, code) in [("AT", "1010"), ("DE", "1010"), ("PL", "00-950"), ("GB", "SW1A 1AA"), ("HK", "")] {
        match data.postal.validate_postal_code(country, code) {
            Ok(()) => println!("  {country} {code:?} => valid"),
            Err(e) => println!("  {country} {code:?} => {}", e.message),
        }
    }

    println!("\n=== Regions ===\n");

    if let Some(graz) = data.lau.get("60101") {
        let mut region = data.nuts.get(&graz.nuts_code);
        print!("  {}", graz.display_name);
        while let Some(item) = region {
            print!(" < {} ({})", item.display_name(), item.id());
            region = item.parent_id().and_then(|parent| data.nuts.get(parent));
        }
        println!();
    }

    println!("\n=== Vehicle signs ===\n");

    for sign in ["A", "ROK", "GBG"] {
        match data.vehicle_signs.single_country_for_sign(sign) {
            Ok(country) => println!("  {sign} => {country:?}"),
            Err(e) => println!("  {sign} => {e}"),
        }
    }

    println!("\n=== Incoterms 2020 ===\n");

    for term in Incoterm::of_version(IncotermsVersion::V2020) {
        println!("  {term}  {}", term.name());
    }

    println!("\n=== Paper ===\n");

    let a4 = PaperSize::A4;
    println!("  {a4}: {:?} mm, {} x {} pt", a4.portrait_mm(), a4.width_pt(), a4.height_pt());

    Ok(())
}
