use criterion::{Criterion, black_box, criterion_group, criterion_main};

use masterdata::MasterData;
use masterdata::bank::{IbanRegistry, is_valid_iban_checksum};
use masterdata::barcode::{ChecksumMode, Ean13, compact_upca, is_valid_check_digit};
use masterdata::leitweg::is_leitweg_id_valid;
use masterdata::postal::PostalCodeRegistry;
use masterdata::region::{LauRegistry, NutsRegistry};
use masterdata::vat::VatinStructures;

fn bench_iban_checksum(c: &mut Criterion) {
    c.bench_function("iban_checksum", |b| {
        b.iter(|| black_box(is_valid_iban_checksum(black_box("DE89 3704 0044 0532 0130 00"))));
    });
}

fn bench_iban_full(c: &mut Criterion) {
    let registry = IbanRegistry::bundled().unwrap();
    c.bench_function("iban_full_validation", |b| {
        b.iter(|| black_box(registry.is_valid_iban(black_box("FR1420041010050500013M02606"))));
    });
}

fn bench_gs1(c: &mut Criterion) {
    c.bench_function("gs1_check_digit", |b| {
        b.iter(|| black_box(is_valid_check_digit(black_box("4006381333931"))));
    });
    c.bench_function("ean13_with_checksum", |b| {
        b.iter(|| black_box(Ean13::new(black_box("400638133393")).with_correct_checksum()));
    });
    c.bench_function("upca_compact", |b| {
        b.iter(|| black_box(compact_upca(black_box("042100005264"), ChecksumMode::Check)));
    });
}

fn bench_leitweg(c: &mut Criterion) {
    c.bench_function("leitweg_validate", |b| {
        b.iter(|| black_box(is_leitweg_id_valid(black_box("04011000-1234512345-06"))));
    });
}

fn bench_postal(c: &mut Criterion) {
    let registry = PostalCodeRegistry::bundled().unwrap();
    c.bench_function("postal_validate_gb", |b| {
        b.iter(|| black_box(registry.is_valid_postal_code(black_box("GB"), black_box("SW1A 1AA"))));
    });
}

fn bench_vatin(c: &mut Criterion) {
    let structures = VatinStructures::bundled().unwrap();
    c.bench_function("vatin_validate", |b| {
        b.iter(|| black_box(structures.is_valid_vatin(black_box("NL123456789B01"))));
    });
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("load_postal_xml", |b| {
        b.iter(|| black_box(PostalCodeRegistry::bundled()));
    });
    c.bench_function("load_nuts_lau_xml", |b| {
        b.iter(|| {
            let nuts = NutsRegistry::bundled().unwrap();
            black_box(LauRegistry::bundled().and_then(|lau| lau.check_against(&nuts)))
        });
    });
    c.bench_function("load_master_data", |b| {
        b.iter(|| black_box(MasterData::load()));
    });
}

criterion_group!(
    benches,
    bench_iban_checksum,
    bench_iban_full,
    bench_gs1,
    bench_leitweg,
    bench_postal,
    bench_vatin,
    bench_load,
);
criterion_main!(benches);
