use criterion::{criterion_group, criterion_main, Criterion};

use vhflog::{
    cabrillo,
    contact::ContactRecord,
    scoring,
    station::{ContestSettings, StationProfile},
};

const GRIDS: [&str; 8] = [
    "FN31", "FN42", "EM79", "DM79", "JO62", "JN39", "IO91", "FN31PR",
];

fn contact(idx: u64) -> ContactRecord {
    ContactRecord {
        ts: format!("2024-06-08 {:02}:{:02}:00", (idx / 60) % 24, idx % 60),
        call: format!("K{idx}AA"),
        freq_khz: 144_200 + idx % 100,
        mode: "USB".to_string(),
        exchange: GRIDS[(idx % GRIDS.len() as u64) as usize].to_string(),
        prefix: "W1AW".to_string(),
        ..ContactRecord::default()
    }
}

fn bench_contact_points(c: &mut Criterion) {
    c.bench_function("contact_points_10k", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for i in 0..10_000u64 {
                let their = GRIDS[(i % GRIDS.len() as u64) as usize];
                total += u64::from(scoring::contact_points("FN31", their));
            }
            total
        });
    });
}

fn bench_render_report(c: &mut Criterion) {
    let station = StationProfile {
        call: "W1AW".to_string(),
        grid_square: "FN31".to_string(),
        ..StationProfile::default()
    };
    let settings = ContestSettings {
        sent_exchange: "FN31".to_string(),
        ..ContestSettings::default()
    };
    let contacts: Vec<ContactRecord> = (0..10_000u64).map(contact).collect();

    c.bench_function("render_report_10k", |b| {
        b.iter(|| cabrillo::render_report(&station, &settings, &contacts, &[]));
    });
}

criterion_group!(benches, bench_contact_points, bench_render_report);
criterion_main!(benches);
