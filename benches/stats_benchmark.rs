use bikeshare::filters::{DayFilter, Month, MonthFilter};
use bikeshare::loader::read_records;
use bikeshare::stats::{DurationStats, StationStats, TimeStats, UserStats};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn generate_csv(rows: usize) -> String {
    let mut csv = String::from(
        "Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    );
    for i in 0..rows {
        csv.push_str(&format!(
            "2017-{:02}-{:02} {:02}:{:02}:00,{},Station {},Station {},{},{},{}\n",
            i % 6 + 1,
            i % 28 + 1,
            i % 24,
            i % 60,
            60 + i % 3600,
            i % 97,
            (i * 7) % 97,
            if i % 5 == 0 { "Customer" } else { "Subscriber" },
            if i % 2 == 0 { "Male" } else { "Female" },
            1940 + i % 60
        ));
    }
    csv
}

fn benchmark_load(c: &mut Criterion) {
    let csv = generate_csv(10_000);

    c.bench_function("read_records_10000_rows", |b| {
        b.iter(|| {
            let records = read_records(black_box(csv.as_bytes())).unwrap();
            black_box(records)
        })
    });
}

fn benchmark_statistics(c: &mut Criterion) {
    let records = read_records(generate_csv(10_000).as_bytes()).unwrap();

    c.bench_function("filter_month", |b| {
        b.iter(|| black_box(records.filter(MonthFilter::Only(Month::March), DayFilter::All)))
    });

    c.bench_function("all_sections", |b| {
        b.iter(|| {
            let set = black_box(&records);
            black_box((
                TimeStats::compute(set),
                StationStats::compute(set),
                DurationStats::compute(set),
                UserStats::compute(set),
            ))
        })
    });
}

criterion_group!(benches, benchmark_load, benchmark_statistics);
criterion_main!(benches);
