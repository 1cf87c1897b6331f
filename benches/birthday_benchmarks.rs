//! Performance benchmarks for address book queries.
//!
//! These benchmarks measure the linear scans over books of various sizes:
//! - Upcoming-birthday window scan
//! - Reverse phone lookup (worst case: last record)

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` records, each with one phone and a birthday
/// spread across the year.
fn create_test_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("Contact{}", i)).unwrap();
        record.add_phone(&format!("{:010}", i)).unwrap();
        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        record
            .set_birthday(&format!("{:02}.{:02}.{}", day, month, 1950 + (i % 50)))
            .unwrap();
        book.add_record(record);
    }
    book
}

/// Benchmark the 7-day window scan.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2030, 6, 8).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [10, 100, 1000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.upcoming_birthdays(black_box(reference), black_box(7)));
        });
    }

    group.finish();
}

/// Benchmark reverse lookup of the last inserted phone.
fn bench_find_by_phone(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_phone");

    for size in [10, 100, 1000] {
        let book = create_test_book(size);
        let phone = format!("{:010}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.find_by_phone(black_box(&phone)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_upcoming_birthdays, bench_find_by_phone);
criterion_main!(benches);
