//! cargo bench --bench match
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tokmatch::{Matcher, Pattern};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("compile_email", |b| {
        b.iter(|| Pattern::compile(black_box("[anum::]@[anum::].[str::>=2<=4]")).unwrap())
    });

    {
        let matcher = Matcher::new("[anum::]@[anum::].[str::>=2<=4]").unwrap();
        assert!(matcher.is_full_match("example@mail.com"));
        c.bench_function("full_match_email", |b| {
            b.iter(|| matcher.is_full_match(black_box("example@mail.com")))
        });
        c.bench_function("full_match_email_reject", |b| {
            b.iter(|| matcher.is_full_match(black_box("invalid@domain.travel")))
        });
    }

    {
        // Greedy runs that must give most of their characters back.
        let matcher = Matcher::new("[str::][str::3]").unwrap();
        c.bench_function("full_match_backtrack", |b| {
            b.iter(|| matcher.is_full_match(black_box("abcdefghijklmnopqrstuvwxyz")))
        });
    }

    {
        let matcher = Matcher::new("[dec::]").unwrap();
        let haystack = "Contact: 555-0123, office 42B, opened 1987, suite 900";
        assert_eq!(matcher.find_all(haystack).len(), 5);
        c.bench_function("find_all_numbers", |b| {
            b.iter(|| matcher.find_all(black_box(haystack)))
        });
        c.bench_function("find_first_number", |b| {
            b.iter(|| matcher.find(black_box(haystack)))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
