//! Benchmarks for hansard reading and extraction.
//!
//! Run with: cargo bench
//!
//! These benchmarks use a synthetic sitting with the given number of
//! proceedings pages.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic transcript with a preface, contents and `page_count` pages of proceedings.
fn create_test_hansard(page_count: usize) -> String {
    let mut content = String::new();

    content.push_str("              FIRST SESSION OF THE FIFTY-SIXTH PARLIAMENT\n\n");
    content.push_str("                      Thursday, 6 February 2020\n\n");
    content.push_str("ISSN 1322-0330\n");
    content.push_str("\u{c}Table of Contents – Thursday, 6 February 2020\n\n");
    content.push_str("Subject                                                   Page\n\n");
    for i in 0..page_count {
        content.push_str(&format!("MOTION {} ........................... {}\n", i + 1, 205 + i));
    }

    for i in 0..page_count {
        content.push_str(&format!(
            "\u{c}{}                 Legislative Assembly                 6 Feb 2020\n\n",
            205 + i
        ));
        content.push_str("MOTION\n\n");
        content.push_str("                 Health Services\n\n");
        for _ in 0..8 {
            content.push_str("        Mr SPEAKER: Honourable members, the question is that the\n");
            content.push_str("motion be agreed to. Those of that opinion say aye.\n\n");
        }
        content.push_str("        Division: Question put—That the motion be agreed to.\n\n");
        content.push_str("AYES, 2:\n\nBailey, Bates.\n\nNOES, 1:\n\nCrisafulli.\n\n");
        content.push_str("        Resolved in the affirmative.\n");
        content.push_str("        Motion agreed to.\n\n");
    }

    content
}

/// Benchmark page recovery only.
fn bench_reading(c: &mut Criterion) {
    let mut group = c.benchmark_group("reading");

    for page_count in [1, 10, 100].iter() {
        let data = create_test_hansard(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| hansard::reader::read_str(black_box(&data), "bench.txt").unwrap());
        });
    }

    group.finish();
}

/// Benchmark reading plus extraction.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for page_count in [1, 10, 100].iter() {
        let data = create_test_hansard(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| hansard::parse_str(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the structure projection of an extracted document.
fn bench_structure(c: &mut Criterion) {
    let doc = hansard::parse_str(&create_test_hansard(100)).unwrap();

    c.bench_function("structure_json", |b| {
        b.iter(|| hansard::render::to_structure_json(black_box(&doc), hansard::JsonFormat::Compact));
    });
}

criterion_group!(benches, bench_reading, bench_parsing, bench_structure);
criterion_main!(benches);
