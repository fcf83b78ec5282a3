use criterion::{black_box, criterion_group, criterion_main, Criterion};
use string_master::{clean, generate_slug, normalize_unicode, truncate, RuleSet};

const INPUT: &str = "  Crème   Brûlée: $12.50 (serves 4)\t\n with   extra   spaces  ";

fn benchmark_rule_sets(c: &mut Criterion) {
    for rules in RuleSet::ALL {
        c.bench_function(&format!("clean_{}", rules), |b| {
            b.iter(|| {
                let cleaned = clean(black_box(INPUT), rules);
                black_box(cleaned);
            })
        });
    }
}

fn benchmark_helpers(c: &mut Criterion) {
    c.bench_function("truncate", |b| {
        b.iter(|| black_box(truncate(black_box(INPUT), 20)))
    });

    c.bench_function("generate_slug", |b| {
        b.iter(|| black_box(generate_slug(black_box(INPUT))))
    });

    c.bench_function("normalize_unicode", |b| {
        b.iter(|| black_box(normalize_unicode(black_box(INPUT))))
    });
}

criterion_group!(benches, benchmark_rule_sets, benchmark_helpers);
criterion_main!(benches);
