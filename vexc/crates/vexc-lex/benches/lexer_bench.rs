//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package vexc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vexc_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    // Lexer implements Iterator, so we can use it directly
    Lexer::new(source).count()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "Define Player { Public Var Int_32 Health = 100; Fetch Health -> Int_32 { return Health; } }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_var", |b| {
        b.iter(|| lexer_token_count(black_box("Var Int_32 x = 42;")))
    });

    group.bench_function("class_with_fetch", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        Namespace Game {
            Using Math;

            /* Player state, owned by the world */
            Define Player {
            Public:
                Health -> Int_32;
                Position -> Vector3;
                Rotation -> Quat;
            Private:
                bIsAlive -> Bool;
            }

            Fetch Player {
                Fetch_Speed() -> Float_32 {
                    return bIsAlive ? 4.5 : 0.0;
                }
            }

            Set Player {
                Set_Health(Value: Int_32) -> Void {
                    // clamp to zero
                    Health = Value >= 0 ? Value : 0;
                    for i in 0..=10 step 2 { Health += i ** 2; }
                    Target?.Owner ?? this;
                }
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    let large = source.repeat(100);
    group.throughput(Throughput::Bytes(large.len() as u64));

    group.bench_function("large_source", |b| {
        b.iter(|| lexer_token_count(black_box(&large)))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("Set Name = \"Vex\";")))
    });

    group.bench_function("escaped_string", |b| {
        b.iter(|| lexer_token_count(black_box("Set Log = \"line\\none\\ttab \\\"quoted\\\"\";")))
    });

    group.bench_function("numbers", |b| {
        b.iter(|| lexer_token_count(black_box("45 1000 3.14 69 540 9223372036854775807")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_literals
);
criterion_main!(benches);
