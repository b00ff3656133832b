//! Lexer Benchmarks
//!
//! Measures tokenizing throughput and position lookups.
//! Run with: `cargo bench --package hxc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hxc_lex::{LexContext, Lexer};

fn lexer_token_count(source: &str) -> usize {
    let mut ctx = LexContext::new();
    let lexer = Lexer::new(source, &mut ctx);
    lexer.count()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "class Main { static function main() { var y = x + 1; return y; } }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_var", |b| {
        b.iter(|| lexer_token_count(black_box("var x = 42;")))
    });

    group.bench_function("class_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        package demo;

        import haxe.ds.StringMap;

        /** A point in the plane. */
        @:structInit
        class Point {
            public var x:Float;
            public var y:Float;

            public function toString():String {
                return 'Point(${x}, ${y})';
            }
        }

        enum Color {
            Red;
            Green;
            Rgb(r:Int, g:Int, b:Int);
        }

        class Main {
            static function main() {
                #if debug
                trace("debug build");
                #end
                var re = ~/^[a-z]+\d*$/i;
                for (i in 0...10) {
                    var mask = (i << 2) >>> 1 ?? 0xFFu8;
                    if (re.match('item$i') && mask != 0) trace(i);
                }
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("var s = \"hello\";")))
    });

    group.bench_function("escaped_string", |b| {
        let source = r#"var s = "tab\tnewline\nquote\"unicodeé\u{1F600}";"#;
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("interpolated_string", |b| {
        let source = "var s = 'a ${b + 'c ${d}'} e $f';";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("var x = 123456i64;")))
    });

    group.bench_function("float", |b| {
        b.iter(|| lexer_token_count(black_box("var x = 3.14159e-2f64;")))
    });

    group.bench_function("hex", |b| {
        b.iter(|| lexer_token_count(black_box("var x = 0xDEADBEEF;")))
    });

    group.finish();
}

fn bench_position_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_lookup");

    let source = "var a = 1;\n".repeat(2000);
    let mut ctx = LexContext::new();
    ctx.init("Lines.hx");
    let spans: Vec<_> = Lexer::new(&source, &mut ctx)
        .map_while(Result::ok)
        .map(|t| t.span)
        .collect();

    group.bench_function("in_order", |b| {
        b.iter(|| {
            spans
                .iter()
                .map(|&span| ctx.get_error_line(black_box(span)))
                .sum::<u32>()
        })
    });

    group.bench_function("reverse_order", |b| {
        b.iter(|| {
            spans
                .iter()
                .rev()
                .map(|&span| ctx.get_error_line(black_box(span)))
                .sum::<u32>()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_position_lookup
);
criterion_main!(benches);
