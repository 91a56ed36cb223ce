//! Property construction benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lesser::{construct, convert_document, parse_legacy_document, ParserContext, Value};

fn bench_factory(c: &mut Criterion) {
    let ctx = ParserContext::new("bench.less");

    c.bench_function("construct_comment", |b| {
        b.iter(|| {
            construct(
                black_box(&ctx),
                black_box("comment"),
                black_box(Some(10)),
                Value::from("/* bench */"),
                None,
                None,
            )
            .unwrap()
        })
    });

    c.bench_function("construct_import_mixin", |b| {
        b.iter(|| {
            construct(
                black_box(&ctx),
                black_box("import_mixin"),
                None,
                Value::from("mixins.less"),
                Some(Value::from("extra")),
                None,
            )
            .unwrap()
        })
    });
}

fn bench_legacy_document(c: &mut Criterion) {
    let ctx = ParserContext::new("bench.less");

    // Generate a large document
    let mut content = String::from("[");
    for i in 0..1000 {
        if i > 0 {
            content.push(',');
        }
        content.push_str(&format!(
            r#"{{"position": {}, "tuple": ["assign", "width", ["number", {}, "px"]]}}"#,
            i * 16,
            i
        ));
    }
    content.push(']');
    let entries = parse_legacy_document(&content).unwrap();

    c.bench_function("convert_1000_entries", |b| {
        b.iter(|| convert_document(black_box(&ctx), black_box(&entries), false))
    });
}

criterion_group!(benches, bench_factory, bench_legacy_document);
criterion_main!(benches);
