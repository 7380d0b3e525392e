use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use datastring::{from_str, generate, parse, to_string, DataStringEncodable, Schema};
use num_bigint::BigInt;

#[derive(Debug, Default, Clone, PartialEq)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

fn set_u8(slot: &mut u8, value: &BigInt) -> bool {
    u8::try_from(value).map(|v| *slot = v).is_ok()
}

impl DataStringEncodable for Rgb {
    fn schema() -> Schema<Self> {
        Schema::<Self>::function("rgb")
            .integer("r", |c| Some(BigInt::from(c.r)), |c, v| set_u8(&mut c.r, v))
            .integer("g", |c| Some(BigInt::from(c.g)), |c, v| set_u8(&mut c.g, v))
            .integer("b", |c| Some(BigInt::from(c.b)), |c, v| set_u8(&mut c.b, v))
    }
}

fn path_document(items: usize) -> String {
    (0..items)
        .map(|i| format!("line({}; {})", i, i * 2))
        .collect::<Vec<_>>()
        .join("; ")
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = "stroke(rgb(255; 0; 0); 2.5); 'label'; 0xff";

    c.bench_function("parse_simple_document", |b| {
        b.iter(|| parse(black_box(text)))
    });
}

fn benchmark_parse_sized(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 50, 100, 500].iter() {
        let text = path_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_generate_sized(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_document");

    for size in [10, 50, 100, 500].iter() {
        let document = parse(&path_document(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, document| {
            b.iter(|| generate(black_box(document)))
        });
    }
    group.finish();
}

fn benchmark_parse_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_literals");

    let integers = (0..100).map(|i| i.to_string()).collect::<Vec<_>>().join("; ");
    let floats = (0..100)
        .map(|i| format!("{i}.25"))
        .collect::<Vec<_>>()
        .join("; ");
    let binaries = (0..100)
        .map(|i| format!("0x{i:04x}"))
        .collect::<Vec<_>>()
        .join("; ");
    let strings = (0..100)
        .map(|i| format!("'item {i}'"))
        .collect::<Vec<_>>()
        .join("; ");

    group.bench_function("integers", |b| b.iter(|| parse(black_box(&integers))));
    group.bench_function("floats", |b| b.iter(|| parse(black_box(&floats))));
    group.bench_function("binaries", |b| b.iter(|| parse(black_box(&binaries))));
    group.bench_function("strings", |b| b.iter(|| parse(black_box(&strings))));

    group.finish();
}

fn benchmark_codec(c: &mut Criterion) {
    let color = Rgb { r: 255, g: 128, b: 64 };
    let text = to_string(&color).unwrap();

    let mut group = c.benchmark_group("codec");

    group.bench_function("encode", |b| b.iter(|| to_string(black_box(&color))));

    group.bench_function("decode", |b| b.iter(|| from_str::<Rgb>(black_box(&text))));

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let text = path_document(50);

    c.bench_function("roundtrip_parse_generate", |b| {
        b.iter(|| {
            let document = parse(black_box(&text)).unwrap();
            generate(black_box(&document))
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_parse_sized,
    benchmark_generate_sized,
    benchmark_parse_literals,
    benchmark_codec,
    benchmark_roundtrip
);
criterion_main!(benches);
