use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jsonify_core::{ConversionFacade, Format};

fn csv_input(rows: usize) -> String {
    let mut csv = String::from("id,name,email,score\n");
    for i in 0..rows {
        csv.push_str(&format!("{},user{},user{}@example.com,{}\n", i, i, i, i % 100));
    }
    csv
}

fn xml_input(items: usize) -> String {
    let mut xml = String::from("<root>");
    for i in 0..items {
        xml.push_str(&format!("<item>value {}</item>", i));
    }
    xml.push_str("</root>");
    xml
}

fn html_input(paragraphs: usize) -> String {
    let mut html = String::from("<html><body><h1>Benchmark</h1>");
    for i in 0..paragraphs {
        html.push_str(&format!("<p>Paragraph number {} with some filler text.</p>", i));
    }
    html.push_str("</body></html>");
    html
}

fn bench_formats(c: &mut Criterion) {
    let facade = ConversionFacade::new();
    let mut group = c.benchmark_group("convert");

    for size in [10, 1_000, 10_000] {
        let csv = csv_input(size);
        let xml = xml_input(size);
        let html = html_input(size);

        group.bench_with_input(BenchmarkId::new("csv", size), &csv, |b, input| {
            b.iter(|| facade.convert_raw(black_box(input), Format::Csv))
        });

        group.bench_with_input(BenchmarkId::new("xml", size), &xml, |b, input| {
            b.iter(|| facade.convert_raw(black_box(input), Format::Xml))
        });

        group.bench_with_input(BenchmarkId::new("html", size), &html, |b, input| {
            b.iter(|| facade.convert_raw(black_box(input), Format::Html))
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let facade = ConversionFacade::new();
    let csv = csv_input(10);

    c.bench_function("dispatch_by_tag", |b| b.iter(|| facade.convert(black_box(&csv), black_box("CSV"))));
}

criterion_group!(benches, bench_formats, bench_dispatch);
criterion_main!(benches);
