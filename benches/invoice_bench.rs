use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use billcraft::core::*;
use billcraft::render::HtmlRenderer;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

fn build_invoice(lines: usize) -> Invoice {
    let mut builder = InvoiceBuilder::new()
        .company("Benchmark Corp", "1 Speed Street")
        .customer("Load Tester", "load@example.com")
        .tax_rate(dec!(0.18))
        .discount(dec!(25))
        .number("BENCH-001")
        .issue_date(test_date());
    for i in 0..lines {
        builder = builder.add_item(format!("Line item {i}"), (i as i64 % 9) + 1, dec!(49.99));
    }
    builder.build_unchecked()
}

fn bench_validate(c: &mut Criterion) {
    let invoice = build_invoice(50);
    c.bench_function("validate_50_lines", |b| {
        b.iter(|| validate_invoice(black_box(&invoice)))
    });
}

fn bench_calculate(c: &mut Criterion) {
    let invoice = build_invoice(50);
    c.bench_function("calculate_summary_50_lines", |b| {
        b.iter(|| {
            calculate_summary(
                black_box(&invoice.items),
                black_box(invoice.tax_rate),
                black_box(invoice.discount),
            )
        })
    });
}

fn bench_render_html(c: &mut Criterion) {
    let invoice = build_invoice(10);
    let summary = calculate_summary(&invoice.items, invoice.tax_rate, invoice.discount);
    let meta = DocumentMeta::resolve(&invoice, 30);
    let config = BrandingConfig::default();
    let renderer = HtmlRenderer::new().expect("embedded template");

    c.bench_function("render_html_10_lines", |b| {
        b.iter(|| {
            renderer
                .render(
                    black_box(&invoice),
                    black_box(&summary),
                    black_box(&meta),
                    black_box(&config),
                )
                .expect("render")
        })
    });
}

criterion_group!(benches, bench_validate, bench_calculate, bench_render_html);
criterion_main!(benches);
