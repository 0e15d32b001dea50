//! Benchmarks for the markdown pipeline.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use folio_renderer::{MarkdownPipeline, PlainRules, RawHtml, StyledRules};

/// Generate a blog post with headings, paragraphs, code and a callout per section.
fn generate_post(sections: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * (300 + paragraphs_per_section * 120));
    md.push_str("# Post Title\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "Paragraph {j} of section {i} has **bold**, *italic* and a [link](https://example.com/{i}).\n\n"
            ));
        }
        md.push_str("```rust\nfn main() {\n    println!(\"hi\");\n}\n```\n\n");
        md.push_str("<div class=\"callout info\">\n\nRemember this.\n\n</div>\n\n");
    }
    md
}

fn bench_render_simple(c: &mut Criterion) {
    let pipeline = MarkdownPipeline::new(PlainRules);

    c.bench_function("render_simple_markdown", |b| {
        b.iter(|| pipeline.render("# Hello\n\nSimple content."));
    });
}

fn bench_sanitize_overhead(c: &mut Criterion) {
    let markdown = generate_post(10, 2);
    let sanitized = MarkdownPipeline::new(PlainRules);
    let escaped = MarkdownPipeline::new(PlainRules).with_raw_html(RawHtml::Escape);

    let mut group = c.benchmark_group("raw_html");
    group.bench_function("sanitize", |b| b.iter(|| sanitized.render(&markdown)));
    group.bench_function("escape", |b| b.iter(|| escaped.render(&markdown)));
    group.finish();
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let pipeline = MarkdownPipeline::new(StyledRules::new());
    let mut group = c.benchmark_group("render_by_size");

    for (sections, paragraphs) in [(5, 2), (20, 3), (50, 5)] {
        let markdown = generate_post(sections, paragraphs);
        let size = markdown.len();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("styled", format!("{sections}s_{paragraphs}p")),
            &markdown,
            |b, md| b.iter(|| pipeline.render(md)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_sanitize_overhead,
    bench_render_varying_sizes
);
criterion_main!(benches);
