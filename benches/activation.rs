//! Performance benchmarks for the activation sweep
//!
//! Measures capture and activation over in-memory pages of increasing size.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use section_nav::{
    activator::SectionActivator,
    config::NavConfig,
    static_page::{ElementData, StaticPage},
};

fn build_page(sections: usize) -> StaticPage {
    let mut page = StaticPage::new();
    for idx in 0..sections {
        let id = format!("section-{idx}");
        page.append(
            ElementData::new("a")
                .with_class("nav-item")
                .with_attribute("data-section", &id),
        );
        page.append(ElementData::new("section").with_id(&id).with_class("section"));
    }
    page
}

fn bench_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture");
    for size in [10usize, 100, 1000] {
        let page = build_page(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &page, |b, page| {
            b.iter(|| SectionActivator::install(page, &NavConfig::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_activate(c: &mut Criterion) {
    let mut group = c.benchmark_group("activate");
    for size in [10usize, 100, 1000] {
        let page = build_page(size);
        let (activator, bindings) = SectionActivator::install(&page, &NavConfig::default()).unwrap();
        let last = format!("section-{}", size - 1);
        group.bench_with_input(BenchmarkId::new("by_id", size), &last, |b, id| {
            b.iter(|| activator.activate(black_box(id)))
        });
        group.bench_with_input(BenchmarkId::new("click", size), &(size / 2), |b, idx| {
            b.iter(|| bindings.dispatch(black_box(*idx), &activator))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_capture, bench_activate
}

criterion_main!(benches);
