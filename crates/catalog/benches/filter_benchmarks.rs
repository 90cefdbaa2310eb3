use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use vaultfit_catalog::{Category, Persona, PriceRange, Product, ProductFilter};
use vaultfit_core::ProductId;

/// Build a synthetic catalog of `n` products cycling through categories,
/// personas, prices, and tags.
fn synthetic_catalog(n: usize) -> Vec<Product> {
    let categories = Category::all();
    let personas = Persona::all();
    let tag_pool = ["new", "bestseller", "science-backed", "limited", "service"];

    (0..n)
        .map(|i| Product {
            id: ProductId::new(format!("product-{i}")),
            name: format!("Synthetic Product {i}"),
            hook: None,
            description: format!("A synthetic catalog entry number {i} used for benchmarking."),
            detailed_description: None,
            price_cents: (i as u64 * 731) % 40_000,
            original_price_cents: None,
            category: categories[i % categories.len()],
            image: String::new(),
            for_professionals: i % 2 == 0,
            rating: 4.0,
            users_count: None,
            in_stock: true,
            personas: vec![personas[i % personas.len()]],
            tags: vec![tag_pool[i % tag_pool.len()].to_string()],
            features: vec![],
            specifications: vec![],
            includes: vec![],
            perfect_for: vec![],
            not_for: vec![],
            faqs: vec![],
            variants: vec![],
            gallery: vec![],
            related: vec![],
            checkout_url: None,
        })
        .collect()
}

fn bench_empty_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_identity");
    for size in [16usize, 256, 4096] {
        let catalog = synthetic_catalog(size);
        let filter = ProductFilter::default();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(filter.apply(black_box(catalog))));
        });
    }
    group.finish();
}

fn bench_combined_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_combined");
    for size in [16usize, 256, 4096] {
        let catalog = synthetic_catalog(size);
        let filter = ProductFilter {
            query: "synthetic".to_string(),
            persona: Some(Persona::Trainer),
            tags: vec!["bestseller".to_string(), "new".to_string()],
            price: PriceRange::Under50,
            ..Default::default()
        };
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(filter.apply(black_box(catalog))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_empty_filter, bench_combined_filter);
criterion_main!(benches);
