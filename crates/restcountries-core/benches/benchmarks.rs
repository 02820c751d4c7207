//! Lookup, search and projection benchmarks over the bundled dataset.
//!
//! Run with: cargo bench -p restcountries-core

use criterion::{criterion_group, criterion_main, Criterion};
use restcountries_core::{
    project_many, project_one, CountryIndex, CountryQuery, CountrySearch, DefaultCatalog,
    FieldSelection,
};
use std::hint::black_box;

fn bundled() -> &'static DefaultCatalog {
    CountryIndex::bundled().expect("bundled dataset loads")
}

fn bench_build(c: &mut Criterion) {
    let path = DefaultCatalog::default_data_dir().join(DefaultCatalog::default_dataset_filename());
    let json = std::fs::read_to_string(path).expect("bundled dataset is readable");

    c.bench_function("build_from_json", |b| {
        b.iter(|| DefaultCatalog::from_json_str(black_box(&json)).unwrap())
    });
}

fn bench_lookups(c: &mut Criterion) {
    let index = bundled();
    let mut group = c.benchmark_group("lookup");

    group.bench_function("code_alpha2", |b| {
        b.iter(|| index.get_by_code(black_box("de")).unwrap())
    });
    group.bench_function("code_numeric", |b| {
        b.iter(|| index.get_by_code(black_box("840")).unwrap())
    });
    group.bench_function("code_cioc_fallback", |b| {
        b.iter(|| index.get_by_code(black_box("GER")).unwrap())
    });
    group.bench_function("code_list", |b| {
        b.iter(|| index.get_by_codes(black_box("us,FRA;840,ger,xk")))
    });
    group.bench_function("full_name", |b| {
        b.iter(|| index.get_by_full_name(black_box("united states")))
    });
    group.bench_function("native_name_fallback", |b| {
        b.iter(|| index.get_by_full_name(black_box("schweiz")))
    });
    group.bench_function("name_part", |b| {
        b.iter(|| index.search_by_name_part(black_box("united")))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let index = bundled();
    let mut group = c.benchmark_group("search");

    let region = CountryQuery::Region("europe".into());
    let currency = CountryQuery::Currency("euro".into());
    group.bench_function("region", |b| b.iter(|| index.search_query(black_box(&region))));
    group.bench_function("currency", |b| b.iter(|| index.search_query(black_box(&currency))));
    group.bench_function("predicate", |b| {
        b.iter(|| index.search(|c| c.population().is_some_and(|p| p > black_box(50_000_000))))
    });

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let index = bundled();
    let mut group = c.benchmark_group("projection");

    let usa = index.get_by_code("USA").unwrap().unwrap();
    let narrow = FieldSelection::parse("name,cca3,capital");
    let default = FieldSelection::default();

    group.bench_function("single_include", |b| b.iter(|| project_one(black_box(usa), &narrow)));
    group.bench_function("all_default", |b| {
        b.iter(|| project_many(black_box(index.get_all()), &default))
    });
    group.bench_function("all_to_json", |b| {
        b.iter(|| serde_json::to_vec(&project_many(index.get_all(), &narrow)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_lookups, bench_search, bench_projection);
criterion_main!(benches);
