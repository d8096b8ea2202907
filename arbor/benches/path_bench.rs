use arbor::path::{
    absolutize_path, normalize_path, parent_path, validate_absolute_path, PathRelationship,
    PathRole,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for (name, path) in [
        ("short", "/cms"),
        ("deep", "/cms/content/blog/2024/posts/entry/jcr:content"),
        ("indexed", "/cms/content/item[12]/child[3]"),
    ] {
        group.bench_with_input(BenchmarkId::new("lookup", name), &path, |b, &path| {
            b.iter(|| validate_absolute_path(black_box(path), PathRole::Lookup));
        });
    }

    group.bench_function("destination", |b| {
        b.iter(|| {
            validate_absolute_path(black_box("/cms/content/blog/post"), PathRole::Destination)
        });
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    // Already normalized input
    group.bench_function("clean", |b| {
        b.iter(|| normalize_path(black_box("/cms/content/blog"), PathRole::Lookup));
    });

    group.bench_function("with_dots", |b| {
        b.iter(|| normalize_path(black_box("/a/b/../c/./d"), PathRole::Lookup));
    });

    group.bench_function("above_root", |b| {
        b.iter(|| normalize_path(black_box("/../../a/../b"), PathRole::Lookup));
    });

    group.finish();
}

fn bench_absolutize(c: &mut Criterion) {
    let mut group = c.benchmark_group("absolutize");

    group.bench_function("relative", |b| {
        b.iter(|| absolutize_path(black_box("../foo/./bar"), black_box("/cms/content")));
    });

    group.bench_function("absolute", |b| {
        b.iter(|| absolutize_path(black_box("/abs/../olute"), black_box("/ignored")));
    });

    group.bench_function("parent_path", |b| {
        b.iter(|| parent_path(black_box("/cms/content/blog/post")));
    });

    group.finish();
}

fn bench_relationship(c: &mut Criterion) {
    let mut group = c.benchmark_group("relationship");

    let ancestor = "/cms/content";
    let descendant = "/cms/content/blog/post";
    let sibling = "/cms/contents";

    group.bench_function("ancestor", |b| {
        b.iter(|| PathRelationship::between(black_box(ancestor), black_box(descendant)));
    });

    group.bench_function("same", |b| {
        b.iter(|| PathRelationship::between(black_box(ancestor), black_box(ancestor)));
    });

    // Shares a string prefix but not a segment prefix
    group.bench_function("unrelated", |b| {
        b.iter(|| PathRelationship::between(black_box(ancestor), black_box(sibling)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_validate,
    bench_normalize,
    bench_absolutize,
    bench_relationship
);
criterion_main!(benches);
