//! Performance benchmarks for SortCopy
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sortcopy::config::SortConfig;
use sortcopy::core::SortEngine;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

const EXTENSIONS: [&str; 5] = ["txt", "rs", "json", "png", "log"];

/// Create a test file of the specified size
fn create_test_file(dir: &std::path::Path, name: &str, size: usize) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();

    let chunk_size = 64 * 1024;
    let chunk: Vec<u8> = (0..chunk_size).map(|i| (i % 256) as u8).collect();
    let mut remaining = size;

    while remaining > 0 {
        let to_write = remaining.min(chunk_size);
        file.write_all(&chunk[..to_write]).unwrap();
        remaining -= to_write;
    }

    path
}

/// Build `dirs` x `files_per_dir` files spread over a few extensions
fn create_tree(root: &std::path::Path, dirs: usize, files_per_dir: usize, size: usize) {
    for i in 0..dirs {
        let subdir = root.join(format!("subdir_{}", i)).join("nested");
        std::fs::create_dir_all(&subdir).unwrap();

        for j in 0..files_per_dir {
            let ext = EXTENSIONS[j % EXTENSIONS.len()];
            create_test_file(&subdir, &format!("file_{}_{}.{}", i, j, ext), size);
        }
    }
}

fn run_sort(rt: &tokio::runtime::Runtime, config: SortConfig) {
    let engine = SortEngine::new(config);
    let _ = black_box(rt.block_on(engine.execute()));
}

fn bench_sort_small_files(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let src_dir = TempDir::new().unwrap();
    create_tree(src_dir.path(), 10, 100, 1024);

    let mut group = c.benchmark_group("sort_1000_small_files");
    group.throughput(Throughput::Elements(1000));

    for limit in [None, Some(16), Some(128)] {
        let label = limit.map_or("unbounded".to_string(), |n| n.to_string());
        group.bench_with_input(BenchmarkId::new("max_open_files", label), &limit, |b, limit| {
            b.iter(|| {
                let dst_dir = TempDir::new().unwrap();
                let config = SortConfig {
                    max_open_files: *limit,
                    ..SortConfig::new(src_dir.path(), dst_dir.path())
                };
                run_sort(&rt, config);
            });
        });
    }

    group.finish();
}

fn bench_sort_large_files(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("sort_large_files");

    for size in [1024 * 1024, 10 * 1024 * 1024].iter() {
        let src_dir = TempDir::new().unwrap();
        create_tree(src_dir.path(), 2, 5, *size);

        group.throughput(Throughput::Bytes((*size * 10) as u64));
        group.bench_with_input(
            BenchmarkId::new("ten_files", humansize::format_size(*size as u64, humansize::BINARY)),
            size,
            |b, _| {
                b.iter(|| {
                    let dst_dir = TempDir::new().unwrap();
                    run_sort(&rt, SortConfig::new(src_dir.path(), dst_dir.path()));
                });
            },
        );
    }

    group.finish();
}

fn bench_dry_run_walk(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let src_dir = TempDir::new().unwrap();
    create_tree(src_dir.path(), 20, 50, 16);
    let dst_dir = TempDir::new().unwrap();

    c.bench_function("walk_1000_files_dry_run", |b| {
        b.iter(|| {
            let config = SortConfig {
                dry_run: true,
                ..SortConfig::new(src_dir.path(), dst_dir.path())
            };
            run_sort(&rt, config);
        });
    });
}

criterion_group!(
    benches,
    bench_sort_small_files,
    bench_sort_large_files,
    bench_dry_run_walk
);

criterion_main!(benches);
