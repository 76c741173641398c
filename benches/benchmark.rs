//! Benchmarks for Merkle tree operations.
//!
//! Measures build, path derivation, and proof verification across leaf
//! counts, plus the Keccak-256/SHA-256 digest providers.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use merkletree::{BuildOptions, Hasher, Keccak256Hasher, Leaf, Leaves, Sha256Hasher, Tree};
use rand::RngCore;

fn random_leaves(count: usize) -> Leaves {
    let mut rng = rand::thread_rng();
    let mut leaves = Leaves::new();
    for _ in 0..count {
        let mut payload = [0u8; 64];
        rng.fill_bytes(&mut payload);
        leaves.add(Leaf::from_payload(payload.to_vec()));
    }
    leaves
}

fn built_tree(count: usize) -> Tree {
    let mut leaves = random_leaves(count);
    let (tree, _) = leaves.build_tree(&BuildOptions::default()).unwrap();
    tree
}

/// Benchmark tree construction.
fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");

    for count in [16usize, 256, 4096].iter() {
        let leaves = random_leaves(*count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter_batched(
                || leaves.clone_leaves(),
                |mut leaves| {
                    let built = leaves.build_tree(&BuildOptions::default()).unwrap();
                    black_box(built)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark sibling path derivation.
fn bench_merkle_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle_path");

    for count in [256usize, 4096].iter() {
        let tree = built_tree(*count);

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let path = tree.merkle_path(0, (count as u64) / 2).unwrap();
                black_box(path)
            });
        });
    }

    group.finish();
}

/// Benchmark proof verification.
fn bench_verify_proof(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify_proof");

    for count in [256usize, 4096].iter() {
        let tree = built_tree(*count);
        let options = BuildOptions::default();
        let offset = (*count as u64) / 2;
        let path = tree.merkle_path(0, offset).unwrap();
        let digest = tree.digest_at(0, offset).unwrap().clone();

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                let ok = tree.verify_proof(&path, &digest, options.hasher()).unwrap();
                black_box(ok)
            });
        });
    }

    group.finish();
}

/// Benchmark the digest providers on a pair-sized message.
fn bench_hashers(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashers");
    let message = [0xABu8; 64];

    group.bench_function("keccak256", |b| {
        b.iter(|| black_box(Keccak256Hasher.hash(black_box(&message)).unwrap()))
    });
    group.bench_function("sha256", |b| {
        b.iter(|| black_box(Sha256Hasher.hash(black_box(&message)).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build_tree,
    bench_merkle_path,
    bench_verify_proof,
    bench_hashers
);
criterion_main!(benches);
