//! Basic example demonstrating Merkle tree construction and proofs.
//!
//! Builds a tree over a handful of payloads, derives an inclusion proof
//! for one leaf, and verifies it against the root.
//!
//! Run with: cargo run --example basic

use merkletree::{utils, BuildOptions, Leaf, Leaves};

fn main() {
    println!("=== merkletree: build / prove / verify demo ===");
    println!();

    // Step 1: Collect the input leaves.
    let payloads = ["Hello", "Привет", "你好", "こんにちは", "Bonjour", "Hola"];
    let mut leaves = Leaves::new();
    for payload in payloads {
        leaves.add(Leaf::from_payload(payload.as_bytes().to_vec()));
    }
    println!("Step 1: collected {} leaves", leaves.length());

    // Step 2: Build the tree with the default Keccak-256 digest.
    let options = BuildOptions::default();
    let start = std::time::Instant::now();
    let (tree, root) = leaves
        .build_tree(&options)
        .expect("build should succeed for non-empty leaves");
    println!(
        "Step 2: built a {}-level tree in {:?}",
        tree.height(),
        start.elapsed()
    );
    for level in 0..tree.height() {
        println!("        level {}: {} digests", level, tree.width(level));
    }
    println!("        root: 0x{}", utils::to_hex(&root.digest));

    // Step 3: Derive the sibling path for one leaf.
    let offset = 2;
    let path = tree.merkle_path(0, offset).expect("leaf offset is valid");
    println!(
        "Step 3: sibling path for leaf {} ({:?}):",
        offset, payloads[offset as usize]
    );
    for step in &path {
        let digest = tree.digest_at(step.level, step.offset).expect("path step is valid");
        println!(
            "        ({}, {}) -> 0x{}...",
            step.level,
            step.offset,
            utils::to_hex(&digest[..8])
        );
    }

    // Step 4: Verify the proof against the stored root.
    let claimed = tree
        .digest_at(0, offset)
        .expect("leaf offset is valid")
        .clone();
    let ok = tree
        .verify_proof(&path, &claimed, options.hasher())
        .expect("proof coordinates resolve");
    println!("Step 4: proof verified: {}", ok);

    // A tampered digest is rejected.
    let mut tampered = claimed;
    tampered[0] ^= 0x01;
    let ok = tree
        .verify_proof(&path, &tampered, options.hasher())
        .expect("proof coordinates resolve");
    println!("        tampered digest verified: {}", ok);

    // Step 5: Round-trip the tree through its JSON encoding.
    let encoded = tree.marshal().expect("marshal succeeds");
    println!(
        "Step 5: level table serializes to {} bytes of JSON",
        encoded.len()
    );
}
