//! Benchmark-only crate; see `benches/catalog_bench.rs`.
