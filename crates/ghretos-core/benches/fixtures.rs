//! Benchmark fixtures - URL batches generated at runtime.
//!
//! Fixtures are generated lazily on first access and cached for the
//! duration of the benchmark run. All generation is deterministic.

use ghretos_core::generate::{GeneratorConfig, generate_urls};
use std::sync::LazyLock;

static SMALL: LazyLock<Vec<String>> = LazyLock::new(|| generate_urls(&GeneratorConfig::small()));
static MEDIUM: LazyLock<Vec<String>> = LazyLock::new(|| generate_urls(&GeneratorConfig::medium()));
static LARGE: LazyLock<Vec<String>> = LazyLock::new(|| generate_urls(&GeneratorConfig::large()));
static NOISE: LazyLock<Vec<String>> = LazyLock::new(|| {
    generate_urls(&GeneratorConfig::medium().with_noise_percent(100))
});

/// Standard URL batches, mostly matching with some noise.
pub fn fixtures() -> &'static [(&'static str, &'static [String])] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static [String])>> = LazyLock::new(|| {
        vec![
            ("small", SMALL.as_slice()),
            ("medium", MEDIUM.as_slice()),
            ("large", LARGE.as_slice()),
        ]
    });
    FIXTURES.as_slice()
}

/// A batch where nothing matches.
pub fn noise() -> &'static [String] {
    NOISE.as_slice()
}

/// Total input size of a batch, for throughput reporting.
pub fn batch_bytes(urls: &[String]) -> u64 {
    urls.iter().map(|url| url.len() as u64).sum()
}
