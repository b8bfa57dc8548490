//! Generate URL fixtures for benchmarking.
//!
//! Usage: cargo run --release --bin generate-urls --features generate -- [output_dir]
//!
//! Writes one URL per line, using the same presets as the Rust benchmarks.

use ghretos_core::generate::{GeneratorConfig, generate_urls};
use std::{fs, io, path::Path, path::PathBuf, process::ExitCode};

/// Type alias for fixture preset entries.
type PresetEntry = (&'static str, fn() -> GeneratorConfig);

/// Fixture presets - keep in sync with benches/fixtures.rs
const PRESETS: &[PresetEntry] = &[
    ("small", GeneratorConfig::small),
    ("medium", GeneratorConfig::medium),
    ("large", GeneratorConfig::large),
];

fn main() -> ExitCode {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("benches/cli/fixtures"));

    if let Err(e) = run(&output_dir) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    for (name, config_fn) in PRESETS {
        let config = config_fn();
        let urls = generate_urls(&config);
        let mut content = urls.join("\n");
        content.push('\n');
        let path = output_dir.join(format!("{name}.txt"));
        fs::write(&path, &content)?;
        println!(
            "Generated {} ({} bytes, {} URLs, ~{}% noise)",
            path.display(),
            content.len(),
            urls.len(),
            config.noise_percent
        );
    }

    Ok(())
}
