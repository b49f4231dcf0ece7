use brand_core::{NormalizationEngine, NormalizeOptions};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const OVERRIDES_PATH: &str = "additional_brands.json";

/// Reads one raw cell per stdin line and writes one normalized line per
/// input line, so a spreadsheet column can be piped straight through.
fn main() -> io::Result<()> {
    // logs go to stderr so stdout stays a clean column
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let overrides = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(OVERRIDES_PATH));
    let engine = NormalizationEngine::from_overrides_file(&overrides, NormalizeOptions::default());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        writeln!(out, "{}", engine.normalize(&line))?;
    }
    out.flush()
}
