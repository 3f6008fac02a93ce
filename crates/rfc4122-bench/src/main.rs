//! Benchmark for UUID parsing and formatting.
//!
//! Parses every accepted textual form of a batch of random identifiers,
//! compares against the `uuid` crate where it accepts the same form, and
//! optionally writes a JSON report.
//!
//! ```text
//! bench-parse [ITERATIONS] [REPORT.json]
//! ```

use std::fs;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rfc4122::{TextForm, Uuid};
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_ITERATIONS: usize = 200_000;
const WARMUP_ROUNDS: usize = 3;

// =============================================================================
// REPORT
// =============================================================================

#[derive(Debug, Serialize)]
struct FormResult {
    form: &'static str,
    chars: usize,
    ns_per_parse: f64,
    uuid_crate_ns_per_parse: Option<f64>,
}

#[derive(Debug, Serialize)]
struct Report {
    version: &'static str,
    iterations: usize,
    sample: Uuid,
    parse: Vec<FormResult>,
    ns_per_format: f64,
    uuid_crate_ns_per_format: f64,
    ns_per_hash_insert: f64,
    distinct: usize,
}

fn per_item(elapsed: Duration, count: usize) -> f64 {
    elapsed.as_nanos() as f64 / count as f64
}

// =============================================================================
// INPUT
// =============================================================================

fn render(id: Uuid, form: TextForm) -> String {
    match form {
        TextForm::Hyphenated => id.hyphenated().to_string(),
        TextForm::Braced => id.braced().to_string(),
        TextForm::Urn => id.urn().to_string(),
        TextForm::Simple => id.simple().to_string(),
        TextForm::UrnSimple => format!("urn:uuid:{}", id.simple()),
    }
}

/// Times `parse` over every input, after a few warmup passes.
fn time_parse<T>(inputs: &[String], parse: impl Fn(&str) -> Option<T>) -> Option<Duration> {
    for _ in 0..WARMUP_ROUNDS {
        for input in inputs {
            black_box(parse(black_box(input.as_str()))?);
        }
    }

    let start = Instant::now();
    for input in inputs {
        black_box(parse(black_box(input.as_str()))?);
    }
    Some(start.elapsed())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let iterations = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<usize>().expect("ITERATIONS must be a positive integer"))
        .unwrap_or(DEFAULT_ITERATIONS)
        .max(1);
    let report_path = std::env::args().nth(2);

    info!(iterations, "generating random identifiers");
    let ids: Vec<Uuid> = (0..iterations)
        .map(|_| Uuid::from(uuid::Uuid::new_v4()))
        .collect();

    // Parsing
    let mut parse = Vec::with_capacity(TextForm::ALL.len());
    for form in TextForm::ALL {
        let inputs: Vec<String> = ids.iter().map(|&id| render(id, form)).collect();

        let ours = time_parse(&inputs, |s| Uuid::parse(s).ok())
            .expect("failed to parse generated input");
        let theirs = time_parse(&inputs, |s| uuid::Uuid::parse_str(s).ok());
        if theirs.is_none() {
            warn!(form = form.name(), "uuid crate rejects this form, skipping comparison");
        }

        let result = FormResult {
            form: form.name(),
            chars: form.len(),
            ns_per_parse: per_item(ours, iterations),
            uuid_crate_ns_per_parse: theirs.map(|t| per_item(t, iterations)),
        };
        info!(
            form = result.form,
            ns = result.ns_per_parse,
            uuid_crate_ns = ?result.uuid_crate_ns_per_parse,
            "parse"
        );
        parse.push(result);
    }

    // Formatting
    let start = Instant::now();
    for id in &ids {
        black_box(black_box(id).to_string());
    }
    let ours_format = start.elapsed();

    let theirs_ids: Vec<uuid::Uuid> = ids.iter().map(|&id| id.into()).collect();
    let start = Instant::now();
    for id in &theirs_ids {
        black_box(black_box(id).to_string());
    }
    let theirs_format = start.elapsed();

    info!(
        ns = per_item(ours_format, iterations),
        uuid_crate_ns = per_item(theirs_format, iterations),
        "format"
    );

    // Hashing
    let start = Instant::now();
    let mut set = FxHashSet::default();
    set.reserve(ids.len());
    for id in &ids {
        set.insert(*id);
    }
    let hash_time = start.elapsed();
    if set.len() != ids.len() {
        warn!(
            distinct = set.len(),
            generated = ids.len(),
            "duplicate identifiers generated"
        );
    }
    info!(
        ns = per_item(hash_time, iterations),
        distinct = set.len(),
        "hash insert"
    );

    let report = Report {
        version: rfc4122::VERSION,
        iterations,
        sample: ids[0],
        parse,
        ns_per_format: per_item(ours_format, iterations),
        uuid_crate_ns_per_format: per_item(theirs_format, iterations),
        ns_per_hash_insert: per_item(hash_time, iterations),
        distinct: set.len(),
    };

    println!("\n=== Summary ===");
    println!("Iterations: {}", report.iterations);
    println!("Sample:     {}", report.sample);
    for result in &report.parse {
        match result.uuid_crate_ns_per_parse {
            Some(theirs) => println!(
                "  {:<11} {:>7.1} ns/parse  (uuid crate {:.1} ns)",
                result.form, result.ns_per_parse, theirs
            ),
            None => println!(
                "  {:<11} {:>7.1} ns/parse  (uuid crate: unsupported)",
                result.form, result.ns_per_parse
            ),
        }
    }
    println!(
        "Format:     {:.1} ns (uuid crate {:.1} ns)",
        report.ns_per_format, report.uuid_crate_ns_per_format
    );
    println!("Hash:       {:.1} ns/insert", report.ns_per_hash_insert);

    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
        fs::write(&path, json).expect("Failed to write report");
        info!(path = %path, "report written");
    }
}
