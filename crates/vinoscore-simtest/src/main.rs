//! VinoScore Headless Validation Harness
//!
//! Checks the scoring logic and bundled data files without any UI.
//! Runs entirely in-process — no browser, no rendering.
//!
//! Usage:
//!   cargo run -p vinoscore-simtest
//!   cargo run -p vinoscore-simtest -- --verbose
//!   cargo run -p vinoscore-simtest -- --report   (dump the default wine's report as JSON)

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use vinoscore_logic::catalog::{Feature, FeatureCatalog};
use vinoscore_logic::comparison::{compare, Standing};
use vinoscore_logic::config::{validate_config, AnalyticsConfig};
use vinoscore_logic::engine::{self, MAX_SCORE, MIN_SCORE};
use vinoscore_logic::history::{self, HISTORY_LEN};
use vinoscore_logic::quality::{display_score, QualityTier};
use vinoscore_logic::record::ChemistryRecord;
use vinoscore_logic::report::analyze;
use vinoscore_logic::sweep::{self, VOLATILE_ACIDITY_GRID};

// ── Bundled data (same files the front end ships) ───────────────────────
const CONFIG_JSON: &str = include_str!("../../../data/analytics_config.json");
const SAMPLES_JSON: &str = include_str!("../../../data/sample_wines.json");

#[derive(Debug, Deserialize)]
struct SampleWine {
    name: String,
    expected_score: f64,
    record: ChemistryRecord,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let dump_report = std::env::args().any(|a| a == "--report");
    println!("=== VinoScore Validation Harness ===\n");

    if dump_report {
        let report = analyze(
            &AnalyticsConfig::default(),
            &ChemistryRecord::default(),
            &mut rand::thread_rng(),
        );
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut results = Vec::new();

    // 1. Bundled configuration
    results.extend(validate_bundled_config(verbose));

    // 2. Scoring engine invariants
    results.extend(validate_engine(verbose));

    // 3. Sample wines
    results.extend(validate_samples(verbose));

    // 4. Sensitivity sweeps
    results.extend(validate_sweeps(verbose));

    // 5. History series
    results.extend(validate_history(verbose));

    // 6. Comparison
    results.extend(validate_comparison(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Bundled configuration ────────────────────────────────────────────

fn validate_bundled_config(verbose: bool) -> Vec<TestResult> {
    println!("--- Bundled Configuration ---");
    let mut results = Vec::new();

    let config = match AnalyticsConfig::from_json(CONFIG_JSON) {
        Ok(c) => c,
        Err(e) => {
            results.push(check("config_parse", false, format!("{}", e)));
            return results;
        }
    };

    results.push(check(
        "config_matches_builtin_catalog",
        &config.catalog == FeatureCatalog::standard(),
        format!("{} features in file", config.catalog.len()),
    ));

    let errors = validate_config(&config);
    results.push(check(
        "config_valid",
        errors.is_empty(),
        if errors.is_empty() {
            "no validation errors".into()
        } else {
            format!("{:?}", errors)
        },
    ));

    results.push(check(
        "config_matches_default",
        config == AnalyticsConfig::default(),
        format!("{} sweeps", config.sweeps.len()),
    ));

    if verbose {
        for spec in config.catalog.iter() {
            println!(
                "  {:<22} w={:+.2} range=[{}, {}] optimal={}",
                spec.feature.name(),
                spec.weight,
                spec.min,
                spec.max,
                spec.optimal
            );
        }
    }

    results
}

// ── 2. Engine invariants ────────────────────────────────────────────────

fn validate_engine(verbose: bool) -> Vec<TestResult> {
    println!("--- Scoring Engine ---");
    let mut results = Vec::new();
    let catalog = FeatureCatalog::standard();

    let optimal = catalog
        .iter()
        .fold(ChemistryRecord::default(), |r, s| r.with(s.feature, s.optimal));
    let s = engine::score(&optimal);
    results.push(check("optimal_is_5_5", s == 5.5, format!("score = {}", s)));

    // Farther edge of every feature has zero proximity.
    let mut edge_failures = Vec::new();
    for spec in catalog.iter() {
        let farther = if spec.optimal - spec.min >= spec.max - spec.optimal {
            spec.min
        } else {
            spec.max
        };
        if spec.proximity(farther) != Some(0.0) {
            edge_failures.push(spec.feature.name());
        }
    }
    results.push(check(
        "farther_edge_zero",
        edge_failures.is_empty(),
        if edge_failures.is_empty() {
            "all six features".into()
        } else {
            format!("non-zero at: {}", edge_failures.join(", "))
        },
    ));

    // Clamp invariant across extreme values.
    let extremes = [-1e12, -1.0, 0.0, 1e-9, 1e12, f64::NAN, f64::INFINITY];
    let mut out_of_bounds = 0;
    let mut evaluated = 0;
    for f in Feature::all() {
        for v in extremes {
            let s = engine::score(&ChemistryRecord::default().with(*f, v));
            evaluated += 1;
            if !(MIN_SCORE..=MAX_SCORE).contains(&s) {
                out_of_bounds += 1;
            }
        }
    }
    results.push(check(
        "scores_clamped",
        out_of_bounds == 0,
        format!("{} of {} extreme records out of bounds", out_of_bounds, evaluated),
    ));

    if verbose {
        let b = engine::breakdown(catalog, &ChemistryRecord::default());
        for c in &b.contributions {
            println!(
                "  {:<22} value={:<8} proximity={:.3} contribution={:+.3}",
                c.feature.name(),
                c.value,
                c.proximity,
                c.contribution
            );
        }
    }

    results
}

// ── 3. Sample wines ─────────────────────────────────────────────────────

fn validate_samples(verbose: bool) -> Vec<TestResult> {
    println!("--- Sample Wines ---");
    let mut results = Vec::new();

    let samples: Vec<SampleWine> = match serde_json::from_str(SAMPLES_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(check("samples_parse", false, format!("JSON parse error: {}", e)));
            return results;
        }
    };

    results.push(check(
        "samples_not_empty",
        !samples.is_empty(),
        format!("{} sample wines loaded", samples.len()),
    ));

    let config = AnalyticsConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    for sample in &samples {
        let report = analyze(&config, &sample.record, &mut rng);
        let ok = (report.score - sample.expected_score).abs() < 1e-3;
        results.push(check(
            &format!("sample_score[{}]", sample.name),
            ok,
            format!(
                "expected {:.4}, got {:.4} ({})",
                sample.expected_score,
                report.score,
                report.tier.label()
            ),
        ));

        let anchored = report.history.len() == HISTORY_LEN
            && report.history[HISTORY_LEN - 1].value == report.display_score;
        results.push(check(
            &format!("sample_history[{}]", sample.name),
            anchored,
            format!("ends at {}", report.display_score),
        ));

        if verbose {
            println!(
                "  {:<36} {:.4} → {} {}",
                sample.name,
                report.score,
                report.display_score,
                report.tier.label()
            );
        }
    }

    results
}

// ── 4. Sweeps ───────────────────────────────────────────────────────────

fn validate_sweeps(verbose: bool) -> Vec<TestResult> {
    println!("--- Sensitivity Sweeps ---");
    let mut results = Vec::new();
    let base = ChemistryRecord::default();

    let curve = sweep::sweep(&base, Feature::VolatileAcidity, &VOLATILE_ACIDITY_GRID);
    results.push(check(
        "va_sweep_61_points",
        curve.len() == 61,
        format!("{} points", curve.len()),
    ));

    let ascending = curve.windows(2).all(|w| w[0].x < w[1].x);
    results.push(check(
        "va_sweep_ascending",
        ascending,
        "x strictly increasing".into(),
    ));

    let mismatches = curve
        .iter()
        .filter(|p| p.y != engine::score(&base.with(Feature::VolatileAcidity, p.x)))
        .count();
    results.push(check(
        "va_sweep_matches_engine",
        mismatches == 0,
        format!("{} mismatches", mismatches),
    ));

    for plan in sweep::standard_plans() {
        let points = sweep::sweep(&base, plan.feature, &plan.grid);
        let in_bounds = points.iter().all(|p| (MIN_SCORE..=MAX_SCORE).contains(&p.y));
        results.push(check(
            &format!("sweep_bounds[{}]", plan.feature.name()),
            in_bounds && points.len() == plan.grid.len(),
            format!("{} points", points.len()),
        ));
        if verbose {
            let (lo, hi) = points
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                    (lo.min(p.y), hi.max(p.y))
                });
            println!(
                "  {:<18} {} points, score range {:.3}..{:.3}",
                plan.feature.name(),
                points.len(),
                lo,
                hi
            );
        }
    }

    results
}

// ── 5. History ──────────────────────────────────────────────────────────

fn validate_history(verbose: bool) -> Vec<TestResult> {
    println!("--- History Series ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(7);

    let mut bad = Vec::new();
    for tenth in 0..=100 {
        let score = tenth as f64 / 10.0;
        let series = history::simulate(score, &mut rng);
        let ok = series.len() == HISTORY_LEN
            && series[HISTORY_LEN - 1].value == score
            && series.iter().all(|p| (MIN_SCORE..=MAX_SCORE).contains(&p.value));
        if !ok {
            bad.push(score);
        }
    }
    results.push(check(
        "history_sweep_0_to_10",
        bad.is_empty(),
        if bad.is_empty() {
            "101 scores, all anchored and bounded".into()
        } else {
            format!("failed at {:?}", bad)
        },
    ));

    let a = history::simulate(6.0, &mut StdRng::seed_from_u64(1));
    let b = history::simulate(6.0, &mut StdRng::seed_from_u64(1));
    results.push(check(
        "history_seeded_repeatable",
        a == b,
        "same seed, same series".into(),
    ));

    if verbose {
        let values: Vec<String> = a.iter().map(|p| format!("{:.2}", p.value)).collect();
        println!("  seed=1 score=6.0: [{}]", values.join(", "));
    }

    results
}

// ── 6. Comparison ───────────────────────────────────────────────────────

fn validate_comparison(verbose: bool) -> Vec<TestResult> {
    println!("--- Comparison ---");
    let mut results = Vec::new();
    let catalog = FeatureCatalog::standard();

    let first = ChemistryRecord::default();
    let second = first.with(Feature::Alcohol, 9.5);
    let cmp = compare(catalog, &first, &second);

    results.push(check(
        "comparison_rows",
        cmp.rows.len() == 5,
        format!("{} rows", cmp.rows.len()),
    ));

    let expected = if display_score(engine::score(&first)) > display_score(engine::score(&second)) {
        Standing::Higher
    } else {
        Standing::Equal
    };
    results.push(check(
        "comparison_score_standing",
        cmp.rows[0].standing == expected,
        format!("{:?}", cmp.rows[0].standing),
    ));

    results.push(check(
        "comparison_tier",
        QualityTier::from_score(cmp.rows[0].first) == QualityTier::Average,
        format!("first wine shows {}", cmp.rows[0].first),
    ));

    if verbose {
        for row in &cmp.rows {
            println!(
                "  {:<18} {:>8.2} {:>8.2}  {:?}",
                row.label, row.first, row.second, row.standing
            );
        }
    }

    results
}
