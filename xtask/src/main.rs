use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "relgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the triplet benchmarks serially and with the `parallel` feature
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

/// Baseline name and the feature list it is built with.
const CONFIGURATIONS: &[(&str, Option<&str>)] = &[("serial", None), ("parallel", Some("parallel"))];

const BENCH: &str = "triplet_benchmark";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running triplet benchmarks...");

    for (baseline, features) in CONFIGURATIONS {
        println!("\n>>> Benchmarking configuration: {baseline}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(BENCH);
        if let Some(features) = features {
            cmd.arg("--features").arg(features);
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(baseline);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to run bench for {baseline}"))?;

        if status.success() {
            println!("Finished {baseline} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark failed for {baseline}");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: HashMap<String, HashMap<String, f64>> = HashMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut file = fs::File::create(report_path)
        .with_context(|| format!("creating {}", report_path.display()))?;

    writeln!(file, "# Triplet Benchmark Report")?;
    writeln!(file)?;

    let mut workloads: Vec<_> = results.keys().collect();
    workloads.sort();

    write!(file, "| Workload |")?;
    for (baseline, _) in CONFIGURATIONS {
        write!(file, " {baseline} (elem/s) | vs serial |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in CONFIGURATIONS {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for workload in workloads {
        write!(file, "| {workload} |")?;

        let serial = results
            .get(workload)
            .and_then(|m| m.get("serial"))
            .copied()
            .unwrap_or(0.0);

        for (baseline, _) in CONFIGURATIONS {
            if let Some(ops) = results.get(workload).and_then(|m| m.get(*baseline)) {
                let rel = if serial > 0.0 { ops / serial } else { 0.0 };
                write!(file, " {} | **{rel:.2}x** |", human(*ops))?;
            } else {
                write!(file, " N/A | - |")?;
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn human(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks `target/criterion` for `<workload>/<baseline>/estimates.json`.
fn collect_results(dir: &Path, results: &mut HashMap<String, HashMap<String, f64>>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(workload_dir) = baseline_dir.parent() else {
            continue;
        };
        let (Some(baseline), Some(workload)) = (file_name(baseline_dir), workload_name(workload_dir))
        else {
            continue;
        };
        if !CONFIGURATIONS.iter().any(|(name, _)| *name == baseline) {
            continue;
        }

        // Elements per iteration, when the benchmark declared a throughput.
        let elements = read_json(&baseline_dir.join("benchmark.json"))
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64());

        let Some(time_ns) = read_json(&path)
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64())
        else {
            continue;
        };
        if time_ns <= 0.0 {
            continue;
        }

        let metric = elements.unwrap_or(1.0) * 1e9 / time_ns;
        results.entry(workload).or_default().insert(baseline, metric);
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_string)
}

/// `group/function/parameter` directories collapse into one workload label.
fn workload_name(path: &Path) -> Option<String> {
    let criterion = Path::new("target/criterion");
    let rel = path.strip_prefix(criterion).ok()?;
    let label = rel
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join("/");
    (!label.is_empty() && label != "report").then_some(label)
}

fn read_json(path: &Path) -> Option<serde_json::Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}
