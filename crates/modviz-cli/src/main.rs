use std::time::Instant;

use clap::Parser;

use modviz_cli::{ModvizOptions, run_main};
use modviz_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "modviz",
    about = "modviz: see what your modules export, require, provide and use",
    version
)]
pub struct Cli {
    /// Snapshot JSON file describing the component system
    #[arg(short = 's', long = "snapshot", value_name = "FILE")]
    snapshot: String,

    /// Directory receiving modules.json, services.json, packages.json, all.json
    #[arg(short = 'o', long = "out-dir", value_name = "DIR", default_value = "html")]
    out_dir: String,

    /// Reject requirement filters with several package clauses instead of
    /// keeping the first
    #[arg(long = "strict-filters")]
    strict_filters: bool,

    /// Abort on the first malformed requirement filter instead of skipping it
    #[arg(long = "fail-on-malformed")]
    fail_on_malformed: bool,

    /// Wiring attribute key naming required packages
    #[arg(long = "package-attribute", value_name = "KEY")]
    package_attribute: Option<String>,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = ModvizOptions {
        snapshot: args.snapshot.into(),
        out_dir: args.out_dir.into(),
        strict_filters: args.strict_filters,
        fail_on_malformed: args.fail_on_malformed,
        package_attribute: args.package_attribute,
    };

    match run_main(&opts) {
        Ok(summary) => {
            for diagnostic in &summary.diagnostics {
                eprintln!("Warning: {diagnostic}");
            }
            println!("All modules: {}", summary.stats.module_count);
            println!(
                "Service definitions: {}",
                summary.stats.service_definition_count
            );
            for path in &summary.written {
                println!("Wrote {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            return Err(e);
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    eprintln!("Total time: {total_secs:.2}s");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
