use anyhow::{bail, Result};
use clap::Parser;

mod analysis;
mod cluster;
mod config;
mod data;
mod demo;
mod graph;
mod layout;
mod storage;

use analysis::SociogramAnalyzer;
use config::{LayoutConfig, Thresholds};

#[derive(Parser, Debug)]
#[clap(
    name = "sociogram-analyzer",
    about = "Sociometric analysis of classroom peer-nomination surveys"
)]
struct Cli {
    /// Path to the evaluation record (JSON)
    #[clap(long)]
    input: Option<String>,

    /// Output directory for results
    #[clap(long, default_value = "analysis_results")]
    output_dir: String,

    /// Analyze the built-in synthetic classroom instead of real data
    #[clap(long)]
    demo: bool,

    /// Skip the layout computation
    #[clap(long)]
    skip_layout: bool,

    /// Layout canvas width
    #[clap(long, default_value = "800")]
    width: f64,

    /// Layout canvas height
    #[clap(long, default_value = "600")]
    height: f64,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    // 1. Load data: the demo classroom is an explicit mode, never a
    // fallback for a failed real-data load
    let record = if args.demo {
        log::info!("Using the synthetic demo classroom");
        demo::example_classroom()
    } else {
        match &args.input {
            Some(path) => data::loader::load_evaluation(path)?,
            None => bail!("either --input or --demo is required"),
        }
    };

    // 2. Run the scoring pipeline
    let analyzer = SociogramAnalyzer::new(Thresholds::default());
    let result = analyzer.analyze(&record)?;

    log::info!(
        "Analysis complete: {} individuals, {} edges, {} clusters, {} high-risk",
        result.nodes.len(),
        result.edges.len(),
        result.clusters.len(),
        result.risk_indicators.high_risk.len()
    );

    // 3. Save results
    storage::save_results(&result, &args.output_dir)?;

    // 4. Compute and save the layout if requested
    if !args.skip_layout {
        let layout_config = LayoutConfig::for_canvas(args.width, args.height);
        let positions = layout::compute_layout(&result.nodes, &result.edges, &layout_config, None);
        let boundaries = layout::hull::cluster_boundaries(&result.clusters, &positions);
        storage::save_layout(&positions, &boundaries, &args.output_dir)?;
    }

    log::info!("Results saved to {}", args.output_dir);

    Ok(())
}
