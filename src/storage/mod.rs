//! Results persistence module
//!
//! Writes the analysis object and layout data as JSON for downstream
//! collaborators. These files are this tool's own demo surface; reporting
//! and visualization consumers remain free to serialize differently.

use anyhow::Result;
use itertools::Itertools;
use rayon::prelude::*;
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::analysis::NetworkAnalysis;
use crate::layout::hull::ClusterBoundary;
use crate::layout::NodePosition;

/// Save the full analysis to the specified directory
pub fn save_results(analysis: &NetworkAnalysis, output_dir: &str) -> Result<()> {
    log::info!(
        "saving analysis of group '{}' to {}",
        analysis.group_name,
        output_dir
    );

    fs::create_dir_all(output_dir)?;

    save_analysis(analysis, output_dir)?;
    save_summary(analysis, output_dir)?;
    save_clusters(analysis, output_dir)?;

    log::info!("results saved successfully");

    Ok(())
}

/// Full analysis object, one file
fn save_analysis(analysis: &NetworkAnalysis, output_dir: &str) -> Result<()> {
    let path = Path::new(output_dir).join("analysis.json");
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(analysis)?.as_bytes())?;
    Ok(())
}

/// Compact summary for a quick look at the group
fn save_summary(analysis: &NetworkAnalysis, output_dir: &str) -> Result<()> {
    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let status_counts = analysis
        .nodes
        .iter()
        .map(|n| format!("{:?}", n.social_status).to_lowercase())
        .counts();

    let summary = json!({
        "group": {
            "id": analysis.group_id,
            "name": analysis.group_name,
            "individual_count": analysis.nodes.len(),
            "edge_count": analysis.edges.len(),
        },
        "metrics": analysis.metrics,
        "status_distribution": status_counts,
        "cluster_count": analysis.clusters.len(),
        "high_risk_count": analysis.risk_indicators.high_risk.len(),
        "recommendations": analysis.recommendations,
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// One file per cluster, written in parallel
fn save_clusters(analysis: &NetworkAnalysis, output_dir: &str) -> Result<()> {
    let clusters_dir = Path::new(output_dir).join("clusters");
    fs::create_dir_all(&clusters_dir)?;

    analysis.clusters.par_iter().try_for_each(|cluster| {
        let path = clusters_dir.join(format!("cluster_{}.json", cluster.id));
        let mut file = File::create(path)?;
        file.write_all(to_string_pretty(cluster)?.as_bytes())?;
        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}

/// Save layout positions and cluster boundaries
pub fn save_layout(
    positions: &[NodePosition],
    boundaries: &[ClusterBoundary],
    output_dir: &str,
) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let path = Path::new(output_dir).join("layout.json");
    let mut file = File::create(path)?;

    let layout = json!({
        "positions": positions,
        "cluster_boundaries": boundaries,
    });

    file.write_all(to_string_pretty(&layout)?.as_bytes())?;

    Ok(())
}
