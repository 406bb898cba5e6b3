use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use clap::Parser;

use cofi::io::read_coo;
use cofi::knn::{find_neighborhoods, recommend_for_user};

/// User-based collaborative filtering recommendations from a binary
/// ratings file.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Ratings file: a little-endian u64 nrows/ncols header followed by
    /// (u64 row, u64 col, u8 rating) records
    file: PathBuf,

    /// Neighborhood size per user
    #[arg(short = 'k', long = "neighbors", default_value_t = 30)]
    neighbors: usize,

    /// Worker threads; defaults to the number of logical processors
    #[arg(short, long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let ratings = read_coo(&cli.file)
        .with_context(|| format!("Error reading ratings file: {}", cli.file.display()))?;

    let mat = ratings.to_comp().context("Error building rating matrix")?;
    println!(
        "Loaded Matrix: {} x {} with {} non-zeros",
        mat.major_dim,
        mat.minor_dim,
        mat.nnz()
    );

    let centered = Arc::new(mat.mean_centered());
    println!("Mean Centered Matrix");

    let norms = Arc::new(centered.row_norms());
    println!("Computed row norms");

    let nworkers = cli
        .threads
        .unwrap_or_else(|| thread::available_parallelism().map_or(1, |n| n.get()));
    let neighborhoods = find_neighborhoods(&centered, &norms, cli.neighbors, nworkers)
        .context("Error computing nearest neighbors")?;
    println!("Computed nearest neighbors");

    for user in 0..centered.major_dim {
        println!("Recommendations for User {}:", user);
        for (item, score) in recommend_for_user(&centered, &neighborhoods[user], user) {
            println!("\tItem {}: Score {:.4}", item, score);
        }
        println!();
    }

    Ok(())
}
