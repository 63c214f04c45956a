//! `contour`: runs a scripted editing session against a chunked voxel map and
//! reports the resulting marching-squares meshes.
#![forbid(unsafe_code)]

mod report;
mod scenario;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use contour_map::VoxelMap;

use crate::scenario::{Scenario, load_scenario};

#[derive(Parser, Debug)]
#[command(name = "contour", version, about = "Chunked marching-squares voxel map")]
struct Args {
    /// TOML scenario with an optional [map] table and [[edits]] entries
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,

    /// World-space side length of the map
    #[arg(long)]
    size: Option<f32>,

    /// Chunks per side
    #[arg(long)]
    chunks: Option<usize>,

    /// Voxels per chunk side
    #[arg(long)]
    voxels: Option<usize>,

    /// Print the voxel occupancy grid
    #[arg(long)]
    ascii: bool,

    /// Debug-level logging (RUST_LOG still wins when set)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scenario = match &args.scenario {
        Some(path) => {
            let sc = load_scenario(path)?;
            log::info!("loaded {} edit(s) from {}", sc.edits.len(), path.display());
            sc
        }
        None => Scenario::default(),
    };

    let mut cfg = scenario.map.unwrap_or_default();
    if let Some(size) = args.size {
        cfg.size = size;
    }
    if let Some(chunks) = args.chunks {
        cfg.chunk_resolution = chunks;
    }
    if let Some(voxels) = args.voxels {
        cfg.voxel_resolution = voxels;
    }

    let mut map = VoxelMap::new(cfg)?;
    let outcomes = scenario.run(&mut map);
    let changed: usize = outcomes.iter().map(|o| o.changed).sum();
    let missed = outcomes.iter().filter(|o| o.is_noop()).count();
    log::info!(
        "applied {} edit(s): {} voxel(s) changed, {} off the map",
        outcomes.len(),
        changed,
        missed
    );

    if args.ascii {
        print!("{}", report::occupancy(&map));
        println!();
    }
    print!("{}", report::chunk_table(&map));
    Ok(())
}
