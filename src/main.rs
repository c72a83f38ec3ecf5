use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cave_generator::area::{Area, EdgePattern, Lineage, Side};
use cave_generator::ascii;
use cave_generator::config::CaveConfig;
use cave_generator::generation::{CaveGenerator, CaveMap};
use cave_generator::map_export::PngExporter;
use cave_generator::seeds::CaveSeed;

#[derive(Parser, Debug)]
#[command(name = "cave_generator")]
#[command(about = "Generate connected cellular-automaton caves that stitch into neighboring areas")]
struct Args {
    /// JSON config file; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side length of each square area
    #[arg(short = 'S', long)]
    size: Option<usize>,

    /// Initial open-cell chance in percent (40-60)
    #[arg(short, long)]
    fill_percent: Option<u32>,

    /// Seed string (numbers are accepted as text too)
    #[arg(short, long)]
    seed: Option<String>,

    /// Draw a random seed for every area
    #[arg(long)]
    random_seed: bool,

    /// Smoothing passes before cleanup
    #[arg(long)]
    smooth: Option<u32>,

    /// Minimum open region size kept as a room
    #[arg(long)]
    min_room: Option<usize>,

    /// Minimum wall region size kept as wall
    #[arg(long)]
    min_wall: Option<usize>,

    /// Brush radius for passages (1 to size)
    #[arg(long)]
    radius: Option<i32>,

    /// Number of areas in a west-to-east chain
    #[arg(short = 'n', long, default_value = "1")]
    areas: u32,

    /// Cut an exit gap into the east side of the last area
    #[arg(long)]
    terminal: bool,

    /// Write one PNG per area into this directory
    #[arg(long)]
    export_png: Option<PathBuf>,

    /// Pixels per cell for PNG export
    #[arg(long, default_value = "8")]
    png_scale: u32,

    /// Write a text report of the last area
    #[arg(long)]
    export_text: Option<PathBuf>,

    /// Don't print maps to stdout
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn build_config(&self) -> Result<CaveConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => CaveConfig::from_json_file(path)?,
            None => CaveConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(fill_percent) = self.fill_percent {
            config.fill_percent = fill_percent;
        }
        if let Some(seed) = &self.seed {
            config.seed = CaveSeed::Text(seed.clone());
        }
        if self.random_seed {
            config.use_random_seed = true;
        }
        if let Some(smooth) = self.smooth {
            config.smooth_amount = smooth;
        }
        if let Some(min_room) = self.min_room {
            config.min_room_size = min_room;
        }
        if let Some(min_wall) = self.min_wall {
            config.min_wall_size = min_wall;
        }
        if let Some(radius) = self.radius {
            config.passage_radius = radius;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Area `index` of a west-to-east chain of `count` areas.
fn chain_area(index: u32, count: u32, terminal: bool) -> Area {
    let mut area = Area::isolated(index);
    if index > 0 {
        area = area.with_parent(Side::Left);
    }
    if index + 1 < count || terminal {
        area = area.with_neighbor(Side::Right);
    }
    area
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = args.build_config()?;
    let count = args.areas.max(1);

    info!(areas = count, size = config.size, "starting cave generation");

    let mut exporter = args.export_png.as_ref().map(|directory| PngExporter {
        directory: directory.clone(),
        scale: args.png_scale,
    });

    let mut parent_edge: Option<EdgePattern> = None;
    let mut last: Option<(Area, CaveMap)> = None;

    for index in 0..count {
        let area = chain_area(index, count, args.terminal);
        let terminal = args.terminal && index + 1 == count;

        // Each area in the chain gets its own stream derived from the base seed.
        let mut area_config = config.clone();
        if count > 1 && !config.use_random_seed {
            area_config.seed = CaveSeed::Text(format!("{}-{}", config.seed, index));
        }
        let generator = CaveGenerator::new(area_config)?;

        let lineage = match &parent_edge {
            Some(edge) => Lineage::Child(edge),
            None => Lineage::Root,
        };
        let map = match exporter.as_mut() {
            Some(exporter) => {
                let (map, written) = generator.build_with(&area, lineage, terminal, exporter)?;
                let path = written?;
                info!(path = %path.display(), "area exported");
                map
            }
            None => generator.create_map(&area, lineage, terminal)?,
        };

        println!(
            "Area {}: seed {}, {} rooms, {} passages, {} open cells, connected: {}",
            index,
            map.seed,
            map.rooms.len(),
            map.passages.len(),
            map.open_cell_count(),
            map.is_fully_connected()
        );
        if let Some(gap) = map.transition {
            println!("  exit on {} side at offset {}", gap.side, gap.offset);
        }
        if !args.quiet {
            print!("{}", ascii::render_ascii(&map.grid));
        }

        parent_edge = Some(map.edge(Side::Right).for_child());
        last = Some((area, map));
    }

    if let (Some(path), Some((area, map))) = (&args.export_text, &last) {
        ascii::export_map_file(map, area, path)?;
        info!(path = %path.display(), "text report written");
    }

    Ok(())
}
