use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};

use statrect::util::positions_from_geojson;
use statrect::{get_bounds_from_rectangle_label, get_rectangle_label_by_lat_long, label_positions,
               DomainError};

#[derive(Parser)]
#[command(name = "statrect", version, about = "ICES and GFCM statistical rectangle codes")]
struct Cli {
    /// Log at debug level, overriding RUST_LOG.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the rectangle label of a coordinate.
    Label {
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
    },
    /// Print the bounds of a rectangle as JSON.
    Decode { label: String },
    /// Label every position of a GeoJSON file, `-` for stdin.
    Geojson { file: PathBuf },
    /// Print a GeoJSON FeatureCollection with the polygon of each label.
    Polygons {
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

fn open(path: &Path) -> Result<Box<dyn Read>, DomainError> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn run(command: Command) -> Result<(), DomainError> {
    match command {
        Command::Label { latitude, longitude } => {
            println!("{}", get_rectangle_label_by_lat_long(latitude, longitude)?);
        }
        Command::Decode { label } => {
            let bounds = get_bounds_from_rectangle_label(&label)?;
            println!("{}", serde_json::to_string(&bounds)?);
        }
        Command::Geojson { file } => {
            let positions = positions_from_geojson(open(&file)?)?;
            debug!("{} positions in {}", positions.len(), file.display());
            for (p, label) in positions.iter().zip(label_positions(&positions)) {
                match label {
                    Ok(label) => println!("{},{},{}", p.latitude, p.longitude, label),
                    Err(e) => println!("{},{},error: {}", p.latitude, p.longitude, e),
                }
            }
        }
        Command::Polygons { labels } => {
            let fc = statrect::geometry::rectangles_to_feature_collection(&labels);
            println!("{}", serde_json::to_string_pretty(&fc)?);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(cli.command) {
        eprintln!("statrect: {}", e);
        process::exit(1);
    }
}
