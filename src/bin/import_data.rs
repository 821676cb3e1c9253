//! CLI tool for importing demo data into the store catalog.
//!
//! Loads the items CSV and the smoothed layout JSON, attaches store and
//! floor identifiers to the layout, and writes both collections into the
//! catalog data directory. Re-importing the same store floor replaces its
//! layout; item rows always append.
//!
//! # Usage
//!
//! ```bash
//! import_data
//! import_data --layout smoothened_vertices.json --store store1 --floor floor1
//! ```

use std::env;
use std::path::Path;

use vipani_map::catalog::StoreCatalog;
use vipani_map::config::AppConfig;
use vipani_map::io::{read_items_csv, read_layout};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct Config {
    items_path: String,
    layout_path: String,
    store_id: String,
    floor_id: String,
    data_dir: Option<String>,
    config_path: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut items_path = None;
    let mut layout_path = None;
    let mut store_id = None;
    let mut floor_id = None;
    let mut data_dir = None;
    let mut config_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--items" => {
                i += 1;
                let value = args.get(i).ok_or("--items requires a path")?;
                items_path = Some(value.clone());
            }
            "--layout" => {
                i += 1;
                let value = args.get(i).ok_or("--layout requires a path")?;
                layout_path = Some(value.clone());
            }
            "--store" => {
                i += 1;
                let value = args.get(i).ok_or("--store requires an identifier")?;
                store_id = Some(value.clone());
            }
            "--floor" => {
                i += 1;
                let value = args.get(i).ok_or("--floor requires an identifier")?;
                floor_id = Some(value.clone());
            }
            "--data-dir" => {
                i += 1;
                let value = args.get(i).ok_or("--data-dir requires a path")?;
                data_dir = Some(value.clone());
            }
            "--config" | "-c" => {
                i += 1;
                let value = args.get(i).ok_or("--config requires a path")?;
                config_path = Some(value.clone());
            }
            "--help" | "-h" => {
                return Err("Help requested".to_string());
            }
            _ => {
                return Err(format!("Unknown argument: {}", args[i]));
            }
        }
        i += 1;
    }

    Ok(Config {
        items_path: items_path.unwrap_or_else(|| "items.csv".to_string()),
        layout_path: layout_path.unwrap_or_else(|| "smoothened_vertices.json".to_string()),
        store_id: store_id.unwrap_or_else(|| "store1".to_string()),
        floor_id: floor_id.unwrap_or_else(|| "floor1".to_string()),
        data_dir,
        config_path,
    })
}

fn print_usage(program: &str) {
    eprintln!(
        r#"
Usage: {} [OPTIONS]

Import the items CSV and the smoothed layout into the catalog.

OPTIONS:
    --items <PATH>        Items CSV file (default: items.csv)
    --layout <PATH>       Smoothed layout JSON (default: smoothened_vertices.json)
    --store <ID>          Store identifier for the layout (default: store1)
    --floor <ID>          Floor identifier for the layout (default: floor1)
    --data-dir <PATH>     Catalog directory (default: from config, then "data")
    -c, --config <PATH>   Config file (default: vipani.toml if present)
    -h, --help            Show this help message

EXAMPLES:
    {}
    {} --store store2 --floor ground --data-dir /srv/vipani
"#,
        program, program, program
    );
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let app = match &config.config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default()?,
    };

    let data_dir = config.data_dir.unwrap_or(app.catalog.data_dir);
    let data_dir = Path::new(&data_dir);

    let mut catalog = StoreCatalog::open(data_dir)?;

    let items = read_items_csv(Path::new(&config.items_path))?;
    println!("Read {} items from {}", items.len(), config.items_path);
    catalog.insert_items(items);

    let mut layout = read_layout(Path::new(&config.layout_path))?;
    layout.store_id = Some(config.store_id.clone());
    layout.floor_id = Some(config.floor_id.clone());
    catalog.insert_layout(layout)?;
    println!(
        "Imported layout for store '{}' floor '{}'",
        config.store_id, config.floor_id
    );

    catalog.save(data_dir)?;
    println!(
        "Catalog in {} now holds {} layouts and {} items",
        data_dir.display(),
        catalog.layout_count(),
        catalog.item_count()
    );
    Ok(())
}
