//! Store layout query server.
//!
//! Serves the read-only API the store-navigation frontend uses:
//!
//! - `GET /api/stores`: distinct store identifiers
//! - `GET /api/floors/<store_id>`: floors available for a store
//! - `GET /api/layout/<store_id>/<floor_id>`: smoothed layout document
//! - `GET /api/items/<store_id>/<floor_id>`: all item rows
//!
//! The catalog is loaded once at startup; every response carries a
//! permissive CORS header so the frontend can be served from anywhere
//! during development. When the configured static directory exists it is
//! mounted at the root as well.

#[macro_use]
extern crate rocket;

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use log::info;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::FileServer;
use rocket::http::Header;
use rocket::serde::json::Json;
use rocket::{Request, Response, State};
use serde::Serialize;

use vipani_map::catalog::StoreCatalog;
use vipani_map::config::AppConfig;
use vipani_map::layout::FloorLayout;
use vipani_map::ItemDoc;

#[get("/api/stores")]
fn stores(catalog: &State<StoreCatalog>) -> Json<Vec<String>> {
    Json(catalog.store_ids())
}

/// One entry of the floors listing, shaped the way the frontend expects.
#[derive(Serialize)]
struct FloorEntry {
    floor_id: String,
}

#[get("/api/floors/<store_id>")]
fn floors(store_id: &str, catalog: &State<StoreCatalog>) -> Json<Vec<FloorEntry>> {
    let entries = catalog
        .floors(store_id)
        .into_iter()
        .map(|floor_id| FloorEntry { floor_id })
        .collect();
    Json(entries)
}

#[get("/api/layout/<store_id>/<floor_id>")]
fn layout(
    store_id: &str,
    floor_id: &str,
    catalog: &State<StoreCatalog>,
) -> Option<Json<FloorLayout>> {
    catalog.layout(store_id, floor_id).cloned().map(Json)
}

// The identifiers are accepted for URL compatibility only; the demo data
// set covers a single store, so every item row is returned.
#[get("/api/items/<_store_id>/<_floor_id>")]
fn items(_store_id: &str, _floor_id: &str, catalog: &State<StoreCatalog>) -> Json<Vec<ItemDoc>> {
    Json(catalog.items().to_vec())
}

/// Adds a permissive CORS header to every response.
struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
    }
}

fn parse_args(args: &[String]) -> Result<Option<String>, String> {
    let mut config_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
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

    Ok(config_path)
}

fn print_usage(program: &str) {
    eprintln!(
        r#"
Usage: {} [OPTIONS]

Serve the store layout query API from the catalog data directory.

OPTIONS:
    -c, --config <PATH>   Config file (default: vipani.toml if present)
    -h, --help            Show this help message
"#,
        program
    );
}

#[launch]
fn rocket() -> _ {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let config_path = match parse_args(&args) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    let app = match load_app_config(config_path.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let catalog = match StoreCatalog::open(Path::new(&app.catalog.data_dir)) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: failed to open catalog: {}", e);
            process::exit(1);
        }
    };

    let figment = rocket::Config::figment()
        .merge(("address", app.server.address.clone()))
        .merge(("port", app.server.port));

    let mut server = rocket::custom(figment)
        .manage(catalog)
        .attach(Cors)
        .mount("/", routes![stores, floors, layout, items]);

    let static_dir = PathBuf::from(&app.server.static_dir);
    if static_dir.is_dir() {
        info!("Serving static files from {}", static_dir.display());
        server = server.mount("/", FileServer::from(static_dir));
    } else {
        info!(
            "Static directory {} not found, serving API only",
            static_dir.display()
        );
    }

    server
}

fn load_app_config(path: Option<&str>) -> vipani_map::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path),
        None => AppConfig::load_or_default(),
    }
}
