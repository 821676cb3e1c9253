//! CLI tool for smoothing traced floor-plan vertices.
//!
//! Reads a raw layout JSON, smooths the store outline and every internal
//! polygon, and writes the smoothed document.
//!
//! # Usage
//!
//! ```bash
//! smoothen_vertices
//! smoothen_vertices traced.json smooth.json --merge-threshold 8
//! ```

use std::env;
use std::path::Path;

use vipani_map::config::AppConfig;
use vipani_map::io::process_vertices;

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
    input: String,
    output: String,
    config_path: Option<String>,
    merge_threshold: Option<f64>,
    align_threshold: Option<f64>,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut input = None;
    let mut output = None;
    let mut config_path = None;
    let mut merge_threshold = None;
    let mut align_threshold = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let value = args.get(i).ok_or("--config requires a path")?;
                config_path = Some(value.clone());
            }
            "--merge-threshold" => {
                i += 1;
                let value = args.get(i).ok_or("--merge-threshold requires a value")?;
                merge_threshold = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid merge threshold: {}", value))?,
                );
            }
            "--align-threshold" => {
                i += 1;
                let value = args.get(i).ok_or("--align-threshold requires a value")?;
                align_threshold = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid align threshold: {}", value))?,
                );
            }
            "--help" | "-h" => {
                return Err("Help requested".to_string());
            }
            arg if !arg.starts_with('-') => {
                if input.is_none() {
                    input = Some(arg.to_string());
                } else if output.is_none() {
                    output = Some(arg.to_string());
                } else {
                    return Err("Too many file arguments".to_string());
                }
            }
            _ => {
                return Err(format!("Unknown argument: {}", args[i]));
            }
        }
        i += 1;
    }

    Ok(Config {
        input: input.unwrap_or_else(|| "vertices.json".to_string()),
        output: output.unwrap_or_else(|| "smoothened_vertices.json".to_string()),
        config_path,
        merge_threshold,
        align_threshold,
    })
}

fn print_usage(program: &str) {
    eprintln!(
        r#"
Usage: {} [OPTIONS] [INPUT] [OUTPUT]

Smooth the polygon vertices of a traced floor layout.
INPUT defaults to vertices.json, OUTPUT to smoothened_vertices.json.

OPTIONS:
    -c, --config <PATH>          Config file (default: vipani.toml if present)
    --merge-threshold <PIXELS>   Override the merge threshold
    --align-threshold <PIXELS>   Override the alignment threshold
    -h, --help                   Show this help message

EXAMPLES:
    {}
    {} traced.json smooth.json --merge-threshold 8
"#,
        program, program, program
    );
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let app = match &config.config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default()?,
    };

    let mut smoothing = app.smoothing;
    if let Some(value) = config.merge_threshold {
        smoothing = smoothing.with_merge_threshold(value);
    }
    if let Some(value) = config.align_threshold {
        smoothing = smoothing.with_align_threshold(value);
    }

    let smooth = process_vertices(
        Path::new(&config.input),
        Path::new(&config.output),
        &smoothing,
    )?;

    println!(
        "Wrote {} ({} vertices across {} rings)",
        config.output,
        smooth.vertex_count(),
        smooth.polygons.len() + 1
    );
    Ok(())
}
