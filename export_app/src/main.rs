//! Pumpkin Spice export tool
//!
//! Reads a Wavefront OBJ file, triangulates it (unless configured off), and
//! writes the `.ps` text format.
//!
//! Usage: `ps_exporter input.obj output.ps [config.toml|config.ron]`

use log::info;
use ps_export::{export_to_path, triangulated, Config, ExportConfig, ObjLoader};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} input.obj output.ps [config.toml|config.ron]", args[0]);
        process::exit(1);
    }

    match run(&args[1], &args[2], args.get(3).map(String::as_str)) {
        Ok(()) => {
            println!("Exported {} -> {}", args[1], args[2]);
        }
        Err(e) => {
            eprintln!("Export failed: {e}");
            process::exit(1);
        }
    }
}

fn run(
    input_path: &str,
    output_path: &str,
    config_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => ExportConfig::load_from_file(path)?,
        None => ExportConfig::default(),
    };

    let mesh = ObjLoader::load_obj(input_path)?;
    let mesh = if config.triangulate {
        triangulated(&mesh)?
    } else {
        mesh
    };

    info!(
        "exporting {} vertices, {} faces to {}",
        mesh.vertices.len(),
        mesh.faces.len(),
        output_path
    );
    export_to_path(&mesh, output_path)?;
    Ok(())
}
