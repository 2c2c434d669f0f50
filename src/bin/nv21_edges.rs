use edge_viewer::config::edge::{self, FrameSource};
use edge_viewer::image::io::{load_nv21_from_image, load_nv21_raw, save_rgba_png, write_json_file};
use edge_viewer::{edge_map_nv21, EdgeSummary};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = edge::load_config(Path::new(&config_path))?;

    let buffer = match &config.input {
        FrameSource::Image { path } => load_nv21_from_image(path)?,
        FrameSource::Nv21 {
            path,
            width,
            height,
        } => load_nv21_raw(path, *width as usize, *height as usize)?,
    };
    let frame = buffer.as_frame().map_err(|e| e.to_string())?;

    let start = Instant::now();
    let map = edge_map_nv21(&frame).map_err(|e| e.to_string())?;
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    let summary = EdgeSummary::from_edge_map(&map);

    save_rgba_png(&map, &config.output.edge_image)?;
    println!(
        "Saved {}x{} edge map to {} ({:.3} ms)",
        buffer.width(),
        buffer.height(),
        config.output.edge_image.display(),
        latency_ms
    );

    if let Some(summary_path) = &config.output.summary_json {
        write_json_file(summary_path, &summary)?;
        println!(
            "Saved summary to {} (max={}, mean={:.2})",
            summary_path.display(),
            summary.max_magnitude,
            summary.mean_magnitude
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: nv21_edges <config.json>".to_string()
}
