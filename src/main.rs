use edge_viewer::{edge_map_nv21, EdgeSummary, FrameError, Nv21Frame};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), FrameError> {
    // Demo stub: synthesizes a 640x480 checkerboard NV21 frame and filters it
    let w = 640usize;
    let h = 480usize;
    let cell = 32usize;
    let mut nv21 = vec![128u8; w * h * 3 / 2];
    for (i, y) in nv21[..w * h].iter_mut().enumerate() {
        let (px, py) = (i % w, i / w);
        *y = if (px / cell + py / cell) % 2 == 0 { 32 } else { 220 };
    }

    let frame = Nv21Frame::new(&nv21, w, h)?;
    let map = edge_map_nv21(&frame)?;
    let s = EdgeSummary::from_edge_map(&map);
    println!(
        "bytes={} interior={} max={} mean={:.3} saturated={}",
        map.byte_len(),
        s.interior_pixels,
        s.max_magnitude,
        s.mean_magnitude,
        s.saturated_pixels
    );
    Ok(())
}
