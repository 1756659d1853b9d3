//! Run-Length Encoding Inspector
//!
//! Encodes a deterministic test pattern, draws a diagonal across it one pixel
//! at a time, and prints the run sequence before and after each stage.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin rle_inspect -- [width] [height] [out.png]
//! ```
//!
//! Width and height default to 16x8. When an output path is given, the
//! decoded result is also written there as PNG.
//!
//! # Pattern
//!
//! The image is split into four quadrants that exercise different run shapes:
//! - Top-left: horizontal gradient (many short runs)
//! - Top-right: vertical gradient (one run per row)
//! - Bottom-left: solid blue (long runs spanning rows)
//! - Bottom-right: checkerboard (all singleton runs)

use std::process::ExitCode;

use rle_raster::{Carve, Color, Edit, Raster, RunLengthEncoding};

#[allow(clippy::cast_possible_truncation)]
fn pattern(width: u32, height: u32) -> rle_raster::Result<Raster> {
    let (half_w, half_h) = (width / 2, height / 2);
    Raster::from_fn(width, height, |x, y| {
        if x < half_w && y < half_h {
            Color::rgb((x * 255 / half_w.max(1)) as u8, 0, 0)
        } else if x >= half_w && y < half_h {
            Color::rgb(0, (y * 255 / half_h.max(1)) as u8, 0)
        } else if x < half_w {
            Color::rgb(0, 0, 200)
        } else if (x + y) % 2 == 0 {
            Color::WHITE
        } else {
            Color::BLACK
        }
    })
}

fn parse_dimension(arg: Option<String>, default: u32) -> Result<u32, String> {
    match arg {
        None => Ok(default),
        Some(s) => s
            .parse()
            .map_err(|e| format!("invalid dimension {s:?}: {e}")),
    }
}

fn run() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let width = parse_dimension(args.next(), 16)?;
    let height = parse_dimension(args.next(), 8)?;
    let out = args.next();

    let raster = pattern(width, height).map_err(|e| e.to_string())?;
    let mut rle = RunLengthEncoding::from_raster(&raster).map_err(|e| e.to_string())?;
    println!(
        "Encoded {}x{} pattern into {} runs",
        width,
        height,
        rle.run_count()
    );
    println!("{rle}");

    let mut splits = 0;
    let mut merges = 0;
    let mut tally = |_: &RunLengthEncoding, edit: &Edit| {
        if edit.carve == Carve::SplitInterior {
            splits += 1;
        }
        merges += u32::from(edit.merged_left) + u32::from(edit.merged_right);
    };
    for i in 0..width.min(height) {
        rle.set_pixel_observed(i, i, Color::rgb(255, 255, 0), &mut tally)
            .map_err(|e| e.to_string())?;
    }
    println!(
        "After diagonal: {} runs ({} interior splits, {} merges)",
        rle.run_count(),
        splits,
        merges
    );
    println!("{rle}");

    rle.validate().map_err(|e| e.to_string())?;

    if let Some(path) = out {
        let file = std::fs::File::create(&path).map_err(|e| format!("{path}: {e}"))?;
        rle_raster::write_png(&rle.to_raster(), std::io::BufWriter::new(file))
            .map_err(|e| e.to_string())?;
        println!("Wrote {path}");
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rle_inspect: {e}");
            ExitCode::FAILURE
        }
    }
}
