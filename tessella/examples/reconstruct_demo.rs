//! Example: Antialiased Resampling
//!
//! Renders a procedural zone plate, downsamples it with every lookup strategy and prints
//! how far each result is from a heavily supersampled reference.
//! 1. Build a 256x256 zone plate (concentric rings of rising frequency)
//! 2. Reconstruct at the target size with nearest, bilinear, gaussian and triangle lookups
//! 3. Compare against a 16x16 box-filtered reference
//!
//! # Usage
//!
//! ```bash
//! cargo run --release -p tessella --example reconstruct_demo -- [width] [height]
//! RUST_LOG=tessella=debug cargo run --release -p tessella --example reconstruct_demo
//! ```

use std::env;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use common::log_setup::setup_logging;
use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tessella::prelude::*;
use tessella::sampling::multijitter;

const SOURCE_SIZE: usize = 256;

fn zone_plate(size: usize) -> Image<Vec3> {
    let center = size as f32 / 2.0;
    let k = std::f32::consts::PI / size as f32;
    Image::from_fn(size, size, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let v = 0.5 + 0.5 * (k * (dx * dx + dy * dy)).cos();
        Vec3::new(v, v * 0.8, 1.0 - v)
    })
}

/// Box-filtered reference: every output pixel averages a 16x16 grid of bilinear reads.
fn reference(source: &Image<Vec3>, width: usize, height: usize) -> Image<Vec3> {
    const GRID: usize = 16;
    Image::from_fn(width, height, |x, y| {
        let mut sum = Vec3::ZERO;
        for j in 0..GRID {
            for i in 0..GRID {
                let s = (x as f32 + (i as f32 + 0.5) / GRID as f32) / width as f32;
                let t = (y as f32 + (j as f32 + 0.5) / GRID as f32) / height as f32;
                sum += sample_bilinear(source, s.min(0.999_999), t.min(0.999_999));
            }
        }
        sum / (GRID * GRID) as f32
    })
}

fn rms_error(a: &Image<Vec3>, b: &Image<Vec3>) -> f32 {
    let sum: f32 = a
        .iter()
        .zip(b.iter())
        .map(|((_, _, &p), (_, _, &q))| (p - q).length_squared())
        .sum();
    (sum / a.len() as f32).sqrt()
}

fn parse_size(args: &[String], index: usize, default: usize) -> Result<usize> {
    match args.get(index) {
        Some(arg) => {
            let value: usize = arg
                .parse()
                .with_context(|| format!("Invalid size argument '{arg}'"))?;
            if value == 0 {
                bail!("Output size must be non-zero");
            }
            Ok(value)
        }
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    setup_logging("info", None)?;

    let args: Vec<String> = env::args().collect();
    let width = parse_size(&args, 1, 96)?;
    let height = parse_size(&args, 2, width)?;

    let source = zone_plate(SOURCE_SIZE);
    let truth = reference(&source, width, height);

    let samples = suggested_sample_count(width, height) as u64;
    let config = ReconstructConfig::new(width, height, samples);
    let per_pixel = config.samples_per_pixel();
    println!("Reconstructing {SOURCE_SIZE}x{SOURCE_SIZE} -> {width}x{height}");
    println!("{samples} samples ({per_pixel:.1} per pixel)");

    let side = 2 * width.max(height);
    let pool = multijitter(side * 2, side * 2, &mut ChaCha8Rng::seed_from_u64(7));

    let mut gaussian_rng = ChaCha8Rng::seed_from_u64(1);
    let mut triangle2_rng = ChaCha8Rng::seed_from_u64(2);
    let mut triangle4_rng = ChaCha8Rng::seed_from_u64(3);

    let mut samplers: Vec<(&str, Box<dyn PixelSampler<Vec3> + '_>)> = vec![
        ("nearest", Box::new(NearestLookup)),
        ("bilinear", Box::new(BilinearLookup)),
        (
            "gaussian x3",
            Box::new(GaussianLookup::new(3, 0.001, &mut gaussian_rng)?),
        ),
        (
            "triangle 2x2",
            Box::new(TriangleLookup::new(2, DEFAULT_TRIANGLE_EXTENT, &mut triangle2_rng)?),
        ),
        (
            "triangle 4x4",
            Box::new(TriangleLookup::new(4, DEFAULT_TRIANGLE_EXTENT, &mut triangle4_rng)?),
        ),
        (
            "shared triangle 4",
            Box::new(SharedTriangleLookup::new(4, DEFAULT_TRIANGLE_EXTENT, pool)?),
        ),
    ];

    println!("\n{:<20} {:>10} {:>12}", "lookup", "time (ms)", "rms error");
    for (name, sampler) in &mut samplers {
        let start = Instant::now();
        let output = reconstruct(&config, &source, sampler.as_mut());
        let elapsed = start.elapsed();
        println!(
            "{:<20} {:>10.1} {:>12.5}",
            name,
            elapsed.as_secs_f64() * 1000.0,
            rms_error(&output, &truth)
        );
    }

    let direct = resize(&source, width, height, ResizeFilter::Bilinear);
    println!(
        "{:<20} {:>10} {:>12.5}",
        "direct resize",
        "-",
        rms_error(&direct, &truth)
    );

    Ok(())
}
