//! Print hulls and boxes of the bundled fixtures.
//!
//! Usage:
//!   cargo run -p ombb --example fixtures_demo -- pixel
//!   cargo run -p ombb --example fixtures_demo -- lonlat

use ombb::api::{convex_hull, lonlat_points, ombb, pixel_points, OmbbCfg, SphericalMercator};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "pixel".to_string());
    match mode.as_str() {
        "pixel" => show_pixel(),
        "lonlat" => show_lonlat(),
        _ => {
            eprintln!("usage: fixtures_demo [pixel|lonlat]");
        }
    }
}

fn show_pixel() {
    let pts = pixel_points();
    match convex_hull(&pts, 1e-5) {
        Ok(hull) => {
            for (i, p) in hull.iter().enumerate() {
                println!("hull {i}: ({}, {})", p.x, p.y);
            }
        }
        Err(err) => eprintln!("hull failed: {err}"),
    }
    match ombb(&pts, &OmbbCfg::default()) {
        Ok(obb) => {
            for (i, c) in obb.corners.iter().enumerate() {
                println!("corner {i}: ({}, {})", c.x, c.y);
            }
            println!("area: {}", obb.area());
        }
        Err(err) => eprintln!("box failed: {err}"),
    }
}

fn show_lonlat() {
    let mercator = SphericalMercator::default();
    let cfg = OmbbCfg {
        projection: &mercator,
        ..OmbbCfg::default()
    };
    match ombb(&lonlat_points(), &cfg) {
        Ok(obb) => {
            for (i, c) in obb.corners.iter().enumerate() {
                println!("corner {i}: lon={} lat={}", c.x, c.y);
            }
        }
        Err(err) => eprintln!("box failed: {err}"),
    }
}
