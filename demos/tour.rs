//! A short walk through the geomkit API.
//!
//! Usage:
//! ```text
//! cargo run --example tour
//! RUST_LOG=geomkit=trace cargo run --example tour
//! ```

use geomkit::math::extremum::{max, min};
use geomkit::math::interpolate::{catmull_rom_path, hermite, stack_hermite};
use geomkit::math::intersect_2d::{infinite_line_intersect, segment_intersect};
use geomkit::math::intersect_3d::{ray_plane_distance, Plane, Ray};
use geomkit::math::scalar::{clamp_wrap_angle, discard_least_significant_decimal, Wrap};
use geomkit::math::{Point2, Point3, Vector3};
use geomkit::path::make_relative;

fn main() -> geomkit::Result<()> {
    // Default: WARN for everything, DEBUG for geomkit.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geomkit=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geomkit=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let values = [3.0, -1.5, 8.25];
    println!("min/max of {values:?}: {} / {}", min(&values), max(&values));

    println!("hermite(0, 10, 0.25) = {}", hermite(0.0, 10.0, 0.25));
    println!("stack_hermite(0, 1, 0.3, 3) = {}", stack_hermite(0.0, 1.0, 0.3, 3));

    let path = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 2.0, 0.0),
        Point3::new(3.0, 3.0, 0.0),
        Point3::new(4.0, 0.0, 0.0),
    ];
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        println!("catmull_rom_path(t = {t}) = {}", catmull_rom_path(&path, t)?);
    }

    let hit = segment_intersect(
        &Point2::new(0.0, 0.0),
        &Point2::new(2.0, 2.0),
        &Point2::new(0.0, 2.0),
        &Point2::new(2.0, 0.0),
    );
    println!("segment intersection: {hit:?}");

    match infinite_line_intersect(
        &Point2::new(0.0, 0.0),
        &Point2::new(1.0, 0.0),
        &Point2::new(0.0, 1.0),
        &Point2::new(1.0, 1.0),
    ) {
        Ok(p) => println!("infinite lines meet at {p}"),
        Err(e) => println!("infinite lines: {e}"),
    }

    let ray = Ray::new(Point3::new(0.0, 0.0, 3.0), Vector3::new(4.0, 0.0, -3.0))?;
    let ground = Plane::new(Point3::origin(), Vector3::z())?;
    println!("ray to ground: {}", ray_plane_distance(&ray, &ground));

    println!("-10 wrapped into [0, 360): {}", (-10.0_f64).wrap(0.0, 360.0));
    println!("clamp_wrap_angle(-30, 0, 90) = {}", clamp_wrap_angle(-30.0, 0.0, 90.0));
    println!("discard(123.456789) = {}", discard_least_significant_decimal(123.456_789)?);
    if let Err(e) = discard_least_significant_decimal(0.0) {
        println!("discard(0) failed: {e}");
    }

    println!("relative: {}", make_relative("C:/game/assets", "C:/game/src/main.rs")?);
    Ok(())
}
