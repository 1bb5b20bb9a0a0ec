use fitrs::{Fits, Hdu};
use michelson::*;
use std::time;

fn main() {
    let now = time::Instant::now();
    let grid = DetectorGrid::new(DEFAULT_SCREEN_SIZE, DEFAULT_RES);
    println!("\nRendering Michelson fringe pattern");
    println!(
        "screen: {:.2} m, {} x {} px",
        grid.screen_size(),
        grid.res(),
        grid.res()
    );
    println!(
        "{:10.2e} sec for building grid",
        1e-6 * (now.elapsed().as_micros() as f64)
    );

    let config = OpticalConfig::spherical(0.0, 2.0).expect("valid curvature");
    let now = time::Instant::now();
    let field = compute_intensity(&grid, &config);
    println!(
        "{:10.2e} sec for rendering field",
        1e-6 * (now.elapsed().as_micros() as f64)
    );

    if config.supports_ring_analysis() {
        let now = time::Instant::now();
        let measurement = measure_rings(&field, &grid);
        println!(
            "{:10.2e} sec for measuring rings",
            1e-6 * (now.elapsed().as_micros() as f64)
        );
        println!("{}", measurement);
        println!(
            "(theory: r1 = {:.2} mm, r2 = {:.2} mm)",
            ring_radius_theory(1, 2.0) * 1e3,
            ring_radius_theory(2, 2.0) * 1e3
        );
    }

    let now = time::Instant::now();
    let shape = [grid.res(), grid.res()];
    let primary_hdu = Hdu::new(&shape, field.values().to_vec());
    Fits::create("fringes.fits", primary_hdu).expect("Failed to create");
    println!(
        "{:10.2e} sec for saving fits",
        1e-6 * (now.elapsed().as_micros() as f64)
    );
}
