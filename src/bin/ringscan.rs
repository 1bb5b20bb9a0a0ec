//! Sweep spherical-mirror curvature radii and report detected ring radii
//! against scalar-wave theory.

use log::info;
use michelson::*;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "ringscan")]
struct Opt {
    /// Smallest curvature radius (m)
    #[structopt(long, default_value = "0.5")]
    min: f64,
    /// Largest curvature radius (m)
    #[structopt(long, default_value = "10")]
    max: f64,
    /// Number of sweep steps
    #[structopt(long, default_value = "20")]
    steps: usize,
    /// Detector resolution (pixels per side)
    #[structopt(long, default_value = "1000")]
    res: usize,
    /// Arm path-length offset (um)
    #[structopt(long, default_value = "0")]
    mirror_diff: f64,
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let grid = DetectorGrid::new(DEFAULT_SCREEN_SIZE, opt.res);
    info!(
        "grid ready: {} x {} px over {:.1} cm",
        grid.res(),
        grid.res(),
        grid.screen_size() * 1e2
    );

    println!(
        "{:>8} {:>9} {:>9} {:>10} {:>10} {:>10}",
        "R (m)", "r1 (mm)", "r2 (mm)", "r1th (mm)", "r2th (mm)", "est R (m)"
    );
    let steps = opt.steps.max(2);
    for step in 0..steps {
        let radius = opt.min + (opt.max - opt.min) * step as f64 / (steps - 1) as f64;
        let config = OpticalConfig::spherical(opt.mirror_diff * 1e-6, radius)
            .expect("curvature radius must be non-negative");
        if !config.supports_ring_analysis() {
            info!("R = {:.2} m below the resolvable threshold, skipping", radius);
            continue;
        }
        let field = compute_intensity(&grid, &config);
        let measurement = measure_rings(&field, &grid);
        match (measurement.r1, measurement.r2, measurement.estimated_curvature) {
            (Some(r1), Some(r2), Some(estimated)) => println!(
                "{:8.2} {:9.3} {:9.3} {:10.3} {:10.3} {:10.2}",
                radius,
                r1 * 1e3,
                r2 * 1e3,
                ring_radius_theory(1, radius) * 1e3,
                ring_radius_theory(2, radius) * 1e3,
                estimated
            ),
            (Some(_), Some(_), None) => {
                println!("{:8.2} curvature inversion failed", radius)
            }
            _ => println!("{:8.2} rings not reliably detected", radius),
        }
    }
}
