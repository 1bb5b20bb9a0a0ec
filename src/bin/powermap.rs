//! Render one fringe pattern per supported mirror power and save each as a
//! FITS image.

use fitrs::{Fits, Hdu};
use log::info;
use michelson::*;

fn main() {
    env_logger::init();
    const SCALE: f64 = 0.5; // mid-range deformation
    const MIRROR_DIFF: f64 = 0.0;

    let grid = DetectorGrid::new(DEFAULT_SCREEN_SIZE, DEFAULT_RES);
    for power in MirrorPower::ALL {
        info!(
            "rendering {} mirror: {} {} at r^{}",
            power.label(),
            SCALE,
            power.scale_unit(),
            power.exponent()
        );
        let config = OpticalConfig::power_law(MIRROR_DIFF, SCALE, power);
        let field = compute_intensity(&grid, &config);
        let filename = format!("/tmp/fringes_r{}.fits", power.exponent());
        save_field(&filename, &grid, &field);
    }
}

fn save_field(filename: &str, grid: &DetectorGrid, field: &IntensityField) {
    println!("doing {}", filename);
    let shape = [grid.res(), grid.res()];
    let primary_hdu = Hdu::new(&shape, field.values().to_vec());
    Fits::create(filename, primary_hdu).expect("Failed to create");
}
