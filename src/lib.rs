//! Simulation and analysis of Michelson interferometer fringe patterns.
//!
//! The instrument modelled here is a Michelson interferometer illuminated by
//! a monochromatic point source through an expanding lens, with a flat
//! reference mirror in one arm and a flat, spherical, or power-law-deformed
//! mirror in the other. The crate renders the interference intensity over a
//! square detector and, for spherical mirrors, recovers the mirror's radius
//! of curvature from the radii of the first two bright rings.
//!
//! The two halves of the crate are:
//!  - the wavefront model ([compute_intensity]), a pure function mapping an
//!    [OpticalConfig] over a [DetectorGrid] to an [IntensityField],
//!  - the ring analyser ([find_first_two_rings], [estimate_curvature],
//!    [measure_rings]), which scans a radial profile of the rendered field
//!    for bright fringes and inverts their radii.
//!
//! # Examples
//! ```
//! use michelson::*;
//!
//! let grid = DetectorGrid::new(DEFAULT_SCREEN_SIZE, 200);
//! let config = OpticalConfig::spherical(0.0, 2.0).unwrap();
//! let field = compute_intensity(&grid, &config);
//! assert!(field.values().iter().all(|v| (0.0..=1.0).contains(v)));
//! ```

#[macro_use]
extern crate impl_ops;

mod error;
mod field;
mod geometry;
mod grid;
mod rings;
mod wavefront;

pub use error::ConfigError;
pub use field::Field;
pub use geometry::{linspace, Vec2D};
pub use grid::DetectorGrid;
pub use rings::{
    estimate_curvature, find_first_two_rings, measure_rings, ring_radius_theory, RingMeasurement,
    BRIGHTNESS_THRESHOLD, MIN_RESOLVABLE_CURVATURE,
};
pub use wavefront::{
    compute_intensity, FringePattern, IntensityField, MirrorPower, MirrorShape, OpticalConfig,
    PointSource,
};

/// Wavelength of the (monochromatic, green) source, in metres.
pub const WAVELENGTH: f64 = 500e-9;

/// Default physical width of the observation screen, in metres.
pub const DEFAULT_SCREEN_SIZE: f64 = 0.1;

/// Default detector resolution, in pixels per side.
pub const DEFAULT_RES: usize = 1000;
