use crate::error::ConfigError;
use crate::field::Field;
use crate::grid::DetectorGrid;
use crate::WAVELENGTH;
use std::f64::consts::PI;
use std::fmt;

// Sign convention throughout: optical-path-difference terms that grow with
// distance from the optical axis are negative, since those rays travel
// further in their arm. Only the phase (mod 2*pi) is observable, so the
// convention never leaks into the intensity.

/// Point source illuminating the interferometer through an expanding lens.
///
/// The source contributes a spherical-wavefront term
/// `-r^2 / (2 * dist_lens * magnification)` to the optical path difference.
/// `magnification` widens the rendered fringes; it is an explicit part of
/// the configuration rather than a constant buried in the formula, so both
/// historical parameterisations of the instrument stay expressible:
/// the default `(0.5, 1e3)` and the equivalent `(500.0, 1.0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSource {
    /// Distance of the expanding lens from the screen, metres.
    pub dist_lens: f64,
    /// Dimensionless widening factor applied to the lens distance.
    pub magnification: f64,
}

impl Default for PointSource {
    fn default() -> Self {
        Self {
            dist_lens: 0.5,
            magnification: 1e3,
        }
    }
}

impl PointSource {
    fn opd(&self, r: f64) -> f64 {
        -r.powf(2.0) / (2.0 * self.dist_lens * self.magnification)
    }
}

/// Radial exponent of a power-law mirror deformation.
///
/// Only these seven exponents are supported. Each carries a fixed scale
/// factor chosen so that a deformation slider spanning `[0, 1]` produces a
/// visually comparable pattern for every power; see
/// [MirrorPower::scale_factor].
/// # Examples
/// ```
/// use michelson::MirrorPower;
/// let power = MirrorPower::try_from_exponent(2.0).unwrap();
/// assert_eq!(power, MirrorPower::Parabolic);
/// assert_eq!(power.scale_factor(), 1e-1);
/// assert!(MirrorPower::try_from_exponent(2.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorPower {
    /// `r^1`, a conical mirror.
    Cone,
    /// `r^1.5`, intermediate.
    R15,
    /// `r^2`, a paraboloidal mirror.
    Parabolic,
    /// `r^2.5`, intermediate.
    R25,
    /// `r^3`.
    Cubic,
    /// `r^3.5`, intermediate.
    R35,
    /// `r^4`.
    Quartic,
}

impl MirrorPower {
    /// Every supported power, in increasing exponent order.
    pub const ALL: [MirrorPower; 7] = [
        MirrorPower::Cone,
        MirrorPower::R15,
        MirrorPower::Parabolic,
        MirrorPower::R25,
        MirrorPower::Cubic,
        MirrorPower::R35,
        MirrorPower::Quartic,
    ];

    /// Map a raw exponent (e.g., a slider value) to a supported power.
    ///
    /// Anything outside the supported set is rejected, never rounded to the
    /// nearest entry.
    pub fn try_from_exponent(power: f64) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|p| p.exponent() == power)
            .ok_or(ConfigError::UnsupportedPower(power))
    }

    /// Exponent applied to the radial distance.
    pub fn exponent(self) -> f64 {
        match self {
            Self::Cone => 1.0,
            Self::R15 => 1.5,
            Self::Parabolic => 2.0,
            Self::R25 => 2.5,
            Self::Cubic => 3.0,
            Self::R35 => 3.5,
            Self::Quartic => 4.0,
        }
    }

    /// Fixed per-power factor applied to the deformation scale.
    ///
    /// Spans 1e-3 for the cone up to 1e3 for the quartic, one decade per
    /// half-power.
    pub fn scale_factor(self) -> f64 {
        match self {
            Self::Cone => 1e-3,
            Self::R15 => 1e-2,
            Self::Parabolic => 1e-1,
            Self::R25 => 1e0,
            Self::Cubic => 1e1,
            Self::R35 => 1e2,
            Self::Quartic => 1e3,
        }
    }

    /// Human-readable shape name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cone => "cone",
            Self::R15 => "r^1.5",
            Self::Parabolic => "paraboloid",
            Self::R25 => "r^2.5",
            Self::Cubic => "cubic",
            Self::R35 => "r^3.5",
            Self::Quartic => "quartic",
        }
    }

    /// Unit of the deformation scale for this power.
    pub fn scale_unit(self) -> &'static str {
        match self {
            Self::Cone => "mrad",
            Self::R15 => "1/m^0.5",
            Self::Parabolic => "1/m",
            Self::R25 => "1/m^1.5",
            Self::Cubic => "1/m^2",
            Self::R35 => "1/m^2.5",
            Self::Quartic => "1/m^3",
        }
    }
}

/// Shape of the mirror terminating the measurement arm.
#[derive(Debug, Clone, PartialEq)]
pub enum MirrorShape {
    /// Perfectly flat mirror; contributes no OPD of its own.
    Flat,
    /// Convex spherical mirror with the given radius of curvature (metres,
    /// strictly positive).
    Spherical { curvature_radius: f64 },
    /// Power-law deformation `-2 r^p * (scale * scale_factor)`.
    PowerLaw { scale: f64, power: MirrorPower },
}

impl MirrorShape {
    fn opd(&self, r: f64) -> f64 {
        match self {
            Self::Flat => 0.0,
            Self::Spherical { curvature_radius } => -r.powf(2.0) / (2.0 * curvature_radius),
            Self::PowerLaw { scale, power } => {
                -2.0 * r.powf(power.exponent()) * (scale * power.scale_factor())
            }
        }
    }
}

/// Parameter set driving one intensity evaluation.
///
/// An ephemeral value object: one per user interaction, never retained past
/// the render it drives.
#[derive(Debug, Clone, PartialEq)]
pub struct OpticalConfig {
    /// Path-length offset between the two arms, metres.
    pub mirror_diff: f64,
    /// Illumination geometry.
    pub source: PointSource,
    /// Measurement-arm mirror.
    pub mirror: MirrorShape,
}

impl OpticalConfig {
    /// Flat measurement mirror: the pattern of the point source alone.
    pub fn flat(mirror_diff: f64) -> Self {
        Self {
            mirror_diff,
            source: PointSource::default(),
            mirror: MirrorShape::Flat,
        }
    }

    /// Convex spherical mirror.
    ///
    /// A zero radius denotes a flat mirror (the instrument's convention for
    /// "no curvature", not an error); a negative radius is rejected.
    pub fn spherical(mirror_diff: f64, curvature_radius: f64) -> Result<Self, ConfigError> {
        if curvature_radius < 0.0 {
            return Err(ConfigError::NegativeCurvature(curvature_radius));
        }
        let mirror = if curvature_radius == 0.0 {
            MirrorShape::Flat
        } else {
            MirrorShape::Spherical { curvature_radius }
        };
        Ok(Self {
            mirror_diff,
            source: PointSource::default(),
            mirror,
        })
    }

    /// Power-law mirror deformation.
    pub fn power_law(mirror_diff: f64, scale: f64, power: MirrorPower) -> Self {
        Self {
            mirror_diff,
            source: PointSource::default(),
            mirror: MirrorShape::PowerLaw { scale, power },
        }
    }

    /// Total optical path difference at radial distance `r` from the axis.
    pub fn opd(&self, r: f64) -> f64 {
        self.mirror_diff + self.source.opd(r) + self.mirror.opd(r)
    }

    /// Whether ring analysis is meaningful for this configuration.
    ///
    /// The sqrt(2) second-ring prediction assumes a spherical mirror, and
    /// below [crate::MIN_RESOLVABLE_CURVATURE] the rings are too tightly
    /// packed to resolve at the default resolution.
    pub fn supports_ring_analysis(&self) -> bool {
        matches!(self.mirror, MirrorShape::Spherical { curvature_radius }
            if curvature_radius > crate::rings::MIN_RESOLVABLE_CURVATURE)
    }
}

/// Interference pattern of one configuration over one grid, evaluated
/// lazily pixel by pixel.
///
/// A pure view of its two borrowed inputs: the actual numbers only exist
/// once [Field::render] (or [compute_intensity]) asks for them.
/// # Examples
/// ```
/// use michelson::*;
///
/// let grid = DetectorGrid::new(0.02, 3);
/// let config = OpticalConfig::flat(0.0);
/// let pattern = FringePattern::new(&grid, &config);
/// println!("{}", pattern);
/// ```
#[derive(Debug)]
pub struct FringePattern<'a> {
    grid: &'a DetectorGrid,
    config: &'a OpticalConfig,
}

impl<'a> FringePattern<'a> {
    /// Define a new pattern. No pixel is evaluated here.
    pub fn new(grid: &'a DetectorGrid, config: &'a OpticalConfig) -> Self {
        Self { grid, config }
    }
}

impl Field for FringePattern<'_> {
    fn shape(&self) -> (usize, usize) {
        (self.grid.res(), self.grid.res())
    }

    fn eval(&self, row: usize, col: usize) -> f64 {
        let opd = self.config.opd(self.grid.radius_at(row, col));
        let phase = 2.0 * PI * opd / WAVELENGTH;
        // two-beam interference of a perfectly coherent, equal-amplitude
        // pair: bounded to [0, 1] with no clamping needed
        0.5 * (1.0 + phase.cos())
    }
}

impl fmt::Display for FringePattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.format(f)
    }
}

/// One rendered `res` x `res` intensity map, values in `[0, 1]`.
///
/// Purely derived from a [DetectorGrid] and an [OpticalConfig]; it has no
/// identity beyond its values and is recomputed in full on every parameter
/// change.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityField {
    res: usize,
    values: Vec<f64>,
}

impl IntensityField {
    /// Wrap an existing row-major buffer.
    ///
    /// Mostly useful for feeding the ring analyser synthetic data; rendered
    /// fields come from [compute_intensity].
    pub fn from_values(res: usize, values: Vec<f64>) -> Self {
        assert_eq!(values.len(), res * res, "buffer does not match resolution");
        Self { res, values }
    }

    /// Pixels per side.
    pub fn res(&self) -> usize {
        self.res
    }

    /// Row-major pixel values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Intensity at pixel `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.res + col]
    }

    /// Radial half-profile: the centre row, from the centre column to the
    /// right edge.
    ///
    /// The field depends on the pixel's distance from the axis only, so one
    /// half-row carries the full radial information.
    pub fn half_profile(&self) -> &[f64] {
        let centre = self.res / 2;
        &self.values[centre * self.res + centre..(centre + 1) * self.res]
    }
}

impl Field for IntensityField {
    fn shape(&self) -> (usize, usize) {
        (self.res, self.res)
    }

    fn eval(&self, row: usize, col: usize) -> f64 {
        self.at(row, col)
    }
}

impl fmt::Display for IntensityField {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.format(f)
    }
}

/// Render the interference intensity of `config` over `grid`.
///
/// A deterministic pure function of its inputs: no caching, no hidden
/// state, full recomputation on every call.
pub fn compute_intensity(grid: &DetectorGrid, config: &OpticalConfig) -> IntensityField {
    IntensityField {
        res: grid.res(),
        values: FringePattern::new(grid, config).render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn small_grid() -> DetectorGrid {
        DetectorGrid::new(0.1, 64)
    }

    #[test]
    fn intensity_stays_within_unit_interval() {
        let grid = small_grid();
        let mut configs = vec![
            OpticalConfig::flat(0.0),
            OpticalConfig::flat(1.5e-6),
            OpticalConfig::spherical(0.0, 2.0).unwrap(),
            OpticalConfig::spherical(-2e-6, 0.7).unwrap(),
        ];
        for power in MirrorPower::ALL {
            configs.push(OpticalConfig::power_law(0.0, 0.8, power));
        }
        for config in &configs {
            let field = compute_intensity(&grid, config);
            for v in field.values() {
                assert!((0.0..=1.0).contains(v), "{:?} produced {}", config, v);
                assert!(v.is_finite());
            }
        }
    }

    #[test]
    fn zero_curvature_matches_flat_mirror() {
        let grid = small_grid();
        let spherical = OpticalConfig::spherical(1e-6, 0.0).unwrap();
        let flat = OpticalConfig::flat(1e-6);
        assert_eq!(spherical, flat);
        assert_eq!(
            compute_intensity(&grid, &spherical),
            compute_intensity(&grid, &flat)
        );
    }

    #[test]
    fn field_is_radially_symmetric() {
        // odd resolution puts a sample exactly on the axis and makes the
        // coordinate axis mirror-symmetric
        let grid = DetectorGrid::new(0.1, 101);
        let config = OpticalConfig::spherical(0.0, 1.0).unwrap();
        let field = compute_intensity(&grid, &config);
        for row in 0..101 {
            for col in 0..101 {
                assert_eq!(field.at(row, col), field.at(col, row));
                assert_abs_diff_eq!(
                    field.at(row, col),
                    field.at(100 - row, 100 - col),
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn centre_is_bright_with_balanced_arms() {
        let grid = DetectorGrid::new(0.1, 101);
        for config in [
            OpticalConfig::flat(0.0),
            OpticalConfig::spherical(0.0, 2.0).unwrap(),
            OpticalConfig::power_law(0.0, 0.5, MirrorPower::Cubic),
        ] {
            let field = compute_intensity(&grid, &config);
            assert_abs_diff_eq!(field.at(50, 50), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn opd_is_finite_on_axis_for_every_power() {
        let config = OpticalConfig::power_law(0.0, 1.0, MirrorPower::Cone);
        assert_eq!(config.opd(0.0), 0.0);
        for power in MirrorPower::ALL {
            let config = OpticalConfig::power_law(0.5e-6, 1.0, power);
            assert!(config.opd(0.0).is_finite());
        }
    }

    #[test]
    fn power_table_is_exact() {
        let factors: Vec<f64> = MirrorPower::ALL.iter().map(|p| p.scale_factor()).collect();
        assert_eq!(factors, vec![1e-3, 1e-2, 1e-1, 1e0, 1e1, 1e2, 1e3]);
        let exponents: Vec<f64> = MirrorPower::ALL.iter().map(|p| p.exponent()).collect();
        assert_eq!(exponents, vec![1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]);
    }

    #[test]
    fn unsupported_power_is_rejected() {
        for power in [0.5, 1.2, 2.2, 4.5, -1.0, f64::NAN] {
            match MirrorPower::try_from_exponent(power) {
                Err(ConfigError::UnsupportedPower(p)) => {
                    assert!(p == power || (p.is_nan() && power.is_nan()))
                }
                other => panic!("expected UnsupportedPower, got {:?}", other),
            }
        }
    }

    #[test]
    fn negative_curvature_is_rejected() {
        assert_eq!(
            OpticalConfig::spherical(0.0, -1.0),
            Err(ConfigError::NegativeCurvature(-1.0))
        );
    }

    #[test]
    fn ring_analysis_gate() {
        assert!(OpticalConfig::spherical(0.0, 2.0)
            .unwrap()
            .supports_ring_analysis());
        // at or below the resolvability threshold
        assert!(!OpticalConfig::spherical(0.0, 0.3)
            .unwrap()
            .supports_ring_analysis());
        assert!(!OpticalConfig::spherical(0.0, 0.0)
            .unwrap()
            .supports_ring_analysis());
        assert!(!OpticalConfig::flat(0.0).supports_ring_analysis());
        assert!(
            !OpticalConfig::power_law(0.0, 0.5, MirrorPower::Parabolic).supports_ring_analysis()
        );
    }

    #[test]
    fn half_profile_starts_at_centre_row() {
        let grid = small_grid();
        let config = OpticalConfig::spherical(0.0, 2.0).unwrap();
        let field = compute_intensity(&grid, &config);
        let profile = field.half_profile();
        assert_eq!(profile.len(), 32);
        assert_eq!(profile[0], field.at(32, 32));
        assert_eq!(profile[31], field.at(32, 63));
    }
}
