use crate::geometry::{linspace, Vec2D};

/// Immutable description of the observation plane.
///
/// Holds the physical width and pixel resolution of the square detector
/// together with the precomputed radial distance of every pixel from the
/// optical axis. A [DetectorGrid] is constructed once at startup and passed
/// by reference into every evaluation; it is never mutated afterwards, so it
/// can be shared freely across threads without locking.
/// # Examples
/// ```
/// let grid = michelson::DetectorGrid::new(0.1, 1000);
/// assert_eq!(grid.res(), 1000);
/// assert_eq!(grid.axis()[0], -0.05);
/// assert!((grid.axis()[999] - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DetectorGrid {
    screen_size: f64,
    res: usize,
    axis: Vec<f64>,
    radius: Vec<f64>,
}

impl DetectorGrid {
    /// Build a grid for a square screen of physical width `screen_size`
    /// (metres), sampled at `res` x `res` pixels.
    ///
    /// `res` must be at least 2.
    pub fn new(screen_size: f64, res: usize) -> Self {
        let axis = linspace(-screen_size / 2.0, screen_size / 2.0, res);
        let mut radius = Vec::with_capacity(res * res);
        for y in &axis {
            for x in &axis {
                radius.push(Vec2D::new(*x, *y).norm());
            }
        }
        Self {
            screen_size,
            res,
            axis,
            radius,
        }
    }

    /// Physical width of the screen, metres.
    pub fn screen_size(&self) -> f64 {
        self.screen_size
    }

    /// Pixels per side.
    pub fn res(&self) -> usize {
        self.res
    }

    /// Pixel-to-pixel spacing along one axis, metres.
    pub fn pixel_pitch(&self) -> f64 {
        self.screen_size / (self.res as f64 - 1.0)
    }

    /// The coordinate axis shared by both screen dimensions, from
    /// `-screen_size/2` to `+screen_size/2`.
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// Index of the centre row/column.
    pub fn centre(&self) -> usize {
        self.res / 2
    }

    /// Radial distance of pixel `(row, col)` from the optical axis, metres.
    pub fn radius_at(&self, row: usize, col: usize) -> f64 {
        self.radius[row * self.res + col]
    }
}
