use rayon::prelude::*;
use std::fmt;

/// Scalar field over a rectangular pixel grid, evaluated lazily per pixel.
///
/// Implementors provide the shape and a per-pixel [Field::eval]; the trait
/// supplies parallel rendering of the whole field and a formatter that can
/// back a [std::fmt::Display] implementation. Evaluation is *lazy*: nothing
/// is computed until [Field::render] (or a display) asks for it, and it is
/// recomputed on every request.
pub trait Field {
    /// `(rows, cols)` of the sampled field.
    fn shape(&self) -> (usize, usize);

    /// Evaluate the field at pixel `(row, col)`.
    fn eval(&self, row: usize, col: usize) -> f64;

    /// Render the whole field into a (C-format / row-major) array, one pixel
    /// per element, e.g., to be saved to disk.
    ///
    /// Rows are evaluated in parallel. Pixels are independent, so the result
    /// does not depend on the number of threads.
    fn render(&self) -> Vec<f64>
    where
        Self: Sync,
    {
        let (nrows, ncols) = self.shape();
        (0..nrows)
            .into_par_iter()
            .flat_map_iter(move |row| (0..ncols).map(move |col| self.eval(row, col)))
            .collect()
    }

    /// format function, which can be used when implementing Display
    fn format(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let (nrows, ncols) = self.shape();
        for row in 0..nrows {
            match row {
                0 => write!(f, "[[")?,
                _ => write!(f, "\n [")?,
            }
            for col in 0..ncols {
                write!(f, " {:5.2}", self.eval(row, col))?;
            }
            write!(f, " ]")?;
        }
        write!(f, "]")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp {
        rows: usize,
        cols: usize,
    }

    impl Field for Ramp {
        fn shape(&self) -> (usize, usize) {
            (self.rows, self.cols)
        }
        fn eval(&self, row: usize, col: usize) -> f64 {
            (row * self.cols + col) as f64
        }
    }

    #[test]
    fn render_is_row_major() {
        let ramp = Ramp { rows: 3, cols: 4 };
        let values = ramp.render();
        assert_eq!(values.len(), 12);
        for (i, v) in values.iter().enumerate() {
            assert_eq!(*v, i as f64);
        }
    }

    #[test]
    fn format_prints_every_row() {
        struct Shown(Ramp);
        impl fmt::Display for Shown {
            fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
                self.0.format(f)
            }
        }
        let text = format!("{}", Shown(Ramp { rows: 2, cols: 2 }));
        assert_eq!(text, "[[  0.00  1.00 ]\n [  2.00  3.00 ]]");
    }
}
