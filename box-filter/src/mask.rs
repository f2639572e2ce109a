use tracing::{debug, warn};

use crate::{Density, Diameter, RadiusBand};

/// Everything needed to generate a [`Mask`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskParams {
    pub diameter: Diameter,
    pub band: RadiusBand,
    pub density: Density,
}

impl MaskParams {
    /// Params with the default band and density.
    #[must_use]
    pub fn new(diameter: Diameter) -> Self {
        Self {
            diameter,
            band: RadiusBand::default(),
            density: Density::default(),
        }
    }

    #[must_use]
    pub fn with_band(self, band: RadiusBand) -> Self {
        Self { band, ..self }
    }

    #[must_use]
    pub fn with_density(self, density: Density) -> Self {
        Self { density, ..self }
    }
}

/// A square grid of on/off cells, stored row-major.
///
/// Row `y` runs top to bottom, column `x` left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    diameter: Diameter,
    cells: Vec<bool>,
}

impl Mask {
    /// Evaluates every cell of a `d`x`d` grid.
    ///
    /// The center is always on. Any other cell is on when its distance from
    /// the center lies inside `params.band` and `params.density` selects it.
    #[must_use]
    pub fn generate(params: &MaskParams) -> Self {
        let MaskParams {
            diameter,
            band,
            density,
        } = *params;
        if band.is_inverted() {
            warn!(
                inner = band.inner,
                outer = band.outer,
                "inner radius exceeds outer radius, only the center will be set"
            );
        }

        let d = diameter.get();
        let c = diameter.center();
        let mut cells = Vec::with_capacity(diameter.as_usize() * diameter.as_usize());
        for y in 0..d {
            for x in 0..d {
                let dx = x.abs_diff(c);
                let dy = y.abs_diff(c);
                let on = if dx == 0 && dy == 0 {
                    true
                } else {
                    let r = f64::from(dx).hypot(f64::from(dy));
                    band.contains(r) && density.selects(x, y)
                };
                cells.push(on);
            }
        }

        let mask = Self { diameter, cells };
        debug!(
            %diameter,
            %density,
            inner = band.inner,
            outer = band.outer,
            on = mask.on_count(),
            "generated mask"
        );
        mask
    }

    #[must_use]
    pub fn diameter(&self) -> Diameter {
        self.diameter
    }

    /// State of the cell at column `x`, row `y`.
    ///
    /// # Panics
    /// If `x` or `y` is outside the grid.
    #[must_use]
    pub fn is_on(&self, x: u32, y: u32) -> bool {
        let d = self.diameter.get();
        assert!(x < d && y < d, "cell ({x}, {y}) outside {d}x{d} mask");
        self.cells[y as usize * self.diameter.as_usize() + x as usize]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.diameter.as_usize())
    }

    /// Cell values as 0/1, row-major.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().map(|&on| u8::from(on))
    }

    #[must_use]
    pub fn on_count(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }
}
