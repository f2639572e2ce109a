use crate::Error;

pub const DEFAULT_INNER_RADIUS: f64 = 0.0;
pub const DEFAULT_OUTER_RADIUS: f64 = 9999.0;

/// Closed interval `[inner, outer]` of distances from the mask center.
///
/// No ordering is enforced between the bounds. An inverted band contains no
/// distance at all, which leaves only the forced center cell on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusBand {
    pub inner: f64,
    pub outer: f64,
}

impl RadiusBand {
    #[must_use]
    pub const fn new(inner: f64, outer: f64) -> Self {
        Self { inner, outer }
    }

    #[must_use]
    pub fn contains(&self, r: f64) -> bool {
        r >= self.inner && r <= self.outer
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inner > self.outer
    }
}

impl Default for RadiusBand {
    fn default() -> Self {
        Self::new(DEFAULT_INNER_RADIUS, DEFAULT_OUTER_RADIUS)
    }
}

/// Parses a radius bound. Anything `f64` accepts is fine except NaN, which
/// would silently empty the band.
pub fn parse_radius(s: &str) -> Result<f64, Error> {
    let r: f64 = s.trim().parse().map_err(|e: std::num::ParseFloatError| {
        Error::InvalidRadius {
            input: s.to_owned(),
            reason: e.to_string(),
        }
    })?;
    if r.is_nan() {
        return Err(Error::InvalidRadius {
            input: s.to_owned(),
            reason: "not a number".to_owned(),
        });
    }
    Ok(r)
}
