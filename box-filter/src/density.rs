//! Sub-sampling rules applied to cells that fall inside the radius band.

use std::fmt;

use serde::Serialize;

/// How densely the cells inside the radius band get switched on.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    /// Every candidate cell.
    #[default]
    All,
    /// Checkerboard: cells where `x + y` is odd.
    #[value(name = "oddeven")]
    OddEven,
    /// Even rows only, every other cell, with the phase shifted every two
    /// rows.
    Quarter,
    /// Diagonal stripes hitting one cell in five.
    #[value(name = "onefifth")]
    OneFifth,
}

impl Density {
    /// Modes that can be picked by a bare word on the command line. `all` is
    /// the fallback and is never matched by [`Density::scan`].
    pub const SCANNED: [Density; 3] =
        [Density::OddEven, Density::Quarter, Density::OneFifth];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Density::All => "all",
            Density::OddEven => "oddeven",
            Density::Quarter => "quarter",
            Density::OneFifth => "onefifth",
        }
    }

    /// Looks for the first token naming one of [`Density::SCANNED`].
    ///
    /// Tokens are compared exactly. Anything else is skipped, so unknown words
    /// never fail the scan.
    pub fn scan<I, S>(tokens: I) -> Option<Density>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens.into_iter().find_map(|t| {
            Self::SCANNED
                .into_iter()
                .find(|d| d.as_str() == t.as_ref())
        })
    }

    /// Whether the cell at column `x`, row `y` survives sub-sampling.
    ///
    /// Only meaningful for cells already inside the radius band.
    #[must_use]
    pub fn selects(self, x: u32, y: u32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        match self {
            Density::All => true,
            Density::OddEven => (x + y) % 2 == 1,
            // y / 2 is floor division on purpose, it sets the row phase.
            Density::Quarter => (x + y / 2) % 2 == 0 && y % 2 == 0,
            // rem_euclid keeps the residue non-negative once 3y outgrows the
            // offset.
            Density::OneFifth => (1000 + x - 3 * y).rem_euclid(5) == 0,
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
