use std::{fmt, str::FromStr};

use crate::Error;

/// Side length of a mask. Always odd and at least 1, so the grid has a single
/// center cell.
///
/// 3 is the smallest diameter that produces anything besides the center, but
/// 1 is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Diameter(u32);

impl Diameter {
    pub fn new(d: u32) -> Result<Self, Error> {
        if d == 0 || d % 2 == 0 {
            return Err(Error::InvalidDiameter {
                input: d.to_string(),
            });
        }
        Ok(Self(d))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of cells per row, as an index type.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Row and column index of the center cell.
    #[must_use]
    pub const fn center(self) -> u32 {
        (self.0 - 1) / 2
    }
}

impl FromStr for Diameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDiameter {
            input: s.to_owned(),
        };
        let d: u32 = s.trim().parse().map_err(|_| invalid())?;
        Self::new(d).map_err(|_| invalid())
    }
}

impl fmt::Display for Diameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Diameter> for u32 {
    fn from(d: Diameter) -> Self {
        d.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_accepts_odd_values() {
        for d in [1, 3, 5, 31, 101] {
            assert_eq!(Diameter::new(d).unwrap().get(), d);
            assert_eq!(d.to_string().parse::<Diameter>().unwrap().get(), d);
        }
    }

    #[test]
    fn test_rejects_even_zero_and_garbage() {
        let test_cases = ["0", "2", "4", "100", "-3", "-1", "3.0", "abc", ""];
        for (i, input) in test_cases.into_iter().enumerate() {
            assert_eq!(
                input.parse::<Diameter>(),
                Err(Error::InvalidDiameter {
                    input: input.to_owned()
                }),
                "{i}th case failed"
            );
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(Diameter::new(1).unwrap().center(), 0);
        assert_eq!(Diameter::new(3).unwrap().center(), 1);
        assert_eq!(Diameter::new(9).unwrap().center(), 4);
    }
}
