use std::fmt;

use crate::error::{Error, Result};

/// Strength of a single filter, `0..=1000`. Zero disables the filter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Intensity(u16);

impl Intensity {
    pub const MAX: u16 = 1000;
    pub const FULL: Intensity = Intensity(Self::MAX);

    pub fn new(value: u16) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::IntensityOutOfRange(value as u32));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0 as u32
    }

    pub fn is_off(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u32> for Intensity {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        u16::try_from(value)
            .map_err(|_| Error::IntensityOutOfRange(value))
            .and_then(Self::new)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
