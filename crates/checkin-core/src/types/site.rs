//! Exam site enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One of the two exam sites (rooms) participants are seated in.
///
/// Serialized as its number (`1` or `2`) so stored documents and API
/// payloads carry plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Site {
    /// Site number 1.
    One,
    /// Site number 2.
    Two,
}

impl Site {
    /// All sites in ascending order.
    pub const ALL: [Site; 2] = [Site::One, Site::Two];

    /// The site's number.
    pub fn number(self) -> u8 {
        match self {
            Site::One => 1,
            Site::Two => 2,
        }
    }
}

impl TryFrom<u8> for Site {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Site::One),
            2 => Ok(Site::Two),
            _ => Err(AppError::validation("wrong site")),
        }
    }
}

impl From<Site> for u8 {
    fn from(site: Site) -> Self {
        site.number()
    }
}

impl FromStr for Site {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|_| AppError::validation("wrong site"))?;
        Site::try_from(n)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
