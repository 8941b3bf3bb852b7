//! Camera resolution values and their `"<width>x<height>"` string form.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSizeError {
    #[error("size string {0:?} has no 'x' or '*' separator")]
    MissingSeparator(String),

    #[error("invalid dimension in size string {0:?}")]
    InvalidDimension(String),
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl FromStr for Size {
    type Err = ParseSizeError;

    /// Accepts `"640x480"` and `"640*480"`. `'*'` is checked first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once('*')
            .or_else(|| s.split_once('x'))
            .ok_or_else(|| ParseSizeError::MissingSeparator(s.to_string()))?;
        let dim = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| ParseSizeError::InvalidDimension(s.to_string()))
        };
        Ok(Size::new(dim(w)?, dim(h)?))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
