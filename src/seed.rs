//! Seed input validation

use std::fmt::Display;

/// Seed as given by a caller, before validation
#[derive(Debug, Clone, PartialEq)]
pub enum SeedValue {
    Int(i64),
    Text(String),
}

/// Error from [`SeedValue::parse`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedError {
    #[error("seed is not a number: {0:?}")]
    NotNumeric(String),
    #[error("seed is not an integer: {0}")]
    NotInteger(f64),
}

impl SeedValue {
    /// Validate into an integer seed
    ///
    /// Text is trimmed and may be an integer or a float with no fractional
    /// part, like `"12"` or `"12.0"`.
    pub fn parse(&self) -> Result<i64, SeedError> {
        let text = match self {
            SeedValue::Int(n) => return Ok(*n),
            SeedValue::Text(t) => t.trim(),
        };
        if let Ok(n) = text.parse::<i64>() {
            return Ok(n);
        }
        let f = text
            .parse::<f64>()
            .map_err(|_| SeedError::NotNumeric(text.to_string()))?;
        if !f.is_finite() {
            return Err(SeedError::NotNumeric(text.to_string()));
        }
        if f.fract() != 0.0 || f < i64::MIN as f64 || f >= i64::MAX as f64 {
            return Err(SeedError::NotInteger(f));
        }
        Ok(f as i64)
    }
}

impl From<i64> for SeedValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SeedValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for SeedValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<&str> for SeedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SeedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Display for SeedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedValue::Int(n) => n.fmt(f),
            SeedValue::Text(t) => write!(f, "{t:?}"),
        }
    }
}
