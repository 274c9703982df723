//! Error type shared by every fallible operation in the crate.
//!
//! Two kinds only:
//! - `InvalidArgument`: the input has the wrong shape (non-finite number, bad
//!   axis token, too few vertices, zero window step).
//! - `Domain`: the input is well-formed but outside the allowed range (zero
//!   scale factor, fractional count, empty aggregate input).
//!
//! Errors are raised where the precondition is checked, which is always the
//! call that builds an operation. Lazy sequences never fail mid-iteration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("domain error: {reason}")]
    Domain { reason: String },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    #[inline]
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject NaN and infinities for a named scalar parameter.
#[inline]
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid(format!("{name} must be a finite number, got {value}")))
    }
}
