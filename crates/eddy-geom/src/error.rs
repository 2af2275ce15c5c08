use std::fmt;

/// Errors surfaced by the geometry components.
///
/// Precondition variants are raised before any computation happens; `Numeric`
/// means the input was well-formed but the fit is meaningless (treat the
/// contour as unfittable).
#[derive(Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Two arrays that must be parallel have different lengths.
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },
    /// Fewer points than the operation needs.
    TooFewPoints { needed: usize, got: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// The query point is NaN or infinite.
    NonFiniteTarget,
    /// Half-open range `[start, end)` holds no element.
    EmptyRange { start: usize, end: usize },
    /// Range end past the end of the arrays.
    OutOfBounds { end: usize, len: usize },
    /// Level index outside the collection.
    InvalidLevel { level: usize, levels: usize },
    /// CSR arrays violate the layout invariants.
    InvalidCollection { reason: String },
    /// Singular or non-finite least-squares result, zero radius.
    Numeric { reason: String },
}

impl GeomError {
    pub(crate) fn numeric(reason: impl Into<String>) -> Self {
        Self::Numeric {
            reason: reason.into(),
        }
    }

    pub(crate) fn collection(reason: impl Into<String>) -> Self {
        Self::InvalidCollection {
            reason: reason.into(),
        }
    }

    /// True for the precondition family (caller bug), false for numeric failure.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, Self::Numeric { .. })
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { what, left, right } => {
                write!(f, "{what}: length mismatch ({left} vs {right})")
            }
            Self::TooFewPoints { needed, got } => {
                write!(f, "need at least {needed} points, got {got}")
            }
            Self::NonFinite { index } => write!(f, "non-finite coordinate at index {index}"),
            Self::NonFiniteTarget => write!(f, "non-finite query point"),
            Self::EmptyRange { start, end } => write!(f, "empty range [{start}, {end})"),
            Self::OutOfBounds { end, len } => {
                write!(f, "range end {end} exceeds array length {len}")
            }
            Self::InvalidLevel { level, levels } => {
                write!(f, "level {level} out of range (collection has {levels} levels)")
            }
            Self::InvalidCollection { reason } => write!(f, "invalid contour collection: {reason}"),
            Self::Numeric { reason } => write!(f, "numeric failure: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}

/// Reject parallel slices of different lengths.
#[inline]
pub(crate) fn check_same_len(what: &'static str, left: usize, right: usize) -> Result<(), GeomError> {
    if left != right {
        tracing::debug!(what, left, right, "length mismatch");
        return Err(GeomError::LengthMismatch { what, left, right });
    }
    Ok(())
}

/// Reject NaN/inf in parallel slices; `index` in the error is `offset + k`.
pub(crate) fn check_finite(x: &[f64], y: &[f64], offset: usize) -> Result<(), GeomError> {
    if let Some(k) = x
        .iter()
        .zip(y)
        .position(|(a, b)| !a.is_finite() || !b.is_finite())
    {
        let index = offset + k;
        tracing::debug!(index, "non-finite vertex");
        return Err(GeomError::NonFinite { index });
    }
    Ok(())
}

/// Reject a NaN/inf query point.
#[inline]
pub(crate) fn check_finite_target(px: f64, py: f64) -> Result<(), GeomError> {
    if px.is_finite() && py.is_finite() {
        Ok(())
    } else {
        tracing::debug!(px, py, "non-finite query point");
        Err(GeomError::NonFiniteTarget)
    }
}
