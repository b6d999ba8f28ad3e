//! Domain-error policy configuration.
//!
//! Every fallible routine (`exp`, `log`, `pow`) has a checked `try_*` form that
//! returns [`MathError`](crate::MathError) and a `*_with` form that takes the
//! policy explicitly. The plain forms use [`DEFAULT_POLICY`], fixed at build
//! time:
//! - `strict` (default): out-of-domain arguments produce `NaN`, the
//!   domain-error signal.
//! - `hardened` (cargo feature `hardened`): out-of-domain arguments produce a
//!   deterministic finite substitute (saturate to `f32::MAX`/`f32::MIN`, flush
//!   to zero).
//!
//! There is no runtime switch, so a plain call's result depends on its
//! arguments alone.

/// How out-of-domain arguments are answered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainPolicy {
    /// Out-of-domain results are `NaN`.
    #[default]
    Strict,
    /// Out-of-domain results are replaced by finite substitutes.
    Hardened,
}

/// Policy applied by the plain math functions.
#[cfg(not(feature = "hardened"))]
pub const DEFAULT_POLICY: DomainPolicy = DomainPolicy::Strict;

/// Policy applied by the plain math functions.
#[cfg(feature = "hardened")]
pub const DEFAULT_POLICY: DomainPolicy = DomainPolicy::Hardened;

impl DomainPolicy {
    /// Parse `strict` or `hardened` (case-insensitive).
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("strict") {
            Some(Self::Strict)
        } else if s.eq_ignore_ascii_case("hardened") {
            Some(Self::Hardened)
        } else {
            None
        }
    }

    /// Returns true if errors are replaced by finite substitutes.
    #[must_use]
    pub const fn heals_enabled(self) -> bool {
        matches!(self, Self::Hardened)
    }

    /// Lowercase name, as accepted by [`DomainPolicy::from_name`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Hardened => "hardened",
        }
    }
}
