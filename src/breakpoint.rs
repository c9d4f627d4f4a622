//! Named width breakpoints and the table that classifies widths into them.
//!
//! Thresholds are inclusive lower bounds: a width equal to a threshold belongs
//! to that breakpoint. Anything below the smallest threshold lands in the
//! synthetic [`ScreenSizeBp::Base`] bucket.
//!
//! ```rust
//! use stratum::breakpoint::{Breakpoint, GridBreakpoints, ScreenSizeBp};
//!
//! let grid = GridBreakpoints::DEFAULT;
//! assert_eq!(grid.classify(grid.threshold(Breakpoint::Md)), ScreenSizeBp::Md);
//! assert_eq!(grid.classify(0.0), ScreenSizeBp::Base);
//! ```

use std::ops::Range;

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// A named breakpoint, ordered from the smallest threshold to the largest.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// Every breakpoint in ascending threshold order.
    pub const ALL: [Breakpoint; Breakpoint::COUNT] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Breakpoints from the largest threshold down to the smallest, the order
    /// classification and resolution scan in.
    pub fn descending() -> impl Iterator<Item = Breakpoint> {
        Self::ALL.into_iter().rev()
    }

    /// The next smaller breakpoint, or `None` for [`Breakpoint::Xs`].
    pub const fn smaller(self) -> Option<Breakpoint> {
        match self {
            Breakpoint::Xs => None,
            Breakpoint::Sm => Some(Breakpoint::Xs),
            Breakpoint::Md => Some(Breakpoint::Sm),
            Breakpoint::Lg => Some(Breakpoint::Md),
            Breakpoint::Xl => Some(Breakpoint::Lg),
            Breakpoint::Xxl => Some(Breakpoint::Xl),
        }
    }

    /// The next larger breakpoint, or `None` for [`Breakpoint::Xxl`].
    pub const fn larger(self) -> Option<Breakpoint> {
        match self {
            Breakpoint::Xs => Some(Breakpoint::Sm),
            Breakpoint::Sm => Some(Breakpoint::Md),
            Breakpoint::Md => Some(Breakpoint::Lg),
            Breakpoint::Lg => Some(Breakpoint::Xl),
            Breakpoint::Xl => Some(Breakpoint::Xxl),
            Breakpoint::Xxl => None,
        }
    }
}

/// The bucket a concrete width falls into.
///
/// Classification is total: every width maps to exactly one bucket, with
/// `Base` covering everything below the smallest named threshold.
#[derive(
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ScreenSizeBp {
    #[default]
    Base,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl ScreenSizeBp {
    /// The named breakpoint for this bucket, `None` for `Base`.
    pub const fn breakpoint(self) -> Option<Breakpoint> {
        match self {
            ScreenSizeBp::Base => None,
            ScreenSizeBp::Xs => Some(Breakpoint::Xs),
            ScreenSizeBp::Sm => Some(Breakpoint::Sm),
            ScreenSizeBp::Md => Some(Breakpoint::Md),
            ScreenSizeBp::Lg => Some(Breakpoint::Lg),
            ScreenSizeBp::Xl => Some(Breakpoint::Xl),
            ScreenSizeBp::Xxl => Some(Breakpoint::Xxl),
        }
    }

    pub const fn is_base(self) -> bool {
        matches!(self, ScreenSizeBp::Base)
    }
}

impl From<Breakpoint> for ScreenSizeBp {
    fn from(bp: Breakpoint) -> Self {
        match bp {
            Breakpoint::Xs => ScreenSizeBp::Xs,
            Breakpoint::Sm => ScreenSizeBp::Sm,
            Breakpoint::Md => ScreenSizeBp::Md,
            Breakpoint::Lg => ScreenSizeBp::Lg,
            Breakpoint::Xl => ScreenSizeBp::Xl,
            Breakpoint::Xxl => ScreenSizeBp::Xxl,
        }
    }
}

/// Rejections produced when building a custom [`GridBreakpoints`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakpointError {
    #[error("threshold for `{breakpoint}` must be a finite, non-negative width, got {value}")]
    InvalidThreshold { breakpoint: Breakpoint, value: f64 },
    #[error(
        "threshold for `{larger}` ({larger_value}px) must be greater than `{smaller}` ({smaller_value}px)"
    )]
    NotIncreasing {
        smaller: Breakpoint,
        smaller_value: f64,
        larger: Breakpoint,
        larger_value: f64,
    },
}

/// Thresholds spelled out by name, the shape a table takes in configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct GridThresholds {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub xxl: f64,
}

/// Width breakpoints in pixels, strictly increasing.
///
/// A table never changes once built. [`GridBreakpoints::DEFAULT`] is the
/// process-wide table the free functions in this module use.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridThresholds", into = "GridThresholds")
)]
pub struct GridBreakpoints {
    thresholds: [f64; Breakpoint::COUNT],
}

impl Default for GridBreakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl GridBreakpoints {
    pub const DEFAULT: GridBreakpoints = GridBreakpoints {
        thresholds: [320.0, 800.0, 1020.0, 1280.0, 1440.0, 1920.0],
    };

    /// Builds a table from thresholds in ascending breakpoint order.
    pub fn new(thresholds: [f64; Breakpoint::COUNT]) -> Result<Self, BreakpointError> {
        for bp in Breakpoint::ALL {
            let value = thresholds[bp.index()];
            if !value.is_finite() || value < 0.0 {
                return Err(BreakpointError::InvalidThreshold {
                    breakpoint: bp,
                    value,
                });
            }
            if let Some(smaller) = bp.smaller() {
                let smaller_value = thresholds[smaller.index()];
                if value <= smaller_value {
                    return Err(BreakpointError::NotIncreasing {
                        smaller,
                        smaller_value,
                        larger: bp,
                        larger_value: value,
                    });
                }
            }
        }
        Ok(Self { thresholds })
    }

    /// The inclusive lower bound of `bp`, in pixels.
    pub const fn threshold(&self, bp: Breakpoint) -> f64 {
        self.thresholds[bp.index()]
    }

    /// Every breakpoint paired with its threshold, ascending.
    pub fn thresholds(&self) -> impl Iterator<Item = (Breakpoint, f64)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .map(|bp| (bp, self.threshold(bp)))
    }

    /// Classifies `width` as the largest breakpoint whose threshold it meets,
    /// or `Base` when it is below all of them. NaN classifies as `Base`.
    pub fn classify(&self, width: f64) -> ScreenSizeBp {
        Breakpoint::descending()
            .find(|bp| self.threshold(*bp) <= width)
            .map_or(ScreenSizeBp::Base, ScreenSizeBp::from)
    }

    /// The half-open width range covered by `bucket`.
    pub fn range_of(&self, bucket: ScreenSizeBp) -> Range<f64> {
        let start = bucket
            .breakpoint()
            .map_or(f64::NEG_INFINITY, |bp| self.threshold(bp));
        let end = match bucket.breakpoint() {
            None => self.threshold(Breakpoint::Xs),
            Some(bp) => bp.larger().map_or(f64::INFINITY, |next| self.threshold(next)),
        };
        start..end
    }

    pub fn at_least(&self, width: f64, bp: Breakpoint) -> bool {
        width >= self.threshold(bp)
    }

    pub fn below(&self, width: f64, bp: Breakpoint) -> bool {
        width < self.threshold(bp)
    }
}

impl TryFrom<GridThresholds> for GridBreakpoints {
    type Error = BreakpointError;

    fn try_from(t: GridThresholds) -> Result<Self, Self::Error> {
        Self::new([t.xs, t.sm, t.md, t.lg, t.xl, t.xxl])
    }
}

impl From<GridBreakpoints> for GridThresholds {
    fn from(grid: GridBreakpoints) -> Self {
        let [xs, sm, md, lg, xl, xxl] = grid.thresholds;
        Self {
            xs,
            sm,
            md,
            lg,
            xl,
            xxl,
        }
    }
}

/// Threshold of `bp` in the default table.
pub const fn threshold(bp: Breakpoint) -> f64 {
    GridBreakpoints::DEFAULT.threshold(bp)
}

/// Classifies `width` against the default table.
pub fn classify(width: f64) -> ScreenSizeBp {
    GridBreakpoints::DEFAULT.classify(width)
}
