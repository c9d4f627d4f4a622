use std::ops::{BitOr, RangeBounds};

use bitflags::bitflags;

use crate::breakpoint::{Breakpoint, ScreenSizeBp};

bitflags! {
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash)]
  #[must_use]
  pub struct SizeFlags: u8 {
    const BASE = 1;
    const XS = 2;
    const SM = 4;
    const MD = 8;
    const LG = 16;
    const XL = 32;
    const XXL = 64;
  }
}

impl From<ScreenSizeBp> for SizeFlags {
    fn from(bucket: ScreenSizeBp) -> Self {
        match bucket {
            ScreenSizeBp::Base => SizeFlags::BASE,
            ScreenSizeBp::Xs => SizeFlags::XS,
            ScreenSizeBp::Sm => SizeFlags::SM,
            ScreenSizeBp::Md => SizeFlags::MD,
            ScreenSizeBp::Lg => SizeFlags::LG,
            ScreenSizeBp::Xl => SizeFlags::XL,
            ScreenSizeBp::Xxl => SizeFlags::XXL,
        }
    }
}

const BUCKETS: [ScreenSizeBp; 7] = [
    ScreenSizeBp::Base,
    ScreenSizeBp::Xs,
    ScreenSizeBp::Sm,
    ScreenSizeBp::Md,
    ScreenSizeBp::Lg,
    ScreenSizeBp::Xl,
    ScreenSizeBp::Xxl,
];

fn next(size: ScreenSize) -> ScreenSize {
    ScreenSize::new(SizeFlags::from_bits_truncate(size.flags.bits() << 1))
}

fn prev(size: ScreenSize) -> ScreenSize {
    ScreenSize::new(SizeFlags::from_bits_truncate(size.flags.bits() >> 1))
}

/// Every bucket between the two bounds.
///
/// ```rust
/// use stratum::responsive::{range, ScreenSize};
/// use stratum::breakpoint::ScreenSizeBp;
///
/// let tablet_up = range(ScreenSize::SM..);
/// assert!(tablet_up.contains(ScreenSizeBp::Xxl));
/// assert!(!tablet_up.contains(ScreenSizeBp::Xs));
/// ```
pub fn range<R: RangeBounds<ScreenSize>>(range: R) -> ScreenSize {
    let start = match range.start_bound() {
        std::ops::Bound::Included(i) => *i,
        std::ops::Bound::Excluded(e) => next(*e),
        std::ops::Bound::Unbounded => ScreenSize::BASE,
    };
    let end = match range.end_bound() {
        std::ops::Bound::Included(s) => *s,
        std::ops::Bound::Excluded(e) => prev(*e),
        std::ops::Bound::Unbounded => ScreenSize::XXL,
    };
    // A bound made of several buckets contributes its lowest bucket as the
    // start and its highest as the end.
    let (Some(lowest_start), Some(highest_end)) =
        (start.flags.iter().next(), end.flags.iter().last())
    else {
        return ScreenSize::EMPTY;
    };
    if highest_end.bits() < lowest_start.bits() {
        return ScreenSize::EMPTY;
    }

    let mask = highest_end.bits() - lowest_start.bits();
    ScreenSize::new(SizeFlags::from_bits_truncate(
        highest_end.bits() | mask | lowest_start.bits(),
    ))
}

/// A set of classification buckets, used to say where something applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ScreenSize {
    flags: SizeFlags,
}

impl ScreenSize {
    pub const EMPTY: ScreenSize = ScreenSize::new(SizeFlags::empty());
    pub const BASE: ScreenSize = ScreenSize::new(SizeFlags::BASE);
    pub const XS: ScreenSize = ScreenSize::new(SizeFlags::XS);
    pub const SM: ScreenSize = ScreenSize::new(SizeFlags::SM);
    pub const MD: ScreenSize = ScreenSize::new(SizeFlags::MD);
    pub const LG: ScreenSize = ScreenSize::new(SizeFlags::LG);
    pub const XL: ScreenSize = ScreenSize::new(SizeFlags::XL);
    pub const XXL: ScreenSize = ScreenSize::new(SizeFlags::XXL);

    /// Widths below `sm`.
    pub const MOBILE: ScreenSize = ScreenSize::new(SizeFlags::BASE.union(SizeFlags::XS));
    /// Widths from `sm` up to, but not including, `lg`.
    pub const TABLET: ScreenSize = ScreenSize::new(SizeFlags::SM.union(SizeFlags::MD));
    /// Widths from `lg` up.
    pub const DESKTOP: ScreenSize =
        ScreenSize::new(SizeFlags::LG.union(SizeFlags::XL).union(SizeFlags::XXL));

    const fn new(flags: SizeFlags) -> Self {
        Self { flags }
    }

    pub const fn not(size: ScreenSize) -> Self {
        let flags = SizeFlags::all().difference(size.flags);
        Self { flags }
    }

    /// Buckets at or above `bp`.
    pub fn at_least(bp: Breakpoint) -> Self {
        range(ScreenSize::from(bp)..)
    }

    /// Buckets strictly below `bp`.
    pub fn below(bp: Breakpoint) -> Self {
        range(..ScreenSize::from(bp))
    }

    pub const fn flags(&self) -> SizeFlags {
        self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn contains(&self, bucket: ScreenSizeBp) -> bool {
        self.flags.contains(SizeFlags::from(bucket))
    }

    /// The buckets in this set, ascending.
    pub fn buckets(&self) -> Vec<ScreenSizeBp> {
        BUCKETS
            .into_iter()
            .filter(|bucket| self.contains(*bucket))
            .collect()
    }
}

impl From<ScreenSizeBp> for ScreenSize {
    fn from(bucket: ScreenSizeBp) -> Self {
        Self::new(SizeFlags::from(bucket))
    }
}

impl From<Breakpoint> for ScreenSize {
    fn from(bp: Breakpoint) -> Self {
        Self::from(ScreenSizeBp::from(bp))
    }
}

impl BitOr for ScreenSize {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.flags | rhs.flags)
    }
}
