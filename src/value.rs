//! Per-breakpoint values with mobile-first inheritance.
//!
//! A [`Responsive<T>`] holds an optional value for `base` and for each named
//! breakpoint. Resolving it against a width picks the entry of the largest
//! breakpoint the width reaches that has a value set, falling back to `base`.
//! A value set only at `sm` therefore applies to `sm` and everything above it
//! until a larger breakpoint overrides it.
//!
//! ```rust
//! use stratum::value::Responsive;
//!
//! let padding = Responsive::new().base(8).sm(16).lg(32);
//! assert_eq!(padding.resolve(1019.0), Some(&16));
//! assert_eq!(padding.resolve(1280.0), Some(&32));
//! assert_eq!(padding.resolve(100.0), Some(&8));
//! ```

use crate::breakpoint::{Breakpoint, GridBreakpoints, ScreenSizeBp};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Responsive<T> {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    base: Option<T>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    xs: Option<T>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    sm: Option<T>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    md: Option<T>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    lg: Option<T>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    xl: Option<T>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    xxl: Option<T>,
}

impl<T> Default for Responsive<T> {
    fn default() -> Self {
        Self {
            base: None,
            xs: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
            xxl: None,
        }
    }
}

/// A plain value is a map with only `base` set.
impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Self::new().base(value)
    }
}

macro_rules! breakpoint_setter {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Sets the value used from `", stringify!($name), "` up.")]
            pub fn $name(mut self, value: T) -> Self {
                self.$name = Some(value);
                self
            }
        )*
    };
}

impl<T> Responsive<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value used below the smallest breakpoint and wherever
    /// nothing larger applies.
    pub fn base(mut self, value: T) -> Self {
        self.base = Some(value);
        self
    }

    breakpoint_setter!(xs, sm, md, lg, xl, xxl);

    /// Sets the value at `bp`, builder style.
    pub fn at(mut self, bp: Breakpoint, value: T) -> Self {
        *self.slot_mut(bp) = Some(value);
        self
    }

    fn slot(&self, bp: Breakpoint) -> &Option<T> {
        match bp {
            Breakpoint::Xs => &self.xs,
            Breakpoint::Sm => &self.sm,
            Breakpoint::Md => &self.md,
            Breakpoint::Lg => &self.lg,
            Breakpoint::Xl => &self.xl,
            Breakpoint::Xxl => &self.xxl,
        }
    }

    fn slot_mut(&mut self, bp: Breakpoint) -> &mut Option<T> {
        match bp {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
            Breakpoint::Xxl => &mut self.xxl,
        }
    }

    /// The value explicitly set at `bp`, without inheritance.
    pub fn get(&self, bp: Breakpoint) -> Option<&T> {
        self.slot(bp).as_ref()
    }

    pub fn get_base(&self) -> Option<&T> {
        self.base.as_ref()
    }

    /// Replaces the value at `bp`, returning the previous one.
    pub fn set(&mut self, bp: Breakpoint, value: Option<T>) -> Option<T> {
        std::mem::replace(self.slot_mut(bp), value)
    }

    pub fn set_base(&mut self, value: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.base, value)
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_none() && Breakpoint::ALL.iter().all(|bp| self.slot(*bp).is_none())
    }

    /// Resolves against the default breakpoint table.
    pub fn resolve(&self, width: f64) -> Option<&T> {
        self.resolve_with(&GridBreakpoints::DEFAULT, width)
    }

    /// Scans named entries from the largest breakpoint down and returns the
    /// first one that is set and whose threshold `width` reaches. Falls back
    /// to `base`, which may itself be unset.
    pub fn resolve_with(&self, grid: &GridBreakpoints, width: f64) -> Option<&T> {
        Breakpoint::descending()
            .find_map(|bp| {
                self.slot(bp)
                    .as_ref()
                    .filter(|_| width >= grid.threshold(bp))
            })
            .or(self.base.as_ref())
    }

    /// Resolves for an already classified bucket.
    pub fn resolve_bucket(&self, bucket: ScreenSizeBp) -> Option<&T> {
        let top = bucket.breakpoint();
        Breakpoint::descending()
            .filter(|bp| Some(*bp) <= top)
            .find_map(|bp| self.slot(bp).as_ref())
            .or(self.base.as_ref())
    }

    /// Like [`Responsive::resolve`], with an explicit fallback when neither a
    /// matching breakpoint nor `base` has a value.
    pub fn resolve_or<'a>(&'a self, width: f64, default: &'a T) -> &'a T {
        self.resolve(width).unwrap_or(default)
    }

    pub fn as_ref(&self) -> Responsive<&T> {
        Responsive {
            base: self.base.as_ref(),
            xs: self.xs.as_ref(),
            sm: self.sm.as_ref(),
            md: self.md.as_ref(),
            lg: self.lg.as_ref(),
            xl: self.xl.as_ref(),
            xxl: self.xxl.as_ref(),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Responsive<U> {
        Responsive {
            base: self.base.map(&mut f),
            xs: self.xs.map(&mut f),
            sm: self.sm.map(&mut f),
            md: self.md.map(&mut f),
            lg: self.lg.map(&mut f),
            xl: self.xl.map(&mut f),
            xxl: self.xxl.map(&mut f),
        }
    }
}

/// Resolves `values` at `width` against the default breakpoint table.
pub fn resolve<T>(values: &Responsive<T>, width: f64) -> Option<&T> {
    values.resolve(width)
}
