//! # Stratum
//! Stratum classifies viewport widths into named breakpoints and resolves
//! per-breakpoint values for UI components.
//!
//! ## Example: responsive padding
//! ```rust
//! use stratum::prelude::*;
//!
//! let padding = Responsive::new().base(8.0).sm(16.0).lg(32.0);
//!
//! assert_eq!(classify(1019.0), ScreenSizeBp::Sm);
//! assert_eq!(padding.resolve(1019.0), Some(&16.0));
//! assert_eq!(padding.resolve(1280.0), Some(&32.0));
//! ```
//!
//! ## Breakpoints
//!
//! The default table ([`GridBreakpoints::DEFAULT`](breakpoint::GridBreakpoints::DEFAULT))
//! has six named thresholds, `xs` through `xxl`. Each threshold is an
//! inclusive lower bound. Widths below `xs` fall into the `base` bucket, so
//! every width belongs to exactly one bucket.
//!
//! ## Responsive values
//!
//! A [`Responsive<T>`](value::Responsive) sets a value for some breakpoints
//! and leaves the rest empty. Larger breakpoints inherit from smaller ones:
//! a value given at `sm` holds for `md`, `lg` and up until one of those sets
//! its own. When nothing applies the `base` value is used, and when there is
//! no `base` either the result is `None`.
//!
//! ## State management
//!
//! [`ResponsiveState`](state::ResponsiveState) keeps the viewport size in a
//! `floem_reactive` signal. It is created from a
//! [`ViewportSource`](viewport::ViewportSource), which is either a host that
//! pushes resize events or one that can only be queried. Subscriptions are
//! released when the state is dropped.
//!
//! ```rust
//! use stratum::prelude::*;
//!
//! let state = ResponsiveState::new(ViewportSource::polled(Viewport::new(1440.0, 900.0)));
//! assert!(state.is_desktop());
//! assert!(state.at_least(Breakpoint::Xl));
//! assert!(state.matches(ScreenSize::DESKTOP));
//! ```

pub mod breakpoint;
#[cfg(feature = "serde")]
pub mod config;
pub mod responsive;
pub mod state;
pub mod value;
pub mod viewport;

pub use floem_reactive as reactive;
pub use peniko::kurbo;

pub mod prelude {
    pub use crate::breakpoint::{
        Breakpoint, BreakpointError, GridBreakpoints, ScreenSizeBp, classify, threshold,
    };
    #[cfg(feature = "serde")]
    pub use crate::config::ConfigError;
    pub use crate::responsive::{ScreenSize, range};
    pub use crate::state::{
        ResponsiveHandle, ResponsiveSnapshot, ResponsiveState, provide_responsive,
        use_responsive,
    };
    pub use crate::value::{Responsive, resolve};
    pub use crate::viewport::{
        DimensionQuery, ResizeEvents, ResizeListener, Subscription, Viewport, ViewportSource,
    };
}
