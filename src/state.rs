//! Live viewport state for components.
//!
//! [`ResponsiveState`] owns the current viewport dimensions in a reactive
//! signal and answers breakpoint questions about them. Everything derived
//! from the width (the bucket, `is_mobile` and friends) is computed on each
//! read so it can never go stale after a resize.
//!
//! The state subscribes to its [`ViewportSource`] when it is created and
//! unsubscribes when it is dropped:
//!
//! ```rust
//! use stratum::breakpoint::ScreenSizeBp;
//! use stratum::state::ResponsiveState;
//! use stratum::value::Responsive;
//! use stratum::viewport::{Viewport, ViewportSource};
//!
//! let state = ResponsiveState::new(ViewportSource::polled(Viewport::new(1019.0, 768.0)));
//! assert_eq!(state.breakpoint(), ScreenSizeBp::Sm);
//! assert!(state.is_tablet());
//! assert_eq!(state.select(&Responsive::new().base(8).sm(16).lg(32)), Some(&16));
//! ```

use std::{
    cell::Cell,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use floem_reactive::{
    RwSignal, Scope, SignalGet, SignalTrack, SignalUpdate, SignalWith, create_effect, provide_context,
    use_context, with_scope,
};
use tracing::{debug, trace};

use crate::{
    breakpoint::{Breakpoint, GridBreakpoints, ScreenSizeBp},
    responsive::ScreenSize,
    value::Responsive,
    viewport::{Subscription, Viewport, ViewportSource},
};

/// The viewport and everything derived from it at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveSnapshot {
    pub width: f64,
    pub height: f64,
    pub breakpoint: ScreenSizeBp,
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    grid: GridBreakpoints,
}

impl ResponsiveSnapshot {
    pub fn new(viewport: Viewport, grid: GridBreakpoints) -> Self {
        let width = viewport.width;
        let is_mobile = !grid.at_least(width, Breakpoint::Sm);
        let is_desktop = grid.at_least(width, Breakpoint::Lg);
        Self {
            width,
            height: viewport.height,
            breakpoint: grid.classify(width),
            is_mobile,
            is_tablet: !is_mobile && !is_desktop,
            is_desktop,
            grid,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn grid(&self) -> &GridBreakpoints {
        &self.grid
    }

    /// Resolves `values` at this width.
    pub fn select<'a, T>(&self, values: &'a Responsive<T>) -> Option<&'a T> {
        values.resolve_with(&self.grid, self.width)
    }

    pub fn select_or<'a, T>(&self, values: &'a Responsive<T>, default: &'a T) -> &'a T {
        self.select(values).unwrap_or(default)
    }

    pub fn at_least(&self, bp: Breakpoint) -> bool {
        self.grid.at_least(self.width, bp)
    }

    pub fn below(&self, bp: Breakpoint) -> bool {
        self.grid.below(self.width, bp)
    }

    /// Whether the current bucket is in `sizes`.
    pub fn matches(&self, sizes: ScreenSize) -> bool {
        sizes.contains(self.breakpoint)
    }
}

fn apply_resize(viewport: RwSignal<Viewport>, grid: &GridBreakpoints, next: Viewport) {
    let prev = viewport.get_untracked();
    if prev == next {
        return;
    }
    let before = grid.classify(prev.width);
    let after = grid.classify(next.width);
    viewport.set(next);
    if before != after {
        debug!(
            from = %before,
            to = %after,
            width = next.width,
            height = next.height,
            "breakpoint changed"
        );
    } else {
        trace!(width = next.width, height = next.height, "viewport resized");
    }
}

fn next_state_id() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Provides live viewport dimensions and the breakpoint facts derived from
/// them.
///
/// Dropping the state is teardown: it releases the resize subscription
/// exactly once and disposes the reactive scope its signal lives in.
pub struct ResponsiveState {
    id: u64,
    scope: Scope,
    viewport: RwSignal<Viewport>,
    grid: GridBreakpoints,
    source: ViewportSource,
    live: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
}

impl ResponsiveState {
    pub fn new(source: ViewportSource) -> Self {
        Self::with_grid(source, GridBreakpoints::DEFAULT)
    }

    pub fn with_grid(source: ViewportSource, grid: GridBreakpoints) -> Self {
        let scope = Scope::current().create_child();
        let initial = source.dimensions();
        let viewport = scope.create_rw_signal(initial);
        let live = Rc::new(Cell::new(true));

        let subscription = match &source {
            ViewportSource::Subscribable(events) => {
                trace!(width = initial.width, "subscribing to resize events");
                let live = live.clone();
                Some(events.subscribe(Box::new(move |next| {
                    if live.get() {
                        apply_resize(viewport, &grid, next);
                    }
                })))
            }
            ViewportSource::Polled(_) => None,
        };

        debug!(
            breakpoint = %grid.classify(initial.width),
            width = initial.width,
            height = initial.height,
            subscribed = subscription.is_some(),
            "responsive state created"
        );

        Self {
            id: next_state_id(),
            scope,
            viewport,
            grid,
            source,
            live,
            subscription,
        }
    }

    pub fn grid(&self) -> &GridBreakpoints {
        &self.grid
    }

    pub fn source(&self) -> &ViewportSource {
        &self.source
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Re-reads the source and publishes its dimensions to dependents.
    ///
    /// Polled hosts call this from their own re-render trigger.
    pub fn refresh(&self) {
        apply_resize(self.viewport, &self.grid, self.source.dimensions());
    }

    /// Current dimensions. Polled sources are read live; reading tracks the
    /// viewport signal either way so effects rerun on updates.
    pub fn viewport(&self) -> Viewport {
        match &self.source {
            ViewportSource::Subscribable(_) => self.viewport.get(),
            ViewportSource::Polled(query) => {
                self.viewport.track();
                query.dimensions()
            }
        }
    }

    pub fn snapshot(&self) -> ResponsiveSnapshot {
        ResponsiveSnapshot::new(self.viewport(), self.grid)
    }

    pub fn width(&self) -> f64 {
        self.viewport().width
    }

    pub fn height(&self) -> f64 {
        self.viewport().height
    }

    pub fn breakpoint(&self) -> ScreenSizeBp {
        self.grid.classify(self.width())
    }

    pub fn is_mobile(&self) -> bool {
        self.snapshot().is_mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.snapshot().is_tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.snapshot().is_desktop
    }

    pub fn select<'a, T>(&self, values: &'a Responsive<T>) -> Option<&'a T> {
        values.resolve_with(&self.grid, self.width())
    }

    pub fn select_or<'a, T>(&self, values: &'a Responsive<T>, default: &'a T) -> &'a T {
        self.select(values).unwrap_or(default)
    }

    pub fn at_least(&self, bp: Breakpoint) -> bool {
        self.grid.at_least(self.width(), bp)
    }

    pub fn below(&self, bp: Breakpoint) -> bool {
        self.grid.below(self.width(), bp)
    }

    pub fn matches(&self, sizes: ScreenSize) -> bool {
        sizes.contains(self.breakpoint())
    }

    /// A copyable read handle for nested components.
    ///
    /// For polled sources the handle sees what the last [`refresh`] published.
    ///
    /// [`refresh`]: ResponsiveState::refresh
    pub fn handle(&self) -> ResponsiveHandle {
        ResponsiveHandle {
            owner: self.id,
            viewport: self.viewport,
            grid: self.grid,
        }
    }

    /// Runs `f` with the initial bucket and again each time the bucket
    /// changes, for as long as this state lives.
    pub fn on_breakpoint_change(&self, f: impl Fn(ScreenSizeBp) + 'static) {
        let handle = self.handle();
        with_scope(self.scope, move || {
            create_effect(move |prev: Option<ScreenSizeBp>| {
                let current = handle.breakpoint();
                if prev != Some(current) {
                    f(current);
                }
                current
            });
        });
    }

    /// Unsubscribes and disposes the state. Same as dropping it.
    pub fn teardown(self) {}
}

impl Drop for ResponsiveState {
    fn drop(&mut self) {
        self.live.set(false);
        if let Some(subscription) = self.subscription.take() {
            trace!("unsubscribing from resize events");
            subscription.cancel();
        }
        let provided = use_context::<ProvidedResponsive>().and_then(|p| p.0);
        if provided.is_some_and(|handle| handle.owner == self.id) {
            provide_context(ProvidedResponsive(None));
        }
        self.scope.dispose();
    }
}

/// A `Copy` view of a [`ResponsiveState`]'s signal.
///
/// Reads through a handle panic once the owning state has been dropped, like
/// any disposed signal. [`ResponsiveHandle::try_snapshot`] does not.
#[derive(Clone, Copy)]
pub struct ResponsiveHandle {
    owner: u64,
    viewport: RwSignal<Viewport>,
    grid: GridBreakpoints,
}

impl ResponsiveHandle {
    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    pub fn snapshot(&self) -> ResponsiveSnapshot {
        ResponsiveSnapshot::new(self.viewport(), self.grid)
    }

    /// `None` once the owning state has been dropped.
    pub fn try_snapshot(&self) -> Option<ResponsiveSnapshot> {
        self.viewport
            .try_get()
            .map(|viewport| ResponsiveSnapshot::new(viewport, self.grid))
    }

    pub fn width(&self) -> f64 {
        self.viewport.with(|v| v.width)
    }

    pub fn height(&self) -> f64 {
        self.viewport.with(|v| v.height)
    }

    pub fn breakpoint(&self) -> ScreenSizeBp {
        self.grid.classify(self.width())
    }

    pub fn is_mobile(&self) -> bool {
        self.snapshot().is_mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.snapshot().is_tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.snapshot().is_desktop
    }

    pub fn select<'a, T>(&self, values: &'a Responsive<T>) -> Option<&'a T> {
        values.resolve_with(&self.grid, self.width())
    }

    pub fn at_least(&self, bp: Breakpoint) -> bool {
        self.grid.at_least(self.width(), bp)
    }

    pub fn below(&self, bp: Breakpoint) -> bool {
        self.grid.below(self.width(), bp)
    }

    pub fn matches(&self, sizes: ScreenSize) -> bool {
        sizes.contains(self.breakpoint())
    }
}

#[derive(Clone, Copy)]
struct ProvidedResponsive(Option<ResponsiveHandle>);

/// Makes `state` reachable from [`use_responsive`] anywhere below, until
/// `state` is dropped.
pub fn provide_responsive(state: &ResponsiveState) {
    provide_context(ProvidedResponsive(Some(state.handle())));
}

/// The handle last passed to [`provide_responsive`], if its state is alive.
pub fn use_responsive() -> Option<ResponsiveHandle> {
    use_context::<ProvidedResponsive>().and_then(|provided| provided.0)
}
