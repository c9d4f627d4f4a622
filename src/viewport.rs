//! Where viewport dimensions come from.
//!
//! Hosts differ in how they report size changes. Some deliver resize events
//! that can be subscribed to; others only answer "how big is the window right
//! now" and re-render on their own when it changes. [`ViewportSource`] covers
//! both, and the choice is made once when the source is built.

use std::{fmt, rc::Rc};

use peniko::kurbo::Size;

/// Viewport dimensions in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<Viewport> for Size {
    fn from(viewport: Viewport) -> Self {
        viewport.size()
    }
}

impl From<(f64, f64)> for Viewport {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

/// Called with the new dimensions each time the host reports a resize.
pub type ResizeListener = Box<dyn Fn(Viewport)>;

/// A host that can answer with its current dimensions.
pub trait DimensionQuery {
    fn dimensions(&self) -> Viewport;
}

/// A host that also notifies about size changes.
pub trait ResizeEvents: DimensionQuery {
    /// Registers `listener` until the returned [`Subscription`] is dropped.
    fn subscribe(&self, listener: ResizeListener) -> Subscription;
}

/// Releases a resize registration when dropped.
///
/// The release callback runs at most once, whether the subscription is
/// dropped normally, cancelled explicitly, or dropped during unwinding.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Unsubscribes now.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// The capability a responsive provider reads its dimensions through.
#[derive(Clone)]
pub enum ViewportSource {
    /// Pushes resize events; the provider subscribes for its whole lifetime.
    Subscribable(Rc<dyn ResizeEvents>),
    /// Only answers queries; the host's own re-render drives updates.
    Polled(Rc<dyn DimensionQuery>),
}

impl ViewportSource {
    pub fn subscribable(source: impl ResizeEvents + 'static) -> Self {
        Self::Subscribable(Rc::new(source))
    }

    pub fn polled(source: impl DimensionQuery + 'static) -> Self {
        Self::Polled(Rc::new(source))
    }

    pub fn dimensions(&self) -> Viewport {
        match self {
            ViewportSource::Subscribable(events) => events.dimensions(),
            ViewportSource::Polled(query) => query.dimensions(),
        }
    }

    pub fn is_subscribable(&self) -> bool {
        matches!(self, ViewportSource::Subscribable(_))
    }
}

impl fmt::Debug for ViewportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ViewportSource::Subscribable(_) => "Subscribable",
            ViewportSource::Polled(_) => "Polled",
        };
        f.debug_tuple(kind).field(&self.dimensions()).finish()
    }
}

/// A fixed size, for hosts with a viewport that never changes.
impl DimensionQuery for Viewport {
    fn dimensions(&self) -> Viewport {
        *self
    }
}

impl<F> DimensionQuery for F
where
    F: Fn() -> Viewport,
{
    fn dimensions(&self) -> Viewport {
        self()
    }
}
