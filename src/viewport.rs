//! The host surface that the scroll reset writes to and the device-size
//! classifier reads from.
//!
//! A [`Viewport`] is whatever the application renders into: a Floem window,
//! a browser window, or a test double. The crate only ever needs two things
//! from it, the current width and a way to move the scroll offset.

use std::rc::Rc;

use floem_reactive::{RwSignal, SignalGet, SignalUpdate, create_rw_signal};
use peniko::kurbo::Point;

/// Read access to the current width and write access to the scroll offset
/// of a rendering surface.
pub trait Viewport {
    /// The current width in device-independent pixels.
    ///
    /// Implementations must read the live value on every call.
    fn inner_width(&self) -> f64;

    /// Move the scroll offset so that `origin` is the top-left corner.
    ///
    /// This is best-effort; there is no failure signal.
    fn scroll_to(&self, origin: Point);
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn inner_width(&self) -> f64 {
        (**self).inner_width()
    }

    fn scroll_to(&self, origin: Point) {
        (**self).scroll_to(origin)
    }
}

impl<V: Viewport + ?Sized> Viewport for Rc<V> {
    fn inner_width(&self) -> f64 {
        (**self).inner_width()
    }

    fn scroll_to(&self, origin: Point) {
        (**self).scroll_to(origin)
    }
}

impl<V: Viewport + ?Sized> Viewport for Box<V> {
    fn inner_width(&self) -> f64 {
        (**self).inner_width()
    }

    fn scroll_to(&self, origin: Point) {
        (**self).scroll_to(origin)
    }
}

/// A viewport whose width and scroll offset live in signals.
///
/// Hosts push window resizes into [`set_width`](Self::set_width) and read the
/// requested scroll position back from [`scroll_offset`](Self::scroll_offset).
/// Because [`Viewport::inner_width`] reads the width signal with tracking,
/// any effect or memo that classifies this viewport reruns when it is
/// resized.
#[derive(Clone, Copy)]
pub struct ViewportState {
    width: RwSignal<f64>,
    scroll_offset: RwSignal<Point>,
}

impl ViewportState {
    pub fn new(width: f64) -> Self {
        Self {
            width: create_rw_signal(width),
            scroll_offset: create_rw_signal(Point::ZERO),
        }
    }

    pub fn set_width(&self, width: f64) {
        self.width.set(width);
    }

    /// The current width, subscribing the running effect to resizes.
    pub fn width(&self) -> f64 {
        self.width.get()
    }

    pub fn width_untracked(&self) -> f64 {
        self.width.get_untracked()
    }

    /// The current scroll offset, subscribing the running effect to it.
    pub fn scroll_offset(&self) -> Point {
        self.scroll_offset.get()
    }

    /// Record a scroll position coming from the host, e.g. after the user
    /// scrolled.
    pub fn set_scroll_offset(&self, offset: Point) {
        self.scroll_offset.set(offset);
    }
}

impl Viewport for ViewportState {
    fn inner_width(&self) -> f64 {
        self.width()
    }

    fn scroll_to(&self, origin: Point) {
        self.scroll_offset.set(origin);
    }
}
