//! # Floem Viewport
//! Small viewport helpers for applications built on Floem's reactive system.
//!
//! ## Scroll reset on navigation
//! Single-page applications keep one scrollable viewport alive while the
//! user navigates between pages. [`ScrollToTop`] wraps a page and scrolls
//! the viewport back to the origin every time the route signal changes,
//! the way a full page load would.
//!
//! ```rust
//! use floem_reactive::{create_rw_signal, SignalUpdate};
//! use floem_viewport::{ScrollToTop, ViewportState};
//! use peniko::kurbo::Point;
//!
//! let route = create_rw_signal(String::from("/"));
//! let viewport = ViewportState::new(1280.0);
//! let _page = ScrollToTop::new(route, viewport, ());
//!
//! viewport.set_scroll_offset(Point::new(0.0, 900.0));
//! route.set(String::from("/settings"));
//! assert_eq!(viewport.scroll_offset(), Point::ZERO);
//! ```
//!
//! Hosts without signals can feed routes into a [`ScrollReset`] by hand.
//!
//! ## Device sizes
//! [`classify`] sorts the viewport's current width into a [`DeviceSize`]
//! category, and [`matches`] tests the viewport against one category:
//!
//! ```rust
//! use floem_viewport::{classify, matches, DeviceSize, ViewportState};
//!
//! let viewport = ViewportState::new(768.0);
//! assert_eq!(classify(&viewport), DeviceSize::Medium);
//! assert!(matches(&viewport, DeviceSize::Medium));
//! ```
//!
//! For layouts that should react to resizes, [`create_device_size`] gives a
//! memo that only changes when the category does.

pub mod responsive;
pub mod scroll_reset;
pub mod viewport;

pub use responsive::{
    BreakpointError, Breakpoints, DeviceSize, DeviceSizes, classify, create_device_size,
    create_device_size_with, matches, matches_any,
};
pub use scroll_reset::{RouteTransition, ScrollReset, ScrollToTop};
pub use viewport::{Viewport, ViewportState};
