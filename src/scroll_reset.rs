//! Reset the scroll position when the route changes.
//!
//! Single-page applications keep one viewport alive across navigations, so
//! a new page would otherwise open at whatever offset the previous page was
//! scrolled to. The types here watch a route value and scroll the viewport
//! back to the origin every time it changes.
//!
//! Two flavours are provided:
//! - [`ScrollReset`] is a plain observer. The navigation layer calls
//!   [`ScrollReset::update`] with each route it publishes.
//! - [`ScrollToTop`] wraps some child content and subscribes to a route
//!   signal, so it resets the scroll without any explicit calls.

use std::{cell::Cell, rc::Rc};

use floem_reactive::{RwSignal, Scope, SignalGet, use_context};
use peniko::kurbo::Point;

use crate::viewport::Viewport;

/// How the route moved between two successive updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTransition {
    /// The first route observed; there is nothing to compare against.
    Initial,
    /// Same route as the previous update.
    Unchanged,
    /// A different route than the previous update.
    Changed,
}

impl RouteTransition {
    /// Compare the current route against the previous one, if any.
    pub fn between<R: PartialEq>(previous: Option<&R>, current: &R) -> Self {
        match previous {
            None => RouteTransition::Initial,
            Some(previous) if previous == current => RouteTransition::Unchanged,
            Some(_) => RouteTransition::Changed,
        }
    }

    /// Whether this transition scrolls the viewport back to the origin.
    pub fn resets_scroll(self) -> bool {
        self == RouteTransition::Changed
    }
}

fn apply<V: Viewport>(transition: RouteTransition, viewport: &V) {
    if transition.resets_scroll() {
        tracing::debug!("route changed, resetting scroll to origin");
        viewport.scroll_to(Point::ZERO);
    } else {
        tracing::trace!(?transition, "route not changed, keeping scroll offset");
    }
}

/// Observer that resets the viewport's scroll offset whenever it sees a
/// route that differs from the previous one.
pub struct ScrollReset<R, V> {
    viewport: V,
    location: Option<R>,
}

impl<R: PartialEq, V: Viewport> ScrollReset<R, V> {
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            location: None,
        }
    }

    /// Observe the current route, scrolling to the origin if it differs from
    /// the previously observed one.
    pub fn update(&mut self, location: R) -> RouteTransition {
        let transition = RouteTransition::between(self.location.as_ref(), &location);
        apply(transition, &self.viewport);
        self.location = Some(location);
        transition
    }

    /// The most recently observed route.
    pub fn location(&self) -> Option<&R> {
        self.location.as_ref()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }
}

/// Wraps child content and scrolls the viewport to the top whenever the
/// route changes.
///
/// The child is never touched; use [`child`](Self::child) or
/// [`dispose`](Self::dispose) to get at it. The route is observed in a child
/// scope of the scope the wrapper was created in, so it stops when that
/// scope is disposed.
///
/// ```rust
/// # use floem_reactive::{create_rw_signal, SignalUpdate};
/// # use floem_viewport::{ScrollToTop, ViewportState};
/// # use peniko::kurbo::Point;
/// let route = create_rw_signal("/home");
/// let viewport = ViewportState::new(1024.0);
/// let page = ScrollToTop::new(route, viewport, "home page");
///
/// viewport.set_scroll_offset(Point::new(0.0, 300.0));
/// route.set("/about");
/// assert_eq!(viewport.scroll_offset(), Point::ZERO);
/// assert_eq!(*page.child(), "home page");
/// ```
pub struct ScrollToTop<C> {
    child: C,
    scope: Scope,
    active: Rc<Cell<bool>>,
}

impl<C> ScrollToTop<C> {
    pub fn new<R, S, V>(location: S, viewport: V, child: C) -> Self
    where
        R: PartialEq + Clone + 'static,
        S: SignalGet<R> + 'static,
        V: Viewport + 'static,
    {
        let scope = Scope::current().create_child();
        let active = Rc::new(Cell::new(true));
        scope.create_effect({
            let active = active.clone();
            move |previous: Option<R>| {
                let location = location.get();
                if active.get() {
                    apply(
                        RouteTransition::between(previous.as_ref(), &location),
                        &viewport,
                    );
                }
                location
            }
        });
        Self {
            child,
            scope,
            active,
        }
    }

    /// Like [`new`](Self::new), but takes the route from the `RwSignal<R>`
    /// provided to the reactive context by the router.
    ///
    /// Returns `None` if no such context has been provided.
    pub fn from_context<R, V>(viewport: V, child: C) -> Option<Self>
    where
        R: PartialEq + Clone + 'static,
        V: Viewport + 'static,
    {
        let location = use_context::<RwSignal<R>>()?;
        Some(Self::new(location, viewport, child))
    }

    pub fn child(&self) -> &C {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut C {
        &mut self.child
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Stop observing the route and hand back the child.
    pub fn dispose(self) -> C {
        // The effect stays subscribed to the route signal until that signal
        // goes away, so it has to be muted as well.
        self.active.set(false);
        self.scope.dispose();
        self.child
    }
}
