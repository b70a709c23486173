// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The perimeter component: geometry tracking, breach detection, and listener lifecycle.

use core::fmt;

use kurbo::{Point, Rect};
use tracing::{debug, trace};

use crate::error::PerimeterError;
use crate::geometry::{Margin, perimeter_rect};
use crate::host::{Host, HostEvent, Listeners};
use crate::node_ref::{Children, NodeRef};
use crate::state::{MoveOutcome, PerimeterState};

/// Caller-supplied perimeter settings.
///
/// Both fields may change between renders; the next event uses the new values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerimeterConfig {
    /// How far the perimeter extends past each edge of the target node.
    pub margin: Margin,
    /// Stop listening after the first breach.
    #[cfg_attr(feature = "serde", serde(default))]
    pub once: bool,
}

impl PerimeterConfig {
    /// A repeating perimeter with the given margin.
    pub const fn new(margin: Margin) -> Self {
        Self {
            margin,
            once: false,
        }
    }

    /// A repeating perimeter from a raw margin value.
    pub fn with_margin(margin: f64) -> Result<Self, PerimeterError> {
        Margin::new(margin).map(Self::new)
    }

    /// Set whether the perimeter detaches after its first breach.
    #[must_use]
    pub const fn with_once(self, once: bool) -> Self {
        Self { once, ..self }
    }
}

/// Invokes a callback when the pointer comes within a margin of a node.
///
/// A perimeter owns its target [`NodeRef`], the [`PerimeterState`] machine,
/// and a [`Listeners`] handle. The host drives it:
///
/// 1. [`render`](Self::render) hands the node ref to the rendering framework.
/// 2. [`mount`](Self::mount) registers global listeners and measures the node.
/// 3. The host's event loop forwards pointer moves and resizes through
///    [`handle_event`](Self::handle_event) while the listeners are registered.
/// 4. [`unmount`](Self::unmount) removes the listeners, unless a one-shot
///    breach already did.
///
/// ```
/// use core::cell::Cell;
/// use kurbo::{Point, Rect};
/// use understory_perimeter::{Host, HostEvent, ListenerKind, Perimeter, PerimeterConfig};
///
/// struct Window;
/// impl Host for Window {
///     type Node = ();
///     type Listener = ListenerKind;
///     fn add_listener(&mut self, kind: ListenerKind) -> ListenerKind { kind }
///     fn remove_listener(&mut self, _: ListenerKind) {}
///     fn bounding_rect(&self, _: &()) -> Rect { Rect::new(0.0, 0.0, 100.0, 100.0) }
/// }
///
/// let breaches = Cell::new(0);
/// let config = PerimeterConfig::with_margin(10.0).unwrap().with_once(true);
/// let mut perimeter = Perimeter::<Window, _>::new(config, || breaches.set(breaches.get() + 1));
/// let mut window = Window;
///
/// perimeter.set_target_node(Some(()));
/// perimeter.mount(&mut window);
/// perimeter.handle_event(&mut window, HostEvent::PointerMove(Point::new(105.0, 50.0)));
///
/// assert_eq!(breaches.get(), 1);
/// assert!(!perimeter.is_listening());
/// ```
pub struct Perimeter<H: Host, F> {
    config: PerimeterConfig,
    on_breach: F,
    node_ref: NodeRef<H::Node>,
    state: PerimeterState,
    listeners: Listeners<H::Listener>,
}

impl<H: Host, F: FnMut()> Perimeter<H, F> {
    /// Create an unmounted perimeter.
    pub fn new(config: PerimeterConfig, on_breach: F) -> Self {
        Self {
            config,
            on_breach,
            node_ref: NodeRef::new(),
            state: PerimeterState::new(),
            listeners: Listeners::closed(),
        }
    }

    /// Current settings.
    pub const fn config(&self) -> &PerimeterConfig {
        &self.config
    }

    /// Replace the settings, as on a re-render with new props.
    pub fn set_config(&mut self, config: PerimeterConfig) {
        self.config = config;
    }

    /// Replace the breach callback.
    pub fn set_on_breach(&mut self, on_breach: F) {
        self.on_breach = on_breach;
    }

    /// The ref the rendering framework fills with the target element.
    pub const fn node_ref(&self) -> &NodeRef<H::Node> {
        &self.node_ref
    }

    /// Record the element to measure from now on.
    ///
    /// Bounds are not recomputed here; that happens on the next
    /// [`mount`](Self::mount) or resize.
    pub fn set_target_node(&self, node: Option<H::Node>) {
        self.node_ref.set(node);
    }

    /// Render `children`, attaching the node ref per the children contract.
    ///
    /// `wrap` builds the default container for plain content and must attach
    /// the ref it receives to that container.
    pub fn render<E, R>(
        &self,
        children: Children<E, R>,
        wrap: impl FnOnce(E, NodeRef<H::Node>) -> E,
    ) -> E
    where
        R: FnOnce(NodeRef<H::Node>) -> E,
    {
        children.render(&self.node_ref, wrap)
    }

    /// Register global listeners on `host` and take the initial measurement.
    ///
    /// Call once per mount. If the node is not attached yet, bounds stay
    /// unmeasured and pointer moves are ignored until a resize measures it.
    pub fn mount(&mut self, host: &mut H) {
        if self.listeners.is_open() {
            debug!("perimeter already listening; mount ignored");
            return;
        }
        self.listeners = Listeners::open(host);
        self.state = self.state.on_resize(self.measure(host));
        debug!(bounds = ?self.state.bounds(), "perimeter mounted");
    }

    /// Remove listeners from `host` and discard measured bounds and the breach flag.
    ///
    /// Safe to call after a one-shot detach. A later [`mount`](Self::mount)
    /// starts unmeasured and unbreached.
    pub fn unmount(&mut self, host: &mut H) {
        self.detach(host);
        self.state = PerimeterState::new();
    }

    /// Unregister global listeners if they are registered.
    ///
    /// Returns `true` if listeners were removed.
    pub fn detach(&mut self, host: &mut H) -> bool {
        let removed = self.listeners.close(host);
        if removed {
            debug!("perimeter listeners detached");
        }
        removed
    }

    /// Dispatch a host event to the matching handler.
    pub fn handle_event(&mut self, host: &mut H, event: HostEvent) {
        match event {
            HostEvent::PointerMove(point) => {
                self.handle_pointer_move(host, point);
            }
            HostEvent::Resize => {
                self.handle_resize(host);
            }
        }
    }

    /// Handle a pointer move at `point`, in viewport coordinates.
    ///
    /// Invokes the breach callback when the pointer crosses into the
    /// perimeter, then detaches if the perimeter is one-shot. Returns `None`
    /// when not listening.
    pub fn handle_pointer_move(&mut self, host: &mut H, point: Point) -> Option<MoveOutcome> {
        if !self.listeners.is_open() {
            return None;
        }
        let (next, outcome) = self.state.on_pointer_move(point, self.config.margin);
        self.state = next;
        if outcome.is_breach() {
            trace!(x = point.x, y = point.y, "perimeter breached");
            (self.on_breach)();
            if self.config.once {
                debug!("one-shot perimeter breached; detaching");
                self.detach(host);
            }
        }
        Some(outcome)
    }

    /// Recompute bounds after a viewport resize.
    ///
    /// Returns `true` if the node was measured. Ignored when not listening
    /// or when no node is attached.
    pub fn handle_resize(&mut self, host: &H) -> bool {
        if !self.listeners.is_open() {
            return false;
        }
        let Some(bounds) = self.measure(host) else {
            return false;
        };
        trace!(?bounds, "perimeter bounds recomputed");
        self.state = self.state.on_resize(Some(bounds));
        true
    }

    /// Whether global listeners are registered.
    pub const fn is_listening(&self) -> bool {
        self.listeners.is_open()
    }

    /// Whether the pointer is currently inside the perimeter.
    pub const fn is_breached(&self) -> bool {
        self.state.is_breached()
    }

    /// Last measured bounds of the target node.
    pub const fn bounds(&self) -> Option<Rect> {
        self.state.bounds()
    }

    /// The node bounds expanded by the margin, if measured.
    pub fn perimeter_rect(&self) -> Option<Rect> {
        self.state
            .bounds()
            .map(|bounds| perimeter_rect(bounds, self.config.margin))
    }

    /// The underlying state machine.
    pub const fn state(&self) -> &PerimeterState {
        &self.state
    }

    fn measure(&self, host: &H) -> Option<Rect> {
        self.node_ref.with(|node| host.bounding_rect(node))
    }
}

impl<H, F> fmt::Debug for Perimeter<H, F>
where
    H: Host,
    H::Node: fmt::Debug,
    H::Listener: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Perimeter")
            .field("config", &self.config)
            .field("node_ref", &self.node_ref)
            .field("state", &self.state)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
