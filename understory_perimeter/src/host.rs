// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host platform seam: global listener registration and geometry queries.
//!
//! A [`Host`] is the window a perimeter lives in. It registers global
//! listeners, hands back opaque tokens, and measures nodes. The host's event
//! loop delivers pointer-move and resize events to the perimeter only while
//! the matching listener is registered.
//!
//! [`Listeners`] is the resource handle for one pair of registrations. It is
//! opened once and closed at most once; closing an already closed handle is
//! a no-op, so teardown may run from either the unmount path or the one-shot
//! breach path without double-unregistering.

use kurbo::{Point, Rect};

/// Kind of global listener a perimeter registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer movement anywhere in the viewport.
    PointerMove,
    /// Viewport resize.
    Resize,
}

/// An event delivered by the host to a listening perimeter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    /// The pointer moved to this position, in viewport coordinates.
    PointerMove(Point),
    /// The viewport was resized.
    Resize,
}

impl HostEvent {
    /// The listener kind this event is delivered to.
    pub const fn kind(&self) -> ListenerKind {
        match self {
            Self::PointerMove(_) => ListenerKind::PointerMove,
            Self::Resize => ListenerKind::Resize,
        }
    }
}

/// Platform services a perimeter depends on.
pub trait Host {
    /// Handle to a rendered element.
    type Node;
    /// Token identifying one registered listener.
    type Listener;

    /// Register a global listener of the given kind.
    fn add_listener(&mut self, kind: ListenerKind) -> Self::Listener;

    /// Unregister a listener previously returned by [`Host::add_listener`].
    fn remove_listener(&mut self, listener: Self::Listener);

    /// Current bounding box of `node` in viewport coordinates.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;
}

/// Registered pointer-move and resize listeners.
#[derive(Debug)]
struct Registration<L> {
    pointer_move: L,
    resize: L,
}

/// Scoped ownership of a perimeter's global listeners.
///
/// ```
/// # use kurbo::Rect;
/// # use understory_perimeter::{Host, ListenerKind, Listeners};
/// # #[derive(Default)] struct Window { live: usize }
/// # impl Host for Window {
/// #     type Node = ();
/// #     type Listener = ListenerKind;
/// #     fn add_listener(&mut self, kind: ListenerKind) -> ListenerKind { self.live += 1; kind }
/// #     fn remove_listener(&mut self, _: ListenerKind) { self.live -= 1; }
/// #     fn bounding_rect(&self, _: &()) -> Rect { Rect::ZERO }
/// # }
/// let mut window = Window::default();
/// let mut listeners = Listeners::open(&mut window);
/// assert_eq!(window.live, 2);
///
/// assert!(listeners.close(&mut window));
/// // Closing again does not unregister twice.
/// assert!(!listeners.close(&mut window));
/// assert_eq!(window.live, 0);
/// ```
#[derive(Debug)]
pub struct Listeners<L> {
    registration: Option<Registration<L>>,
}

impl<L> Listeners<L> {
    /// A handle that holds no registrations.
    pub const fn closed() -> Self {
        Self { registration: None }
    }

    /// Register pointer-move and resize listeners on `host`.
    pub fn open<H: Host<Listener = L> + ?Sized>(host: &mut H) -> Self {
        let pointer_move = host.add_listener(ListenerKind::PointerMove);
        let resize = host.add_listener(ListenerKind::Resize);
        Self {
            registration: Some(Registration {
                pointer_move,
                resize,
            }),
        }
    }

    /// Whether listeners are currently registered.
    pub const fn is_open(&self) -> bool {
        self.registration.is_some()
    }

    /// Unregister both listeners.
    ///
    /// Returns `true` if listeners were removed and `false` if the handle
    /// was already closed.
    pub fn close<H: Host<Listener = L> + ?Sized>(&mut self, host: &mut H) -> bool {
        let Some(registration) = self.registration.take() else {
            return false;
        };
        host.remove_listener(registration.pointer_move);
        host.remove_listener(registration.resize);
        true
    }
}

impl<L> Default for Listeners<L> {
    fn default() -> Self {
        Self::closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        next: u32,
        added: Vec<(u32, ListenerKind)>,
        removed: Vec<u32>,
    }

    impl Host for Recorder {
        type Node = ();
        type Listener = u32;

        fn add_listener(&mut self, kind: ListenerKind) -> u32 {
            self.next += 1;
            self.added.push((self.next, kind));
            self.next
        }

        fn remove_listener(&mut self, listener: u32) {
            self.removed.push(listener);
        }

        fn bounding_rect(&self, _node: &()) -> Rect {
            Rect::ZERO
        }
    }

    #[test]
    fn open_registers_both_kinds() {
        let mut host = Recorder::default();
        let listeners = Listeners::open(&mut host);
        assert!(listeners.is_open());
        assert_eq!(
            host.added,
            [(1, ListenerKind::PointerMove), (2, ListenerKind::Resize)]
        );
    }

    #[test]
    fn close_removes_the_registered_tokens() {
        let mut host = Recorder::default();
        let mut listeners = Listeners::open(&mut host);
        assert!(listeners.close(&mut host));
        assert!(!listeners.is_open());
        assert_eq!(host.removed, [1, 2]);
    }

    #[test]
    fn close_is_idempotent() {
        let mut host = Recorder::default();
        let mut listeners = Listeners::open(&mut host);
        listeners.close(&mut host);
        assert!(!listeners.close(&mut host));
        assert_eq!(host.removed.len(), 2);
    }

    #[test]
    fn closed_handle_never_touches_host() {
        let mut host = Recorder::default();
        let mut listeners: Listeners<u32> = Listeners::default();
        assert!(!listeners.close(&mut host));
        assert!(host.added.is_empty());
        assert!(host.removed.is_empty());
    }

    #[test]
    fn event_kind_matches_listener_kind() {
        assert_eq!(
            HostEvent::PointerMove(Point::ORIGIN).kind(),
            ListenerKind::PointerMove
        );
        assert_eq!(HostEvent::Resize.kind(), ListenerKind::Resize);
    }
}
