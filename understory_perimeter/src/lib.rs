// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Perimeter: fire a callback when the pointer approaches an element.
//!
//! A perimeter is the bounding box of a target element expanded by a fixed
//! margin on every side. Each pointer move is classified as inside or outside
//! that rectangle, and the caller's callback runs on the transition from
//! outside to inside. Typical uses are prefetching data or warming up a
//! lazily loaded view just before the user reaches a control.
//!
//! ## Pieces
//!
//! - [`within_perimeter`] and [`Margin`]: the strict geometric test. A point
//!   exactly on the expanded edge is outside.
//! - [`PerimeterState`]: bounds plus the breach flag, advanced by pure
//!   transitions that report a [`MoveOutcome`]. Repeated inside moves do not
//!   re-trigger; leaving re-arms the trigger.
//! - [`Listeners`]: a resource handle for the two global listeners (pointer
//!   move and resize) registered on a [`Host`]. Closing it is idempotent.
//! - [`NodeRef`] and [`Children`]: how the rendering framework attaches the
//!   target element, either through a default wrapper or a render callback.
//! - [`Perimeter`]: the component tying these together, configured by
//!   [`PerimeterConfig`].
//!
//! ## Lifecycle
//!
//! ```text
//! Unmounted --mount--> Listening --breach (once)--> Detached --unmount--> Unmounted
//!                         |  ^                                                 ^
//!                         |  +--breach (repeating)                             |
//!                         +-----------------------unmount----------------------+
//! ```
//!
//! Resize events are not debounced: each one re-measures the target.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use kurbo::{Point, Rect};
//! use understory_perimeter::{
//!     Children, Host, HostEvent, ListenerKind, NodeRef, Perimeter, PerimeterConfig,
//! };
//!
//! #[derive(Default)]
//! struct Window {
//!     listening: Vec<ListenerKind>,
//! }
//!
//! impl Host for Window {
//!     type Node = &'static str;
//!     type Listener = ListenerKind;
//!     fn add_listener(&mut self, kind: ListenerKind) -> ListenerKind {
//!         self.listening.push(kind);
//!         kind
//!     }
//!     fn remove_listener(&mut self, kind: ListenerKind) {
//!         self.listening.retain(|k| *k != kind);
//!     }
//!     fn bounding_rect(&self, _node: &&'static str) -> Rect {
//!         Rect::new(40.0, 40.0, 60.0, 60.0)
//!     }
//! }
//!
//! let entered = Cell::new(0);
//! let config = PerimeterConfig::with_margin(20.0).unwrap();
//! let mut perimeter = Perimeter::<Window, _>::new(config, || entered.set(entered.get() + 1));
//! let mut window = Window::default();
//!
//! // The framework renders the default wrapper and fills the ref.
//! let html = perimeter.render(
//!     Children::element(String::from("Buy")),
//!     |content, node_ref: NodeRef<&'static str>| {
//!         node_ref.set(Some("span#buy"));
//!         format!("<span>{content}</span>")
//!     },
//! );
//! assert_eq!(html, "<span>Buy</span>");
//!
//! perimeter.mount(&mut window);
//! for x in [0.0, 19.0, 21.0, 30.0, 50.0] {
//!     perimeter.handle_event(&mut window, HostEvent::PointerMove(Point::new(x, 50.0)));
//! }
//! // Entered once at x = 21; later inside moves are suppressed.
//! assert_eq!(entered.get(), 1);
//!
//! perimeter.unmount(&mut window);
//! assert!(window.listening.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for [`PerimeterConfig`] and [`Margin`].
//!   Deserializing a negative margin fails.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod geometry;
mod host;
mod node_ref;
mod perimeter;
mod state;

pub use error::PerimeterError;
pub use geometry::{Margin, perimeter_rect, within_perimeter};
pub use host::{Host, HostEvent, ListenerKind, Listeners};
pub use node_ref::{Children, NodeRef};
pub use perimeter::{Perimeter, PerimeterConfig};
pub use state::{MoveOutcome, PerimeterState};
