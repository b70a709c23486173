// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer proximity with `understory_perimeter` against a simulated window.
//!
//! Two perimeters share one window:
//! - a one-shot "prefetch" perimeter around a link, which detaches after its
//!   first breach,
//! - a repeating "highlight" perimeter around a button, which fires every time
//!   the pointer re-enters it.
//!
//! Halfway through the script the window is resized and the button reflows,
//! so its perimeter follows the new layout.
//!
//! Run:
//! - `RUST_LOG=understory_perimeter=trace cargo run -p understory_demos --example perimeter_prefetch`

use std::cell::Cell;
use std::collections::HashMap;

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_perimeter::{
    Children, Host, HostEvent, ListenerKind, NodeRef, Perimeter, PerimeterConfig,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Element {
    Link,
    Button,
}

/// A window with a flat layout table and a listener registry.
#[derive(Debug, Default)]
struct Window {
    layout: HashMap<Element, Rect>,
    listeners: HashMap<u64, ListenerKind>,
    next_listener: u64,
}

impl Host for Window {
    type Node = Element;
    type Listener = u64;

    fn add_listener(&mut self, kind: ListenerKind) -> u64 {
        self.next_listener += 1;
        self.listeners.insert(self.next_listener, kind);
        self.next_listener
    }

    fn remove_listener(&mut self, listener: u64) {
        self.listeners.remove(&listener);
    }

    fn bounding_rect(&self, node: &Element) -> Rect {
        self.layout.get(node).copied().unwrap_or(Rect::ZERO)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut window = Window::default();
    window
        .layout
        .insert(Element::Link, Rect::new(20.0, 20.0, 120.0, 40.0));
    window
        .layout
        .insert(Element::Button, Rect::new(200.0, 100.0, 280.0, 130.0));

    let prefetches = Cell::new(0_u32);
    let highlights = Cell::new(0_u32);

    let mut prefetch = Perimeter::<Window, _>::new(
        PerimeterConfig::with_margin(30.0)
            .expect("margin is non-negative")
            .with_once(true),
        || {
            prefetches.set(prefetches.get() + 1);
            println!("  -> prefetching link target");
        },
    );
    let mut highlight = Perimeter::<Window, _>::new(
        PerimeterConfig::with_margin(15.0).expect("margin is non-negative"),
        || {
            highlights.set(highlights.get() + 1);
            println!("  -> highlighting button");
        },
    );

    // Default wrapper for the link, custom element for the button.
    let link_html = prefetch.render(
        Children::element(String::from("Docs")),
        |content, node_ref: NodeRef<Element>| {
            node_ref.set(Some(Element::Link));
            format!("<span>{content}</span>")
        },
    );
    let button_html = highlight.render(
        Children::Render(|node_ref: NodeRef<Element>| {
            node_ref.set(Some(Element::Button));
            String::from("<button>Buy</button>")
        }),
        |content, _| content,
    );
    println!("rendered: {link_html} {button_html}");

    prefetch.mount(&mut window);
    highlight.mount(&mut window);
    println!("listeners registered: {}", window.listeners.len());

    let script = [
        HostEvent::PointerMove(Point::new(300.0, 300.0)),
        HostEvent::PointerMove(Point::new(140.0, 50.0)),
        HostEvent::PointerMove(Point::new(100.0, 30.0)),
        HostEvent::PointerMove(Point::new(190.0, 110.0)),
        HostEvent::PointerMove(Point::new(240.0, 115.0)),
        HostEvent::PointerMove(Point::new(400.0, 115.0)),
        HostEvent::Resize,
        HostEvent::PointerMove(Point::new(240.0, 115.0)),
        HostEvent::PointerMove(Point::new(400.0, 240.0)),
        HostEvent::PointerMove(Point::new(100.0, 30.0)),
    ];

    for (step, event) in script.into_iter().enumerate() {
        if event == HostEvent::Resize {
            // The button reflows below the fold on a narrower window.
            window
                .layout
                .insert(Element::Button, Rect::new(360.0, 220.0, 440.0, 250.0));
        }
        println!("step {step}: {event:?}");
        prefetch.handle_event(&mut window, event);
        highlight.handle_event(&mut window, event);
    }

    println!(
        "prefetches: {}, highlights: {}, listeners before unmount: {}",
        prefetches.get(),
        highlights.get(),
        window.listeners.len()
    );

    prefetch.unmount(&mut window);
    highlight.unmount(&mut window);
    println!("listeners after unmount: {}", window.listeners.len());
}
