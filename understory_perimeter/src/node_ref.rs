// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target node attachment and the children rendering contract.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

/// Shared slot for the element a perimeter is centered on.
///
/// The perimeter hands clones of its `NodeRef` to the rendering framework,
/// which stores the rendered element into it (and clears it when the element
/// goes away). Clones share one slot.
///
/// ```
/// use understory_perimeter::NodeRef;
///
/// let node_ref: NodeRef<u32> = NodeRef::new();
/// let handed_out = node_ref.clone();
/// handed_out.set(Some(7));
/// assert_eq!(node_ref.get(), Some(7));
/// ```
pub struct NodeRef<N> {
    slot: Rc<RefCell<Option<N>>>,
}

impl<N> NodeRef<N> {
    /// An empty ref.
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Attach `node`, or detach with `None`. Replaces any previous node.
    pub fn set(&self, node: Option<N>) {
        *self.slot.borrow_mut() = node;
    }

    /// Whether a node is attached.
    pub fn is_attached(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Run `f` on the attached node, if any.
    pub fn with<R>(&self, f: impl FnOnce(&N) -> R) -> Option<R> {
        self.slot.borrow().as_ref().map(f)
    }

    /// A copy of the attached node, if any.
    pub fn get(&self) -> Option<N>
    where
        N: Clone,
    {
        self.slot.borrow().clone()
    }

    /// Whether `self` and `other` share the same slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<N> Clone for NodeRef<N> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<N> Default for NodeRef<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: fmt::Debug> fmt::Debug for NodeRef<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("node", &*self.slot.borrow())
            .finish()
    }
}

/// What a perimeter renders.
///
/// Either plain content, which is placed in the framework's default wrapper
/// element, or a render callback that receives the [`NodeRef`] and is
/// responsible for attaching it to the element it returns.
#[derive(Clone, Debug)]
pub enum Children<E, R> {
    /// Content wrapped in a default container element that receives the ref.
    Element(E),
    /// Render callback; its return value is rendered as-is.
    Render(R),
}

impl<E, N> Children<E, fn(NodeRef<N>) -> E> {
    /// Plain content, with the render-callback type fixed to a function pointer.
    pub fn element(content: E) -> Self {
        Self::Element(content)
    }
}

impl<E, R> Children<E, R> {
    /// Produce the element to render.
    ///
    /// `wrap` builds the default container around plain content and must
    /// attach the ref it is given to that container.
    ///
    /// ```
    /// use understory_perimeter::{Children, NodeRef};
    ///
    /// const SPAN: u32 = 1;
    /// const BUTTON: u32 = 2;
    ///
    /// let node_ref: NodeRef<u32> = NodeRef::new();
    /// let wrap = |content: String, r: NodeRef<u32>| {
    ///     r.set(Some(SPAN));
    ///     format!("<span>{content}</span>")
    /// };
    ///
    /// let out = Children::element(String::from("hi")).render(&node_ref, wrap);
    /// assert_eq!(out, "<span>hi</span>");
    /// assert_eq!(node_ref.get(), Some(SPAN));
    ///
    /// let custom = Children::Render(|r: NodeRef<u32>| {
    ///     r.set(Some(BUTTON));
    ///     String::from("<button/>")
    /// });
    /// assert_eq!(custom.render(&node_ref, wrap), "<button/>");
    /// assert_eq!(node_ref.get(), Some(BUTTON));
    /// ```
    pub fn render<N>(
        self,
        node_ref: &NodeRef<N>,
        wrap: impl FnOnce(E, NodeRef<N>) -> E,
    ) -> E
    where
        R: FnOnce(NodeRef<N>) -> E,
    {
        match self {
            Self::Element(content) => wrap(content, node_ref.clone()),
            Self::Render(render) => render(node_ref.clone()),
        }
    }
}
