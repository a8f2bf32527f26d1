//! The base contract shared by every IR node.
//!
//! Composite nodes hold children as `Box<dyn Node>` and only ever talk to
//! them through this trait, so no node depends on another's internals.

use crate::syntax_kind::NodeKind;
use jsir_core::NodeId;
use std::cell::Cell;
use std::fmt;

// ============================================================================
// Core Node Data
// ============================================================================

/// Bookkeeping shared by all IR nodes.
#[derive(Debug)]
pub struct NodeData {
    /// Unique node ID.
    id: NodeId,
    /// Non-owning link to the node that took this one as a child.
    parent: Cell<Option<NodeId>>,
}

impl NodeData {
    pub fn new() -> Self {
        Self {
            id: NodeId::fresh(),
            parent: Cell::new(None),
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent.get()
    }

    #[inline]
    pub fn set_parent(&self, parent: NodeId) {
        self.parent.set(Some(parent));
    }
}

impl Default for NodeData {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Node Trait
// ============================================================================

/// What every IR node can do.
pub trait Node: fmt::Debug + Send {
    fn data(&self) -> &NodeData;

    fn kind(&self) -> NodeKind;

    /// Render this node (and everything it owns) as source text.
    ///
    /// Pure and repeatable: two calls on an unmodified tree return identical
    /// strings.
    fn serialize(&self) -> String {
        String::new()
    }

    /// Record `self` as the parent of `child`, replacing any earlier parent.
    ///
    /// This is an annotation only. Rendering never looks at it.
    fn become_parent_of(&self, child: &dyn Node) {
        child.data().set_parent(self.data().id());
    }

    #[inline]
    fn id(&self) -> NodeId {
        self.data().id()
    }

    #[inline]
    fn parent(&self) -> Option<NodeId> {
        self.data().parent()
    }

    /// Move this node onto the heap as a trait object.
    fn boxed(self) -> Box<dyn Node>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// Implement `Display` for node types as their serialized text.
macro_rules! impl_display_via_serialize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::node::Node::serialize(self))
                }
            }
        )*
    };
}

pub(crate) use impl_display_via_serialize;
