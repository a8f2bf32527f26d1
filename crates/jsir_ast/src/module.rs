//! The root container: one output unit, typically one file.

use crate::node::{impl_display_via_serialize, Node, NodeData};
use crate::options::ModuleOptions;
use crate::syntax_kind::NodeKind;

/// Directive emitted ahead of the body of a strict module.
const USE_STRICT_PROLOGUE: &str = "\"use strict\"\n\n";

/// An ordered sequence of top-level nodes.
///
/// Nodes are added with an explicit [`push`](Module::push); constructing a
/// node never registers it anywhere. `push` needs `&mut self`, so building one
/// module from several threads requires the caller to wrap it in a lock.
#[derive(Debug)]
pub struct Module {
    pub data: NodeData,
    pub options: ModuleOptions,
    statements: Vec<Box<dyn Node>>,
}

impl Module {
    /// A strict-mode module with no statements.
    pub fn new() -> Self {
        Self::with_options(ModuleOptions::default())
    }

    pub fn with_options(options: ModuleOptions) -> Self {
        Self {
            data: NodeData::new(),
            options,
            statements: Vec::new(),
        }
    }

    pub fn use_strict(&self) -> bool {
        self.options.use_strict
    }

    pub fn set_use_strict(&mut self, use_strict: bool) {
        self.options.use_strict = use_strict;
    }

    /// Append a top-level node and return the new length.
    pub fn push(&mut self, node: Box<dyn Node>) -> usize {
        tracing::trace!(kind = %node.kind(), id = ?node.id(), "module push");
        self.become_parent_of(node.as_ref());
        self.statements.push(node);
        self.statements.len()
    }

    /// Append several top-level nodes in order and return the new length.
    pub fn push_all<I>(&mut self, nodes: I) -> usize
    where
        I: IntoIterator<Item = Box<dyn Node>>,
    {
        for node in nodes {
            self.push(node);
        }
        self.statements.len()
    }

    /// Remove and return the last top-level node.
    pub fn pop(&mut self) -> Option<Box<dyn Node>> {
        let node = self.statements.pop();
        tracing::trace!(popped = node.is_some(), remaining = self.statements.len(), "module pop");
        node
    }

    pub fn statements(&self) -> &[Box<dyn Node>] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for Module {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Module
    }

    /// Children are concatenated with no separator; each node supplies its
    /// own whitespace.
    #[tracing::instrument(level = "trace", skip(self), fields(statement_count = self.statements.len()))]
    fn serialize(&self) -> String {
        let mut out = String::new();
        if self.options.use_strict {
            out.push_str(USE_STRICT_PROLOGUE);
        }
        for stmt in &self.statements {
            out.push_str(&stmt.serialize());
        }
        tracing::trace!(bytes = out.len(), "module serialized");
        out
    }
}

impl_display_via_serialize!(Module);
