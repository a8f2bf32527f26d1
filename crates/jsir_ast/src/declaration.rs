//! Declarations: `var` statements and functions.

use crate::node::{impl_display_via_serialize, Node, NodeData};
use crate::statement::BlockStatement;
use crate::syntax_kind::NodeKind;

/// Separator between declarators of one `var` statement. Each declarator
/// after the first starts on its own line, aligned under the first name.
const DECLARATOR_SEPARATOR: &str = ",\n    ";

// ============================================================================
// VariableDeclarator
// ============================================================================

/// One `name` or `name = <initializer>` pair.
#[derive(Debug)]
pub struct VariableDeclarator {
    pub data: NodeData,
    pub name: String,
    pub initializer: Option<Box<dyn Node>>,
}

impl VariableDeclarator {
    pub fn new(name: impl Into<String>, initializer: Option<Box<dyn Node>>) -> Self {
        let decl = Self {
            data: NodeData::new(),
            name: name.into(),
            initializer,
        };
        if let Some(init) = &decl.initializer {
            decl.become_parent_of(init.as_ref());
        }
        decl
    }
}

impl Node for VariableDeclarator {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn kind(&self) -> NodeKind {
        NodeKind::VariableDeclarator
    }

    fn serialize(&self) -> String {
        match &self.initializer {
            Some(init) => format!("{} = {}", self.name, init.serialize()),
            None => self.name.clone(),
        }
    }
}

// ============================================================================
// VariableStatement
// ============================================================================

/// A `var` declaration list.
///
/// An empty declarator list is accepted and renders `var ;`; the JSON node
/// builder rejects it before it gets here.
#[derive(Debug)]
pub struct VariableStatement {
    pub data: NodeData,
    pub declarations: Vec<VariableDeclarator>,
}

impl VariableStatement {
    pub fn new(declarations: Vec<VariableDeclarator>) -> Self {
        let stmt = Self {
            data: NodeData::new(),
            declarations,
        };
        for decl in &stmt.declarations {
            stmt.become_parent_of(decl);
        }
        stmt
    }
}

impl Node for VariableStatement {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn kind(&self) -> NodeKind {
        NodeKind::VariableStatement
    }

    fn serialize(&self) -> String {
        let decls: Vec<String> = self.declarations.iter().map(|d| d.serialize()).collect();
        format!("var {};", decls.join(DECLARATOR_SEPARATOR))
    }
}

// ============================================================================
// FunctionNode
// ============================================================================

/// A function declaration or expression. An empty `name` is anonymous.
#[derive(Debug)]
pub struct FunctionNode {
    pub data: NodeData,
    pub name: String,
    pub params: Vec<String>,
    pub body: BlockStatement,
}

impl FunctionNode {
    /// A missing body becomes an absent-body block, so the function still
    /// renders `{}`.
    pub fn new<P, S>(name: impl Into<String>, params: P, body: Option<BlockStatement>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let func = Self {
            data: NodeData::new(),
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            body: body.unwrap_or_default(),
        };
        func.become_parent_of(&func.body);
        func
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

impl Node for FunctionNode {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn kind(&self) -> NodeKind {
        NodeKind::FunctionNode
    }

    fn serialize(&self) -> String {
        format!(
            "function {}({}) {}",
            self.name,
            self.params.join(", "),
            self.body.serialize()
        )
    }
}

impl_display_via_serialize!(VariableDeclarator, VariableStatement, FunctionNode);
