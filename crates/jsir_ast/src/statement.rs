//! Statement and literal nodes: `;`, `true`/`false`, blocks and `if`.

use crate::node::{impl_display_via_serialize, Node, NodeData};
use crate::syntax_kind::NodeKind;
use jsir_core::{indent, IrError, INDENT_WIDTH};

// ============================================================================
// EmptyStatement
// ============================================================================

/// A no-op statement.
#[derive(Debug, Default)]
pub struct EmptyStatement {
    pub data: NodeData,
}

impl EmptyStatement {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for EmptyStatement {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn kind(&self) -> NodeKind {
        NodeKind::EmptyStatement
    }

    fn serialize(&self) -> String {
        ";".to_string()
    }
}

// ============================================================================
// BooleanLiteral
// ============================================================================

#[derive(Debug)]
pub struct BooleanLiteral {
    pub data: NodeData,
    pub value: bool,
}

impl BooleanLiteral {
    pub fn new(value: bool) -> Self {
        Self {
            data: NodeData::new(),
            value,
        }
    }
}

/// Dynamic construction: anything other than a JSON boolean is rejected.
impl TryFrom<&serde_json::Value> for BooleanLiteral {
    type Error = IrError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value.as_bool() {
            Some(b) => Ok(BooleanLiteral::new(b)),
            None => Err(IrError::invalid_argument(
                NodeKind::BooleanLiteral.name(),
                format!("requires a boolean value, got `{}`", value),
            )),
        }
    }
}

impl Node for BooleanLiteral {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn kind(&self) -> NodeKind {
        NodeKind::BooleanLiteral
    }

    fn serialize(&self) -> String {
        self.value.to_string()
    }
}

// ============================================================================
// BlockStatement
// ============================================================================

/// A braced statement list.
///
/// `statements` distinguishes an absent body (`None`, rendered `{}`) from a
/// present but empty one (`Some(vec![])`, rendered `{` newline `}`).
#[derive(Debug)]
pub struct BlockStatement {
    pub data: NodeData,
    pub statements: Option<Vec<Box<dyn Node>>>,
}

impl BlockStatement {
    pub fn new(statements: Option<Vec<Box<dyn Node>>>) -> Self {
        let block = Self {
            data: NodeData::new(),
            statements,
        };
        for stmt in block.statements.iter().flatten() {
            block.become_parent_of(stmt.as_ref());
        }
        block
    }

    /// A block with no body at all: `{}`.
    pub fn absent() -> Self {
        Self::new(None)
    }

    pub fn with_statements(statements: Vec<Box<dyn Node>>) -> Self {
        Self::new(Some(statements))
    }
}

impl Default for BlockStatement {
    fn default() -> Self {
        Self::absent()
    }
}

impl Node for BlockStatement {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn kind(&self) -> NodeKind {
        NodeKind::BlockStatement
    }

    fn serialize(&self) -> String {
        let mut out = String::from("{");
        if let Some(statements) = &self.statements {
            out.push('\n');
            for stmt in statements {
                out.push_str(&indent(&stmt.serialize(), INDENT_WIDTH));
                out.push('\n');
            }
        }
        out.push('}');
        out
    }
}

// ============================================================================
// ConditionalStatement
// ============================================================================

/// An `if` with an optional `else`.
#[derive(Debug)]
pub struct ConditionalStatement {
    pub data: NodeData,
    pub condition: Box<dyn Node>,
    pub then_statement: Box<dyn Node>,
    pub else_statement: Option<Box<dyn Node>>,
}

impl ConditionalStatement {
    /// A missing then-branch becomes an [`EmptyStatement`].
    pub fn new(
        condition: Box<dyn Node>,
        then_statement: Option<Box<dyn Node>>,
        else_statement: Option<Box<dyn Node>>,
    ) -> Self {
        let stmt = Self {
            data: NodeData::new(),
            condition,
            then_statement: then_statement.unwrap_or_else(|| EmptyStatement::new().boxed()),
            else_statement,
        };
        stmt.become_parent_of(stmt.condition.as_ref());
        stmt.become_parent_of(stmt.then_statement.as_ref());
        if let Some(else_stmt) = &stmt.else_statement {
            stmt.become_parent_of(else_stmt.as_ref());
        }
        stmt
    }
}

impl Node for ConditionalStatement {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn kind(&self) -> NodeKind {
        NodeKind::ConditionalStatement
    }

    fn serialize(&self) -> String {
        let mut out = String::from("if (");
        out.push_str(&self.condition.serialize());
        out.push_str(") ");
        out.push_str(&self.then_statement.serialize());
        // `else` follows the then-branch text directly.
        if let Some(else_stmt) = &self.else_statement {
            out.push_str("else ");
            out.push_str(&else_stmt.serialize());
        }
        out
    }
}

impl_display_via_serialize!(EmptyStatement, BooleanLiteral, BlockStatement, ConditionalStatement);
