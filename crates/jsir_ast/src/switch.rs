//! `switch` statements and their case groups.

use crate::node::{impl_display_via_serialize, Node, NodeData};
use crate::syntax_kind::NodeKind;
use jsir_core::{indent, INDENT_WIDTH};

/// One group of `case` labels sharing a statement body.
///
/// Several labels give C-style fallthrough grouping:
///
/// ```text
/// case 1:
/// case 2:
///     <body>
/// ```
///
/// A member with no labels is the `default:` clause.
#[derive(Debug)]
pub struct SwitchMember {
    pub data: NodeData,
    pub labels: Vec<String>,
    pub statements: Vec<Box<dyn Node>>,
}

impl SwitchMember {
    pub fn new<L, S>(labels: L, statements: Vec<Box<dyn Node>>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let member = Self {
            data: NodeData::new(),
            labels: labels.into_iter().map(Into::into).collect(),
            statements,
        };
        for stmt in &member.statements {
            member.become_parent_of(stmt.as_ref());
        }
        member
    }

    pub fn default_clause(statements: Vec<Box<dyn Node>>) -> Self {
        Self::new(Vec::<String>::new(), statements)
    }

    pub fn is_default(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Node for SwitchMember {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn kind(&self) -> NodeKind {
        NodeKind::SwitchMember
    }

    fn serialize(&self) -> String {
        let mut out = String::new();
        if self.is_default() {
            out.push_str("default:\n");
        }
        for label in &self.labels {
            out.push_str("case ");
            out.push_str(label);
            out.push_str(":\n");
        }
        let body: Vec<String> = self
            .statements
            .iter()
            .map(|stmt| indent(&stmt.serialize(), INDENT_WIDTH))
            .collect();
        out.push_str(&body.join("\n"));
        out
    }
}

/// A full `switch`. `members` of `None` renders an empty-bodied `{}`.
#[derive(Debug)]
pub struct SwitchStatement {
    pub data: NodeData,
    pub discriminant: Box<dyn Node>,
    pub members: Option<Vec<SwitchMember>>,
}

impl SwitchStatement {
    pub fn new(discriminant: Box<dyn Node>, members: Option<Vec<SwitchMember>>) -> Self {
        let stmt = Self {
            data: NodeData::new(),
            discriminant,
            members,
        };
        stmt.become_parent_of(stmt.discriminant.as_ref());
        for member in stmt.members.iter().flatten() {
            stmt.become_parent_of(member);
        }
        stmt
    }
}

impl Node for SwitchStatement {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn kind(&self) -> NodeKind {
        NodeKind::SwitchStatement
    }

    fn serialize(&self) -> String {
        let mut out = format!("switch ({}) {{", self.discriminant.serialize());
        if let Some(members) = &self.members {
            out.push('\n');
            for member in members {
                out.push_str(&indent(&member.serialize(), INDENT_WIDTH));
                out.push('\n');
            }
        }
        out.push('}');
        out
    }
}

impl_display_via_serialize!(SwitchMember, SwitchStatement);
