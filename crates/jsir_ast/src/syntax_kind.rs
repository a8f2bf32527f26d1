//! NodeKind enum - the closed set of IR node kinds.

use std::fmt;

/// The kind of an IR node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NodeKind {
    Module = 0,
    EmptyStatement = 1,
    BooleanLiteral = 2,
    BlockStatement = 3,
    ConditionalStatement = 4,
    SwitchMember = 5,
    SwitchStatement = 6,
    VariableDeclarator = 7,
    VariableStatement = 8,
    FunctionNode = 9,
}

impl NodeKind {
    /// The name used in error messages and JSON descriptions.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Module => "Module",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::BooleanLiteral => "BooleanLiteral",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::ConditionalStatement => "ConditionalStatement",
            NodeKind::SwitchMember => "SwitchMember",
            NodeKind::SwitchStatement => "SwitchStatement",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::VariableStatement => "VariableStatement",
            NodeKind::FunctionNode => "FunctionNode",
        }
    }

    /// Look up a kind by its name.
    pub fn from_name(name: &str) -> Option<NodeKind> {
        Some(match name {
            "Module" => NodeKind::Module,
            "EmptyStatement" => NodeKind::EmptyStatement,
            "BooleanLiteral" => NodeKind::BooleanLiteral,
            "BlockStatement" => NodeKind::BlockStatement,
            "ConditionalStatement" => NodeKind::ConditionalStatement,
            "SwitchMember" => NodeKind::SwitchMember,
            "SwitchStatement" => NodeKind::SwitchStatement,
            "VariableDeclarator" => NodeKind::VariableDeclarator,
            "VariableStatement" => NodeKind::VariableStatement,
            "FunctionNode" => NodeKind::FunctionNode,
            _ => return None,
        })
    }

    /// Whether nodes of this kind own child nodes.
    pub fn is_composite(self) -> bool {
        !matches!(
            self,
            NodeKind::EmptyStatement | NodeKind::BooleanLiteral
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup() {
        assert_eq!(NodeKind::from_name("SwitchMember"), Some(NodeKind::SwitchMember));
        assert_eq!(NodeKind::from_name("ForStatement"), None);
        assert_eq!(NodeKind::FunctionNode.to_string(), "FunctionNode");
    }

    #[test]
    fn test_is_composite() {
        assert!(!NodeKind::BooleanLiteral.is_composite());
        assert!(NodeKind::VariableDeclarator.is_composite());
    }
}
