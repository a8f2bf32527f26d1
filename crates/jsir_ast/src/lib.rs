//! jsir_ast: IR node definitions and their source rendering.
//!
//! Every node implements the [`Node`] contract. Composite nodes own their
//! children and render them depth-first, indenting each child's text before
//! splicing it into their own output.

pub mod declaration;
pub mod module;
pub mod node;
pub mod options;
pub mod statement;
pub mod switch;
pub mod syntax_kind;

// Re-export key types
pub use declaration::{FunctionNode, VariableDeclarator, VariableStatement};
pub use module::Module;
pub use node::{Node, NodeData};
pub use options::ModuleOptions;
pub use statement::{BlockStatement, BooleanLiteral, ConditionalStatement, EmptyStatement};
pub use switch::{SwitchMember, SwitchStatement};
pub use syntax_kind::NodeKind;
