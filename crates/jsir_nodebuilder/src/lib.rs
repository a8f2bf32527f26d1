//! jsir_nodebuilder: IR construction from JSON descriptions.
//!
//! Typed constructors in `jsir_ast` cannot receive a non-boolean literal or a
//! condition that is not a node. A JSON description can, so every shape check
//! happens here, before any node enters the tree.

use jsir_ast::{
    BlockStatement, BooleanLiteral, ConditionalStatement, EmptyStatement, FunctionNode, Module,
    ModuleOptions, Node, NodeKind, SwitchMember, SwitchStatement, VariableDeclarator,
    VariableStatement,
};
use jsir_core::{IrError, Result};
use serde_json::{Map, Value};
use std::path::Path;

type Object = Map<String, Value>;

/// Builds IR trees from JSON.
///
/// A document looks like:
///
/// ```json
/// { "options": { "useStrict": true },
///   "body": [ { "kind": "EmptyStatement" } ] }
/// ```
///
/// Every node is an object tagged by `"kind"`. Optional fields may be omitted
/// or `null`; both mean "absent".
///
/// # Example
/// ```
/// use jsir_ast::Node;
/// use jsir_nodebuilder::NodeBuilder;
/// let module = NodeBuilder::new()
///     .parse_module(r#"{ "body": [ { "kind": "BooleanLiteral", "value": true } ] }"#)
///     .unwrap();
/// assert_eq!(module.serialize(), "\"use strict\"\n\ntrue");
/// ```
pub struct NodeBuilder;

impl NodeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Parse and build a module from JSON text.
    pub fn parse_module(&self, content: &str) -> Result<Module> {
        let doc: Value = serde_json::from_str(content)?;
        self.build_module(&doc)
    }

    /// Read, parse and build a module from a JSON file.
    pub fn parse_module_file(&self, path: impl AsRef<Path>) -> Result<Module> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading IR description");
        let content = std::fs::read_to_string(path)?;
        self.parse_module(&content)
    }

    /// Build a module from a parsed JSON document.
    pub fn build_module(&self, doc: &Value) -> Result<Module> {
        let obj = expect_object(doc, NodeKind::Module)?;
        let options = match field(obj, "options") {
            Some(opts) => serde_json::from_value::<ModuleOptions>(opts.clone())?,
            None => ModuleOptions::default(),
        };

        // Build every statement before creating the module so a bad node
        // leaves nothing half-registered.
        let body = match field(obj, "body") {
            Some(body) => self.build_list(expect_array(body, NodeKind::Module, "body")?)?,
            None => Vec::new(),
        };

        let mut module = Module::with_options(options);
        let len = module.push_all(body);
        tracing::debug!(statements = len, use_strict = module.use_strict(), "built module");
        Ok(module)
    }

    /// Build any single node from its JSON description.
    pub fn build_node(&self, value: &Value) -> Result<Box<dyn Node>> {
        let obj = value.as_object().ok_or_else(|| {
            IrError::invalid_argument("Node", format!("expected a node object, got `{}`", value))
        })?;
        let kind_name = obj.get("kind").and_then(Value::as_str).ok_or_else(|| {
            IrError::invalid_argument("Node", "node object is missing a string `kind`")
        })?;
        let kind = NodeKind::from_name(kind_name).ok_or_else(|| {
            IrError::invalid_argument("Node", format!("unknown node kind `{}`", kind_name))
        })?;
        tracing::trace!(%kind, "building node");

        let node = match kind {
            NodeKind::EmptyStatement => EmptyStatement::new().boxed(),
            NodeKind::BooleanLiteral => self.build_boolean(obj)?.boxed(),
            NodeKind::BlockStatement => self.build_block(obj)?.boxed(),
            NodeKind::ConditionalStatement => self.build_conditional(obj)?.boxed(),
            NodeKind::SwitchMember => self.build_switch_member(obj)?.boxed(),
            NodeKind::SwitchStatement => self.build_switch(obj)?.boxed(),
            NodeKind::VariableDeclarator => self.build_declarator(obj)?.boxed(),
            NodeKind::VariableStatement => self.build_variable_statement(obj)?.boxed(),
            NodeKind::FunctionNode => self.build_function(obj)?.boxed(),
            NodeKind::Module => {
                return Err(IrError::invalid_argument(
                    "Node",
                    "a Module cannot be nested inside another node",
                ))
            }
        };
        Ok(node)
    }

    fn build_list(&self, values: &[Value]) -> Result<Vec<Box<dyn Node>>> {
        values.iter().map(|v| self.build_node(v)).collect()
    }

    fn build_boolean(&self, obj: &Object) -> Result<BooleanLiteral> {
        BooleanLiteral::try_from(obj.get("value").unwrap_or(&Value::Null))
    }

    fn build_block(&self, obj: &Object) -> Result<BlockStatement> {
        let statements = match field(obj, "statements") {
            Some(v) => Some(self.build_list(expect_array(
                v,
                NodeKind::BlockStatement,
                "statements",
            )?)?),
            None => None,
        };
        Ok(BlockStatement::new(statements))
    }

    fn build_conditional(&self, obj: &Object) -> Result<ConditionalStatement> {
        let condition = match field(obj, "condition") {
            Some(v) if v.is_object() => self.build_node(v)?,
            _ => {
                return Err(IrError::invalid_argument(
                    NodeKind::ConditionalStatement.name(),
                    "requires valid condition",
                ))
            }
        };
        let then_statement = self.build_optional(obj, "then")?;
        let else_statement = self.build_optional(obj, "else")?;
        Ok(ConditionalStatement::new(condition, then_statement, else_statement))
    }

    fn build_switch_member(&self, obj: &Object) -> Result<SwitchMember> {
        let labels = match field(obj, "labels") {
            Some(v) => expect_array(v, NodeKind::SwitchMember, "labels")?
                .iter()
                .map(label_text)
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };
        let statements = match field(obj, "statements") {
            Some(v) => self.build_list(expect_array(v, NodeKind::SwitchMember, "statements")?)?,
            None => Vec::new(),
        };
        Ok(SwitchMember::new(labels, statements))
    }

    fn build_switch(&self, obj: &Object) -> Result<SwitchStatement> {
        let discriminant = match field(obj, "discriminant") {
            Some(v) => self.build_node(v)?,
            None => {
                return Err(IrError::invalid_argument(
                    NodeKind::SwitchStatement.name(),
                    "requires a discriminant",
                ))
            }
        };
        let members = match field(obj, "members") {
            Some(v) => Some(
                expect_array(v, NodeKind::SwitchStatement, "members")?
                    .iter()
                    .map(|m| {
                        let m = expect_tagged(m, NodeKind::SwitchMember)?;
                        self.build_switch_member(m)
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };
        Ok(SwitchStatement::new(discriminant, members))
    }

    fn build_declarator(&self, obj: &Object) -> Result<VariableDeclarator> {
        let name = obj.get("name").and_then(Value::as_str).ok_or_else(|| {
            IrError::invalid_argument(NodeKind::VariableDeclarator.name(), "requires a string `name`")
        })?;
        let initializer = self.build_optional(obj, "initializer")?;
        Ok(VariableDeclarator::new(name, initializer))
    }

    fn build_variable_statement(&self, obj: &Object) -> Result<VariableStatement> {
        let declarations = match field(obj, "declarations") {
            Some(v) => expect_array(v, NodeKind::VariableStatement, "declarations")?
                .iter()
                .map(|d| {
                    let d = expect_tagged(d, NodeKind::VariableDeclarator)?;
                    self.build_declarator(d)
                })
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };
        if declarations.is_empty() {
            return Err(IrError::invalid_argument(
                NodeKind::VariableStatement.name(),
                "requires at least one declarator",
            ));
        }
        Ok(VariableStatement::new(declarations))
    }

    fn build_function(&self, obj: &Object) -> Result<FunctionNode> {
        let name = match field(obj, "name") {
            Some(v) => v.as_str().ok_or_else(|| {
                IrError::invalid_argument(NodeKind::FunctionNode.name(), "`name` must be a string")
            })?,
            None => "",
        };
        let params = match field(obj, "params") {
            Some(v) => expect_array(v, NodeKind::FunctionNode, "params")?
                .iter()
                .map(|p| {
                    p.as_str().map(str::to_string).ok_or_else(|| {
                        IrError::invalid_argument(
                            NodeKind::FunctionNode.name(),
                            format!("parameter names must be strings, got `{}`", p),
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };
        let body = match field(obj, "body") {
            Some(v) => Some(self.build_block(expect_tagged(v, NodeKind::BlockStatement)?)?),
            None => None,
        };
        Ok(FunctionNode::new(name, params, body))
    }

    fn build_optional(&self, obj: &Object, key: &str) -> Result<Option<Box<dyn Node>>> {
        field(obj, key).map(|v| self.build_node(v)).transpose()
    }
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up `key`, treating an explicit `null` like a missing key.
fn field<'v>(obj: &'v Object, key: &str) -> Option<&'v Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn expect_object(value: &Value, kind: NodeKind) -> Result<&Object> {
    value.as_object().ok_or_else(|| {
        IrError::invalid_argument(kind.name(), format!("expected an object, got `{}`", value))
    })
}

/// An object whose `kind`, if given, must match `kind`.
fn expect_tagged(value: &Value, kind: NodeKind) -> Result<&Object> {
    let obj = expect_object(value, kind)?;
    match obj.get("kind").and_then(Value::as_str) {
        Some(name) if name != kind.name() => Err(IrError::invalid_argument(
            kind.name(),
            format!("expected kind `{}`, got `{}`", kind, name),
        )),
        _ => Ok(obj),
    }
}

fn expect_array<'v>(value: &'v Value, kind: NodeKind, key: &str) -> Result<&'v [Value]> {
    value.as_array().map(Vec::as_slice).ok_or_else(|| {
        IrError::invalid_argument(kind.name(), format!("`{}` must be an array", key))
    })
}

/// Case labels are source text; numbers and booleans are rendered as written.
fn label_text(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(IrError::invalid_argument(
            NodeKind::SwitchMember.name(),
            format!("labels must be strings, numbers or booleans, got `{}`", other),
        )),
    }
}
