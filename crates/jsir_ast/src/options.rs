//! Module output options.

use serde::{Deserialize, Serialize};

/// Options controlling how a [`Module`](crate::Module) renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleOptions {
    /// Emit the `"use strict"` directive before the module body.
    pub use_strict: bool,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self { use_strict: true }
    }
}

/// Parse module options from a JSON string.
pub fn parse_module_options(content: &str) -> Result<ModuleOptions, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_strict() {
        assert!(ModuleOptions::default().use_strict);
        assert!(parse_module_options("{}").unwrap().use_strict);
    }

    #[test]
    fn test_camel_case_key() {
        let opts = parse_module_options(r#"{ "useStrict": false }"#).unwrap();
        assert!(!opts.use_strict);
    }
}
