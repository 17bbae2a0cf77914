// ABOUTME: Static tool metadata served by the tool listing endpoint.
// ABOUTME: Descriptors are informational and are not checked against the live registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Declared type and optional default of one tool parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParameterSpec {
    fn number(default: i64) -> Self {
        Self {
            kind: "number".to_string(),
            default: Some(json!(default)),
        }
    }

    fn object() -> Self {
        Self {
            kind: "object".to_string(),
            default: None,
        }
    }
}

/// Describes one invocable tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: BTreeMap<String, ParameterSpec>,
}

impl ToolDescriptor {
    fn new(name: &str, description: &str, parameters: Vec<(&str, ParameterSpec)>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters: parameters
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }
}

/// Return every declared tool, in declaration order.
///
/// `analyzeSuppliers` and `optimizeRoutes` are advertised without a backing
/// agent; invoking them yields "Tool not found".
pub fn tool_catalog() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "generateSupplyChainData",
            "Generate realistic supply chain data",
            vec![
                ("suppliers", ParameterSpec::number(20)),
                ("routes", ParameterSpec::number(30)),
                ("products", ParameterSpec::number(15)),
            ],
        ),
        ToolDescriptor::new(
            "analyzeSuppliers",
            "Analyze supplier sustainability",
            vec![("data", ParameterSpec::object())],
        ),
        ToolDescriptor::new(
            "optimizeRoutes",
            "Optimize logistics routes",
            vec![("data", ParameterSpec::object())],
        ),
    ]
}
