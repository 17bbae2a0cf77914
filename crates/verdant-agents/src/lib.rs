// ABOUTME: Concrete agent implementations registered by the verdant server.
// ABOUTME: Currently provides the supply chain data generator and the records it produces.

pub mod generator;
pub mod records;

pub use generator::{DataGeneratorAgent, GENERATOR_TOOL_NAME, GeneratorDefaults};
pub use records::{Product, Route, Supplier, SupplyChainData, TransportMode};
