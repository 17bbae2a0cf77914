// ABOUTME: Agent that fabricates plausible supply chain data for demos and downstream agents.
// ABOUTME: Produces suppliers, routes, and products in requested quantities plus a generation timestamp.

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::Value;
use ulid::Ulid;

use verdant_core::{Agent, AgentError, Context};

use crate::records::{Product, Route, Supplier, SupplyChainData, TransportMode};

/// Tool name the generator is registered under.
pub const GENERATOR_TOOL_NAME: &str = "generateSupplyChainData";

const COMPANIES: [&str; 10] = [
    "GreenTech",
    "EcoSupply",
    "SustainCorp",
    "CleanSource",
    "BioMaterials",
    "RenewCo",
    "EarthFirst",
    "GreenLogistics",
    "EcoFriendly",
    "SolarSupply",
];

const LOCATIONS: [&str; 10] = [
    "USA",
    "Germany",
    "Japan",
    "Canada",
    "Sweden",
    "Netherlands",
    "Denmark",
    "Norway",
    "Switzerland",
    "Finland",
];

const CITIES: [&str; 10] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
];

const CATEGORIES: [&str; 8] = [
    "Electronics",
    "Textiles",
    "Food",
    "Chemicals",
    "Automotive",
    "Furniture",
    "Packaging",
    "Medical",
];

const CERTIFICATIONS: [&str; 5] = ["ISO 14001", "LEED", "Energy Star", "Fair Trade", "Organic"];

/// Default and maximum counts applied when parameters omit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorDefaults {
    pub suppliers: usize,
    pub routes: usize,
    pub products: usize,
    /// Largest count accepted for any single collection.
    pub max_count: usize,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            suppliers: 20,
            routes: 30,
            products: 15,
            max_count: 10_000,
        }
    }
}

/// Resolved collection sizes for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Counts {
    suppliers: usize,
    routes: usize,
    products: usize,
}

/// Generates random supply chain data. Stateless apart from its defaults.
#[derive(Debug, Clone, Default)]
pub struct DataGeneratorAgent {
    defaults: GeneratorDefaults,
}

impl DataGeneratorAgent {
    pub fn new(defaults: GeneratorDefaults) -> Self {
        Self { defaults }
    }

    /// Resolve counts from the call parameters.
    ///
    /// `null` means "all defaults". Otherwise parameters must be an object
    /// whose count fields, when present and non-null, are non-negative
    /// integers no larger than `max_count`.
    fn counts(&self, parameters: &Value) -> Result<Counts, AgentError> {
        let fields = match parameters {
            Value::Null => {
                return Ok(Counts {
                    suppliers: self.defaults.suppliers,
                    routes: self.defaults.routes,
                    products: self.defaults.products,
                });
            }
            Value::Object(fields) => fields,
            other => {
                return Err(AgentError::InvalidParameters(format!(
                    "parameters must be an object, got {}",
                    json_kind(other)
                )));
            }
        };

        Ok(Counts {
            suppliers: self.count(fields, "suppliers", self.defaults.suppliers)?,
            routes: self.count(fields, "routes", self.defaults.routes)?,
            products: self.count(fields, "products", self.defaults.products)?,
        })
    }

    fn count(&self, fields: &Context, key: &str, default: usize) -> Result<usize, AgentError> {
        let value = match fields.get(key) {
            None | Some(Value::Null) => return Ok(default),
            Some(value) => value,
        };

        let count = value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                AgentError::InvalidParameters(format!(
                    "{key} must be a non-negative integer, got {value}"
                ))
            })?;

        if count > self.defaults.max_count {
            return Err(AgentError::InvalidParameters(format!(
                "{key} must be at most {}, got {count}",
                self.defaults.max_count
            )));
        }
        Ok(count)
    }

    fn generate(&self, counts: Counts) -> SupplyChainData {
        let mut rng = rand::thread_rng();
        SupplyChainData {
            suppliers: generate_suppliers(&mut rng, counts.suppliers),
            routes: generate_routes(&mut rng, counts.routes),
            products: generate_products(&mut rng, counts.products),
            timestamp: Utc::now(),
        }
    }
}

#[async_trait]
impl Agent for DataGeneratorAgent {
    async fn process(&self, parameters: &Value, _context: &Context) -> Result<Value, AgentError> {
        let counts = self.counts(parameters)?;
        tracing::info!(
            suppliers = counts.suppliers,
            routes = counts.routes,
            products = counts.products,
            "generating supply chain data"
        );

        let data = self.generate(counts);
        serde_json::to_value(data)
            .map_err(|e| AgentError::Failed(format!("failed to encode generated data: {e}")))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn generate_suppliers<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Supplier> {
    (0..count)
        .map(|i| Supplier {
            id: Ulid::new(),
            name: format!(
                "{} {}",
                COMPANIES[i % COMPANIES.len()],
                i / COMPANIES.len() + 1
            ),
            location: LOCATIONS[i % LOCATIONS.len()].to_string(),
            sustainability_score: rng.gen_range(60..100),
            cost: rng.gen_range(25..75),
            certifications: random_certifications(rng),
            carbon_footprint: rng.gen_range(100..600),
        })
        .collect()
}

pub fn generate_routes<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Route> {
    (0..count)
        .map(|_| {
            let mode = TransportMode::ALL[rng.gen_range(0..TransportMode::ALL.len())];
            Route {
                id: Ulid::new(),
                origin: pick(rng, &CITIES).to_string(),
                destination: pick(rng, &CITIES).to_string(),
                mode,
                distance: rng.gen_range(100..2100),
                emissions_per_mile: mode.emissions_per_mile(),
                cost: rng.gen_range(200..1200),
            }
        })
        .collect()
}

pub fn generate_products<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            id: Ulid::new(),
            name: format!("Product {}", i + 1),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            current_stock: rng.gen_range(100..1100),
            reorder_point: rng.gen_range(50..250),
            waste_rate: rng.gen_range(0.0..0.1),
            holding_cost: rng.gen_range(5..25),
        })
        .collect()
}

/// One to three distinct certifications.
fn random_certifications<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(1..=3);
    CERTIFICATIONS
        .choose_multiple(rng, count)
        .map(|c| c.to_string())
        .collect()
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}
