use kimhull::core::models::record::StructureRecord;
use kimhull::core::models::species::SpeciesList;
use kimhull::core::source::StructureSource;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

const API_URL: &str = "https://query.openkim.org/api";
const PROPERTY_ID: &str =
    "tag:staff@noreply.openkim.org,2023-02-21:property/binding-energy-crystal";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("OpenKIM query failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// A blocking client for the OpenKIM structured-data query service.
///
/// Queries the binding-energy-crystal property for every structure whose
/// species are a subset of the requested species list. Reference data
/// (`meta.type` "rd") are selected when no model is given; otherwise the test
/// results (`meta.type` "tr") of that model.
#[derive(Debug)]
pub struct OpenKimClient {
    client: reqwest::blocking::Client,
    api_url: String,
}

impl Default for OpenKimClient {
    fn default() -> Self {
        Self::new(API_URL)
    }
}

impl OpenKimClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_url: api_url.into(),
        }
    }

    fn build_query(species: &SpeciesList, model: Option<&str>) -> serde_json::Value {
        let mut query = serde_json::Map::new();
        query.insert(
            "meta.type".to_string(),
            json!(if model.is_some() { "tr" } else { "rd" }),
        );
        if let Some(model) = model {
            query.insert("meta.subject.extended-id".to_string(), json!(model));
        }
        query.insert("property-id".to_string(), json!(PROPERTY_ID));
        query.insert(
            "stoichiometric-species.source-value".to_string(),
            json!({ "$not": { "$elemMatch": { "$nin": species.names() } } }),
        );
        serde_json::Value::Object(query)
    }
}

impl StructureSource for OpenKimClient {
    type Error = QueryError;

    fn fetch(
        &self,
        species: &SpeciesList,
        model: Option<&str>,
    ) -> Result<Vec<StructureRecord>, Self::Error> {
        let query = Self::build_query(species, model);
        let fields = json!({
            "prototype-label.source-value": 1,
            "stoichiometric-species.source-value": 1,
            "binding-potential-energy-per-formula.source-value": 1,
        });
        debug!(%query, "sending OpenKIM query");

        let entries: Vec<WireEntry> = self
            .client
            .post(&self.api_url)
            .form(&[
                ("query", query.to_string()),
                ("fields", fields.to_string()),
                ("database", "data".to_string()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        info!(records = entries.len(), "OpenKIM query returned");
        Ok(entries.into_iter().map(WireEntry::into_record).collect())
    }
}

/// OpenKIM wraps every field in a `source-value` envelope.
#[derive(Debug, Deserialize)]
struct WireField<T> {
    #[serde(rename = "source-value")]
    source_value: T,
}

#[derive(Debug, Deserialize)]
struct WireEntry {
    #[serde(rename = "prototype-label")]
    prototype_label: WireField<String>,
    #[serde(rename = "stoichiometric-species")]
    species: WireField<Vec<String>>,
    #[serde(rename = "binding-potential-energy-per-formula")]
    binding_energy: WireField<f64>,
}

impl WireEntry {
    fn into_record(self) -> StructureRecord {
        StructureRecord {
            prototype_label: self.prototype_label.source_value,
            species: self.species.source_value,
            binding_energy_per_formula: self.binding_energy.source_value,
        }
    }
}
