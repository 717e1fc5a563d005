//! Minor Planet Center orbit lookup
//!
//! Queries the MPC `search_orbits` web service by asteroid number. The
//! service answers with a JSON array of orbit records; numeric fields are
//! sometimes delivered as strings.

use reqwest::blocking::Client;
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, info};
use url::Url;

use crate::cli::SecretString;
use crate::client::{build_client, check_status, map_send_error};
use crate::config::MpcConfig;
use crate::errors::SsoError;

/// One orbit record
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRecord {
    pub name: Option<String>,
    pub number: Option<u32>,
    pub designation: Option<String>,
    /// Tisserand parameter with respect to Jupiter
    pub tisserand_jupiter: Option<f64>,
    /// Every field of the record as received
    pub fields: Map<String, JsonValue>,
}

impl ObjectRecord {
    pub fn from_json(value: JsonValue) -> Result<Self, SsoError> {
        let fields = match value {
            JsonValue::Object(map) => map,
            other => {
                return Err(SsoError::Service(format!(
                    "expected an orbit record object, got {}",
                    other
                )))
            }
        };

        Ok(Self {
            name: string_field(&fields, "name"),
            number: integer_field(&fields, "number"),
            designation: string_field(&fields, "designation"),
            tisserand_jupiter: number_field(&fields, "tisserand_jupiter"),
            fields,
        })
    }

    /// "name tisserand" line; missing values print as "--"
    pub fn summary(&self) -> String {
        let name = self
            .name
            .clone()
            .or_else(|| self.designation.clone())
            .unwrap_or_else(|| "--".to_string());
        let tisserand = self
            .tisserand_jupiter
            .map(|t| t.to_string())
            .unwrap_or_else(|| "--".to_string());
        format!("{} {}", name, tisserand)
    }
}

fn string_field(fields: &Map<String, JsonValue>, key: &str) -> Option<String> {
    match fields.get(key)? {
        JsonValue::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-negative integer that fits a `u32`; anything else is dropped
fn integer_field(fields: &Map<String, JsonValue>, key: &str) -> Option<u32> {
    let value = match fields.get(key)? {
        JsonValue::Number(n) => n.as_u64()?,
        JsonValue::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    u32::try_from(value).ok()
}

fn number_field(fields: &Map<String, JsonValue>, key: &str) -> Option<f64> {
    match fields.get(key)? {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Client for the MPC orbit search service
#[derive(Debug)]
pub struct MpcClient {
    client: Client,
    url: Url,
    username: String,
    password: SecretString,
    timeout: f64,
}

impl MpcClient {
    pub fn new(config: &MpcConfig) -> Result<Self, SsoError> {
        Ok(Self {
            client: build_client(config.timeout)?,
            url: Url::parse(&config.url)?,
            username: config.username.clone(),
            password: config.password.clone(),
            timeout: config.timeout,
        })
    }

    /// All orbit records matching an asteroid number
    pub fn query_asteroid(&self, number: u32) -> Result<Vec<ObjectRecord>, SsoError> {
        info!(url = %self.url, number, "Querying MPC orbits");

        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("number", &number.to_string())
            .append_pair("json", "1");

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(self.password.as_str()))
            .send()
            .map_err(|e| map_send_error(e, self.timeout))?;
        let response = check_status(response)?;

        let body = response.text().map_err(|e| map_send_error(e, self.timeout))?;
        let records = parse_records(&body)?;
        debug!(count = records.len(), "Received MPC records");

        Ok(records)
    }
}

/// Decode the JSON array answer
pub fn parse_records(body: &str) -> Result<Vec<ObjectRecord>, SsoError> {
    let value: JsonValue = serde_json::from_str(body)?;
    match value {
        JsonValue::Array(items) => items.into_iter().map(ObjectRecord::from_json).collect(),
        JsonValue::Null => Ok(Vec::new()),
        other => Err(SsoError::Service(format!("expected a JSON array, got {}", other))),
    }
}

/// First record of a lookup, or `NoResults`
pub fn first_record(records: Vec<ObjectRecord>, number: u32) -> Result<ObjectRecord, SsoError> {
    records
        .into_iter()
        .next()
        .ok_or_else(|| SsoError::NoResults(format!("no MPC orbit for asteroid number {}", number)))
}
