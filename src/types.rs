// src/types.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::EtlError;

/// A JSON scalar found at a leaf of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

/// One level of the downloaded document: either a value or a keyed mapping.
/// Branch entries keep the key order of the source document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Scalar),
    Branch(Vec<(String, Node)>),
}

impl Node {
    /// Convert a parsed JSON value, rejecting arrays. `keys` is the path of
    /// `value` inside the document, used for error reporting.
    pub fn from_value(value: Value, keys: &mut Vec<String>) -> Result<Self, EtlError> {
        match value {
            Value::Null => Ok(Node::Leaf(Scalar::Null)),
            Value::Bool(b) => Ok(Node::Leaf(Scalar::Bool(b))),
            Value::Number(n) => Ok(Node::Leaf(Scalar::Number(n))),
            Value::String(s) => Ok(Node::Leaf(Scalar::Text(s))),
            Value::Array(_) => Err(EtlError::shape(keys, "arrays are not supported")),
            Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, child) in map {
                    keys.push(key);
                    let node = Node::from_value(child, keys)?;
                    let key = keys.pop().unwrap_or_default();
                    entries.push((key, node));
                }
                Ok(Node::Branch(entries))
            }
        }
    }

    /// Number of scalar leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(entries) => entries.iter().map(|(_, n)| n.leaf_count()).sum(),
        }
    }
}

/// The downloaded document: period → region → data type → …
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataset {
    pub root: Node,
}

impl RawDataset {
    pub fn from_value(value: Value) -> Result<Self, EtlError> {
        let root = Node::from_value(value, &mut Vec::new())?;
        Ok(Self { root })
    }

    pub fn from_json_str(url: &str, body: &str) -> Result<Self, EtlError> {
        let value: Value = serde_json::from_str(body).map_err(|source| EtlError::Parse {
            url: url.to_string(),
            source,
        })?;
        Self::from_value(value)
    }
}

/// One leaf of the dataset with its key path padded to five levels.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRecord {
    pub period: String,
    pub region: String,
    pub data_type: String,
    pub category: Option<String>,
    pub offense: Option<String>,
    pub value: Option<Scalar>,
}

impl FlatRecord {
    /// Every textual field, a textual value included.
    pub fn strings(&self) -> impl Iterator<Item = &str> {
        let value = match &self.value {
            Some(Scalar::Text(s)) => Some(s.as_str()),
            _ => None,
        };
        [Some(self.period.as_str()), Some(self.region.as_str()), Some(self.data_type.as_str())]
            .into_iter()
            .chain([self.category.as_deref(), self.offense.as_deref(), value])
            .flatten()
    }
}

/// Column labels of the output table, in output order.
pub const COLUMNS: [&str; 7] = [
    "období",
    "obvod",
    "typ dat",
    "kategorie",
    "přestupek",
    "počet",
    "částka",
];

/// A cleaned row of the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(rename = "období")]
    pub period: Option<NaiveDate>,
    #[serde(rename = "obvod")]
    pub region: String,
    #[serde(rename = "typ dat")]
    pub data_type: String,
    #[serde(rename = "kategorie")]
    pub category: Option<String>,
    #[serde(rename = "přestupek")]
    pub offense: Option<String>,
    #[serde(rename = "počet")]
    pub count: Option<i64>,
    #[serde(rename = "částka")]
    pub amount: Option<i64>,
}

impl NormalizedRecord {
    /// At most one of `count` and `amount` carries a value.
    pub fn is_consistent(&self) -> bool {
        self.count.is_none() || self.amount.is_none()
    }
}
