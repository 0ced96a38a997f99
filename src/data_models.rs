use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Retrieval technique the backend should use. Its semantics live entirely in the backend.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Tfidf,
    Bow,
    Word2vec,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Tfidf, Method::Bow, Method::Word2vec];

    /// Name used on the wire and in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Tfidf => "tfidf",
            Method::Bow => "bow",
            Method::Word2vec => "word2vec",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Method::Tfidf => "TF-IDF",
            Method::Bow => "Bag of Words",
            Method::Word2vec => "Word2Vec",
        }
    }

    /// Lenient parse used for URL parameters: anything unknown falls back to tfidf.
    pub fn from_param(raw: Option<&str>) -> Method {
        match raw {
            None | Some("") => Method::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(method = raw, "unknown search method, falling back to tfidf");
                Method::default()
            }),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tfidf" => Ok(Method::Tfidf),
            "bow" => Ok(Method::Bow),
            "word2vec" => Ok(Method::Word2vec),
            other => Err(format!("unknown search method: {other}")),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchRequest {
    pub query: String,
    pub method: Method,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, method: Method) -> SearchRequest {
        SearchRequest {
            query: query.into(),
            method,
        }
    }
}

/// One item as returned by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    #[serde(
        rename = "Nombre",
        default,
        deserialize_with = "deserialize_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(rename = "Titulo")]
    pub title: String,

    #[serde(rename = "Contenido")]
    pub content: String,

    #[serde(rename = "Similitud")]
    pub similarity: f64,
}

impl SearchResult {
    /// Stable key used to address a result from the detail view.
    /// The backend's document name when it sends one, otherwise `#<position>`.
    pub fn key(&self, position: usize) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("#{position}"),
        }
    }
}

/// Document names arrive as strings or bare numbers; anything else is treated as absent.
fn deserialize_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(name)) => Some(name),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct EvaluationMetrics {
    #[serde(default)]
    pub precision: Option<f64>,
    #[serde(default)]
    pub recall: Option<f64>,
    #[serde(default)]
    pub f1_score: Option<f64>,
}

/// Body of a successful backend response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SearchOutcome {
    #[serde(rename = "resultados", default)]
    pub results: Vec<SearchResult>,

    #[serde(flatten)]
    pub metrics: EvaluationMetrics,
}

impl SearchOutcome {
    /// Finds a result by the key produced by [`SearchResult::key`].
    pub fn find(&self, key: &str) -> Option<&SearchResult> {
        self.results
            .iter()
            .enumerate()
            .find(|(position, result)| result.key(*position) == key)
            .map(|(_, result)| result)
    }
}
