//! The movie record as stored in the catalog and as served to clients.
//!
//! Source documents come from an external ingestion pipeline and are not
//! uniform: numbers sometimes arrive as strings, years carry trailing junk
//! (`"1999è"`), and Mongo-style extended JSON wrappers (`{"$numberInt": ..}`,
//! `{"$date": ..}`, `{"$oid": ..}`) show up in exported fixtures. Decoding is
//! therefore lenient per field; a field that cannot be interpreted becomes
//! `None` instead of failing the whole page.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::listing::parse_leading_int;

/// Precomputed vector fields that live on stored documents but must never be
/// returned to a client.
pub const EMBEDDING_FIELDS: &[&str] = &["plot_embedding", "plot_embedding_voyage_3_large"];

/// A single catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_title")]
    pub title: String,
    /// Release year, normalized to an integer. `None` serializes as `null`.
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub fullplot: Option<String>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    /// Runtime in minutes.
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub runtime: Option<i64>,
    /// Content rating, e.g. `PG-13`.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub rated: Option<String>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub directors: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub writers: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub lastupdated: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub num_mflix_comments: Option<i64>,
    #[serde(default, deserialize_with = "lenient_object", skip_serializing_if = "Option::is_none")]
    pub awards: Option<Awards>,
    #[serde(default, deserialize_with = "lenient_object", skip_serializing_if = "Option::is_none")]
    pub imdb: Option<Imdb>,
    #[serde(default, deserialize_with = "lenient_object", skip_serializing_if = "Option::is_none")]
    pub tomatoes: Option<Tomatoes>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Awards {
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub wins: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub nominations: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// IMDb rating aggregate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Imdb {
    #[serde(default, deserialize_with = "lenient_float", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub votes: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Rotten Tomatoes rating aggregate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tomatoes {
    #[serde(default, deserialize_with = "lenient_object", skip_serializing_if = "Option::is_none")]
    pub viewer: Option<TomatoesScore>,
    #[serde(default, deserialize_with = "lenient_object", skip_serializing_if = "Option::is_none")]
    pub critic: Option<TomatoesScore>,
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub fresh: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub rotten: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub production: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub dvd: Option<String>,
    #[serde(
        rename = "lastUpdated",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TomatoesScore {
    #[serde(default, deserialize_with = "lenient_float", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(
        rename = "numReviews",
        default,
        deserialize_with = "lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub num_reviews: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub meter: Option<i64>,
}

impl Movie {
    /// Decode a raw store document into a [`Movie`].
    ///
    /// `id` overrides whatever `_id` the document carries (the Postgres store
    /// keeps the key in its own column). Embedding fields are dropped before
    /// decoding.
    pub fn from_document(id: Option<&str>, mut document: Value) -> Result<Self, CoreError> {
        let Some(fields) = document.as_object_mut() else {
            return Err(CoreError::InvalidDocument {
                id: id.unwrap_or_default().to_string(),
                reason: "document is not a JSON object".to_string(),
            });
        };

        for field in EMBEDDING_FIELDS {
            fields.remove(*field);
        }

        let id = match id {
            Some(id) => id.to_string(),
            None => fields
                .get("_id")
                .and_then(document_id)
                .ok_or(CoreError::MissingId)?,
        };
        fields.insert("_id".to_string(), Value::String(id.clone()));

        serde_json::from_value(document).map_err(|e| CoreError::InvalidDocument {
            id,
            reason: e.to_string(),
        })
    }
}

/// Extract a record key from an `_id` value: a plain string, a number, or an
/// extended-JSON `{"$oid": "..."}` wrapper.
pub fn document_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("$oid").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Normalize a stored year value to an integer.
///
/// Numbers are truncated, strings are read up to the first non-digit, and
/// anything else (or an out-of-range value) yields `None`.
pub fn normalize_year(value: &Value) -> Option<i32> {
    let raw = match unwrap_extended(value) {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))?,
        Value::String(s) => parse_leading_int(s)?,
        _ => return None,
    };
    i32::try_from(raw).ok()
}

// ---------------------------------------------------------------------------
// Lenient field decoders
// ---------------------------------------------------------------------------

/// Strip a single-key extended-JSON wrapper such as `{"$numberInt": "7"}`.
fn unwrap_extended(value: &Value) -> &Value {
    match value {
        Value::Object(map) if map.len() == 1 => match map.iter().next() {
            Some((key, inner)) if key.starts_with('$') => unwrap_extended(inner),
            _ => value,
        },
        _ => value,
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match unwrap_extended(value) {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn text_of(value: &Value) -> Option<String> {
    match unwrap_extended(value) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_year<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.as_ref().and_then(normalize_year))
}

fn lenient_int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.as_ref().and_then(number_of).map(|f| f.trunc() as i64))
}

fn lenient_float<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.as_ref().and_then(number_of))
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.as_ref().and_then(text_of))
}

fn lenient_title<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.as_ref().and_then(text_of).unwrap_or_default())
}

/// Decode a nested record, dropping it when it has the wrong shape.
fn lenient_object<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn lenient_list<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(items.iter().filter_map(text_of).collect()),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
