//! Wire types exchanged with the freight REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::filter::FilterSet;
use crate::domain::service::{ServiceDirection, TransportMode};
use crate::repository::errors::RepositoryError;
use crate::repository::{BookingListQuery, Row};

/// `filters` object of a filter endpoint request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterBody {
    pub service_type: TransportMode,
    pub service: ServiceDirection,
    /// Optional field equalities, omitted entirely when no filter is applied.
    #[serde(flatten)]
    pub equalities: FilterSet,
}

/// Body posted to a filter endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterRequest {
    pub filters: FilterBody,
}

impl From<&BookingListQuery> for FilterRequest {
    fn from(query: &BookingListQuery) -> Self {
        Self {
            filters: FilterBody {
                service_type: query.scope.service_type,
                service: query.scope.service,
                equalities: query.filters.clone().unwrap_or_default(),
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEnvelope {
    Bare(Vec<Value>),
    Wrapped(WrappedEnvelope),
}

#[derive(Deserialize)]
struct WrappedEnvelope {
    #[serde(alias = "results", alias = "result")]
    data: Vec<Value>,
    total: Option<usize>,
    count: Option<usize>,
    index: Option<usize>,
    limit: Option<usize>,
}

/// Normalized page returned by a filter endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResponse {
    pub rows: Vec<Row>,
    /// Total matching rows across all pages.
    pub total: usize,
    pub index: Option<usize>,
    pub limit: Option<usize>,
}

impl FilterResponse {
    /// Single parsing point for every shape the filter endpoints answer with.
    ///
    /// Accepts `{data|results|result: [...], total, count?, index?, limit?}`
    /// or a bare array. `total` falls back to `count`, then to the row count.
    pub fn from_value(value: Value) -> Result<Self, RepositoryError> {
        let raw: RawEnvelope = serde_json::from_value(value).map_err(|err| {
            RepositoryError::MalformedResponse(format!("Unrecognized list envelope: {err}"))
        })?;

        Ok(match raw {
            RawEnvelope::Bare(rows) => Self {
                total: rows.len(),
                rows,
                index: None,
                limit: None,
            },
            RawEnvelope::Wrapped(envelope) => Self {
                total: envelope
                    .total
                    .or(envelope.count)
                    .unwrap_or(envelope.data.len()),
                rows: envelope.data,
                index: envelope.index,
                limit: envelope.limit,
            },
        })
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, RepositoryError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }
}
