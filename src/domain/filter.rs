//! Filter criteria for the booking lists.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::FilterValue;

/// Server-side field names the filter form maps onto.
pub mod fields {
    pub const CUSTOMER: &str = "customer_code";
    pub const SERVICE: &str = "load_type";
    pub const ORIGIN: &str = "origin_code";
    pub const DESTINATION: &str = "destination_code";
    pub const DATE: &str = "booking_date";
}

/// Filter inputs as the user is editing them, before they are applied.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterState {
    pub customer: Option<String>,
    pub service: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
}

impl FilterState {
    /// Whether no field carries a usable value.
    pub fn is_empty(&self) -> bool {
        self.to_filter_set().is_none()
    }

    /// Normalizes the inputs into the applied predicate set.
    ///
    /// Blank strings count as unset. Returns `None` when nothing is set so
    /// callers fall back to the unfiltered query instead of sending empty
    /// equality filters.
    pub fn to_filter_set(&self) -> Option<FilterSet> {
        let mut set = FilterSet::default();
        let text_fields = [
            (fields::CUSTOMER, &self.customer),
            (fields::SERVICE, &self.service),
            (fields::ORIGIN, &self.origin),
            (fields::DESTINATION, &self.destination),
        ];
        for (field, value) in text_fields {
            if let Some(value) = value.as_deref().and_then(|v| FilterValue::new(v).ok()) {
                set.insert(field, value);
            }
        }
        if let Some(date) = self.date
            && let Ok(value) = FilterValue::new(date.format("%Y-%m-%d").to_string())
        {
            set.insert(fields::DATE, value);
        }

        if set.is_empty() { None } else { Some(set) }
    }
}

/// Applied field equalities, ordered so they can key the query cache.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct FilterSet(BTreeMap<String, FilterValue>);

impl FilterSet {
    pub fn insert(&mut self, field: impl Into<String>, value: FilterValue) {
        self.0.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_inputs_produce_no_filter_set() {
        let state = FilterState {
            customer: Some("   ".to_string()),
            origin: Some(String::new()),
            ..FilterState::default()
        };

        assert!(state.is_empty());
        assert_eq!(state.to_filter_set(), None);
    }

    #[test]
    fn set_fields_map_to_server_names() {
        let state = FilterState {
            customer: Some(" C001 ".to_string()),
            destination: Some("NLRTM".to_string()),
            date: NaiveDate::from_ymd_opt(2026, 3, 9),
            ..FilterState::default()
        };

        let set = state.to_filter_set().expect("filters applied");

        assert_eq!(set.len(), 3);
        assert_eq!(set.get(fields::CUSTOMER).map(|v| v.as_str()), Some("C001"));
        assert_eq!(set.get(fields::DESTINATION).map(|v| v.as_str()), Some("NLRTM"));
        assert_eq!(set.get(fields::DATE).map(|v| v.as_str()), Some("2026-03-09"));
        assert!(set.get(fields::ORIGIN).is_none());
    }
}
