//! Filter form submitted from the booking list.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::filter::FilterState;
use crate::forms::FormError;

/// Raw filter inputs; every field optional, blanks mean "not set".
#[derive(Debug, Default, Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    /// Date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub date: Option<String>,
}

impl FilterForm {
    /// Builds a form from `key=value` pairs, e.g. command line arguments.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut form = Self::default();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = Some(value.to_string());
            match key.trim() {
                "customer" => form.customer = value,
                "service" => form.service = value,
                "origin" => form.origin = value,
                "destination" => form.destination = value,
                "date" => form.date = value,
                other => return Err(FormError::UnknownField(other.to_string())),
            }
        }
        Ok(form)
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl TryFrom<FilterForm> for FilterState {
    type Error = FormError;

    fn try_from(form: FilterForm) -> Result<Self, Self::Error> {
        let date = match normalize(form.date) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| FormError::InvalidDate(raw))?,
            ),
            None => None,
        };

        Ok(FilterState {
            customer: normalize(form.customer),
            service: normalize(form.service).map(|s| s.to_uppercase()),
            origin: normalize(form.origin).map(|s| s.to_uppercase()),
            destination: normalize(form.destination).map(|s| s.to_uppercase()),
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_build_normalized_filter_state() {
        let form = FilterForm::from_pairs(["customer= C100 ", "origin=innsa", "date=2026-05-01"])
            .expect("known fields");

        let state = FilterState::try_from(form).expect("valid filters");

        assert_eq!(state.customer.as_deref(), Some("C100"));
        assert_eq!(state.origin.as_deref(), Some("INNSA"));
        assert_eq!(state.date, NaiveDate::from_ymd_opt(2026, 5, 1));
        assert_eq!(state.destination, None);
    }

    #[test]
    fn blank_values_are_unset() {
        let form = FilterForm::from_pairs(["customer=", "service=  "]).expect("known fields");

        let state = FilterState::try_from(form).expect("valid filters");

        assert!(state.is_empty());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = FilterForm::from_pairs(["vessel=EVER GIVEN"]);

        assert!(matches!(result, Err(FormError::UnknownField(field)) if field == "vessel"));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let form = FilterForm {
            date: Some("01/05/2026".to_string()),
            ..FilterForm::default()
        };

        assert!(matches!(
            FilterState::try_from(form),
            Err(FormError::InvalidDate(_))
        ));
    }
}
