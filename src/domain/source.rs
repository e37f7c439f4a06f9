//! Upstream enquiry, quotation and service records a booking is prefilled from.
//!
//! These records arrive from other screens and are read-only here. Every
//! field is optional and deserialized leniently: numbers may arrive as
//! strings, codes may arrive as numbers, and anything unparseable becomes
//! `None` instead of failing the whole record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::service::LoadType;

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Parses numbers and numeric strings into `f64`.
pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_f64))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(coerce_f64)
        .filter(|v| *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v.trunc() as u32))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: for<'a> Deserialize<'a> + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

/// Customer side of the enquiry the booking originates from.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EnquiryData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub enquiry_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sales_person: Option<String>,
}

/// One priced charge on a quotation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ChargeLine {
    #[serde(default, deserialize_with = "lenient_string")]
    pub charge_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub charge_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub basis: Option<String>,
}

/// Carrier offer accepted for the booking.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct QuotationData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub quotation_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub carrier_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub carrier_name: Option<String>,
    #[serde(default, alias = "charge_details", deserialize_with = "lenient_list")]
    pub charges: Option<Vec<ChargeLine>>,
}

/// Per-container line of a full-container-load service.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ContainerDetail {
    #[serde(default, deserialize_with = "lenient_string")]
    pub container_type_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub no_of_containers: Option<u32>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gross_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub net_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub no_of_packages: Option<u32>,
}

/// Shipment attributes of the quoted service.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ServiceDetails {
    /// Load type such as `FCL`, `LCL` or `AIR`.
    #[serde(default, alias = "load_type", deserialize_with = "lenient_string")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub origin_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub origin_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub destination_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub destination_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub shipment_terms: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub commodity: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gross_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub net_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub chargeable_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub no_of_packages: Option<u32>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub container_type_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub no_of_containers: Option<u32>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub hazardous: Option<bool>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub container_details: Option<Vec<ContainerDetail>>,
}

impl ServiceDetails {
    /// Parsed load type, when the service names a known one.
    pub fn load_type(&self) -> Option<LoadType> {
        self.service.as_deref().and_then(LoadType::parse)
    }
}

/// Everything a booking wizard may be prefilled from.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSource {
    #[serde(default)]
    pub enquiry_data: Option<EnquiryData>,
    #[serde(default)]
    pub quotation_data: Option<QuotationData>,
    #[serde(default)]
    pub service_details: Option<ServiceDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_are_coerced() {
        let details: ServiceDetails = serde_json::from_value(json!({
            "service": "FCL",
            "gross_weight": "1250.5",
            "no_of_containers": "2",
            "hazardous": "yes",
        }))
        .expect("lenient service details");

        assert_eq!(details.gross_weight, Some(1250.5));
        assert_eq!(details.no_of_containers, Some(2));
        assert_eq!(details.hazardous, Some(true));
        assert_eq!(details.load_type(), Some(LoadType::Fcl));
    }

    #[test]
    fn malformed_fields_degrade_to_none() {
        let details: ServiceDetails = serde_json::from_value(json!({
            "origin_code": {"nested": true},
            "volume": "n/a",
            "no_of_containers": -1,
            "container_details": "not a list",
        }))
        .expect("lenient service details");

        assert_eq!(details.origin_code, None);
        assert_eq!(details.volume, None);
        assert_eq!(details.no_of_containers, None);
        assert_eq!(details.container_details, None);
    }

    #[test]
    fn container_list_keeps_one_entry_per_element() {
        let details: ServiceDetails = serde_json::from_value(json!({
            "container_details": [
                {"container_type_code": "20FT", "gross_weight": "100"},
                42,
                {"container_type_code": "40HC", "gross_weight": 300}
            ]
        }))
        .expect("lenient service details");

        let containers = details.container_details.expect("container list");
        assert_eq!(containers.len(), 3);
        assert_eq!(containers[1], ContainerDetail::default());
        assert_eq!(containers[2].gross_weight, Some(300.0));
    }

    #[test]
    fn source_uses_camel_case_keys() {
        let source: BookingSource = serde_json::from_value(json!({
            "enquiryData": {"customer_code": 1001, "customer_name": "Acme"},
            "quotationData": {"carrier_code": "MSK", "charge_details": [{"amount": "10"}]},
        }))
        .expect("booking source");

        let enquiry = source.enquiry_data.expect("enquiry");
        assert_eq!(enquiry.customer_code.as_deref(), Some("1001"));
        let quotation = source.quotation_data.expect("quotation");
        assert_eq!(quotation.charges.expect("charges")[0].amount, Some(10.0));
        assert!(source.service_details.is_none());
    }
}
