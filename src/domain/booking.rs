//! The booking aggregate edited by the wizards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::JobId;

/// Move type of the leg synthesized from the service's origin and destination.
pub const MOVE_TYPE_MAIN: &str = "MAIN";
/// Status given to legs that have not been executed yet.
pub const ROUTING_STATUS_PLANNED: &str = "PLANNED";

/// One leg of the shipment route.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoutingDetail {
    pub move_type: String,
    pub from_code: String,
    pub from_name: String,
    pub to_code: String,
    pub to_name: String,
    pub carrier_code: String,
    pub carrier_name: String,
    pub etd: DateTime<Utc>,
    pub eta: DateTime<Utc>,
    pub status: String,
}

impl Default for RoutingDetail {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            move_type: MOVE_TYPE_MAIN.to_string(),
            from_code: String::new(),
            from_name: String::new(),
            to_code: String::new(),
            to_name: String::new(),
            carrier_code: String::new(),
            carrier_name: String::new(),
            etd: now,
            eta: now,
            status: ROUTING_STATUS_PLANNED.to_string(),
        }
    }
}

/// Cargo line; one per container type for full container loads.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CargoDetail {
    pub container_type_code: String,
    pub no_of_containers: Option<u32>,
    pub gross_weight: Option<f64>,
    pub net_weight: Option<f64>,
    pub volume: Option<f64>,
    pub no_of_packages: Option<u32>,
    pub commodity: String,
    pub hazardous: bool,
}

/// Charge carried over from the accepted quotation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookingCharge {
    pub charge_code: String,
    pub charge_name: String,
    pub currency: String,
    pub amount: Option<f64>,
    pub basis: String,
}

/// Full booking payload, submitted as one unit when the wizard completes.
///
/// Every field has a defined default so a freshly constructed state never
/// hands an unset required input to a form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookingFormState {
    pub enquiry_id: String,
    pub quotation_id: String,
    pub customer_code: String,
    pub customer_name: String,
    pub sales_person: String,
    pub carrier_code: String,
    pub carrier_name: String,
    pub load_type: String,
    pub origin_code: String,
    pub origin_name: String,
    pub destination_code: String,
    pub destination_name: String,
    pub shipment_terms: String,
    pub commodity: String,
    pub booking_date: DateTime<Utc>,
    pub cargo_ready_date: DateTime<Utc>,
    pub etd: DateTime<Utc>,
    pub eta: DateTime<Utc>,
    pub gross_weight: Option<f64>,
    pub net_weight: Option<f64>,
    pub volume: Option<f64>,
    pub chargeable_weight: Option<f64>,
    pub no_of_packages: Option<u32>,
    pub hazardous: bool,
    pub remarks: String,
    pub charges: Vec<BookingCharge>,
    pub routing_details: Vec<RoutingDetail>,
    pub cargo_details: Vec<CargoDetail>,
}

impl Default for BookingFormState {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            enquiry_id: String::new(),
            quotation_id: String::new(),
            customer_code: String::new(),
            customer_name: String::new(),
            sales_person: String::new(),
            carrier_code: String::new(),
            carrier_name: String::new(),
            load_type: String::new(),
            origin_code: String::new(),
            origin_name: String::new(),
            destination_code: String::new(),
            destination_name: String::new(),
            shipment_terms: String::new(),
            commodity: String::new(),
            booking_date: now,
            cargo_ready_date: now,
            etd: now,
            eta: now,
            gross_weight: None,
            net_weight: None,
            volume: None,
            chargeable_weight: None,
            no_of_packages: None,
            hazardous: false,
            remarks: String::new(),
            charges: Vec::new(),
            routing_details: Vec::new(),
            cargo_details: Vec::new(),
        }
    }
}

/// Booking previously persisted by the backend, opened in edit mode.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct JobRecord {
    pub id: JobId,
    #[serde(default)]
    pub job_no: String,
    #[serde(flatten)]
    pub booking: BookingFormState,
}
