//! Per-step schemas of the booking wizard.
//!
//! A [`BookingFormState`] is split into one value per wizard step so each
//! screen edits and validates only its own fields; [`BookingSteps::merge`]
//! reassembles the payload losslessly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::booking::{BookingCharge, BookingFormState, CargoDetail, RoutingDetail};
use crate::forms::FormError;

/// Number of steps in the booking wizards.
pub const BOOKING_STEP_COUNT: usize = 5;

fn validate_legs(legs: &[RoutingDetail]) -> Result<(), ValidationError> {
    for leg in legs {
        if leg.from_code.trim().is_empty() || leg.to_code.trim().is_empty() {
            return Err(ValidationError::new("leg_endpoints_required"));
        }
        if leg.eta < leg.etd {
            return Err(ValidationError::new("leg_arrives_before_departure"));
        }
    }
    Ok(())
}

fn non_negative(value: Option<f64>) -> bool {
    value.is_none_or(|v| v >= 0.0)
}

fn validate_cargo_lines(lines: &[CargoDetail]) -> Result<(), ValidationError> {
    let valid = lines.iter().all(|line| {
        non_negative(line.gross_weight)
            && non_negative(line.net_weight)
            && non_negative(line.volume)
    });
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("negative_cargo_measure"))
    }
}

fn validate_charges(charges: &[BookingCharge]) -> Result<(), ValidationError> {
    for charge in charges {
        if !non_negative(charge.amount) {
            return Err(ValidationError::new("negative_charge"));
        }
        if charge.amount.is_some() && charge.currency.trim().is_empty() {
            return Err(ValidationError::new("charge_currency_required"));
        }
    }
    Ok(())
}

fn validate_schedule(step: &RoutingStep) -> Result<(), ValidationError> {
    if step.eta < step.etd {
        return Err(ValidationError::new("eta_before_etd"));
    }
    Ok(())
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Validate)]
/// Customer, carrier and service selection.
pub struct GeneralStep {
    pub enquiry_id: String,
    pub quotation_id: String,
    #[validate(length(min = 1))]
    pub customer_code: String,
    pub customer_name: String,
    pub sales_person: String,
    #[validate(length(min = 1))]
    pub carrier_code: String,
    pub carrier_name: String,
    #[validate(length(min = 1))]
    pub load_type: String,
    pub shipment_terms: String,
    pub booking_date: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Validate)]
#[validate(schema(function = "validate_schedule"))]
/// Ports, schedule and route legs.
pub struct RoutingStep {
    #[validate(length(min = 1))]
    pub origin_code: String,
    pub origin_name: String,
    #[validate(length(min = 1))]
    pub destination_code: String,
    pub destination_name: String,
    pub cargo_ready_date: DateTime<Utc>,
    pub etd: DateTime<Utc>,
    pub eta: DateTime<Utc>,
    #[validate(length(min = 1), custom(function = "validate_legs"))]
    pub routing_details: Vec<RoutingDetail>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Validate)]
/// Totals and per-line cargo description.
pub struct CargoStep {
    pub commodity: String,
    #[validate(range(min = 0.0))]
    pub gross_weight: Option<f64>,
    #[validate(range(min = 0.0))]
    pub net_weight: Option<f64>,
    #[validate(range(min = 0.0))]
    pub volume: Option<f64>,
    #[validate(range(min = 0.0))]
    pub chargeable_weight: Option<f64>,
    pub no_of_packages: Option<u32>,
    pub hazardous: bool,
    #[validate(length(min = 1), custom(function = "validate_cargo_lines"))]
    pub cargo_details: Vec<CargoDetail>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct ChargesStep {
    #[validate(custom(function = "validate_charges"))]
    pub charges: Vec<BookingCharge>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct ReviewStep {
    #[validate(length(max = 2000))]
    pub remarks: String,
}

/// Booking values held per wizard step.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingSteps {
    pub general: GeneralStep,
    pub routing: RoutingStep,
    pub cargo: CargoStep,
    pub charges: ChargesStep,
    pub review: ReviewStep,
}

impl From<BookingFormState> for BookingSteps {
    fn from(state: BookingFormState) -> Self {
        Self {
            general: GeneralStep {
                enquiry_id: state.enquiry_id,
                quotation_id: state.quotation_id,
                customer_code: state.customer_code,
                customer_name: state.customer_name,
                sales_person: state.sales_person,
                carrier_code: state.carrier_code,
                carrier_name: state.carrier_name,
                load_type: state.load_type,
                shipment_terms: state.shipment_terms,
                booking_date: state.booking_date,
            },
            routing: RoutingStep {
                origin_code: state.origin_code,
                origin_name: state.origin_name,
                destination_code: state.destination_code,
                destination_name: state.destination_name,
                cargo_ready_date: state.cargo_ready_date,
                etd: state.etd,
                eta: state.eta,
                routing_details: state.routing_details,
            },
            cargo: CargoStep {
                commodity: state.commodity,
                gross_weight: state.gross_weight,
                net_weight: state.net_weight,
                volume: state.volume,
                chargeable_weight: state.chargeable_weight,
                no_of_packages: state.no_of_packages,
                hazardous: state.hazardous,
                cargo_details: state.cargo_details,
            },
            charges: ChargesStep {
                charges: state.charges,
            },
            review: ReviewStep {
                remarks: state.remarks,
            },
        }
    }
}

impl BookingSteps {
    /// Reassembles the full booking payload from every step.
    pub fn merge(&self) -> BookingFormState {
        let general = self.general.clone();
        let routing = self.routing.clone();
        let cargo = self.cargo.clone();

        BookingFormState {
            enquiry_id: general.enquiry_id,
            quotation_id: general.quotation_id,
            customer_code: general.customer_code,
            customer_name: general.customer_name,
            sales_person: general.sales_person,
            carrier_code: general.carrier_code,
            carrier_name: general.carrier_name,
            load_type: general.load_type,
            shipment_terms: general.shipment_terms,
            booking_date: general.booking_date,
            origin_code: routing.origin_code,
            origin_name: routing.origin_name,
            destination_code: routing.destination_code,
            destination_name: routing.destination_name,
            cargo_ready_date: routing.cargo_ready_date,
            etd: routing.etd,
            eta: routing.eta,
            routing_details: routing.routing_details,
            commodity: cargo.commodity,
            gross_weight: cargo.gross_weight,
            net_weight: cargo.net_weight,
            volume: cargo.volume,
            chargeable_weight: cargo.chargeable_weight,
            no_of_packages: cargo.no_of_packages,
            hazardous: cargo.hazardous,
            cargo_details: cargo.cargo_details,
            charges: self.charges.charges.clone(),
            remarks: self.review.remarks.clone(),
        }
    }

    /// Validates a single step by its zero-based index.
    pub fn validate_step(&self, step: usize) -> Result<(), FormError> {
        let result = match step {
            0 => self.general.validate(),
            1 => self.routing.validate(),
            2 => self.cargo.validate(),
            3 => self.charges.validate(),
            4 => self.review.validate(),
            _ => Ok(()),
        };
        result.map_err(|errors| FormError::StepValidation { step, errors })
    }

    /// Validates every step in order, reporting the first invalid one.
    pub fn validate_all(&self) -> Result<(), FormError> {
        (0..BOOKING_STEP_COUNT).try_for_each(|step| self.validate_step(step))
    }
}
