//! Prefills a booking wizard from the enquiry and quotation it converts.

use crate::domain::booking::{
    BookingCharge, BookingFormState, CargoDetail, MOVE_TYPE_MAIN, ROUTING_STATUS_PLANNED,
    RoutingDetail,
};
use crate::domain::source::{
    BookingSource, ChargeLine, ContainerDetail, EnquiryData, QuotationData, ServiceDetails,
};

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Builds the initial wizard values for a booking created from `source`.
///
/// Returns `None` when there is nothing to prefill from, meaning the wizard
/// starts blank. Never fails: absent or malformed source fields fall back to
/// the defaults of [`BookingFormState`]. Dates the source cannot provide are
/// set to the current instant, so two calls with the same source only differ
/// in those timestamps.
pub fn map_booking(source: Option<&BookingSource>) -> Option<BookingFormState> {
    let source = source?;

    let enquiry = source.enquiry_data.clone().unwrap_or_default();
    let quotation = source.quotation_data.clone().unwrap_or_default();
    let service = source.service_details.clone().unwrap_or_default();

    let mut state = BookingFormState::default();
    apply_enquiry(&mut state, &enquiry);
    apply_quotation(&mut state, &quotation);
    apply_service(&mut state, &service);

    state.routing_details = vec![main_leg(&state)];
    state.cargo_details = cargo_details(&service);

    Some(state)
}

fn apply_enquiry(state: &mut BookingFormState, enquiry: &EnquiryData) {
    state.enquiry_id = text(&enquiry.enquiry_id);
    state.customer_code = text(&enquiry.customer_code);
    state.customer_name = text(&enquiry.customer_name);
    state.sales_person = text(&enquiry.sales_person);
}

fn apply_quotation(state: &mut BookingFormState, quotation: &QuotationData) {
    state.quotation_id = text(&quotation.quotation_id);
    state.carrier_code = text(&quotation.carrier_code);
    state.carrier_name = text(&quotation.carrier_name);
    state.charges = quotation
        .charges
        .iter()
        .flatten()
        .map(booking_charge)
        .collect();
}

fn apply_service(state: &mut BookingFormState, service: &ServiceDetails) {
    state.load_type = match service.load_type() {
        Some(load_type) => load_type.as_str().to_string(),
        None => text(&service.service),
    };
    state.origin_code = text(&service.origin_code);
    state.origin_name = text(&service.origin_name);
    state.destination_code = text(&service.destination_code);
    state.destination_name = text(&service.destination_name);
    state.shipment_terms = text(&service.shipment_terms);
    state.commodity = text(&service.commodity);
    state.gross_weight = service.gross_weight;
    state.net_weight = service.net_weight;
    state.volume = service.volume;
    state.chargeable_weight = service.chargeable_weight;
    state.no_of_packages = service.no_of_packages;
    state.hazardous = service.hazardous.unwrap_or(false);
}

fn booking_charge(line: &ChargeLine) -> BookingCharge {
    BookingCharge {
        charge_code: text(&line.charge_code),
        charge_name: text(&line.charge_name),
        currency: text(&line.currency),
        amount: line.amount,
        basis: text(&line.basis),
    }
}

/// The single origin→destination leg every new booking starts with.
fn main_leg(state: &BookingFormState) -> RoutingDetail {
    RoutingDetail {
        move_type: MOVE_TYPE_MAIN.to_string(),
        from_code: state.origin_code.clone(),
        from_name: state.origin_name.clone(),
        to_code: state.destination_code.clone(),
        to_name: state.destination_name.clone(),
        carrier_code: state.carrier_code.clone(),
        carrier_name: state.carrier_name.clone(),
        etd: state.etd,
        eta: state.eta,
        status: ROUTING_STATUS_PLANNED.to_string(),
    }
}

fn cargo_details(service: &ServiceDetails) -> Vec<CargoDetail> {
    let per_container = service
        .container_details
        .as_deref()
        .filter(|containers| !containers.is_empty());

    match (service.load_type(), per_container) {
        (Some(load_type), Some(containers)) if load_type.is_container_based() => containers
            .iter()
            .map(|container| container_cargo(service, container))
            .collect(),
        _ => vec![CargoDetail {
            container_type_code: text(&service.container_type_code),
            no_of_containers: service.no_of_containers,
            gross_weight: service.gross_weight,
            net_weight: service.net_weight,
            volume: service.volume,
            no_of_packages: service.no_of_packages,
            commodity: text(&service.commodity),
            hazardous: service.hazardous.unwrap_or(false),
        }],
    }
}

fn container_cargo(service: &ServiceDetails, container: &ContainerDetail) -> CargoDetail {
    CargoDetail {
        container_type_code: text(&container.container_type_code),
        no_of_containers: container.no_of_containers,
        gross_weight: container.gross_weight,
        net_weight: container.net_weight,
        volume: container.volume,
        no_of_packages: container.no_of_packages,
        commodity: text(&service.commodity),
        hazardous: service.hazardous.unwrap_or(false),
    }
}
