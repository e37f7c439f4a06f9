//! State handed between screens on client-side navigation.

use serde::{Deserialize, Serialize};

use crate::domain::booking::JobRecord;
use crate::domain::source::BookingSource;

/// Payload carried along with a route change.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NavigationState {
    /// Open an existing job in the wizard's edit mode.
    Job { job: Box<JobRecord> },
    /// Prefill a new booking from an enquiry/quotation.
    BookingData {
        #[serde(rename = "bookingData")]
        booking_data: BookingSource,
    },
    /// Sent back to a list after a successful save.
    RefreshList {
        #[serde(rename = "refreshData")]
        refresh_data: bool,
    },
}

impl NavigationState {
    pub fn refresh() -> Self {
        Self::RefreshList { refresh_data: true }
    }

    pub fn wants_refresh(&self) -> bool {
        matches!(self, Self::RefreshList { refresh_data: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn refresh_state_uses_router_key() {
        let value = serde_json::to_value(NavigationState::refresh()).expect("serializable");
        assert_eq!(value, json!({"refreshData": true}));
    }

    #[test]
    fn booking_data_state_is_recognized() {
        let state: NavigationState = serde_json::from_value(json!({
            "bookingData": {"enquiryData": {"customer_code": "C9"}}
        }))
        .expect("navigation state");

        assert!(matches!(state, NavigationState::BookingData { .. }));
        assert!(!state.wants_refresh());
    }
}
