//! Service classification shared by the booking lists and wizards.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Transport mode a booking list is scoped to (`service_type` selector).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportMode {
    Air,
    Ocean,
}

/// Direction of the shipment (`service` selector).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceDirection {
    Import,
    Export,
}

/// How cargo is loaded for a service.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadType {
    /// Full container load.
    Fcl,
    /// Less than container load.
    Lcl,
    Air,
}

impl LoadType {
    /// Case-insensitive lookup of a load type code.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "FCL" => Some(Self::Fcl),
            "LCL" => Some(Self::Lcl),
            "AIR" => Some(Self::Air),
            _ => None,
        }
    }

    /// Whether cargo is described per container.
    pub fn is_container_based(self) -> bool {
        matches!(self, Self::Fcl)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fcl => "FCL",
            Self::Lcl => "LCL",
            Self::Air => "AIR",
        }
    }
}

impl TransportMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Air => "AIR",
            Self::Ocean => "OCEAN",
        }
    }
}

impl ServiceDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Import => "IMPORT",
            Self::Export => "EXPORT",
        }
    }
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for ServiceDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AIR" => Ok(Self::Air),
            "OCEAN" | "SEA" => Ok(Self::Ocean),
            _ => Err(TypeConstraintError::InvalidValue(s.to_string())),
        }
    }
}

impl FromStr for ServiceDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IMPORT" => Ok(Self::Import),
            "EXPORT" => Ok(Self::Export),
            _ => Err(TypeConstraintError::InvalidValue(s.to_string())),
        }
    }
}

/// Base selectors every list query carries, e.g. ocean export bookings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListScope {
    pub service_type: TransportMode,
    pub service: ServiceDirection,
}

impl ListScope {
    pub fn new(service_type: TransportMode, service: ServiceDirection) -> Self {
        Self {
            service_type,
            service,
        }
    }
}
