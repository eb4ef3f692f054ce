use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[default]
    #[serde(rename = "Airport (LAX)")]
    Airport,
    #[serde(rename = "Hourly (Min 3 hrs)")]
    Hourly,
    #[serde(rename = "Monthly")]
    Monthly,
    #[serde(rename = "Event")]
    Event,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Airport,
        ServiceType::Hourly,
        ServiceType::Monthly,
        ServiceType::Event,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceType::Airport => "Airport (LAX)",
            ServiceType::Hourly => "Hourly (Min 3 hrs)",
            ServiceType::Monthly => "Monthly",
            ServiceType::Event => "Event",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vehicle {
    #[default]
    #[serde(rename = "Escalade")]
    Escalade,
    #[serde(rename = "Suburban")]
    Suburban,
    #[serde(rename = "Mercedes EQS")]
    MercedesEqs,
    #[serde(rename = "No Preference")]
    NoPreference,
}

impl Vehicle {
    pub const ALL: [Vehicle; 4] = [
        Vehicle::Escalade,
        Vehicle::Suburban,
        Vehicle::MercedesEqs,
        Vehicle::NoPreference,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Vehicle::Escalade => "Escalade",
            Vehicle::Suburban => "Suburban",
            Vehicle::MercedesEqs => "Mercedes EQS",
            Vehicle::NoPreference => "No Preference",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option {0:?}")]
pub struct UnknownOption(pub String);

impl FromStr for ServiceType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl FromStr for Vehicle {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Every input on the request form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestField {
    Name,
    Phone,
    Email,
    Service,
    Vehicle,
    Date,
    Time,
    FlightNumber,
    Notes,
}

impl RequestField {
    pub const ALL: [RequestField; 9] = [
        RequestField::Name,
        RequestField::Phone,
        RequestField::Email,
        RequestField::Service,
        RequestField::Vehicle,
        RequestField::Date,
        RequestField::Time,
        RequestField::FlightNumber,
        RequestField::Notes,
    ];

    /// Key used for this field in the JSON payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            RequestField::Name => "name",
            RequestField::Phone => "phone",
            RequestField::Email => "email",
            RequestField::Service => "serviceType",
            RequestField::Vehicle => "vehicle",
            RequestField::Date => "date",
            RequestField::Time => "time",
            RequestField::FlightNumber => "flightNumber",
            RequestField::Notes => "notes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestField::Name => "Name",
            RequestField::Phone => "Phone",
            RequestField::Email => "Email",
            RequestField::Service => "Service",
            RequestField::Vehicle => "Vehicle",
            RequestField::Date => "Date",
            RequestField::Time => "Time",
            RequestField::FlightNumber => "Flight # (optional)",
            RequestField::Notes => "Notes",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<RequestField> {
        Self::ALL.into_iter().find(|field| field.wire_name() == name)
    }
}

/// Snapshot of the form handed to the submission handler.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service_type: ServiceType,
    pub vehicle: Vehicle,
    pub date: String,
    pub time: String,
    pub flight_number: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn defaults_are_airport_and_escalade() {
        let record = RequestRecord::default();
        assert_eq!(record.service_type, ServiceType::Airport);
        assert_eq!(record.vehicle, Vehicle::Escalade);
        assert!(record.name.is_empty());
    }

    #[test]
    fn options_parse_only_their_exact_labels() {
        assert_eq!("Hourly (Min 3 hrs)".parse::<ServiceType>(), Ok(ServiceType::Hourly));
        assert_eq!("Mercedes EQS".parse::<Vehicle>(), Ok(Vehicle::MercedesEqs));
        assert!("".parse::<ServiceType>().is_err());
        assert!("hourly".parse::<ServiceType>().is_err());
        assert!("Tesla".parse::<Vehicle>().is_err());
    }

    #[test]
    fn payload_uses_wire_names_and_option_labels() {
        let record = RequestRecord {
            name: "Jane Doe".into(),
            vehicle: Vehicle::NoPreference,
            flight_number: "AA123".into(),
            ..RequestRecord::default()
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Jane Doe",
                "phone": "",
                "email": "",
                "serviceType": "Airport (LAX)",
                "vehicle": "No Preference",
                "date": "",
                "time": "",
                "flightNumber": "AA123",
                "notes": "",
            })
        );

        let object = value.as_object().unwrap();
        for field in RequestField::ALL {
            assert!(object.contains_key(field.wire_name()), "{}", field.wire_name());
        }
    }

    #[test]
    fn wire_names_resolve_back_to_fields() {
        for field in RequestField::ALL {
            assert_eq!(RequestField::from_wire_name(field.wire_name()), Some(field));
        }
        assert_eq!(RequestField::from_wire_name("passengers"), None);
    }
}
