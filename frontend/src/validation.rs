use crate::request::{RequestField, RequestRecord};
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+?1[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}$").unwrap()
});
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());
static FLIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{2}\s?\d{1,4}[A-Za-z]?$").unwrap());

/// Why a single field was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Required")]
    Required,
    #[error("Enter a phone number or an email")]
    ContactRequired,
    #[error("Enter a 10-digit phone number")]
    InvalidPhone,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Use MM/DD/YYYY")]
    InvalidDate,
    #[error("Use HH:MM")]
    InvalidTime,
    #[error("Use the airline code and number, e.g. AA123")]
    InvalidFlightNumber,
    /// Message supplied by the request service.
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<RequestField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: RequestField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: RequestField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn remove(&mut self, field: RequestField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn contains(&self, field: RequestField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(RequestField, FieldError)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (RequestField, FieldError)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn parse_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%m/%d/%Y").is_ok()
}

fn parse_time(value: &str) -> bool {
    NaiveTime::parse_from_str(value, "%H:%M").is_ok()
        || NaiveTime::parse_from_str(&value.to_uppercase(), "%I:%M %p").is_ok()
}

/// Checks a record before it is handed to the submission handler.
///
/// A name and at least one way to reach the client are required. Every other
/// field is optional, but when filled in it has to be in a usable format.
pub fn validate(record: &RequestRecord) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = record.name.trim();
    let phone = record.phone.trim();
    let email = record.email.trim();
    let date = record.date.trim();
    let time = record.time.trim();
    let flight = record.flight_number.trim();

    if name.is_empty() {
        errors.insert(RequestField::Name, FieldError::Required);
    }

    if phone.is_empty() && email.is_empty() {
        errors.insert(RequestField::Phone, FieldError::ContactRequired);
        errors.insert(RequestField::Email, FieldError::ContactRequired);
    }
    if !phone.is_empty() && !PHONE.is_match(phone) {
        errors.insert(RequestField::Phone, FieldError::InvalidPhone);
    }
    if !email.is_empty() && !EMAIL.is_match(email) {
        errors.insert(RequestField::Email, FieldError::InvalidEmail);
    }

    if !date.is_empty() && !parse_date(date) {
        errors.insert(RequestField::Date, FieldError::InvalidDate);
    }
    if !time.is_empty() && !parse_time(time) {
        errors.insert(RequestField::Time, FieldError::InvalidTime);
    }
    if !flight.is_empty() && !FLIGHT.is_match(flight) {
        errors.insert(RequestField::FlightNumber, FieldError::InvalidFlightNumber);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn jane() -> RequestRecord {
        RequestRecord {
            name: "Jane Doe".into(),
            phone: "3105551234".into(),
            email: "jane@x.com".into(),
            ..RequestRecord::default()
        }
    }

    #[test]
    fn accepts_a_minimal_request() {
        assert_eq!(validate(&jane()), Ok(()));
    }

    // An all-empty form used to be acknowledged as-is; it is now rejected.
    #[test]
    fn rejects_an_empty_form() {
        let errors = validate(&RequestRecord::default()).unwrap_err();
        assert_eq!(errors.get(RequestField::Name), Some(&FieldError::Required));
        assert_eq!(errors.get(RequestField::Phone), Some(&FieldError::ContactRequired));
        assert_eq!(errors.get(RequestField::Email), Some(&FieldError::ContactRequired));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn either_phone_or_email_is_enough() {
        let phone_only = RequestRecord { email: String::new(), ..jane() };
        let email_only = RequestRecord { phone: String::new(), ..jane() };
        assert_eq!(validate(&phone_only), Ok(()));
        assert_eq!(validate(&email_only), Ok(()));
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let record = RequestRecord { name: "   ".into(), ..jane() };
        let errors = validate(&record).unwrap_err();
        assert!(errors.contains(RequestField::Name));
    }

    #[test]
    fn phone_formats() {
        for good in ["3105551234", "(310) 422-4708", "+1 310 422 4708", "13104224708", "310.422.4708"] {
            let record = RequestRecord { phone: good.into(), ..jane() };
            assert_eq!(validate(&record), Ok(()), "{good}");
        }
        for bad in ["12345", "call me", "310-422-47080"] {
            let record = RequestRecord { phone: bad.into(), ..jane() };
            let errors = validate(&record).unwrap_err();
            assert_eq!(errors.get(RequestField::Phone), Some(&FieldError::InvalidPhone), "{bad}");
        }
    }

    #[test]
    fn email_formats() {
        for bad in ["jane", "jane@x", "jane x@y.com", "@x.com"] {
            let record = RequestRecord { email: bad.into(), ..jane() };
            let errors = validate(&record).unwrap_err();
            assert_eq!(errors.get(RequestField::Email), Some(&FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn date_must_exist_on_the_calendar() {
        let ok = RequestRecord { date: "12/24/2026".into(), ..jane() };
        assert_eq!(validate(&ok), Ok(()));

        for bad in ["02/30/2027", "2026-12-24", "tomorrow"] {
            let record = RequestRecord { date: bad.into(), ..jane() };
            let errors = validate(&record).unwrap_err();
            assert_eq!(errors.get(RequestField::Date), Some(&FieldError::InvalidDate), "{bad}");
        }
    }

    #[test]
    fn time_accepts_24h_and_am_pm() {
        for good in ["14:30", "00:05", "09:15 PM", "09:15 am"] {
            let record = RequestRecord { time: good.into(), ..jane() };
            assert_eq!(validate(&record), Ok(()), "{good}");
        }
        let record = RequestRecord { time: "25:00".into(), ..jane() };
        assert!(validate(&record).unwrap_err().contains(RequestField::Time));
    }

    #[test]
    fn flight_number_is_optional_but_checked() {
        let ok = RequestRecord { flight_number: "AA123".into(), ..jane() };
        assert_eq!(validate(&ok), Ok(()));

        let bad = RequestRecord { flight_number: "the late one".into(), ..jane() };
        assert!(validate(&bad).unwrap_err().contains(RequestField::FlightNumber));
    }

    #[test]
    fn notes_are_free_text() {
        let record = RequestRecord { notes: "3 passengers, 6 bags; @ curb #4".into(), ..jane() };
        assert_eq!(validate(&record), Ok(()));
    }
}
