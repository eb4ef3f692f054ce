use crate::request::{RequestField, RequestRecord, ServiceType, Vehicle};
use crate::submit::SubmitError;
use crate::validation::{self, FieldError, FieldErrors};
use std::rc::Rc;
use yew::functional::Reducible;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
    Failed(SubmitError),
}

pub enum FormAction {
    Input(RequestField, String),
    Invalid(FieldErrors),
    Begin,
    Finish(Result<(), SubmitError>),
    Reset,
}

/// Values of the request form plus where it is in its submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service_type: ServiceType,
    pub vehicle: Vehicle,
    pub date: String,
    pub time: String,
    pub flight_number: String,
    pub notes: String,
    pub errors: FieldErrors,
    pub status: FormStatus,
}

impl FormState {
    /// Current value of a field as shown in its input.
    pub fn value(&self, field: RequestField) -> &str {
        match field {
            RequestField::Name => &self.name,
            RequestField::Phone => &self.phone,
            RequestField::Email => &self.email,
            RequestField::Service => self.service_type.label(),
            RequestField::Vehicle => self.vehicle.label(),
            RequestField::Date => &self.date,
            RequestField::Time => &self.time,
            RequestField::FlightNumber => &self.flight_number,
            RequestField::Notes => &self.notes,
        }
    }

    pub fn error(&self, field: RequestField) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn snapshot(&self) -> RequestRecord {
        RequestRecord {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            service_type: self.service_type,
            vehicle: self.vehicle,
            date: self.date.clone(),
            time: self.time.clone(),
            flight_number: self.flight_number.clone(),
            notes: self.notes.clone(),
        }
    }

    /// The record to hand to the submission handler, or the local field
    /// errors. `None` while a submission is already in flight.
    pub fn prepare(&self) -> Option<Result<RequestRecord, FieldErrors>> {
        if self.is_submitting() {
            return None;
        }
        let record = self.snapshot();
        Some(validation::validate(&record).map(|()| record))
    }

    fn set(&mut self, field: RequestField, value: String) {
        match field {
            RequestField::Name => self.name = value,
            RequestField::Phone => self.phone = value,
            RequestField::Email => self.email = value,
            RequestField::Service => match value.parse() {
                Ok(service_type) => self.service_type = service_type,
                Err(_) => return,
            },
            RequestField::Vehicle => match value.parse() {
                Ok(vehicle) => self.vehicle = vehicle,
                Err(_) => return,
            },
            RequestField::Date => self.date = value,
            RequestField::Time => self.time = value,
            RequestField::FlightNumber => self.flight_number = value,
            RequestField::Notes => self.notes = value,
        }

        self.errors.remove(field);
        // Either contact field satisfies the pair requirement.
        let partner = match field {
            RequestField::Phone => Some(RequestField::Email),
            RequestField::Email => Some(RequestField::Phone),
            _ => None,
        };
        if let Some(partner) = partner {
            if self.errors.get(partner) == Some(&FieldError::ContactRequired) {
                self.errors.remove(partner);
            }
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Input(field, value) => {
                if !self.is_submitting() {
                    self.set(field, value);
                }
            }
            FormAction::Invalid(errors) => {
                if !self.is_submitting() {
                    self.errors = errors;
                    self.status = FormStatus::Editing;
                }
            }
            FormAction::Begin => {
                if !self.is_submitting() {
                    self.errors.clear();
                    self.status = FormStatus::Submitting;
                }
            }
            FormAction::Finish(result) => {
                if !self.is_submitting() {
                    return;
                }
                self.status = match result {
                    Ok(()) => FormStatus::Submitted,
                    Err(SubmitError::Rejected(errors)) => {
                        self.errors = errors.clone();
                        FormStatus::Failed(SubmitError::Rejected(errors))
                    }
                    Err(e) => FormStatus::Failed(e),
                };
            }
            FormAction::Reset => {
                if !self.is_submitting() {
                    *self = FormState::default();
                }
            }
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::{RequestHandler, SubmissionHandler};
    use futures::executor::block_on;
    use futures::future::{self, LocalBoxFuture};
    use futures::FutureExt;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct Recorder(Rc<RefCell<Vec<RequestRecord>>>);

    impl RequestHandler for Recorder {
        fn submit(&self, record: RequestRecord) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            self.0.borrow_mut().push(record);
            future::ready(Ok(())).boxed_local()
        }
    }

    struct Offline;

    impl RequestHandler for Offline {
        fn submit(&self, _: RequestRecord) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            future::ready(Err(SubmitError::Transport("network down".into()))).boxed_local()
        }
    }

    fn type_into(state: &mut FormState, field: RequestField, text: &str) {
        let mut typed = String::new();
        for c in text.chars() {
            typed.push(c);
            state.apply(FormAction::Input(field, typed.clone()));
        }
    }

    /// Runs the same steps as the form's submit handler.
    fn submit_with(state: &mut FormState, handler: &SubmissionHandler) {
        match state.prepare() {
            None => {}
            Some(Err(errors)) => state.apply(FormAction::Invalid(errors)),
            Some(Ok(record)) => {
                state.apply(FormAction::Begin);
                let result = block_on(handler.submit(record));
                state.apply(FormAction::Finish(result));
            }
        }
    }

    fn filled() -> FormState {
        let mut state = FormState::default();
        type_into(&mut state, RequestField::Name, "Jane Doe");
        type_into(&mut state, RequestField::Phone, "3105551234");
        type_into(&mut state, RequestField::Email, "jane@x.com");
        state
    }

    #[test]
    fn keystrokes_are_stored_verbatim() {
        let mut state = FormState::default();
        let text = "  Mr. Ünal  \"VIP\"  ";
        for field in [RequestField::Name, RequestField::Notes, RequestField::FlightNumber] {
            type_into(&mut state, field, text);
            assert_eq!(state.value(field), text);
        }
    }

    #[test]
    fn enumerated_fields_only_take_declared_options() {
        let mut state = FormState::default();
        assert_eq!(state.value(RequestField::Service), "Airport (LAX)");
        assert_eq!(state.value(RequestField::Vehicle), "Escalade");

        for bogus in ["", "Helicopter", "escalade"] {
            state.apply(FormAction::Input(RequestField::Service, bogus.into()));
            state.apply(FormAction::Input(RequestField::Vehicle, bogus.into()));
            assert!(ServiceType::ALL.iter().any(|s| s.label() == state.value(RequestField::Service)));
            assert!(Vehicle::ALL.iter().any(|v| v.label() == state.value(RequestField::Vehicle)));
        }

        state.apply(FormAction::Input(RequestField::Vehicle, "Mercedes EQS".into()));
        assert_eq!(state.vehicle, Vehicle::MercedesEqs);
        state.apply(FormAction::Input(RequestField::Vehicle, "Tesla".into()));
        assert_eq!(state.vehicle, Vehicle::MercedesEqs);
    }

    #[test]
    fn handler_receives_exactly_the_typed_values() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handler = SubmissionHandler::new(Recorder(seen.clone()));
        let mut state = filled();

        submit_with(&mut state, &handler);

        assert_eq!(state.status, FormStatus::Submitted);
        assert_eq!(
            *seen.borrow(),
            vec![RequestRecord {
                name: "Jane Doe".into(),
                phone: "3105551234".into(),
                email: "jane@x.com".into(),
                service_type: ServiceType::Airport,
                vehicle: Vehicle::Escalade,
                date: String::new(),
                time: String::new(),
                flight_number: String::new(),
                notes: String::new(),
            }]
        );
        // Values stay put until the visitor asks for a fresh form.
        assert_eq!(state.name, "Jane Doe");
    }

    #[test]
    fn missing_contact_blocks_submission_and_marks_both_fields() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handler = SubmissionHandler::new(Recorder(seen.clone()));
        let mut state = FormState::default();
        type_into(&mut state, RequestField::Name, "Jane Doe");

        submit_with(&mut state, &handler);

        assert!(seen.borrow().is_empty());
        assert_eq!(state.status, FormStatus::Editing);
        assert_eq!(state.error(RequestField::Phone), Some(&FieldError::ContactRequired));
        assert_eq!(state.error(RequestField::Email), Some(&FieldError::ContactRequired));
    }

    #[test]
    fn empty_form_is_no_longer_accepted() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handler = SubmissionHandler::new(Recorder(seen.clone()));
        let mut state = FormState::default();

        submit_with(&mut state, &handler);

        assert!(seen.borrow().is_empty());
        assert!(state.error(RequestField::Name).is_some());
    }

    #[test]
    fn typing_a_contact_clears_both_contact_errors() {
        let mut state = FormState::default();
        if let Some(Err(errors)) = state.prepare() {
            state.apply(FormAction::Invalid(errors));
        }
        assert!(state.error(RequestField::Email).is_some());

        type_into(&mut state, RequestField::Phone, "3");

        assert_eq!(state.error(RequestField::Phone), None);
        assert_eq!(state.error(RequestField::Email), None);
        assert!(state.error(RequestField::Name).is_some());
    }

    #[test]
    fn no_second_submission_while_one_is_pending() {
        let mut state = filled();
        state.apply(FormAction::Begin);

        assert!(state.is_submitting());
        assert_eq!(state.prepare(), None);

        state.apply(FormAction::Input(RequestField::Name, "Someone Else".into()));
        state.apply(FormAction::Reset);
        assert_eq!(state.name, "Jane Doe");
        assert!(state.is_submitting());
    }

    #[test]
    fn transport_failure_keeps_entered_data() {
        let handler = SubmissionHandler::new(Offline);
        let mut state = filled();
        let before = state.snapshot();

        submit_with(&mut state, &handler);

        assert!(matches!(state.status, FormStatus::Failed(SubmitError::Transport(_))));
        assert_eq!(state.snapshot(), before);

        // and the visitor can try again
        assert!(matches!(state.prepare(), Some(Ok(_))));
    }

    #[test]
    fn backend_rejection_is_shown_per_field() {
        let mut state = filled();
        state.apply(FormAction::Begin);
        let errors: FieldErrors = [(RequestField::Email, FieldError::Rejected("Mailbox unknown".into()))]
            .into_iter()
            .collect();

        state.apply(FormAction::Finish(Err(SubmitError::Rejected(errors))));

        assert_eq!(
            state.error(RequestField::Email),
            Some(&FieldError::Rejected("Mailbox unknown".into()))
        );
        assert_eq!(state.email, "jane@x.com");
    }

    #[test]
    fn rejection_of_select_and_free_text_fields_is_kept() {
        let mut state = filled();
        state.apply(FormAction::Begin);
        let errors: FieldErrors = [
            (RequestField::Notes, FieldError::Rejected("Too long".into())),
            (RequestField::Service, FieldError::Rejected("Not offered on that date".into())),
        ]
        .into_iter()
        .collect();

        state.apply(FormAction::Finish(Err(SubmitError::Rejected(errors))));

        assert_eq!(state.error(RequestField::Notes), Some(&FieldError::Rejected("Too long".into())));
        assert_eq!(
            state.error(RequestField::Service).map(|e| e.to_string()),
            Some("Not offered on that date".to_string())
        );

        state.apply(FormAction::Input(RequestField::Notes, "Short".into()));
        assert_eq!(state.error(RequestField::Notes), None);
        assert!(state.error(RequestField::Service).is_some());
    }

    #[test]
    fn late_results_are_ignored_once_idle() {
        let mut state = filled();
        state.apply(FormAction::Finish(Ok(())));
        assert_eq!(state.status, FormStatus::Editing);
    }

    #[test]
    fn reset_starts_a_fresh_request() {
        let handler = SubmissionHandler::new(Recorder(Rc::new(RefCell::new(Vec::new()))));
        let mut state = filled();
        type_into(&mut state, RequestField::Vehicle, "Suburban");
        submit_with(&mut state, &handler);

        state.apply(FormAction::Reset);

        assert_eq!(state, FormState::default());
    }

    #[test]
    fn reducer_does_not_touch_the_previous_state() {
        let before = Rc::new(filled());
        let after = before.clone().reduce(FormAction::Input(RequestField::Notes, "2 bags".into()));
        assert_eq!(before.notes, "");
        assert_eq!(after.notes, "2 bags");
    }
}
