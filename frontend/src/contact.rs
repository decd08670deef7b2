use std::cell::Cell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use log::{error, info};
use thiserror::Error;
use web_sys::FormData;
use yew::prelude::*;

use crate::config;

pub const SUBJECT: &str = "New Contact Form Submission from LB Labs Website";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("relay answered with status {0}")]
    Status(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Multipart fields in the order the relay receives them, control fields last.
    pub fn payload(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
            ("_subject", SUBJECT),
            ("_captcha", "false"),
            ("_template", "table"),
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactAction {
    Edit(Field, String),
    Begin,
    Finished(Result<(), SubmitError>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactFormState {
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Fields to send, or `None` while a submission is already pending.
    pub fn pending_submission(&self) -> Option<ContactForm> {
        (!self.is_submitting()).then(|| self.form.clone())
    }
}

impl Reducible for ContactFormState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(_, _) if self.is_submitting() => return self,
            ContactAction::Edit(field, value) => next.form.set(field, value),
            ContactAction::Begin if self.is_submitting() => return self,
            ContactAction::Begin => next.status = SubmitStatus::Submitting,
            ContactAction::Finished(Ok(())) => {
                next.status = SubmitStatus::Success;
                next.form = ContactForm::default();
            }
            ContactAction::Finished(Err(_)) => next.status = SubmitStatus::Error,
        }
        Rc::new(next)
    }
}

/// Something that can deliver a filled-in contact form.
pub trait FormRelay {
    fn deliver<'a>(&'a self, form: &'a ContactForm) -> LocalBoxFuture<'a, Result<(), SubmitError>>;
}

/// Posts the form as multipart data to the configured relay endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRelay {
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new(config::form_endpoint())
    }
}

fn form_data(form: &ContactForm) -> Result<FormData, SubmitError> {
    let data = FormData::new().map_err(|e| SubmitError::Network(format!("{:?}", e)))?;
    for (key, value) in form.payload() {
        data.append_with_str(key, value)
            .map_err(|e| SubmitError::Network(format!("{:?}", e)))?;
    }
    Ok(data)
}

impl FormRelay for HttpRelay {
    fn deliver<'a>(&'a self, form: &'a ContactForm) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
        async move {
            // the browser fills in the multipart boundary for FormData bodies
            let response = Request::post(&self.endpoint)
                .body(form_data(form)?)
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                Err(SubmitError::Status(response.status()))
            }
        }
        .boxed_local()
    }
}

/// Allows a single submission in flight at a time.
#[derive(Debug, Default)]
pub struct SubmitGuard(Cell<bool>);

impl SubmitGuard {
    pub fn try_acquire(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

/// Sends `form` once. Returns `None` without contacting the relay when another
/// submission still holds the guard.
pub async fn submit_contact<R: FormRelay>(
    relay: &R,
    guard: &SubmitGuard,
    form: ContactForm,
) -> Option<ContactAction> {
    if !guard.try_acquire() {
        return None;
    }
    let result = relay.deliver(&form).await;
    guard.release();

    match &result {
        Ok(()) => info!("Contact form delivered"),
        Err(e) => error!("Form submission error: {}", e),
    }
    Some(ContactAction::Finished(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;

    enum Outcome {
        Accept,
        Fail(SubmitError),
        Hang,
    }

    struct MockRelay {
        outcome: Outcome,
        calls: Cell<usize>,
        last: std::cell::RefCell<Option<ContactForm>>,
    }

    impl MockRelay {
        fn new(outcome: Outcome) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
                last: Default::default(),
            }
        }
    }

    impl FormRelay for MockRelay {
        fn deliver<'a>(&'a self, form: &'a ContactForm) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(form.clone());
            match &self.outcome {
                Outcome::Accept => future::ready(Ok(())).boxed_local(),
                Outcome::Fail(e) => future::ready(Err(e.clone())).boxed_local(),
                Outcome::Hang => future::pending().boxed_local(),
            }
        }
    }

    fn filled() -> Rc<ContactFormState> {
        let state = Rc::new(ContactFormState::default());
        let state = state.reduce(ContactAction::Edit(Field::Name, "Ada".into()));
        let state = state.reduce(ContactAction::Edit(Field::Email, "ada@x.com".into()));
        state.reduce(ContactAction::Edit(Field::Message, "Hi".into()))
    }

    fn ada() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@x.com".into(),
            message: "Hi".into(),
        }
    }

    /// Runs the whole submit flow the way the contact section drives it.
    fn run(state: Rc<ContactFormState>, relay: &MockRelay) -> Rc<ContactFormState> {
        let form = state.pending_submission().expect("not submitting yet");
        let state = state.reduce(ContactAction::Begin);
        assert_eq!(state.status, SubmitStatus::Submitting);
        let guard = SubmitGuard::default();
        let action = block_on(submit_contact(relay, &guard, form)).expect("guard was free");
        state.reduce(action)
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = ContactFormState::default();
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn edits_update_single_fields() {
        let state = filled();
        assert_eq!(state.form, ada());
        assert_eq!(state.form.get(Field::Email), "ada@x.com");
    }

    #[test]
    fn successful_delivery_clears_the_form() {
        let relay = MockRelay::new(Outcome::Accept);
        let state = run(filled(), &relay);
        assert_eq!(state.status, SubmitStatus::Success);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(relay.last.borrow().as_ref(), Some(&ada()));
    }

    #[test]
    fn failed_delivery_keeps_the_fields() {
        let relay = MockRelay::new(Outcome::Fail(SubmitError::Network("offline".into())));
        let state = run(filled(), &relay);
        assert_eq!(state.status, SubmitStatus::Error);
        assert_eq!(state.form, ada());
    }

    #[test]
    fn non_success_status_is_an_error() {
        let relay = MockRelay::new(Outcome::Fail(SubmitError::Status(500)));
        let state = run(filled(), &relay);
        assert_eq!(state.status, SubmitStatus::Error);
        assert_eq!(state.form, ada());
    }

    #[test]
    fn resubmitting_after_an_error_goes_back_to_submitting() {
        let relay = MockRelay::new(Outcome::Fail(SubmitError::Status(502)));
        let state = run(filled(), &relay);
        let state = state.reduce(ContactAction::Begin);
        assert_eq!(state.status, SubmitStatus::Submitting);
    }

    #[test]
    fn second_submit_while_pending_does_not_reach_the_relay() {
        let relay = MockRelay::new(Outcome::Hang);
        let guard = SubmitGuard::default();

        let mut first = Box::pin(submit_contact(&relay, &guard, ada()));
        assert!(first.as_mut().now_or_never().is_none());

        let second = submit_contact(&relay, &guard, ada()).now_or_never();
        assert_eq!(second, Some(None));
        assert_eq!(relay.calls.get(), 1);
    }

    #[test]
    fn guard_is_released_after_completion() {
        let relay = MockRelay::new(Outcome::Accept);
        let guard = SubmitGuard::default();
        assert!(block_on(submit_contact(&relay, &guard, ada())).is_some());
        assert!(block_on(submit_contact(&relay, &guard, ada())).is_some());
        assert_eq!(relay.calls.get(), 2);
    }

    #[test]
    fn submitting_state_ignores_begin_and_edits() {
        let state = filled().reduce(ContactAction::Begin);
        assert!(state.pending_submission().is_none());

        let again = state.clone().reduce(ContactAction::Begin);
        assert!(Rc::ptr_eq(&state, &again));

        let edited = state.clone().reduce(ContactAction::Edit(Field::Name, "Bob".into()));
        assert_eq!(edited.form.name, "Ada");
    }

    #[test]
    fn payload_carries_control_fields() {
        let form = ada();
        let payload = form.payload();
        assert_eq!(
            payload,
            vec![
                ("name", "Ada"),
                ("email", "ada@x.com"),
                ("message", "Hi"),
                ("_subject", SUBJECT),
                ("_captcha", "false"),
                ("_template", "table"),
            ]
        );
    }

    #[test]
    fn relay_defaults_to_configured_endpoint() {
        assert_eq!(HttpRelay::default(), HttpRelay::new(config::form_endpoint()));
    }
}
