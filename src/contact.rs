use chrono::Utc;
use log::{debug, error, info};
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::MessageStore;
use crate::api::models::MessageRecord;
use crate::error::ContactError;

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Message,
}

impl FromStr for Field {
    type Err = ContactError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            "email" => Ok(Field::Email),
            "message" => Ok(Field::Message),
            other => Err(ContactError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub email: String,
    pub message: String,
}

impl FormInput {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.message.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// Text for the status line, if any should be shown.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Succeeded(msg) | SubmissionStatus::Failed(msg) => Some(msg),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { "Sending..." } else { "Send Message" }
    }
}

struct FormState {
    input: FormInput,
    status: SubmissionStatus,
    reset_timer: Option<JoinHandle<()>>,
}

impl FormState {
    fn cancel_reset_timer(&mut self) {
        if let Some(timer) = self.reset_timer.take() {
            timer.abort();
        }
    }
}

struct Inner {
    store: Arc<dyn MessageStore>,
    state: Mutex<FormState>,
    status_tx: watch::Sender<SubmissionStatus>,
    success_display: Duration,
}

/// Puts an abandoned submission back to `Idle` so the form stays usable when
/// the `submit` future is dropped mid-flight.
struct InFlight<'a> {
    inner: &'a Inner,
    armed: bool,
}

impl InFlight<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.inner.lock();
        if state.status.is_submitting() {
            debug!("Submission dropped before the store answered");
            self.inner.publish(&mut state, SubmissionStatus::Idle);
        }
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &mut FormState, status: SubmissionStatus) {
        state.status = status.clone();
        self.status_tx.send_replace(status);
    }
}

/// Contact form controller. Cheap to clone; clones share one form.
///
/// At most one submission is in flight per form. A successful send clears the
/// inputs and falls back to `Idle` after [`SUCCESS_DISPLAY`] unless another
/// submission starts first.
#[derive(Clone)]
pub struct ContactForm {
    inner: Arc<Inner>,
}

impl ContactForm {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self::with_success_display(store, SUCCESS_DISPLAY)
    }

    pub fn with_success_display(store: Arc<dyn MessageStore>, success_display: Duration) -> Self {
        let (status_tx, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            inner: Arc::new(Inner {
                store,
                state: Mutex::new(FormState {
                    input: FormInput::default(),
                    status: SubmissionStatus::Idle,
                    reset_timer: None,
                }),
                status_tx,
                success_display,
            }),
        }
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        self.inner.lock().input.set(field, value.into());
    }

    pub fn input(&self) -> FormInput {
        self.inner.lock().input.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.inner.lock().status.clone()
    }

    pub fn can_submit(&self) -> bool {
        !self.inner.lock().status.is_submitting()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.inner.status_tx.subscribe()
    }

    /// Validate and send the current input. Returns the status the form ends
    /// up in; a call made while another is in flight changes nothing.
    ///
    /// Must run inside a tokio runtime, which hosts the reset timer.
    pub async fn submit(&self) -> SubmissionStatus {
        let record = {
            let mut state = self.inner.lock();
            if state.status.is_submitting() {
                debug!("Submission already in flight, ignoring");
                return SubmissionStatus::Submitting;
            }
            state.cancel_reset_timer();

            if !state.input.is_complete() {
                let status = SubmissionStatus::Failed(ContactError::MissingFields.user_message());
                self.inner.publish(&mut state, status.clone());
                return status;
            }

            self.inner.publish(&mut state, SubmissionStatus::Submitting);
            MessageRecord::new(state.input.email.clone(), state.input.message.clone(), Utc::now())
        };

        debug!("Submitting contact message from {}", record.email);
        let in_flight = InFlight { inner: &self.inner, armed: true };
        let result = self.inner.store.insert_message(&record).await;
        in_flight.disarm();

        let mut state = self.inner.lock();
        let status = match result {
            Ok(()) => {
                info!("Contact message stored");
                state.input = FormInput::default();
                SubmissionStatus::Succeeded(SENT_MESSAGE.to_string())
            }
            Err(err) => {
                error!("Error sending message: {err}");
                SubmissionStatus::Failed(ContactError::from(err).user_message())
            }
        };
        self.inner.publish(&mut state, status.clone());
        if matches!(status, SubmissionStatus::Succeeded(_)) {
            state.reset_timer = Some(self.schedule_reset());
        }
        status
    }

    fn schedule_reset(&self) -> JoinHandle<()> {
        let weak = Arc::downgrade(&self.inner);
        let delay = self.inner.success_display;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(inner) = weak.upgrade() else { return };
            let mut state = inner.lock();
            state.reset_timer = None;
            if matches!(state.status, SubmissionStatus::Succeeded(_)) {
                inner.publish(&mut state, SubmissionStatus::Idle);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use async_trait::async_trait;
    use chrono::DateTime;
    use tokio::sync::Notify;

    const FILL_ALL_FIELDS: &str = "Please fill in all fields";
    const SEND_FAILED: &str = "Failed to send message. Please try again.";

    #[derive(Default)]
    struct FakeStore {
        calls: Mutex<Vec<MessageRecord>>,
        fail: Mutex<bool>,
        gate: Option<Arc<Notify>>,
    }

    impl FakeStore {
        fn failing() -> Self {
            Self { fail: Mutex::new(true), ..Self::default() }
        }

        fn gated(gate: Arc<Notify>) -> Self {
            Self { gate: Some(gate), ..Self::default() }
        }

        fn set_failing(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }

        fn calls(&self) -> Vec<MessageRecord> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageStore for FakeStore {
        async fn insert_message(&self, record: &MessageRecord) -> Result<(), StoreError> {
            self.calls.lock().unwrap().push(record.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if *self.fail.lock().unwrap() {
                return Err(StoreError::Rejected {
                    status: 401,
                    code: Some("PGRST301".into()),
                    message: "JWT expired".into(),
                });
            }
            Ok(())
        }
    }

    fn form_with(store: &Arc<FakeStore>) -> ContactForm {
        ContactForm::new(store.clone())
    }

    fn fill(form: &ContactForm, email: &str, message: &str) {
        form.update_field(Field::Email, email);
        form.update_field(Field::Message, message);
    }

    #[test]
    fn field_ids_parse() {
        assert_eq!("email".parse::<Field>().unwrap(), Field::Email);
        assert_eq!("message".parse::<Field>().unwrap(), Field::Message);
        assert!(matches!("name".parse::<Field>(), Err(ContactError::UnknownField(id)) if id == "name"));
    }

    #[test]
    fn submit_label_follows_status() {
        assert_eq!(SubmissionStatus::Submitting.submit_label(), "Sending...");
        assert_eq!(SubmissionStatus::Idle.submit_label(), "Send Message");
        assert_eq!(SubmissionStatus::Failed("x".into()).submit_label(), "Send Message");
        assert_eq!(SubmissionStatus::Idle.message(), None);
    }

    #[tokio::test]
    async fn missing_email_never_reaches_store() {
        let store = Arc::new(FakeStore::default());
        let form = form_with(&store);
        fill(&form, "", "hi");

        let status = form.submit().await;

        assert_eq!(status, SubmissionStatus::Failed(FILL_ALL_FIELDS.into()));
        assert_eq!(form.status().message(), Some(FILL_ALL_FIELDS));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn whitespace_only_counts_as_missing() {
        let store = Arc::new(FakeStore::default());
        let form = form_with(&store);
        fill(&form, "a@b.com", "   \n");

        assert_eq!(form.submit().await, SubmissionStatus::Failed(FILL_ALL_FIELDS.into()));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn repeated_invalid_submits_are_stable() {
        let store = Arc::new(FakeStore::default());
        let form = form_with(&store);
        fill(&form, "a@b.com", "");

        let first = form.submit().await;
        let second = form.submit().await;

        assert_eq!(first, second);
        assert_eq!(form.input(), FormInput { email: "a@b.com".into(), message: String::new() });
        assert!(store.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn successful_send_clears_input_then_goes_idle() {
        let store = Arc::new(FakeStore::default());
        let form = form_with(&store);
        fill(&form, "a@b.com", "hi");

        let before = Utc::now();
        let status = form.submit().await;
        let after = Utc::now();

        assert_eq!(status, SubmissionStatus::Succeeded(SENT_MESSAGE.into()));
        assert_eq!(form.input(), FormInput::default());

        let calls = store.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].email, "a@b.com");
        assert_eq!(calls[0].message, "hi");
        let created_at: DateTime<Utc> = calls[0].created_at;
        assert!(before <= created_at && created_at <= after);

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert_eq!(form.status(), SubmissionStatus::Succeeded(SENT_MESSAGE.into()));

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn remote_error_keeps_input() {
        let store = Arc::new(FakeStore::failing());
        let form = form_with(&store);
        fill(&form, "a@b.com", "hi");

        let status = form.submit().await;

        assert_eq!(status, SubmissionStatus::Failed(SEND_FAILED.into()));
        assert_eq!(form.input(), FormInput { email: "a@b.com".into(), message: "hi".into() });
        assert_eq!(store.calls().len(), 1);
    }

    #[tokio::test]
    async fn failure_then_valid_retry_is_sent() {
        let store = Arc::new(FakeStore::failing());
        let form = form_with(&store);
        fill(&form, "a@b.com", "hi");

        form.submit().await;
        store.set_failing(false);
        let status = form.submit().await;

        assert_eq!(status, SubmissionStatus::Succeeded(SENT_MESSAGE.into()));
        assert_eq!(store.calls().len(), 2);
    }

    #[tokio::test]
    async fn submit_while_in_flight_is_ignored() {
        let gate = Arc::new(Notify::new());
        let store = Arc::new(FakeStore::gated(gate.clone()));
        let form = form_with(&store);
        fill(&form, "a@b.com", "hi");

        let mut status_rx = form.subscribe();
        let first = {
            let form = form.clone();
            tokio::spawn(async move { form.submit().await })
        };
        status_rx
            .wait_for(SubmissionStatus::is_submitting)
            .await
            .unwrap();
        assert!(!form.can_submit());

        assert_eq!(form.submit().await, SubmissionStatus::Submitting);

        gate.notify_one();
        let status = first.await.unwrap();
        assert_eq!(status, SubmissionStatus::Succeeded(SENT_MESSAGE.into()));
        assert_eq!(store.calls().len(), 1);
        assert!(form.can_submit());
    }

    #[tokio::test(start_paused = true)]
    async fn new_submission_supersedes_reset_timer() {
        let store = Arc::new(FakeStore::default());
        let form = form_with(&store);
        fill(&form, "a@b.com", "hi");
        form.submit().await;

        tokio::time::sleep(Duration::from_millis(3000)).await;
        store.set_failing(true);
        fill(&form, "a@b.com", "again");
        assert_eq!(form.submit().await, SubmissionStatus::Failed(SEND_FAILED.into()));

        tokio::time::sleep(Duration::from_millis(5000)).await;
        tokio::task::yield_now().await;
        assert_eq!(form.status(), SubmissionStatus::Failed(SEND_FAILED.into()));
    }

    #[tokio::test(start_paused = true)]
    async fn second_success_gets_its_full_display_time() {
        let store = Arc::new(FakeStore::default());
        let form = form_with(&store);
        fill(&form, "a@b.com", "hi");
        form.submit().await;

        tokio::time::sleep(Duration::from_millis(3000)).await;
        fill(&form, "a@b.com", "again");
        assert_eq!(form.submit().await, SubmissionStatus::Succeeded(SENT_MESSAGE.into()));

        // Past the first timer's deadline, well inside the second one.
        tokio::time::sleep(Duration::from_millis(2500)).await;
        tokio::task::yield_now().await;
        assert_eq!(form.status(), SubmissionStatus::Succeeded(SENT_MESSAGE.into()));

        tokio::time::sleep(Duration::from_millis(2600)).await;
        tokio::task::yield_now().await;
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(store.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_submit_releases_the_form() {
        let gate = Arc::new(Notify::new());
        let store = Arc::new(FakeStore::gated(gate));
        let form = form_with(&store);
        fill(&form, "a@b.com", "hi");

        let waited = tokio::time::timeout(Duration::from_secs(1), form.submit()).await;

        assert!(waited.is_err());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.can_submit());
        assert_eq!(form.input(), FormInput { email: "a@b.com".into(), message: "hi".into() });
        assert_eq!(store.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_the_full_lifecycle() {
        let store = Arc::new(FakeStore::default());
        let form = form_with(&store);
        let mut status_rx = form.subscribe();
        fill(&form, "a@b.com", "hi");

        form.submit().await;
        assert_eq!(
            *status_rx.borrow_and_update(),
            SubmissionStatus::Succeeded(SENT_MESSAGE.into())
        );

        status_rx.changed().await.unwrap();
        assert_eq!(*status_rx.borrow(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_form_leaves_timer_harmless() {
        let store = Arc::new(FakeStore::default());
        let form = form_with(&store);
        let mut status_rx = form.subscribe();
        fill(&form, "a@b.com", "hi");
        form.submit().await;
        drop(form);

        tokio::time::sleep(SUCCESS_DISPLAY * 2).await;
        tokio::task::yield_now().await;
        assert!(matches!(*status_rx.borrow_and_update(), SubmissionStatus::Succeeded(_)));
    }
}
