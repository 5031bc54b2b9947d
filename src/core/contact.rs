//! Contact form validation and submission state machine
//!
//! The form itself is plain markup; everything with behavior lives here so it
//! runs natively under test. Validation follows the rules the site has always
//! used, and the "transport" is a timed coin flip standing in for a real
//! backend call behind the same contract.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::random::RandomSource;

/// Simulated network latency of the fake transport, in milliseconds.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Probability that the simulated transport reports success.
pub const SUCCESS_RATE: f64 = 0.95;

/// How long the success banner stays up before auto-clearing, in milliseconds.
pub const SUCCESS_NOTICE_MS: u32 = 6_000;

/// Service tag stamped onto every submission payload.
pub const SERVICE_TAG: &str = "DebreTech Contact Form";

/// Inline validation failure for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Required field left blank (after trimming).
    Required,
    /// Filled email field that does not look like an address.
    InvalidEmail,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required => write!(f, "Ez a mező kötelező"),
            FieldError::InvalidEmail => {
                write!(f, "Kérjük, adjon meg egy érvényes email címet")
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Failure reported by the simulated transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionError;

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "network error")
    }
}

impl std::error::Error for SubmissionError {}

/// Input widget kind; only `Email` carries validation beyond the required
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
}

/// The four form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Message,
    ];
}

/// Widget kind and required flag per field. Phone is the only optional one.
fn field_rules(id: FieldId) -> (FieldKind, bool) {
    match id {
        FieldId::Name => (FieldKind::Text, true),
        FieldId::Email => (FieldKind::Email, true),
        FieldId::Phone => (FieldKind::Tel, false),
        FieldId::Message => (FieldKind::TextArea, true),
    }
}

/// Same acceptance set as the `^[^\s@]+@[^\s@]+\.[^\s@]+$` check the site has
/// always used: exactly one `@`, no whitespace anywhere, and a dot strictly
/// inside the domain part.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let clean =
        |part: &str| !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    // At least one dot with characters on both sides of it
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validates one field value the way the form does on blur and on submit.
/// The required check wins over the email check, and a blank optional email
/// would pass.
pub fn validate_field(value: &str, kind: FieldKind, required: bool) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if required && trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    if kind == FieldKind::Email && !trimmed.is_empty() && !is_valid_email(trimmed) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Payload assembled from a validated form, shaped like what a real backend
/// would receive. Logged as JSON diagnostics on success, then dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
}

/// Current value and inline error of one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldError>,
}

/// Observable submission lifecycle. Validation runs synchronously inside
/// [`ContactForm::begin_submit`], so a failed validation leaves the phase at
/// `Idle` with inline errors set rather than introducing extra states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// The whole contact form: four fields plus the submission phase. The ui
/// holds one of these in a signal and drives it only through these methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    name: FieldState,
    email: FieldState,
    phone: FieldState,
    message: FieldState,
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Message => &self.message,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Message => &mut self.message,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// The submit control is disabled exactly while this returns true.
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Whether any field currently carries an inline error.
    pub fn has_errors(&self) -> bool {
        FieldId::ALL.into_iter().any(|id| self.field(id).error.is_some())
    }

    /// Typing into a field updates its value and clears its inline error.
    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        let field = self.field_mut(id);
        field.value = value.into();
        field.error = None;
    }

    /// Blur-time validation of a single field. Returns whether it passed.
    pub fn validate_one(&mut self, id: FieldId) -> bool {
        let (kind, required) = field_rules(id);
        let field = self.field_mut(id);
        match validate_field(&field.value, kind, required) {
            Ok(()) => {
                field.error = None;
                true
            }
            Err(error) => {
                field.error = Some(error);
                false
            }
        }
    }

    /// Submit action. Re-validates every field; any failure keeps the form
    /// editable with inline errors set and returns `None`. When everything
    /// passes, the phase moves to `Submitting` and the payload for the
    /// transport is returned. Ignored while a submission is already in
    /// flight.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Option<ContactSubmission> {
        if self.is_submitting() {
            return None;
        }

        let mut all_valid = true;
        for id in FieldId::ALL {
            if !self.validate_one(id) {
                all_valid = false;
            }
        }
        if !all_valid {
            self.phase = SubmitPhase::Idle;
            return None;
        }

        // Payload carries the values as typed; phone collapses to None when
        // left blank.
        let phone = self.phone.value.trim();
        let submission = ContactSubmission {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            phone: (!phone.is_empty()).then(|| self.phone.value.clone()),
            message: self.message.value.clone(),
            timestamp: now,
            service: SERVICE_TAG,
        };
        self.phase = SubmitPhase::Submitting;
        Some(submission)
    }

    /// Completes the in-flight submission. Success clears every field and
    /// inline error; failure keeps all values so the user can retry.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmissionError>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(()) => {
                *self = Self {
                    phase: SubmitPhase::Succeeded,
                    ..Self::default()
                };
            }
            Err(_) => self.phase = SubmitPhase::Failed,
        }
    }

    /// Dismisses the transient success/failure notice, re-arming the form.
    /// No effect in any other phase, so a stale auto-clear timer cannot knock
    /// back a submission started in the meantime.
    pub fn acknowledge(&mut self) {
        if matches!(self.phase, SubmitPhase::Succeeded | SubmitPhase::Failed) {
            self.phase = SubmitPhase::Idle;
        }
    }
}

/// Resolves the simulated transport: success for draws below
/// [`SUCCESS_RATE`]. The ~1.5 s latency is applied by the caller.
pub fn simulate_outcome(rng: &mut dyn RandomSource) -> Result<(), SubmissionError> {
    if rng.next_unit() < SUCCESS_RATE {
        Ok(())
    } else {
        Err(SubmissionError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::ScriptedRandom;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(FieldId::Name, "Anna");
        form.set_value(FieldId::Email, "anna@example.com");
        form.set_value(FieldId::Message, "Hello");
        form
    }

    #[test]
    fn test_required_fields_reject_blank() {
        assert_eq!(
            validate_field("", FieldKind::Text, true),
            Err(FieldError::Required)
        );
        assert_eq!(
            validate_field("   ", FieldKind::TextArea, true),
            Err(FieldError::Required)
        );
        // Required wins over the email pattern on a blank email field
        assert_eq!(
            validate_field("  ", FieldKind::Email, true),
            Err(FieldError::Required)
        );
    }

    #[test]
    fn test_optional_fields_accept_blank() {
        assert_eq!(validate_field("", FieldKind::Tel, false), Ok(()));
        assert_eq!(validate_field("", FieldKind::Email, false), Ok(()));
    }

    #[test]
    fn test_email_acceptance() {
        for value in [
            "anna@example.com",
            "a@b.cd",
            "user.name+tag@sub.domain.org",
            "szabó.éva@céges.hu",
        ] {
            assert!(is_valid_email(value), "should accept {value:?}");
            assert_eq!(validate_field(value, FieldKind::Email, true), Ok(()));
        }
    }

    #[test]
    fn test_email_rejection() {
        for value in [
            "plainaddress",
            "a@b",
            "a@b.",
            "a@.c",
            "@b.c",
            "a@",
            "a@b@c.d",
            "has space@b.c",
            "a@b c.d",
        ] {
            assert!(!is_valid_email(value), "should reject {value:?}");
            assert_eq!(
                validate_field(value, FieldKind::Email, true),
                Err(FieldError::InvalidEmail)
            );
        }
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::Required.to_string(), "Ez a mező kötelező");
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Kérjük, adjon meg egy érvényes email címet"
        );
    }

    #[test]
    fn test_typing_clears_inline_error() {
        let mut form = ContactForm::new();
        assert!(!form.validate_one(FieldId::Name));
        assert_eq!(form.field(FieldId::Name).error, Some(FieldError::Required));

        form.set_value(FieldId::Name, "A");
        assert_eq!(form.field(FieldId::Name).error, None);
    }

    #[test]
    fn test_blur_validation_sets_and_clears() {
        let mut form = ContactForm::new();
        form.set_value(FieldId::Email, "not-an-email");
        assert!(!form.validate_one(FieldId::Email));
        assert_eq!(
            form.field(FieldId::Email).error,
            Some(FieldError::InvalidEmail)
        );

        form.set_value(FieldId::Email, "anna@example.com");
        assert!(form.validate_one(FieldId::Email));
        assert_eq!(form.field(FieldId::Email).error, None);
    }

    #[test]
    fn test_submit_with_valid_fields_enters_submitting() {
        let mut form = filled_form();
        let now = Utc::now();

        let submission = form.begin_submit(now).expect("payload");
        assert_eq!(form.phase(), SubmitPhase::Submitting);
        assert!(form.is_submitting());
        assert_eq!(submission.name, "Anna");
        assert_eq!(submission.email, "anna@example.com");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.message, "Hello");
        assert_eq!(submission.timestamp, now);
        assert_eq!(submission.service, SERVICE_TAG);
    }

    #[test]
    fn test_submit_keeps_values_as_typed() {
        let mut form = filled_form();
        form.set_value(FieldId::Name, "  Anna  ");
        form.set_value(FieldId::Phone, "+36 30 123 4567");

        let submission = form.begin_submit(Utc::now()).expect("payload");
        assert_eq!(submission.name, "  Anna  ");
        assert_eq!(submission.phone.as_deref(), Some("+36 30 123 4567"));
    }

    #[test]
    fn test_submit_with_invalid_fields_stays_idle() {
        let mut form = ContactForm::new();
        form.set_value(FieldId::Email, "broken@");
        assert!(!form.has_errors());

        assert!(form.begin_submit(Utc::now()).is_none());
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert!(!form.is_submitting());
        assert!(form.has_errors());
        assert_eq!(form.field(FieldId::Name).error, Some(FieldError::Required));
        assert_eq!(
            form.field(FieldId::Email).error,
            Some(FieldError::InvalidEmail)
        );
        assert_eq!(form.field(FieldId::Phone).error, None);
        assert_eq!(
            form.field(FieldId::Message).error,
            Some(FieldError::Required)
        );
    }

    #[test]
    fn test_submit_ignored_while_in_flight() {
        let mut form = filled_form();
        assert!(form.begin_submit(Utc::now()).is_some());

        // Second submit while the first is pending does nothing
        assert!(form.begin_submit(Utc::now()).is_none());
        assert_eq!(form.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn test_success_resets_form() {
        let mut form = filled_form();
        form.set_value(FieldId::Phone, "+36 30 000 0000");
        form.begin_submit(Utc::now());

        form.finish_submit(Ok(()));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
        assert!(!form.is_submitting());
        for id in FieldId::ALL {
            assert_eq!(form.field(id).value, "");
            assert_eq!(form.field(id).error, None);
        }
    }

    #[test]
    fn test_failure_retains_values_for_retry() {
        let mut form = filled_form();
        form.begin_submit(Utc::now());

        form.finish_submit(Err(SubmissionError));
        assert_eq!(form.phase(), SubmitPhase::Failed);
        assert!(!form.is_submitting());
        assert_eq!(form.field(FieldId::Name).value, "Anna");
        assert_eq!(form.field(FieldId::Email).value, "anna@example.com");
        assert_eq!(form.field(FieldId::Message).value, "Hello");

        // And the retry goes through
        assert!(form.begin_submit(Utc::now()).is_some());
        assert_eq!(form.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn test_finish_without_pending_submission_is_noop() {
        let mut form = filled_form();
        form.finish_submit(Ok(()));
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.field(FieldId::Name).value, "Anna");
    }

    #[test]
    fn test_acknowledge_rearms_only_after_completion() {
        let mut form = filled_form();
        form.begin_submit(Utc::now());
        form.finish_submit(Ok(()));
        form.acknowledge();
        assert_eq!(form.phase(), SubmitPhase::Idle);

        // No effect while submitting
        let mut form = filled_form();
        form.begin_submit(Utc::now());
        form.acknowledge();
        assert_eq!(form.phase(), SubmitPhase::Submitting);

        // No effect when idle
        let mut form = ContactForm::new();
        form.acknowledge();
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_simulated_outcome_follows_success_rate() {
        assert!(simulate_outcome(&mut ScriptedRandom::constant(0.0)).is_ok());
        assert!(simulate_outcome(&mut ScriptedRandom::constant(0.9499)).is_ok());
        // The boundary draw fails: the rate is a strict upper bound
        assert!(simulate_outcome(&mut ScriptedRandom::constant(0.95)).is_err());
        assert!(simulate_outcome(&mut ScriptedRandom::constant(0.999)).is_err());
    }

    #[test]
    fn test_submission_payload_serializes_for_diagnostics() {
        let mut form = filled_form();
        let submission = form.begin_submit(Utc::now()).expect("payload");

        let json = serde_json::to_value(&submission).expect("serializable");
        assert_eq!(json["name"], "Anna");
        assert_eq!(json["service"], SERVICE_TAG);
        assert!(json["phone"].is_null());
        assert!(json["timestamp"].is_string());
    }
}
