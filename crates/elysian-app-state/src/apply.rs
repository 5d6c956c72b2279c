use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::navigation::{SessionStore, application_submitted, mark_application_submitted};
use crate::route::ViewId;

pub const GENERIC_RELAY_FAILURE: &str = "Sorry, there was an error submitting your application.";
pub const RELAY_SUBJECT_PREFIX: &str = "New Elysian Hub Application: ";
/// Closing the flow from any stage lands here.
pub const APPLY_CLOSE_TARGET: ViewId = ViewId::Home;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicantField {
    FullName,
    Email,
    Phone,
    DateOfBirth,
    Country,
    City,
    Height,
    HairColor,
    EyeColor,
}

impl ApplicantField {
    pub const ALL: [ApplicantField; 9] = [
        ApplicantField::FullName,
        ApplicantField::Email,
        ApplicantField::Phone,
        ApplicantField::DateOfBirth,
        ApplicantField::Country,
        ApplicantField::City,
        ApplicantField::Height,
        ApplicantField::HairColor,
        ApplicantField::EyeColor,
    ];

    /// Multipart field name sent to the relay.
    #[must_use]
    pub fn form_name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::DateOfBirth => "dob",
            Self::Country => "country",
            Self::City => "city",
            Self::Height => "height",
            Self::HairColor => "hairColor",
            Self::EyeColor => "eyeColor",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::DateOfBirth => "Date of Birth",
            Self::Country => "Country",
            Self::City => "City",
            Self::Height => "Height (e.g., 5'11\")",
            Self::HairColor => "Hair Color",
            Self::EyeColor => "Eye Color",
        }
    }

    /// Plain name used in validation messages.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Height => "Height",
            Self::Email => "Email",
            Self::Phone => "Phone",
            other => other.label(),
        }
    }

    /// HTML input type for the field.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::DateOfBirth => "date",
            _ => "text",
        }
    }

    #[must_use]
    pub fn parse(form_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.form_name() == form_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttachmentSlot {
    Headshot,
    FullBody,
    SideProfile,
    Video,
}

impl AttachmentSlot {
    pub const ALL: [AttachmentSlot; 4] = [
        AttachmentSlot::Headshot,
        AttachmentSlot::FullBody,
        AttachmentSlot::SideProfile,
        AttachmentSlot::Video,
    ];

    #[must_use]
    pub fn form_name(self) -> &'static str {
        match self {
            Self::Headshot => "headshot",
            Self::FullBody => "fullBody",
            Self::SideProfile => "sideProfile",
            Self::Video => "video",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Headshot => "Upload Headshot",
            Self::FullBody => "Upload Full Body Shot",
            Self::SideProfile => "Upload Side Profile",
            Self::Video => "Upload Video (Optional)",
        }
    }

    #[must_use]
    pub fn accept(self) -> &'static str {
        match self {
            Self::Video => "video/*",
            _ => "image/*",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Video)
    }

    #[must_use]
    pub fn parse(form_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.form_name() == form_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("Please accept the terms and conditions to continue.")]
    TermsNotAccepted,
    #[error("Please fill in {}.", .0.display_name())]
    MissingField(ApplicantField),
    #[error("Please upload all three required photos.")]
    MissingPhotos,
    #[error("Your application is already being submitted.")]
    AlreadySubmitting,
    #[error("Your application has already been submitted.")]
    AlreadySubmitted,
    #[error("No submission is in progress.")]
    NotSubmitting,
    #[error("Submission failed: {0}")]
    Relay(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    Network(String),
    #[error("could not build the submission: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyStage {
    Terms,
    Form,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
}

/// Multipart payload handed to the relay, in field order.
#[derive(Debug, Clone)]
pub struct RelaySubmission<A> {
    pub fields: Vec<(String, String)>,
    pub attachments: Vec<(AttachmentSlot, A)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait(?Send)]
pub trait ApplicationRelay {
    type Attachment: Clone + 'static;

    async fn submit(
        &self,
        submission: RelaySubmission<Self::Attachment>,
    ) -> Result<RelayResponse, RelayError>;
}

#[derive(Debug, Default, Deserialize)]
struct RelayReply {
    #[serde(default)]
    success: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Success needs a 2xx status and a truthy `success` in the JSON body. The
/// relay sends it either as a boolean or as the string `"true"`.
pub fn interpret_relay_response(response: &RelayResponse) -> Result<(), ApplyError> {
    let reply = serde_json::from_str::<RelayReply>(&response.body).unwrap_or_default();
    let accepted = match reply.success.as_ref() {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(flag)) => flag == "true",
        _ => false,
    };

    if (200..300).contains(&response.status) && accepted {
        return Ok(());
    }

    let message = reply
        .message
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_RELAY_FAILURE.to_string());
    Err(ApplyError::Relay(message))
}

#[derive(Debug, Clone)]
pub struct ApplyFlow<A> {
    stage: ApplyStage,
    terms_accepted: bool,
    details: BTreeMap<ApplicantField, String>,
    attachments: BTreeMap<AttachmentSlot, A>,
    status: SubmissionStatus,
    error: Option<String>,
}

impl<A> Default for ApplyFlow<A> {
    fn default() -> Self {
        Self {
            stage: ApplyStage::Terms,
            terms_accepted: false,
            details: BTreeMap::new(),
            attachments: BTreeMap::new(),
            status: SubmissionStatus::Idle,
            error: None,
        }
    }
}

impl<A> ApplyFlow<A> {
    /// Fresh flow for a newly mounted apply view. A submission earlier in this
    /// session short-circuits to the success state.
    pub fn mount(session: &impl SessionStore) -> Self {
        let mut flow = Self::default();
        if application_submitted(session) {
            flow.stage = ApplyStage::Success;
            flow.status = SubmissionStatus::Succeeded;
        }
        flow
    }

    pub fn stage(&self) -> ApplyStage {
        self.stage
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    pub fn continue_to_form(&mut self) -> Result<(), ApplyError> {
        if self.stage != ApplyStage::Terms {
            return Ok(());
        }
        if !self.terms_accepted {
            return Err(ApplyError::TermsNotAccepted);
        }
        self.stage = ApplyStage::Form;
        Ok(())
    }

    pub fn field(&self, field: ApplicantField) -> &str {
        self.details.get(&field).map_or("", String::as_str)
    }

    pub fn set_field(&mut self, field: ApplicantField, value: impl Into<String>) {
        self.details.insert(field, value.into());
    }

    pub fn attachment(&self, slot: AttachmentSlot) -> Option<&A> {
        self.attachments.get(&slot)
    }

    pub fn attach(&mut self, slot: AttachmentSlot, attachment: A) {
        self.attachments.insert(slot, attachment);
    }

    pub fn detach(&mut self, slot: AttachmentSlot) {
        self.attachments.remove(&slot);
    }

    pub fn validate(&self) -> Result<(), ApplyError> {
        if let Some(field) = ApplicantField::ALL
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
        {
            return Err(ApplyError::MissingField(field));
        }
        let photos_missing = AttachmentSlot::ALL
            .into_iter()
            .filter(|slot| slot.is_required())
            .any(|slot| !self.attachments.contains_key(&slot));
        if photos_missing {
            return Err(ApplyError::MissingPhotos);
        }
        Ok(())
    }

    /// Outcome of a relay round trip. Failures return the flow to an idle,
    /// retryable state with the message kept for display. A flow that is not
    /// `Submitting` did not start this request and is left untouched.
    pub fn complete_submission(
        &mut self,
        outcome: Result<RelayResponse, RelayError>,
        session: &mut impl SessionStore,
    ) -> Result<(), ApplyError> {
        if self.status != SubmissionStatus::Submitting {
            warn!(status = ?self.status, stage = ?self.stage, "dropping relay result for a flow that is not submitting");
            return Err(ApplyError::NotSubmitting);
        }
        let result = outcome
            .map_err(|error| ApplyError::Relay(error.to_string()))
            .and_then(|response| interpret_relay_response(&response));
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded;
                self.stage = ApplyStage::Success;
                self.error = None;
                mark_application_submitted(session);
                info!("application submitted");
                Ok(())
            }
            Err(error) => {
                self.status = SubmissionStatus::Idle;
                self.error = Some(error.to_string());
                warn!(%error, "application submission failed");
                Err(error)
            }
        }
    }

    fn check_submittable(&self) -> Result<(), ApplyError> {
        match (self.stage, self.status) {
            (ApplyStage::Success, _) | (_, SubmissionStatus::Succeeded) => {
                Err(ApplyError::AlreadySubmitted)
            }
            (_, SubmissionStatus::Submitting) => Err(ApplyError::AlreadySubmitting),
            (ApplyStage::Terms, _) => Err(ApplyError::TermsNotAccepted),
            (ApplyStage::Form, SubmissionStatus::Idle) => self.validate(),
        }
    }
}

impl<A: Clone> ApplyFlow<A> {
    /// Validates and moves to `Submitting`, returning the payload to send.
    pub fn begin_submission(&mut self) -> Result<RelaySubmission<A>, ApplyError> {
        if let Err(error) = self.check_submittable() {
            if !matches!(error, ApplyError::AlreadySubmitting) {
                self.error = Some(error.to_string());
            }
            return Err(error);
        }

        self.status = SubmissionStatus::Submitting;
        self.error = None;

        let mut fields = ApplicantField::ALL
            .into_iter()
            .map(|field| (field.form_name().to_string(), self.field(field).to_string()))
            .collect::<Vec<_>>();
        fields.push((
            "_subject".to_string(),
            format!("{RELAY_SUBJECT_PREFIX}{}", self.field(ApplicantField::FullName)),
        ));
        fields.push(("_captcha".to_string(), "false".to_string()));

        let attachments = AttachmentSlot::ALL
            .into_iter()
            .filter_map(|slot| {
                self.attachments
                    .get(&slot)
                    .map(|attachment| (slot, attachment.clone()))
            })
            .collect();

        Ok(RelaySubmission {
            fields,
            attachments,
        })
    }

    pub async fn submit<R>(
        &mut self,
        relay: &R,
        session: &mut impl SessionStore,
    ) -> Result<(), ApplyError>
    where
        R: ApplicationRelay<Attachment = A>,
        A: 'static,
    {
        let submission = self.begin_submission()?;
        let outcome = relay.submit(submission).await;
        self.complete_submission(outcome, session)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::navigation::{MemoryHistory, MemorySessionStore, NavigateOptions, NavigationController};
    use crate::route::AddressMode;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct FakeFile(&'static str);

    struct FakeRelay {
        calls: Cell<usize>,
        last: RefCell<Option<RelaySubmission<FakeFile>>>,
        reply: Result<RelayResponse, RelayError>,
    }

    impl FakeRelay {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                calls: Cell::new(0),
                last: RefCell::new(None),
                reply: Ok(RelayResponse {
                    status,
                    body: body.to_string(),
                }),
            }
        }

        fn offline() -> Self {
            Self {
                calls: Cell::new(0),
                last: RefCell::new(None),
                reply: Err(RelayError::Network("Failed to fetch".to_string())),
            }
        }
    }

    #[async_trait(?Send)]
    impl ApplicationRelay for FakeRelay {
        type Attachment = FakeFile;

        async fn submit(
            &self,
            submission: RelaySubmission<FakeFile>,
        ) -> Result<RelayResponse, RelayError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(submission);
            self.reply.clone()
        }
    }

    fn filled_form() -> ApplyFlow<FakeFile> {
        let mut flow = ApplyFlow::default();
        flow.set_terms_accepted(true);
        assert_eq!(flow.continue_to_form(), Ok(()));
        for field in ApplicantField::ALL {
            flow.set_field(field, format!("{} value", field.form_name()));
        }
        flow.set_field(ApplicantField::FullName, "Ada Obi");
        flow
    }

    fn with_required_photos(mut flow: ApplyFlow<FakeFile>) -> ApplyFlow<FakeFile> {
        flow.attach(AttachmentSlot::Headshot, FakeFile("head.jpg"));
        flow.attach(AttachmentSlot::FullBody, FakeFile("body.jpg"));
        flow.attach(AttachmentSlot::SideProfile, FakeFile("side.jpg"));
        flow
    }

    #[test]
    fn terms_gate_the_form() {
        let mut flow = ApplyFlow::<FakeFile>::default();
        assert_eq!(flow.continue_to_form(), Err(ApplyError::TermsNotAccepted));
        assert_eq!(flow.stage(), ApplyStage::Terms);
        flow.set_terms_accepted(true);
        assert_eq!(flow.continue_to_form(), Ok(()));
        assert_eq!(flow.stage(), ApplyStage::Form);
    }

    #[test]
    fn missing_headshot_blocks_submission_without_a_network_call() {
        let relay = FakeRelay::replying(200, r#"{"success":"true"}"#);
        let mut session = MemorySessionStore::default();
        let mut flow = filled_form();
        flow.attach(AttachmentSlot::FullBody, FakeFile("body.jpg"));
        flow.attach(AttachmentSlot::SideProfile, FakeFile("side.jpg"));

        let result = block_on(flow.submit(&relay, &mut session));
        assert_eq!(result, Err(ApplyError::MissingPhotos));
        assert_eq!(flow.error(), Some("Please upload all three required photos."));
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert_eq!(relay.calls.get(), 0);
    }

    #[test]
    fn empty_text_fields_are_reported_by_label() {
        let mut flow = with_required_photos(filled_form());
        flow.set_field(ApplicantField::City, "   ");
        assert_eq!(flow.validate(), Err(ApplyError::MissingField(ApplicantField::City)));
        assert_eq!(
            ApplyError::MissingField(ApplicantField::City).to_string(),
            "Please fill in City."
        );
        assert_eq!(
            ApplyError::MissingField(ApplicantField::Height).to_string(),
            "Please fill in Height."
        );
    }

    #[test]
    fn complete_form_posts_once_and_succeeds_on_json_success() {
        let relay = FakeRelay::replying(200, r#"{"success":"true","message":"sent"}"#);
        let mut session = MemorySessionStore::default();
        let mut flow = with_required_photos(filled_form());
        flow.attach(AttachmentSlot::Video, FakeFile("reel.mp4"));

        assert_eq!(block_on(flow.submit(&relay, &mut session)), Ok(()));
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(flow.stage(), ApplyStage::Success);
        assert_eq!(flow.status(), SubmissionStatus::Succeeded);
        assert!(application_submitted(&session));

        let submission = relay.last.borrow().clone();
        let Some(submission) = submission else {
            unreachable!("relay saw the submission");
        };
        let slots = submission
            .attachments
            .iter()
            .map(|(slot, _)| *slot)
            .collect::<Vec<_>>();
        assert_eq!(slots, AttachmentSlot::ALL.to_vec());
        assert!(submission.fields.contains(&(
            "_subject".to_string(),
            "New Elysian Hub Application: Ada Obi".to_string()
        )));
        assert!(submission.fields.contains(&("_captcha".to_string(), "false".to_string())));
        assert_eq!(submission.fields[0].0, "fullName");

        assert_eq!(
            block_on(flow.submit(&relay, &mut session)),
            Err(ApplyError::AlreadySubmitted)
        );
        assert_eq!(relay.calls.get(), 1);
    }

    #[test]
    fn relay_rejection_surfaces_its_message_and_allows_retry() {
        let relay = FakeRelay::replying(422, r#"{"success":"false","message":"Invalid email"}"#);
        let mut session = MemorySessionStore::default();
        let mut flow = with_required_photos(filled_form());

        let result = block_on(flow.submit(&relay, &mut session));
        assert_eq!(result, Err(ApplyError::Relay("Invalid email".to_string())));
        assert_eq!(flow.error(), Some("Submission failed: Invalid email"));
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert_eq!(flow.stage(), ApplyStage::Form);
        assert!(!application_submitted(&session));

        let retry = FakeRelay::replying(200, r#"{"success":true}"#);
        assert_eq!(block_on(flow.submit(&retry, &mut session)), Ok(()));
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn network_failures_return_to_idle() {
        let relay = FakeRelay::offline();
        let mut session = MemorySessionStore::default();
        let mut flow = with_required_photos(filled_form());
        let result = block_on(flow.submit(&relay, &mut session));
        assert_eq!(result, Err(ApplyError::Relay("Failed to fetch".to_string())));
        assert_eq!(flow.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn ok_status_without_success_flag_is_a_failure() {
        for body in ["{}", "not json", r#"{"success":false}"#, r#"{"message":"  "}"#] {
            let response = RelayResponse {
                status: 200,
                body: body.to_string(),
            };
            assert_eq!(
                interpret_relay_response(&response),
                Err(ApplyError::Relay(GENERIC_RELAY_FAILURE.to_string())),
                "body {body:?}"
            );
        }
    }

    #[test]
    fn submitting_twice_while_in_flight_is_rejected() {
        let mut flow = with_required_photos(filled_form());
        assert!(flow.begin_submission().is_ok());
        assert_eq!(flow.status(), SubmissionStatus::Submitting);
        assert_eq!(flow.begin_submission().err(), Some(ApplyError::AlreadySubmitting));
    }

    #[test]
    fn remount_after_leaving_apply_shows_the_form_again() {
        let mut controller = NavigationController::new(
            MemoryHistory::new("/apply"),
            MemorySessionStore::default(),
            AddressMode::Path,
        );
        let relay = FakeRelay::replying(200, r#"{"success":"true"}"#);
        let mut flow = with_required_photos(filled_form());
        assert_eq!(block_on(flow.submit(&relay, controller.session_mut())), Ok(()));

        let remounted = ApplyFlow::<FakeFile>::mount(controller.session());
        assert_eq!(remounted.stage(), ApplyStage::Success);

        let _ = controller.navigate_to(ViewId::Models, NavigateOptions::default());
        let _ = controller.navigate_to(ViewId::Apply, NavigateOptions::default());
        let remounted = ApplyFlow::<FakeFile>::mount(controller.session());
        assert_eq!(remounted.stage(), ApplyStage::Terms);
        assert_eq!(remounted.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn late_relay_result_leaves_a_remounted_flow_alone() {
        let mut controller = NavigationController::new(
            MemoryHistory::new("/apply"),
            MemorySessionStore::default(),
            AddressMode::Path,
        );
        let mut leaving = with_required_photos(filled_form());
        assert!(leaving.begin_submission().is_ok());

        let _ = controller.navigate_to(ViewId::Home, NavigateOptions::default());
        let _ = controller.navigate_to(ViewId::Apply, NavigateOptions::default());
        let mut fresh = ApplyFlow::<FakeFile>::mount(controller.session());
        assert_eq!(fresh.stage(), ApplyStage::Terms);

        let late = Ok(RelayResponse {
            status: 200,
            body: r#"{"success":"true"}"#.to_string(),
        });
        assert_eq!(
            fresh.complete_submission(late, controller.session_mut()),
            Err(ApplyError::NotSubmitting)
        );
        assert_eq!(fresh.stage(), ApplyStage::Terms);
        assert_eq!(fresh.status(), SubmissionStatus::Idle);
        assert_eq!(fresh.error(), None);
        assert!(!application_submitted(controller.session()));
    }
}
