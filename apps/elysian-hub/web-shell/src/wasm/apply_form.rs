use elysian_app_state::MemorySessionStore;
use elysian_app_state::apply::APPLY_CLOSE_TARGET;

use super::*;

const TERMS_SECTIONS: [(&str, &str); 6] = [
    (
        "1. Introduction and Scope",
        "These terms govern the process of submitting an application for professional \
         representation. Submitting an application does not create a representation agreement \
         and does not guarantee an interview or eventual representation.",
    ),
    (
        "2. Applicant Obligations and Status",
        "You confirm that you are legally eligible to enter into a representation agreement and \
         that the information you provide is true, accurate, current, and complete.",
    ),
    (
        "3. Financial Obligations (Processing Fee)",
        "A one-time, non-refundable processing fee is required only upon the signing of a formal \
         Representation Agreement.",
    ),
    (
        "4. Application Material and Use of Likeness",
        "You keep ownership of your photographs and videos. You grant the agency a non-exclusive, \
         royalty-free license to review them for the purpose of evaluating your application.",
    ),
    (
        "5. Governing Law and Jurisdiction",
        "Matters related to your application are governed by the laws of the division you apply \
         to. Disputes are first attempted through good-faith negotiation and mediation.",
    ),
    (
        "6. General Provisions",
        "Both parties keep non-public information from the application process confidential. \
         The agency may amend these terms at any time.",
    ),
];

pub(super) fn render_apply_view(document: &web_sys::Document, section: &HtmlElement) -> Result<(), String> {
    let heading = create_element(document, "header", "elysian-view-heading")?;
    append_text(document, &heading, "h1", "", "Become an Elysian")?;
    append_text(
        document,
        &heading,
        "p",
        "",
        "Join the next generation of talent. Start your application below.",
    )?;
    append(section, &heading)?;

    let panel = create_element(document, "div", "elysian-apply-panel")?;
    let stage = APPLY_FLOW.with(|flow| flow.borrow().stage());
    match stage {
        ApplyStage::Terms => render_terms(document, &panel)?,
        ApplyStage::Form => render_form(document, &panel)?,
        ApplyStage::Success => render_success(document, &panel)?,
    }
    append(section, &panel)
}

fn append_close_button(document: &web_sys::Document, panel: &HtmlElement) -> Result<(), String> {
    let close = append_button(document, panel, "elysian-apply-close", "\u{d7}", &VIEW_LISTENERS, || {
        navigate_to_view(APPLY_CLOSE_TARGET, NavigateOptions::default());
    })?;
    set_attribute(&close, "aria-label", "Close application")
}

fn render_terms(document: &web_sys::Document, panel: &HtmlElement) -> Result<(), String> {
    append_close_button(document, panel)?;
    append_text(document, panel, "h2", "", "Application Terms & Conditions")?;
    let body = create_element(document, "div", "elysian-terms")?;
    set_styles(&body, &[("max-height", "384px"), ("overflow-y", "auto")])?;
    for (title, text) in TERMS_SECTIONS {
        append_text(document, &body, "h3", "", title)?;
        append_text(document, &body, "p", "", text)?;
    }
    append(panel, &body)?;

    let accepted = APPLY_FLOW.with(|flow| flow.borrow().terms_accepted());
    let agree = create_element(document, "div", "elysian-terms-agree")?;
    let checkbox = create_element(document, "input", "")?;
    checkbox.set_id("terms-agree");
    set_attribute(&checkbox, "type", "checkbox")?;
    if accepted {
        set_attribute(&checkbox, "checked", "")?;
    }
    append(&agree, &checkbox)?;
    let label = append_text(
        document,
        &agree,
        "label",
        "",
        "I have read and agree to the Terms & Conditions.",
    )?;
    set_attribute(&label, "for", "terms-agree")?;
    append(panel, &agree)?;

    let proceed = append_button(
        document,
        panel,
        "elysian-cta",
        "Continue to Application",
        &VIEW_LISTENERS,
        || {
            let result = APPLY_FLOW.with(|flow| flow.borrow_mut().continue_to_form());
            match result {
                Ok(()) => request_render(),
                Err(error) => debug!(%error, "terms not accepted yet"),
            }
        },
    )?;
    set_button_disabled(&proceed, !accepted);

    listen_into(&VIEW_LISTENERS, &checkbox, "change", move |event| {
        let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let checked = input.checked();
        APPLY_FLOW.with(|flow| flow.borrow_mut().set_terms_accepted(checked));
        set_button_disabled(&proceed, !checked);
    })
}

fn set_button_disabled(button: &HtmlElement, disabled: bool) {
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    }
}

fn render_form(document: &web_sys::Document, panel: &HtmlElement) -> Result<(), String> {
    append_close_button(document, panel)?;
    append_text(document, panel, "h2", "", "Your Details")?;

    let fields = create_element(document, "div", "elysian-apply-fields")?;
    for field in ApplicantField::ALL {
        let wrapper = create_element(document, "div", "elysian-apply-field")?;
        let label = append_text(document, &wrapper, "label", "", field.label())?;
        set_attribute(&label, "for", field.form_name())?;
        let input = create_element(document, "input", "elysian-input")?;
        input.set_id(field.form_name());
        set_attribute(&input, "name", field.form_name())?;
        set_attribute(&input, "type", field.input_type())?;
        set_attribute(&input, "required", "")?;
        let current = APPLY_FLOW.with(|flow| flow.borrow().field(field).to_string());
        set_attribute(&input, "value", &current)?;
        listen_into(&VIEW_LISTENERS, &input, "input", move |event| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            APPLY_FLOW.with(|flow| flow.borrow_mut().set_field(field, input.value()));
        })?;
        append(&wrapper, &input)?;
        append(&fields, &wrapper)?;
    }
    append(panel, &fields)?;

    append_text(document, panel, "h3", "", "Upload Photos")?;
    append_text(
        document,
        panel,
        "p",
        "elysian-apply-hint",
        "Please provide clear, recent photos. No filters, sunglasses, or hats.",
    )?;
    let photos = create_element(document, "div", "elysian-apply-photos")?;
    for slot in AttachmentSlot::ALL.into_iter().filter(|slot| slot.is_required()) {
        append_file_input(document, &photos, slot)?;
    }
    append(panel, &photos)?;

    append_text(document, panel, "h3", "", "Upload Optional Video")?;
    append_text(
        document,
        panel,
        "p",
        "elysian-apply-hint",
        "Showcase your personality or skills (e.g., runway walk, short monologue).",
    )?;
    for slot in AttachmentSlot::ALL.into_iter().filter(|slot| !slot.is_required()) {
        append_file_input(document, panel, slot)?;
    }

    let (submitting, error) = APPLY_FLOW.with(|flow| {
        let flow = flow.borrow();
        (
            flow.status() == SubmissionStatus::Submitting,
            flow.error().map(str::to_string),
        )
    });
    let label = if submitting { "Submitting..." } else { "Submit Application" };
    let submit = append_button(document, panel, "elysian-cta", label, &VIEW_LISTENERS, start_submission)?;
    submit.set_id(APPLY_SUBMIT_ID);
    set_button_disabled(&submit, submitting);

    let error_line = append_text(document, panel, "p", "elysian-apply-error", error.as_deref().unwrap_or(""))?;
    error_line.set_id(APPLY_ERROR_ID);
    set_attribute(&error_line, "role", "alert")?;
    Ok(())
}

fn append_file_input(
    document: &web_sys::Document,
    parent: &HtmlElement,
    slot: AttachmentSlot,
) -> Result<(), String> {
    let wrapper = create_element(document, "div", "elysian-file-input")?;
    let current = APPLY_FLOW.with(|flow| flow.borrow().attachment(slot).map(web_sys::File::name));
    let label = append_text(
        document,
        &wrapper,
        "label",
        "elysian-file-label",
        current.as_deref().unwrap_or(slot.label()),
    )?;
    set_attribute(&label, "for", slot.form_name())?;

    let input = create_element(document, "input", "")?;
    input.set_id(slot.form_name());
    set_attribute(&input, "type", "file")?;
    set_attribute(&input, "name", slot.form_name())?;
    set_attribute(&input, "accept", slot.accept())?;
    if slot.is_required() {
        set_attribute(&input, "required", "")?;
    }
    set_styles(&input, &[("display", "none")])?;
    listen_into(&VIEW_LISTENERS, &input, "change", move |event| {
        let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        let text = file.as_ref().map_or_else(|| slot.label().to_string(), web_sys::File::name);
        APPLY_FLOW.with(|flow| {
            let mut flow = flow.borrow_mut();
            match file {
                Some(file) => flow.attach(slot, file),
                None => flow.detach(slot),
            }
        });
        label.set_text_content(Some(&text));
    })?;
    append(&wrapper, &input)?;
    append(parent, &wrapper)
}

fn render_success(document: &web_sys::Document, panel: &HtmlElement) -> Result<(), String> {
    append_text(document, panel, "div", "elysian-apply-success-mark", "\u{2713}")?;
    append_text(document, panel, "h2", "", "Application Submitted!")?;
    append_text(
        document,
        panel,
        "p",
        "",
        "Thank you for your interest in Elysian Talent Hub. Our team will review your \
         application and contact you if you are a potential fit.",
    )?;
    append_button(document, panel, "elysian-cta secondary", "Back to Home", &VIEW_LISTENERS, || {
        navigate_to_view(ViewId::Home, NavigateOptions::default());
    })?;
    Ok(())
}

fn show_submission_state(submitting: bool, error: Option<&str>) {
    if let Some(button) = element_by_id::<HtmlButtonElement>(APPLY_SUBMIT_ID) {
        button.set_disabled(submitting);
        button.set_text_content(Some(if submitting {
            "Submitting..."
        } else {
            "Submit Application"
        }));
    }
    if let Some(line) = element_by_id::<HtmlElement>(APPLY_ERROR_ID) {
        line.set_text_content(Some(error.unwrap_or("")));
    }
}

/// Validates, then posts the application in the background. The flow is not
/// borrowed across the request, so a second press sees `Submitting` and is
/// ignored. A result that arrives after the view was remounted is dropped.
fn start_submission() {
    let submission = APPLY_FLOW.with(|flow| flow.borrow_mut().begin_submission());
    let submission = match submission {
        Ok(submission) => submission,
        Err(ApplyError::AlreadySubmitting) => return,
        Err(error) => {
            debug!(%error, "application not submittable");
            show_submission_state(false, Some(&error.to_string()));
            return;
        }
    };
    show_submission_state(true, None);

    let endpoint = CONFIG.with(|config| config.borrow().relay_endpoint.clone());
    let mounted = APPLY_MOUNT_GENERATION.with(Cell::get);
    spawn_local(async move {
        let relay = GlooRelay::new(endpoint);
        let outcome = relay.submit(submission).await;
        if APPLY_MOUNT_GENERATION.with(Cell::get) != mounted {
            debug!("apply view was remounted while the relay request was in flight");
            return;
        }
        let result = NAVIGATION.with(|slot| {
            let mut slot = slot.borrow_mut();
            APPLY_FLOW.with(|flow| {
                let mut flow = flow.borrow_mut();
                match slot.as_mut() {
                    Some(controller) => flow.complete_submission(outcome, controller.session_mut()),
                    None => flow.complete_submission(outcome, &mut MemorySessionStore::default()),
                }
            })
        });
        record_submission(&result);
        match result {
            Ok(()) => {
                play_sound_at(UiSound::Success, SUCCESS_SOUND_VOLUME);
                request_render();
            }
            Err(error) => show_submission_state(false, Some(&error.to_string())),
        }
    });
}
