use super::*;

pub(super) fn document() -> Result<web_sys::Document, String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    window
        .document()
        .ok_or_else(|| "document is unavailable".to_string())
}

pub(super) fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document().ok()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub(super) fn create_element(
    document: &web_sys::Document,
    tag: &str,
    class: &str,
) -> Result<HtmlElement, String> {
    let element = document
        .create_element(tag)
        .map_err(|_| format!("failed to create {tag} element"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("{tag} element is not HtmlElement"))?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Creates a child with text content and appends it to `parent`.
pub(super) fn append_text(
    document: &web_sys::Document,
    parent: &HtmlElement,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<HtmlElement, String> {
    let element = create_element(document, tag, class)?;
    element.set_text_content(Some(text));
    append(parent, &element)?;
    Ok(element)
}

pub(super) fn append(parent: &HtmlElement, child: &HtmlElement) -> Result<(), String> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|_| "failed to append element".to_string())
}

pub(super) fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), String> {
    let style = element.style();
    for (property, value) in styles {
        style
            .set_property(property, value)
            .map_err(|_| format!("failed to set {property} on element"))?;
    }
    Ok(())
}

pub(super) fn set_attribute(element: &HtmlElement, name: &str, value: &str) -> Result<(), String> {
    element
        .set_attribute(name, value)
        .map_err(|_| format!("failed to set {name} attribute"))
}

pub(super) fn clear_children(element: &HtmlElement) {
    element.set_text_content(None);
}

/// Button that plays the hover sound and runs `on_click` after the click
/// sound. Its listeners land in `slot`.
pub(super) fn append_button(
    document: &web_sys::Document,
    parent: &HtmlElement,
    class: &str,
    label: &str,
    slot: &'static std::thread::LocalKey<RefCell<Vec<EventListenerGuard>>>,
    mut on_click: impl FnMut() + 'static,
) -> Result<HtmlElement, String> {
    let button = append_text(document, parent, "button", class, label)?;
    set_attribute(&button, "type", "button")?;
    listen_into(slot, &button, "mouseenter", |_event| play_sound(UiSound::Hover))?;
    listen_into(slot, &button, "click", move |_event| {
        play_sound(UiSound::Click);
        on_click();
    })?;
    Ok(button)
}

pub(super) fn js_error_message(error: &JsValue) -> String {
    if let Some(message) = error.as_string() {
        return message;
    }
    error
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| "unknown browser error".to_string())
}
