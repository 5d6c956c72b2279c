use super::*;

/// Finds tour anchors through the `data-tour-id` attributes the header puts
/// on its navigation entries.
pub(super) struct DomAnchorLocator {
    document: web_sys::Document,
}

impl AnchorLocator for DomAnchorLocator {
    fn locate(&self, anchor: TourAnchor) -> Option<Rect> {
        let element = self.document.query_selector(&anchor.selector()).ok()??;
        let rect = element.get_bounding_client_rect();
        Some(Rect::new(rect.top(), rect.left(), rect.width(), rect.height()))
    }
}

fn current_viewport(document: &web_sys::Document) -> Option<Viewport> {
    let root = document.document_element()?;
    Some(Viewport::new(
        f64::from(root.client_width()),
        f64::from(root.client_height()),
    ))
}

pub(super) fn start_tour() {
    TOUR.with(|tour| tour.borrow_mut().start());
    DIAGNOSTICS.with(|state| state.borrow_mut().tour_runs += 1);
    play_sound(UiSound::Open);
    request_tour_render();
}

/// `Next`, or `Finish` on the last step.
pub(super) fn advance_tour() {
    TOUR.with(|tour| {
        let mut tour = tour.borrow_mut();
        if tour.is_last_step() {
            tour.finish();
        } else {
            tour.next();
        }
    });
    request_tour_render();
}

pub(super) fn request_tour_render() {
    defer(render_tour_overlay);
}

pub(super) fn render_tour_overlay() {
    if let Err(error) = try_render_tour_overlay() {
        warn!(%error, "tour overlay render failed");
    }
}

fn try_render_tour_overlay() -> Result<(), String> {
    let document = document()?;
    release_listeners(&TOUR_LISTENERS);
    if let Some(existing) = document.get_element_by_id(TOUR_ROOT_ID) {
        existing.remove();
    }

    let locator = DomAnchorLocator {
        document: document.clone(),
    };
    let viewport = current_viewport(&document).ok_or_else(|| "viewport is unavailable".to_string())?;
    let layout = TOUR.with(|tour| tour.borrow_mut().refresh(&locator, viewport));
    let Some(layout) = layout else {
        TOUR_RESIZE_LISTENER.with(|slot| slot.borrow_mut().take());
        return Ok(());
    };
    let (state, step, step_count, is_last) = TOUR.with(|tour| {
        let tour = tour.borrow();
        (tour.state(), tour.current_step(), tour.steps().len(), tour.is_last_step())
    });
    let Some(step) = step else {
        return Ok(());
    };

    let body = document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())?;
    let root = create_element(&document, "div", "elysian-tour")?;
    root.set_id(TOUR_ROOT_ID);
    set_attribute(&root, "aria-live", "polite")?;
    set_styles(&root, &[("position", "fixed"), ("inset", "0"), ("z-index", "100")])?;

    let transition_ms = layout.transition_ms;
    let backdrop = create_element(&document, "div", "elysian-tour-backdrop")?;
    let clip_path = layout
        .spotlight
        .map_or_else(|| "none".to_string(), |spotlight| spotlight.clip_path());
    set_styles(
        &backdrop,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("background", "rgba(0, 0, 0, 0.5)"),
            ("backdrop-filter", "blur(4px)"),
            ("clip-path", clip_path.as_str()),
            ("transition", format!("clip-path {transition_ms}ms ease-in-out").as_str()),
        ],
    )?;
    append(&root, &backdrop)?;

    let tooltip = create_element(&document, "div", "elysian-tour-tooltip")?;
    let tooltip_width = TOUR.with(|tour| tour.borrow().config().tooltip_width);
    match layout.placement {
        TooltipPlacement::ViewportCenter => set_styles(
            &tooltip,
            &[
                ("position", "absolute"),
                ("top", "50%"),
                ("left", "50%"),
                ("width", format!("{tooltip_width}px").as_str()),
                ("transform", "translate(-50%, -50%)"),
            ],
        )?,
        TooltipPlacement::Anchored { top, left, align } => set_styles(
            &tooltip,
            &[
                ("position", "absolute"),
                ("top", format!("{top}px").as_str()),
                ("left", format!("{left}px").as_str()),
                ("width", format!("{tooltip_width}px").as_str()),
                ("transform", align.css_transform()),
                (
                    "transition",
                    format!("top {transition_ms}ms ease-in-out, left {transition_ms}ms ease-in-out").as_str(),
                ),
            ],
        )?,
        TooltipPlacement::PinnedBottom { inset } => {
            let inset = format!("{inset}px");
            set_styles(
                &tooltip,
                &[
                    ("position", "fixed"),
                    ("bottom", inset.as_str()),
                    ("left", inset.as_str()),
                    ("right", inset.as_str()),
                ],
            )?;
        }
    }
    set_styles(&tooltip, &[("max-height", "80vh"), ("overflow-y", "auto")])?;

    append_text(&document, &tooltip, "h3", "elysian-tour-title", step.title)?;
    append_text(&document, &tooltip, "p", "elysian-tour-content", step.content)?;

    let controls = create_element(&document, "div", "elysian-tour-controls")?;
    append_button(&document, &controls, "elysian-tour-skip", "Skip", &TOUR_LISTENERS, || {
        TOUR.with(|tour| tour.borrow_mut().skip());
        play_sound(UiSound::Close);
        request_tour_render();
    })?;
    if state.step_index > 0 {
        append_button(&document, &controls, "elysian-tour-prev", "Prev", &TOUR_LISTENERS, || {
            TOUR.with(|tour| tour.borrow_mut().prev());
            request_tour_render();
        })?;
    }
    let next_label = if is_last { "Finish" } else { "Next" };
    append_button(&document, &controls, "elysian-tour-next", next_label, &TOUR_LISTENERS, advance_tour)?;
    append(&tooltip, &controls)?;

    let dots = create_element(&document, "div", "elysian-tour-dots")?;
    for index in 0..step_count {
        let class = if index == state.step_index {
            "elysian-tour-dot active"
        } else {
            "elysian-tour-dot"
        };
        append(&dots, &create_element(&document, "div", class)?)?;
    }
    append(&tooltip, &dots)?;
    append(&root, &tooltip)?;
    append(&body, &root)?;

    ensure_tour_resize_listener()?;
    debug!(step = state.step_index, anchor = ?step.anchor, "tour overlay rendered");
    Ok(())
}

/// Re-measures the anchor while the tour is up. Dropped when the tour ends.
fn ensure_tour_resize_listener() -> Result<(), String> {
    if TOUR_RESIZE_LISTENER.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let guard = EventListenerGuard::new(&window, "resize", |_event| request_tour_render())?;
    TOUR_RESIZE_LISTENER.with(|slot| *slot.borrow_mut() = Some(guard));
    Ok(())
}
