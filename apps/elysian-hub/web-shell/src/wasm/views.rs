use super::*;

pub(super) fn request_render() {
    defer(render_current_view);
}

/// Rebuilds header and main content for the current navigation state.
pub(super) fn render_current_view() {
    let state = navigation_state();
    let entering = RENDERED_VIEW.with(|slot| slot.replace(Some(state.active_view))) != Some(state.active_view);
    if entering {
        mount_view_state(state.active_view);
    }
    let generation = RENDER_GENERATION.with(|counter| {
        let next = counter.get().wrapping_add(1);
        counter.set(next);
        next
    });

    if let Err(error) = render_header(state.active_view) {
        warn!(%error, "header render failed");
    }
    if let Err(error) = render_main(state) {
        warn!(%error, view = state.active_view.as_str(), "view render failed");
    }
    if let Some(item_id) = state.deep_link_target_id {
        schedule_deep_link_scroll(item_id, generation);
    }
    sync_route_diagnostics();
    sync_back_to_top_visibility();
    if TOUR.with(|tour| tour.borrow().is_active()) {
        render_tour_overlay();
    }
}

/// Fresh per-view state, the way a newly mounted view starts.
fn mount_view_state(view: ViewId) {
    match view {
        ViewId::Models => MODEL_FILTER.with(|filter| filter.borrow_mut().reset()),
        ViewId::Apply => {
            let flow = NAVIGATION.with(|slot| {
                slot.borrow()
                    .as_ref()
                    .map(|controller| ApplyFlow::mount(controller.session()))
            });
            APPLY_FLOW.with(|slot| *slot.borrow_mut() = flow.unwrap_or_default());
            APPLY_MOUNT_GENERATION.with(|generation| generation.set(generation.get().wrapping_add(1)));
        }
        _ => {}
    }
}

fn schedule_deep_link_scroll(item_id: u32, generation: u64) {
    let delay_ms = CONFIG.with(|config| config.borrow().deep_link_scroll_delay_ms);
    spawn_local(async move {
        sleep(Duration::from_millis(u64::from(delay_ms))).await;
        if RENDER_GENERATION.with(Cell::get) != generation {
            debug!(item_id, "deep link superseded by a newer render");
            return;
        }
        match element_by_id::<HtmlElement>(&model_anchor_id(item_id)) {
            Some(card) => {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::Center);
                card.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => debug!(item_id, "deep link target is not on the page"),
        }
        consume_deep_link();
    });
}

fn render_header(active_view: ViewId) -> Result<(), String> {
    let document = document()?;
    let header = element_by_id::<HtmlElement>(SHELL_HEADER_ID)
        .ok_or_else(|| "header element is missing".to_string())?;
    close_music_menu();
    release_listeners(&HEADER_LISTENERS);
    clear_children(&header);

    append_button(&document, &header, "elysian-brand", "ELYSIAN", &HEADER_LISTENERS, || {
        navigate_to_view(ViewId::Home, NavigateOptions::default());
    })?;

    let links = create_element(&document, "div", "elysian-nav-links")?;
    for link in NAV_LINKS {
        match link.target {
            NavTarget::View(view) => {
                let class = match (link.is_primary, view == active_view) {
                    (true, true) => "elysian-nav-primary active",
                    (true, false) => "elysian-nav-primary",
                    (false, true) => "elysian-nav-link active",
                    (false, false) => "elysian-nav-link",
                };
                let button = append_button(&document, &links, class, link.name, &HEADER_LISTENERS, move || {
                    navigate_to_view(view, NavigateOptions::default());
                })?;
                if let Some(tour_id) = link.tour_anchor.and_then(TourAnchor::tour_id) {
                    set_attribute(&button, "data-tour-id", tour_id)?;
                }
            }
            NavTarget::Group(children) => {
                let menu = create_element(&document, "div", "elysian-nav-group")?;
                menu.set_id(MUSIC_MENU_ID);
                if let Some(tour_id) = link.tour_anchor.and_then(TourAnchor::tour_id) {
                    set_attribute(&menu, "data-tour-id", tour_id)?;
                }
                let group_active = children.iter().any(|child| child.view == active_view);
                let class = if group_active {
                    "elysian-nav-link active"
                } else {
                    "elysian-nav-link"
                };
                let toggle = create_element(&document, "button", class)?;
                set_attribute(&toggle, "type", "button")?;
                toggle.set_text_content(Some(link.name));
                append(&menu, &toggle)?;
                listen_into(&HEADER_LISTENERS, &toggle, "mouseenter", |_event| play_sound(UiSound::Hover))?;
                listen_into(&HEADER_LISTENERS, &toggle, "click", |_event| toggle_music_menu())?;

                let list = create_element(&document, "div", "elysian-nav-menu")?;
                list.set_id(MUSIC_MENU_LIST_ID);
                set_attribute(&list, "role", "menu")?;
                set_styles(&list, &[("display", "none")])?;
                for child in children {
                    let class = if child.view == active_view {
                        "elysian-nav-link active"
                    } else {
                        "elysian-nav-link"
                    };
                    let view = child.view;
                    append_button(&document, &list, class, child.name, &HEADER_LISTENERS, move || {
                        defer(close_music_menu);
                        navigate_to_view(view, NavigateOptions::default());
                    })?;
                }
                append(&menu, &list)?;
                append(&links, &menu)?;
            }
        }
    }
    append(&header, &links)?;
    render_mobile_menu(&document, &header, active_view)
}

/// Collapsed navigation for narrow screens. The stylesheet hides the
/// hamburger at desktop widths and the desktop links below them.
fn render_mobile_menu(
    document: &web_sys::Document,
    header: &HtmlElement,
    active_view: ViewId,
) -> Result<(), String> {
    let open = MOBILE_MENU_OPEN.with(Cell::get);
    let toggle = create_element(document, "button", "elysian-nav-hamburger")?;
    set_attribute(&toggle, "type", "button")?;
    set_attribute(&toggle, "aria-controls", MOBILE_MENU_ID)?;
    set_attribute(&toggle, "aria-expanded", if open { "true" } else { "false" })?;
    set_attribute(&toggle, "aria-label", if open { "Close menu" } else { "Open menu" })?;
    toggle.set_text_content(Some(if open { "\u{2715}" } else { "\u{2630}" }));
    listen_into(&HEADER_LISTENERS, &toggle, "click", move |_event| {
        play_sound(if open { UiSound::Close } else { UiSound::Open });
        MOBILE_MENU_OPEN.with(|flag| flag.set(!open));
        request_render();
    })?;
    append(header, &toggle)?;
    if !open {
        return Ok(());
    }

    let menu = create_element(document, "div", "elysian-mobile-menu")?;
    menu.set_id(MOBILE_MENU_ID);
    for entry in mobile_menu_entries() {
        match entry {
            MobileMenuEntry::Heading(name) => {
                append_text(document, &menu, "span", "elysian-mobile-heading", name)?;
            }
            MobileMenuEntry::Link {
                name,
                view,
                is_primary,
                nested,
            } => {
                let mut class = String::from("elysian-mobile-link");
                if is_primary {
                    class.push_str(" primary");
                }
                if nested {
                    class.push_str(" nested");
                }
                if view == active_view {
                    class.push_str(" active");
                }
                append_button(document, &menu, &class, name, &HEADER_LISTENERS, move || {
                    MOBILE_MENU_OPEN.with(|flag| flag.set(false));
                    navigate_to_view(view, NavigateOptions::default());
                    request_render();
                })?;
            }
        }
    }
    append(header, &menu)
}

fn toggle_music_menu() {
    if MUSIC_MENU_OPEN.with(Cell::get) {
        play_sound(UiSound::Close);
        defer(close_music_menu);
    } else {
        play_sound(UiSound::Open);
        open_music_menu();
    }
}

fn open_music_menu() {
    let Some(list) = element_by_id::<HtmlElement>(MUSIC_MENU_LIST_ID) else {
        return;
    };
    let _ = list.style().set_property("display", "block");
    MUSIC_MENU_OPEN.with(|open| open.set(true));

    let Ok(document) = document() else {
        return;
    };
    let guard = EventListenerGuard::new(&document, "mousedown", |event| {
        let Some(menu) = element_by_id::<web_sys::Node>(MUSIC_MENU_ID) else {
            return;
        };
        let target = event.target().and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        if !menu.contains(target.as_ref()) {
            defer(close_music_menu);
        }
    });
    match guard {
        Ok(guard) => MUSIC_MENU_OUTSIDE_LISTENER.with(|slot| *slot.borrow_mut() = Some(guard)),
        Err(error) => warn!(%error, "music menu outside-press listener failed"),
    }
}

/// Hides the dropdown and drops its outside-press subscription.
fn close_music_menu() {
    MUSIC_MENU_OPEN.with(|open| open.set(false));
    let released = MUSIC_MENU_OUTSIDE_LISTENER.with(|slot| slot.borrow_mut().take());
    drop(released);
    if let Some(list) = element_by_id::<HtmlElement>(MUSIC_MENU_LIST_ID) {
        let _ = list.style().set_property("display", "none");
    }
}

fn render_main(state: NavigationState) -> Result<(), String> {
    let document = document()?;
    let main = element_by_id::<HtmlElement>(SHELL_MAIN_ID)
        .ok_or_else(|| "main element is missing".to_string())?;
    release_listeners(&MODEL_GRID_LISTENERS);
    release_listeners(&VIEW_LISTENERS);
    clear_children(&main);

    let section = create_element(&document, "section", "elysian-view")?;
    set_attribute(&section, "data-view", state.active_view.as_str())?;
    match state.active_view {
        ViewId::Home => render_home(&document, &section)?,
        ViewId::Models => render_models(&document, &section)?,
        ViewId::ModelingAgencies => render_agencies(
            &document,
            &section,
            "Modeling Agencies",
            "Partnering with the most influential names in fashion.",
            AgencyKind::Modeling,
        )?,
        ViewId::MovieAgencies => {
            render_agencies(
                &document,
                &section,
                "Movie & Casting Agencies",
                "The creative forces behind film and television.",
                AgencyKind::Movie,
            )?;
            render_casting_calls(&document, &section)?;
        }
        ViewId::MusicVideoCasting => render_music_video_casting(&document, &section)?,
        ViewId::MusicPromoting => render_music_promoting(&document, &section)?,
        ViewId::Apply => render_apply_view(&document, &section)?,
    }
    append(&main, &section)?;
    Ok(())
}

fn render_heading(
    document: &web_sys::Document,
    parent: &HtmlElement,
    title: &str,
    subtitle: &str,
) -> Result<(), String> {
    let heading = create_element(document, "header", "elysian-view-heading")?;
    append_text(document, &heading, "h1", "", title)?;
    append_text(document, &heading, "p", "", subtitle)?;
    append(parent, &heading)
}

fn render_home(document: &web_sys::Document, section: &HtmlElement) -> Result<(), String> {
    render_tag_marquee(document, section)?;

    let hero = create_element(document, "div", "elysian-hero")?;
    set_styles(
        &hero,
        &[(
            "background-image",
            "url(https://picsum.photos/seed/hero-model/1200/900)",
        )],
    )?;
    append_text(document, &hero, "h1", "elysian-hero-title", "Elysian: The Apex of Talent")?;
    append_text(
        document,
        &hero,
        "p",
        "elysian-hero-tagline",
        "The premier digital nexus where creativity, talent, and opportunity converge.",
    )?;
    append_button(document, &hero, "elysian-cta", "Explore the Hub", &VIEW_LISTENERS, start_tour)?;
    append(section, &hero)?;

    let discover = create_element(document, "div", "elysian-discover")?;
    render_heading(
        document,
        &discover,
        "Discover Our World",
        "A comprehensive platform designed for every facet of the entertainment industry.",
    )?;
    let cards = create_element(document, "div", "elysian-discover-cards")?;
    for card in DISCOVER_CARDS {
        let tile = create_element(document, "article", "elysian-discover-card")?;
        let icon = match card.icon {
            DiscoverIcon::Person => "\u{1f464}",
            DiscoverIcon::Camera => "\u{1f3ac}",
            DiscoverIcon::Note => "\u{1f3b5}",
        };
        let mark = append_text(document, &tile, "span", "elysian-discover-icon", icon)?;
        set_attribute(&mark, "aria-hidden", "true")?;
        append_text(document, &tile, "h3", "", card.title)?;
        append_text(document, &tile, "p", "", card.description)?;
        append(&cards, &tile)?;
    }
    append(&discover, &cards)?;
    append(section, &discover)?;

    let featured = create_element(document, "div", "elysian-featured")?;
    render_heading(
        document,
        &featured,
        "Featured Models",
        "A glimpse of the exceptional talent available on our platform.",
    )?;
    let strip = create_element(document, "div", "elysian-featured-strip")?;
    for model in featured_models() {
        let card = create_element(document, "button", "elysian-featured-card")?;
        set_attribute(&card, "type", "button")?;
        set_attribute(&card, "aria-label", &format!("View {}", model.name))?;
        append_image(document, &card, model.image_url, model.name)?;
        append_text(document, &card, "span", "", model.name)?;
        let model_id = model.id;
        listen_into(&VIEW_LISTENERS, &card, "click", move |_event| {
            play_sound(UiSound::Click);
            navigate_to_view(ViewId::Models, NavigateOptions::item(model_id));
        })?;
        append(&strip, &card)?;
    }
    append(&featured, &strip)?;
    append(section, &featured)?;

    render_latest(document, section)
}

/// Tags scroll as one strip holding two copies, so translating it by half
/// its width loops without a seam.
fn render_tag_marquee(document: &web_sys::Document, section: &HtmlElement) -> Result<(), String> {
    let marquee = create_element(document, "div", "elysian-tag-marquee")?;
    set_attribute(&marquee, "aria-hidden", "true")?;
    let track = create_element(document, "div", "elysian-tag-track")?;
    for tag in HOME_TAGS.iter().chain(HOME_TAGS.iter()) {
        append_text(document, &track, "span", "elysian-tag", tag)?;
    }
    append(&marquee, &track)?;
    append(section, &marquee)
}

fn render_latest(document: &web_sys::Document, section: &HtmlElement) -> Result<(), String> {
    let latest = create_element(document, "div", "elysian-latest")?;
    render_heading(
        document,
        &latest,
        "The Latest",
        "Fresh faces, new campaigns, and behind-the-scenes moments from the Elysian world.",
    )?;
    let grid = create_element(document, "div", "elysian-latest-grid")?;
    for media in LATEST_MEDIA {
        let class = if media.in_color {
            "elysian-latest-item"
        } else {
            "elysian-latest-item grayscale"
        };
        let item = create_element(document, "figure", class)?;
        append_image(document, &item, media.src, media.caption)?;
        if media.kind == MediaKind::Gif {
            append_text(document, &item, "span", "elysian-latest-badge", "GIF")?;
        }
        append_text(document, &item, "figcaption", "elysian-latest-caption", media.caption)?;
        append(&grid, &item)?;
    }
    append(&latest, &grid)?;
    append(section, &latest)
}

fn append_image(
    document: &web_sys::Document,
    parent: &HtmlElement,
    src: &str,
    alt: &str,
) -> Result<(), String> {
    let image = create_element(document, "img", "")?;
    set_attribute(&image, "src", src)?;
    set_attribute(&image, "alt", alt)?;
    set_attribute(&image, "loading", "lazy")?;
    append(parent, &image)
}

fn render_models(document: &web_sys::Document, section: &HtmlElement) -> Result<(), String> {
    render_heading(
        document,
        section,
        "Our Talent",
        "Discover the faces shaping the future of fashion and film.",
    )?;
    let filter = MODEL_FILTER.with(|filter| filter.borrow().clone());
    let controls = create_element(document, "div", "elysian-model-filters")?;

    let search = create_element(document, "input", "elysian-search")?;
    set_attribute(&search, "type", "text")?;
    set_attribute(&search, "placeholder", "Search by name or specialty (e.g., Runway)")?;
    set_attribute(&search, "aria-label", "Search models")?;
    set_attribute(&search, "value", &filter.search)?;
    listen_into(&VIEW_LISTENERS, &search, "input", |event| {
        let Some(input) = event_input(&event) else {
            return;
        };
        MODEL_FILTER.with(|filter| filter.borrow_mut().search = input.value());
        render_model_grid_or_warn();
    })?;
    append(&controls, &search)?;

    let heights = HeightRange::ALL
        .iter()
        .map(|range| range.label())
        .collect::<Vec<_>>();
    append_select(document, &controls, "Filter by height", &heights, "All Heights", filter.height.label(), |value| {
        let range = HeightRange::parse(&value).unwrap_or_default();
        MODEL_FILTER.with(|filter| filter.borrow_mut().height = range);
    })?;
    let hair = hair_color_options();
    append_select(document, &controls, "Filter by hair color", &hair, "All Hair Colors", &filter.hair, |value| {
        MODEL_FILTER.with(|filter| filter.borrow_mut().hair = value);
    })?;
    let eyes = eye_color_options();
    append_select(document, &controls, "Filter by eye color", &eyes, "All Eye Colors", &filter.eyes, |value| {
        MODEL_FILTER.with(|filter| filter.borrow_mut().eyes = value);
    })?;
    append_button(document, &controls, "elysian-reset", "Reset", &VIEW_LISTENERS, || {
        MODEL_FILTER.with(|filter| filter.borrow_mut().reset());
        request_render();
    })?;
    append(section, &controls)?;

    let grid = create_element(document, "div", "elysian-model-grid")?;
    grid.set_id(MODEL_GRID_ID);
    append(section, &grid)?;
    render_model_grid(document, &grid)
}

fn event_input(event: &web_sys::Event) -> Option<HtmlInputElement> {
    event.target()?.dyn_into::<HtmlInputElement>().ok()
}

fn append_select(
    document: &web_sys::Document,
    parent: &HtmlElement,
    label: &str,
    options: &[&str],
    all_text: &str,
    selected: &str,
    mut on_change: impl FnMut(String) + 'static,
) -> Result<(), String> {
    let select = create_element(document, "select", "elysian-select")?;
    set_attribute(&select, "aria-label", label)?;
    for option in options {
        let text = if *option == ALL_OPTION { all_text } else { *option };
        let element = append_text(document, &select, "option", "", text)?;
        set_attribute(&element, "value", option)?;
        if *option == selected {
            set_attribute(&element, "selected", "")?;
        }
    }
    listen_into(&VIEW_LISTENERS, &select, "change", move |event| {
        let Some(select) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        play_sound(UiSound::Click);
        on_change(select.value());
        render_model_grid_or_warn();
    })?;
    append(parent, &select)
}

fn render_model_grid_or_warn() {
    let result = document().and_then(|document| {
        let grid = element_by_id::<HtmlElement>(MODEL_GRID_ID)
            .ok_or_else(|| "model grid is missing".to_string())?;
        render_model_grid(&document, &grid)
    });
    if let Err(error) = result {
        warn!(%error, "model grid render failed");
    }
}

fn render_model_grid(document: &web_sys::Document, grid: &HtmlElement) -> Result<(), String> {
    release_listeners(&MODEL_GRID_LISTENERS);
    clear_children(grid);
    let filter = MODEL_FILTER.with(|filter| filter.borrow().clone());
    let mut shown = 0_usize;
    for model in filter.apply(&MODELS) {
        append(grid, &model_card(document, model)?)?;
        shown += 1;
    }
    if shown == 0 {
        append_text(
            document,
            grid,
            "p",
            "elysian-empty",
            "No models found matching your criteria.",
        )?;
    }
    Ok(())
}

fn model_card(document: &web_sys::Document, model: &Model) -> Result<HtmlElement, String> {
    let card = create_element(document, "article", "elysian-model-card")?;
    card.set_id(&model_anchor_id(model.id));
    append_image(document, &card, model.image_url, model.name)?;
    append_text(document, &card, "h3", "", model.name)?;
    let stats = create_element(document, "div", "elysian-model-stats")?;
    append_text(document, &stats, "p", "", &format!("Height: {}", model.stats.height))?;
    append_text(document, &stats, "p", "", &format!("Hair: {}", model.stats.hair))?;
    append_text(document, &stats, "p", "", &format!("Eyes: {}", model.stats.eyes))?;
    append(&card, &stats)?;
    let tags = create_element(document, "div", "elysian-tags")?;
    for specialty in model.specialties {
        append_text(document, &tags, "span", "elysian-tag", specialty)?;
    }
    append(&card, &tags)?;
    listen_into(&MODEL_GRID_LISTENERS, &card, "mouseenter", |_event| play_sound(UiSound::Hover))?;
    Ok(card)
}

fn render_agencies(
    document: &web_sys::Document,
    section: &HtmlElement,
    title: &str,
    subtitle: &str,
    kind: AgencyKind,
) -> Result<(), String> {
    render_heading(document, section, title, subtitle)?;
    let grid = create_element(document, "div", "elysian-agency-grid")?;
    for agency in agencies_of(kind) {
        let card = create_element(document, "article", "elysian-agency-card")?;
        append_image(document, &card, agency.logo_url, agency.name)?;
        append_text(document, &card, "h3", "", agency.name)?;
        append_text(document, &card, "p", "elysian-agency-location", agency.location)?;
        append_text(document, &card, "p", "", agency.specialization)?;
        append(&grid, &card)?;
    }
    append(section, &grid)
}

fn render_casting_calls(document: &web_sys::Document, section: &HtmlElement) -> Result<(), String> {
    append_text(document, section, "h2", "", "Open Casting Calls")?;
    let list = create_element(document, "div", "elysian-casting-list")?;
    for call in &CASTING_CALLS {
        let card = create_element(document, "article", "elysian-casting-card")?;
        append_text(document, &card, "h3", "", call.title)?;
        append_text(document, &card, "p", "elysian-casting-production", call.production)?;
        append_text(document, &card, "p", "elysian-casting-role", call.role)?;
        append_text(document, &card, "p", "", call.description)?;
        append_requirements(document, &card, call.requirements)?;
        append(&list, &card)?;
    }
    append(section, &list)
}

fn append_requirements(
    document: &web_sys::Document,
    card: &HtmlElement,
    requirements: &[&str],
) -> Result<(), String> {
    let list = create_element(document, "ul", "elysian-requirements")?;
    for requirement in requirements {
        append_text(document, &list, "li", "", requirement)?;
    }
    append(card, &list)
}

fn render_music_video_casting(document: &web_sys::Document, section: &HtmlElement) -> Result<(), String> {
    render_heading(
        document,
        section,
        "Music Video Casting",
        "Star in the next big music video.",
    )?;
    let list = create_element(document, "div", "elysian-casting-list")?;
    for call in &MUSIC_VIDEO_CASTING_CALLS {
        let card = create_element(document, "article", "elysian-casting-card")?;
        append_text(document, &card, "h3", "", &format!("{} - \"{}\"", call.artist, call.song_title))?;
        append_text(document, &card, "p", "elysian-casting-role", call.role)?;
        append_text(document, &card, "p", "", call.description)?;
        append_requirements(document, &card, call.requirements)?;
        append_text(document, &card, "p", "elysian-shoot-date", &format!("Shoot date: {}", call.shoot_date))?;
        append_button(document, &card, "elysian-cta", "Apply for Role", &VIEW_LISTENERS, || {
            navigate_to_view(ViewId::Apply, NavigateOptions::default());
        })?;
        append(&list, &card)?;
    }
    append(section, &list)
}

fn render_music_promoting(document: &web_sys::Document, section: &HtmlElement) -> Result<(), String> {
    render_heading(
        document,
        section,
        "Music Promotion",
        "Amplify your sound and reach new audiences.",
    )?;
    let grid = create_element(document, "div", "elysian-promotion-grid")?;
    for promotion in &MUSIC_PROMOTIONS {
        let card = create_element(document, "article", "elysian-promotion-card")?;
        append_image(document, &card, promotion.image_url, promotion.title)?;
        append_text(document, &card, "span", "elysian-tag", promotion.platform)?;
        append_text(document, &card, "h3", "", promotion.title)?;
        append_text(document, &card, "p", "", promotion.description)?;
        append_text(
            document,
            &card,
            "p",
            "elysian-promotion-audience",
            &format!("Target audience: {}", promotion.target_audience),
        )?;
        append(&grid, &card)?;
    }
    append(section, &grid)
}

pub(super) fn ensure_back_to_top_button(
    document: &web_sys::Document,
    body: &HtmlElement,
) -> Result<(), String> {
    if document.get_element_by_id(BACK_TO_TOP_ID).is_some() {
        return Ok(());
    }
    let button = create_element(document, "button", "elysian-back-to-top")?;
    button.set_id(BACK_TO_TOP_ID);
    set_attribute(&button, "type", "button")?;
    set_attribute(&button, "aria-label", "Go to top")?;
    set_attribute(&button, "title", "Go to top")?;
    button.set_text_content(Some("\u{2191}"));
    set_styles(
        &button,
        &[
            ("position", "fixed"),
            ("bottom", "32px"),
            ("right", "32px"),
            ("opacity", "0"),
            ("pointer-events", "none"),
            ("transition", "opacity 300ms ease-in-out"),
        ],
    )?;
    listen_into(&SHELL_LISTENERS, &button, "mouseenter", |_event| play_sound(UiSound::Hover))?;
    listen_into(&SHELL_LISTENERS, &button, "click", |_event| {
        play_sound(UiSound::Click);
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    })?;
    append(body, &button)
}

pub(super) fn sync_back_to_top_visibility() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(button) = element_by_id::<HtmlElement>(BACK_TO_TOP_ID) else {
        return;
    };
    let visible = window
        .page_y_offset()
        .is_ok_and(|offset| offset > BACK_TO_TOP_THRESHOLD_PX);
    let style = button.style();
    let _ = style.set_property("opacity", if visible { "1" } else { "0" });
    let _ = style.set_property("pointer-events", if visible { "auto" } else { "none" });
}
