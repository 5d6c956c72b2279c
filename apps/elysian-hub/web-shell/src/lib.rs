#[cfg(any(target_arch = "wasm32", test))]
mod console_writer;
#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::{Cell, RefCell};

    use elysian_app_state::catalog::{
        AgencyKind, CASTING_CALLS, DISCOVER_CARDS, DiscoverIcon, HOME_TAGS, LATEST_MEDIA, MODELS,
        MUSIC_PROMOTIONS, MUSIC_VIDEO_CASTING_CALLS, MediaKind, MobileMenuEntry, Model, NAV_LINKS,
        NavTarget, agencies_of, featured_models, mobile_menu_entries, model_anchor_id,
    };
    use elysian_app_state::config::DEFAULT_LOG_FILTER;
    use elysian_app_state::model_filter::{
        ALL_OPTION, HeightRange, eye_color_options, hair_color_options,
    };
    use elysian_app_state::{
        AnchorLocator, ApplicantField, ApplicationRelay, ApplyError, ApplyFlow, ApplyStage,
        AttachmentSlot, BrowserHistory, ConfigError, HistoryError, ModelFilter, NavigateOptions,
        NavigationController, NavigationOutcome, NavigationState, Rect, RelayError, RelayResponse,
        RelaySubmission, SessionStore, ShellConfig, SubmissionStatus, TooltipPlacement, TourAnchor,
        TourEngine, ViewId, Viewport,
    };
    use gloo_timers::future::sleep;
    use serde::Serialize;
    use tracing::{debug, info, warn};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement};
    use web_time::{Duration, Instant};

    use crate::console_writer::{ConsoleLevel, LineBuffer, console_level_for_line};
    use crate::wasm_constants::*;

    mod apply_form;
    mod dom;
    mod lifecycle;
    mod listeners;
    mod network;
    mod routing;
    mod sound;
    mod tour_overlay;
    mod views;

    use apply_form::*;
    use dom::*;
    use lifecycle::*;
    use listeners::{EventListenerGuard, listen_into, release_listeners};
    use network::GlooRelay;
    use routing::*;
    use sound::{UiSound, play_sound, play_sound_at};
    use tour_overlay::*;
    use views::*;

    type WebNavigation = NavigationController<WebHistory, WebSessionStorage>;

    thread_local! {
        static CONFIG: RefCell<ShellConfig> = RefCell::new(ShellConfig::default());
        static NAVIGATION: RefCell<Option<WebNavigation>> = const { RefCell::new(None) };
        static TOUR: RefCell<TourEngine> = RefCell::new(TourEngine::default());
        static APPLY_FLOW: RefCell<ApplyFlow<web_sys::File>> = RefCell::new(ApplyFlow::default());
        static APPLY_MOUNT_GENERATION: Cell<u64> = const { Cell::new(0) };
        static MODEL_FILTER: RefCell<ModelFilter> = RefCell::new(ModelFilter::default());
        static DIAGNOSTICS: RefCell<BootDiagnostics> = RefCell::new(BootDiagnostics::default());
        static RENDERED_VIEW: Cell<Option<ViewId>> = const { Cell::new(None) };
        static RENDER_GENERATION: Cell<u64> = const { Cell::new(0) };
        static MUSIC_MENU_OPEN: Cell<bool> = const { Cell::new(false) };
        static MOBILE_MENU_OPEN: Cell<bool> = const { Cell::new(false) };
        static SHELL_LISTENERS: RefCell<Vec<EventListenerGuard>> = const { RefCell::new(Vec::new()) };
        static HEADER_LISTENERS: RefCell<Vec<EventListenerGuard>> = const { RefCell::new(Vec::new()) };
        static VIEW_LISTENERS: RefCell<Vec<EventListenerGuard>> = const { RefCell::new(Vec::new()) };
        static MODEL_GRID_LISTENERS: RefCell<Vec<EventListenerGuard>> = const { RefCell::new(Vec::new()) };
        static TOUR_LISTENERS: RefCell<Vec<EventListenerGuard>> = const { RefCell::new(Vec::new()) };
        static TOUR_RESIZE_LISTENER: RefCell<Option<EventListenerGuard>> = const { RefCell::new(None) };
        static MUSIC_MENU_OUTSIDE_LISTENER: RefCell<Option<EventListenerGuard>> = const { RefCell::new(None) };
    }

    #[derive(Debug, thiserror::Error)]
    pub(super) enum BootError {
        #[error("forced startup failure because query contains elysian_boot_fail=1")]
        Forced,
        #[error("{0}")]
        Dom(String),
    }

    impl From<String> for BootError {
        fn from(message: String) -> Self {
            Self::Dom(message)
        }
    }

    #[derive(Debug, Clone, Serialize)]
    struct BootDiagnostics {
        phase: String,
        detail: String,
        boot_started_at_unix_ms: Option<u64>,
        dom_ready_latency_ms: Option<u64>,
        boot_total_latency_ms: Option<u64>,
        config_source: String,
        address_mode: Option<String>,
        route_path: String,
        active_view: String,
        navigation_pushes: u64,
        tour_runs: u64,
        submissions: u64,
        submission_failures: u64,
        last_error: Option<String>,
    }

    impl Default for BootDiagnostics {
        fn default() -> Self {
            Self {
                phase: "idle".to_string(),
                detail: "waiting for start".to_string(),
                boot_started_at_unix_ms: None,
                dom_ready_latency_ms: None,
                boot_total_latency_ms: None,
                config_source: "defaults".to_string(),
                address_mode: None,
                route_path: "/".to_string(),
                active_view: ViewId::Home.as_str().to_string(),
                navigation_pushes: 0,
                tour_runs: 0,
                submissions: 0,
                submission_failures: 0,
                last_error: None,
            }
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        set_boot_phase("booting", "initializing Elysian web shell runtime");
        spawn_local(async {
            if let Err(error) = boot().await {
                set_boot_error(&error.to_string());
            }
        });
    }

    #[wasm_bindgen]
    pub fn boot_diagnostics_json() -> String {
        DIAGNOSTICS.with(|state| {
            serde_json::to_string(&*state.borrow()).unwrap_or_else(|_| {
                "{\"phase\":\"error\",\"detail\":\"diagnostics serialization failed\"}".to_string()
            })
        })
    }

    #[wasm_bindgen]
    pub fn navigation_state_json() -> String {
        serde_json::to_string(&navigation_state()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Unknown view names land on home, the same as an unknown address.
    #[wasm_bindgen]
    pub fn navigate(view: String, item_id: Option<u32>) {
        let view = ViewId::parse(&view).unwrap_or_default();
        navigate_to_view(view, NavigateOptions { item_id });
    }

    #[wasm_bindgen]
    pub fn tour_start() {
        start_tour();
    }

    #[wasm_bindgen]
    pub fn tour_next() {
        advance_tour();
    }

    #[wasm_bindgen]
    pub fn tour_prev() {
        if TOUR.with(|tour| tour.borrow_mut().prev()) {
            request_tour_render();
        }
    }

    #[wasm_bindgen]
    pub fn tour_skip() {
        TOUR.with(|tour| tour.borrow_mut().skip());
        request_tour_render();
    }

    #[wasm_bindgen]
    pub fn tour_jump_to(step_index: u32) {
        if TOUR.with(|tour| tour.borrow_mut().jump_to(step_index as usize)) {
            request_tour_render();
        }
    }

    #[wasm_bindgen]
    pub fn tour_state_json() -> String {
        TOUR.with(|tour| {
            serde_json::to_string(&tour.borrow().state()).unwrap_or_else(|_| "{}".to_string())
        })
    }

    async fn boot() -> Result<(), BootError> {
        if should_force_boot_failure() {
            return Err(BootError::Forced);
        }

        let boot_started_at = Instant::now();
        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.boot_started_at_unix_ms = Some(now_unix_ms());
            state.dom_ready_latency_ms = None;
            state.boot_total_latency_ms = None;
        });

        let (config, rejected_override) = load_shell_config();
        install_tracing(&config.log_filter);
        if let Some(error) = rejected_override {
            warn!(%error, "ignoring config override");
        }
        DIAGNOSTICS.with(|state| {
            state.borrow_mut().address_mode = Some(format!("{:?}", config.address_mode).to_lowercase());
        });
        let address_mode = config.address_mode;
        CONFIG.with(|slot| *slot.borrow_mut() = config);

        ensure_shell_dom()?;
        record_dom_ready(boot_started_at.elapsed());

        let controller = NavigationController::new(
            WebHistory::new()?,
            WebSessionStorage::new(),
            address_mode,
        );
        NAVIGATION.with(|slot| *slot.borrow_mut() = Some(controller));
        install_shell_listeners()?;
        render_current_view();

        let total = boot_started_at.elapsed();
        DIAGNOSTICS.with(|state| {
            state.borrow_mut().boot_total_latency_ms = Some(total.as_millis() as u64);
        });
        set_boot_phase("ready", "Elysian web shell is interactive");
        info!(latency_ms = total.as_millis() as u64, "web shell booted");
        Ok(())
    }

    /// Runs `work` after the current event handler returns. Handlers that
    /// rebuild the DOM they are attached to go through here so their own
    /// listener is not dropped while it is still executing.
    pub(super) fn defer(work: impl FnOnce() + 'static) {
        spawn_local(async move { work() });
    }
}
