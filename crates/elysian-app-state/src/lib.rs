//! Shared state for the Elysian Talent Hub web shell.
//!
//! Everything here is browser-agnostic:
//! - URL-backed navigation over a [`BrowserHistory`] and [`SessionStore`]
//! - the guided tour state machine and its overlay geometry
//! - the talent application flow and its relay contract
//! - static catalog data and roster filtering

pub mod apply;
pub mod catalog;
pub mod config;
pub mod model_filter;
pub mod navigation;
pub mod route;
pub mod tour;
pub mod tour_layout;

pub use apply::{
    ApplicantField, ApplicationRelay, ApplyError, ApplyFlow, ApplyStage, AttachmentSlot,
    RelayError, RelayResponse, RelaySubmission, SubmissionStatus, interpret_relay_response,
};
pub use config::{ConfigError, ShellConfig};
pub use model_filter::{HeightRange, ModelFilter, parse_height};
pub use navigation::{
    BrowserHistory, HistoryError, MemoryHistory, MemorySessionStore, NavigateOptions,
    NavigationController, NavigationOutcome, SessionStore,
};
pub use route::{
    AddressMode, NavigationState, ViewId, resolve_address_from_view, resolve_view_from_address,
};
pub use tour::{AnchorLocator, ELYSIAN_TOUR, TourAnchor, TourEngine, TourPosition, TourState, TourStep};
pub use tour_layout::{
    HorizontalAlign, Rect, SpotlightCutout, TooltipPlacement, TourLayout, TourLayoutConfig,
    Viewport, compute_tour_layout,
};
