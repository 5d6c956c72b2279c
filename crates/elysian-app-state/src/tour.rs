use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::tour_layout::{Rect, TourLayout, TourLayoutConfig, Viewport, compute_tour_layout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TourPosition {
    Center,
    Bottom,
    BottomRight,
}

/// Screen regions a tour step can highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TourAnchor {
    Page,
    Models,
    ModelingAgencies,
    MovieAgencies,
    Music,
}

impl TourAnchor {
    /// Value of the `data-tour-id` attribute views put on the anchor element.
    #[must_use]
    pub fn tour_id(self) -> Option<&'static str> {
        match self {
            Self::Page => None,
            Self::Models => Some("models"),
            Self::ModelingAgencies => Some("modelingAgencies"),
            Self::MovieAgencies => Some("movieAgencies"),
            Self::Music => Some("music"),
        }
    }

    #[must_use]
    pub fn selector(self) -> String {
        match self.tour_id() {
            Some(id) => format!("[data-tour-id=\"{id}\"]"),
            None => "body".to_string(),
        }
    }
}

/// Locates the live screen region for a tour anchor.
pub trait AnchorLocator {
    fn locate(&self, anchor: TourAnchor) -> Option<Rect>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TourStep {
    pub anchor: TourAnchor,
    pub title: &'static str,
    pub content: &'static str,
    pub position: TourPosition,
}

pub const ELYSIAN_TOUR: [TourStep; 6] = [
    TourStep {
        anchor: TourAnchor::Page,
        title: "Welcome to Elysian Talent Hub!",
        content: "Let's take a quick tour of the platform to get you started. This will only take a moment.",
        position: TourPosition::Center,
    },
    TourStep {
        anchor: TourAnchor::Models,
        title: "Discover Talent",
        content: "This is the Models page, where you can browse and filter through our entire roster of exceptional talent.",
        position: TourPosition::Bottom,
    },
    TourStep {
        anchor: TourAnchor::ModelingAgencies,
        title: "Modeling Agencies",
        content: "Here, you can find a curated list of the top-tier modeling agencies we partner with.",
        position: TourPosition::Bottom,
    },
    TourStep {
        anchor: TourAnchor::MovieAgencies,
        title: "Movie & Casting Agencies",
        content: "Explore the creative forces behind film and television, and discover casting opportunities.",
        position: TourPosition::Bottom,
    },
    TourStep {
        anchor: TourAnchor::Music,
        title: "Music Industry Hub",
        content: "This section is dedicated to the music world, offering casting for music videos and promotional services.",
        position: TourPosition::Bottom,
    },
    TourStep {
        anchor: TourAnchor::Page,
        title: "Tour Complete!",
        content: "You're all set. Feel free to explore the hub at your own pace. Opportunity awaits!",
        position: TourPosition::Center,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourState {
    pub is_active: bool,
    pub step_index: usize,
    pub target_rect: Option<Rect>,
}

#[derive(Debug, Clone)]
pub struct TourEngine {
    steps: &'static [TourStep],
    config: TourLayoutConfig,
    state: TourState,
}

impl Default for TourEngine {
    fn default() -> Self {
        Self::new(&ELYSIAN_TOUR, TourLayoutConfig::default())
    }
}

impl TourEngine {
    pub fn new(steps: &'static [TourStep], config: TourLayoutConfig) -> Self {
        Self {
            steps,
            config,
            state: TourState::default(),
        }
    }

    pub fn state(&self) -> TourState {
        self.state
    }

    pub fn config(&self) -> &TourLayoutConfig {
        &self.config
    }

    pub fn steps(&self) -> &'static [TourStep] {
        self.steps
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    pub fn current_step(&self) -> Option<&'static TourStep> {
        if !self.state.is_active {
            return None;
        }
        self.steps.get(self.state.step_index)
    }

    pub fn is_last_step(&self) -> bool {
        self.state.is_active && self.state.step_index + 1 == self.steps.len()
    }

    pub fn start(&mut self) {
        if self.steps.is_empty() {
            warn!("tour has no steps to show");
            self.state = TourState::default();
            return;
        }
        self.state = TourState {
            is_active: true,
            step_index: 0,
            target_rect: None,
        };
        debug!(steps = self.steps.len(), "tour started");
    }

    pub fn next(&mut self) -> bool {
        if !self.state.is_active {
            return false;
        }
        self.move_to(self.state.step_index + 1);
        true
    }

    /// Steps back one, staying put on the first step.
    pub fn prev(&mut self) -> bool {
        if !self.state.is_active || self.state.step_index == 0 {
            return false;
        }
        self.move_to(self.state.step_index - 1);
        true
    }

    pub fn jump_to(&mut self, step_index: usize) -> bool {
        if !self.state.is_active {
            return false;
        }
        self.move_to(step_index);
        true
    }

    pub fn skip(&mut self) {
        self.end("skipped");
    }

    pub fn finish(&mut self) {
        self.end("finished");
    }

    /// Re-measures the current anchor and lays the overlay out against it.
    ///
    /// Returns `None` when nothing should render. A missing anchor ends the
    /// tour unless the step is centered, in which case the viewport center
    /// stands in for it.
    pub fn refresh(&mut self, locator: &impl AnchorLocator, viewport: Viewport) -> Option<TourLayout> {
        if !self.state.is_active {
            return None;
        }
        let Some(step) = self.steps.get(self.state.step_index) else {
            self.end("ran past the last step");
            return None;
        };

        let target = match locator.locate(step.anchor) {
            Some(rect) => rect,
            None if step.position == TourPosition::Center => viewport.center(),
            None => {
                warn!(anchor = ?step.anchor, step = self.state.step_index, "tour anchor is not on screen");
                self.end("anchor missing");
                return None;
            }
        };

        self.state.target_rect = Some(target);
        Some(compute_tour_layout(step.position, target, viewport, &self.config))
    }

    fn move_to(&mut self, step_index: usize) {
        if step_index >= self.steps.len() {
            self.end("finished");
            return;
        }
        self.state.step_index = step_index;
        self.state.target_rect = None;
        debug!(step = step_index, "tour step changed");
    }

    fn end(&mut self, reason: &'static str) {
        if self.state.is_active {
            debug!(step = self.state.step_index, reason, "tour ended");
        }
        self.state = TourState::default();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::tour_layout::TooltipPlacement;

    #[derive(Default)]
    struct FixedAnchors(HashMap<TourAnchor, Rect>);

    impl AnchorLocator for FixedAnchors {
        fn locate(&self, anchor: TourAnchor) -> Option<Rect> {
            self.0.get(&anchor).copied()
        }
    }

    fn nav_anchors() -> FixedAnchors {
        FixedAnchors(HashMap::from([
            (TourAnchor::Models, Rect::new(20.0, 400.0, 80.0, 24.0)),
            (TourAnchor::ModelingAgencies, Rect::new(20.0, 500.0, 140.0, 24.0)),
            (TourAnchor::MovieAgencies, Rect::new(20.0, 660.0, 120.0, 24.0)),
            (TourAnchor::Music, Rect::new(20.0, 800.0, 70.0, 24.0)),
        ]))
    }

    const DESKTOP: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn start_always_begins_at_the_first_step() {
        let mut engine = TourEngine::default();
        engine.start();
        assert!(engine.next());
        assert!(engine.next());
        engine.skip();
        engine.start();
        assert_eq!(engine.state().step_index, 0);
        assert!(engine.is_active());
    }

    #[test]
    fn next_on_the_last_step_ends_the_tour() {
        let mut engine = TourEngine::default();
        engine.start();
        assert!(engine.jump_to(ELYSIAN_TOUR.len() - 1));
        assert!(engine.is_last_step());
        assert!(engine.next());
        assert!(!engine.is_active());
        assert_eq!(engine.current_step(), None);
    }

    #[test]
    fn prev_on_the_first_step_stays_put() {
        let mut engine = TourEngine::default();
        engine.start();
        assert!(!engine.prev());
        assert_eq!(engine.state().step_index, 0);
        assert!(engine.is_active());

        assert!(engine.next());
        assert!(engine.prev());
        assert_eq!(engine.state().step_index, 0);
    }

    #[test]
    fn jumping_past_the_end_terminates() {
        let mut engine = TourEngine::default();
        engine.start();
        assert!(engine.jump_to(3));
        assert_eq!(engine.state().step_index, 3);
        assert!(engine.jump_to(42));
        assert!(!engine.is_active());
    }

    #[test]
    fn transitions_are_ignored_while_inactive() {
        let mut engine = TourEngine::default();
        assert!(!engine.next());
        assert!(!engine.prev());
        assert!(!engine.jump_to(1));
        assert_eq!(engine.refresh(&nav_anchors(), DESKTOP), None);
    }

    #[test]
    fn centered_steps_fall_back_to_the_viewport_center() {
        let mut engine = TourEngine::default();
        engine.start();
        let layout = engine.refresh(&FixedAnchors::default(), DESKTOP);
        assert_eq!(
            layout.map(|layout| layout.placement),
            Some(TooltipPlacement::ViewportCenter)
        );
        assert_eq!(engine.state().target_rect, Some(Rect::point(400.0, 640.0)));
    }

    #[test]
    fn missing_anchor_on_a_bottom_step_ends_the_tour() {
        let mut engine = TourEngine::default();
        engine.start();
        assert!(engine.next());
        assert_eq!(engine.refresh(&FixedAnchors::default(), DESKTOP), None);
        assert!(!engine.is_active());
    }

    #[test]
    fn refresh_measures_the_current_anchor() {
        let mut engine = TourEngine::default();
        engine.start();
        assert!(engine.next());
        let anchors = nav_anchors();
        let Some(layout) = engine.refresh(&anchors, DESKTOP) else {
            unreachable!("models anchor is present");
        };
        assert_eq!(engine.state().target_rect, anchors.locate(TourAnchor::Models));
        assert!(layout.spotlight.is_some());

        assert!(engine.next());
        assert_eq!(engine.state().target_rect, None);
    }

    #[test]
    fn resize_remeasures_the_same_step() {
        let mut engine = TourEngine::default();
        engine.start();
        assert!(engine.next());
        let Some(desktop) = engine.refresh(&nav_anchors(), DESKTOP) else {
            unreachable!("models anchor is present");
        };
        assert!(matches!(desktop.placement, TooltipPlacement::Anchored { .. }));

        let phone = Viewport::new(375.0, 700.0);
        let moved = Rect::new(12.0, 300.0, 40.0, 24.0);
        let reflowed = FixedAnchors(HashMap::from([(TourAnchor::Models, moved)]));
        let Some(narrow) = engine.refresh(&reflowed, phone) else {
            unreachable!("models anchor is present after reflow");
        };
        assert_eq!(engine.state().step_index, 1);
        assert_eq!(engine.state().target_rect, Some(moved));
        assert_eq!(narrow.placement, TooltipPlacement::PinnedBottom { inset: 16.0 });
        assert_eq!(narrow.spotlight, None);
    }

    #[test]
    fn every_step_renders_when_all_anchors_exist() {
        let mut engine = TourEngine::default();
        let anchors = nav_anchors();
        engine.start();
        let mut rendered = 0;
        while engine.is_active() {
            assert!(engine.refresh(&anchors, DESKTOP).is_some());
            rendered += 1;
            engine.next();
        }
        assert_eq!(rendered, ELYSIAN_TOUR.len());
    }

    #[test]
    fn selectors_target_tour_ids() {
        assert_eq!(TourAnchor::Page.selector(), "body");
        assert_eq!(TourAnchor::Music.selector(), "[data-tour-id=\"music\"]");
    }
}
