use serde::{Deserialize, Serialize};

use crate::tour::TourPosition;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Zero-size rect at a point.
    #[must_use]
    pub fn point(top: f64, left: f64) -> Self {
        Self::new(top, left, 0.0, 0.0)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        Self::new(
            self.top - margin,
            self.left - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(&self) -> Rect {
        Rect::point(self.height / 2.0, self.width / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourLayoutConfig {
    pub tooltip_width: f64,
    pub tooltip_margin: f64,
    pub viewport_padding: f64,
    pub spotlight_margin: f64,
    pub mobile_breakpoint: f64,
    pub mobile_inset: f64,
    pub transition_ms: u32,
}

impl Default for TourLayoutConfig {
    fn default() -> Self {
        Self {
            tooltip_width: 320.0,
            tooltip_margin: 15.0,
            viewport_padding: 16.0,
            spotlight_margin: 5.0,
            mobile_breakpoint: 768.0,
            mobile_inset: 16.0,
            transition_ms: 400,
        }
    }
}

/// Which tooltip edge sits on the resolved `left` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlign {
    Start,
    Center,
    End,
}

impl HorizontalAlign {
    #[must_use]
    fn width_fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }

    #[must_use]
    pub fn css_transform(self) -> &'static str {
        match self {
            Self::Start => "translateX(0)",
            Self::Center => "translateX(-50%)",
            Self::End => "translateX(-100%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TooltipPlacement {
    ViewportCenter,
    Anchored {
        top: f64,
        left: f64,
        align: HorizontalAlign,
    },
    PinnedBottom {
        inset: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotlightCutout {
    pub viewport: Viewport,
    pub window: Rect,
}

impl SpotlightCutout {
    /// Full-viewport rectangle with the window subtracted under the even-odd
    /// fill rule.
    #[must_use]
    pub fn path_data(&self) -> String {
        let Viewport { width, height } = self.viewport;
        let window = self.window;
        format!(
            "M0 0 H {width} V {height} H 0 Z M {left} {top} H {right} V {bottom} H {left} Z",
            left = window.left,
            top = window.top,
            right = window.right(),
            bottom = window.bottom(),
        )
    }

    #[must_use]
    pub fn clip_path(&self) -> String {
        format!("path(evenodd, '{}')", self.path_data())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TourLayout {
    pub placement: TooltipPlacement,
    pub spotlight: Option<SpotlightCutout>,
    pub transition_ms: u32,
}

#[must_use]
pub fn is_narrow_viewport(viewport: Viewport, config: &TourLayoutConfig) -> bool {
    viewport.width < config.mobile_breakpoint
}

/// Horizontal anchor and alignment before clamping. `None` for centered steps.
#[must_use]
pub fn tooltip_anchor(position: TourPosition, target: Rect) -> Option<(f64, HorizontalAlign)> {
    match position {
        TourPosition::Center => None,
        TourPosition::Bottom => Some((target.left + target.width / 2.0, HorizontalAlign::Center)),
        TourPosition::BottomRight => Some((target.right(), HorizontalAlign::End)),
    }
}

/// Keeps the tooltip inside `[padding, viewport.width - padding]`.
#[must_use]
pub fn clamp_tooltip(
    anchor_x: f64,
    align: HorizontalAlign,
    viewport: Viewport,
    config: &TourLayoutConfig,
) -> (f64, HorizontalAlign) {
    let resolved_left = anchor_x - config.tooltip_width * align.width_fraction();
    if resolved_left < config.viewport_padding {
        (config.viewport_padding, HorizontalAlign::Start)
    } else if resolved_left + config.tooltip_width > viewport.width - config.viewport_padding {
        (viewport.width - config.viewport_padding, HorizontalAlign::End)
    } else {
        (anchor_x, align)
    }
}

#[must_use]
pub fn compute_tour_layout(
    position: TourPosition,
    target: Rect,
    viewport: Viewport,
    config: &TourLayoutConfig,
) -> TourLayout {
    let transition_ms = config.transition_ms;
    let Some((anchor_x, align)) = tooltip_anchor(position, target) else {
        return TourLayout {
            placement: TooltipPlacement::ViewportCenter,
            spotlight: None,
            transition_ms,
        };
    };

    if is_narrow_viewport(viewport, config) {
        return TourLayout {
            placement: TooltipPlacement::PinnedBottom {
                inset: config.mobile_inset,
            },
            spotlight: None,
            transition_ms,
        };
    }

    let (left, align) = clamp_tooltip(anchor_x, align, viewport, config);
    let spotlight = (target.width > 0.0).then(|| SpotlightCutout {
        viewport,
        window: target.expanded(config.spotlight_margin),
    });

    TourLayout {
        placement: TooltipPlacement::Anchored {
            top: target.bottom() + config.tooltip_margin,
            left,
            align,
        },
        spotlight,
        transition_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn bottom_step_centers_under_the_target() {
        let target = Rect::new(40.0, 100.0, 200.0, 30.0);
        assert_eq!(
            tooltip_anchor(TourPosition::Bottom, target),
            Some((200.0, HorizontalAlign::Center))
        );

        let layout = compute_tour_layout(
            TourPosition::Bottom,
            Rect::new(40.0, 400.0, 200.0, 30.0),
            DESKTOP,
            &TourLayoutConfig::default(),
        );
        assert_eq!(
            layout.placement,
            TooltipPlacement::Anchored {
                top: 85.0,
                left: 500.0,
                align: HorizontalAlign::Center,
            }
        );
    }

    #[test]
    fn tooltip_near_the_left_edge_is_pinned_to_the_padding() {
        let config = TourLayoutConfig::default();
        let layout = compute_tour_layout(
            TourPosition::Bottom,
            Rect::new(40.0, 20.0, 100.0, 30.0),
            DESKTOP,
            &config,
        );
        let TooltipPlacement::Anchored { left, align, .. } = layout.placement else {
            unreachable!("bottom step on desktop is anchored");
        };
        assert_eq!(left, config.viewport_padding);
        assert_eq!(align, HorizontalAlign::Start);
    }

    #[test]
    fn tooltip_near_the_right_edge_is_pinned_to_the_boundary() {
        let config = TourLayoutConfig::default();
        let layout = compute_tour_layout(
            TourPosition::Bottom,
            Rect::new(40.0, 1150.0, 100.0, 30.0),
            DESKTOP,
            &config,
        );
        let TooltipPlacement::Anchored { left, align, .. } = layout.placement else {
            unreachable!("bottom step on desktop is anchored");
        };
        assert_eq!(left, DESKTOP.width - config.viewport_padding);
        assert_eq!(align, HorizontalAlign::End);
    }

    #[test]
    fn bottom_right_aligns_to_the_target_right_edge() {
        let layout = compute_tour_layout(
            TourPosition::BottomRight,
            Rect::new(10.0, 600.0, 120.0, 40.0),
            DESKTOP,
            &TourLayoutConfig::default(),
        );
        assert_eq!(
            layout.placement,
            TooltipPlacement::Anchored {
                top: 65.0,
                left: 720.0,
                align: HorizontalAlign::End,
            }
        );
    }

    #[test]
    fn clamped_left_edge_never_drops_below_padding() {
        let config = TourLayoutConfig::default();
        for left in [-500.0, -20.0, 0.0, 10.0, 60.0, 150.0, 900.0, 1270.0, 2000.0] {
            for position in [TourPosition::Bottom, TourPosition::BottomRight] {
                let layout =
                    compute_tour_layout(position, Rect::new(0.0, left, 80.0, 20.0), DESKTOP, &config);
                let TooltipPlacement::Anchored { left, align, .. } = layout.placement else {
                    unreachable!("anchored on desktop");
                };
                let edge = left - config.tooltip_width * align.width_fraction();
                assert!(edge >= config.viewport_padding, "edge {edge} for {position:?}");
            }
        }
    }

    #[test]
    fn center_steps_ignore_the_rect() {
        let layout = compute_tour_layout(
            TourPosition::Center,
            DESKTOP.center(),
            DESKTOP,
            &TourLayoutConfig::default(),
        );
        assert_eq!(layout.placement, TooltipPlacement::ViewportCenter);
        assert_eq!(layout.spotlight, None);
    }

    #[test]
    fn narrow_viewports_pin_non_center_steps_to_the_bottom() {
        let phone = Viewport::new(390.0, 844.0);
        let config = TourLayoutConfig::default();
        let layout = compute_tour_layout(
            TourPosition::Bottom,
            Rect::new(20.0, 40.0, 100.0, 30.0),
            phone,
            &config,
        );
        assert_eq!(layout.placement, TooltipPlacement::PinnedBottom { inset: 16.0 });
        assert_eq!(layout.spotlight, None);

        let center = compute_tour_layout(TourPosition::Center, phone.center(), phone, &config);
        assert_eq!(center.placement, TooltipPlacement::ViewportCenter);
    }

    #[test]
    fn spotlight_cuts_the_expanded_target_out_of_the_viewport() {
        let layout = compute_tour_layout(
            TourPosition::Bottom,
            Rect::new(40.0, 100.0, 200.0, 30.0),
            DESKTOP,
            &TourLayoutConfig::default(),
        );
        let Some(spotlight) = layout.spotlight else {
            unreachable!("targets with width get a cutout");
        };
        assert_eq!(
            spotlight.clip_path(),
            "path(evenodd, 'M0 0 H 1280 V 800 H 0 Z M 95 35 H 305 V 75 H 95 Z')"
        );
        assert_eq!(layout.transition_ms, 400);
    }

    #[test]
    fn zero_width_targets_get_no_cutout() {
        let layout = compute_tour_layout(
            TourPosition::Bottom,
            Rect::point(300.0, 640.0),
            DESKTOP,
            &TourLayoutConfig::default(),
        );
        assert_eq!(layout.spotlight, None);
    }
}
