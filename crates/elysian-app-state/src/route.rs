use serde::{Deserialize, Serialize};

pub const SCROLL_TO_QUERY_KEY: &str = "scrollTo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewId {
    #[default]
    Home,
    Models,
    ModelingAgencies,
    MovieAgencies,
    MusicVideoCasting,
    MusicPromoting,
    Apply,
}

impl ViewId {
    pub const ALL: [ViewId; 7] = [
        ViewId::Home,
        ViewId::Models,
        ViewId::ModelingAgencies,
        ViewId::MovieAgencies,
        ViewId::MusicVideoCasting,
        ViewId::MusicPromoting,
        ViewId::Apply,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Models => "models",
            Self::ModelingAgencies => "modelingAgencies",
            Self::MovieAgencies => "movieAgencies",
            Self::MusicVideoCasting => "musicVideoCasting",
            Self::MusicPromoting => "musicPromoting",
            Self::Apply => "apply",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL.into_iter().find(|view| view.as_str() == trimmed)
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        resolve_address_from_view(self)
    }

    /// Only the models roster renders items addressable by `scrollTo`.
    #[must_use]
    pub fn accepts_deep_link(self) -> bool {
        matches!(self, Self::Models)
    }
}

/// How the routed part of the address is carried in the browser location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressMode {
    #[default]
    Path,
    Hash,
}

impl AddressMode {
    /// Extracts the `/path?query` part this mode routes on from a full
    /// `pathname + search + hash` address.
    #[must_use]
    pub fn route_part(self, address: &str) -> &str {
        match self {
            Self::Path => address,
            Self::Hash => address
                .split_once('#')
                .map_or("/", |(_, fragment)| fragment),
        }
    }

    /// Turns a route into the URL handed to the history API.
    #[must_use]
    pub fn format(self, route: &str) -> String {
        match self {
            Self::Path => route.to_string(),
            Self::Hash => format!("#{route}"),
        }
    }
}

#[must_use]
pub fn resolve_address_from_view(view: ViewId) -> &'static str {
    match view {
        ViewId::Home => "/",
        ViewId::Models => "/models",
        ViewId::ModelingAgencies => "/agencies/modeling",
        ViewId::MovieAgencies => "/agencies/movie",
        ViewId::MusicVideoCasting => "/music/casting",
        ViewId::MusicPromoting => "/music/promoting",
        ViewId::Apply => "/apply",
    }
}

#[must_use]
pub fn resolve_view_from_address(address: &str) -> ViewId {
    match normalize_route_path(address).as_str() {
        "/models" => ViewId::Models,
        "/agencies/modeling" => ViewId::ModelingAgencies,
        "/agencies/movie" => ViewId::MovieAgencies,
        "/music/casting" => ViewId::MusicVideoCasting,
        "/music/promoting" => ViewId::MusicPromoting,
        "/apply" => ViewId::Apply,
        _ => ViewId::Home,
    }
}

/// Strips query and fragment, forces a leading slash and drops trailing ones.
#[must_use]
pub fn normalize_route_path(address: &str) -> String {
    let without_fragment = address.split('#').next().unwrap_or_default();
    let path = without_fragment
        .split('?')
        .next()
        .unwrap_or_default()
        .trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[must_use]
pub fn route_query(route: &str) -> &str {
    let without_fragment = route.split('#').next().unwrap_or_default();
    without_fragment
        .split_once('?')
        .map_or("", |(_, query)| query)
}

#[must_use]
pub fn query_value<'a>(route: &'a str, key: &str) -> Option<&'a str> {
    route_query(route)
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}

#[must_use]
pub fn parse_scroll_to(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
}

/// Canonical route for a view, carrying `scrollTo` only where the view
/// consumes it.
#[must_use]
pub fn route_for(view: ViewId, item_id: Option<u32>) -> String {
    let path = resolve_address_from_view(view);
    match item_id {
        Some(item_id) if view.accepts_deep_link() => {
            format!("{path}?{SCROLL_TO_QUERY_KEY}={item_id}")
        }
        _ => path.to_string(),
    }
}

/// Two routes address the same entry when their normalized paths and raw
/// queries agree.
#[must_use]
pub fn routes_match(left: &str, right: &str) -> bool {
    normalize_route_path(left) == normalize_route_path(right) && route_query(left) == route_query(right)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub active_view: ViewId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_link_target_id: Option<u32>,
}

impl NavigationState {
    #[must_use]
    pub fn from_route(route: &str) -> Self {
        let active_view = resolve_view_from_address(route);
        let deep_link_target_id = if active_view.accepts_deep_link() {
            parse_scroll_to(query_value(route, SCROLL_TO_QUERY_KEY))
        } else {
            None
        };
        Self {
            active_view,
            deep_link_target_id,
        }
    }

    #[must_use]
    pub fn route(&self) -> String {
        route_for(self.active_view, self.deep_link_target_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_path_round_trips_through_its_view() {
        for view in ViewId::ALL {
            let path = resolve_address_from_view(view);
            assert_eq!(resolve_view_from_address(path), view);
            assert_eq!(resolve_address_from_view(resolve_view_from_address(path)), path);
        }
    }

    #[test]
    fn unknown_and_empty_paths_fall_back_to_home() {
        for path in ["", "/", "/nope", "/agencies", "/music", "/models/7", "apply-now", "/APPLY"] {
            assert_eq!(resolve_view_from_address(path), ViewId::Home, "path {path:?}");
        }
    }

    #[test]
    fn resolution_ignores_query_fragment_and_trailing_slash() {
        assert_eq!(resolve_view_from_address("/models?scrollTo=3"), ViewId::Models);
        assert_eq!(resolve_view_from_address("/music/casting/"), ViewId::MusicVideoCasting);
        assert_eq!(resolve_view_from_address("/apply#terms"), ViewId::Apply);
        assert_eq!(resolve_view_from_address("agencies/movie"), ViewId::MovieAgencies);
    }

    #[test]
    fn hash_mode_routes_on_the_fragment() {
        let mode = AddressMode::Hash;
        assert_eq!(mode.route_part("/index.html#/agencies/modeling"), "/agencies/modeling");
        assert_eq!(mode.route_part("/index.html"), "/");
        assert_eq!(mode.format("/models?scrollTo=2"), "#/models?scrollTo=2");
        let state = NavigationState::from_route(mode.route_part("/#/models?scrollTo=2"));
        assert_eq!(state.active_view, ViewId::Models);
        assert_eq!(state.deep_link_target_id, Some(2));
    }

    #[test]
    fn scroll_to_is_read_only_on_models() {
        let models = NavigationState::from_route("/models?utm=x&scrollTo=12");
        assert_eq!(models.deep_link_target_id, Some(12));

        let apply = NavigationState::from_route("/apply?scrollTo=12");
        assert_eq!(apply.active_view, ViewId::Apply);
        assert_eq!(apply.deep_link_target_id, None);
    }

    #[test]
    fn malformed_scroll_to_is_treated_as_absent() {
        for route in ["/models?scrollTo=", "/models?scrollTo=abc", "/models?scrollTo=-4", "/models?scrollTo"] {
            assert_eq!(NavigationState::from_route(route).deep_link_target_id, None, "route {route:?}");
        }
    }

    #[test]
    fn route_for_drops_item_ids_on_views_without_deep_links() {
        assert_eq!(route_for(ViewId::Models, Some(7)), "/models?scrollTo=7");
        assert_eq!(route_for(ViewId::Apply, Some(7)), "/apply");
        assert_eq!(route_for(ViewId::Home, None), "/");
    }

    #[test]
    fn view_names_parse_back() {
        for view in ViewId::ALL {
            assert_eq!(ViewId::parse(view.as_str()), Some(view));
        }
        assert_eq!(ViewId::parse("casting"), None);
    }

    #[test]
    fn routes_match_compares_path_and_query() {
        assert!(routes_match("/models/", "/models"));
        assert!(routes_match("/models?scrollTo=1", "/models?scrollTo=1"));
        assert!(!routes_match("/models?scrollTo=1", "/models"));
        assert!(!routes_match("/apply", "/"));
    }
}
