use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::route::{AddressMode, NavigationState, ViewId, route_for, routes_match};

pub const APPLICATION_SUBMITTED_KEY: &str = "applicationSubmitted";
pub const APPLICATION_SUBMITTED_VALUE: &str = "true";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("browser history is unavailable")]
    Unavailable,
    #[error("browser history rejected {address}: {reason}")]
    Rejected { address: String, reason: String },
}

/// The browser address bar and history stack.
///
/// The navigation controller is the only writer; everything else reads the
/// address back through [`NavigationController::on_address_change`].
pub trait BrowserHistory {
    /// Current `pathname + search + hash`.
    fn current_address(&self) -> String;
    fn push_address(&mut self, address: &str) -> Result<(), HistoryError>;
    fn replace_address(&mut self, address: &str) -> Result<(), HistoryError>;
    /// Jumps to the top of the document without animation.
    fn scroll_to_top(&mut self);
}

/// Session-scoped key/value storage.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

pub fn application_submitted(store: &impl SessionStore) -> bool {
    store.get_item(APPLICATION_SUBMITTED_KEY).as_deref() == Some(APPLICATION_SUBMITTED_VALUE)
}

pub fn mark_application_submitted(store: &mut impl SessionStore) {
    store.set_item(APPLICATION_SUBMITTED_KEY, APPLICATION_SUBMITTED_VALUE);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    pub item_id: Option<u32>,
}

impl NavigateOptions {
    #[must_use]
    pub fn item(item_id: u32) -> Self {
        Self {
            item_id: Some(item_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Pushed,
    Unchanged,
}

#[derive(Debug)]
pub struct NavigationController<H, S> {
    history: H,
    session: S,
    mode: AddressMode,
    state: NavigationState,
}

impl<H: BrowserHistory, S: SessionStore> NavigationController<H, S> {
    pub fn new(history: H, session: S, mode: AddressMode) -> Self {
        let mut controller = Self {
            history,
            session,
            mode,
            state: NavigationState::default(),
        };
        controller.on_address_change();
        controller
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn mode(&self) -> AddressMode {
        self.mode
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn navigate_to(
        &mut self,
        view: ViewId,
        options: NavigateOptions,
    ) -> Result<NavigationOutcome, HistoryError> {
        let route = route_for(view, options.item_id);
        let current = self.history.current_address();
        if routes_match(self.mode.route_part(&current), &route) {
            debug!(route = %route, "navigation target matches current address");
            return Ok(NavigationOutcome::Unchanged);
        }

        let address = self.mode.format(&route);
        self.history.push_address(&address)?;
        self.history.scroll_to_top();
        if view != ViewId::Apply {
            self.clear_submission_flag();
        }
        self.state = NavigationState::from_route(&route);
        debug!(view = view.as_str(), address = %address, "pushed navigation entry");
        Ok(NavigationOutcome::Pushed)
    }

    /// Re-derives the state from the address. Returns whether it changed.
    pub fn on_address_change(&mut self) -> bool {
        let address = self.history.current_address();
        let next = NavigationState::from_route(self.mode.route_part(&address));
        if next.active_view != ViewId::Apply {
            self.clear_submission_flag();
        }
        let changed = next != self.state;
        self.state = next;
        if changed {
            debug!(view = next.active_view.as_str(), deep_link = ?next.deep_link_target_id, "navigation state resolved from address");
        }
        changed
    }

    /// Drops `scrollTo` from the address once the target view has scrolled to
    /// the item. Uses a replace, so no history entry is added.
    pub fn on_deep_link_consumed(&mut self) -> Result<bool, HistoryError> {
        if self.state.deep_link_target_id.is_none() {
            return Ok(false);
        }
        let address = self.mode.format(&route_for(self.state.active_view, None));
        if let Err(error) = self.history.replace_address(&address) {
            warn!(%error, "failed to drop consumed deep link from address");
            return Err(error);
        }
        self.state.deep_link_target_id = None;
        debug!(address = %address, "deep link consumed");
        Ok(true)
    }

    fn clear_submission_flag(&mut self) {
        if self.session.get_item(APPLICATION_SUBMITTED_KEY).is_some() {
            self.session.remove_item(APPLICATION_SUBMITTED_KEY);
            debug!("cleared application submission flag");
        }
    }
}

/// In-memory history stack with browser push/replace/back semantics.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    scroll_resets: usize,
}

impl MemoryHistory {
    pub fn new(initial_address: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_address.into()],
            index: 0,
            scroll_resets: 0,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

impl BrowserHistory for MemoryHistory {
    fn current_address(&self) -> String {
        self.entries.get(self.index).cloned().unwrap_or_else(|| "/".to_string())
    }

    fn push_address(&mut self, address: &str) -> Result<(), HistoryError> {
        self.entries.truncate(self.index + 1);
        self.entries.push(address.to_string());
        self.index = self.entries.len() - 1;
        Ok(())
    }

    fn replace_address(&mut self, address: &str) -> Result<(), HistoryError> {
        let Some(entry) = self.entries.get_mut(self.index) else {
            return Err(HistoryError::Unavailable);
        };
        *entry = address.to_string();
        Ok(())
    }

    fn scroll_to_top(&mut self) {
        self.scroll_resets += 1;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    items: BTreeMap<String, String>,
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_at(address: &str) -> NavigationController<MemoryHistory, MemorySessionStore> {
        NavigationController::new(
            MemoryHistory::new(address),
            MemorySessionStore::default(),
            AddressMode::Path,
        )
    }

    #[test]
    fn initial_address_drives_the_first_state() {
        let controller = controller_at("/models?scrollTo=4");
        assert_eq!(controller.state().active_view, ViewId::Models);
        assert_eq!(controller.state().deep_link_target_id, Some(4));
    }

    #[test]
    fn deep_link_navigation_writes_scroll_to_and_consumption_replaces_it() {
        let mut controller = controller_at("/");
        let outcome = controller.navigate_to(ViewId::Models, NavigateOptions::item(7));
        assert_eq!(outcome, Ok(NavigationOutcome::Pushed));
        assert_eq!(controller.history().current_address(), "/models?scrollTo=7");
        assert_eq!(controller.state().deep_link_target_id, Some(7));
        assert_eq!(controller.history().entry_count(), 2);

        assert_eq!(controller.on_deep_link_consumed(), Ok(true));
        assert_eq!(controller.history().current_address(), "/models");
        assert_eq!(controller.history().entry_count(), 2);
        assert_eq!(controller.state().active_view, ViewId::Models);
        assert_eq!(controller.state().deep_link_target_id, None);

        assert_eq!(controller.on_deep_link_consumed(), Ok(false));
    }

    #[test]
    fn navigating_to_the_current_address_is_a_no_op() {
        let mut controller = controller_at("/agencies/movie");
        let outcome = controller.navigate_to(ViewId::MovieAgencies, NavigateOptions::default());
        assert_eq!(outcome, Ok(NavigationOutcome::Unchanged));
        assert_eq!(controller.history().entry_count(), 1);
        assert_eq!(controller.history().scroll_resets(), 0);
    }

    #[test]
    fn a_new_item_on_the_same_view_is_a_new_entry() {
        let mut controller = controller_at("/models");
        let outcome = controller.navigate_to(ViewId::Models, NavigateOptions::item(3));
        assert_eq!(outcome, Ok(NavigationOutcome::Pushed));
        assert_eq!(controller.history().entry_count(), 2);
    }

    #[test]
    fn pushes_reset_scroll_to_top() {
        let mut controller = controller_at("/");
        let _ = controller.navigate_to(ViewId::Apply, NavigateOptions::default());
        let _ = controller.navigate_to(ViewId::MusicPromoting, NavigateOptions::default());
        assert_eq!(controller.history().scroll_resets(), 2);
        assert_eq!(controller.history().current_address(), "/music/promoting");
    }

    #[test]
    fn leaving_apply_clears_the_submission_flag() {
        let mut controller = controller_at("/apply");
        mark_application_submitted(controller.session_mut());
        assert!(application_submitted(controller.session()));

        let _ = controller.navigate_to(ViewId::Home, NavigateOptions::default());
        assert!(!application_submitted(controller.session()));

        let _ = controller.navigate_to(ViewId::Apply, NavigateOptions::default());
        assert_eq!(controller.state().active_view, ViewId::Apply);
        assert!(!application_submitted(controller.session()));
    }

    #[test]
    fn staying_on_apply_keeps_the_submission_flag() {
        let mut controller = controller_at("/apply");
        mark_application_submitted(controller.session_mut());
        assert!(!controller.on_address_change());
        assert!(application_submitted(controller.session()));
    }

    #[test]
    fn back_and_forward_are_picked_up_by_the_listener() {
        let mut controller = controller_at("/");
        let _ = controller.navigate_to(ViewId::Models, NavigateOptions::default());
        let _ = controller.navigate_to(ViewId::Apply, NavigateOptions::default());
        mark_application_submitted(controller.session_mut());

        assert!(controller.history_mut().back());
        assert!(controller.on_address_change());
        assert_eq!(controller.state().active_view, ViewId::Models);
        assert!(!application_submitted(controller.session()));

        assert!(controller.history_mut().forward());
        assert!(controller.on_address_change());
        assert_eq!(controller.state().active_view, ViewId::Apply);
    }

    #[test]
    fn pushing_after_back_discards_forward_entries() {
        let mut history = MemoryHistory::new("/");
        let _ = history.push_address("/models");
        let _ = history.push_address("/apply");
        assert!(history.back());
        let _ = history.push_address("/music/casting");
        assert_eq!(history.entry_count(), 3);
        assert!(!history.forward());
    }

    #[test]
    fn hash_mode_writes_fragment_routes() {
        let mut controller = NavigationController::new(
            MemoryHistory::new("/index.html"),
            MemorySessionStore::default(),
            AddressMode::Hash,
        );
        assert_eq!(controller.state().active_view, ViewId::Home);
        let _ = controller.navigate_to(ViewId::Models, NavigateOptions::item(9));
        assert_eq!(controller.history().current_address(), "#/models?scrollTo=9");
        assert_eq!(controller.on_deep_link_consumed(), Ok(true));
        assert_eq!(controller.history().current_address(), "#/models");
    }
}
