use super::*;

    /// `window.history` and `window.location` behind the navigation controller.
    pub(super) struct WebHistory {
        window: web_sys::Window,
    }

    impl WebHistory {
        pub(super) fn new() -> Result<Self, String> {
            let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
            Ok(Self { window })
        }
    }

    impl BrowserHistory for WebHistory {
        fn current_address(&self) -> String {
            let location = self.window.location();
            let pathname = location
                .pathname()
                .ok()
                .filter(|pathname| !pathname.trim().is_empty())
                .unwrap_or_else(|| "/".to_string());
            let search = location.search().unwrap_or_default();
            let hash = location.hash().unwrap_or_default();
            format!("{pathname}{search}{hash}")
        }

        fn push_address(&mut self, address: &str) -> Result<(), HistoryError> {
            let history = self.window.history().map_err(|_| HistoryError::Unavailable)?;
            history
                .push_state_with_url(&JsValue::NULL, "", Some(address))
                .map_err(|error| HistoryError::Rejected {
                    address: address.to_string(),
                    reason: js_error_message(&error),
                })
        }

        fn replace_address(&mut self, address: &str) -> Result<(), HistoryError> {
            let history = self.window.history().map_err(|_| HistoryError::Unavailable)?;
            history
                .replace_state_with_url(&JsValue::NULL, "", Some(address))
                .map_err(|error| HistoryError::Rejected {
                    address: address.to_string(),
                    reason: js_error_message(&error),
                })
        }

        fn scroll_to_top(&mut self) {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Instant);
            self.window.scroll_to_with_scroll_to_options(&options);
        }
    }

    /// `window.sessionStorage`. Storage that is unavailable (private modes,
    /// sandboxed frames) reads as empty and ignores writes.
    pub(super) struct WebSessionStorage {
        storage: Option<web_sys::Storage>,
    }

    impl WebSessionStorage {
        pub(super) fn new() -> Self {
            let storage = web_sys::window().and_then(|window| window.session_storage().ok().flatten());
            if storage.is_none() {
                warn!("session storage is unavailable; submission state will not persist");
            }
            Self { storage }
        }
    }

    impl SessionStore for WebSessionStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            self.storage.as_ref()?.get_item(key).ok().flatten()
        }

        fn set_item(&mut self, key: &str, value: &str) {
            if let Some(storage) = self.storage.as_ref() {
                let _ = storage.set_item(key, value);
            }
        }

        fn remove_item(&mut self, key: &str) {
            if let Some(storage) = self.storage.as_ref() {
                let _ = storage.remove_item(key);
            }
        }
    }

    pub(super) fn navigation_state() -> NavigationState {
        NAVIGATION.with(|slot| {
            slot.borrow()
                .as_ref()
                .map(|controller| controller.state())
                .unwrap_or_default()
        })
    }

    pub(super) fn navigate_to_view(view: ViewId, options: NavigateOptions) {
        let outcome = NAVIGATION.with(|slot| {
            slot.borrow_mut()
                .as_mut()
                .map(|controller| controller.navigate_to(view, options))
        });
        match outcome {
            Some(Ok(NavigationOutcome::Pushed)) => {
                DIAGNOSTICS.with(|state| state.borrow_mut().navigation_pushes += 1);
                request_render();
            }
            Some(Ok(NavigationOutcome::Unchanged)) => {}
            Some(Err(error)) => warn!(%error, view = view.as_str(), "navigation failed"),
            None => warn!(view = view.as_str(), "navigation requested before boot completed"),
        }
    }

    pub(super) fn handle_address_change() {
        let changed = NAVIGATION.with(|slot| {
            slot.borrow_mut()
                .as_mut()
                .is_some_and(|controller| controller.on_address_change())
        });
        if changed {
            request_render();
        }
    }

    /// Drops `scrollTo` once the roster has scrolled to the requested model.
    pub(super) fn consume_deep_link() {
        let result = NAVIGATION.with(|slot| {
            slot.borrow_mut()
                .as_mut()
                .map(|controller| controller.on_deep_link_consumed())
        });
        if let Some(Ok(true)) = result {
            sync_route_diagnostics();
        }
    }

    pub(super) fn current_route_path() -> String {
        NAVIGATION.with(|slot| {
            slot.borrow().as_ref().map_or_else(
                || "/".to_string(),
                |controller| {
                    let address = controller.history().current_address();
                    controller.mode().route_part(&address).to_string()
                },
            )
        })
    }

    pub(super) fn install_shell_listeners() -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        listen_into(&SHELL_LISTENERS, &window, "popstate", |_event| {
            handle_address_change();
        })?;
        listen_into(&SHELL_LISTENERS, &window, "scroll", |_event| {
            sync_back_to_top_visibility();
        })?;
        Ok(())
    }
