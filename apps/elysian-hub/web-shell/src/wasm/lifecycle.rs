use super::*;

    pub(super) fn ensure_shell_dom() -> Result<(), String> {
        let document = document()?;
        let body = document
            .body()
            .ok_or_else(|| "document body is unavailable".to_string())?;

        if document.get_element_by_id(SHELL_STYLE_ID).is_none() {
            let style = append_text(&document, &body, "style", "", SHELL_STYLESHEET)?;
            style.set_id(SHELL_STYLE_ID);
        }

        if document.get_element_by_id(SHELL_HEADER_ID).is_none() {
            let header = create_element(&document, "nav", "elysian-header")?;
            header.set_id(SHELL_HEADER_ID);
            set_styles(&header, &[("position", "sticky"), ("top", "0"), ("z-index", "50")])?;
            append(&body, &header)?;
        }

        if document.get_element_by_id(SHELL_MAIN_ID).is_none() {
            let main = create_element(&document, "main", "elysian-main")?;
            main.set_id(SHELL_MAIN_ID);
            append(&body, &main)?;
        }

        if document.get_element_by_id(SHELL_FOOTER_ID).is_none() {
            let footer = create_element(&document, "footer", "elysian-footer")?;
            footer.set_id(SHELL_FOOTER_ID);
            append_text(
                &document,
                &footer,
                "p",
                "elysian-footer-copy",
                "\u{a9} Elysian Talent Hub. All rights reserved.",
            )?;
            let status = append_text(&document, &footer, "div", "elysian-boot-status", "Boot: starting")?;
            status.set_id(SHELL_STATUS_ID);
            set_styles(&status, &[("font-family", "monospace"), ("font-size", "11px"), ("color", "#94a3b8")])?;
            append(&body, &footer)?;
        }

        ensure_back_to_top_button(&document, &body)?;
        Ok(())
    }

    pub(super) fn set_boot_phase(phase: &str, detail: &str) {
        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.phase = phase.to_string();
            state.detail = detail.to_string();
            if phase != "error" {
                state.last_error = None;
            }
        });
        update_status_dom(phase, detail, false);
    }

    pub(super) fn set_boot_error(message: &str) {
        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.phase = "error".to_string();
            state.detail = "startup failed".to_string();
            state.last_error = Some(message.to_string());
        });
        update_status_dom("error", message, true);
    }

    pub(super) fn update_status_dom(phase: &str, detail: &str, is_error: bool) {
        let Some(status) = element_by_id::<HtmlElement>(SHELL_STATUS_ID) else {
            return;
        };
        let label = if is_error { "Boot error" } else { "Boot" };
        status.set_inner_text(&format!("{label}: {phase} ({detail})"));
        let color = if is_error { "#f87171" } else { "#94a3b8" };
        let _ = status.style().set_property("color", color);
    }

    pub(super) fn record_dom_ready(elapsed: Duration) {
        DIAGNOSTICS.with(|state| {
            state.borrow_mut().dom_ready_latency_ms = Some(elapsed.as_millis() as u64);
        });
    }

    pub(super) fn record_submission(result: &Result<(), ApplyError>) {
        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.submissions += 1;
            if let Err(error) = result {
                state.submission_failures += 1;
                state.last_error = Some(error.to_string());
            }
        });
    }

    pub(super) fn sync_route_diagnostics() {
        let route_path = current_route_path();
        let active_view = navigation_state().active_view;
        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.route_path = route_path;
            state.active_view = active_view.as_str().to_string();
        });
    }

    /// Defaults, or the validated `window.__ELYSIAN_CONFIG__` override. A
    /// rejected override is handed back so it can be logged once tracing is up.
    pub(super) fn load_shell_config() -> (ShellConfig, Option<ConfigError>) {
        let Some(raw) = read_config_override() else {
            return (ShellConfig::default(), None);
        };
        match ShellConfig::from_json_override(&raw) {
            Ok(config) => {
                DIAGNOSTICS.with(|state| state.borrow_mut().config_source = "override".to_string());
                (config, None)
            }
            Err(error) => (ShellConfig::default(), Some(error)),
        }
    }

    fn read_config_override() -> Option<String> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_OVERRIDE_GLOBAL)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        if let Some(raw) = value.as_string() {
            return Some(raw);
        }
        js_sys::JSON::stringify(&value).ok()?.as_string()
    }

    pub(super) fn install_tracing(filter: &str) {
        let filter = tracing_subscriber::EnvFilter::try_new(filter)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .without_time()
            .with_writer(ConsoleMakeWriter)
            .try_init();
    }

    /// Hands each formatted event to the matching `console` method.
    pub(super) struct ConsoleMakeWriter;

    pub(super) struct ConsoleWriter {
        buffer: LineBuffer,
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                buffer: LineBuffer::default(),
            }
        }
    }

    impl std::io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
            for line in self.buffer.push(bytes) {
                emit_console_line(&line);
            }
            Ok(bytes.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if let Some(rest) = self.buffer.flush() {
                emit_console_line(&rest);
            }
        }
    }

    fn emit_console_line(line: &str) {
        let level = console_level_for_line(line);
        let line = JsValue::from_str(line);
        match level {
            ConsoleLevel::Error => web_sys::console::error_1(&line),
            ConsoleLevel::Warn => web_sys::console::warn_1(&line),
            ConsoleLevel::Info => web_sys::console::info_1(&line),
            ConsoleLevel::Debug => web_sys::console::debug_1(&line),
        }
    }

    pub(super) fn should_force_boot_failure() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Ok(search) = window.location().search() else {
            return false;
        };
        search.contains(BOOT_FAIL_QUERY)
    }

    pub(super) fn now_unix_ms() -> u64 {
        let now = js_sys::Date::now();
        if !now.is_finite() || now.is_sign_negative() {
            return 0;
        }
        now.floor().min(u64::MAX as f64) as u64
    }
