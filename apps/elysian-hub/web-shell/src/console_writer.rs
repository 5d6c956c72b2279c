//! Line assembly for routing formatted tracing output into the browser console.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConsoleLevel {
    Error,
    Warn,
    Info,
    Debug,
}

/// Console method for a line produced by the fmt layer. Lines start with the
/// padded level name when timestamps and ANSI colors are off.
pub(crate) fn console_level_for_line(line: &str) -> ConsoleLevel {
    let Some(level) = line.split_whitespace().next() else {
        return ConsoleLevel::Info;
    };
    match level {
        "ERROR" => ConsoleLevel::Error,
        "WARN" => ConsoleLevel::Warn,
        "DEBUG" | "TRACE" => ConsoleLevel::Debug,
        _ => ConsoleLevel::Info,
    }
}

/// Collects bytes and yields complete lines.
#[derive(Debug, Default)]
pub(crate) struct LineBuffer {
    pending: String,
}

impl LineBuffer {
    pub(crate) fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.pending.push_str(&String::from_utf8_lossy(bytes));
        let mut lines = Vec::new();
        while let Some(index) = self.pending.find('\n') {
            let line = self.pending[..index].trim_end_matches('\r').to_string();
            self.pending.replace_range(..=index, "");
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        lines
    }

    /// Whatever is left without a trailing newline.
    pub(crate) fn flush(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.pending);
        if rest.trim().is_empty() { None } else { Some(rest) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_follow_the_line_prefix() {
        assert_eq!(
            console_level_for_line("ERROR elysian_app_state::apply: failed"),
            ConsoleLevel::Error
        );
        assert_eq!(console_level_for_line(" WARN tour: anchor missing"), ConsoleLevel::Warn);
        assert_eq!(console_level_for_line("DEBUG nav: pushed"), ConsoleLevel::Debug);
        assert_eq!(console_level_for_line(" INFO boot: ready"), ConsoleLevel::Info);
        assert_eq!(console_level_for_line(""), ConsoleLevel::Info);
    }

    #[test]
    fn partial_writes_join_into_lines() {
        let mut buffer = LineBuffer::default();
        assert!(buffer.push(b" INFO boot: ").is_empty());
        assert_eq!(buffer.push(b"ready\r\n\nDEBUG x"), vec![" INFO boot: ready".to_string()]);
        assert_eq!(buffer.flush(), Some("DEBUG x".to_string()));
        assert_eq!(buffer.flush(), None);
    }
}
