//! Log Panel Component
//!
//! Collapsible view of the records kept by the rolling logger.

use leptos::prelude::*;
use rolling_logger::LogEntry;

/// Rows shown per refresh
const MAX_ROWS: usize = 100;

/// Newest first, at most `limit` lines
fn log_lines(entries: &[LogEntry], limit: usize) -> Vec<String> {
    entries.iter().rev().take(limit).map(ToString::to_string).collect()
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move |_: web_sys::MouseEvent| set_lines.set(log_lines(&rolling_logger::recent(), MAX_ROWS));

    view! {
        <details class="log-panel">
            <summary>"日志"</summary>
            <button type="button" on:click=refresh>"刷新"</button>
            <pre class="log-lines">
                {move || lines.get().join("\n")}
            </pre>
        </details>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use log::Level;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Local::now(),
            level: Level::Info,
            target: "tier_maker_ui::board".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_log_lines_newest_first() {
        let entries = vec![entry("first"), entry("second"), entry("third")];
        let lines = log_lines(&entries, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("tier_maker_ui::board: third"));
        assert!(lines[1].ends_with("second"));
        assert!(log_lines(&[], 10).is_empty());
    }
}
