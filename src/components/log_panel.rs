//! Log Panel
//!
//! Shows the tail of the app logger's ring buffer.

use leptos::prelude::*;

use super::Card;
use crate::config::LOG_PANEL_LINES;

/// Last `n` lines, oldest first
pub fn tail(lines: &[String], n: usize) -> &[String] {
    &lines[lines.len().saturating_sub(n)..]
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(console_logger::recent_lines());

    view! {
        <Card title="Recent logs">
            <p>"Lines captured by the app logger."</p>
            <button on:click=move |_| set_lines.set(console_logger::recent_lines())>"Refresh"</button>
            <Show
                when=move || lines.with(|l| !l.is_empty())
                fallback=|| view! { <p class="muted">"Nothing logged yet."</p> }
            >
                <pre class="log-panel">{move || lines.with(|l| tail(l, LOG_PANEL_LINES).join("\n"))}</pre>
            </Show>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_keeps_newest() {
        let lines: Vec<String> = (0..5).map(|i| format!("line {}", i)).collect();
        assert_eq!(tail(&lines, 2), ["line 3", "line 4"]);
        assert_eq!(tail(&lines, 10).len(), 5);
        assert!(tail(&[], 3).is_empty());
    }
}
