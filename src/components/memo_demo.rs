//! Memo & Callback Demo

use leptos::prelude::*;

use super::Card;
use crate::config::{MEMO_MAX, MEMO_MIN};

/// Slider value parsed and clamped to the allowed range
pub fn parse_count(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .unwrap_or(MEMO_MIN)
        .clamp(MEMO_MIN, MEMO_MAX)
}

pub fn squares(items: &[u32]) -> Vec<u32> {
    items.iter().map(|x| x * x).collect()
}

#[component]
fn ExpensiveList(items: Memo<Vec<u32>>, on_pick: Callback<u32>) -> impl IntoView {
    let computed = Memo::new(move |_| items.with(|items| squares(items)));

    view! {
        <ul>
            <For each=move || computed.get() key=|x| *x let:x>
                <li>
                    <button on:click=move |_| on_pick.run(x)>{x}</button>
                </li>
            </For>
        </ul>
    }
}

#[component]
pub fn MemoCallbackDemo() -> impl IntoView {
    let (n, set_n) = signal(5u32);
    let (picked, set_picked) = signal::<Option<u32>>(None);
    let list = Memo::new(move |_| (1..=n.get()).collect::<Vec<u32>>());
    let on_pick = Callback::new(move |value: u32| set_picked.set(Some(value)));

    view! {
        <Card title="Memo & Callback">
            <p>
                <code>"Memo"</code> " caches derived values; " <code>"Callback"</code>
                " gives children a stable handler."
            </p>
            <div class="row">
                <label>"Items: "</label>
                <input
                    type="range"
                    min=MEMO_MIN.to_string()
                    max=MEMO_MAX.to_string()
                    prop:value=move || n.get().to_string()
                    on:input=move |ev| set_n.set(parse_count(&event_target_value(&ev)))
                />
                <span class="slider-value">{n}</span>
            </div>
            <ExpensiveList items=list on_pick=on_pick />
            {move || picked.get().map(|v| view! { <p>"You picked: " {v}</p> })}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_clamps() {
        assert_eq!(parse_count("7"), 7);
        assert_eq!(parse_count("0"), MEMO_MIN);
        assert_eq!(parse_count("500"), MEMO_MAX);
        assert_eq!(parse_count("abc"), MEMO_MIN);
    }

    #[test]
    fn test_squares() {
        assert_eq!(squares(&[1, 2, 3]), vec![1, 4, 9]);
        assert!(squares(&[]).is_empty());
    }
}
