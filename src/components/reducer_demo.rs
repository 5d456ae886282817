//! Reducer Demo
//!
//! Todo list driven by `TodoList::reduce`.

use leptos::prelude::*;

use super::Card;
use crate::todos::{TimestampIds, TodoAction, TodoList};

#[component]
pub fn ReducerDemo() -> impl IntoView {
    let (todos, set_todos) = signal(TodoList::new());
    let (text, set_text) = signal(String::new());
    let ids = StoredValue::new(TimestampIds::default());

    let dispatch = move |action: TodoAction| {
        log::debug!("todo action {:?}", action);
        set_todos.update(|list| *list = std::mem::take(list).reduce(action));
    };

    let add = move || {
        let mut action = None;
        ids.update_value(|ids| action = Some(TodoAction::add(text.get_untracked(), ids)));
        if let Some(action) = action {
            dispatch(action);
        }
        set_text.set(String::new());
    };

    view! {
        <Card title="Reducer (complex state)">
            <div class="todo-input-row">
                <input
                    type="text"
                    placeholder="Add a todo"
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add();
                        }
                    }
                />
                <button on:click=move |_| add()>"Add"</button>
            </div>

            <Show
                when=move || !todos.with(TodoList::is_empty)
                fallback=|| view! { <p class="muted">"No items yet. Add one above."</p> }
            >
                <ul class="todo-list">
                    // keyed on `done` too so a toggled row re-renders
                    <For
                        each=move || todos.with(|l| l.items().to_vec())
                        key=|t| (t.id, t.done)
                        let:todo
                    >
                        <li>
                            <label class="todo-item">
                                <input
                                    type="checkbox"
                                    prop:checked=todo.done
                                    on:change=move |_| dispatch(TodoAction::Toggle { id: todo.id })
                                />
                                <span class:done=todo.done>{todo.text.clone()}</span>
                            </label>
                        </li>
                    </For>
                </ul>
            </Show>

            <div class="todo-actions">
                <button on:click=move |_| dispatch(TodoAction::ClearDone)>"Clear done"</button>
                <button on:click=move |_| dispatch(TodoAction::ClearAll)>"Clear all"</button>
                <span class="todo-stats">
                    "Total: " <b>{move || todos.with(TodoList::len)}</b>
                    " · Done: " <b>{move || todos.with(TodoList::done_count)}</b>
                </span>
            </div>
        </Card>
    }
}
