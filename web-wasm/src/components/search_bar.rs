//! 検索フォーム
//!
//! 入力は draft だけを更新し、送信で初めて検索語になる。

use leptos::prelude::*;

#[component]
pub fn SearchBar<FI, FS>(
    draft: Signal<String>,
    on_input: FI,
    on_submit: FS,
) -> impl IntoView
where
    FI: Fn(String) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
{
    view! {
        <form
            class="search-bar"
            on:submit={
                let on_submit = on_submit.clone();
                move |ev| {
                    ev.prevent_default();
                    on_submit(());
                }
            }
        >
            <input
                type="text"
                placeholder="Search for movies..."
                prop:value=move || draft.get()
                on:input={
                    let on_input = on_input.clone();
                    move |ev| on_input(event_target_value(&ev))
                }
            />
            <button type="submit" class="btn btn-primary">"Search"</button>
        </form>
    }
}
