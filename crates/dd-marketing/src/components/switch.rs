//! Toggle switch primitive

use leptos::*;

#[component]
pub fn Switch(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(optional)] label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            aria-label=label
            aria-checked=move || checked.get().to_string()
            class=move || format!(
                "relative inline-flex h-7 w-12 items-center rounded-full transition-colors {}",
                if checked.get() { "bg-indigo-600" } else { "bg-gray-300" }
            )
            on:click=move |_| on_toggle.call(())
        >
            <span class=move || format!(
                "inline-block h-5 w-5 transform rounded-full bg-white shadow transition-transform {}",
                if checked.get() { "translate-x-6" } else { "translate-x-1" }
            )/>
        </button>
    }
}
