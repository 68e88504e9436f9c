//! Doubt preview

use dd_core::preview::excerpt;
use leptos::*;

const PREVIEW_CHARS: usize = 140;

#[component]
pub fn DoubtPreview(
    title: String,
    body: String,
    subject: String,
    resolved: bool,
) -> impl IntoView {
    let (bg, text, label) = if resolved {
        ("bg-green-100", "text-green-800", "resolved")
    } else {
        ("bg-yellow-100", "text-yellow-800", "open")
    };

    view! {
        <div class="bg-white rounded-lg shadow p-4 hover:shadow-md transition-shadow">
            <div class="flex justify-between items-start">
                <h3 class="font-medium text-gray-900">{title}</h3>
                <span class=format!("px-2 py-1 text-xs font-medium rounded-full {} {}", bg, text)>
                    {label}
                </span>
            </div>
            <p class="mt-2 text-sm text-gray-600">{excerpt(&body, PREVIEW_CHARS)}</p>
            <p class="mt-2 text-xs text-gray-400">{subject}</p>
        </div>
    }
}
