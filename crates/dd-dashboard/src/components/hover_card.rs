//! Hover card anchored above an icon

use dd_core::{HoverCardContent, HoverCardState, MotionConfig};
use leptos::*;

/// Shows `content` above the wrapped anchor while the pointer is over it
#[component]
pub fn HoverCard(content: HoverCardContent, children: Children) -> impl IntoView {
    let state = create_rw_signal(HoverCardState::default());
    let motion = use_context::<MotionConfig>().unwrap_or_default();

    let transition = format!("transition-duration: {}ms", motion.hover_transition_ms);
    let card_style = content.card_style();
    let pointer_style = content.pointer_style();
    let href = content.search_url();
    let icon = content.icon_src().to_string();
    let HoverCardContent { name, description, .. } = content;

    view! {
        <div
            class="relative inline-block"
            on:mouseenter=move |_| state.update(HoverCardState::pointer_enter)
            on:mouseleave=move |_| state.update(HoverCardState::pointer_leave)
        >
            {children()}
            <div
                class=move || format!(
                    "absolute bottom-full left-1/2 -translate-x-1/2 mb-3 w-64 z-20 transform transition-all {}",
                    state.with(|s| s.transition_class())
                )
                style=transition
                role="tooltip"
            >
                <div class="relative bg-white rounded-lg border p-4" style=card_style>
                    <div class="flex items-center mb-2">
                        <img src=icon alt=name.clone() class="w-8 h-8 mr-3"/>
                        <h4 class="font-semibold text-gray-900">{name}</h4>
                    </div>
                    <p class="text-sm text-gray-600 mb-3">{description}</p>
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class=move || format!(
                            "text-sm font-medium text-indigo-600 transition-opacity {}",
                            state.with(|s| s.link_class())
                        )
                        on:mouseenter=move |_| state.update(HoverCardState::link_enter)
                        on:mouseleave=move |_| state.update(HoverCardState::link_leave)
                    >
                        "Learn more →"
                    </a>
                    // Pointer: accent border under a white fill
                    <span
                        class="absolute top-full left-1/2 -translate-x-1/2 w-0 h-0 border-x-8 border-x-transparent border-t-8"
                        style=pointer_style
                    />
                    <span class="absolute top-full left-1/2 -translate-x-1/2 -mt-px w-0 h-0 border-x-[7px] border-x-transparent border-t-[7px] border-t-white"/>
                </div>
            </div>
        </div>
    }
}
