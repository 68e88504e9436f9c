//! Staggered entrance animation for groups of sibling elements

use dd_core::{MotionConfig, RevealGroup, RevealTrigger};
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;

/// Reveal each direct child in turn
#[component]
pub fn Reveal(
    trigger: RevealTrigger,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    staggered(trigger, class, children().nodes)
}

/// Reveal a list built at runtime, one item at a time
#[component]
pub fn RevealEach(
    trigger: RevealTrigger,
    #[prop(optional)] class: &'static str,
    items: Vec<View>,
) -> impl IntoView {
    staggered(trigger, class, items)
}

fn staggered(trigger: RevealTrigger, class: &'static str, nodes: Vec<View>) -> impl IntoView {
    let motion = use_context::<MotionConfig>().unwrap_or_default();
    let group = create_rw_signal(RevealGroup::with_motion(trigger, nodes.len(), &motion));
    let container = create_node_ref::<html::Div>();

    // Scroll/resize handles, dropped as soon as the group reveals
    let listeners = store_value(Vec::<WindowListenerHandle>::new());
    let detach = move || {
        listeners.update_value(|handles| handles.drain(..).for_each(WindowListenerHandle::remove));
    };

    let check_viewport = move || {
        if !group.with_untracked(RevealGroup::is_watching) {
            detach();
            return;
        }
        let Some(el) = container.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let intersecting = rect.top() < viewport && rect.bottom() > 0.0;
        let fired = group.try_update(|g| g.observe(intersecting)).unwrap_or(false);
        if fired {
            detach();
        }
    };

    // Effects only run in the browser, after the container is mounted
    create_effect(move |_| {
        if container.get().is_none() {
            return;
        }
        group.update(|g| {
            g.mount();
        });

        check_viewport();
        if group.with_untracked(RevealGroup::is_watching) {
            listeners.update_value(|handles| {
                handles.push(window_event_listener(ev::scroll, move |_| check_viewport()));
                handles.push(window_event_listener(ev::resize, move |_| check_viewport()));
            });
            on_cleanup(detach);
        }
    });

    let visible = move || group.with(RevealGroup::is_visible);
    let duration = motion.reveal_duration().as_millis();
    let delays: Vec<u128> = group.with_untracked(|g| g.schedule().map(|d| d.as_millis()).collect());

    view! {
        <div node_ref=container class=class>
            {nodes
                .into_iter()
                .zip(delays)
                .map(|(child, delay)| view! {
                    <div
                        class=move || if visible() {
                            "transition-all ease-out opacity-100 translate-y-0"
                        } else {
                            "transition-all ease-out opacity-0 translate-y-6"
                        }
                        style=format!("transition-duration: {}ms; transition-delay: {}ms", duration, delay)
                    >
                        {child}
                    </div>
                })
                .collect_view()}
        </div>
    }
}
