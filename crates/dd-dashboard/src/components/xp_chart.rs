//! XP area chart

use dd_core::{AreaChart, XpPoint};
use leptos::*;

const WIDTH: f64 = 300.0;
const HEIGHT: f64 = 120.0;

#[component]
pub fn XpChart(#[prop(into)] points: Signal<Vec<XpPoint>>) -> impl IntoView {
    let chart = create_memo(move |_| points.with(|p| AreaChart::new(p, WIDTH, HEIGHT)));

    view! {
        <Show
            when=move || !chart.with(AreaChart::is_empty)
            fallback=|| view! { <p class="text-gray-500">"No XP earned yet"</p> }
        >
            <svg viewBox=format!("0 -10 {} {}", WIDTH, HEIGHT + 30.0) class="w-full h-48">
                <defs>
                    <linearGradient id="xp-fill" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0%" stop-color="#6366f1" stop-opacity="0.4"/>
                        <stop offset="100%" stop-color="#6366f1" stop-opacity="0"/>
                    </linearGradient>
                </defs>
                <path d=move || chart.with(|c| c.area_path.clone()) fill="url(#xp-fill)"/>
                <path
                    d=move || chart.with(|c| c.line_path.clone())
                    fill="none"
                    stroke="#6366f1"
                    stroke-width="2"
                />
                <text x="0" y="-2" class="text-[8px] fill-gray-400">
                    {move || format!("{} XP", chart.with(|c| c.y_max))}
                </text>
                {move || chart.with(|c| {
                    c.labels
                        .iter()
                        .map(|(x, label)| view! {
                            <text
                                x=*x
                                y=HEIGHT + 15.0
                                text-anchor="middle"
                                class="text-[8px] fill-gray-500"
                            >
                                {label.clone()}
                            </text>
                        })
                        .collect_view()
                })}
            </svg>
        </Show>
    }
}
