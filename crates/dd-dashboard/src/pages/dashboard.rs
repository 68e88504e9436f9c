//! Dashboard overview page

use dd_core::{HoverCardContent, XpPoint};
use leptos::*;

use crate::components::*;

#[component]
pub fn Dashboard() -> impl IntoView {
    let (stats, set_stats) = create_signal(DashboardStats::default());
    let (xp, set_xp) = create_signal(Vec::<XpPoint>::new());

    // Fetch stats on mount
    create_effect(move |_| {
        spawn_local(async move {
            match fetch_stats().await {
                Ok(data) => set_stats.set(data),
                Err(()) => tracing::warn!("failed to load dashboard stats"),
            }
            if let Ok(data) = fetch_weekly_xp().await {
                set_xp.set(data);
            }
        });
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Dashboard"</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard
                    title="Doubts Asked"
                    value=move || stats.get().doubts_asked.to_string()
                    icon="❓"
                />
                <StatCard
                    title="Resolved"
                    value=move || stats.get().doubts_resolved.to_string()
                    icon="✓"
                />
                <StatCard
                    title="Day Streak"
                    value=move || stats.get().streak_days.to_string()
                    icon="🔥"
                />
                <StatCard
                    title="Total XP"
                    value=move || stats.get().total_xp.to_string()
                    icon="⭐"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">"XP This Week"</h2>
                    <XpChart points=xp/>
                </div>
                <div class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">"Your Subjects"</h2>
                    <SubjectStrip/>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"Recent Doubts"</h2>
                <RecentDoubts/>
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    value: impl Fn() -> String + 'static,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500">{title}</p>
                    <p class="text-2xl font-bold text-gray-900">{value}</p>
                </div>
                <div class="w-12 h-12 bg-indigo-100 rounded-full flex items-center justify-center">
                    <span class="text-indigo-600">{icon}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SubjectStrip() -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-4 pt-24">
            {subjects()
                .into_iter()
                .map(|subject| {
                    let initial = subject.name.chars().next().unwrap_or('?').to_string();
                    let color = subject.color.clone();
                    view! {
                        <HoverCard content=subject>
                            <button
                                type="button"
                                class="w-12 h-12 rounded-full text-white font-bold flex items-center justify-center"
                                style=format!("background-color: {}", color)
                            >
                                {initial}
                            </button>
                        </HoverCard>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn RecentDoubts() -> impl IntoView {
    let (doubts, set_doubts) = create_signal(Vec::<Doubt>::new());

    create_effect(move |_| {
        spawn_local(async move {
            if let Ok(data) = fetch_recent_doubts().await {
                set_doubts.set(data);
            }
        });
    });

    view! {
        <div class="space-y-4">
            <For
                each=move || doubts.get()
                key=|doubt| doubt.id.clone()
                children=move |doubt| {
                    view! {
                        <DoubtPreview
                            title=doubt.title
                            body=doubt.body
                            subject=doubt.subject
                            resolved=doubt.resolved
                        />
                    }
                }
            />
        </div>
    }
}

#[derive(Clone, Default)]
struct DashboardStats {
    doubts_asked: i64,
    doubts_resolved: i64,
    streak_days: i64,
    total_xp: i64,
}

#[derive(Clone)]
struct Doubt {
    id: String,
    title: String,
    body: String,
    subject: String,
    resolved: bool,
}

fn subjects() -> Vec<HoverCardContent> {
    vec![
        HoverCardContent {
            name: "Calculus".to_string(),
            description: "Limits, derivatives, integrals and series.".to_string(),
            icon: Some("/assets/subjects/calculus.svg".to_string()),
            color: "#6366f1".to_string(),
        },
        HoverCardContent {
            name: "Organic Chemistry".to_string(),
            description: "Reaction mechanisms, functional groups and synthesis.".to_string(),
            icon: Some("/assets/subjects/chemistry.svg".to_string()),
            color: "#10b981".to_string(),
        },
        HoverCardContent {
            name: "Classical Mechanics".to_string(),
            description: "Newton's laws, energy, momentum and rotation.".to_string(),
            icon: None,
            color: "#f59e0b".to_string(),
        },
    ]
}

async fn fetch_stats() -> Result<DashboardStats, ()> {
    // In production, fetch from API
    Ok(DashboardStats {
        doubts_asked: 37,
        doubts_resolved: 33,
        streak_days: 6,
        total_xp: 1240,
    })
}

async fn fetch_weekly_xp() -> Result<Vec<XpPoint>, ()> {
    Ok(vec![
        XpPoint::new("Mon", 40),
        XpPoint::new("Tue", 85),
        XpPoint::new("Wed", 60),
        XpPoint::new("Thu", 120),
        XpPoint::new("Fri", 95),
        XpPoint::new("Sat", 30),
        XpPoint::new("Sun", 110),
    ])
}

async fn fetch_recent_doubts() -> Result<Vec<Doubt>, ()> {
    Ok(vec![
        Doubt {
            id: "1".to_string(),
            title: "Integration by parts twice?".to_string(),
            body: "How do I evaluate **∫ eˣ sin x dx**? I keep going in circles when I apply integration by parts a second time.".to_string(),
            subject: "Calculus".to_string(),
            resolved: true,
        },
        Doubt {
            id: "2".to_string(),
            title: "SN1 vs SN2".to_string(),
            body: "## Question\nWhy does a *tertiary* halide prefer SN1 even with a strong nucleophile?".to_string(),
            subject: "Organic Chemistry".to_string(),
            resolved: false,
        },
    ])
}
