//! Pricing page

use dd_core::matrix::{CellValue, Emphasis, FeatureRow};
use dd_core::projector::project;
use dd_core::{ComparisonTable, CoreResult, FeatureMatrix, Plan, PlanCatalog, RevealTrigger};
use leptos::*;

use crate::components::*;
use crate::state::BillingStore;

fn load_matrix(catalog: &PlanCatalog) -> CoreResult<FeatureMatrix> {
    catalog.validate()?;
    FeatureMatrix::build(catalog, ComparisonTable::standard())
}

#[component]
pub fn PricingPage() -> impl IntoView {
    BillingStore::provide();
    let catalog = PlanCatalog::standard();

    match load_matrix(catalog) {
        Ok(matrix) => {
            let comparison = matrix.comparison.clone();
            let highlighted = catalog.highlighted().map(|p| p.name.clone());
            view! {
                <div>
                    <PricingHero/>
                    <PlanCards catalog=catalog matrix=matrix/>
                    <ComparisonSection table=comparison highlighted=highlighted/>
                    <FaqSection/>
                    <CtaSection catalog=catalog/>
                </div>
            }
            .into_view()
        }
        Err(err) => {
            tracing::error!(error = %err, "not rendering pricing with invalid content");
            view! {
                <section class="py-20 text-center text-gray-600">
                    "Pricing is temporarily unavailable."
                </section>
            }
            .into_view()
        }
    }
}

#[component]
fn PricingHero() -> impl IntoView {
    let store = BillingStore::use_store();
    let yearly = store.is_yearly();

    let label_class = move |active: bool| {
        if active {
            "font-semibold text-white"
        } else {
            "text-indigo-200"
        }
    };

    view! {
        <section class="bg-gradient-to-br from-indigo-900 via-purple-900 to-indigo-800 text-white py-20">
            <Reveal trigger=RevealTrigger::Immediate class="container mx-auto px-4 max-w-3xl text-center">
                <h1 class="text-4xl md:text-5xl font-bold mb-6">"Simple Pricing for Every Doubt"</h1>
                <p class="text-xl text-indigo-100 mb-10">
                    "Start free. Upgrade when you need faster expert answers or live tutoring."
                </p>
                <div class="flex items-center justify-center space-x-4">
                    <span class=move || label_class(!yearly.get())>"Monthly"</span>
                    <Switch
                        checked=yearly
                        on_toggle=move |_| store.toggle()
                        label="Bill yearly"
                    />
                    <span class=move || label_class(yearly.get())>"Yearly"</span>
                    <span class="px-3 py-1 bg-white/20 rounded-full text-sm font-medium">
                        "Save with annual billing"
                    </span>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn PlanCards(catalog: &'static PlanCatalog, matrix: FeatureMatrix) -> impl IntoView {
    let cards = catalog
        .plans
        .iter()
        .map(|plan| {
            let features = matrix.card(&plan.name).to_vec();
            view! { <PlanCard plan=plan features=features/> }.into_view()
        })
        .collect::<Vec<_>>();

    view! {
        <section class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <RevealEach
                    trigger=RevealTrigger::Immediate
                    class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto items-center"
                    items=cards
                />
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static Plan, features: Vec<FeatureRow>) -> impl IntoView {
    let store = BillingStore::use_store();
    let price = create_memo(move |_| project(plan, store.current()));
    let on_dark = plan.highlight;

    let (card_class, muted_class, variant) = if on_dark {
        (
            "bg-gradient-to-b from-indigo-600 to-purple-700 rounded-xl shadow-xl p-8 text-white transform md:scale-105",
            "text-indigo-200",
            ButtonVariant::Light,
        )
    } else if plan.is_free() {
        ("bg-white rounded-xl shadow-lg p-8", "text-gray-500", ButtonVariant::Secondary)
    } else {
        ("bg-white rounded-xl shadow-lg p-8", "text-gray-500", ButtonVariant::Dark)
    };

    view! {
        <div class=card_class>
            <div class="text-center mb-8">
                {on_dark.then(|| view! {
                    <span class="inline-block px-3 py-1 bg-white/20 rounded-full text-sm font-medium mb-4">
                        "Most Popular"
                    </span>
                })}
                <h3 class="text-xl font-semibold mb-2">{plan.name.clone()}</h3>
                <div class="text-4xl font-bold mb-1">
                    {move || price.with(|p| p.price_text.clone())}
                    <span class=format!("text-lg font-normal {}", muted_class)>
                        {move || format!("/{}", price.with(|p| p.period_label))}
                    </span>
                </div>
                <p class=muted_class>{plan.description.clone()}</p>
            </div>
            <ul class="space-y-4 mb-8">
                {features
                    .into_iter()
                    .map(|row| view! { <PricingFeature row=row on_dark=on_dark/> })
                    .collect_view()}
            </ul>
            <Button
                label=Signal::derive(move || price.with(|p| p.cta_label.to_string()))
                variant=variant
                href=format!("/signup?plan={}", plan.name.to_lowercase())
                full_width=true
            />
        </div>
    }
}

#[component]
fn PricingFeature(row: FeatureRow, on_dark: bool) -> impl IntoView {
    let glyph_style = match (row.included, on_dark) {
        (true, false) => "text-green-500",
        (false, false) => "text-gray-300",
        (true, true) => "text-green-300",
        (false, true) => "text-indigo-300",
    };
    let text_style = match (row.emphasis(), on_dark) {
        (Emphasis::Emphasized, false) => "text-gray-700",
        (Emphasis::Muted, false) => "text-gray-400",
        (Emphasis::Emphasized, true) => "text-white",
        (Emphasis::Muted, true) => "text-indigo-200",
    };

    view! {
        <li class="flex items-center">
            <span class=format!("{} mr-3 font-bold", glyph_style)>{row.glyph()}</span>
            <span class=text_style>{row.name}</span>
        </li>
    }
}

#[component]
fn ComparisonSection(table: ComparisonTable, highlighted: Option<String>) -> impl IntoView {
    let header_class = |name: &str| {
        if highlighted.as_deref() == Some(name) {
            "px-6 py-4 text-center font-semibold text-indigo-600 bg-indigo-50"
        } else {
            "px-6 py-4 text-center font-semibold text-gray-900"
        }
    };
    let headers = table
        .plan_names
        .iter()
        .map(|name| view! { <th class=header_class(name)>{name.clone()}</th> })
        .collect_view();
    let rows = (0..table.rows.len())
        .map(|i| {
            view! {
                <tr class="border-t border-gray-200">
                    <td class="px-6 py-4 text-gray-700">{table.rows[i].label.clone()}</td>
                    {table
                        .row_cells(i)
                        .into_iter()
                        .map(|value| view! { <ComparisonCell value=value/> })
                        .collect_view()}
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">"Compare Plans"</h2>
                <Reveal trigger=RevealTrigger::ViewportEntry class="max-w-5xl mx-auto overflow-x-auto">
                    <table class="min-w-full">
                        <thead>
                            <tr>
                                <th class="px-6 py-4 text-left font-semibold text-gray-900">"Feature"</th>
                                {headers}
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ComparisonCell(value: CellValue) -> impl IntoView {
    let (text, class) = match value {
        CellValue::Flag(true) => ("✓".to_string(), "text-green-500 font-bold"),
        CellValue::Flag(false) => ("−".to_string(), "text-gray-300 font-bold"),
        CellValue::Text(text) => (text, "text-gray-700"),
        CellValue::Empty => (String::new(), ""),
    };

    view! {
        <td class=format!("px-6 py-4 text-center {}", class)>{text}</td>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto">
                    <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">"Frequently Asked Questions"</h2>
                    <Reveal trigger=RevealTrigger::ViewportEntry class="space-y-6">
                        <FaqItem
                            question="What counts as a doubt?"
                            answer="A doubt is a single question you submit, in text or as a photo. Follow-up messages on the same doubt are free."
                        />
                        <FaqItem
                            question="Who answers my doubts?"
                            answer="Verified subject experts. Free plan doubts may also be answered by the community."
                        />
                        <FaqItem
                            question="Can I switch between monthly and yearly billing?"
                            answer="Yes. You can change your billing period at any time and the new price applies from your next billing date."
                        />
                        <FaqItem
                            question="How do live tutoring sessions work?"
                            answer="Premium members book 1:1 video sessions with a tutor. Unused hours do not roll over."
                        />
                        <FaqItem
                            question="Can I cancel anytime?"
                            answer="Absolutely. Cancel from your account settings and keep access until the end of the paid period."
                        />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    view! {
        <div class="border-b border-gray-200 pb-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{question}</h3>
            <p class="text-gray-600">{answer}</p>
        </div>
    }
}

#[component]
fn CtaSection(catalog: &'static PlanCatalog) -> impl IntoView {
    let store = BillingStore::use_store();
    let featured = catalog.highlighted().or_else(|| catalog.plans.last());
    let pitch = move || {
        featured
            .map(|plan| {
                let view = project(plan, store.current());
                format!("{} is just {}/{}.", plan.name, view.price_text, view.period_label)
            })
            .unwrap_or_default()
    };
    let label = featured
        .map(|plan| format!("Start with {}", plan.name))
        .unwrap_or_else(|| "Get Started".to_string());

    view! {
        <section class="py-20 bg-gradient-to-r from-indigo-600 to-purple-600 text-white">
            <Reveal trigger=RevealTrigger::ViewportEntry class="container mx-auto px-4 text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">"Stop Getting Stuck on Homework"</h2>
                <p class="text-xl text-indigo-100 mb-8 max-w-2xl mx-auto">{pitch}</p>
                <Button label=label variant=ButtonVariant::Light href="/signup"/>
            </Reveal>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(view: impl IntoView) -> String {
        view.into_view().render_to_string().to_string()
    }

    #[test]
    fn test_pricing_page_marks_one_plan_most_popular() {
        let html = leptos::ssr::render_to_string(|| view! { <PricingPage/> }).to_string();

        assert_eq!(html.matches("Most Popular").count(), 1);
        assert_eq!(html.matches("from-indigo-600 to-purple-700").count(), 1);
        assert!(!html.contains("Pricing is temporarily unavailable"));
    }

    #[test]
    fn test_most_popular_badge_is_on_pro_card() {
        let runtime = create_runtime();
        BillingStore::provide();
        let catalog = PlanCatalog::standard();
        let matrix = load_matrix(catalog).unwrap();

        let html = render(view! { <PlanCards catalog=catalog matrix=matrix/> });
        let badge = html.find("Most Popular").unwrap();
        let free = html.find("Free").unwrap();
        let pro = html[badge..].find("Pro").map(|i| i + badge).unwrap();
        let premium = html.find("Premium").unwrap();
        assert!(free < badge && badge < pro && pro < premium);

        runtime.dispose();
    }

    #[test]
    fn test_plan_cards_follow_billing_toggle() {
        let runtime = create_runtime();
        let store = BillingStore::provide();
        let catalog = PlanCatalog::standard();
        let matrix = load_matrix(catalog).unwrap();

        let monthly = render(view! { <PlanCards catalog=catalog matrix=matrix.clone()/> });
        assert!(monthly.contains("$19") && monthly.contains("$49"));
        assert!(!monthly.contains("$190") && !monthly.contains("$490"));
        assert!(monthly.contains("month") && !monthly.contains("year"));

        store.toggle();
        let yearly = render(view! { <PlanCards catalog=catalog matrix=matrix/> });
        assert!(yearly.contains("$190") && yearly.contains("$490"));
        assert!(yearly.contains("year") && !yearly.contains("month"));
        assert!(yearly.contains("Sign Up") && yearly.contains("Get Started"));

        runtime.dispose();
    }

    #[test]
    fn test_cta_pitch_follows_billing_toggle() {
        let runtime = create_runtime();
        let store = BillingStore::provide();
        let catalog = PlanCatalog::standard();

        let monthly = render(view! { <CtaSection catalog=catalog/> });
        assert!(monthly.contains("Pro is just $19"));
        assert!(!monthly.contains("$190"));
        assert!(monthly.contains("month"));

        store.toggle();
        let yearly = render(view! { <CtaSection catalog=catalog/> });
        assert!(yearly.contains("Pro is just $190"));
        assert!(yearly.contains("year"));

        runtime.dispose();
    }
}
