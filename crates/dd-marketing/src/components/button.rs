//! Styled button primitive

use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Dark,
    /// White button for dark or gradient backgrounds
    Light,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-indigo-600 hover:bg-indigo-700 text-white",
            ButtonVariant::Secondary => "bg-gray-100 hover:bg-gray-200 text-gray-900",
            ButtonVariant::Dark => "bg-gray-900 hover:bg-gray-800 text-white",
            ButtonVariant::Light => "bg-white hover:bg-gray-100 text-indigo-600",
        }
    }
}

/// Call-to-action link styled as a button
#[component]
pub fn Button(
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] full_width: bool,
) -> impl IntoView {
    let class = format!(
        "{} px-6 py-3 text-center font-semibold rounded-lg transition {}",
        if full_width { "block w-full" } else { "inline-block" },
        variant.class()
    );

    view! {
        <a href=href class=class>{move || label.get()}</a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_renders_link_with_variant() {
        let html = leptos::ssr::render_to_string(|| {
            view! { <Button label="Sign Up" href="/signup?plan=free" variant=ButtonVariant::Secondary full_width=true/> }
        })
        .to_string();

        assert!(html.contains("<a"));
        assert!(html.contains("/signup?plan=free") || html.contains("&#x2F;signup?plan=free"));
        assert!(html.contains("block w-full"));
        assert!(html.contains(ButtonVariant::Secondary.class()));
        assert!(html.contains("Sign Up"));
        assert!(!html.contains("<button"));
    }
}
