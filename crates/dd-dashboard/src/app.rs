//! Main application component

use leptos::*;
use leptos_router::*;
use crate::pages::*;
use crate::components::*;
use dd_core::MotionConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_context(MotionConfig::default());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100">
                <Nav/>
                <main class="container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
