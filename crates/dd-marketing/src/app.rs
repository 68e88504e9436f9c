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
            <div class="min-h-screen bg-white">
                <Header/>
                <main>
                    <Routes>
                        <Route path="/" view=PricingPage/>
                        <Route path="/pricing" view=PricingPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
