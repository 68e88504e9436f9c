//! Marketing footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-4 gap-8">
                    <div class="md:col-span-2">
                        <div class="flex items-center mb-4">
                            <span class="text-2xl mr-2">"💡"</span>
                            <span class="text-xl font-bold text-white">"DoubtDesk"</span>
                        </div>
                        <p class="max-w-sm">
                            "Ask any homework doubt and get a clear, step-by-step answer from a real expert."
                        </p>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-4">"Product"</h4>
                        <ul class="space-y-2">
                            <li><a href="/pricing" class="hover:text-white transition">"Pricing"</a></li>
                            <li><a href="/#how-it-works" class="hover:text-white transition">"How it works"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-4">"Company"</h4>
                        <ul class="space-y-2">
                            <li><a href="/#about" class="hover:text-white transition">"About"</a></li>
                            <li><a href="mailto:hello@doubtdesk.app" class="hover:text-white transition">"Contact"</a></li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-sm text-center">
                    "© 2026 DoubtDesk. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
