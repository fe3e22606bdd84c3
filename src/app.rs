use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::catalog::Catalog;
use crate::pages::contact::Contact;
use crate::pages::home::Home;
use crate::pages::products::Products;
use crate::services::scroll::provide_scroll_state;

#[component]
pub fn App() -> impl IntoView {
    // The catalog is built once and shared read-only through context.
    provide_context(Catalog::builtin());
    // Window scroll listener, registered once for the app lifetime.
    provide_scroll_state();

    view! {
        <Router>
            <Routes fallback=|| view! {
                <div class="min-h-screen flex items-center justify-center text-gray-600">
                    "404 - Page Not Found"
                </div>
            }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/products") view=Products />
                <Route path=path!("/contact") view=Contact />
            </Routes>
        </Router>
    }
}
