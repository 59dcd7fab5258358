use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    path,
};

use crate::components::layout::AppLayout;
use crate::pages;
use crate::theme::PRODUCT_NAME;

/// HTML shell wrapping all pages (rendered server-side).
/// This is a plain function, NOT a #[component].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = format!("/pkg/{}.css", options.output_name);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{PRODUCT_NAME}</title>
                <link rel="stylesheet" href=stylesheet/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-gray-900 text-gray-100 min-h-screen">
                <App/>
            </body>
        </html>
    }
}

/// Main application component with router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <pages::not_found::NotFound/> }>
                <ParentRoute path=path!("/") view=AppLayout>
                    <Route path=path!("") view=pages::prototype::PrototypePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
