use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::theme::{top_bar_style, PRODUCT_NAME};

/// Application frame: persistent top bar above the routed page.
/// Used as the view for the root `ParentRoute`.
#[component]
pub fn AppLayout() -> impl IntoView {
    view! {
        <div class="flex flex-col min-h-screen">
            <TopBar/>
            <Outlet/>
        </div>
    }
}

/// Top bar. Its height is the chrome pages subtract from the viewport.
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header
            class="bg-gray-800 border-b border-gray-700 px-6 flex items-center shrink-0"
            style=top_bar_style()
        >
            <a href="/" class="text-lg font-bold text-white">{PRODUCT_NAME}</a>
        </header>
    }
}
