use leptos::prelude::*;

use crate::theme::{container_style, heading_style, PROTOTYPE_MESSAGE};

/// Placeholder page mounted at `/`: a single heading centered in the space
/// left below the top bar.
#[component]
pub fn PrototypePage() -> impl IntoView {
    view! {
        <main style=container_style()>
            <h1 style=heading_style()>{PROTOTYPE_MESSAGE}</h1>
        </main>
    }
}
