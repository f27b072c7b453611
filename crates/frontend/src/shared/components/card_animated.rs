//! Thaw `Card` that fades in on mount.
//!
//! The `card-appear` keyframes live in the app stylesheet. Give sibling cards
//! increasing `delay_ms` for a staggered entrance.
//!
//! ```rust,ignore
//! <CardAnimated delay_ms=0>"Revenue"</CardAnimated>
//! <CardAnimated delay_ms=80 style="max-width: 400px;">"Orders"</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    #[prop(optional)] delay_ms: u32,
    /// Appended after the animation style
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let animation = format!("animation: card-appear 0.28s ease-out {delay_ms}ms both;");
    let full_style = if style.is_empty() {
        animation
    } else {
        format!("{animation} {style}")
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
