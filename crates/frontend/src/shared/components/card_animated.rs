//! Thaw `Card` that fades in on mount (`@keyframes card-appear` in
//! `style/main.css`). Pass increasing `delay_ms` values to stagger a row
//! of cards.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra class on the card root
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "card-animated".to_string()
    } else {
        format!("card-animated {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
