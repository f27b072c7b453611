use crate::shared::icons::icon;
use leptos::prelude::*;

/// Trend arrow and class for a period-over-period change
pub fn change_badge(percent: f64) -> (String, &'static str) {
    let (arrow, class) = if percent > 0.5 {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if percent < -0.5 {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    };
    (format!("{arrow}{:.1}%", percent.abs()), class)
}

/// Dashboard tile: icon, label, formatted value and optional change
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    icon_name: &'static str,
    #[prop(into)] value: String,
    #[prop(optional)] change_percent: Option<f64>,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    let change = change_percent.map(|pct| {
        let (text, class) = change_badge(pct);
        view! { <span class=class>{text}</span> }
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}{change}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_badge() {
        assert_eq!(change_badge(12.34).0, "\u{2191}12.3%");
        assert_eq!(change_badge(-3.0).1, "stat-card__change stat-card__change--down");
        assert_eq!(change_badge(0.2), ("0.2%".to_string(), "stat-card__change stat-card__change--flat"));
    }
}
