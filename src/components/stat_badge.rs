//! Pill-shaped label/value badge used by the answer metrics row.

use leptos::prelude::*;

/// Visual emphasis for a badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Info,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "stat-badge",
            BadgeVariant::Success => "stat-badge stat-badge--success",
            BadgeVariant::Warning => "stat-badge stat-badge--warning",
            BadgeVariant::Info => "stat-badge stat-badge--info",
        }
    }
}

/// A single labelled statistic, e.g. `Cost: $0.000412`.
#[component]
pub fn StatBadge(
    label: &'static str,
    value: String,
    #[prop(optional)] unit: Option<&'static str>,
    #[prop(optional)] variant: BadgeVariant,
) -> impl IntoView {
    view! {
        <span class=variant.class()>
            <span class="stat-badge__label">{label}":"</span>
            <span class="stat-badge__value">{value}</span>
            {unit.map(|u| view! { <span class="stat-badge__unit">{u}</span> })}
        </span>
    }
}
