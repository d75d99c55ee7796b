use leptos::prelude::*;

use crate::shared::icons::icon;

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Dashboard stat tile; `None` renders as a loading dash.
#[component]
pub fn StatCard(
    label: String,
    icon_name: String,
    #[prop(into)] value: Signal<Option<i64>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(1_234_567), "1\u{a0}234\u{a0}567");
        assert_eq!(format_thousands(-1_234), "-1\u{a0}234");
    }
}
