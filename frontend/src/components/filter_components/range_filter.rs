use dioxus::prelude::*;
use filters::{FilterDefinition, FilterValue, RangeValue};

use crate::hooks::use_filters::UseFilters;

#[component]
pub fn RangeFilter(definition: ReadSignal<FilterDefinition>) -> Element {
    let filters = use_context::<UseFilters>();
    let bounds = use_memo(move || {
        let definition = definition.read();
        RangeValue::new(definition.min.unwrap_or(0.0), definition.max.unwrap_or(0.0))
    });
    let committed = use_memo(move || match filters.filter_value(&definition.read().id) {
        Some(FilterValue::Range(range)) => Some(range),
        _ => None,
    });
    let (initial_min, initial_max) = draft_text(committed(), bounds());
    let mut draft_min = use_signal(|| initial_min);
    let mut draft_max = use_signal(|| initial_max);
    // resets, chip removal and back navigation replace whatever was typed
    use_effect(move || {
        let (min, max) = draft_text(committed(), bounds());
        draft_min.set(min);
        draft_max.set(max);
    });

    let unit = definition.read().unit.clone().unwrap_or_default();
    let step = definition.read().step.map(format_amount).unwrap_or_else(|| "1".to_string());
    let min_attr = format_amount(bounds().min);
    let max_attr = format_amount(bounds().max);

    let apply = move |_| {
        let id = definition.read().id.clone();
        let typed = normalized_range(&draft_min.read(), &draft_max.read(), bounds());
        match typed {
            Some(range) => {
                draft_min.set(format_amount(range.min));
                draft_max.set(format_amount(range.max));
                filters.set_filter(&id, FilterValue::Range(range));
            }
            None => {
                draft_min.set(format_amount(bounds().min));
                draft_max.set(format_amount(bounds().max));
                filters.clear_filter(&id);
            }
        }
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                padding: 6px 4px;
            ",
            label {
                class: "x-range-input",
                span { "{unit}" }
                input {
                    r#type: "number",
                    min: "{min_attr}",
                    max: "{max_attr}",
                    step: "{step}",
                    value: "{draft_min}",
                    oninput: move |e| draft_min.set(e.value()),
                    onchange: apply,
                }
            }
            span { "to" }
            label {
                class: "x-range-input",
                span { "{unit}" }
                input {
                    r#type: "number",
                    min: "{min_attr}",
                    max: "{max_attr}",
                    step: "{step}",
                    value: "{draft_max}",
                    oninput: move |e| draft_max.set(e.value()),
                    onchange: apply,
                }
            }
        }
    }
}

/// Clamp the typed bounds into the filter's range. `None` means the whole
/// range, which is the same as no filter.
fn normalized_range(min_text: &str, max_text: &str, bounds: RangeValue) -> Option<RangeValue> {
    let parse = |text: &str, fallback: f64| text.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(fallback);
    let mut min = parse(min_text, bounds.min).clamp(bounds.min, bounds.max);
    let mut max = parse(max_text, bounds.max).clamp(bounds.min, bounds.max);
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    let range = RangeValue::new(min, max);
    (range != bounds).then_some(range)
}

/// Input text for the committed range, or the full bounds when unset.
fn draft_text(committed: Option<RangeValue>, bounds: RangeValue) -> (String, String) {
    let range = committed.unwrap_or(bounds);
    (format_amount(range.min), format_amount(range.max))
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 { format!("{value:.0}") } else { value.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE: RangeValue = RangeValue { min: 0.0, max: 2000.0 };

    #[test]
    fn typed_bounds_are_clamped_and_ordered() {
        assert_eq!(normalized_range("500", "100", PRICE), Some(RangeValue::new(100.0, 500.0)));
        assert_eq!(normalized_range("-20", "300", PRICE), Some(RangeValue::new(0.0, 300.0)));
        assert_eq!(normalized_range("abc", "9999", PRICE), None);
    }

    #[test]
    fn drafts_follow_the_committed_range() {
        let committed = Some(RangeValue::new(100.0, 500.0));
        assert_eq!(draft_text(committed, PRICE), ("100".to_string(), "500".to_string()));
        // after a reset the drafts fall back to the bounds, so the next edit
        // cannot bring the old minimum back
        let (min, max) = draft_text(None, PRICE);
        assert_eq!((min.as_str(), max.as_str()), ("0", "2000"));
        assert_eq!(normalized_range(&min, "600", PRICE), Some(RangeValue::new(0.0, 600.0)));
    }

    #[test]
    fn whole_numbers_drop_the_fraction() {
        assert_eq!(format_amount(250.0), "250");
        assert_eq!(format_amount(12.5), "12.5");
    }
}
