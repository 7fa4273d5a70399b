/// List helpers shared by the table pages: search box, match highlighting and
/// sort indicators.
use crate::shared::table_view::SortSpec;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Highlight case-insensitive occurrences of `filter` inside `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="table__match">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of non-overlapping matches. Empty when the lowercase form of
/// `text` changes byte length, so slicing never lands inside a character.
fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_lowercase();
    if haystack.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter text
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // dropping a pending Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || if is_filter_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Browser confirm dialog; false when no window is available
pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Sort indicator for a column header
pub fn get_sort_indicator(spec: &SortSpec, key: &str) -> &'static str {
    if spec.is_sorted_by(key) {
        if spec.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for the indicator span
pub fn get_sort_class(spec: &SortSpec, key: &str) -> &'static str {
    if spec.is_sorted_by(key) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::SortDirection;

    #[test]
    fn test_sort_indicator() {
        let spec = SortSpec::by("kcal", SortDirection::Desc);
        assert_eq!(get_sort_indicator(&spec, "kcal"), " ▼");
        assert_eq!(get_sort_indicator(&spec, "fat"), " ⇅");
        assert_eq!(get_sort_indicator(&SortSpec::by("fat", SortDirection::Asc), "fat"), " ▲");
        assert_eq!(get_sort_indicator(&SortSpec::unsorted(), "fat"), " ⇅");
        assert!(get_sort_class(&spec, "kcal").ends_with("--active"));
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Banana", "an"), vec![(1, 3), (3, 5)]);
        assert_eq!(match_ranges("Apple", "  APP "), vec![(0, 3)]);
        assert!(match_ranges("Apple", "").is_empty());
        assert!(match_ranges("Cherry", "x").is_empty());
    }
}
