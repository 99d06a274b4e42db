use std::cmp::Ordering;

use leptos::*;

pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `total` rows; zero rows give zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Clamps a 1-based page into `1..=page_count`, falling back to 1 when empty.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size).max(1))
}

/// Rows `[(page-1)*size, page*size)` with the page clamped into range.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = clamp_page(page, items.len(), page_size);
    items
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// Case-insensitive substring match over any of the given fields.
pub fn matches_filter(fields: &[&str], needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    needle.is_empty()
        || fields
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl SortState {
    /// Clicking the active column flips it, any other column starts ascending.
    pub fn toggle(current: Option<SortState>, column: &'static str) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column,
                direction: state.direction.flipped(),
            },
            _ => SortState {
                column,
                direction: SortDirection::Asc,
            },
        }
    }
}

pub fn sort_rows<T, F>(rows: &mut [T], direction: SortDirection, compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    rows.sort_by(|a, b| match direction {
        SortDirection::Asc => compare(a, b),
        SortDirection::Desc => compare(b, a),
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
}

impl Column {
    pub const fn sortable(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
        }
    }

    pub const fn plain(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
        }
    }
}

#[component]
pub fn TableHeader(
    columns: &'static [Column],
    #[prop(optional)] sort: Option<RwSignal<Option<SortState>>>,
) -> impl IntoView {
    view! {
        <thead class="bg-surface-muted">
            <tr>
                {columns
                    .iter()
                    .map(|column| {
                        let column = *column;
                        let indicator = move || {
                            sort.and_then(|s| s.get())
                                .filter(|state| state.column == column.key)
                                .map(|state| state.direction.indicator())
                                .unwrap_or("")
                        };
                        view! {
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                {match (column.sortable, sort) {
                                    (true, Some(sort)) => view! {
                                        <button
                                            type="button"
                                            class="inline-flex items-center gap-1 hover:text-fg"
                                            on:click=move |_| sort.update(|s| *s = Some(SortState::toggle(*s, column.key)))
                                        >
                                            {column.label}
                                            <span>{indicator}</span>
                                        </button>
                                    }
                                    .into_view(),
                                    _ => column.label.into_view(),
                                }}
                            </th>
                        }
                    })
                    .collect_view()}
            </tr>
        </thead>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(10, PAGE_SIZE), 1);
        assert_eq!(page_count(25, PAGE_SIZE), 3);
    }

    #[test]
    fn page_slice_returns_requested_window() {
        let rows: Vec<usize> = (1..=25).collect();
        assert_eq!(page_slice(&rows, 1, PAGE_SIZE), (1..=10).collect::<Vec<_>>());
        assert_eq!(page_slice(&rows, 3, PAGE_SIZE), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn page_beyond_end_clamps_to_last_page() {
        let rows: Vec<usize> = (1..=25).collect();
        assert_eq!(clamp_page(9, rows.len(), PAGE_SIZE), 3);
        assert_eq!(page_slice(&rows, 9, PAGE_SIZE), (21..=25).collect::<Vec<_>>());
        assert_eq!(clamp_page(0, 0, PAGE_SIZE), 1);
        assert!(page_slice::<usize>(&[], 1, PAGE_SIZE).is_empty());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        assert!(matches_filter(&["EMP001"], "emp0"));
        assert!(matches_filter(&["EMP001", "Finance"], "fin"));
        assert!(!matches_filter(&["EMP001"], "emp2"));
        assert!(matches_filter(&["EMP001"], "   "));
    }

    #[test]
    fn sort_toggle_flips_same_column_and_resets_on_new_one() {
        let first = SortState::toggle(None, "name");
        assert_eq!(first.direction, SortDirection::Asc);
        let second = SortState::toggle(Some(first), "name");
        assert_eq!(second.direction, SortDirection::Desc);
        let other = SortState::toggle(Some(second), "code");
        assert_eq!(other, SortState { column: "code", direction: SortDirection::Asc });
    }

    #[test]
    fn sort_rows_respects_direction() {
        let mut rows = vec![3, 1, 2];
        sort_rows(&mut rows, SortDirection::Asc, |a, b| a.cmp(b));
        assert_eq!(rows, vec![1, 2, 3]);
        sort_rows(&mut rows, SortDirection::Desc, |a, b| a.cmp(b));
        assert_eq!(rows, vec![3, 2, 1]);
    }

    #[test]
    fn header_marks_active_sort_column() {
        const COLUMNS: &[Column] = &[Column::sortable("code", "Code"), Column::plain("email", "Email")];
        let html = render_to_string(move || {
            let sort = create_rw_signal(Some(SortState { column: "code", direction: SortDirection::Desc }));
            view! { <table><TableHeader columns=COLUMNS sort=sort/></table> }
        });
        assert!(html.contains("Code"));
        assert!(html.contains("Email"));
        assert!(html.contains("▼"));
    }
}
