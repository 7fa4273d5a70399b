//! Column ordering for the table view.

use super::schema::{CellValue, ViewRow};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Asc
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Current sort column and direction. `direction` is ignored while `key` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(key: &str, direction: SortDirection) -> Self {
        Self {
            key: Some(key.to_string()),
            direction,
        }
    }

    /// Same key flips the direction; a new key starts ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Asc;
        }
    }

    pub fn is_sorted_by(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }
}

/// Compare two non-null values.
///
/// Numbers compare numerically and dates chronologically. Every other pairing,
/// mixed kinds included, compares the string representations.
pub fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Number(x), CellValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (CellValue::Date(x), CellValue::Date(y)) => x.cmp(y),
        _ => a.sort_text().cmp(&b.sort_text()),
    }
}

/// Nulls go last in both directions; two nulls are equal.
pub fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => direction.apply(compare_values(a, b)),
    }
}

/// Stable sort of `rows` by `spec`. Without a key the order is left untouched.
pub fn sort_rows<'a, R: ViewRow>(rows: Vec<&'a R>, spec: &SortSpec) -> Vec<&'a R> {
    let Some(key) = spec.key.as_deref() else {
        return rows;
    };
    let mut keyed: Vec<(CellValue, &'a R)> = rows.into_iter().map(|r| (r.cell(key), r)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_cells(a, b, spec.direction));
    keyed.into_iter().map(|(_, r)| r).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::test_support::{fruit, fruit_basket, ids};

    #[test]
    fn test_toggle() {
        let mut spec = SortSpec::unsorted();
        spec.toggle("kcal");
        assert_eq!(spec, SortSpec::by("kcal", SortDirection::Asc));
        spec.toggle("kcal");
        assert_eq!(spec, SortSpec::by("kcal", SortDirection::Desc));
        spec.toggle("name");
        assert_eq!(spec, SortSpec::by("name", SortDirection::Asc));
    }

    #[test]
    fn test_nulls_last_both_directions() {
        let rows = fruit_basket();
        let refs: Vec<_> = rows.iter().collect();

        let asc = sort_rows(refs.clone(), &SortSpec::by("kcal", SortDirection::Asc));
        assert_eq!(ids(&asc), vec![1, 2, 3]);

        let desc = sort_rows(refs, &SortSpec::by("kcal", SortDirection::Desc));
        assert_eq!(ids(&desc), vec![2, 1, 3]);
    }

    #[test]
    fn test_stable_ties_and_null_pairs() {
        let rows = vec![
            fruit(1, Some("b"), None),
            fruit(2, Some("a"), Some(10.0)),
            fruit(3, Some("c"), None),
            fruit(4, Some("d"), Some(10.0)),
        ];
        let refs: Vec<_> = rows.iter().collect();
        let asc = sort_rows(refs.clone(), &SortSpec::by("kcal", SortDirection::Asc));
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);
        let desc = sort_rows(refs, &SortSpec::by("kcal", SortDirection::Desc));
        assert_eq!(ids(&desc), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_text_is_case_sensitive() {
        let rows = vec![fruit(1, Some("apple"), None), fruit(2, Some("Banana"), None)];
        let sorted = sort_rows(rows.iter().collect(), &SortSpec::by("name", SortDirection::Asc));
        // uppercase sorts before lowercase
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn test_mixed_kinds_compare_as_text() {
        let n = CellValue::Number(100.0);
        let t = CellValue::Text("20".into());
        assert_eq!(compare_values(&n, &t), Ordering::Less);
        assert_eq!(
            compare_values(&CellValue::Number(9.0), &CellValue::Number(10.0)),
            Ordering::Less
        );
    }

    #[test]
    fn test_unsorted_keeps_order() {
        let rows = fruit_basket();
        let out = sort_rows(rows.iter().rev().collect(), &SortSpec::unsorted());
        assert_eq!(ids(&out), vec![3, 2, 1]);
    }
}
