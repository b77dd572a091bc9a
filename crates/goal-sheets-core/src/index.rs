//! Distinct column values for value selectors
//!
//! Values are ordered pairwise: two values that both parse as numbers compare
//! numerically, anything else compares as text with [`locale_compare`]. On a
//! column mixing numeric and non-numeric text this ordering is not
//! transitive, so the final order depends on the input order. The sort used
//! here is a stable merge sort that never panics on such a comparator.

use std::cmp::Ordering;

use ahash::AHashSet;

use crate::cell::parse_number;
use crate::table::Row;

/// Builds the sorted list of distinct values of a column
pub struct ColumnValueIndexer;

impl ColumnValueIndexer {
    /// Distinct, non-empty values of `column` across `rows`, sorted
    ///
    /// Values are deduplicated on their displayed text, so the number `1` and
    /// the text `"1"` count once. An empty column name yields nothing.
    pub fn distinct_values(rows: &[Row], column: &str) -> Vec<String> {
        if column.is_empty() || rows.is_empty() {
            return Vec::new();
        }

        let mut seen = AHashSet::new();
        let values: Vec<String> = rows
            .iter()
            .filter_map(|row| row.get(column))
            .map(|value| value.to_string())
            .filter(|text| seen.insert(text.clone()))
            .collect();

        let keyed: Vec<(SortKey, String)> = values
            .into_iter()
            .map(|value| (SortKey::new(&value), value))
            .collect();
        merge_sort_by(keyed, &mut |a: &(SortKey, String), b: &(SortKey, String)| {
            a.0.compare(&b.0, &a.1, &b.1)
        })
        .into_iter()
        .map(|(_, value)| value)
        .collect()
    }

    /// Compare two displayed values
    pub fn compare(a: &str, b: &str) -> Ordering {
        SortKey::new(a).compare(&SortKey::new(b), a, b)
    }
}

/// Collation data of one value, computed once before sorting
struct SortKey {
    number: Option<f64>,
    text: TextKey,
}

impl SortKey {
    fn new(value: &str) -> Self {
        Self {
            number: parse_number(value),
            text: TextKey::new(value),
        }
    }

    fn compare(&self, other: &SortKey, a: &str, b: &str) -> Ordering {
        match (self.number, other.number) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => self.text.compare(&other.text).then_with(|| a.cmp(b)),
        }
    }
}

/// Accent-folded letters, lowercased letters and case flags of a text
struct TextKey {
    primary: Vec<char>,
    secondary: Vec<char>,
    tertiary: Vec<bool>,
}

impl TextKey {
    fn new(s: &str) -> Self {
        let secondary: Vec<char> = s.chars().flat_map(char::to_lowercase).collect();
        Self {
            primary: secondary.iter().copied().map(base_letter).collect(),
            secondary,
            tertiary: s.chars().map(char::is_uppercase).collect(),
        }
    }

    fn compare(&self, other: &TextKey) -> Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.secondary.cmp(&other.secondary))
            .then_with(|| self.tertiary.cmp(&other.tertiary))
    }
}

/// Stable top-down merge sort
///
/// Only ever asks whether the right element goes strictly before the left
/// one, so a comparator without a total order yields some permutation
/// instead of a panic.
fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }
    merged
}

/// Compare text the way a human-facing selector list expects
///
/// Levels, in order: base letters ignoring accents and case, then accents,
/// then case (lowercase first), then raw code points.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    TextKey::new(a)
        .compare(&TextKey::new(b))
        .then_with(|| a.cmp(b))
}

/// Strip the diacritic from a lowercase Latin letter
fn base_letter(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        _ => c,
    }
}
