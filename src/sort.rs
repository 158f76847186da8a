//! Comparators and sorting helpers for labels and keyed records.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Low to high. Incomparable values (NaN) are treated as equal.
pub fn ascending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// High to low. Incomparable values (NaN) are treated as equal.
pub fn descending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    ascending(b, a)
}

/// Return a sorted copy of `items`, comparing the values picked by `key`.
///
/// The sort is stable.
pub fn sort_by_value<T, K>(
    items: &[T],
    key: impl Fn(&T) -> K,
    sorter: impl Fn(&K, &K) -> Ordering,
) -> Vec<T>
where
    T: Clone,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| sorter(&key(a), &key(b)));
    sorted
}

/// Sort `items` in place by their rank in `order`. Unranked items rank 0.
pub fn sort_by_order_map<T>(
    order: &HashMap<T, i64>,
    items: &mut [T],
    sorter: impl Fn(&i64, &i64) -> Ordering,
) where
    T: Eq + Hash,
{
    let rank = |item: &T| order.get(item).copied().unwrap_or(0);
    items.sort_by(|a, b| sorter(&rank(a), &rank(b)));
}

/// Natural order for labels mixing letters and numbers.
///
/// Digit runs compare by numeric value (`"item2" < "item10"`) and letters
/// compare without regard to case. Labels that differ only in case order
/// lowercase first. Returns `None` when either label is empty.
pub fn compare_letter_number(a: &str, b: &str) -> Option<Ordering> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let ordering = natural_cmp(a, b).then_with(|| b.cmp(a));
    Some(ordering)
}

/// Compare labels by the integer that starts `num_start` characters in.
///
/// Meant for keys like `"Q1"` and `"Q12"` that share a fixed-width prefix.
/// When either key has no integer there, the result is `Less`. Returns
/// `None` when either label is empty.
pub fn fast_compare_letter_number(a: &str, b: &str, num_start: usize) -> Option<Ordering> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    match (leading_integer(a, num_start), leading_integer(b, num_start)) {
        (Some(x), Some(y)) => Some(x.partial_cmp(&y).unwrap_or(Ordering::Less)),
        _ => Some(Ordering::Less),
    }
}

fn leading_integer(label: &str, skip: usize) -> Option<f64> {
    let rest: String = label.chars().skip(skip).collect();
    let rest = rest.trim_start();
    let sign_len = usize::from(rest.starts_with(['+', '-']));
    let digits = rest[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return None;
    }
    rest[..sign_len + digits].parse().ok()
}

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits = None;

    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != is_digit => {
                out.push(chunk(&s[start..i], prev));
                start = i;
            },
            _ => {},
        }
        in_digits = Some(is_digit);
    }
    if let Some(prev) = in_digits {
        out.push(chunk(&s[start..], prev));
    }
    out
}

fn chunk(s: &str, digits: bool) -> Chunk<'_> {
    if digits {
        Chunk::Digits(s)
    } else {
        Chunk::Text(s)
    }
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (x, y) in left.iter().zip(right.iter()) {
        let ordering = match (x, y) {
            (Chunk::Digits(x), Chunk::Digits(y)) => cmp_digits(x, y),
            (Chunk::Text(x), Chunk::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
            // Numbers sort before letters.
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left.len().cmp(&right.len())
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
