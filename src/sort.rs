use crate::record::DailyRecord;

/// Stable top-down merge sort keyed by `key`.
///
/// Recursively halves `data`, sorts both halves and merges them in a single
/// left-to-right pass. On equal keys the left element is emitted first, so
/// input order is preserved for duplicates.
///
/// # Arguments
/// * `data` - Elements in arbitrary order.
/// * `key` - Extracts the comparison key from an element.
///
/// # Returns
/// * `Vec<T>` - A new, sorted vector. Empty or singleton input comes back unchanged.
pub fn merge_sort_by_key<T, K, F>(data: &[T], key: &F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if data.len() <= 1 {
        return data.to_vec();
    }
    let mid = data.len() / 2;
    let left = merge_sort_by_key(&data[..mid], key);
    let right = merge_sort_by_key(&data[mid..], key);
    merge(left, right, key)
}

fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key: &F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // strict: ties go to the left half
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => key(r) < key(l),
            _ => break,
        };
        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Orders daily records ascending by date.
pub fn sort_by_date(records: &[DailyRecord]) -> Vec<DailyRecord> {
    merge_sort_by_key(records, &|r: &DailyRecord| r.date)
}
