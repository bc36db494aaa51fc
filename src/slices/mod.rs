//! Generic slice operations
//!
//! Map, filter, predicates, lookup, deletion, reverse sorting, equality,
//! random sampling and membership over any element type that supports the
//! needed comparison.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::{Result, UtilBeltError};

/// Apply `f` to every element, keeping length and order
///
/// # Example
///
/// ```rust
/// use utilbelt::slices::map;
///
/// let doubled = map(&[1, 2, 3], |x| x * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
///
/// let lengths = map(&["a", "abc"], |s| s.len());
/// assert_eq!(lengths, vec![1, 3]);
/// ```
pub fn map<T, U, F>(seq: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    seq.iter().map(f).collect()
}

/// Keep the elements that satisfy `predicate`, in their original order
///
/// # Example
///
/// ```rust
/// use utilbelt::slices::filter;
///
/// let odds = filter(&[3, 1, 2], |x| x % 2 == 1);
/// assert_eq!(odds, vec![3, 1]);
/// ```
pub fn filter<T, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Check if every element satisfies `predicate` (true for an empty slice)
pub fn all<T, F>(seq: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    seq.iter().all(predicate)
}

/// Alias of [`all`]
pub fn every<T, F>(seq: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    all(seq, predicate)
}

/// Check if at least one element satisfies `predicate` (false for an empty slice)
pub fn any<T, F>(seq: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    seq.iter().any(predicate)
}

/// Alias of [`any`]
pub fn some<T, F>(seq: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    any(seq, predicate)
}

/// Position of the first element equal to `target`
///
/// # Example
///
/// ```rust
/// use utilbelt::slices::index;
///
/// assert_eq!(index(&["foo", "bar"], &"bar"), Some(1));
/// assert_eq!(index(&[1.0, 6.3, -5.7], &0.0), None);
/// ```
pub fn index<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().position(|item| item == target)
}

/// Case-insensitive [`index`] for strings
///
/// Both sides are lowercased before comparing. An empty `target` never
/// matches, even if the slice holds an empty string.
pub fn index_insensitive<S: AsRef<str>>(seq: &[S], target: &str) -> Option<usize> {
    if target.is_empty() {
        return None;
    }

    let target = target.to_lowercase();
    seq.iter()
        .position(|item| item.as_ref().to_lowercase() == target)
}

/// Alias of [`index_insensitive`]
pub fn indexi<S: AsRef<str>>(seq: &[S], target: &str) -> Option<usize> {
    index_insensitive(seq, target)
}

/// Remove and return the element at `i`, shifting the rest left
///
/// # Errors
///
/// Returns [`UtilBeltError::IndexOutOfBounds`] when `i` is past the end;
/// the vector is left untouched in that case.
///
/// # Example
///
/// ```rust
/// use utilbelt::slices::delete;
///
/// let mut v = vec!["a", "b", "c"];
/// assert_eq!(delete(&mut v, 1), Ok("b"));
/// assert_eq!(v, vec!["a", "c"]);
///
/// assert!(delete(&mut v, 5).is_err());
/// assert_eq!(v, vec!["a", "c"]);
/// ```
pub fn delete<T>(seq: &mut Vec<T>, i: usize) -> Result<T> {
    if i >= seq.len() {
        return Err(UtilBeltError::IndexOutOfBounds {
            index: i,
            len: seq.len(),
        });
    }
    Ok(seq.remove(i))
}

/// Sort in place, largest first
pub fn reverse_sort<T: Ord>(seq: &mut [T]) {
    seq.sort_by(|a, b| b.cmp(a));
}

/// Alias of [`reverse_sort`]
pub fn rsort<T: Ord>(seq: &mut [T]) {
    reverse_sort(seq);
}

/// Sort floats in place, largest first
///
/// Uses the IEEE 754 total order, so positive `NaN` sorts before
/// `+inf` and negative `NaN` after `-inf`.
pub fn reverse_sort_floats(seq: &mut [f64]) {
    seq.sort_by(|a, b| b.total_cmp(a));
}

/// Compare two optional slices element by element
///
/// Two absent slices are equal; an absent slice never equals a present
/// one, even an empty one.
///
/// # Example
///
/// ```rust
/// use utilbelt::slices::eq_slices;
///
/// let empty: &[i32] = &[];
/// assert!(eq_slices(Some(empty), Some(empty)));
/// assert!(!eq_slices(Some(empty), None));
/// assert!(eq_slices::<i32>(None, None));
/// assert!(!eq_slices(Some(&[5, -3][..]), Some(&[-3, 5][..])));
/// ```
pub fn eq_slices<T: PartialEq>(a: Option<&[T]>, b: Option<&[T]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Pick a uniformly random element
///
/// # Errors
///
/// Returns [`UtilBeltError::EmptyInput`] for an empty slice.
pub fn random_element<T>(seq: &[T]) -> Result<&T> {
    random_element_with(&mut rand::rng(), seq)
}

/// [`random_element`] drawing from a caller-supplied generator
///
/// # Errors
///
/// Returns [`UtilBeltError::EmptyInput`] for an empty slice.
pub fn random_element_with<'a, R, T>(rng: &mut R, seq: &'a [T]) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    seq.choose(rng).ok_or(UtilBeltError::EmptyInput)
}

/// Check if `value` is in the slice
pub fn contains<T: PartialEq>(seq: &[T], value: &T) -> bool {
    seq.contains(value)
}

/// Alias of [`contains`]
pub fn in_slice<T: PartialEq>(seq: &[T], value: &T) -> bool {
    contains(seq, value)
}
