//! In-place binary heap sort with a configurable sort order.
//!
//! One iterative kernel serves both directions: [`Order`] selects the
//! predicate the heap is built with. Ascending output comes from a max-heap,
//! descending output from a min-heap. The sort runs in O(n log n) worst
//! case, uses O(1) auxiliary space, never allocates and is not stable.
//!
//! The heap lives directly in the slice, 0-based, with the children of node
//! `v` at `2 * v + 1` and `2 * v + 2`.

use std::cmp::Ordering;

/// Direction of the sorted output.
///
/// The direction decides which heap the kernel maintains: [`Order::Ascending`]
/// builds a max-heap so the largest element is extracted first,
/// [`Order::Descending`] builds a min-heap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    /// True if `a` belongs before `b` in the final sorted output.
    #[inline]
    fn sorts_before<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Order::Ascending => a < b,
            Order::Descending => b < a,
        }
    }
}

/// Sorts the slice ascending.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
/// heapsort::sort(&mut v);
/// assert_eq!(v, [-5, -3, 1, 2, 4]);
/// ```
pub fn sort<T: Ord>(v: &mut [T]) {
    heapsort(v, &mut |a, b| a < b);
}

/// Sorts the slice in the given [`Order`].
///
/// # Examples
///
/// ```
/// use heapsort::Order;
///
/// let mut v = [1, 5, 3];
/// heapsort::sort_in(&mut v, Order::Descending);
/// assert_eq!(v, [5, 3, 1]);
/// ```
pub fn sort_in<T: Ord>(v: &mut [T], order: Order) {
    heapsort(v, &mut |a, b| order.sorts_before(a, b));
}

/// Sorts the slice with a comparator function.
///
/// The comparator must implement a total order or the result is an
/// unspecified permutation of the input.
///
/// # Examples
///
/// ```
/// let mut v = [5.0, 4.0, 1.0, 3.0, 2.0];
/// heapsort::sort_by(&mut v, |a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(v, [1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    heapsort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Like [`sort_in`], but reports progress: after every extraction step
/// `trace` receives the whole slice and the new heap boundary. The boundary
/// walks from `len - 1` down to 0 and everything at or beyond it is in its
/// final position. Tracing never changes the sorted result.
///
/// # Examples
///
/// ```
/// use heapsort::Order;
///
/// let mut steps = 0;
/// let mut v = [3, 1, 2];
/// heapsort::sort_in_traced(&mut v, Order::Ascending, |_, _| steps += 1);
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(steps, 3);
/// ```
pub fn sort_in_traced<T, F>(v: &mut [T], order: Order, trace: F)
where
    T: Ord,
    F: FnMut(&[T], usize),
{
    heapsort_traced(v, &mut |a, b| order.sorts_before(a, b), trace);
}

/// Rearranges the slice into a max-heap: every parent is greater than or
/// equal to both of its children.
///
/// # Examples
///
/// ```
/// let mut v = [4, 1, 3, 2, 16, 9, 10, 14, 8, 7];
/// heapsort::heapify(&mut v);
/// assert_eq!(v[0], 16);
/// ```
pub fn heapify<T: Ord>(v: &mut [T]) {
    build_heap(v, &mut |a, b| a < b);
}

/// Like [`heapify`], but the heap kind follows `order`: max-heap for
/// [`Order::Ascending`], min-heap for [`Order::Descending`], matching what
/// [`sort_in`] builds internally.
pub fn heapify_in<T: Ord>(v: &mut [T], order: Order) {
    build_heap(v, &mut |a, b| order.sorts_before(a, b));
}

/// Like [`heapify`], but with a comparator function; the element that
/// compares greatest ends up at the root.
pub fn heapify_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    build_heap(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    build_heap(v, is_less);

    // Move the root, the greatest element of the shrinking heap, into its
    // final position until a single element remains.
    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, is_less);
    }
}

fn heapsort_traced<T, F, G>(v: &mut [T], is_less: &mut F, mut trace: G)
where
    F: FnMut(&T, &T) -> bool,
    G: FnMut(&[T], usize),
{
    build_heap(v, is_less);

    // One extraction per element. The last one trivially swaps the root with
    // itself so the reported boundary reaches 0.
    for end in (1..=v.len()).rev() {
        v.swap(0, end - 1);
        sift_down(&mut v[..end - 1], 0, is_less);
        trace(v, end - 1);
    }
}

fn build_heap<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Leaves are trivial heaps, so start at the last parent.
    for node in (0..v.len() / 2).rev() {
        sift_down(v, node, is_less);
    }
}

/// Restores the heap invariant at `node`, assuming both child subtrees
/// already satisfy it. Iterative, at most one swap per level.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        // Pick the greater of the two children, the left one on a tie.
        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
