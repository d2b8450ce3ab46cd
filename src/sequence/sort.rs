//! Hybrid radix + comparison sorting over the indirection vector
//!
//! The full sort runs in two phases. The radix phase extracts a 32-bit key
//! from the first four bytes of every string (most significant byte first,
//! zero-padded) and packs it into the high half of each `order` slot, with
//! the logical index kept in the low half; an in-place MSD pass with 256-way
//! buckets then orders the slots by key. The comparison phase finishes every
//! bucket whose members share an identical 4-byte prefix by introsorting on
//! the suffixes from offset four. Before returning, the high halves are
//! masked away so `order` again holds plain logical indices.
//!
//! All sorting here permutes the caller's `order` slice in place; nothing is
//! allocated and the strings themselves never move.

use std::cmp::Ordering;

use super::StringSource;
use crate::bits::{export_prefix_u32, log2_floor};
use crate::compare::order as byte_order;

const INDEX_MASK: u64 = 0xFFFF_FFFF;

/// Tuning knobs for the sequence sorts.
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Ranges at or below this length are finished with insertion sort.
    pub insertion_sort_threshold: usize,
    /// Use the radix phase for the full sort. Disabled, every sort runs as a
    /// pure comparison sort (also the automatic fallback when the logical
    /// indices do not fit the low 32 bits of the order slots).
    pub use_radix: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            insertion_sort_threshold: 16,
            use_radix: true,
        }
    }
}

/// Full lexicographic sort of `order` over `source`.
pub(crate) fn sort<S: StringSource + ?Sized>(source: &S, order: &mut [u64], config: &SortConfig) {
    if order.len() < 2 {
        return;
    }
    if !config.use_radix || order.len() > u32::MAX as usize {
        sort_intro(
            source,
            order,
            &|a: &[u8], b: &[u8]| byte_order(a, b) == Ordering::Less,
            config,
        );
        return;
    }

    pack_prefix_keys(source, order);
    let less = |x: u64, y: u64| packed_less(source, x, y);
    radix_msd(order, 56, &less, config);
    unpack_indices(order);
}

/// Partial sort: the first `n` ranks end up holding the `n` smallest strings
/// in sorted order.
pub(crate) fn sort_partial<S: StringSource + ?Sized>(
    source: &S,
    order: &mut [u64],
    n: usize,
    config: &SortConfig,
) {
    if order.len() < 2 || n == 0 {
        return;
    }
    let n = n.min(order.len());
    let depth_limit = 2 * log2_floor(order.len()) as usize;

    if order.len() > u32::MAX as usize {
        let less = |x: u64, y: u64| {
            byte_order(source.str_at(x as usize), source.str_at(y as usize)) == Ordering::Less
        };
        partial_quicksort(order, 0, order.len(), n, &less, depth_limit, config);
        return;
    }

    pack_prefix_keys(source, order);
    let less = |x: u64, y: u64| packed_less(source, x, y);
    partial_quicksort(order, 0, order.len(), n, &less, depth_limit, config);
    unpack_indices(order);
}

/// Introspective sort under a caller-supplied comparator over byte strings.
pub(crate) fn sort_intro<S: StringSource + ?Sized>(
    source: &S,
    order: &mut [u64],
    less: &impl Fn(&[u8], &[u8]) -> bool,
    config: &SortConfig,
) {
    if order.len() < 2 {
        return;
    }
    let depth_limit = 2 * log2_floor(order.len()) as usize;
    let index_less =
        |x: u64, y: u64| less(source.str_at(x as usize), source.str_at(y as usize));
    introsort_by(order, &index_less, depth_limit, config);
}

/// Pack each slot as `prefix_key << 32 | logical_index`.
fn pack_prefix_keys<S: StringSource + ?Sized>(source: &S, order: &mut [u64]) {
    for slot in order.iter_mut() {
        let index = *slot;
        debug_assert!(index <= INDEX_MASK);
        let (key, _) = export_prefix_u32(source.str_at(index as usize));
        *slot = ((key as u64) << 32) | index;
    }
}

/// Drop the transient radix keys, leaving plain logical indices.
fn unpack_indices(order: &mut [u64]) {
    for slot in order.iter_mut() {
        *slot &= INDEX_MASK;
    }
}

/// Full order on packed slots: key first, then the suffix comparison.
fn packed_less<S: StringSource + ?Sized>(source: &S, x: u64, y: u64) -> bool {
    let key_x = (x >> 32) as u32;
    let key_y = (y >> 32) as u32;
    if key_x != key_y {
        return key_x < key_y;
    }
    suffix_less(source, x & INDEX_MASK, y & INDEX_MASK)
}

/// Order of two strings that share their zero-padded 4-byte prefix: compare
/// the suffixes from offset four, break remaining ties by total length (the
/// shorter string is the zero-padded one, hence the smaller).
fn suffix_less<S: StringSource + ?Sized>(source: &S, x: u64, y: u64) -> bool {
    let a = source.str_at(x as usize);
    let b = source.str_at(y as usize);
    let a_suffix = &a[a.len().min(4)..];
    let b_suffix = &b[b.len().min(4)..];
    match byte_order(a_suffix, b_suffix) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a.len() < b.len(),
    }
}

/// In-place MSD radix pass over one key byte, recursing to the next byte and
/// handing equal-prefix buckets to the comparison phase at `shift == 32`.
fn radix_msd(
    order: &mut [u64],
    shift: u32,
    less: &impl Fn(u64, u64) -> bool,
    config: &SortConfig,
) {
    if order.len() <= config.insertion_sort_threshold {
        insertion_sort_by(order, less);
        return;
    }

    let mut bounds = [0usize; 257];
    for &slot in order.iter() {
        bounds[(((slot >> shift) & 0xFF) as usize) + 1] += 1;
    }
    for bucket in 0..256 {
        bounds[bucket + 1] += bounds[bucket];
    }

    // American-flag permutation: walk every bucket region, swapping strays to
    // the head of their home bucket until the region is pure. Buckets below
    // the current one are already final, so strays only ever move forward.
    let mut heads = [0usize; 256];
    heads.copy_from_slice(&bounds[..256]);
    for bucket in 0..256 {
        while heads[bucket] < bounds[bucket + 1] {
            let digit = ((order[heads[bucket]] >> shift) & 0xFF) as usize;
            if digit == bucket {
                heads[bucket] += 1;
            } else {
                order.swap(heads[bucket], heads[digit]);
                heads[digit] += 1;
            }
        }
    }

    for bucket in 0..256 {
        let (low, high) = (bounds[bucket], bounds[bucket + 1]);
        if high - low > 1 {
            if shift > 32 {
                radix_msd(&mut order[low..high], shift - 8, less, config);
            } else {
                let depth_limit = 2 * log2_floor(high - low) as usize;
                introsort_by(&mut order[low..high], less, depth_limit, config);
            }
        }
    }
}

/// Quicksort that recurses only where ranks below `n` can still live, so
/// only the first `n` ranks are guaranteed sorted.
fn partial_quicksort(
    order: &mut [u64],
    low: usize,
    high: usize,
    n: usize,
    less: &impl Fn(u64, u64) -> bool,
    depth_limit: usize,
    config: &SortConfig,
) {
    if high - low <= config.insertion_sort_threshold {
        insertion_sort_by(&mut order[low..high], less);
        return;
    }
    if depth_limit == 0 {
        heapsort_by(&mut order[low..high], less);
        return;
    }
    let pivot = low + partition_around_pivot(&mut order[low..high], less);
    partial_quicksort(order, low, pivot, n, less, depth_limit - 1, config);
    if pivot + 1 < n {
        partial_quicksort(order, pivot + 1, high, n, less, depth_limit - 1, config);
    }
}

/// Introsort core: quicksort with median-of-three pivots, recursing into the
/// smaller side, degrading to heap-sort when the depth budget runs out and
/// to insertion sort on small ranges.
fn introsort_by(
    mut order: &mut [u64],
    less: &impl Fn(u64, u64) -> bool,
    mut depth_limit: usize,
    config: &SortConfig,
) {
    while order.len() > config.insertion_sort_threshold.max(1) {
        if depth_limit == 0 {
            heapsort_by(order, less);
            return;
        }
        depth_limit -= 1;
        let pivot = partition_around_pivot(order, less);
        let (left, rest) = order.split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            introsort_by(left, less, depth_limit, config);
            order = right;
        } else {
            introsort_by(right, less, depth_limit, config);
            order = left;
        }
    }
    insertion_sort_by(order, less);
}

/// Median-of-three Lomuto partition. Returns the pivot's final position.
fn partition_around_pivot(order: &mut [u64], less: &impl Fn(u64, u64) -> bool) -> usize {
    let length = order.len();
    let middle = length / 2;
    if less(order[middle], order[0]) {
        order.swap(middle, 0);
    }
    if less(order[length - 1], order[0]) {
        order.swap(length - 1, 0);
    }
    if less(order[length - 1], order[middle]) {
        order.swap(length - 1, middle);
    }
    order.swap(middle, length - 1);

    let pivot = order[length - 1];
    let mut store = 0;
    for i in 0..length - 1 {
        if less(order[i], pivot) {
            order.swap(i, store);
            store += 1;
        }
    }
    order.swap(store, length - 1);
    store
}

fn insertion_sort_by(order: &mut [u64], less: &impl Fn(u64, u64) -> bool) {
    for i in 1..order.len() {
        let mut j = i;
        while j > 0 && less(order[j], order[j - 1]) {
            order.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn heapsort_by(order: &mut [u64], less: &impl Fn(u64, u64) -> bool) {
    let length = order.len();
    for root in (0..length / 2).rev() {
        sift_down(order, root, length, less);
    }
    for end in (1..length).rev() {
        order.swap(0, end);
        sift_down(order, 0, end, less);
    }
}

fn sift_down(order: &mut [u64], mut root: usize, end: usize, less: &impl Fn(u64, u64) -> bool) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && less(order[child], order[child + 1]) {
            child += 1;
        }
        if less(order[root], order[child]) {
            order.swap(root, child);
            root = child;
        } else {
            break;
        }
    }
}
