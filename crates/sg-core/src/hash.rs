//! Fast hash map type aliases.
//!
//! The shift store and roster lookups are keyed by short employee id and name
//! strings, which is exactly the workload the Fx hash algorithm from
//! `rustc-hash` is tuned for. None of these maps are exposed to untrusted
//! input at a scale where denial-of-service resistance matters.
//!
//! # Examples
//!
//! ```
//! use sg_core::{FxHashMap, fx_hash_map};
//!
//! let mut rows: FxHashMap<&str, usize> = fx_hash_map();
//! rows.insert("Frank Gmelin", 0);
//! assert_eq!(rows.get("Frank Gmelin"), Some(&0));
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Creates a new empty [`FxHashMap`].
#[inline]
#[must_use]
pub fn fx_hash_map<K, V>() -> FxHashMap<K, V> {
    FxHashMap::default()
}

/// Creates a new [`FxHashMap`] with room for `capacity` entries.
///
/// # Examples
///
/// ```
/// use sg_core::fx_hash_map_with_capacity;
///
/// let map: sg_core::FxHashMap<String, [u8; 7]> = fx_hash_map_with_capacity(6);
/// assert!(map.capacity() >= 6);
/// ```
#[inline]
#[must_use]
pub fn fx_hash_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}
