use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::Index;
use std::{cmp, iter, mem};

use tracing::debug;

use super::MissingKey;
use crate::iter::{Cursor, Iterable, Values};
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

pub(crate) const MIN_ALLOCATED_CAP: usize = 2;

pub(crate) const GROWTH_FACTOR: usize = 2;

pub(crate) const LOAD_FACTOR_NUMERATOR: usize = 4;
pub(crate) const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Collisions are resolved with Robin Hood open addressing, which keeps the distance of each entry
/// from its ideal slot balanced across the table. A custom load factor is not supported at this
/// point, with the default being 4/5. Tombstones left by removals count towards the load factor,
/// and are purged whenever the table is rehashed.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `reserve` | `O(n)`***, `O(1)` |
///
/// \* In the event of a hash collision, these functions will take additional time, while a valid
/// / correct location is found. Robin Hood placement keeps this additional time low.
///
/// \** If the HashMap would exceed its load factor, `insert` will rehash first, taking `O(n)`.
/// \* applies as well.
///
/// \*** If the HashMap has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) slots: Box<[Bucket<K, V>]>,
    pub(crate) meta: Box<[SlotMeta]>,
    pub(crate) len: usize,
    pub(crate) tombs: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = Option<(K, V)>;

/// The hash of the entry in a slot, retained after the entry is removed. A hash of 0 marks a slot
/// that has never been occupied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SlotMeta {
    pub hash: u64,
    pub tomb: bool,
}

impl SlotMeta {
    pub(crate) const EMPTY: SlotMeta = SlotMeta { hash: 0, tomb: false };

    pub(crate) const fn live(hash: u64) -> SlotMeta {
        SlotMeta { hash, tomb: false }
    }

    pub(crate) const fn is_empty(self) -> bool {
        self.hash == 0
    }

    pub(crate) const fn is_live(self) -> bool {
        self.hash != 0 && !self.tomb
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the default value for `B`. Memory will be
    /// allocated when the capacity changes.
    pub fn new() -> HashMap<K, V, B> {
        HashMap::with_hasher(B::default())
    }

    /// Creates a new HashMap with the provided `cap`acity. The default hasher will be used.
    pub fn with_cap(cap: usize) -> HashMap<K, V, B> {
        HashMap::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap::with_cap_and_hasher(0, hasher)
    }

    /// Creates a new HashMap with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        let (slots, meta) = empty_slots(cap);
        HashMap {
            slots,
            meta,
            len: 0,
            tombs: 0,
            hasher,
        }
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashMap.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, rehashing first if the new entry
    /// would exceed the load factor. If the key was already associated with a value, that value is
    /// replaced and returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// # Examples
    /// ```
    /// # use lazy_collections::collections::HashMap;
    /// let mut map: HashMap<&str, u32> = HashMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// assert_eq!(map.insert("a", 2), Some(1));
    /// assert_eq!(map["a"], 2);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_of(&key);
        if let Some(index) = self.find(hash, &key)
            && let Some((_, existing)) = &mut self.slots[index]
        {
            return Some(mem::replace(existing, value));
        }

        // Rehashing moves entries but never changes their hashes.
        if self.should_rehash() {
            self.rehash_for_insert();
        }

        self.place(hash, Some((key, value)));
        self.len += 1;
        None
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_of(key)?;
        self.slots[index].as_ref().map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_of(key)?;
        self.slots[index].as_mut().map(|(_, v)| v)
    }

    /// Removes the entry associated with `key`, returning it if it exists. The slot it occupied is
    /// left as a tombstone.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_of(key)?;
        let entry = self.slots[index].take()?;

        // Keep the hash, so that probing still treats the slot as part of its chain.
        self.meta[index].tomb = true;
        self.len -= 1;
        self.tombs += 1;
        Some(entry)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(key).is_some()
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the required capacity overflows `usize`.
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len
            .checked_add(extra)
            .and_then(|required| required.checked_mul(LOAD_FACTOR_DENOMINATOR))
            .map(|scaled| scaled.div_ceil(LOAD_FACTOR_NUMERATOR))
            .ok_or(CapacityOverflow)
            .throw();
        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Removes every entry from the HashMap, keeping its capacity.
    pub fn clear(&mut self) {
        let (slots, meta) = empty_slots(self.cap());
        self.slots = slots;
        self.meta = meta;
        self.len = 0;
        self.tombs = 0;
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references, in slot order.
    pub fn iter(&self) -> Values<&HashMap<K, V, B>> {
        self.cursor_front().values()
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Creates a Cursor pointing at the first entry of the HashMap, in slot order.
    pub fn cursor_front(&self) -> Cursor<&HashMap<K, V, B>> {
        Iterable::cursor_front(self)
    }

    /// Creates a Cursor pointing at the last entry of the HashMap, in slot order.
    pub fn cursor_back(&self) -> Cursor<&HashMap<K, V, B>> {
        Iterable::cursor_back(self)
    }

    /// Creates a Cursor pointing at the 'ghost' position before the first entry.
    pub fn cursor_head(&self) -> Cursor<&HashMap<K, V, B>> {
        Iterable::cursor_head(self)
    }

    /// Creates a Cursor pointing at the 'ghost' position after the last entry.
    pub fn cursor_tail(&self) -> Cursor<&HashMap<K, V, B>> {
        Iterable::cursor_tail(self)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Hashes `hashable` with this map's hasher. A hash of 0 is reserved for empty slots, so it is
    /// moved to 1.
    pub(crate) fn hash_of<H: Hash + ?Sized>(&self, hashable: &H) -> u64 {
        match self.hasher.hash_one(hashable) {
            0 => 1,
            hash => hash,
        }
    }

    /// Calculates the ideal slot for `hash`. The capacity must not be 0.
    pub(crate) fn home_of(&self, hash: u64) -> usize {
        (hash % self.cap() as u64) as usize
    }

    /// Returns how many steps `pos` is from the ideal slot for `hash`, wrapping at the capacity.
    pub(crate) fn probe_distance(&self, hash: u64, pos: usize) -> usize {
        let cap = self.cap();
        (pos + cap - self.home_of(hash)) % cap
    }

    /// Determines whether occupied slots (including tombstones) have reached the load capacity,
    /// meaning that the HashMap should be rehashed before inserting a new entry.
    pub(crate) fn should_rehash(&self) -> bool {
        self.len + self.tombs >= self.load_threshold()
    }

    pub(crate) fn load_threshold(&self) -> usize {
        self.cap() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    /// Makes room for one more entry, growing the HashMap by the growth factor if the live entries
    /// alone have reached the load capacity. Otherwise, the current capacity is kept and only the
    /// tombstones are purged.
    pub(crate) fn rehash_for_insert(&mut self) {
        let new_cap = if self.len >= self.load_threshold() {
            cmp::max(self.cap() * GROWTH_FACTOR, MIN_ALLOCATED_CAP)
        } else {
            self.cap()
        };

        self.realloc_with_cap(new_cap);
    }

    /// Reallocates the HashMap to have capacity equal to `new_cap`, placing every live entry again
    /// and discarding all tombstones. Does nothing if doing so would cause the map to overload.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        // Can't handle dropping values at this point.
        if new_cap * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR < self.len { return; }

        debug!(
            old_cap = self.cap(),
            new_cap,
            len = self.len,
            tombs = self.tombs,
            "rehashing HashMap"
        );

        let (slots, meta) = empty_slots(new_cap);
        let old_slots = mem::replace(&mut self.slots, slots);
        let old_meta = mem::replace(&mut self.meta, meta);
        self.tombs = 0;

        for (entry, meta) in old_slots.into_iter().zip(old_meta) {
            if entry.is_some() {
                self.place(meta.hash, entry);
            }
        }
    }

    /// Places `entry` into the table using Robin Hood probing. There must be at least one empty
    /// slot, which the load factor guarantees.
    pub(crate) fn place(&mut self, mut hash: u64, mut entry: Bucket<K, V>) {
        let cap = self.cap();
        let mut pos = self.home_of(hash);
        let mut dist = 0;

        loop {
            let meta = self.meta[pos];
            if meta.is_empty() {
                self.slots[pos] = entry;
                self.meta[pos] = SlotMeta::live(hash);
                return;
            }

            let existing = self.probe_distance(meta.hash, pos);
            if existing < dist {
                if meta.tomb {
                    self.slots[pos] = entry;
                    self.meta[pos] = SlotMeta::live(hash);
                    self.tombs -= 1;
                    return;
                }

                // The resident is closer to its ideal slot, so it gives the slot up and continues
                // probing in place of the incoming entry.
                mem::swap(&mut self.slots[pos], &mut entry);
                mem::swap(&mut self.meta[pos].hash, &mut hash);
                dist = existing;
            }

            dist += 1;
            pos = (pos + 1) % cap;
        }
    }

    /// Finds the slot holding `key`, or None if there is no such entry.
    pub(crate) fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(self.hash_of(key), key)
    }

    /// Finds the slot holding `key` given its already computed hash. Searching stops at an empty
    /// slot, or once it has travelled further than the resident of the current slot, as Robin
    /// Hood placement would have put the key there instead.
    fn find<Q>(&self, hash: u64, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let cap = self.cap();
        if cap == 0 { return None; }

        let mut pos = self.home_of(hash);
        let mut dist = 0;

        loop {
            let meta = self.meta[pos];
            if meta.is_empty() || dist > self.probe_distance(meta.hash, pos) {
                return None;
            }

            // Tombstones keep their hash but never match.
            if meta.is_live()
                && meta.hash == hash
                && let Some((existing, _)) = &self.slots[pos]
                && existing.borrow() == key
            {
                return Some(pos);
            }

            dist += 1;
            pos = (pos + 1) % cap;
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_balance(&self) {
        let cap = self.cap();
        for pos in 0..cap {
            let meta = self.meta[pos];
            if meta.is_empty() { continue; }

            let dist = self.probe_distance(meta.hash, pos);
            let prev = self.meta[(pos + cap - 1) % cap];
            if prev.is_empty() {
                assert_eq!(dist, 0, "A slot after an empty slot should be in its ideal position.");
            } else {
                assert!(
                    dist <= self.probe_distance(prev.hash, (pos + cap - 1) % cap) + 1,
                    "Probe distance shouldn't increase by more than 1 between neighbours."
                );
            }
        }
        assert_eq!(self.slots.iter().flatten().count(), self.len);
        assert_eq!(self.meta.iter().filter(|m| m.tomb).count(), self.tombs);
    }
}

fn empty_slots<K, V>(cap: usize) -> (Box<[Bucket<K, V>]>, Box<[SlotMeta]>) {
    (
        iter::repeat_with(|| None).take(cap).collect(),
        iter::repeat_n(SlotMeta::EMPTY, cap).collect(),
    )
}

impl<K, Q, V, B> Index<&Q> for HashMap<K, V, B>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    B: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).ok_or(MissingKey).throw()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        HashMap {
            slots: self.slots.clone(),
            meta: self.meta.clone(),
            len: self.len,
            tombs: self.tombs,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("buckets", &DebugBuckets(self))
            .field("len", &self.len)
            .field("tombs", &self.tombs)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

struct DebugBuckets<'a, K: Hash + Eq, V, B: BuildHasher>(&'a HashMap<K, V, B>);

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for DebugBuckets<'_, K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(
            self.0.slots.iter()
                .zip(self.0.meta.iter())
                .map(|(bucket, meta)| DebugRaw(match bucket {
                    Some((k, v)) => format!("({k:?}: {v:?})"),
                    None if meta.tomb => "x".into(),
                    None => "-".into(),
                }))
        ).finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
