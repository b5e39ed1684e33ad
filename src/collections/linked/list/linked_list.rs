use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;
use slotmap::SlotMap;
use tracing::trace;

use super::{Link, Node, NodeKey};
use crate::iter::{Cursor, CursorError, Iterable, Position};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`Cursor`] for bi-directional iteration and
/// traversal.
///
/// Nodes are stored in a generational arena rather than individually allocated, and are referred
/// to by [`NodeKey`]s. A key held past the removal of its node reads as
/// [`CursorError::Stale`] instead of aliasing another node.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)` |
/// | `remove_at` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `append` | `O(m)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized, as the arena occasionally grows.
pub struct LinkedList<T> {
    pub(crate) nodes: SlotMap<NodeKey, Node<T>>,
    pub(crate) state: ListState,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListContents {
    pub head: NodeKey,
    pub tail: NodeKey,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            nodes: SlotMap::with_key(),
            state: Empty,
        }
    }

    /// Returns the length of the LinkedList.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(&self.nodes[head].value),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(&mut self.nodes[head].value),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(&self.nodes[tail].value),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(&mut self.nodes[tail].value),
        }
    }

    /// Add the provided element to the front of the LinkedList, returning the key of its node.
    pub fn push_front(&mut self, value: T) -> NodeKey {
        match self.state {
            Empty => self.push_single(value),
            Full(ListContents { head, tail }) => {
                let node = self.nodes.insert(Node {
                    value,
                    prev: None,
                    next: Some(head),
                });
                self.nodes[head].prev = Some(node);
                self.state = Full(ListContents { head: node, tail });
                node
            },
        }
    }

    /// Add the provided element to the back of the LinkedList, returning the key of its node.
    pub fn push_back(&mut self, value: T) -> NodeKey {
        match self.state {
            Empty => self.push_single(value),
            Full(ListContents { head, tail }) => {
                let node = self.nodes.insert(Node {
                    value,
                    prev: Some(tail),
                    next: None,
                });
                self.nodes[tail].next = Some(node);
                self.state = Full(ListContents { head, tail: node });
                node
            },
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => self.unlink(head),
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => self.unlink(tail),
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let key = self.checked_seek(index)?;
        Ok(&self.nodes[key].value)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let key = self.checked_seek(index)?;
        Ok(&mut self.nodes[key].value)
    }

    /// Inserts `value` so that it ends up at `index`, moving all following elements back by one.
    /// Inserting at `len` is equivalent to [`push_back`](LinkedList::push_back).
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    pub fn insert(&mut self, index: usize, value: T) -> NodeKey {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<NodeKey, IndexOutOfBounds> {
        let len = self.len();
        match index {
            0 => Ok(self.push_front(value)),
            val if val == len => Ok(self.push_back(value)),
            val if val > len => Err(IndexOutOfBounds { index, len }),
            val => {
                let next = self.checked_seek(val)?;
                let prev = self.nodes[next].prev;

                let node = self.nodes.insert(Node {
                    value,
                    prev,
                    next: Some(next),
                });
                self.nodes[next].prev = Some(node);
                // Not inserting at the front, so the node at index has a predecessor.
                if let Some(prev) = prev {
                    self.nodes[prev].next = Some(node);
                }
                Ok(node)
            },
        }
    }

    /// Removes and returns the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let key = self.checked_seek(index)?;
        self.unlink(key).ok_or(IndexOutOfBounds { index, len: self.len() })
    }

    /// Removes the element at the provided Cursor position, returning it along with the position
    /// of the element that followed it.
    ///
    /// # Examples
    /// ```
    /// # use lazy_collections::collections::LinkedList;
    /// # use lazy_collections::iter::{Cursor, CursorError};
    /// let mut list: LinkedList<_> = (1..=4).collect();
    ///
    /// let pos = list.cursor_front().filter(|v| **v % 2 == 0).position();
    /// let (removed, next) = list.remove_at(pos).unwrap();
    /// assert_eq!(removed, 2);
    /// assert_eq!(Cursor::new(&list, next).value(), Ok(&3));
    /// assert_eq!(list.remove_at(pos).unwrap_err(), CursorError::Stale);
    /// ```
    pub fn remove_at(
        &mut self,
        pos: Position<NodeKey>,
    ) -> Result<(T, Position<NodeKey>), CursorError> {
        let key = match pos {
            Position::Head => return Err(CursorError::BeforeStart),
            Position::At(key) => key,
            Position::Tail => return Err(CursorError::PastEnd),
        };

        let next = self.nodes.get(key).ok_or(CursorError::Stale)?.next;
        let value = self.unlink(key).ok_or(CursorError::Stale)?;
        Ok((value, Position::from(next)))
    }

    /// Replaces the element at `index` with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        mem::replace(self.get_mut(index), new_value)
    }

    /// Moves every element of `other` onto the back of this list, preserving their order.
    pub fn append(&mut self, other: LinkedList<T>) {
        for value in other {
            self.push_back(value);
        }
    }

    /// Removes every element from the list. Keys to the removed nodes become stale.
    pub fn clear(&mut self) {
        trace!(len = self.len(), "clearing LinkedList");
        self.nodes.clear();
        self.state = Empty;
    }

    /// Creates a Cursor pointing at the first element of the LinkedList.
    pub fn cursor_front(&self) -> Cursor<&LinkedList<T>> {
        Iterable::cursor_front(self)
    }

    /// Creates a Cursor pointing at the last element of the LinkedList.
    pub fn cursor_back(&self) -> Cursor<&LinkedList<T>> {
        Iterable::cursor_back(self)
    }

    /// Creates a Cursor pointing at the 'ghost' position before the first element.
    pub fn cursor_head(&self) -> Cursor<&LinkedList<T>> {
        Iterable::cursor_head(self)
    }

    /// Creates a Cursor pointing at the 'ghost' position after the last element.
    pub fn cursor_tail(&self) -> Cursor<&LinkedList<T>> {
        Iterable::cursor_tail(self)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.cursor_front().values().position(|element| element == item)
    }

    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn push_single(&mut self, value: T) -> NodeKey {
        let node = self.nodes.insert(Node {
            value,
            prev: None,
            next: None,
        });
        self.state = Full(ListContents { head: node, tail: node });
        node
    }

    /// Removes the node for `key` from both the arena and the chain of links, returning its value
    /// if it was still part of the list.
    pub(crate) fn unlink(&mut self, key: NodeKey) -> Option<T> {
        let Full(contents) = self.state else { return None; };
        let node = self.nodes.remove(key)?;

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => debug_assert_eq!(contents.head, key),
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => debug_assert_eq!(contents.tail, key),
        }

        let head = if contents.head == key { node.next } else { Some(contents.head) };
        let tail = if contents.tail == key { node.prev } else { Some(contents.tail) };
        self.state = ListState::from_ends(head, tail);

        Some(node.value)
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeKey, IndexOutOfBounds> {
        let len = self.len();
        match self.state {
            Full(contents) if index < len => Ok(self.seek(contents, index)),
            _ => Err(IndexOutOfBounds { index, len }),
        }
    }

    /// Walks to the node at `index` from whichever end is closer. `index` must be in bounds.
    pub(crate) fn seek(&self, contents: ListContents, index: usize) -> NodeKey {
        let len = self.len();
        if index < len / 2 {
            self.walk(contents.head, index, |node| node.next)
        } else {
            self.walk(contents.tail, len - 1 - index, |node| node.prev)
        }
    }

    fn walk(&self, mut key: NodeKey, count: usize, step: impl Fn(&Node<T>) -> Link) -> NodeKey {
        for _ in 0..count {
            match step(&self.nodes[key]) {
                Some(next) => key = next,
                None => break,
            }
        }
        key
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => assert!(self.nodes.is_empty()),
            Full(ListContents { head, tail }) => {
                assert!(self.nodes[head].prev.is_none());
                let mut count = 1;
                let mut curr = head;
                while let Some(next) = self.nodes[curr].next {
                    assert_eq!(self.nodes[next].prev, Some(curr));
                    curr = next;
                    count += 1;
                }
                assert_eq!(tail, curr);
                assert_eq!(count, self.len());
            },
        }
    }
}

impl ListState {
    pub(crate) const fn from_ends(head: Link, tail: Link) -> ListState {
        match (head, tail) {
            (Some(head), Some(tail)) => Full(ListContents { head, tail }),
            _ => Empty,
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.cursor_front().values().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.cursor_front().values().eq(other.cursor_front().values())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.cursor_front().values() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugValues(self))
            .field("len", &self.len())
            .finish()
    }
}

struct DebugValues<'a, T>(&'a LinkedList<T>);

impl<T: Debug> Debug for DebugValues<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.cursor_front().values()).finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.cursor_front().values().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
