use std::iter::FusedIterator;
use std::ptr;

use super::{LinkedList, ListContents, ListState, NodeKey};
use crate::iter::{CursorError, Iterable, Position};

impl<'a, T> Iterable for &'a LinkedList<T> {
    type Item = &'a T;

    type Pos = Position<NodeKey>;

    fn begin(&self) -> Self::Pos {
        match self.state {
            ListState::Empty => Position::Tail,
            ListState::Full(ListContents { head, .. }) => Position::At(head),
        }
    }

    fn end_sentinel(&self) -> Self::Pos {
        Position::Tail
    }

    fn rewind_sentinel(&self) -> Self::Pos {
        Position::Head
    }

    fn advance(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError> {
        match pos {
            Position::Head => Ok(self.begin()),
            Position::At(key) => match self.nodes.get(key) {
                Some(node) => Ok(Position::from(node.next)),
                None => Err(CursorError::Stale),
            },
            Position::Tail => Err(CursorError::PastEnd),
        }
    }

    fn retreat(&self, pos: Self::Pos) -> Result<Self::Pos, CursorError> {
        match pos {
            Position::Head => Err(CursorError::BeforeStart),
            Position::At(key) => match self.nodes.get(key) {
                Some(node) => Ok(node.prev.map_or(Position::Head, Position::At)),
                None => Err(CursorError::Stale),
            },
            Position::Tail => match self.state {
                ListState::Empty => Ok(Position::Head),
                ListState::Full(ListContents { tail, .. }) => Ok(Position::At(tail)),
            },
        }
    }

    fn is_live(&self, pos: Self::Pos) -> bool {
        matches!(pos, Position::At(key) if self.nodes.contains_key(key))
    }

    fn read(&self, pos: Self::Pos) -> Result<Self::Item, CursorError> {
        // Copy the reference out so the value borrows the list rather than self.
        let list: &'a LinkedList<T> = *self;
        match pos {
            Position::Head => Err(CursorError::BeforeStart),
            Position::At(key) => list.nodes
                .get(key)
                .map(|node| &node.value)
                .ok_or(CursorError::Stale),
            Position::Tail => Err(CursorError::PastEnd),
        }
    }

    fn origin(&self) -> *const () {
        ptr::from_ref::<LinkedList<T>>(*self).cast()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owned [`Iterator`] over the values of a [`LinkedList`].
pub struct IntoIter<T> {
    // There is no point rewriting all of this when the iterator can just hold the list and call
    // pop front/back.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}
