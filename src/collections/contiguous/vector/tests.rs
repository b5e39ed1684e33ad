#![cfg(test)]

use super::*;
use crate::iter::{CursorError, Position};
use crate::util::alloc::DropCounter;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_growth() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    vec.push(420);
    assert_eq!(vec.cap(), DEFAULT_CAP, "The first growth should allocate the default capacity.");

    for i in 1..=DEFAULT_CAP {
        vec.push(i);
    }
    assert_eq!(vec.cap(), DEFAULT_CAP * 2, "Later growth should double the capacity.");
    assert_eq!(vec.len(), DEFAULT_CAP + 1);

    let mut vec: Vector<u8> = Vector::new();
    vec.reserve(1);
    vec.push(1);
    assert_eq!(vec.cap(), 1);
    vec.reserve(1);
    assert_eq!(vec.cap(), 2, "Reserving should provide exactly the requested capacity.");
    vec.reserve(0);
    assert_eq!(vec.cap(), 2, "Reserving less than the current capacity shouldn't shrink.");
}

#[test]
fn test_shrink_to_fit() {
    let mut vec = Vector::from([3, 1, 4]);
    vec.reserve(10);
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3, "Shrinking should set the capacity to the length.");
    assert_eq!(&*vec, &[3, 1, 4], "Shrinking should keep every value.");

    vec.clear();
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 0);
}

#[test]
fn test_insert_and_remove() {
    let mut vec = Vector::from([23, 64, 9, 1]);
    vec.insert(4, 7);
    vec.insert(2, 11);
    vec.insert(0, 13);
    assert_eq!(&*vec, &[13, 23, 64, 11, 9, 1, 7]);

    assert_eq!(vec.remove(0), 13);
    assert_eq!(vec.remove(5), 7);
    assert_eq!(&*vec, &[23, 64, 11, 9, 1]);

    assert_eq!(
        vec.try_remove(5),
        Err(IndexOutOfBounds { index: 5, len: 5 }),
        "Removing at len should fail."
    );
    assert!(
        vec.try_insert(7, 0).is_err_and(|e| e.is_index_out_of_bounds()),
        "Inserting past len should fail."
    );
    assert_panics!({
        let mut vec = Vector::from([1]);
        vec.remove(1);
    });
}

#[test]
fn test_pop_and_clear() {
    let mut vec = Vector::from([2, 3]);
    assert_eq!(vec.pop(), Some(3));
    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec.pop(), None);
    assert!(vec.is_empty());

    vec.extend([1, 2, 3]);
    let cap = vec.cap();
    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), cap, "Clearing should keep the capacity.");
}

#[test]
fn test_clone_and_eq() {
    let mut a = Vector::from([3]);
    let b = a.clone();
    assert_eq!(a, b);

    a[0] = 5;
    assert_ne!(a, b, "A clone shouldn't share storage with the original.");

    a[0] += 3;
    a[0] *= 8;
    assert_eq!(a[0], 64);
    assert_eq!(a.replace(0, 1), 64);
}

#[test]
fn test_sort() {
    let mut vec = Vector::from([4, 134, 334, 1, 734, 2, 3, 8923, 234]);
    vec.sort();
    assert_eq!(&*vec, &[1, 2, 3, 4, 134, 234, 334, 734, 8923]);

    let mut vec = Vector::from([5, 5, 1, 5, 1]);
    vec.sort();
    assert_eq!(&*vec, &[1, 1, 5, 5, 5], "Duplicates should be handled.");

    let mut vec: Vector<u8> = Vector::new();
    vec.sort();
    assert!(vec.is_empty());
}

#[test]
fn test_sort_many_duplicates() {
    let mut vec: Vector<u8> = (0..200_000).map(|_| 7).collect();
    vec.sort();
    assert!(vec.iter().all(|value| *value == 7), "Sorting equal values shouldn't lose any.");

    let mut vec: Vector<u8> = (0..200_000_u32).map(|i| (i % 2) as u8).collect();
    vec.sort();
    assert!(vec.is_sorted(), "Two distinct keys should sort without deep recursion.");
    assert_eq!(vec.iter().filter(|value| **value == 0).count(), 100_000);

    let mut vec: Vector<u32> = (0..50_000).map(|i| (i * 7919) % 13).collect();
    vec.sort();
    assert!(vec.is_sorted());
}

#[test]
fn test_drops() {
    let counter = DropCounter::new();
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(counter.clone());
    }

    drop(vec.remove(3));
    drop(vec.pop());
    assert_eq!(counter.drops(), 2);

    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.drops(), 4);
    assert_eq!(iter.len(), 6);

    drop(iter);
    assert_eq!(counter.drops(), 10, "Dropping IntoIter should drop the remaining values.");

    let mut vec = Vector::from([counter.clone(), counter.clone()]);
    vec.clear();
    assert_eq!(counter.drops(), 12);
    vec.push(counter.clone());
    drop(vec);
    assert_eq!(counter.drops(), 13);
}

#[test]
fn test_into_iter() {
    let vec = Vector::from([1, 2, 3, 4]);
    let mut iter = vec.into_iter();
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), &[1, 2, 3]);
    assert_eq!(iter.collect::<Vector<_>>(), Vector::from([1, 2, 3]));
}

#[test]
fn test_cursor_navigation() {
    let vec = Vector::from(['a', 'b', 'c']);

    let mut cursor = vec.cursor_head();
    assert!(!cursor.valid());
    assert_eq!(cursor.value(), Err(CursorError::BeforeStart));
    assert_eq!(cursor.prev(), Err(CursorError::BeforeStart));

    cursor.next().unwrap();
    assert_eq!(cursor.position(), Position::At(0));
    assert_eq!(cursor.value(), Ok(&'a'));

    cursor.next().unwrap();
    cursor.next().unwrap();
    assert_eq!(cursor.value(), Ok(&'c'));

    cursor.next().unwrap();
    assert_eq!(cursor.position(), Position::Tail);
    assert_eq!(cursor.value(), Err(CursorError::PastEnd));
    assert_eq!(cursor.next(), Err(CursorError::PastEnd));
    assert_eq!(cursor.position(), Position::Tail, "A failed move shouldn't change position.");

    cursor.prev().unwrap();
    assert_eq!(cursor.value(), Ok(&'c'));
    assert_eq!(cursor, vec.cursor_back());

    let empty: Vector<char> = Vector::new();
    assert_eq!(empty.cursor_front().position(), Position::Tail);
    assert_eq!(empty.cursor_back().position(), Position::Head);
}

#[test]
fn test_cursor_stale_index() {
    let long = Vector::from([1, 2, 3]);
    let short = Vector::from([1]);

    let pos = Position::At(2);
    let cursor = crate::iter::Cursor::new(&short, pos);
    assert_eq!(cursor.value(), Err(CursorError::Stale));
    assert!(!cursor.valid());

    let cursor = crate::iter::Cursor::new(&long, pos);
    assert_eq!(cursor.value(), Ok(&3));
    assert_ne!(cursor, crate::iter::Cursor::new(&short, pos), "Different sources aren't equal.");
}
