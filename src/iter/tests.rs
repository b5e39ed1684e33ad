#![cfg(all(test, feature = "contiguous", feature = "linked", feature = "range"))]

use std::cell::Cell;

use super::*;
use crate::collections::{LinkedList, Range, Vector};

#[test]
fn test_map_then_filter() {
    let vec: Vector<f32> = [123.5, 645.026, 9.78, 1.0].into_iter().collect();
    let found: Vec<f32> = vec.cursor_front()
        .map(|x| x * x)
        .filter(|x| *x < 100.0)
        .values()
        .collect();
    assert_eq!(found, [9.78 * 9.78, 1.0], "Only the small squares should be visited.");

    let list: LinkedList<f32> = vec.iter().copied().collect();
    let mut cursor = list.cursor_back()
        .map(|x| x * x)
        .filter_back(|x| *x < 100.0);
    assert_eq!(cursor.value(), Ok(1.0));
    cursor.prev().unwrap();
    assert_eq!(cursor.value(), Ok(9.78 * 9.78));
    cursor.prev().unwrap();
    assert_eq!(cursor.position(), Position::Head, "Rejected values shouldn't stop a move.");
}

#[test]
fn test_filter_visits_matches_in_order() {
    let list: LinkedList<u32> = [7, 2, 9, 4, 4, 1, 8, 3].into_iter().collect();
    let even = |x: &&u32| **x % 2 == 0;

    let mut cursor = list.cursor_front().filter(even);
    let mut seen = Vec::new();
    while cursor.valid() {
        let value = cursor.value().unwrap();
        assert!(even(&value), "A filtered cursor should only stop on accepted values.");
        seen.push(*value);
        cursor.next().unwrap();
    }
    assert_eq!(seen, [2, 4, 4, 8]);
    assert_eq!(cursor.position(), Position::Tail);
    assert_eq!(cursor.next(), Err(CursorError::PastEnd));
    assert_eq!(cursor.position(), Position::Tail, "A failed move shouldn't change position.");

    let backward: Vec<u32> = list.cursor_back()
        .filter_back(even)
        .values_rev()
        .copied()
        .collect();
    assert_eq!(backward, [8, 4, 4, 2]);

    let none: Vec<&u32> = list.cursor_front().filter(|x| **x > 100).values().collect();
    assert!(none.is_empty());
}

#[test]
fn test_filter_rejected_read() {
    let vec = Vector::from([1, 2, 3]);
    let cursor = vec.cursor_front().filter(|x| **x > 1);
    assert_eq!(cursor.position(), Position::At(1), "Construction should skip to a match.");

    let rejected = Cursor::new(cursor.source().clone(), Position::At(0));
    assert!(!rejected.valid());
    assert_eq!(rejected.value(), Err(CursorError::Rejected));
}

#[test]
fn test_map_is_recomputed() {
    let calls = Cell::new(0);
    let vec = Vector::from([1, 2, 3]);
    let mut cursor = vec.cursor_front().map(|x| {
        calls.set(calls.get() + 1);
        x * 10
    });

    assert_eq!(calls.get(), 0, "Mapping shouldn't produce any values up front.");
    assert_eq!(cursor.value(), Ok(10));
    assert_eq!(cursor.value(), Ok(10));
    assert_eq!(calls.get(), 2, "Every read should apply the transform again.");

    cursor.next().unwrap();
    assert_eq!(cursor.value(), Ok(20), "Reads should follow the underlying position.");
    cursor.seek_back();
    assert_eq!(cursor.value(), Ok(30));
    assert_eq!(calls.get(), 4);
}

#[test]
fn test_stacked_layers() {
    let range = Range::to(30);
    let cursor = range.cursor_front()
        .filter(|i| i % 3 == 0)
        .map(|i| i * i)
        .filter(|i| i % 2 == 1)
        .map(|i| i.to_string());

    let values: Vec<String> = cursor.clone().values().collect();
    assert_eq!(values, ["9", "81", "225", "441", "729"]);

    let mut cursor = cursor;
    cursor.seek_back();
    assert_eq!(cursor.value().as_deref(), Ok("729"));
    assert_eq!(cursor.position(), Position::At(27));
    cursor.rewind();
    assert_eq!(cursor.prev(), Err(CursorError::BeforeStart));
    cursor.next().unwrap();
    assert_eq!(cursor.value().as_deref(), Ok("9"));
}

fn double(x: &i32) -> i32 {
    x * 2
}

#[test]
fn test_cursor_equality() {
    let a = Vector::from([1, 2, 3]);
    let b = a.clone();

    assert_eq!(a.cursor_front(), a.cursor_front());
    assert_ne!(a.cursor_front(), b.cursor_front(), "Cursors over different sources differ.");
    assert_ne!(a.cursor_front(), a.cursor_back());

    let mut mapped = a.cursor_front().map(double);
    mapped.next().unwrap();
    let mut other = a.cursor_back().map(double);
    other.prev().unwrap();
    assert_eq!(mapped, other, "Layers should compare by their underlying source.");
}

#[test]
fn test_values_bridge() {
    let vec = Vector::from(['a', 'b', 'c', 'd']);
    let mut values = vec.cursor_front().values();
    assert_eq!(values.next(), Some(&'a'));
    assert_eq!(values.next(), Some(&'b'));

    let cursor = values.into_cursor();
    assert_eq!(cursor.value(), Ok(&'c'));
    let rest: String = cursor.values_rev().collect();
    assert_eq!(rest, "cba");

    let mut values = vec.cursor_tail().values();
    assert_eq!(values.next(), None);
    assert_eq!(values.next(), None);
}
