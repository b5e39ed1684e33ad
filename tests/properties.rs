#![cfg(all(feature = "contiguous", feature = "linked", feature = "hash"))]

use std::collections::HashMap as StdHashMap;

use lazy_collections::collections::{HashMap, LinkedList, Vector};
use lazy_collections::iter::{CursorError, Position};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_filter_yields_exactly_matches(values in proptest::collection::vec(any::<i16>(), 0..64), modulus in 1i16..8) {
        let vec: Vector<i16> = values.iter().copied().collect();
        let accepts = |x: &&i16| **x % modulus == 0;

        let filtered: Vec<i16> = vec.cursor_front().filter(accepts).values().copied().collect();
        let expected: Vec<i16> = values.iter().copied().filter(|x| x % modulus == 0).collect();
        prop_assert_eq!(&filtered, &expected);

        let mut reversed: Vec<i16> = vec.cursor_back().filter_back(accepts).values_rev().copied().collect();
        reversed.reverse();
        prop_assert_eq!(&reversed, &expected);
    }

    #[test]
    fn prop_filter_moves_stop_on_matches(values in proptest::collection::vec(0u8..10, 0..48), steps in proptest::collection::vec(any::<bool>(), 0..96)) {
        let list: LinkedList<u8> = values.into_iter().collect();
        let mut cursor = list.cursor_front().filter(|x| **x >= 5);

        for forward in steps {
            let before = cursor.position();
            let moved = if forward { cursor.next() } else { cursor.prev() };
            match moved {
                Ok(()) => {
                    let pos = cursor.position();
                    prop_assert!(pos.is_head() || pos.is_tail() || cursor.value().is_ok_and(|x| *x >= 5));
                },
                Err(error) => {
                    prop_assert!(error == CursorError::PastEnd || error == CursorError::BeforeStart);
                    prop_assert_eq!(cursor.position(), before);
                },
            }
        }
    }

    #[test]
    fn prop_map_matches_underlying(values in proptest::collection::vec(any::<i32>(), 1..32), index in any::<prop::sample::Index>()) {
        let vec: Vector<i32> = values.iter().copied().collect();
        let target = index.index(values.len());

        let mut cursor = vec.cursor_front().map(|x| x.wrapping_mul(3));
        for _ in 0..target {
            cursor.next().unwrap();
        }
        prop_assert_eq!(cursor.position(), Position::At(target));
        prop_assert_eq!(cursor.value(), Ok(values[target].wrapping_mul(3)));
        prop_assert_eq!(cursor.value(), cursor.value());
    }

    #[test]
    fn prop_hash_map_matches_model(ops in proptest::collection::vec((0u8..3, 0u16..64, any::<u32>()), 1..256)) {
        let mut map: HashMap<u16, u32> = HashMap::new();
        let mut model: StdHashMap<u16, u32> = StdHashMap::new();

        for (op, key, value) in ops {
            match op {
                0 => {
                    prop_assert_eq!(map.insert(key, value), model.insert(key, value));
                },
                1 => {
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                },
                _ => {
                    prop_assert_eq!(map.get(&key), model.get(&key));
                },
            }
            prop_assert_eq!(map.len(), model.len());
        }

        for (key, value) in &model {
            prop_assert!(map.contains(key));
            prop_assert_eq!(map.get(key), Some(value));
        }
        prop_assert_eq!(map.iter().count(), model.len());
    }
}
