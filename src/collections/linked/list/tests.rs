#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::{iter, mem};

use super::*;
use crate::util::alloc::{CloneBomb, CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_get_order() {
    let mut list = FastList::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);

    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0), &1, "Elements should be reachable in push order.");
    assert_eq!(list.get(1), &2);
    assert_eq!(list.get(2), &3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    list.check_invariants();
}

#[test]
fn test_push_front_links_previous_elements() {
    let mut list: FastList<usize> = (0..4).collect();
    list.push_front(99);

    assert_eq!(list.len(), 5);
    assert_eq!(list.get(0), &99);
    for i in 0..4 {
        assert_eq!(
            list.get(i + 1),
            &i,
            "Existing elements should sit one position later, in their old order."
        );
    }
    assert_eq!(
        list.back(),
        Some(&3),
        "The old tail should still be reachable through the new head."
    );

    list.push_back(100);
    assert_eq!(
        list.get(5),
        &100,
        "Appending after a front push should land past the old tail."
    );
    list.check_invariants();
}

#[test]
fn test_ascending_reads_ride_the_cursor() {
    let list: FastList<usize> = (0..100).collect();
    assert_eq!(list.hops(), 0, "Pushes shouldn't traverse any links.");

    for i in 0..100 {
        assert_eq!(list.get(i), &i);
    }
    assert_eq!(
        list.hops(),
        99,
        "A full ascending sweep should walk each link exactly once."
    );

    list.get(50);
    assert_eq!(
        list.hops(),
        149,
        "Stepping back before the cursor should restart from the head."
    );

    list.get(99);
    assert_eq!(
        list.hops(),
        198,
        "Moving forwards again should resume from the cursor."
    );
}

#[test]
fn test_descending_reads_restart_from_the_head() {
    let list: FastList<usize> = (0..10).collect();

    for i in (0..10).rev() {
        assert_eq!(list.get(i), &i);
    }
    assert_eq!(
        list.hops(),
        45,
        "A descending sweep can never use the cursor, so every read walks from the head."
    );
}

#[test]
fn test_repeated_reads_at_one_position_are_free() {
    let list: FastList<usize> = (0..10).collect();
    list.get(5);
    assert_eq!(list.hops(), 5);

    for _ in 0..100 {
        assert_eq!(list.get(5), &5);
    }
    assert_eq!(
        list.hops(),
        5,
        "Reading the cursor's exact position shouldn't walk any links."
    );
}

#[test]
fn test_cursor_survives_push_front() {
    let mut list: FastList<usize> = (0..5).collect();
    list.get(2);
    assert_eq!(list.hops(), 2);

    list.push_front(99);
    assert_eq!(
        list.get(3),
        &2,
        "The cursor's element should have moved up one position."
    );
    assert_eq!(
        list.hops(),
        2,
        "Reading the cursor's shifted position shouldn't walk any links."
    );
    list.check_invariants();
}

#[test]
fn test_cursor_survives_push_back() {
    let mut list: FastList<usize> = (0..5).collect();
    list.get(4);
    assert_eq!(list.hops(), 4);

    list.push_back(5);
    assert_eq!(list.get(5), &5);
    assert_eq!(
        list.hops(),
        5,
        "A new element behind the cursor should be one hop away."
    );
    list.check_invariants();
}

#[test]
fn test_remove_shifts_later_elements() {
    let mut list: FastList<usize> = (0..5).collect();

    assert_eq!(list.remove(2), 2, "Removal should return the element's value.");
    assert_eq!(list.len(), 4);
    assert_eq!(
        list,
        [0, 1, 3, 4].into_iter().collect(),
        "Elements after the removed position should shift down by one."
    );
    list.check_invariants();
}

#[test]
fn test_remove_leaves_cursor_on_predecessor() {
    let mut list: FastList<usize> = (0..100).collect();

    for i in 0..5 {
        assert_eq!(list.remove(10), 10 + i);
    }
    assert_eq!(
        list.hops(),
        9,
        "Removing at one index repeatedly should only seek the predecessor once."
    );
    assert_eq!(list.len(), 95);

    assert_eq!(list.get(10), &15);
    assert_eq!(
        list.hops(),
        10,
        "The element now at the removed index should be one hop from the cursor."
    );
    list.check_invariants();
}

#[test]
fn test_remove_head_clears_cursor() {
    let mut list: FastList<usize> = (0..4).collect();
    list.get(2);
    assert_eq!(list.hops(), 2);

    assert_eq!(list.remove(0), 0);
    assert_eq!(
        list.get(1),
        &2,
        "Elements should have shifted down one position."
    );
    assert_eq!(
        list.hops(),
        3,
        "Removing the head leaves no predecessor to stand on, so the next read walks from the head."
    );
    list.check_invariants();
}

#[test]
fn test_remove_tail_repairs_tail() {
    let mut list: FastList<usize> = (0..4).collect();

    assert_eq!(list.remove(3), 3);
    assert_eq!(
        list.back(),
        Some(&2),
        "The removed node's predecessor should become the tail."
    );

    list.push_back(9);
    assert_eq!(
        list.get(3),
        &9,
        "Pushing after a tail removal should link through the new tail."
    );
    list.check_invariants();
}

#[test]
fn test_out_of_bounds_leaves_list_untouched() {
    let mut list: FastList<usize> = (0..4).collect();
    list.get(2);

    assert_eq!(list.try_get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(list.try_get_mut(7), Err(IndexOutOfBounds { index: 7, len: 4 }));
    assert_eq!(list.try_replace(4, 99), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(list.try_remove(4), Err(IndexOutOfBounds { index: 4, len: 4 }));

    assert_eq!(list.len(), 4);
    assert_eq!(
        list,
        (0..4).collect(),
        "Failed operations shouldn't change the contents."
    );
    assert_eq!(
        IndexOutOfBounds { index: 4, len: 4 }.to_string(),
        "Index 4 out of bounds for collection with 4 elements!"
    );
    list.check_invariants();

    let mut empty = FastList::<usize>::new();
    assert_eq!(empty.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(empty.try_remove(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    empty.check_invariants();
}

#[test]
fn test_panicking_accessors() {
    assert_panics!({
        let _ = FastList::<usize>::new().get(0);
    });
    assert_panics!({
        let mut list: FastList<usize> = (0..3).collect();
        list.remove(3);
    });
    assert_panics!({
        let list: FastList<usize> = (0..3).collect();
        let _ = list[5];
    });
}

#[test]
fn test_pop_front_and_back() {
    let mut list: FastList<usize> = (0..3).collect();

    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_back(), None, "An empty list has nothing to pop.");
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
    list.check_invariants();

    list.push_back(7);
    assert_eq!(
        list.pop_front(),
        Some(7),
        "A single element is both the front and the back."
    );
    assert!(list.is_empty());
}

#[test]
fn test_front_and_back_accessors() {
    let mut list = FastList::new();
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert_eq!(list.front_mut(), None);
    assert_eq!(list.back_mut(), None);

    list.push_back(1);
    list.push_back(2);
    *list.front_mut().unwrap() += 10;
    *list.back_mut().unwrap() *= 10;
    assert_eq!(list.front(), Some(&11));
    assert_eq!(list.back(), Some(&20));

    *list.push_back(3) += 30;
    assert_eq!(
        list.back(),
        Some(&33),
        "The reference returned by push_back should point at the new element."
    );
    *list.push_front(4) += 40;
    assert_eq!(list.front(), Some(&44));
    list.check_invariants();
}

#[test]
fn test_replace_keeps_shape() {
    let mut list: FastList<usize> = (0..5).collect();

    assert_eq!(list.replace(3, 99), 3, "Replacing should return the old value.");
    assert_eq!(list.hops(), 3);
    assert_eq!(list.get(3), &99);
    assert_eq!(
        list.hops(),
        3,
        "Replacing resolves its position like a read and leaves the cursor there."
    );
    assert_eq!(list.len(), 5);
    list.check_invariants();
}

#[test]
fn test_clear_and_reuse() {
    let counter = CountedDrop::new();
    let mut list: FastList<CountedDrop> = iter::repeat_with(|| counter.clone()).take(10).collect();
    list.get(4);

    list.clear();
    assert_eq!(counter.take(), 10, "Clearing should drop every element.");
    assert!(list.is_empty());
    list.check_invariants();

    list.push_back(counter.clone());
    assert_eq!(list.len(), 1, "A cleared list should accept new elements.");

    drop(list);
    assert_eq!(counter.take(), 1);
}

#[test]
fn test_take_moves_the_list() {
    let counter = CountedDrop::new();
    let mut source: FastList<CountedDrop> = iter::repeat_with(|| counter.clone()).take(4).collect();
    source.get(2);

    let moved = mem::take(&mut source);
    assert_eq!(counter.take(), 0, "Moving a list shouldn't drop any elements.");
    assert!(source.is_empty(), "The source should be left empty.");
    assert_eq!(moved.len(), 4);
    source.check_invariants();
    moved.check_invariants();

    drop(source);
    drop(moved);
    assert_eq!(counter.take(), 4, "The moved list should own every element.");
}

#[test]
fn test_remove_frees_only_the_removed_element() {
    let counter = CountedDrop::new();
    let mut list: FastList<CountedDrop> = iter::repeat_with(|| counter.clone()).take(6).collect();

    let removed = list.remove(2);
    assert_eq!(counter.take(), 0, "Removal should hand the element over, not drop it.");
    drop(removed);
    assert_eq!(counter.take(), 1, "Dropping the removed value should drop exactly one element.");

    let popped = (list.pop_front(), list.pop_back());
    assert_eq!(counter.take(), 0);
    drop(popped);
    assert_eq!(counter.take(), 2, "Popped values should account the same way.");

    list.check_invariants();
    drop(list);
    assert_eq!(counter.take(), 3, "The remaining elements should drop with the list.");
}

#[test]
fn test_drop_frees_all_elements() {
    let counter = CountedDrop::new();
    let list: FastList<CountedDrop> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list);
    assert_eq!(counter.take(), 10, "Dropping the list should drop every element.");

    let counter = CountedDrop::new();
    let mut iter = iter::repeat_with(|| counter.clone())
        .take(5)
        .collect::<FastList<_>>()
        .into_iter();
    iter.next();
    iter.next();

    drop(iter);
    assert_eq!(
        counter.take(),
        5,
        "Dropping a part-consumed owning iterator should still drop every element."
    );
}

#[test]
fn test_clone_is_deep() {
    let mut list: FastList<usize> = (0..5).collect();
    list.get(3);

    let copy = list.clone();
    assert_eq!(copy, list);
    assert_eq!(copy.hops(), 0, "A fresh clone starts with no cursor history.");

    list.replace(0, 99);
    list.remove(2);
    assert_eq!(
        copy,
        (0..5).collect(),
        "Changing the original shouldn't affect the clone."
    );
    copy.check_invariants();
}

#[test]
fn test_clone_failure_drops_partial_copy() {
    let counter = CountedDrop::new();
    let bomb = CloneBomb::arm(9, &counter);
    let list: FastList<CloneBomb> = iter::repeat_with(|| bomb.clone()).take(6).collect();
    assert_eq!(counter.take(), 0, "Building the list shouldn't drop anything.");

    assert_panics!({
        let _ = list.clone();
    });
    assert_eq!(
        counter.take(),
        3,
        "The partial clone should drop exactly the elements it managed to copy."
    );
    assert_eq!(list.len(), 6, "A failed clone shouldn't touch the original.");
    list.check_invariants();

    drop(list);
    assert_eq!(counter.take(), 6);
}

#[test]
fn test_iterators() {
    let mut list: FastList<usize> = (0..5).collect();

    assert!(
        list.iter().copied().eq(0..5),
        "Iteration should visit elements front to back."
    );
    assert_eq!(list.iter().len(), 5);
    assert_eq!(list.hops(), 4, "A full shared iteration costs one hop per link.");

    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(
        list,
        [0, 2, 4, 6, 8].into_iter().collect(),
        "Mutation through the iterator should stick."
    );
    assert_eq!(
        list.hops(),
        4,
        "The mutable iterator walks the chain directly, without the cursor."
    );

    let mut iter = list.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), Some(4));
    assert_eq!(iter.next(), Some(6));
    assert_eq!(iter.next(), Some(8));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None, "A finished iterator should stay finished.");
}

#[test]
fn test_extend_and_default() {
    let mut list: FastList<usize> = (0..3).collect();
    list.extend(3..6);

    assert_eq!(list, (0..6).collect(), "Extending should append in order.");
    assert_eq!(FastList::<usize>::default(), FastList::new());
}

#[test]
fn test_index_operators() {
    let mut list: FastList<usize> = (0..4).collect();

    assert_eq!(list[2], 2);
    list[2] = 99;
    assert_eq!(list[2], 99);
}

#[test]
fn test_contains_and_index_of() {
    let list: FastList<usize> = (10..20).collect();

    assert!(list.contains(&15));
    assert!(!list.contains(&25));
    assert_eq!(list.index_of(&12), Some(2));
    assert_eq!(list.index_of(&99), None);
}

#[test]
fn test_equality_and_hash() {
    let a: FastList<usize> = (0..5).collect();
    let b: FastList<usize> = (0..5).collect();
    b.get(3);

    assert_eq!(a, b, "The cursor shouldn't participate in equality.");
    assert_ne!(a, (0..4).collect());
    assert_ne!(a, FastList::new());

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&a),
        state.hash_one(&b),
        "Equal lists should hash alike."
    );
}

#[test]
fn test_display_and_debug() {
    let list: FastList<usize> = (1..4).collect();

    assert_eq!(list.to_string(), "(1) -> (2) -> (3)");
    assert_eq!(FastList::<usize>::new().to_string(), "()");
    assert_eq!(format!("{list:?}"), "FastList { contents: [1, 2, 3], len: 3 }");
}

#[test]
fn test_elements_need_no_trait_bounds() {
    struct Opaque(u8);

    let mut list = FastList::new();
    list.push_back(Opaque(1));
    list.push_front(Opaque(0));
    list.get(1);
    list.check_invariants();

    let Opaque(front) = list.remove(0);
    assert_eq!(front, 0, "The list should work without any bounds on the element type.");
    list.check_invariants();
}

#[test]
fn test_zst_support() {
    let mut list = FastList::new();
    for _ in 0..5 {
        list.push_back(ZeroSizedType);
    }

    assert_eq!(list.len(), 5);
    assert_eq!(list.get(4), &ZeroSizedType, "Indexing should work for ZST elements.");
    assert_eq!(list.remove(2), ZeroSizedType);
    assert_eq!(list.iter().count(), 4);
    list.check_invariants();
}

#[test]
fn test_mixed_operations() {
    let mut list = FastList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_back(3);

    assert_eq!(list.get(0), &1);
    assert_eq!(list.get(1), &2);
    assert_eq!(list.get(2), &3);
    assert_eq!(list.hops(), 2);

    assert_eq!(list.replace(1, 20), 2);
    assert_eq!(list.remove(1), 20);
    assert_eq!(list, [1, 3].into_iter().collect());

    list.push_front(0);
    list.push_back(4);
    assert_eq!(list, [0, 1, 3, 4].into_iter().collect());
    list.check_invariants();
}
