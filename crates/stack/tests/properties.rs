//! Property-based tests for stack invariants

use proptest::prelude::*;
use strata_stack::{DynamicStack, StaticStack};

/// Smallest `initial * 2^k` that holds `n` elements
fn doubled_capacity(initial: usize, n: usize) -> usize {
    let mut capacity = initial;
    while capacity < n {
        capacity *= 2;
    }
    capacity
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![3 => any::<i32>().prop_map(Op::Push), 1 => Just(Op::Pop)]
}

proptest! {
    #[test]
    fn pops_reverse_pushes(items in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut stack = DynamicStack::new().unwrap();
        stack.push_all(items.iter().copied()).unwrap();

        let mut popped = Vec::with_capacity(items.len());
        while let Some(item) = stack.try_pop() {
            popped.push(item);
        }
        popped.reverse();

        prop_assert_eq!(popped, items);
        prop_assert!(stack.is_empty());
    }

    #[test]
    fn dynamic_capacity_doubles_from_initial(initial in 1usize..64, n in 0usize..600) {
        let mut stack = DynamicStack::with_capacity(initial).unwrap();
        stack.push_all(0..n).unwrap();

        prop_assert_eq!(stack.size(), n);
        prop_assert_eq!(stack.capacity(), doubled_capacity(initial, n));
    }

    #[test]
    fn static_capacity_never_changes(capacity in 1usize..64, ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut stack = StaticStack::with_capacity(capacity).unwrap();

        for op in ops {
            match op {
                Op::Push(value) => {
                    let was_full = stack.is_full();
                    prop_assert_eq!(stack.push(value).is_err(), was_full);
                }
                Op::Pop => {
                    stack.try_pop();
                }
            }
            prop_assert_eq!(stack.capacity(), capacity);
        }
    }

    #[test]
    fn size_accounting(ops in prop::collection::vec(op_strategy(), 0..300)) {
        let mut stack = DynamicStack::new().unwrap();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    stack.push(value).unwrap();
                    model.push(value);
                }
                Op::Pop => {
                    prop_assert_eq!(stack.try_pop(), model.pop());
                }
            }

            prop_assert_eq!(stack.size(), model.len());
            prop_assert_eq!(stack.top(), model.len() as isize - 1);
            prop_assert_eq!(stack.is_empty(), model.is_empty());
            prop_assert_eq!(stack.is_full(), stack.size() == stack.capacity());
            prop_assert_eq!(stack.try_peek(), model.last());
        }
    }

    #[test]
    fn for_each_visits_bottom_to_top(items in prop::collection::vec(any::<u16>(), 0..100)) {
        let mut stack = DynamicStack::new().unwrap();
        stack.push_all(items.iter().copied()).unwrap();

        let mut seen = Vec::new();
        stack.for_each(&mut seen, |item, seen| seen.push(*item));

        prop_assert_eq!(seen, items);
    }
}
