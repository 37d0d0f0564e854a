// FQueue and FStack property tests against VecDeque / Vec models.
//
// Each step applies one operation to both the container and the model and
// compares the observable state: length, fullness, both ends and the full
// iteration order in both directions.
use std::collections::VecDeque;

use fcontainers::FQueue;
use fcontainers::FStack;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_queue_matches_vecdeque(
        capacity in 1usize..40,
        ops in proptest::collection::vec((0u8..=3u8, any::<i32>()), 1..300)
    ) {
        let mut queue = FQueue::with_capacity(capacity).unwrap();
        let bound = queue.capacity();
        prop_assert!(bound.is_power_of_two() && bound >= capacity);
        let mut model: VecDeque<i32> = VecDeque::new();

        for (op, value) in ops {
            match op {
                0 | 1 => {
                    let res = queue.enqueue(value);
                    if model.len() < bound {
                        prop_assert_eq!(res, Ok(()));
                        model.push_back(value);
                    } else {
                        prop_assert_eq!(res, Err(value));
                    }
                }
                2 => prop_assert_eq!(queue.dequeue(), model.pop_front()),
                3 => {
                    if value % 8 == 0 {
                        queue.clear();
                        model.clear();
                    }
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_full(), model.len() == bound);
            prop_assert_eq!(queue.front(), model.front());
            prop_assert_eq!(queue.back(), model.back());
            let index = value.unsigned_abs() as usize % (bound + 1);
            prop_assert_eq!(queue.at(index), model.get(index));
        }

        prop_assert!(queue.iter().eq(model.iter()));
        prop_assert!(queue.iter().rev().eq(model.iter().rev()));

        let copy = queue.try_clone().unwrap();
        prop_assert!(copy.iter().eq(model.iter()));
    }
}

proptest! {
    #[test]
    fn prop_stack_matches_vec(
        capacity in 1usize..40,
        ops in proptest::collection::vec((0u8..=3u8, any::<i32>()), 1..300)
    ) {
        let mut stack = FStack::with_capacity(capacity).unwrap();
        let mut model: Vec<i32> = Vec::new();

        for (op, value) in ops {
            match op {
                0 | 1 => {
                    let res = stack.push(value);
                    if model.len() < capacity {
                        prop_assert_eq!(res, Ok(()));
                        model.push(value);
                    } else {
                        prop_assert_eq!(res, Err(value));
                    }
                }
                2 => prop_assert_eq!(stack.pop(), model.pop()),
                3 => {
                    if value % 8 == 0 {
                        stack.clear();
                        model.clear();
                    }
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.is_full(), model.len() == capacity);
            prop_assert_eq!(stack.top(), model.last());
            prop_assert_eq!(stack.bottom(), model.first());
            let index = value.unsigned_abs() as usize % (capacity + 1);
            prop_assert_eq!(stack.at(index), model.iter().rev().nth(index));
        }

        prop_assert!(stack.iter().eq(model.iter().rev()));
        prop_assert!(stack.iter().rev().eq(model.iter()));
    }
}
