use proptest::prelude::*;

use std::collections::VecDeque;

use super::ElasticVec;

// Generate an arbitrary sequence of manipulations to both a VecDeque and an
// ElasticVec. Apply those manipulations in order, then check that the state
// of both is the same. If the states agree AND the capacity invariants hold
// after every step, we're good.
#[derive(Debug, Clone)]
enum Action {
    PushBack(usize),
    PopBack,
    PushFront(usize),
    PopFront,
    EmplaceBack(usize),
    EmplaceFront(usize),
    Assign(usize, usize),
}

impl Action {
    fn act_on_deque(self, deque: &mut VecDeque<usize>) {
        match self {
            Action::PushBack(value) | Action::EmplaceBack(value) => deque.push_back(value),
            Action::PopBack => {
                deque.pop_back();
            }
            Action::PushFront(value) | Action::EmplaceFront(value) => deque.push_front(value),
            Action::PopFront => {
                deque.pop_front();
            }
            Action::Assign(index, value) => {
                if !deque.is_empty() {
                    let index = index % deque.len();
                    deque[index] = value;
                }
            }
        }
    }

    fn act_on_vector(self, vector: &mut ElasticVec<usize>) {
        match self {
            Action::PushBack(value) => vector.push_back(value),
            Action::PopBack => {
                vector.pop_back();
            }
            Action::PushFront(value) => vector.push_front(value),
            Action::PopFront => {
                vector.pop_front();
            }
            Action::EmplaceBack(value) => vector.emplace_back(|| value),
            Action::EmplaceFront(value) => vector.emplace_front(|| value),
            Action::Assign(index, value) => {
                if !vector.is_empty() {
                    let index = index % vector.len();
                    vector[index] = value;
                }
            }
        }
    }
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        any::<usize>().prop_map(Action::PushBack),
        Just(Action::PopBack),
        any::<usize>().prop_map(Action::PushFront),
        Just(Action::PopFront),
        any::<usize>().prop_map(Action::EmplaceBack),
        any::<usize>().prop_map(Action::EmplaceFront),
        (any::<usize>(), any::<usize>()).prop_map(|(index, value)| Action::Assign(index, value)),
    ]
}

fn assert_matches_model(vector: &ElasticVec<usize>, model: &VecDeque<usize>) {
    vector.assert_invariants();
    assert_eq!(vector.len(), model.len());
    assert_eq!(vector.is_empty(), model.is_empty());
    for (index, expected) in model.iter().enumerate() {
        assert_eq!(vector.get(index), Some(expected));
    }
    assert!(vector.get(model.len()).is_none());
}

proptest! {
    #[test]
    fn action_sequences_match_vecdeque(
        actions in prop::collection::vec(action_strategy(), 0..300)
    ) {
        let mut vector = ElasticVec::new();
        let mut model = VecDeque::new();

        for action in actions {
            action.clone().act_on_vector(&mut vector);
            action.act_on_deque(&mut model);
            assert_matches_model(&vector, &model);
        }
    }

    #[test]
    fn construction_preserves_order(values in prop::collection::vec(any::<usize>(), 0..1000)) {
        let vector = ElasticVec::from(values.clone());
        prop_assert_eq!(vector.len(), values.len());
        for (index, expected) in values.iter().enumerate() {
            prop_assert_eq!(vector.get(index), Some(expected));
        }
    }

    #[test]
    fn find_agrees_with_linear_scan(
        values in prop::collection::vec(0usize..50, 0..200),
        needle in 0usize..50
    ) {
        let vector = ElasticVec::from(values.clone());
        prop_assert_eq!(vector.find(&needle), values.iter().position(|value| *value == needle));
    }

    #[test]
    fn clone_and_source_never_alias(values in prop::collection::vec(any::<usize>(), 1..200)) {
        let mut vector = ElasticVec::from(values.clone());
        let mut other = vector.clone();
        prop_assert!(!std::ptr::eq(vector.storage_ptr(), other.storage_ptr()));

        let bumped = vector[0].wrapping_add(1);
        vector[0] = bumped;
        prop_assert_eq!(other.get(0), Some(&values[0]));

        let last = other.len() - 1;
        let bumped = other[last].wrapping_add(1);
        other[last] = bumped;
        prop_assert_eq!(vector.get(last).copied(), values.last().copied().map(|value| {
            if last == 0 { value.wrapping_add(1) } else { value }
        }));
    }

    #[test]
    fn take_round_trips_every_element(values in prop::collection::vec(any::<usize>(), 0..200)) {
        let mut vector = ElasticVec::from(values.clone());
        let ptr = vector.storage_ptr();

        let moved = vector.take();
        prop_assert!(std::ptr::eq(moved.storage_ptr(), ptr));
        prop_assert_eq!(moved.len(), values.len());
        for (index, expected) in values.iter().enumerate() {
            prop_assert_eq!(moved.get(index), Some(expected));
        }

        prop_assert!(vector.is_empty());
        prop_assert_eq!(vector.capacity(), 1);
    }
}
