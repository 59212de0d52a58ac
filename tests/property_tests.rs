use cmpsort::prelude::*;
use cmpsort::{Strategy as Traversal, merge_by};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Multiset comparison through the natural order.
fn same_elements(a: &[i32], b: &[i32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

fn traversal() -> impl Strategy<Value = Traversal> {
    prop_oneof![Just(Traversal::Recursive), Just(Traversal::ExplicitStack)]
}

proptest! {
    #[test]
    fn prop_permutation(xs in prop::collection::vec(any::<i32>(), 0..300), seed in any::<u64>()) {
        let mut sorter = Sorter::seeded(seed);

        prop_assert!(same_elements(&merge_sort_by(&xs, cmp_last_digit), &xs));
        prop_assert!(same_elements(&sorter.quicksort_copy_by(&xs, cmp_last_digit), &xs));

        let mut v = xs.clone();
        sorter.quicksort_inplace_by(&mut v, cmp_last_digit);
        prop_assert!(same_elements(&v, &xs));
    }

    #[test]
    fn prop_sorted(
        xs in prop::collection::vec(-50i32..50, 0..300),
        seed in any::<u64>(),
        traversal in traversal(),
    ) {
        let mut sorter = Sorter::seeded(seed).strategy(traversal);

        let comparators: [fn(&i32, &i32) -> Ordering; 3] =
            [cmp_standard, cmp_reverse, cmp_last_digit];

        for compare in comparators {
            prop_assert!(is_sorted_by(&merge_sort_by(&xs, compare), compare));
            prop_assert!(is_sorted_by(&sorter.quicksort_copy_by(&xs, compare), compare));

            let mut v = xs.clone();
            sorter.quicksort_inplace_by(&mut v, compare);
            prop_assert!(is_sorted_by(&v, compare));
        }
    }

    #[test]
    fn prop_idempotent(xs in prop::collection::vec(any::<i32>(), 0..300)) {
        let once = merge_sort(&xs);

        prop_assert_eq!(&merge_sort(&once), &once);
        prop_assert_eq!(&quicksort_copy(&once), &once);

        let mut v = once.clone();
        quicksort_inplace(&mut v);
        prop_assert_eq!(&v, &once);
    }

    #[test]
    fn prop_copying_does_not_mutate(xs in prop::collection::vec(any::<i32>(), 0..300)) {
        let before = xs.clone();
        let _ = merge_sort(&xs);
        let _ = quicksort_copy(&xs);
        prop_assert_eq!(xs, before);
    }

    #[test]
    fn prop_reverse_symmetry(xs in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut ascending = merge_sort_by(&xs, cmp_standard);
        ascending.reverse();
        prop_assert_eq!(merge_sort_by(&xs, cmp_reverse), ascending);
    }

    #[test]
    fn prop_merge_sorted_inputs(
        a in prop::collection::vec(any::<i32>(), 0..100),
        b in prop::collection::vec(any::<i32>(), 0..100),
    ) {
        let mut a = a;
        let mut b = b;
        a.sort_unstable();
        b.sort_unstable();

        let merged = merge_by(&a, &b, cmp_standard);
        prop_assert_eq!(merged.len(), a.len() + b.len());
        prop_assert!(is_sorted_by(&merged, cmp_standard));

        let mut expected = [a, b].concat();
        expected.sort_unstable();
        prop_assert_eq!(merged, expected);
    }
}
