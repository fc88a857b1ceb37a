use proptest::prelude::*;

use sentify_core::collation::{Collation, Lexicographic, TibetanCollation};
use sentify_core::{assemble, group_sentences};

fn alternative_sets() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec("[a-z]{1,4}", 1..4),
        1..4,
    )
}

proptest! {
    #[test]
    fn assembled_count_is_product_of_cardinalities(sets in alternative_sets()) {
        let expected: usize = sets.iter().map(Vec::len).product();
        prop_assert_eq!(assemble(&sets).len(), expected);
    }

    #[test]
    fn group_key_matches_resplit_token_count(
        sentences in prop::collection::vec("[a-z ]{1,12}", 1..12)
    ) {
        let groups = group_sentences(sentences, &Lexicographic);
        for (size, members) in &groups.by_size {
            for sentence in members {
                prop_assert_eq!(sentence.split_whitespace().count(), *size);
            }
        }
    }

    #[test]
    fn lexicographic_resort_is_noop(
        mut items in prop::collection::vec("[a-z]{0,6}", 0..10)
    ) {
        Lexicographic.sort(&mut items);
        let once = items.clone();
        Lexicographic.sort(&mut items);
        prop_assert_eq!(items, once);
    }

    #[test]
    fn tibetan_order_is_total_and_antisymmetric(a in ".{0,8}", b in ".{0,8}") {
        let collation = TibetanCollation;
        let forward = collation.compare(&a, &b);
        let backward = collation.compare(&b, &a);
        prop_assert_eq!(forward, backward.reverse());
    }
}
