use templatist::builder::{reorder, BuilderError};

#[test]
fn moves_element_to_destination_with_splice_semantics() {
    let sections = vec!["A", "B", "C"];
    let result = reorder(&sections, 0, 2).unwrap();
    assert_eq!(result, vec!["B", "C", "A"]);
}

#[test]
fn preserves_length_and_elements_for_all_valid_pairs() {
    let items = vec![1, 2, 3, 4, 5];
    for source in 0..items.len() {
        for dest in 0..items.len() {
            let result = reorder(&items, source, dest).unwrap();
            assert_eq!(result.len(), items.len());

            let mut sorted = result.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, items, "multiset changed for move {source} -> {dest}");

            // The moved element ends up at the destination index
            assert_eq!(result[dest], items[source]);

            // All other elements keep their relative order
            let rest: Vec<i32> = {
                let mut r = result.clone();
                r.remove(dest);
                r
            };
            let expected_rest: Vec<i32> = items
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != source)
                .map(|(_, v)| *v)
                .collect();
            assert_eq!(rest, expected_rest, "relative order changed for move {source} -> {dest}");
        }
    }
}

#[test]
fn same_source_and_destination_is_a_no_op() {
    let items = vec!["x", "y", "z"];
    for i in 0..items.len() {
        assert_eq!(reorder(&items, i, i).unwrap(), items);
    }
}

#[test]
fn never_mutates_its_input() {
    let items = vec![10, 20, 30, 40];
    let snapshot = items.clone();
    let _ = reorder(&items, 3, 0).unwrap();
    assert_eq!(items, snapshot);
}

#[test]
fn rejects_out_of_range_source() {
    let items = vec![1, 2, 3];
    let err = reorder(&items, 3, 0).unwrap_err();
    assert!(matches!(err, BuilderError::IndexOutOfBounds { index: 3, len: 3 }));
}

#[test]
fn rejects_out_of_range_destination() {
    let items = vec![1, 2, 3];
    let err = reorder(&items, 0, 7).unwrap_err();
    assert!(matches!(err, BuilderError::IndexOutOfBounds { index: 7, len: 3 }));
}

#[test]
fn rejects_any_index_on_empty_list() {
    let items: Vec<u8> = Vec::new();
    assert!(reorder(&items, 0, 0).is_err());
}
