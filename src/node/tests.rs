#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::PikError;

fn sample() -> ConfigNode {
    let mut node = ConfigNode::default();
    node.add_value("4", Some("count".into()), None);
    node.add_item("name", ["pellet"], None, Some(vec!["type".into()]));
    node.add_node(vec![Entry::from(Value::Scalar("inner".into()))], None, None);
    node.add_item("pos", ["1", "2", "3"], None, None);
    node.add_item("name", ["bomb"], None, None);
    node
}

#[test]
fn test_new_with_initial_entries() {
    let node = ConfigNode::new(vec![
        Entry::new(Value::Scalar("a".into()), Some("c".into()), None),
        Entry::new(Value::Item(vec!["b".into(), "1".into()]), None, Some(vec!["p".into()])),
    ]);

    assert_eq!(node.len(), 2);
    assert_eq!(node.get(0).unwrap().comment(), Some("c"));
    assert_eq!(node.get(1).unwrap().prefix_comment(), Some(&["p".to_string()][..]));
}

#[test]
fn test_append_preserves_order() {
    let mut node = ConfigNode::default();
    for token in ["z", "a", "m"] {
        node.add_value(token, None, None);
    }

    let scalars: Vec<&str> = node.scalars().collect();
    assert_eq!(scalars, vec!["z", "a", "m"]);
}

#[test]
fn test_add_item_tokens() {
    let mut node = ConfigNode::default();
    node.add_item("id", Vec::<String>::new(), None, None);
    node.add_item("id", ["x", "y"], Some("c".into()), None);

    assert_eq!(node.get(0).unwrap().value(), &Value::Item(vec!["id".into()]));
    assert_eq!(
        node.get(1).unwrap().value(),
        &Value::Item(vec!["id".into(), "x".into(), "y".into()])
    );
    assert_eq!(node.get(1).unwrap().value().identifier(), Some("id"));
}

#[test]
fn test_empty_comments_are_absent() {
    let mut node = ConfigNode::default();
    node.add_value("a", Some(String::new()), Some(vec![]));

    let entry = node.get(0).unwrap();
    assert_eq!(entry.comment(), None);
    assert_eq!(entry.prefix_comment(), None);
    assert_eq!(entry, &Entry::from(Value::Scalar("a".into())));
}

#[test]
fn test_get_out_of_range() {
    let node = sample();

    match node.get(5) {
        Err(PikError::IndexOutOfRange { index, len, .. }) => {
            assert_eq!(index, 5);
            assert_eq!(len, 5);
        }
        other => panic!("Expected IndexOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_set_replaces_entry() {
    let mut node = sample();
    let old = node
        .set(0, Entry::from(Value::Scalar("5".into())))
        .expect("index 0 exists");

    assert_eq!(old.value(), &Value::Scalar("4".into()));
    assert_eq!(node.get(0).unwrap().value(), &Value::Scalar("5".into()));
    assert_eq!(node.len(), 5);
    assert!(matches!(
        node.set(9, Entry::from(Value::Scalar("x".into()))),
        Err(PikError::IndexOutOfRange { index: 9, .. })
    ));
}

#[test]
fn test_get_mut_edits_in_place() {
    let mut node = sample();
    node.get_mut(2)
        .unwrap()
        .value_mut()
        .as_node_mut()
        .expect("entry 2 is a node")
        .add_value("added", None, None);

    let child = node.nodes().next().unwrap();
    assert_eq!(child.len(), 2);
}

#[test]
fn test_insert_and_remove() {
    let mut node = sample();
    node.insert(0, Entry::from(Value::Scalar("first".into()))).unwrap();
    node.insert(node.len(), Entry::from(Value::Scalar("last".into()))).unwrap();

    assert_eq!(node.len(), 7);
    assert!(node.insert(100, Entry::from(Value::Scalar("x".into()))).is_err());

    let removed = node.remove(0).unwrap();
    assert_eq!(removed.value(), &Value::Scalar("first".into()));
    assert!(node.remove(6).is_err());
}

#[test]
fn test_find_items() {
    let node = sample();

    assert_eq!(node.find_item("pos").map(|t| t.len()), Some(4));
    assert_eq!(node.item_args("name"), Some(&["pellet".to_string()][..]));
    assert_eq!(node.find_items("name").count(), 2);
    assert!(node.find_item("missing").is_none());
}

#[test]
fn test_items_by_identifier_keeps_first_appearance_order() {
    let node = sample();
    let grouped = node.items_by_identifier();

    let keys: Vec<&str> = grouped.keys().copied().collect();
    assert_eq!(keys, vec!["name", "pos"]);
    assert_eq!(grouped["name"].len(), 2);
    assert_eq!(grouped["name"][1], &["bomb".to_string()][..]);
}

#[test]
fn test_structural_equality() {
    assert_eq!(sample(), sample());

    let mut different_comment = sample();
    different_comment.get_mut(0).unwrap().set_comment(Some("other".into()));
    assert_ne!(sample(), different_comment);

    let mut nested_change = sample();
    nested_change.get_mut(2).unwrap().value_mut().as_node_mut().unwrap().add_value("x", None, None);
    assert_ne!(sample(), nested_change);

    let mut longer = sample();
    longer.add_value("tail", None, None);
    assert_ne!(sample(), longer);
}

#[test]
fn test_equality_is_order_sensitive() {
    let a: ConfigNode = vec![
        Entry::from(Value::Scalar("x".into())),
        Entry::from(Value::Scalar("y".into())),
    ]
    .into();
    let b: ConfigNode = a.iter().rev().cloned().collect();

    assert_ne!(a, b);
}

#[test]
fn test_serde_json_shape() {
    let mut node = ConfigNode::default();
    node.add_value("a", None, None);

    let json = serde_json::to_value(&node).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["value"]["Scalar"], "a");

    let back: ConfigNode = serde_json::from_value(json).unwrap();
    assert_eq!(back, node);
}

#[test]
fn test_deserialize_normalizes_empty_comments() {
    let json = r#"[{"value":{"Scalar":"a"},"comment":"","prefix_comment":[]}]"#;
    let node: ConfigNode = serde_json::from_str(json).unwrap();

    let entry = node.get(0).unwrap();
    assert_eq!(entry.comment(), None);
    assert_eq!(entry.prefix_comment(), None);
    assert_eq!(node.render(0), "a\n");
    assert_eq!(crate::parse_str(&node.render(0)).unwrap(), node);
}

#[test]
fn test_find_item_outlives_identifier() {
    let node = sample();
    let found = {
        let key = String::from("pos");
        node.find_item(&key)
    };

    assert_eq!(found.map(|t| t.len()), Some(4));
}
