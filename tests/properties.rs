use plotatom::{
    atom::{Atom, AtomKind},
    error::PropertyError,
};

fn key(name: &str) -> Atom {
    Atom::string_literal(name)
}

#[test]
fn non_string_keys_are_rejected() {
    let mut atom = Atom::from(1.0);

    for (bad_key, kind) in [(Atom::new(), AtomKind::None),
                            (Atom::from(3.0), AtomKind::Number),
                            (Atom::from((1.0, 1.0)), AtomKind::Complex),
                            (Atom::from("line"), AtomKind::Symbol)]
    {
        let err = atom.add_property(&bad_key, Atom::from(7.0)).unwrap_err();
        assert_eq!(err, PropertyError::InvalidKeyType { found: kind });
    }

    assert_eq!(atom.property_count(), 0);
}

#[test]
fn invalid_key_error_message_names_the_kind() {
    let err = Atom::new().add_property(&Atom::from(2.0), Atom::new()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("non-string"));
    assert!(message.contains("Number"));
}

#[test]
fn add_then_get() {
    let mut atom = Atom::from("x");
    atom.add_property(&key("line"), Atom::from(7.0)).unwrap();

    assert!(atom.has_property(&key("line")));
    assert_eq!(atom.get_property(&key("line")), Atom::from(7.0));
    assert_eq!(atom.property_count(), 1);
}

#[test]
fn re_adding_replaces() {
    let mut atom = Atom::from("x");
    atom.add_property(&key("line"), Atom::from(7.0)).unwrap();
    atom.add_property(&key("line"), Atom::from(8.0)).unwrap();

    assert_eq!(atom.get_property(&key("line")).as_number(), 8.0);
    assert_eq!(atom.property_count(), 1);
}

#[test]
fn missing_or_non_string_lookups_degrade() {
    let mut atom = Atom::from("x");
    atom.add_property(&key("line"), Atom::from(7.0)).unwrap();

    assert!(!atom.has_property(&key("column")));
    assert!(atom.get_property(&key("column")).is_none());

    // a symbol with the same text is not a valid key
    assert!(!atom.has_property(&Atom::from("line")));
    assert!(atom.get_property(&Atom::from("line")).is_none());
    assert!(!atom.has_property(&Atom::from(1.0)));
}

#[test]
fn properties_do_not_affect_equality_or_rendering() {
    let plain = Atom::from(5.0);
    let mut annotated = Atom::from(5.0);
    annotated.add_property(&key("doc"), Atom::string_literal("five"))
             .unwrap();

    assert_eq!(plain, annotated);
    assert_eq!(plain.to_string(), annotated.to_string());
}

#[test]
fn clones_have_independent_property_lists() {
    let mut original = Atom::from("x");
    original.add_property(&key("line"), Atom::from(1.0)).unwrap();

    let mut copy = original.clone();
    assert_eq!(copy.get_property(&key("line")), Atom::from(1.0));

    copy.add_property(&key("line"), Atom::from(2.0)).unwrap();
    copy.add_property(&key("doc"), Atom::string_literal("copied"))
        .unwrap();

    assert_eq!(original.get_property(&key("line")), Atom::from(1.0));
    assert!(!original.has_property(&key("doc")));
    assert_eq!(original.property_count(), 1);
}

#[test]
fn assignment_copies_property_list() {
    let mut source = Atom::from(3.0);
    source.add_property(&key("unit"), Atom::from("m")).unwrap();

    let mut target = Atom::from("old");
    target.add_property(&key("stale"), Atom::new()).unwrap();
    assert!(target.has_property(&key("stale")));

    target = source.clone();
    assert!(target.has_property(&key("unit")));
    assert!(!target.has_property(&key("stale")));
}

#[test]
fn setters_keep_property_list() {
    let mut atom = Atom::from("x");
    atom.add_property(&key("line"), Atom::from(4.0)).unwrap();

    atom.set_complex((1.0, 1.0));
    atom.set_string("now text");

    assert_eq!(atom.get_property(&key("line")), Atom::from(4.0));
}

#[test]
fn property_values_carry_their_own_properties() {
    let mut inner = Atom::from("inner");
    inner.add_property(&key("depth"), Atom::from(2.0)).unwrap();

    let mut outer = Atom::from("outer");
    outer.add_property(&key("child"), inner).unwrap();

    let child = outer.get_property(&key("child"));
    assert_eq!(child.as_symbol(), "inner");
    assert_eq!(child.get_property(&key("depth")), Atom::from(2.0));
}

#[test]
fn properties_are_listed_by_key() {
    let mut atom = Atom::new();
    atom.add_property(&key("b"), Atom::from(2.0)).unwrap();
    atom.add_property(&key("a"), Atom::from(1.0)).unwrap();
    atom.add_property(&key("c"), Atom::from(3.0)).unwrap();

    let keys: Vec<&str> = atom.properties().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["a", "b", "c"]);
}
