//! End-to-end tests for element registration and the relation table.

use elemental::prelude::*;

#[test]
fn test_fire_water_round_trip() {
    let context = Context::new();
    assert!(context.register(Element::new("FIRE").unwrap()));
    assert!(context.register(Element::new("WATER").unwrap()));

    context
        .set_relation_between("FIRE", "WATER", Relation::Strong)
        .expect("both elements are registered");

    assert_eq!(context.relation_between("FIRE", "WATER").multiplier(), 2.0);
    assert_eq!(context.relation_between("WATER", "FIRE").multiplier(), 0.5);
}

#[test]
fn test_default_element_is_first_registered() {
    let context = Context::new();
    assert!(context.default_element().is_none());

    context.register(Element::new("EARTH").unwrap());
    assert_eq!(context.default_element().unwrap().id().as_str(), "EARTH");

    context.register(Element::new("WIND").unwrap());
    assert_eq!(context.default_element().unwrap().id().as_str(), "EARTH");
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let context = Context::new();
    let first = Element::new("fire").unwrap().with_display_name("Flame");
    assert!(context.register(first));
    assert!(!context.register(Element::new("Fire").unwrap().with_display_name("Blaze")));

    assert_eq!(context.element("fire").unwrap().display_name(), "Flame");
    assert_eq!(context.default_element().unwrap().display_name(), "Flame");
    assert_eq!(context.element_count(), 1);
}

#[test]
fn test_every_set_maintains_inverse_invariant() {
    let context = Context::new();
    for id in ["fire", "water", "grass", "rock"] {
        context.register(Element::new(id).unwrap());
    }
    let pairs = [
        ("fire", "grass", Relation::Strong),
        ("water", "fire", Relation::Strong),
        ("rock", "grass", Relation::Weak),
        ("fire", "rock", Relation::MutualWeak),
        (
            "water",
            "grass",
            Relation::Custom {
                multiplier: 0.5,
                inverse_multiplier: 2.0,
            },
        ),
    ];

    for (from, to, relation) in pairs {
        context.set_relation_between(from, to, relation).unwrap();
        assert_eq!(context.relation_between(from, to), relation);
        assert_eq!(context.relation_between(to, from), relation.inverse());
    }
}

#[test]
fn test_overwrite_replaces_both_directions() {
    let context = Context::new();
    context.register(Element::new("fire").unwrap());
    context.register(Element::new("water").unwrap());

    context
        .set_relation_between("fire", "water", Relation::Strong)
        .unwrap();
    context
        .set_relation_between("fire", "water", Relation::MutualStrong)
        .unwrap();

    assert_eq!(
        context.relation_between("fire", "water"),
        Relation::MutualStrong
    );
    assert_eq!(
        context.relation_between("water", "fire"),
        Relation::MutualStrong
    );
}

#[test]
fn test_unset_pair_returns_default_not_error() {
    let context = Context::new();
    context.register(Element::new("fire").unwrap());
    context.register(Element::new("water").unwrap());

    assert_eq!(context.relation_between("fire", "water"), Relation::Neutral);

    let fire = context.element("fire").unwrap();
    let water = context.element("water").unwrap();
    assert_eq!(context.relation_opt(&fire, &water), None);
}

#[test]
fn test_set_with_unknown_element_fails() {
    let context = Context::new();
    context.register(Element::new("fire").unwrap());

    assert!(matches!(
        context.set_relation_between("fire", "void", Relation::Strong),
        Err(ElementalError::UnknownElement(_))
    ));
    // Nothing was stored.
    assert_eq!(context.relation_count(), 0);
}

#[test]
fn test_readers_never_observe_half_written_relations() {
    let context = Context::new();
    context.register(Element::new("fire").unwrap());
    context.register(Element::new("water").unwrap());
    // Seed the pair so every observable state is one of the writer's values.
    context
        .set_relation_between("fire", "water", Relation::Strong)
        .unwrap();

    let writer = {
        let context = context.clone();
        std::thread::spawn(move || {
            for _ in 0..500 {
                context
                    .set_relation_between("fire", "water", Relation::Strong)
                    .unwrap();
                context
                    .set_relation_between("fire", "water", Relation::Weak)
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let context = context.clone();
            std::thread::spawn(move || {
                for _ in 0..500 {
                    // Each read must see a fully applied write, never the
                    // default relation of a half-cleared pair.
                    let forward = context.relation_between("fire", "water");
                    assert!(forward == Relation::Strong || forward == Relation::Weak);
                    let reverse = context.relation_between("water", "fire");
                    assert!(reverse == Relation::Strong || reverse == Relation::Weak);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    // Once writes have quiesced, the two directions must agree.
    let forward = context.relation_between("fire", "water");
    assert_eq!(context.relation_between("water", "fire"), forward.inverse());
}
