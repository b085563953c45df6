//! Builder laws checked across every class

use crate::*;
use items::Item;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn any_class() -> impl Strategy<Value = Class> {
    (0usize..12).prop_map(|i| Class::iter().nth(i).unwrap_or(Class::Fighter))
}

fn any_overrides() -> impl Strategy<Value = Vec<(StatCode, i32)>> {
    proptest::sample::subsequence(StatCode::all().to_vec(), 0..=6).prop_flat_map(|codes| {
        let len = codes.len();
        proptest::collection::vec(1i32..=30, len)
            .prop_map(move |values| codes.iter().copied().zip(values).collect::<Vec<_>>())
    })
}

#[test]
fn test_defaults_for_every_class() {
    for class in Class::iter() {
        let hero = CharacterBuilder::new()
            .set_name("Default")
            .set_class(class.label())
            .expect("table label")
            .build()
            .expect("built");
        assert_eq!(hero.stats(), &class.default_stats());
        assert_eq!(hero.class(), class);
        assert_eq!(hero.special_ability(), class.special_ability());
    }
}

#[test]
fn test_rogue_dex_override_keeps_str() {
    let hero = CharacterBuilder::new()
        .set_name("Vax")
        .set_class("Rogue")
        .expect("rogue")
        .set_stats([("DEX", 18)])
        .build()
        .expect("built");
    assert_eq!(hero.stats().get(StatCode::Dex), Some(18));
    assert_eq!(hero.stats().get(StatCode::Str), Some(10));
}

#[test]
fn test_unknown_stat_key_never_lands() {
    let hero = CharacterBuilder::new()
        .set_class("Cleric")
        .expect("cleric")
        .set_stats([("LUCK", 5), ("CHA", 16)])
        .build()
        .expect("built");
    assert_eq!(hero.stats().len(), 6);
    assert_eq!(hero.stats().get(StatCode::Cha), Some(16));
    let record = hero.to_record().expect("record");
    let json = serde_json::to_value(&record.stats).expect("stats json");
    assert!(json.get("LUCK").is_none());
}

#[test]
fn test_unsupported_class_produces_nothing() {
    let result = CharacterBuilder::new().set_name("Nobody").set_class("NotAClass");
    match result {
        Err(HeroError::UnsupportedClass(label)) => assert_eq!(label, "NotAClass"),
        other => panic!("expected UnsupportedClass, got {:?}", other),
    }
}

#[test]
fn test_stats_merge_but_inventory_replaces() {
    let sling = Item::new("Sling", "Simple ranged weapon", 5);
    let hero = CharacterBuilder::new()
        .set_class("Barbarian")
        .expect("barbarian")
        .set_stats([("STR", 18)])
        .set_inventory([sling.clone()])
        .build()
        .expect("built");

    assert_eq!(hero.stats().get(StatCode::Con), Some(14));
    assert_eq!(hero.inventory().as_slice(), &[sling]);
}

#[test]
fn test_fresh_builders_do_not_share_state() {
    let first = CharacterBuilder::new()
        .set_name("m1000")
        .set_class("Wizard")
        .expect("wizard")
        .set_stats([("STR", 99)])
        .build()
        .expect("built");
    let second = CharacterBuilder::new()
        .set_class("Bard")
        .expect("bard")
        .build()
        .expect("built");

    assert_eq!(first.stats().get(StatCode::Str), Some(99));
    assert_eq!(second.name(), UNNAMED);
    assert_eq!(second.stats(), &Class::Bard.default_stats());
}

#[test]
fn test_duplicate_items_remove_first_only() {
    let potion = Item::new("Potion", "Heals a little", 50);
    let mut hero = CharacterBuilder::new()
        .set_class("Paladin")
        .expect("paladin")
        .set_inventory([potion.clone(), potion.clone()])
        .build()
        .expect("built");

    hero.add_item(potion.clone());
    hero.remove_item(&potion);
    assert_eq!(hero.inventory().len(), 2);
    assert!(hero.inventory().iter().all(|item| item == &potion));
}

proptest! {
    #[test]
    fn prop_overrides_apply_key_by_key(class in any_class(), overrides in any_overrides()) {
        let hero = CharacterBuilder::new()
            .set_class(class.label())
            .expect("table label")
            .set_stats(overrides.iter().map(|(code, value)| (code.code(), *value)))
            .build()
            .expect("built");

        let mut expected = class.default_stats();
        expected.merge(overrides.iter().copied());
        prop_assert_eq!(hero.stats(), &expected);
        prop_assert_eq!(hero.stats().missing(), None);
    }

    #[test]
    fn prop_add_then_remove_restores(class in any_class(), name in "[a-z]{1,8}", value in -50i64..500) {
        let mut hero = Character::new("Prop", class);
        let before = hero.inventory().clone();
        let item = Item::new(name, "generated", value);

        hero.add_item(item.clone());
        prop_assert_eq!(hero.remove_item(&item), Some(item));
        prop_assert_eq!(hero.inventory(), &before);
    }
}
