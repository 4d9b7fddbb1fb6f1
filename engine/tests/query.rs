use hero_engine::query::{
    find_alive, find_by_archetype, find_by_attack_category, find_by_id, find_by_name,
};
use hero_engine::{full_battle, heroes_pair_mut, Arena, AttackCategory, Dice, Hero, HeroArchetype};

fn roster() -> Vec<Hero> {
    let mut arena = Arena::new();
    vec![
        arena.create_hero("Dmytro", HeroArchetype::Warrior),
        arena.create_hero("Merlin", HeroArchetype::Mage),
        arena.create_hero("Leona", HeroArchetype::Archer),
        arena.create_hero("Morgana", HeroArchetype::Mage),
    ]
}

#[test]
fn empty_collection_finds_nothing() {
    let none: Vec<Hero> = vec![];
    assert!(find_by_id(&none, 1).is_none());
    assert!(find_by_name(&none, "Dmytro").is_none());
    assert!(find_by_archetype(&none, HeroArchetype::Mage).is_none());
    assert!(find_by_attack_category(&none, AttackCategory::Ranged).is_none());
    assert!(find_alive(&none).is_none());
}

#[test]
fn first_match_wins() {
    let heroes = roster();
    let mage = find_by_archetype(&heroes, HeroArchetype::Mage).unwrap();
    assert_eq!(mage.name(), "Merlin");
    assert_eq!(mage.id(), 2);
    assert_eq!(
        find_by_attack_category(&heroes, AttackCategory::Magical).map(Hero::id),
        Some(2)
    );
}

#[test]
fn lookups_by_id_and_name() {
    let heroes = roster();
    assert_eq!(find_by_id(&heroes, 3).map(Hero::name), Some("Leona"));
    assert!(find_by_id(&heroes, 99).is_none());
    assert_eq!(find_by_name(&heroes, "Morgana").map(Hero::id), Some(4));
    assert!(find_by_name(&heroes, "morgana").is_none());
}

#[test]
fn find_alive_skips_the_fallen() {
    let mut heroes = roster();
    {
        let (warrior, archer) = heroes_pair_mut(&mut heroes, 0, 2).unwrap();
        full_battle(warrior, archer, &mut Dice::no_crits());
    }
    assert!(!heroes[0].is_alive());
    assert_eq!(find_alive(&heroes).map(Hero::name), Some("Merlin"));
}

#[test]
fn pair_borrow_rejects_bad_indices() {
    let mut heroes = roster();
    assert!(heroes_pair_mut(&mut heroes, 1, 1).is_none());
    assert!(heroes_pair_mut(&mut heroes, 0, 4).is_none());
    let (a, b) = heroes_pair_mut(&mut heroes, 3, 1).unwrap();
    assert_eq!((a.name(), b.name()), ("Morgana", "Merlin"));
}
