//! First-match lookups over a hero collection, in collection order.

use crate::hero::{AttackCategory, Hero, HeroArchetype};

pub fn find_first<'a>(
    heroes: &'a [Hero],
    predicate: impl Fn(&Hero) -> bool,
) -> Option<&'a Hero> {
    heroes.iter().find(|&h| predicate(h))
}

pub fn find_by_id(heroes: &[Hero], id: u32) -> Option<&Hero> {
    find_first(heroes, |h| h.id() == id)
}

/// Exact, case-sensitive name match.
pub fn find_by_name<'a>(heroes: &'a [Hero], name: &str) -> Option<&'a Hero> {
    find_first(heroes, |h| h.name() == name)
}

pub fn find_by_archetype(heroes: &[Hero], archetype: HeroArchetype) -> Option<&Hero> {
    find_first(heroes, |h| h.archetype() == archetype)
}

pub fn find_by_attack_category(heroes: &[Hero], category: AttackCategory) -> Option<&Hero> {
    find_first(heroes, |h| h.attack_category() == category)
}

pub fn find_alive(heroes: &[Hero]) -> Option<&Hero> {
    find_first(heroes, Hero::is_alive)
}
