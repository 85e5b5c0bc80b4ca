//! Curated default abilities and a starter role list.
//!
//! Hosts normally supply their own catalog; these tables back the
//! `StaticCatalog` used by the binary and by tests.

use super::catalog::{AbilityDefinition, RoleDefinition};
use super::game_types::{AbilityPhase, Team};

/// Filler role handed out when the catalog pool is smaller than the seating.
pub const DEFAULT_FILLER_ROLE: &str = "Villager";

// (code, label, phase, side, description)
#[rustfmt::skip]
const ABILITIES: &[(&str, &str, AbilityPhase, &str, &str)] = &[
    ("angel_of_salvation", "Angel of Salvation", AbilityPhase::Both, "town",
        "Saves the player with the most votes from elimination when used correctly."),
    ("grave_digger", "Grave Digger", AbilityPhase::Both, "town",
        "Investigates a dead player's role and alignment."),
    ("gambler", "Gambler", AbilityPhase::Both, "town",
        "Boosts another player's ability effectiveness for the next night."),
    ("fortune_teller", "Fortune Teller", AbilityPhase::Both, "town",
        "Communicates with a dead player to reveal their role and side."),
    ("innocent", "Innocent", AbilityPhase::Night, "town",
        "If attacked by Mafia, exposes the killer the following day."),
    ("lawyer", "Lawyer", AbilityPhase::Day, "town",
        "Prevents a town player from being eliminated by votes."),
    ("self_sacrificing", "Self-Sacrificing", AbilityPhase::Day, "town",
        "Sacrifices themselves to stop a Mafia shot against another player."),
    ("sergeant", "Sergeant", AbilityPhase::Day, "town",
        "Upgrades a player's weapon for a stronger shot."),
    ("ranger", "Ranger", AbilityPhase::Day, "town",
        "Can make a shot and blocks the first Mafia shot against them."),
    ("hunter", "Hunter", AbilityPhase::Both, "town",
        "Can eliminate threats such as Werewolves under special conditions."),
    ("pope", "Pope", AbilityPhase::Day, "town",
        "Eliminates the Devil from the game when targeted."),
    ("godfather", "Godfather", AbilityPhase::Both, "mafia",
        "Commands priority to make the first shot."),
    ("nato", "Nato", AbilityPhase::Both, "mafia",
        "Executes a coordinated elimination with Mafia support."),
    ("kidnapper", "Kidnapper", AbilityPhase::Both, "mafia",
        "Disables a selected player's abilities for the phase."),
    ("simple_mafia", "Simple Mafia", AbilityPhase::Night, "mafia",
        "Standard Mafia member who collaborates without extra powers."),
    ("negotiator", "Negotiator", AbilityPhase::Both, "mafia",
        "Attempts to convert a town player to Mafia if chosen correctly."),
    ("imposter", "Imposter", AbilityPhase::Both, "mafia",
        "Alters investigations to return false results."),
    ("dr_lecter", "Dr. Lecter", AbilityPhase::Both, "mafia",
        "Saves a Mafia member from elimination by players."),
    ("natasha", "Natasha", AbilityPhase::Both, "mafia",
        "Silences a player, removing their speech and vote for the day."),
    ("terrorist", "Terrorist", AbilityPhase::Both, "mafia",
        "Immediately eliminates a target player during the phase."),
    ("bomb_maker", "Bomb Maker", AbilityPhase::Both, "mafia",
        "Plants a bomb that must be disarmed by guessing the correct number."),
    ("poisoner", "Poisoner", AbilityPhase::Both, "mafia",
        "Poisons a player who will die the following day if not cured."),
    ("mistress", "Mistress", AbilityPhase::Both, "mafia",
        "On elimination grants Mafia an additional shot."),
    ("dynamite_maker", "Dynamite Maker", AbilityPhase::Both, "mafia",
        "Sets dynamite with alternate disarm mechanics compared to bombs."),
    ("thief", "Thief", AbilityPhase::Both, "mafia",
        "Steals another player's abilities."),
    ("informer", "Informer", AbilityPhase::Both, "mafia",
        "Learns a town player's role."),
    ("protector", "Protector", AbilityPhase::Both, "town",
        "Shields a player from Mafia attacks."),
    ("swayer", "Swayer", AbilityPhase::Both, "mafia",
        "Manipulates votes or targeted abilities."),
    ("hacker", "Hacker", AbilityPhase::Both, "mafia",
        "Reveals town players and their roles."),
    ("mercenary", "Mercenary", AbilityPhase::Both, "mafia",
        "Adjusts investigation results to favor their side."),
    ("adopted_daughter", "Adopted Daughter", AbilityPhase::Both, "mafia",
        "Converts a town player into Mafia when executed correctly."),
    ("adopted_son", "Adopted Son", AbilityPhase::Both, "mafia",
        "Assumes a Mafia role after two Mafia members fall."),
    ("nostradamus", "Nostradamus", AbilityPhase::Both, "neutral",
        "Chooses a side based on the game's progression and predicts the winner."),
    ("thousand_faces", "Thousand Faces", AbilityPhase::Both, "neutral",
        "Steals a player's role after they are eliminated."),
    ("assassin", "Assassin", AbilityPhase::Night, "mafia",
        "Eliminates a player on even nights."),
    ("sherlock_holmes", "Sherlock Holmes", AbilityPhase::Night, "town",
        "Guesses a player's role and may swap sides if correct."),
    ("saqi", "Saqi", AbilityPhase::Night, "neutral",
        "Intoxicates a player, suppressing their abilities temporarily."),
    ("clumsy_hand", "Clumsy Hand", AbilityPhase::Night, "neutral",
        "Disables a player's abilities for the remainder of the game."),
];

/// The curated ability list.
pub fn builtin_abilities() -> Vec<AbilityDefinition> {
    ABILITIES
        .iter()
        .map(|(code, label, phase, side, description)| AbilityDefinition {
            code: (*code).to_string(),
            label: (*label).to_string(),
            phase: *phase,
            side: Team::parse(side),
            description: (*description).to_string(),
        })
        .collect()
}

/// A small classic setup: two mafia, a detective, a doctor, a neutral.
pub fn builtin_roles() -> Vec<RoleDefinition> {
    vec![
        RoleDefinition::new("Godfather", Some(Team::Mafia), &["godfather", "nato"])
            .with_description("Leads the mafia and takes the first shot."),
        RoleDefinition::new("Mafia", Some(Team::Mafia), &["simple_mafia"])
            .with_description("Plain mafia member."),
        RoleDefinition::new("Detective", Some(Team::Town), &["sherlock_holmes"])
            .with_description("Investigates one player per night."),
        RoleDefinition::new("Doctor", Some(Team::Town), &["protector"])
            .with_description("Protects one player per night."),
        RoleDefinition::new("Nostradamus", Some(Team::Neutral), &["nostradamus"])
            .with_description("Predicts the winning side."),
        RoleDefinition::new(DEFAULT_FILLER_ROLE, Some(Team::Town), &["innocent"])
            .with_description("Ordinary town member."),
    ]
}
