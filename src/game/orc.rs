use std::fmt;

use super::enemy::Enemy;
use super::log::CombatLog;

pub const STARTING_HEALTH: u32 = 100;
pub const DEFAULT_ATTACK_POWER: u32 = 75;
pub const DEFAULT_DEFENSE_POWER: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orc {
    health: u32,
    weapon: String,
    attack_power: u32,
    defense_power: u32,
}

impl Orc {
    pub fn new(weapon: impl Into<String>) -> Self {
        Self::with_stats(weapon, DEFAULT_ATTACK_POWER, DEFAULT_DEFENSE_POWER)
    }

    pub fn with_stats(weapon: impl Into<String>, attack_power: u32, defense_power: u32) -> Self {
        let weapon = weapon.into();
        tracing::debug!(%weapon, attack_power, defense_power, "spawning orc");
        Self {
            health: STARTING_HEALTH,
            weapon,
            attack_power,
            defense_power,
        }
    }

    pub fn weapon(&self) -> &str {
        &self.weapon
    }

    pub fn set_weapon(&mut self, weapon: impl Into<String>) {
        self.weapon = weapon.into();
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn set_attack_power(&mut self, attack_power: u32) {
        self.attack_power = attack_power;
    }

    pub fn defense_power(&self) -> u32 {
        self.defense_power
    }

    pub fn set_defense_power(&mut self, defense_power: u32) {
        self.defense_power = defense_power;
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }
}

impl Enemy for Orc {
    fn clone_enemy(&self) -> Box<dyn Enemy> {
        tracing::debug!(weapon = %self.weapon, health = self.health, "cloning orc");
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "Orc"
    }

    fn attack(&self, log: &mut CombatLog) {
        log.add(format!(
            "Orc attacks with {} dealing {} damage.",
            self.weapon, self.attack_power
        ));
    }

    fn defend(&mut self, log: &mut CombatLog) {
        log.add(format!(
            "Orc defends with {} defense power.",
            self.defense_power
        ));
        self.health = self.health.saturating_sub(self.defense_power / 10);
        log.add(format!("Orc health is now {}.", self.health));
    }

    fn flee(&self, _log: &mut CombatLog) {
        tracing::trace!(weapon = %self.weapon, "flee placeholder");
    }
}

impl fmt::Display for Orc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Orc [weapon: {}, attack: {}, defense: {}, health: {}]",
            self.weapon, self.attack_power, self.defense_power, self.health
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_short_constructor() {
        let orc = Orc::new("Axe");
        assert_eq!(orc.weapon(), "Axe");
        assert_eq!(orc.attack_power(), DEFAULT_ATTACK_POWER);
        assert_eq!(orc.defense_power(), DEFAULT_DEFENSE_POWER);
        assert_eq!(orc.health(), STARTING_HEALTH);
    }

    #[test]
    fn defend_truncates_the_damage() {
        let mut orc = Orc::with_stats("Club", 10, 19);
        let mut log = CombatLog::new();

        orc.defend(&mut log);

        assert_eq!(orc.health(), 99);
        assert_eq!(
            log.entries(),
            ["Orc defends with 19 defense power.", "Orc health is now 99."]
        );
    }

    #[test]
    fn defend_below_ten_defense_leaves_health_alone() {
        let mut orc = Orc::with_stats("Stick", 1, 9);
        orc.defend(&mut CombatLog::new());
        assert_eq!(orc.health(), STARTING_HEALTH);
    }

    #[test]
    fn attack_describes_weapon_and_power() {
        let orc = Orc::new("Axe");
        let mut log = CombatLog::new();

        orc.attack(&mut log);

        assert_eq!(log.last(), Some("Orc attacks with Axe dealing 75 damage."));
    }

    #[test]
    fn flee_writes_nothing() {
        let orc = Orc::new("Axe");
        let mut log = CombatLog::new();
        orc.flee(&mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn display_lists_every_stat() {
        let orc = Orc::with_stats("Spear", 60, 40);
        assert_eq!(
            orc.to_string(),
            "Orc [weapon: Spear, attack: 60, defense: 40, health: 100]"
        );
    }
}
