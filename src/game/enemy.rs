use std::fmt::{Debug, Display};

use super::log::CombatLog;

/// Anything that can be put into a fight and duplicated from a prototype.
pub trait Enemy: Debug + Display {
    /// Produces an independent copy of this enemy.
    fn clone_enemy(&self) -> Box<dyn Enemy>;

    fn name(&self) -> &str;

    fn attack(&self, log: &mut CombatLog);

    /// Braces for a hit. Health drops by a tenth of the defense power and
    /// never goes below zero.
    fn defend(&mut self, log: &mut CombatLog);

    fn flee(&self, log: &mut CombatLog);
}

impl Clone for Box<dyn Enemy> {
    fn clone(&self) -> Self {
        self.clone_enemy()
    }
}
