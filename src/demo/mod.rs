pub mod config;

use anyhow::{bail, Result};

use crate::game::{CombatLog, Enemy};
use config::DemoConfig;

/// Upper bound on how many copies one run may stamp out of the prototype.
pub const MAX_CLONES: usize = 1024;

/// What a demo run printed, plus the identity checks it made.
#[derive(Debug, Clone, Default)]
pub struct DemoReport {
    pub lines: Vec<String>,
    pub original_is_clone1: bool,
    pub original_is_clone2: bool,
    pub clone1_is_clone2: bool,
    /// Clone 1 only attacked and fled, so it should still read like the original.
    pub clone1_matches_original: bool,
    /// Clone 2 took a hit, so it should have drifted from the original.
    pub clone2_matches_original: bool,
}

pub struct DemoApp {
    config: DemoConfig,
    log: CombatLog,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            log: CombatLog::new(),
        }
    }

    pub fn run(&mut self) -> Result<DemoReport> {
        tracing::info!(
            target: "demo",
            weapon = %self.config.weapon,
            clones = self.config.clones,
            "demo starting"
        );
        let report = self.play()?;
        for line in &report.lines {
            println!("{line}");
        }
        tracing::info!(target: "demo", "demo finished");
        Ok(report)
    }

    fn play(&mut self) -> Result<DemoReport> {
        if self.config.clones < 2 {
            bail!("demo needs at least 2 clones, got {}", self.config.clones);
        }
        if self.config.clones > MAX_CLONES {
            bail!(
                "demo allows at most {MAX_CLONES} clones, got {}",
                self.config.clones
            );
        }

        let original = self.config.prototype();
        let prototype: &dyn Enemy = &original;
        let mut clones: Vec<Box<dyn Enemy>> = (0..self.config.clones)
            .map(|_| prototype.clone_enemy())
            .collect();

        let mut lines = Vec::new();
        lines.push(format!("Original: {original}"));
        for (index, clone) in clones.iter().enumerate() {
            lines.push(format!("Clone {}: {clone}", index + 1));
        }

        lines.push(format!("{} 1 attacks...", clones[0].name()));
        clones[0].attack(&mut self.log);
        lines.extend(self.log.drain());

        lines.push(format!("{} 2 defends...", clones[1].name()));
        clones[1].defend(&mut self.log);
        lines.extend(self.log.drain());

        lines.push(format!("{} 1 flees...", clones[0].name()));
        clones[0].flee(&mut self.log);
        lines.extend(self.log.drain());

        let original_is_clone1 = same_instance(prototype, clones[0].as_ref());
        let original_is_clone2 = same_instance(prototype, clones[1].as_ref());
        let clone1_is_clone2 = same_instance(clones[0].as_ref(), clones[1].as_ref());
        let clone1_matches_original = same_stats(prototype, clones[0].as_ref());
        let clone2_matches_original = same_stats(prototype, clones[1].as_ref());

        lines.push(format!(
            "Are original and clone 1 the same instance? {original_is_clone1}"
        ));
        lines.push(format!(
            "Are original and clone 2 the same instance? {original_is_clone2}"
        ));
        lines.push(format!(
            "Are clone 1 and clone 2 the same instance? {clone1_is_clone2}"
        ));
        lines.push(format!(
            "Does clone 1 still match the original? {clone1_matches_original}"
        ));
        lines.push(format!(
            "Does clone 2 still match the original? {clone2_matches_original}"
        ));
        lines.push(format!("Original after the fight: {original}"));

        Ok(DemoReport {
            lines,
            original_is_clone1,
            original_is_clone2,
            clone1_is_clone2,
            clone1_matches_original,
            clone2_matches_original,
        })
    }
}

fn same_instance(a: &dyn Enemy, b: &dyn Enemy) -> bool {
    std::ptr::addr_eq(a as *const dyn Enemy, b as *const dyn Enemy)
}

// Display renders every field, so equal text means equal state.
fn same_stats(a: &dyn Enemy, b: &dyn Enemy) -> bool {
    a.to_string() == b.to_string()
}
