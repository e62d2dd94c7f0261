pub mod enemy;
pub mod log;
pub mod orc;

pub use enemy::Enemy;
pub use log::CombatLog;
pub use orc::Orc;
