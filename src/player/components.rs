//! Player-related components.

use bevy::prelude::*;
use std::time::Duration;

use crate::core::{Cooldown, PlayerTuning};

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Direction the player is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub fn name(&self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }

    /// Unit vector in map space (y grows downward).
    pub fn vector(&self) -> Vec2 {
        match self {
            Facing::Up => Vec2::NEG_Y,
            Facing::Down => Vec2::Y,
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }
}

/// What the player is doing while facing a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activity {
    /// Walking (or just stopped, until the next status refresh)
    #[default]
    Moving,
    Idle,
    Attacking,
}

/// Facing crossed with activity. Doubles as the animation clip selector.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStatus {
    pub facing: Facing,
    pub activity: Activity,
}

impl PlayerStatus {
    /// Recompute the activity from the current movement and attack flag.
    ///
    /// A stopped player becomes idle unless already idle or attacking. An
    /// attacking player is pinned in place. When the attack ends the status
    /// drops back to moving, and the next refresh settles it to idle if
    /// there is no input.
    pub fn refresh(&mut self, heading: &mut Vec2, attacking: bool) {
        if *heading == Vec2::ZERO && self.activity == Activity::Moving {
            self.activity = Activity::Idle;
        }

        if attacking {
            *heading = Vec2::ZERO;
            self.activity = Activity::Attacking;
        } else if self.activity == Activity::Attacking {
            self.activity = Activity::Moving;
        }
    }

    /// Animation clip name, e.g. `down`, `left_idle`, `up_attack`.
    pub fn clip_name(&self) -> String {
        match self.activity {
            Activity::Moving => self.facing.name().to_string(),
            Activity::Idle => format!("{}_idle", self.facing.name()),
            Activity::Attacking => format!("{}_attack", self.facing.name()),
        }
    }
}

/// One value per upgradable stat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub health: f32,
    pub energy: f32,
    pub attack: f32,
    pub magic: f32,
    pub speed: f32,
}

/// Names a single stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Health,
    Energy,
    Attack,
    Magic,
    Speed,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Health,
        StatKind::Energy,
        StatKind::Attack,
        StatKind::Magic,
        StatKind::Speed,
    ];
}

impl Stats {
    pub fn splat(value: f32) -> Self {
        Self {
            health: value,
            energy: value,
            attack: value,
            magic: value,
            speed: value,
        }
    }

    pub fn get(&self, kind: StatKind) -> f32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Energy => self.energy,
            StatKind::Attack => self.attack,
            StatKind::Magic => self.magic,
            StatKind::Speed => self.speed,
        }
    }

    fn get_mut(&mut self, kind: StatKind) -> &mut f32 {
        match kind {
            StatKind::Health => &mut self.health,
            StatKind::Energy => &mut self.energy,
            StatKind::Attack => &mut self.attack,
            StatKind::Magic => &mut self.magic,
            StatKind::Speed => &mut self.speed,
        }
    }
}

/// Experience cost of the first upgrade of each stat.
const BASE_UPGRADE_COST: f32 = 100.0;

/// Each upgrade makes the next one of the same stat this much dearer.
const UPGRADE_COST_GROWTH: f32 = 1.4;

/// Player's current stats, the cap each can be upgraded to, and what the
/// next upgrade of each costs in experience.
#[derive(Component, Debug, Clone)]
pub struct PlayerStats {
    pub current: Stats,
    pub max: Stats,
    pub upgrade_cost: Stats,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            current: Stats {
                health: 100.0,
                energy: 60.0,
                attack: 10.0,
                magic: 4.0,
                speed: 5.0,
            },
            max: Stats {
                health: 300.0,
                energy: 140.0,
                attack: 20.0,
                magic: 10.0,
                speed: 10.0,
            },
            upgrade_cost: Stats::splat(BASE_UPGRADE_COST),
        }
    }
}

impl PlayerStats {
    /// Raise a stat by 20%, clamped to its cap. Returns the new value.
    pub fn upgrade(&mut self, kind: StatKind) -> f32 {
        let cap = self.max.get(kind);
        let value = self.current.get_mut(kind);
        *value = (*value * 1.2).min(cap);
        *value
    }

    /// Buy one upgrade of `kind` with experience.
    ///
    /// Refused when the stat is already capped or `exp` cannot cover the
    /// cost. Returns the new stat value on success.
    pub fn try_upgrade(&mut self, kind: StatKind, exp: &mut Experience) -> Option<f32> {
        if self.current.get(kind) >= self.max.get(kind) {
            return None;
        }
        let cost = self.upgrade_cost.get(kind);
        if !exp.spend(cost.round() as u32) {
            return None;
        }
        *self.upgrade_cost.get_mut(kind) = cost * UPGRADE_COST_GROWTH;
        Some(self.upgrade(kind))
    }
}

/// Experience collected from kills and spent on stat upgrades.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Experience(pub u32);

impl Experience {
    pub fn gain(&mut self, amount: u32) {
        self.0 = self.0.saturating_add(amount);
    }

    /// Deduct `amount` if there is enough. Returns whether it was spent.
    pub fn spend(&mut self, amount: u32) -> bool {
        match self.0.checked_sub(amount) {
            Some(left) => {
                self.0 = left;
                true
            }
            None => false,
        }
    }
}

/// Attack window, equipment, and switching cooldowns.
#[derive(Component, Debug, Clone)]
pub struct PlayerCombat {
    /// Inside an attack or cast window
    pub attacking: bool,
    /// Started when an attack or cast begins; length depends on the weapon
    pub attack_window: Cooldown,
    pub weapon_index: usize,
    pub spell_index: usize,
    pub weapon_switch: Cooldown,
    pub spell_switch: Cooldown,
    /// Base attack window before the weapon's cooldown is added
    pub base_attack_cooldown: Duration,
}

impl PlayerCombat {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            attacking: false,
            attack_window: Cooldown::default(),
            weapon_index: 0,
            spell_index: 0,
            weapon_switch: Cooldown::from_millis(tuning.switch_cooldown_ms),
            spell_switch: Cooldown::from_millis(tuning.switch_cooldown_ms),
            base_attack_cooldown: Duration::from_millis(tuning.attack_cooldown_ms),
        }
    }

    /// Open an attack window at `now` lasting the base cooldown plus
    /// `weapon_cooldown`.
    pub fn begin_attack(&mut self, now: Duration, weapon_cooldown: Duration) {
        self.attacking = true;
        self.attack_window
            .set_duration(self.base_attack_cooldown + weapon_cooldown);
        self.attack_window.start(now);
    }

    /// Close the window if it has elapsed. Returns true exactly once per
    /// attack, on the frame the window closes.
    pub fn finish_attack(&mut self, now: Duration) -> bool {
        if self.attacking && self.attack_window.has_elapsed(now) {
            self.attacking = false;
            self.attack_window.clear();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopping_makes_player_idle() {
        let mut status = PlayerStatus {
            facing: Facing::Left,
            activity: Activity::Moving,
        };
        let mut heading = Vec2::ZERO;
        status.refresh(&mut heading, false);
        assert_eq!(status.activity, Activity::Idle);
        assert_eq!(status.clip_name(), "left_idle");
    }

    #[test]
    fn attacking_pins_player_in_place() {
        let mut status = PlayerStatus {
            facing: Facing::Right,
            activity: Activity::Moving,
        };
        let mut heading = Vec2::X;
        status.refresh(&mut heading, true);
        assert_eq!(heading, Vec2::ZERO);
        assert_eq!(status.activity, Activity::Attacking);
        assert_eq!(status.clip_name(), "right_attack");

        // Window closed, no input: moving for one refresh, then idle
        status.refresh(&mut heading, false);
        assert_eq!(status.activity, Activity::Moving);
        status.refresh(&mut heading, false);
        assert_eq!(status.activity, Activity::Idle);
    }

    #[test]
    fn attack_window_closes_once() {
        let mut combat = PlayerCombat::new(&PlayerTuning::default());
        combat.begin_attack(Duration::from_millis(1_000), Duration::from_millis(100));

        assert!(!combat.finish_attack(Duration::from_millis(1_499)));
        assert!(combat.attacking);
        assert!(combat.finish_attack(Duration::from_millis(1_500)));
        assert!(!combat.attacking);
        assert!(!combat.finish_attack(Duration::from_millis(2_000)));
    }

    #[test]
    fn upgrade_is_capped() {
        let mut stats = PlayerStats::default();
        assert!((stats.upgrade(StatKind::Attack) - 12.0).abs() < 1e-4);
        for _ in 0..10 {
            stats.upgrade(StatKind::Attack);
        }
        assert_eq!(stats.current.attack, 20.0);
        assert_eq!(stats.current.magic, 4.0);
    }

    #[test]
    fn upgrades_cost_experience_and_get_dearer() {
        let mut stats = PlayerStats::default();
        let mut exp = Experience(250);

        assert!(stats.try_upgrade(StatKind::Speed, &mut exp).is_some());
        assert_eq!(exp.0, 150);
        assert!((stats.current.speed - 6.0).abs() < 1e-4);

        // Second speed upgrade costs 140
        assert!(stats.try_upgrade(StatKind::Speed, &mut exp).is_some());
        assert_eq!(exp.0, 10);
        assert!(stats.try_upgrade(StatKind::Speed, &mut exp).is_none());
        assert_eq!(exp.0, 10);
    }

    #[test]
    fn capped_stat_is_not_charged() {
        let mut stats = PlayerStats::default();
        stats.current.magic = stats.max.magic;
        let mut exp = Experience(1_000);
        assert!(stats.try_upgrade(StatKind::Magic, &mut exp).is_none());
        assert_eq!(exp.0, 1_000);
    }

    #[test]
    fn experience_saturates() {
        let mut exp = Experience(u32::MAX - 1);
        exp.gain(10);
        assert_eq!(exp.0, u32::MAX);
    }
}
