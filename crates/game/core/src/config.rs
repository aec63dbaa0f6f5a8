/// Combat configuration: compile-time caps and tunable balance values.
///
/// The `const` items are structural limits used as type parameters for
/// bounded collections. The struct fields are balance knobs that content
/// packs may override (e.g. via a TOML table in `skirmish-content`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// EP withdrawn by the universal Defend move.
    pub defend_ep_cost: u32,
    /// EP restored by the universal Recharge move.
    pub recharge_ep_gain: u32,
    /// Damage dealt by one poison tick at turn start.
    pub poison_tick_damage: u32,
    /// Damage a shield absorbs before it is consumed.
    pub shield_absorb: u32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum simultaneous status effects per combatant.
    pub const MAX_STATUS_EFFECTS: usize = 5;
    /// Ability loadout: three class abilities plus one race bonus slot.
    pub const MAX_ABILITY_SLOTS: usize = 4;
    pub const BASE_ABILITY_SLOTS: usize = 3;
    pub const MAX_INVENTORY_SLOTS: usize = 8;

    // ===== content validation bounds =====
    /// Upper bound for an ability's EP cost.
    pub const MAX_EP_COST: u32 = 100;
    /// Upper bound for an ability's effect magnitude.
    pub const MAX_EFFECT_VALUE: u32 = 100;

    // ===== balance defaults =====
    pub const DEFAULT_DEFEND_EP_COST: u32 = 5;
    pub const DEFAULT_RECHARGE_EP_GAIN: u32 = 5;
    pub const DEFAULT_POISON_TICK_DAMAGE: u32 = 5;
    pub const DEFAULT_SHIELD_ABSORB: u32 = 15;

    // ===== progression =====
    /// Flat XP awarded for any victory.
    pub const XP_VICTORY_BASE: u32 = 25;
    /// Additional XP per level of the defeated combatant.
    pub const XP_VICTORY_PER_LEVEL: u32 = 10;
    /// Max HP gained per level on level-up.
    pub const LEVEL_UP_HP_BONUS: u32 = 10;
    /// Max EP gained per level on level-up.
    pub const LEVEL_UP_EP_BONUS: u32 = 5;

    pub fn new() -> Self {
        Self {
            defend_ep_cost: Self::DEFAULT_DEFEND_EP_COST,
            recharge_ep_gain: Self::DEFAULT_RECHARGE_EP_GAIN,
            poison_tick_damage: Self::DEFAULT_POISON_TICK_DAMAGE,
            shield_absorb: Self::DEFAULT_SHIELD_ABSORB,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
