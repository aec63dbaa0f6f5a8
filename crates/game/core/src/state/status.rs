//! Status effects: time-boxed or use-boxed modifiers attached to a combatant.
//!
//! The kind set is closed. Per-kind behavior (attach side effects, turn-start
//! ticks, expiry sweeps) is implemented as exhaustive matches, so adding a
//! variant fails to compile until every lifecycle site handles it. Durations
//! count round starts: an effect attached during round N first ticks at the
//! start of round N+1.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;

/// The closed set of status conditions.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum StatusKind {
    /// Forced to skip actions while the flag is set.
    Stunned,

    /// Loses HP at every turn start.
    Poisoned,

    /// Incoming damage is halved.
    DefenseUp,

    /// Incoming attacks miss (unless Marked).
    Evading,

    /// New status effects cannot be attached.
    Immunity,

    /// Absorbs a fixed amount of damage, then breaks. Use-boxed: ignores the
    /// duration counter entirely.
    Shielded,

    /// Cannot evade; marks the combatant for follow-up attacks.
    Marked,
}

impl StatusKind {
    /// Base duration in rounds. The value for `Shielded` is nominal; shields
    /// expire on first absorption, never by duration.
    pub const fn base_duration(&self) -> u8 {
        match self {
            Self::Stunned => 2,
            Self::Poisoned => 3,
            Self::DefenseUp => 1,
            Self::Evading => 1,
            Self::Immunity => 1,
            Self::Shielded => 1,
            Self::Marked => 2,
        }
    }

    /// True for effects that expire on use rather than by duration.
    pub const fn is_use_boxed(&self) -> bool {
        matches!(self, Self::Shielded)
    }

    /// True for conditions a cleansing item is allowed to strip.
    pub const fn is_debuff(&self) -> bool {
        matches!(self, Self::Stunned | Self::Poisoned | Self::Marked)
    }
}

/// A single active status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Rounds left before expiry. Meaningless for use-boxed kinds.
    pub remaining: u8,
}

impl StatusEffect {
    /// Factory: a fresh instance of `kind` at its base duration.
    pub const fn new(kind: StatusKind) -> Self {
        Self {
            kind,
            remaining: kind.base_duration(),
        }
    }
}

/// Active status effects on a combatant, capped at
/// [`CombatConfig::MAX_STATUS_EFFECTS`].
///
/// The cap is a soft limit: `add` reports a dropped effect by returning
/// false rather than erroring, matching the original game's behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    pub fn has(&self, kind: StatusKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Attaches an effect.
    ///
    /// If the kind is already present, the longer remaining duration wins.
    /// Returns false only when the cap drops a genuinely new effect.
    pub fn add(&mut self, effect: StatusEffect) -> bool {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            existing.remaining = existing.remaining.max(effect.remaining);
            return true;
        }

        if self.effects.is_full() {
            tracing::warn!(kind = %effect.kind, "status effect dropped: cap reached");
            return false;
        }
        self.effects.push(effect);
        true
    }

    /// Removes an effect immediately. Returns true if it was present.
    pub fn remove(&mut self, kind: StatusKind) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| e.kind != kind);
        self.effects.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut StatusEffect> {
        self.effects.iter_mut()
    }

    /// Drops every duration-based effect that has reached zero, returning the
    /// removed kinds so the owner can run detach side effects.
    pub(crate) fn sweep_expired(
        &mut self,
    ) -> ArrayVec<StatusKind, { CombatConfig::MAX_STATUS_EFFECTS }> {
        let mut removed = ArrayVec::new();
        self.effects.retain(|e| {
            let expired = !e.kind.is_use_boxed() && e.remaining == 0;
            if expired {
                removed.push(e.kind);
            }
            !expired
        });
        removed
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_uses_base_duration() {
        let effect = StatusEffect::new(StatusKind::Poisoned);
        assert_eq!(effect.remaining, 3);
    }

    #[test]
    fn add_refreshes_to_longer_duration() {
        let mut set = StatusEffects::empty();
        set.add(StatusEffect {
            kind: StatusKind::Marked,
            remaining: 1,
        });
        assert!(set.add(StatusEffect::new(StatusKind::Marked)));
        assert_eq!(set.len(), 1);
        let effect = set.iter().next().unwrap();
        assert_eq!(effect.remaining, 2);
    }

    #[test]
    fn sixth_effect_is_dropped_without_error() {
        let mut set = StatusEffects::empty();
        for kind in [
            StatusKind::Stunned,
            StatusKind::Poisoned,
            StatusKind::DefenseUp,
            StatusKind::Evading,
            StatusKind::Immunity,
        ] {
            assert!(set.add(StatusEffect::new(kind)));
        }
        assert!(!set.add(StatusEffect::new(StatusKind::Marked)));
        assert_eq!(set.len(), CombatConfig::MAX_STATUS_EFFECTS);
        assert!(!set.has(StatusKind::Marked));
    }

    #[test]
    fn sweep_ignores_use_boxed_shield() {
        let mut set = StatusEffects::empty();
        set.add(StatusEffect {
            kind: StatusKind::Shielded,
            remaining: 0,
        });
        set.add(StatusEffect {
            kind: StatusKind::Evading,
            remaining: 0,
        });
        let removed = set.sweep_expired();
        assert_eq!(removed.as_slice(), &[StatusKind::Evading]);
        assert!(set.has(StatusKind::Shielded));
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(StatusKind::DefenseUp.to_string(), "Defense Up");
        assert_eq!(StatusKind::Stunned.to_string(), "Stunned");
    }
}
