//! Bounded resource meters (HP, EP).
//!
//! A meter stores its current and maximum value and enforces
//! `0 <= current <= max` through every mutation. All arithmetic is
//! saturating/clamped integer math so a replayed battle is bit-identical.

/// A bounded resource pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    max: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` into `[0, max]`.
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    /// Creates a meter filled to its maximum.
    pub const fn at_max(max: u32) -> Self {
        Self { current: max, max }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub const fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub const fn is_full(&self) -> bool {
        self.current == self.max
    }

    /// Reduces the meter, flooring at zero. Returns the amount actually lost.
    pub fn deplete(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current);
        self.current -= lost;
        lost
    }

    /// Restores the meter, capping at max. Returns the amount actually gained.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max - self.current);
        self.current += gained;
        gained
    }

    /// Withdraws `amount` only if fully available. Returns false otherwise,
    /// leaving the meter untouched.
    pub fn spend(&mut self, amount: u32) -> bool {
        if amount > self.current {
            return false;
        }
        self.current -= amount;
        true
    }

    /// Raises the maximum without changing the current value.
    pub fn raise_max(&mut self, by: u32) {
        self.max = self.max.saturating_add(by);
    }

    /// Sets the current value to the maximum.
    pub fn refill(&mut self) {
        self.current = self.max;
    }
}
