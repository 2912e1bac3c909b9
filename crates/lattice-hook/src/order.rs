//! Execution order for hook subscribers.

/// Execution order for a hook subscriber. Lower values run first.
///
/// The engine accepts any signed value; the named constants are a caller
/// convention, not a closed set it validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HookOrder(pub i32);

impl HookOrder {
    /// Framework-internal subscribers that must run before everything else.
    pub const CORE: HookOrder = HookOrder(-2000);
    /// Highest application priority.
    pub const HIGHEST: HookOrder = HookOrder(-1000);
    /// High priority.
    pub const HIGH: HookOrder = HookOrder(-500);
    /// Neutral priority (the default).
    pub const NEUTRAL: HookOrder = HookOrder(0);
    /// Low priority.
    pub const LOW: HookOrder = HookOrder(500);
    /// Lowest priority (executes last).
    pub const LOWEST: HookOrder = HookOrder(1000);
}

impl Default for HookOrder {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<i32> for HookOrder {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for HookOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
