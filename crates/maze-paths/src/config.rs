/// Goal ceiling used by [`PlannerConfig::default`].
pub const DEFAULT_MAX_GOALS: usize = 12;

/// Hard goal ceiling for [`OrderStrategy::HeldKarp`], whatever
/// `max_goals` says. Its tables hold `n · 2^n` entries.
pub const HELD_KARP_MAX_GOALS: usize = 20;

/// How the visiting order of the goals is chosen. Both strategies return a
/// minimum-cost route.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrderStrategy {
    /// Evaluate every ordering in lexicographic order and keep the first
    /// cheapest one. Factorial in the number of goals.
    #[default]
    Permutation,
    /// Dynamic program over goal subsets. Exponential rather than factorial,
    /// so it reaches larger goal counts.
    HeldKarp,
}

/// Planner settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub strategy: OrderStrategy,
    /// Requests with more goals than this are rejected before any search.
    pub max_goals: usize,
}

impl PlannerConfig {
    /// The goal ceiling actually enforced: `max_goals`, capped for
    /// strategies whose memory grows exponentially.
    pub fn goal_limit(&self) -> usize {
        match self.strategy {
            OrderStrategy::Permutation => self.max_goals,
            OrderStrategy::HeldKarp => self.max_goals.min(HELD_KARP_MAX_GOALS),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: OrderStrategy::Permutation,
            max_goals: DEFAULT_MAX_GOALS,
        }
    }
}
