//! Level manager — level number, pass/fail state, and restart bookkeeping.

/// Tracks which level is being attempted and whether the last outcome was
/// a pass.
#[derive(Debug, Clone)]
pub struct LevelManager {
    current_level: u32,
    passed: bool,
}

impl Default for LevelManager {
    fn default() -> Self {
        Self {
            current_level: 1,
            passed: false,
        }
    }
}

impl LevelManager {
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn set_passed(&mut self, passed: bool) {
        self.passed = passed;
    }

    /// Move to the next attempt: advance on a pass, restart at level 1 on a
    /// fail. Clears the pass flag for the new attempt.
    pub fn advance(&mut self) {
        self.current_level = if self.passed { self.current_level + 1 } else { 1 };
        self.passed = false;
    }
}
