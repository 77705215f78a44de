use crate::common::Int;
use rand::Rng;

/// A source of uniformly distributed integers.
pub trait Roller {
    /// Draws a value from the inclusive range `min..=max`, where `min <= max`.
    fn roll(&mut self, min: Int, max: Int) -> Int;

    fn roll_die(&mut self, sides: Int) -> Int {
        self.roll(1, sides)
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, min: Int, max: Int) -> Int {
        self.gen_range(min..=max)
    }
}

/// Always rolls the same value, whatever the range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FixedRoller(pub Int);

impl FixedRoller {
    pub fn new(value: Int) -> Self {
        Self(value)
    }
}

impl Roller for FixedRoller {
    fn roll(&mut self, _min: Int, _max: Int) -> Int {
        self.0
    }
}

/// Plays back a script of values, starting over once it runs out.
///
/// Values are returned as written, so a script can hand out results outside
/// the requested range. An empty script rolls `min`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScriptedRoller {
    script: Vec<Int>,
    next: usize,
}

impl ScriptedRoller {
    pub fn new(script: impl IntoIterator<Item = Int>) -> Self {
        Self {
            script: script.into_iter().collect(),
            next: 0,
        }
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, min: Int, _max: Int) -> Int {
        if self.script.is_empty() {
            return min;
        }
        let ret = self.script[self.next];
        self.next = (self.next + 1) % self.script.len();
        ret
    }
}
