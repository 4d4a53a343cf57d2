//! LED pattern generators
//!
//! Four generators drive the four-LED bank, one step per tick of the
//! shared periodic driver. The engine holds which generator is selected
//! plus its local counter; switching generators resets the counter but
//! never the driver itself.

use crate::command::Command;

/// Number of LEDs in the bank
pub const LED_COUNT: usize = 4;

/// Mask covering every LED bit
pub const LED_MASK: u8 = 0x0F;

/// Seed for the alternating generator: odd LEDs lit first after one tick
const ALTERNATE_SEED: u8 = 0x0A;

/// Available pattern generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedEffect {
    /// "e1" - toggle every LED each tick
    Toggle,
    /// "e2" - complement a 4-bit pattern each tick, period 2
    Alternate,
    /// "e3" - one lit LED walking toward the most-significant position
    ChaseUp,
    /// "e4" - one lit LED walking toward the least-significant position
    ChaseDown,
}

/// A parsed LED worker command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedCommand {
    /// Select or replace the active generator
    Select(LedEffect),
    /// Stop, clear the bank, return focus to the root menu
    Exit,
}

impl LedCommand {
    /// Parse an LED worker reply; `None` if unrecognized
    pub fn parse(cmd: &Command) -> Option<Self> {
        match cmd.as_bytes() {
            b"e1" => Some(LedCommand::Select(LedEffect::Toggle)),
            b"e2" => Some(LedCommand::Select(LedEffect::Alternate)),
            b"e3" => Some(LedCommand::Select(LedEffect::ChaseUp)),
            b"e4" => Some(LedCommand::Select(LedEffect::ChaseDown)),
            b"exit" => Some(LedCommand::Exit),
            _ => None,
        }
    }
}

/// Pattern engine state
///
/// `step()` advances exactly the selected generator by one tick and
/// returns the new 4-bit output vector (bit i drives LED i). With no
/// generator selected a tick leaves the bank dark.
#[derive(Debug, Clone, Copy)]
pub struct PatternEngine {
    effect: Option<LedEffect>,
    outputs: u8,
    pattern: u8,
    index: u8,
}

impl PatternEngine {
    pub const fn new() -> Self {
        Self {
            effect: None,
            outputs: 0,
            pattern: ALTERNATE_SEED,
            index: 0,
        }
    }

    /// Currently selected generator, if any
    pub fn effect(&self) -> Option<LedEffect> {
        self.effect
    }

    /// Current output vector
    pub fn outputs(&self) -> u8 {
        self.outputs
    }

    /// Select or replace the active generator
    ///
    /// Resets the generator-local counter and darkens the bank; the next
    /// tick produces the new pattern's first frame.
    pub fn select(&mut self, effect: LedEffect) {
        self.effect = Some(effect);
        self.outputs = 0;
        self.pattern = ALTERNATE_SEED;
        self.index = 0;
    }

    /// Deselect any generator and darken the bank
    pub fn clear(&mut self) {
        self.effect = None;
        self.outputs = 0;
        self.pattern = ALTERNATE_SEED;
        self.index = 0;
    }

    /// Advance one tick, returning the new output vector
    pub fn step(&mut self) -> u8 {
        match self.effect {
            None => {}
            Some(LedEffect::Toggle) => {
                self.outputs ^= LED_MASK;
            }
            Some(LedEffect::Alternate) => {
                self.pattern = !self.pattern & LED_MASK;
                self.outputs = self.pattern;
            }
            Some(LedEffect::ChaseUp) => {
                self.outputs = 1 << self.index;
                self.index = (self.index + 1) % LED_COUNT as u8;
            }
            Some(LedEffect::ChaseDown) => {
                self.outputs = 0x08 >> self.index;
                self.index = (self.index + 1) % LED_COUNT as u8;
            }
        }
        self.outputs
    }
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(line: &[u8]) -> Command {
        let mut data = line.to_vec();
        data.push(b'\n');
        Command::extract(&mut data.iter().copied()).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            LedCommand::parse(&cmd(b"e1")),
            Some(LedCommand::Select(LedEffect::Toggle))
        );
        assert_eq!(
            LedCommand::parse(&cmd(b"e4")),
            Some(LedCommand::Select(LedEffect::ChaseDown))
        );
        assert_eq!(LedCommand::parse(&cmd(b"exit")), Some(LedCommand::Exit));
        assert_eq!(LedCommand::parse(&cmd(b"e5")), None);
        assert_eq!(LedCommand::parse(&cmd(b"")), None);
        assert_eq!(LedCommand::parse(&cmd(b"exit2")), None);
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut engine = PatternEngine::new();
        engine.select(LedEffect::Toggle);

        let before = engine.outputs();
        engine.step();
        let after_one = engine.outputs();
        engine.step();

        assert_ne!(before, after_one);
        assert_eq!(engine.outputs(), before);
    }

    #[test]
    fn test_toggle_lights_all_from_dark() {
        let mut engine = PatternEngine::new();
        engine.select(LedEffect::Toggle);
        assert_eq!(engine.step(), LED_MASK);
    }

    #[test]
    fn test_alternate_complements_with_period_two() {
        let mut engine = PatternEngine::new();
        engine.select(LedEffect::Alternate);

        let first = engine.step();
        let second = engine.step();

        assert_eq!(first, 0x05);
        assert_eq!(second, 0x0A);
        assert_eq!(second, !first & LED_MASK);
        assert_eq!(engine.step(), first);
    }

    #[test]
    fn test_chase_up_sequence() {
        let mut engine = PatternEngine::new();
        engine.select(LedEffect::ChaseUp);

        let frames: [u8; 5] = core::array::from_fn(|_| engine.step());
        assert_eq!(frames, [0x01, 0x02, 0x04, 0x08, 0x01]);
    }

    #[test]
    fn test_chase_down_sequence() {
        let mut engine = PatternEngine::new();
        engine.select(LedEffect::ChaseDown);

        let frames: [u8; 5] = core::array::from_fn(|_| engine.step());
        assert_eq!(frames, [0x08, 0x04, 0x02, 0x01, 0x08]);
    }

    #[test]
    fn test_reselect_resets_counter() {
        let mut engine = PatternEngine::new();
        engine.select(LedEffect::ChaseUp);
        engine.step();
        engine.step();

        // Replacing the generator restarts its cycle.
        engine.select(LedEffect::ChaseUp);
        assert_eq!(engine.outputs(), 0);
        assert_eq!(engine.step(), 0x01);
    }

    #[test]
    fn test_clear_darkens_bank() {
        let mut engine = PatternEngine::new();
        engine.select(LedEffect::Toggle);
        engine.step();

        engine.clear();
        assert_eq!(engine.outputs(), 0);
        assert_eq!(engine.effect(), None);
        assert_eq!(engine.step(), 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn chase_always_lights_exactly_one_led(ticks in 1usize..64) {
                for effect in [LedEffect::ChaseUp, LedEffect::ChaseDown] {
                    let mut engine = PatternEngine::new();
                    engine.select(effect);
                    for _ in 0..ticks {
                        prop_assert_eq!(engine.step().count_ones(), 1);
                    }
                }
            }

            #[test]
            fn toggle_restores_state_after_even_ticks(pairs in 1usize..32) {
                let mut engine = PatternEngine::new();
                engine.select(LedEffect::Toggle);
                let initial = engine.outputs();
                for _ in 0..pairs * 2 {
                    engine.step();
                }
                prop_assert_eq!(engine.outputs(), initial);
            }
        }
    }
}
