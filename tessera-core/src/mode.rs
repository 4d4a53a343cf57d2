//! Application mode token and dispatch mapping
//!
//! Exactly one worker owns console focus per mode value. The token is
//! mutated only by workers at focus-handoff points; the router reads it
//! before every dispatch. No lock protects it - correctness relies on the
//! single-owner protocol: at most one worker is ever blocked awaiting the
//! next command signal.

/// Which worker currently owns console input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppMode {
    /// Root menu prompting for a sub-system
    MainMenu,
    /// LED pattern demonstrator active
    LedEffect,
    /// RTC sub-menu prompting for an option
    RtcMenu,
    /// Sequential time entry in progress
    RtcTimeConfig,
    /// Sequential date entry in progress
    RtcDateConfig,
    /// Reporting toggle prompt in progress
    RtcReport,
}

/// Worker a command is forwarded to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchTarget {
    Menu,
    Led,
    Rtc,
}

impl AppMode {
    /// The worker that receives the next command in this mode
    ///
    /// Pure function of the mode; the router performs no interpretation
    /// of command content.
    pub const fn dispatch_target(self) -> DispatchTarget {
        match self {
            AppMode::MainMenu => DispatchTarget::Menu,
            AppMode::LedEffect => DispatchTarget::Led,
            AppMode::RtcMenu
            | AppMode::RtcTimeConfig
            | AppMode::RtcDateConfig
            | AppMode::RtcReport => DispatchTarget::Rtc,
        }
    }

    /// Encode for storage in an atomic cell
    pub const fn encode(self) -> u8 {
        match self {
            AppMode::MainMenu => 0,
            AppMode::LedEffect => 1,
            AppMode::RtcMenu => 2,
            AppMode::RtcTimeConfig => 3,
            AppMode::RtcDateConfig => 4,
            AppMode::RtcReport => 5,
        }
    }

    /// Decode a value produced by [`AppMode::encode`]
    pub const fn decode(code: u8) -> Option<Self> {
        match code {
            0 => Some(AppMode::MainMenu),
            1 => Some(AppMode::LedEffect),
            2 => Some(AppMode::RtcMenu),
            3 => Some(AppMode::RtcTimeConfig),
            4 => Some(AppMode::RtcDateConfig),
            5 => Some(AppMode::RtcReport),
            _ => None,
        }
    }
}
