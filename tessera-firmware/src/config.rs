//! Deployment constants
//!
//! The knobs a deployment can turn without touching the workers: the
//! board's hour display convention, the two periodic driver periods, and
//! whether reporter snapshots are forwarded to the console.

use embassy_time::Duration;

use tessera_core::clock::HourFormat;

/// Hour display convention for committed times and snapshots
pub const HOUR_FORMAT: HourFormat = HourFormat::H12;

/// Period of the shared LED pattern driver
pub const LED_TICK_PERIOD: Duration = Duration::from_millis(250);

/// Period of the time/date reporter
pub const REPORT_PERIOD: Duration = Duration::from_secs(1);

/// Forward reporter snapshots to the console as well as the log
///
/// The wiring is always present; a deployment opts in with the
/// `report-console` feature.
pub const REPORT_TO_CONSOLE: bool = cfg!(feature = "report-console");
