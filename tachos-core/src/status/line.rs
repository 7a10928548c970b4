//! Status line rendering
//!
//! Format, one line per ramp tick:
//!
//! ```text
//! Motor: medido=<int> | alvo=<int> | motor=<int> | pegos=<int> | emergency=<0|1>
//! ```
//!
//! The field labels are the bench tooling's parse keys and stay as they are.

use core::fmt::Write;

use heapless::String;

use crate::state::Snapshot;

/// Capacity of a rendered status line
///
/// The longest possible line (all fields at their maximum) is 79 bytes.
pub const STATUS_LINE_CAPACITY: usize = 96;

/// Rendered status line
pub type StatusLine = String<STATUS_LINE_CAPACITY>;

/// Render a snapshot as a status line (without newline)
pub fn render(snapshot: &Snapshot) -> StatusLine {
    let mut line = StatusLine::new();
    // Cannot overflow: capacity covers the widest values
    let _ = write!(
        line,
        "Motor: medido={} | alvo={} | motor={} | pegos={} | emergency={}",
        snapshot.measured_speed,
        snapshot.target_speed,
        snapshot.motor,
        snapshot.detection_count,
        snapshot.emergency_latched as u8,
    );
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_format() {
        let snapshot = Snapshot {
            measured_speed: 2900,
            target_speed: 3001,
            motor: 2900,
            detection_count: 12,
            emergency_latched: false,
        };
        assert_eq!(
            render(&snapshot).as_str(),
            "Motor: medido=2900 | alvo=3001 | motor=2900 | pegos=12 | emergency=0"
        );
    }

    #[test]
    fn test_render_widest_line_fits() {
        let snapshot = Snapshot {
            measured_speed: u16::MAX,
            target_speed: u16::MAX,
            motor: u16::MAX,
            detection_count: u32::MAX,
            emergency_latched: true,
        };
        let line = render(&snapshot);
        assert!(line.ends_with("pegos=4294967295 | emergency=1"));
        assert!(line.starts_with("Motor: medido=65535 | alvo=65535"));
    }
}
