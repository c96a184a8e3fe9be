//! Operator-facing status snapshot.

use std::fmt;

/// Point-in-time view of the watchdog, as shown by the `status` console
/// command.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    /// Environment starts observed since process start.
    pub map_changes: u32,
    /// Currently connected human participants.
    pub player_count: u32,
    /// Configured idle delay in seconds.
    pub delay_secs: f32,
    /// Configured default map identifier.
    pub default_map: String,
    /// Whether a workshop collection is in effect.
    pub workshop_collection: bool,
    /// Whether debug tracing is enabled.
    pub debug: bool,
    /// Whether an idle timeout is currently pending.
    pub timer_pending: bool,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Idle watchdog status:")?;
        writeln!(f, "Map change count:            {}", self.map_changes)?;
        writeln!(f, "Current player count:        {}", self.player_count)?;
        writeln!(f, "Idle timeout delay:          {}s", self.delay_secs)?;
        writeln!(f, "Default map:                 {}", self.default_map)?;
        writeln!(
            f,
            "Workshop collection enabled: {}",
            self.workshop_collection
        )?;
        writeln!(f, "Debug mode:                  {}", self.debug)?;
        write!(
            f,
            "Timer started:               {}",
            if self.timer_pending { "Yes" } else { "No" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_operator_table() {
        let report = StatusReport {
            map_changes: 4,
            player_count: 2,
            delay_secs: 3600.0,
            default_map: "de_dust2".to_string(),
            workshop_collection: false,
            debug: true,
            timer_pending: false,
        };

        let text = report.to_string();
        assert!(text.starts_with("Idle watchdog status:"));
        assert!(text.contains("Map change count:            4"));
        assert!(text.contains("Current player count:        2"));
        assert!(text.contains("Idle timeout delay:          3600s"));
        assert!(text.contains("Debug mode:                  true"));
        assert!(text.ends_with("Timer started:               No"));
    }

    #[test]
    fn pending_timer_renders_yes() {
        let report = StatusReport {
            map_changes: 0,
            player_count: 0,
            delay_secs: 5.0,
            default_map: "ws:123".to_string(),
            workshop_collection: true,
            debug: false,
            timer_pending: true,
        };
        assert!(report.to_string().ends_with("Timer started:               Yes"));
    }
}
