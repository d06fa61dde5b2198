use std::time::Duration;

/// How long success and info notices stay visible before auto-dismissal.
const AUTO_DISMISS: Duration = Duration::from_secs(4);

/// After a full form reset, any visible notice is cleared regardless of
/// severity once this delay has elapsed.
pub const RESET_CLEAR_DELAY: Duration = Duration::from_secs(5);

/// Severity tag attached to every user-visible status notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A transient status message. There is a single notice slot: showing a new
/// notice replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    /// Dismissal policy: success and info notices auto-clear, error notices
    /// persist until replaced or explicitly cleared. Frontends that cannot
    /// retract output (e.g. a plain console) may ignore this.
    pub fn auto_dismiss(&self) -> Option<Duration> {
        match self.severity {
            Severity::Success | Severity::Info => Some(AUTO_DISMISS),
            Severity::Error => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_info_auto_dismiss_after_four_seconds() {
        assert_eq!(
            Notice::success("ok").auto_dismiss(),
            Some(Duration::from_secs(4))
        );
        assert_eq!(
            Notice::info("fyi").auto_dismiss(),
            Some(Duration::from_secs(4))
        );
    }

    #[test]
    fn errors_persist_until_replaced() {
        assert_eq!(Notice::error("boom").auto_dismiss(), None);
    }

    #[test]
    fn reset_clear_delay_is_five_seconds() {
        assert_eq!(RESET_CLEAR_DELAY, Duration::from_secs(5));
    }
}
