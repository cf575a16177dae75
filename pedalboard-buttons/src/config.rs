//! Timing configuration for the button engine.

use embassy_time::Duration;

/// Tunable timings of the button engine.
///
/// All fields are plain durations with no bounds validation; changes made
/// through [`crate::ButtonEngine::set_timings`] take effect from the next
/// evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// A raw level must hold this long before it is accepted as stable.
    pub debounce: Duration,
    /// A press held stable this long raises a long-press, once per press.
    pub long_press: Duration,
    /// Two presses starting within this window raise a double-click.
    pub double_click: Duration,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(50),
            long_press: Duration::from_millis(1000),
            double_click: Duration::from_millis(400),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_timings() {
        let config = ButtonConfig::default();
        assert_eq!(config.debounce, Duration::from_millis(50));
        assert_eq!(config.long_press, Duration::from_millis(1000));
        assert_eq!(config.double_click, Duration::from_millis(400));
    }
}
