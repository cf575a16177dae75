//! Button event kinds and the per-line one-shot event store.

/// Logical events derived from stable level transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Stable transition to pressed.
    Press,
    /// Stable transition to released.
    Release,
    /// Press sustained beyond the long-press threshold, once per press.
    LongPress,
    /// Two presses starting within the double-click window.
    DoubleClick,
}

/// One-shot event flags of one line. A flag raised by the classifier stays
/// set until the first `take`, which clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct EventFlags {
    pressed: bool,
    released: bool,
    long_pressed: bool,
    double_clicked: bool,
}

impl EventFlags {
    pub(crate) const fn new() -> Self {
        Self {
            pressed: false,
            released: false,
            long_pressed: false,
            double_clicked: false,
        }
    }

    pub(crate) fn raise(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::Press => self.pressed = true,
            ButtonEvent::Release => self.released = true,
            ButtonEvent::LongPress => self.long_pressed = true,
            ButtonEvent::DoubleClick => self.double_clicked = true,
        }
    }

    /// Read-and-clear one flag.
    pub(crate) fn take(&mut self, event: ButtonEvent) -> bool {
        let flag = match event {
            ButtonEvent::Press => &mut self.pressed,
            ButtonEvent::Release => &mut self.released,
            ButtonEvent::LongPress => &mut self.long_pressed,
            ButtonEvent::DoubleClick => &mut self.double_clicked,
        };
        core::mem::take(flag)
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn take_is_one_shot() {
        let mut flags = EventFlags::new();
        flags.raise(ButtonEvent::Press);
        assert!(flags.take(ButtonEvent::Press));
        assert!(!flags.take(ButtonEvent::Press));
    }

    #[test]
    fn flags_are_independent() {
        let mut flags = EventFlags::new();
        flags.raise(ButtonEvent::LongPress);
        flags.raise(ButtonEvent::Release);
        assert!(!flags.take(ButtonEvent::Press));
        assert!(!flags.take(ButtonEvent::DoubleClick));
        assert!(flags.take(ButtonEvent::Release));
        assert!(flags.take(ButtonEvent::LongPress));
    }

    #[test]
    fn clear_drops_everything() {
        let mut flags = EventFlags::new();
        flags.raise(ButtonEvent::Press);
        flags.raise(ButtonEvent::DoubleClick);
        flags.clear();
        assert_eq!(flags, EventFlags::new());
    }
}
