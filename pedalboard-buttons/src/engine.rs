//! The button engine: periodic sampling, event classification and the
//! polling API consumed by the control loop.
//!
//! One call to [`ButtonEngine::update`] is one evaluation: read-and-clear
//! the relay flag, then for every line sample (or reuse the cached raw
//! level), commit debounced transitions, run the long-press check and expire
//! stale pending clicks, in that fixed order. A press committed in an
//! evaluation is immediately eligible for the same evaluation's long-press
//! and timeout checks.

use embassy_time::Instant;
use embedded_hal::digital::InputPin;
use heapless::Vec;

use crate::MAX_BUTTONS;
use crate::config::ButtonConfig;
use crate::debounce::{DebounceState, Debouncer};
use crate::event::{ButtonEvent, EventFlags};
use crate::interrupt::InterruptRelay;

/// State of one button line.
struct Button<In> {
    pin: In,
    debouncer: Debouncer,
    /// Timestamp of a committed press still waiting for a second press.
    /// `Some` is the spec's click counter at 1, `None` at 0; the payload is
    /// the press reference.
    pending_click: Option<Instant>,
    long_reported: bool,
    interrupt_capable: bool,
    events: EventFlags,
}

impl<In: InputPin> Button<In> {
    fn new(pin: In, level: bool, now: Instant) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(level, now),
            pending_click: None,
            long_reported: false,
            interrupt_capable: false,
            events: EventFlags::new(),
        }
    }

    fn read_level(&mut self, low_active: bool) -> bool {
        if low_active {
            self.pin.is_low().ok().unwrap_or_default()
        } else {
            self.pin.is_high().ok().unwrap_or_default()
        }
    }

    /// One evaluation of this line. `sample` carries the freshly read level,
    /// or `None` when the relay reported no activity for a capable line, in
    /// which case the last sampled level is reused.
    fn evaluate(&mut self, index: usize, sample: Option<bool>, now: Instant, config: &ButtonConfig) {
        let raw = sample.unwrap_or_else(|| self.debouncer.raw());

        if let DebounceState::Debounced = self.debouncer.sample(raw, now, config.debounce) {
            if self.debouncer.stable() {
                self.events.raise(ButtonEvent::Press);
                self.long_reported = false;
                debug!("button {} pressed", index);

                match self.pending_click.take() {
                    Some(previous) if now - previous <= config.double_click => {
                        // Second press inside the window. The pending state
                        // stays cleared, so a third rapid press starts a
                        // fresh count rather than a triple-click.
                        self.events.raise(ButtonEvent::DoubleClick);
                        info!("button {} double clicked", index);
                    }
                    _ => self.pending_click = Some(now),
                }
            } else {
                self.events.raise(ButtonEvent::Release);
                debug!("button {} released", index);
            }
        }

        // Long-press check, independent of this evaluation's sampling
        if self.debouncer.stable()
            && !self.long_reported
            && now - self.debouncer.stable_since() >= config.long_press
        {
            self.events.raise(ButtonEvent::LongPress);
            self.long_reported = true;
            // A long hold cancels any pending double-click interpretation
            self.pending_click = None;
            info!("button {} long pressed", index);
        }

        // Expire a pending single click that was never promoted
        if let Some(previous) = self.pending_click {
            if now - previous > config.double_click {
                self.pending_click = None;
            }
        }
    }
}

/// Debounced button event engine.
///
/// Constructed once from a caller-supplied pin list and evaluated repeatedly
/// for the life of the process. No operation blocks, suspends or returns an
/// error: out-of-range indexes and over-capacity construction degrade to
/// no-ops, since the control loop this runs in must never stall.
pub struct ButtonEngine<In: InputPin> {
    buttons: Vec<Button<In>, MAX_BUTTONS>,
    config: ButtonConfig,
    low_active: bool,
    relay: Option<&'static InterruptRelay>,
}

impl<In: InputPin> ButtonEngine<In> {
    /// Create the engine. Pins beyond [`MAX_BUTTONS`] are discarded. Each
    /// line's raw and stable state is seeded from its current level without
    /// raising an event for the initial condition.
    ///
    /// Pull resistor setup is the HAL's job when the pins are constructed;
    /// `low_active` selects the polarity (`true` for the usual
    /// pull-up-with-switch-to-ground wiring, where a low level means
    /// pressed).
    pub fn new(pins: impl IntoIterator<Item = In>, low_active: bool) -> Self {
        Self::new_at(Instant::now(), pins, low_active)
    }

    pub(crate) fn new_at(now: Instant, pins: impl IntoIterator<Item = In>, low_active: bool) -> Self {
        let mut buttons: Vec<Button<In>, MAX_BUTTONS> = Vec::new();
        let mut discarded = 0;
        for mut pin in pins {
            let level = if low_active {
                pin.is_low().ok().unwrap_or_default()
            } else {
                pin.is_high().ok().unwrap_or_default()
            };
            if buttons.push(Button::new(pin, level, now)).is_err() {
                discarded += 1;
            }
        }
        if discarded > 0 {
            warn!("discarded {} pins beyond the {} line capacity", discarded, MAX_BUTTONS);
        }

        Self {
            buttons,
            config: ButtonConfig::default(),
            low_active,
            relay: None,
        }
    }

    /// Attach a level-change interrupt relay. Without one, every line is
    /// sampled on every evaluation.
    pub fn with_relay(mut self, relay: &'static InterruptRelay) -> Self {
        self.relay = Some(relay);
        self
    }

    /// Mark one line as covered by the relay, so it is only re-read on
    /// evaluations where the relay reported activity. Out-of-range is a
    /// no-op.
    pub fn set_interrupt_capable(&mut self, index: usize) {
        if let Some(button) = self.buttons.get_mut(index) {
            button.interrupt_capable = true;
        }
    }

    /// Replace all timings at once. No validation; effective from the next
    /// evaluation.
    pub fn set_timings(&mut self, config: ButtonConfig) {
        self.config = config;
    }

    pub fn set_debounce_time(&mut self, debounce: embassy_time::Duration) {
        self.config.debounce = debounce;
    }

    pub fn set_long_press_time(&mut self, long_press: embassy_time::Duration) {
        self.config.long_press = long_press;
    }

    pub fn set_double_click_time(&mut self, double_click: embassy_time::Duration) {
        self.config.double_click = double_click;
    }

    /// One evaluation pass over all lines. Writes every line's current
    /// stable level into `states` as a side effect (indexes beyond
    /// `states.len()` are skipped).
    pub fn update(&mut self, states: &mut [bool]) {
        self.update_at(Instant::now(), states);
    }

    pub(crate) fn update_at(&mut self, now: Instant, states: &mut [bool]) {
        // One relay signal forces a fresh read of every line, so no capable
        // line starves. A clear flag means capable lines cannot have
        // changed; their cached raw level is reused but the per-line checks
        // still run.
        let full_pass = match self.relay {
            Some(relay) => relay.take(),
            None => true,
        };
        let config = self.config;
        let low_active = self.low_active;

        for (index, button) in self.buttons.iter_mut().enumerate() {
            let sample = if full_pass || !button.interrupt_capable {
                Some(button.read_level(low_active))
            } else {
                None
            };
            button.evaluate(index, sample, now, &config);

            if let Some(state) = states.get_mut(index) {
                *state = button.debouncer.stable();
            }
        }
    }

    /// Current stable level of one line; consumes no event flag.
    /// Out-of-range returns `false`.
    pub fn is_down(&self, index: usize) -> bool {
        self.buttons.get(index).is_some_and(|b| b.debouncer.stable())
    }

    /// Read-and-clear the one-shot press flag.
    pub fn take_pressed(&mut self, index: usize) -> bool {
        self.take(index, ButtonEvent::Press)
    }

    /// Read-and-clear the one-shot release flag.
    pub fn take_released(&mut self, index: usize) -> bool {
        self.take(index, ButtonEvent::Release)
    }

    /// Read-and-clear the one-shot long-press flag.
    pub fn take_long_pressed(&mut self, index: usize) -> bool {
        self.take(index, ButtonEvent::LongPress)
    }

    /// Read-and-clear the one-shot double-click flag.
    pub fn take_double_clicked(&mut self, index: usize) -> bool {
        self.take(index, ButtonEvent::DoubleClick)
    }

    fn take(&mut self, index: usize, event: ButtonEvent) -> bool {
        self.buttons
            .get_mut(index)
            .is_some_and(|b| b.events.take(event))
    }

    /// Clear every one-shot flag on every line; stable levels are untouched.
    pub fn clear_all_events(&mut self) {
        for button in self.buttons.iter_mut() {
            button.events.clear();
        }
    }

    /// Number of configured lines.
    pub fn count(&self) -> usize {
        self.buttons.len()
    }
}
