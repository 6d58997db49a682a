//! Per-cycle input handler for terminal environments.
//!
//! Each poll cycle drains all pending terminal events and produces a fresh
//! [`InputState`]. Most terminals send no key-release events, only a press
//! followed by auto-repeats, so a key can optionally stay held for
//! `hold_ms` after its last press/repeat to bridge the gaps between repeats.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::debug;

use crate::map::{map_key_event, should_quit};
use crate::types::{InputState, ViewAction};

/// Tracks key state across poll cycles.
#[derive(Debug, Clone)]
pub struct InputHandler {
    hold_ms: u32,
    /// Remaining hold time per action.
    remaining_ms: [u32; ViewAction::COUNT],
    /// Actions seen during the current cycle.
    current: InputState,
}

impl InputHandler {
    /// Keys count only in the cycle they were read in.
    pub fn new() -> Self {
        Self::with_hold_ms(0)
    }

    pub fn with_hold_ms(hold_ms: u32) -> Self {
        Self {
            hold_ms,
            remaining_ms: [0; ViewAction::COUNT],
            current: InputState::new(),
        }
    }

    pub fn hold_ms(&self) -> u32 {
        self.hold_ms
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if should_quit(key) {
                    self.current.quit = true;
                    return;
                }
                if let Some(action) = map_key_event(key) {
                    self.current.press(action);
                    self.remaining_ms[action as usize] = self.hold_ms;
                }
            }
            KeyEventKind::Release => {
                if let Some(action) = map_key_event(key) {
                    self.remaining_ms[action as usize] = 0;
                }
            }
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Resize(w, h) => debug!("terminal resized to {w}x{h}"),
            _ => {}
        }
    }

    /// Close the current cycle and return what was pressed during it.
    ///
    /// `elapsed_ms` is the length of the cycle and counts down held keys.
    pub fn finish_cycle(&mut self, elapsed_ms: u32) -> InputState {
        let mut state = self.current;
        for action in ViewAction::ALL {
            let remaining = &mut self.remaining_ms[action as usize];
            if *remaining > 0 {
                state.press(action);
                *remaining = remaining.saturating_sub(elapsed_ms);
            }
        }
        self.current.clear();
        state
    }

    /// Drain pending terminal events without blocking and close the cycle.
    pub fn poll(&mut self, elapsed_ms: u32) -> io::Result<InputState> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle_event(&ev);
        }
        Ok(self.finish_cycle(elapsed_ms))
    }

    pub fn reset(&mut self) {
        self.remaining_ms = [0; ViewAction::COUNT];
        self.current.clear();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
