// src/controllers/controls.rs
//
// Enable/disable bookkeeping for the Start, Pause and Mute buttons.
// Start is only available while stopped; Pause and Mute only while playing.
// A blackout covers the canvas whenever play is stopped.

use log::debug;

use crate::animation::AnimationController;
use crate::errors::CanvasResult;
use crate::views::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Pause,
    Mute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    start_enabled: bool,
    others_enabled: bool,
    blackout: bool,
    muted: bool,
}

impl Default for PageControls {
    fn default() -> Self {
        Self::new()
    }
}

impl PageControls {
    pub fn new() -> Self {
        Self {
            start_enabled: true,
            others_enabled: false,
            blackout: true,
            muted: true,
        }
    }

    /// Returns true when the button was enabled and the press took effect.
    pub fn press(&mut self, action: ControlAction) -> bool {
        let accepted = match action {
            ControlAction::Start if self.start_enabled => {
                self.start_enabled = false;
                self.others_enabled = true;
                self.blackout = false;
                self.muted = false;
                true
            }
            ControlAction::Pause if self.others_enabled => {
                self.others_enabled = false;
                self.blackout = true;
                self.start_enabled = true;
                true
            }
            ControlAction::Mute if self.others_enabled => {
                self.muted = true;
                true
            }
            _ => false,
        };
        if !accepted {
            debug!("Ignoring {:?}: button disabled", action);
        }
        accepted
    }

    /// Press a button and carry out its effect on the controller.
    /// The buttons only change once the controller call succeeds, so a failed
    /// start or pause leaves the page as it was. Returns Ok(false) when the
    /// button was disabled.
    pub fn trigger<S: Surface>(
        &mut self,
        action: ControlAction,
        controller: &mut AnimationController,
        surface: &mut S,
        now: f32,
    ) -> CanvasResult<bool> {
        if !self.is_enabled(action) {
            debug!("Ignoring {:?}: button disabled", action);
            return Ok(false);
        }
        match action {
            ControlAction::Start => {
                controller.start(surface, now)?;
            }
            ControlAction::Pause => {
                controller.pause(surface, now)?;
            }
            ControlAction::Mute => (),
        }
        Ok(self.press(action))
    }

    pub fn is_enabled(&self, action: ControlAction) -> bool {
        match action {
            ControlAction::Start => self.start_enabled,
            ControlAction::Pause | ControlAction::Mute => self.others_enabled,
        }
    }

    /// Playing from a Start press until the next Pause.
    pub fn is_playing(&self) -> bool {
        self.others_enabled
    }

    pub fn blackout(&self) -> bool {
        self.blackout
    }

    pub fn muted(&self) -> bool {
        self.muted
    }
}
