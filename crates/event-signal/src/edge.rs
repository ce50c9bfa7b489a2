//! Falling-Edge Detection

use crate::SignalSender;

/// Falling-edge detector for a pulled-up input line.
///
/// The line idles high; a press pulls it low. Each high→low transition
/// raises the signal and does nothing else.
pub struct FallingEdgeDetector {
    sender: SignalSender,
    /// Last observed line level (true = high)
    level: bool,
}

impl FallingEdgeDetector {
    /// Attach a detector to the signal with the line idling high
    pub fn attach(sender: SignalSender) -> Self {
        Self {
            sender,
            level: true,
        }
    }

    /// Feed the current line level; returns true if a falling edge fired
    #[inline]
    pub fn on_level(&mut self, level: bool) -> bool {
        let falling = self.level && !level;
        self.level = level;
        if falling {
            self.sender.raise();
        }
        falling
    }
}
