/// Bookkeeping for a cancellable `requestAnimationFrame` loop.
///
/// Kept free of browser types so the cancellation rules can be tested on the
/// host: once cancelled, no frame body runs and nothing is rescheduled.
#[derive(Debug, Default)]
pub struct FrameSchedule {
    pending: Option<i32>,
    cancelled: bool,
    frames: u64,
}

impl FrameSchedule {
    /// Whether a new frame request should be made.
    #[inline]
    pub fn wants_frame(&self) -> bool {
        !self.cancelled && self.pending.is_none()
    }

    /// Record the handle returned by `requestAnimationFrame`.
    pub fn scheduled(&mut self, handle: i32) {
        if !self.cancelled {
            self.pending = Some(handle);
        }
    }

    /// Called at the top of each callback; `false` means skip the frame.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if self.cancelled {
            return false;
        }
        self.frames += 1;
        true
    }

    /// Stop the loop, returning the outstanding handle to cancel, if any.
    pub fn cancel(&mut self) -> Option<i32> {
        self.cancelled = true;
        self.pending.take()
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
