//! Frame and timer scheduling.
//!
//! [`FrameScheduler`] stands in for a display loop: animators ask for a
//! callback on the next frame or after a delay, and the owner drives time
//! forward with [`FrameScheduler::advance_to`] and [`FrameScheduler::take_frames`].
//! Every request carries an id so it can be cancelled when its animator goes
//! away.

/// Handle to a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

/// Handle to a pending one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Timer<T> {
    id: TimerId,
    deadline_ms: f64,
    target: T,
}

/// Queue of one-shot frame requests and timers addressed to targets of type `T`.
#[derive(Debug)]
pub struct FrameScheduler<T> {
    next_id: u64,
    now_ms: f64,
    frames: Vec<(FrameId, T)>,
    timers: Vec<Timer<T>>,
}

impl<T> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameScheduler<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            now_ms: 0.0,
            frames: Vec::new(),
            timers: Vec::new(),
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Latest time the scheduler has been advanced to.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Ask for `target` to run on the next frame. Requests are one-shot.
    pub fn request_frame(&mut self, target: T) -> FrameId {
        let id = FrameId(self.next_id());
        self.frames.push((id, target));
        id
    }

    /// Cancel a frame request. Returns false if it already ran or was cancelled.
    pub fn cancel_frame(&mut self, id: FrameId) -> bool {
        let before = self.frames.len();
        self.frames.retain(|(frame, _)| *frame != id);
        self.frames.len() != before
    }

    /// Arm a one-shot timer firing `delay_ms` after the current time.
    pub fn set_timeout(&mut self, target: T, delay_ms: f64) -> TimerId {
        let id = TimerId(self.next_id());
        self.timers.push(Timer {
            id,
            deadline_ms: self.now_ms + delay_ms.max(0.0),
            target,
        });
        id
    }

    /// Disarm a timer. Returns false if it already fired or was cleared.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);
        self.timers.len() != before
    }

    /// Move time forward and return the targets of every timer now due,
    /// earliest deadline first.
    pub fn advance_to(&mut self, now_ms: f64) -> Vec<T> {
        self.now_ms = self.now_ms.max(now_ms);
        let now_ms = self.now_ms;

        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.timers)
            .into_iter()
            .partition(|timer| timer.deadline_ms <= now_ms);
        self.timers = pending;

        due.sort_by(|a, b| a.deadline_ms.total_cmp(&b.deadline_ms).then(a.id.0.cmp(&b.id.0)));
        due.into_iter().map(|timer| timer.target).collect()
    }

    /// Drain the frame requests queued so far. Requests made while the
    /// returned batch is being handled land in the next batch.
    pub fn take_frames(&mut self) -> Vec<T> {
        std::mem::take(&mut self.frames)
            .into_iter()
            .map(|(_, target)| target)
            .collect()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// True when nothing is scheduled.
    pub fn is_idle(&self) -> bool {
        self.frames.is_empty() && self.timers.is_empty()
    }
}
