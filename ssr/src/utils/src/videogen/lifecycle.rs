use super::{GeneratedVideo, LoadingMessages, VideoGenError};

/// Identifies one generation attempt. Results tagged with an older id are stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttemptId(u64);

impl AttemptId {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Nothing selected yet; the page has not been touched.
    #[default]
    Idle,
    /// Back to the upload form after a reset.
    AwaitingInput,
    Submitting,
    Polling {
        message: &'static str,
    },
    Ready(GeneratedVideo),
    Failed {
        message: String,
    },
}

impl LifecycleState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting | Self::Polling { .. })
    }
}

/// The screen-level state machine of the generator page.
///
/// `Idle -> Submitting -> Polling -> Ready | Failed`, and any state back to
/// `AwaitingInput` through [`Lifecycle::reset`]. Every transition driven by
/// an asynchronous result carries the [`AttemptId`] it was started with and
/// is ignored once that attempt is no longer current.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lifecycle {
    state: LifecycleState,
    attempt: AttemptId,
    messages: LoadingMessages,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    pub fn is_current(&self, attempt: AttemptId) -> bool {
        self.attempt == attempt
    }

    pub fn in_flight(&self) -> bool {
        self.state.is_in_flight()
    }

    /// Starts a new attempt, entering `Submitting`.
    pub fn begin(&mut self) -> Result<AttemptId, VideoGenError> {
        if self.in_flight() {
            return Err(VideoGenError::AlreadyInProgress);
        }
        self.attempt = self.attempt.next();
        self.messages.reset();
        self.state = LifecycleState::Submitting;
        Ok(self.attempt)
    }

    /// The provider accepted the job; start showing loading messages.
    pub fn operation_started(&mut self, attempt: AttemptId) -> bool {
        if !self.is_current(attempt) || self.state != LifecycleState::Submitting {
            return false;
        }
        self.messages.reset();
        self.state = LifecycleState::Polling {
            message: self.messages.current(),
        };
        true
    }

    /// Rotates the loading message. No-op outside `Polling`.
    pub fn tick_message(&mut self) -> Option<&'static str> {
        match &mut self.state {
            LifecycleState::Polling { message } => {
                *message = self.messages.advance();
                Some(*message)
            }
            _ => None,
        }
    }

    pub fn complete(&mut self, attempt: AttemptId, video: GeneratedVideo) -> bool {
        if !self.is_current(attempt) || !self.in_flight() {
            return false;
        }
        self.state = LifecycleState::Ready(video);
        true
    }

    pub fn fail(&mut self, attempt: AttemptId, err: &VideoGenError) -> bool {
        if !self.is_current(attempt) || !self.in_flight() {
            return false;
        }
        self.state = LifecycleState::Failed {
            message: err.user_message(),
        };
        true
    }

    /// Returns to the upload form and orphans whatever attempt was running.
    pub fn reset(&mut self) {
        self.attempt = self.attempt.next();
        self.messages.reset();
        self.state = LifecycleState::AwaitingInput;
    }
}
