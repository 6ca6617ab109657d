use std::{cell::RefCell, rc::Rc};

use consts::{LOADING_MESSAGE_INTERVAL, POLL_INTERVAL};
use leptos::prelude::*;
use web_time::Duration;

use super::{
    AttemptId, GeneratedVideo, GenerationRequest, Lifecycle, UploadedImage, VideoGenError,
    VideoGenProvider,
};
use crate::time::sleep;

/// Somewhere a [`Lifecycle`] lives.
///
/// Both methods return `None` once the owner is gone, which the controller
/// treats the same as a reset: whatever was in flight is discarded.
pub trait LifecycleStore {
    fn with_lifecycle<R>(&self, f: impl FnOnce(&Lifecycle) -> R) -> Option<R>;

    fn update_lifecycle<R>(&self, f: impl FnOnce(&mut Lifecycle) -> R) -> Option<R>;
}

impl LifecycleStore for Rc<RefCell<Lifecycle>> {
    fn with_lifecycle<R>(&self, f: impl FnOnce(&Lifecycle) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update_lifecycle<R>(&self, f: impl FnOnce(&mut Lifecycle) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl LifecycleStore for RwSignal<Lifecycle> {
    fn with_lifecycle<R>(&self, f: impl FnOnce(&Lifecycle) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_lifecycle<R>(&self, f: impl FnOnce(&mut Lifecycle) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationTiming {
    pub poll_interval: Duration,
    pub message_interval: Duration,
}

impl Default for GenerationTiming {
    fn default() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
            message_interval: LOADING_MESSAGE_INTERVAL,
        }
    }
}

/// How a call to [`GenerationController::generate`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ready,
    Failed(VideoGenError),
    /// The attempt was reset (or its page torn down) before it finished.
    Discarded,
}

enum Halt {
    Stale,
    Error(VideoGenError),
}

impl From<VideoGenError> for Halt {
    fn from(e: VideoGenError) -> Self {
        Self::Error(e)
    }
}

/// Drives one generation from submit to downloaded video.
#[derive(Clone)]
pub struct GenerationController<P, S> {
    provider: P,
    store: S,
    timing: GenerationTiming,
}

impl<P: VideoGenProvider, S: LifecycleStore> GenerationController<P, S> {
    pub fn new(provider: P, store: S) -> Self {
        Self::with_timing(provider, store, GenerationTiming::default())
    }

    pub fn with_timing(provider: P, store: S, timing: GenerationTiming) -> Self {
        Self {
            provider,
            store,
            timing,
        }
    }

    pub fn timing(&self) -> GenerationTiming {
        self.timing
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs a full generation for `image`.
    ///
    /// Returns `Err` only for rejections that happen before anything is sent
    /// (no image, attempt already running); those leave the lifecycle as it
    /// was. Everything after submission ends in the lifecycle and is
    /// reported through [`Outcome`].
    pub async fn generate(&self, image: Option<&UploadedImage>) -> Result<Outcome, VideoGenError> {
        let image = image.ok_or(VideoGenError::NoImageSelected)?;
        let attempt = match self.store.update_lifecycle(Lifecycle::begin) {
            Some(res) => res?,
            None => return Ok(Outcome::Discarded),
        };
        log::info!("starting house video generation for {}", image.name);

        let request = GenerationRequest::house_party(image);
        match self.run(attempt, &request).await {
            Ok(video) => {
                let size = video.bytes.len();
                if self
                    .store
                    .update_lifecycle(|lc| lc.complete(attempt, video))
                    .unwrap_or_default()
                {
                    log::info!("house video ready ({size} bytes)");
                    Ok(Outcome::Ready)
                } else {
                    Ok(Outcome::Discarded)
                }
            }
            Err(Halt::Error(e)) => {
                log::warn!("house video generation failed: {e}");
                if self
                    .store
                    .update_lifecycle(|lc| lc.fail(attempt, &e))
                    .unwrap_or_default()
                {
                    Ok(Outcome::Failed(e))
                } else {
                    Ok(Outcome::Discarded)
                }
            }
            Err(Halt::Stale) => {
                log::debug!("discarding results of a superseded attempt");
                Ok(Outcome::Discarded)
            }
        }
    }

    async fn run(
        &self,
        attempt: AttemptId,
        request: &GenerationRequest,
    ) -> Result<GeneratedVideo, Halt> {
        let mut op = self.provider.start_generation(request).await?;
        self.ensure_current(attempt)?;
        if !self
            .store
            .update_lifecycle(|lc| lc.operation_started(attempt))
            .unwrap_or_default()
        {
            return Err(Halt::Stale);
        }
        log::debug!("operation {} accepted", op.name);

        while !op.done {
            sleep(self.timing.poll_interval).await;
            self.ensure_current(attempt)?;
            op = self.provider.poll_operation(&op).await?;
            self.ensure_current(attempt)?;
            log::debug!("operation {} done={}", op.name, op.done);
        }

        let uri = op.result_uri()?;
        let bytes = self.provider.download_video(uri).await?;
        self.ensure_current(attempt)?;
        Ok(GeneratedVideo::new(bytes))
    }

    fn ensure_current(&self, attempt: AttemptId) -> Result<(), Halt> {
        match self.store.with_lifecycle(|lc| lc.is_current(attempt)) {
            Some(true) => Ok(()),
            _ => Err(Halt::Stale),
        }
    }

    /// Returns to the upload form. Any attempt still running is orphaned.
    pub fn reset(&self) {
        self.store.update_lifecycle(Lifecycle::reset);
    }

    pub fn tick_message(&self) -> Option<&'static str> {
        self.store.update_lifecycle(Lifecycle::tick_message).flatten()
    }
}
