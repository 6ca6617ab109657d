use std::ops::Deref;

use consts::LOADING_MESSAGES;
use leptos::prelude::*;
use utils::videogen::{GeneratedVideo, Lifecycle, LifecycleState, UploadManager, UploadedImage};

#[cfg(feature = "hydrate")]
pub type Previews = utils::web::ObjectUrlAllocator;
#[cfg(not(feature = "hydrate"))]
pub type Previews = utils::videogen::DataUrlAllocator;

/// Which of the four screens is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Upload,
    Loading,
    Result,
    Error,
}

impl From<&LifecycleState> for Screen {
    fn from(state: &LifecycleState) -> Self {
        match state {
            LifecycleState::Idle | LifecycleState::AwaitingInput => Self::Upload,
            LifecycleState::Submitting | LifecycleState::Polling { .. } => Self::Loading,
            LifecycleState::Ready(_) => Self::Result,
            LifecycleState::Failed { .. } => Self::Error,
        }
    }
}

/// Page-wide state of the house video generator.
#[derive(Clone, Copy)]
pub struct HouseVideoState {
    pub upload: RwSignal<UploadManager<Previews>, LocalStorage>,
    pub lifecycle: RwSignal<Lifecycle>,
}

impl Default for HouseVideoState {
    fn default() -> Self {
        Self::new()
    }
}

impl HouseVideoState {
    pub fn new() -> Self {
        Self {
            upload: RwSignal::new_local(UploadManager::default()),
            lifecycle: RwSignal::new(Lifecycle::new()),
        }
    }

    pub fn register() -> Self {
        let this = Self::new();
        provide_context(this);
        this
    }

    pub fn get() -> Self {
        let this: Self = expect_context();
        this
    }

    pub fn selected_image(&self) -> Option<UploadedImage> {
        self.upload.with_untracked(|u| u.image().cloned())
    }

    pub fn preview_src(&self) -> Option<String> {
        self.upload
            .with(|u| u.preview().map(|p| p.deref().to_string()))
    }

    pub fn upload_error(&self) -> Option<String> {
        self.upload.with(|u| u.error().map(str::to_string))
    }

    pub fn screen(&self) -> Screen {
        self.lifecycle.with(|lc| Screen::from(lc.state()))
    }

    pub fn loading_message(&self) -> &'static str {
        self.lifecycle.with(|lc| match lc.state() {
            LifecycleState::Polling { message } => *message,
            _ => LOADING_MESSAGES[0],
        })
    }

    pub fn failure_message(&self) -> Option<String> {
        self.lifecycle.with(|lc| match lc.state() {
            LifecycleState::Failed { message } => Some(message.clone()),
            _ => None,
        })
    }

    pub fn is_polling(&self) -> bool {
        self.lifecycle
            .with(|lc| matches!(lc.state(), LifecycleState::Polling { .. }))
    }

    /// True while an attempt is submitting or polling.
    pub fn is_busy(&self) -> bool {
        self.lifecycle.with(Lifecycle::in_flight)
    }

    pub fn with_video<R>(&self, f: impl FnOnce(&GeneratedVideo) -> R) -> Option<R> {
        self.lifecycle.with(|lc| match lc.state() {
            LifecycleState::Ready(video) => Some(f(video)),
            _ => None,
        })
    }

    /// Back to an empty upload form; any running attempt is orphaned.
    pub fn reset(&self) {
        self.upload.update(UploadManager::reset);
        self.lifecycle.update(Lifecycle::reset);
        log::info!("house video page reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utils::videogen::VideoGenError;

    #[test]
    fn screens_follow_the_lifecycle() {
        let mut lc = Lifecycle::new();
        assert_eq!(Screen::from(lc.state()), Screen::Upload);

        let id = lc.begin().unwrap();
        assert_eq!(Screen::from(lc.state()), Screen::Loading);
        lc.operation_started(id);
        assert_eq!(Screen::from(lc.state()), Screen::Loading);

        lc.fail(id, &VideoGenError::UnknownResult);
        assert_eq!(Screen::from(lc.state()), Screen::Error);

        let id = lc.begin().unwrap();
        lc.complete(id, GeneratedVideo::new(vec![1]));
        assert_eq!(Screen::from(lc.state()), Screen::Result);

        lc.reset();
        assert_eq!(Screen::from(lc.state()), Screen::Upload);
    }

    #[test]
    fn reset_mid_flight_frees_the_upload_form() {
        let state = HouseVideoState::new();
        let id = state.lifecycle.try_update(|lc| lc.begin().unwrap()).unwrap();
        state.lifecycle.update(|lc| {
            lc.operation_started(id);
        });
        assert!(state.is_busy());
        assert!(state.is_polling());

        state.reset();
        assert!(!state.is_busy());
        assert_eq!(state.screen(), Screen::Upload);

        // the orphaned attempt settling later changes nothing
        state
            .lifecycle
            .update(|lc| {
                lc.complete(id, GeneratedVideo::new(vec![1]));
            });
        assert!(!state.is_busy());
        assert_eq!(state.screen(), Screen::Upload);
    }
}
