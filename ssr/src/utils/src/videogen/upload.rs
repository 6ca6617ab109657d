use base64::{engine::general_purpose::STANDARD, Engine};
use consts::{ACCEPTED_IMAGE_MIME_PREFIX, MAX_IMAGE_BYTES};

use super::{SelectedFile, UploadedImage, VideoGenError};

/// Hands out locally-addressable preview references for selected images.
///
/// Every preview returned by [`PreviewAllocator::allocate`] is given back
/// through [`PreviewAllocator::release`] exactly once.
pub trait PreviewAllocator {
    type Preview;

    fn allocate(&mut self, image: &UploadedImage) -> Result<Self::Preview, VideoGenError>;

    fn release(&mut self, preview: Self::Preview);
}

/// `data:` URL previews. Nothing to release.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataUrlAllocator;

impl PreviewAllocator for DataUrlAllocator {
    type Preview = String;

    fn allocate(&mut self, image: &UploadedImage) -> Result<String, VideoGenError> {
        Ok(format!(
            "data:{};base64,{}",
            image.mime_type,
            STANDARD.encode(&image.bytes)
        ))
    }

    fn release(&mut self, _preview: String) {}
}

#[derive(Debug)]
struct Selection<P> {
    image: UploadedImage,
    preview: P,
}

/// Owns the selected image, its preview and the inline upload error.
#[derive(Debug)]
pub struct UploadManager<A: PreviewAllocator> {
    allocator: A,
    selection: Option<Selection<A::Preview>>,
    error: Option<String>,
}

impl<A: PreviewAllocator + Default> Default for UploadManager<A> {
    fn default() -> Self {
        Self::new(A::default())
    }
}

impl<A: PreviewAllocator> UploadManager<A> {
    pub fn new(allocator: A) -> Self {
        Self {
            allocator,
            selection: None,
            error: None,
        }
    }

    /// Validates and stores `file`, replacing (and releasing) any previous selection.
    ///
    /// A rejected file leaves the previous selection in place and sets the
    /// inline error.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), VideoGenError> {
        if !file.mime_type.starts_with(ACCEPTED_IMAGE_MIME_PREFIX) {
            let err = VideoGenError::InvalidFileType {
                mime_type: file.mime_type,
            };
            log::debug!("rejected upload: {err}");
            self.report(&err);
            return Err(err);
        }
        if file.bytes.len() > MAX_IMAGE_BYTES {
            let err = VideoGenError::ImageTooLarge {
                bytes: file.bytes.len(),
            };
            log::debug!("rejected upload: {err}");
            self.report(&err);
            return Err(err);
        }

        let image = UploadedImage {
            name: file.name,
            mime_type: file.mime_type,
            bytes: file.bytes,
        };
        let preview = match self.allocator.allocate(&image) {
            Ok(preview) => preview,
            Err(err) => {
                self.report(&err);
                return Err(err);
            }
        };

        self.release_selection();
        log::info!(
            "selected {} ({}, {} bytes)",
            image.name,
            image.mime_type,
            image.bytes.len()
        );
        self.selection = Some(Selection { image, preview });
        self.error = None;
        Ok(())
    }

    /// Drops the selection and the error. Safe to call repeatedly.
    pub fn reset(&mut self) {
        self.release_selection();
        self.error = None;
    }

    /// Shows a locally-recovered error next to the upload.
    pub fn report(&mut self, err: &VideoGenError) {
        self.error = Some(err.user_message());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.selection.as_ref().map(|s| &s.image)
    }

    pub fn preview(&self) -> Option<&A::Preview> {
        self.selection.as_ref().map(|s| &s.preview)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.selection.is_none() && self.error.is_none()
    }

    #[cfg(test)]
    fn allocator(&self) -> &A {
        &self.allocator
    }

    fn release_selection(&mut self) {
        if let Some(Selection { preview, .. }) = self.selection.take() {
            self.allocator.release(preview);
        }
    }
}

impl<A: PreviewAllocator> Drop for UploadManager<A> {
    fn drop(&mut self) {
        self.release_selection();
    }
}
