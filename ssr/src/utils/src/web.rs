use gloo::file::{futures::read_as_bytes, Blob, File};
pub use gloo::file::ObjectUrl;

use crate::videogen::{
    GeneratedVideo, PreviewAllocator, SelectedFile, UploadedImage, VideoGenError,
};

fn object_url(bytes: &[u8], mime_type: &str) -> ObjectUrl {
    ObjectUrl::from(Blob::new_with_options(bytes, Some(mime_type)))
}

/// `blob:` URL for a finished video. Revoked when dropped.
pub fn video_object_url(video: &GeneratedVideo) -> ObjectUrl {
    object_url(&video.bytes, &video.mime_type)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrlAllocator;

impl PreviewAllocator for ObjectUrlAllocator {
    type Preview = ObjectUrl;

    fn allocate(&mut self, image: &UploadedImage) -> Result<ObjectUrl, VideoGenError> {
        Ok(object_url(&image.bytes, &image.mime_type))
    }

    fn release(&mut self, preview: ObjectUrl) {
        drop(preview);
    }
}

/// Reads a picked file into memory.
pub async fn read_selected_file(file: web_sys::File) -> Result<SelectedFile, VideoGenError> {
    let file = File::from(file);
    let bytes = read_as_bytes(&file)
        .await
        .map_err(|e| VideoGenError::PreviewUnavailable(e.to_string()))?;
    Ok(SelectedFile {
        name: file.name(),
        mime_type: file.raw_mime_type(),
        bytes,
    })
}
