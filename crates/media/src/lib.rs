//! Media resolution for LessonLens.
//!
//! Given a module's media reference, produces a [`MediaDescriptor`] for the
//! API response and, where possible, an [`ImagePayload`] for the prompt:
//! images are read as-is, videos yield their temporal midpoint frame. Frame
//! extraction shells out to `ffprobe`/`ffmpeg`.
//!
//! Every failure here degrades to "no media" — a missing file, an
//! unreadable image, or a failed extraction never fails the request. The
//! textual answer still proceeds.

use std::path::Path;

use lessonlens_core::{ImagePayload, MediaDescriptor, MediaError, MediaKind, Module, ResolvedMedia};
use tokio::process::Command;
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm"];

/// Resolve a module's media reference.
///
/// Only the first `related_media` entry is considered — one media item per
/// answer. Returns `None` when the module has no media or the referenced
/// file does not exist.
pub async fn resolve(lesson_dir: &Path, module: &Module) -> Option<ResolvedMedia> {
    let filename = module.primary_media()?;
    let path = lesson_dir.join(filename);

    if !path.exists() {
        let err = MediaError::NotFound(filename.to_string());
        debug!(error = %err, "Referenced media file missing, answering without media");
        return None;
    }

    let kind = classify_extension(&path);
    let descriptor = MediaDescriptor::new(filename, kind);

    let payload = match payload_for(&path, kind).await {
        Ok(payload) => Some(payload),
        // Unrecognized extension: descriptor only, for display purposes.
        Err(err @ MediaError::UnsupportedExtension(_)) => {
            debug!(error = %err, "Media kept for display only, no prompt payload");
            None
        }
        Err(err) => {
            warn!(file = filename, error = %err, "Media decode failed, answering without media payload");
            None
        }
    };

    Some(ResolvedMedia {
        descriptor,
        payload,
    })
}

/// Produce the prompt payload for a media file of the given kind.
///
/// Not-found, unsupported-extension, and decode failures are distinct
/// variants; [`resolve`] degrades all of them to "no media".
async fn payload_for(path: &Path, kind: Option<MediaKind>) -> Result<ImagePayload, MediaError> {
    match kind {
        Some(MediaKind::Image) => load_image(path).await,
        Some(MediaKind::Video) => extract_midpoint_frame(path).await,
        None => Err(MediaError::UnsupportedExtension(
            path.display().to_string(),
        )),
    }
}

/// Classify a media file by its extension, case-insensitively.
pub fn classify_extension(path: &Path) -> Option<MediaKind> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// The representative frame of a video: the temporal midpoint, by integer
/// division. A 101-frame video yields frame index 50.
pub fn midpoint_frame_index(total_frames: u64) -> u64 {
    total_frames / 2
}

/// Read a static image file into a prompt payload.
async fn load_image(path: &Path) -> Result<ImagePayload, MediaError> {
    let data = tokio::fs::read(path).await.map_err(|e| MediaError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(ImagePayload::new(mime_for_path(path), data))
}

fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Extract the midpoint frame of a video as a PNG payload.
///
/// Probes the frame count with `ffprobe`, then decodes exactly one frame
/// with `ffmpeg` to stdout. Missing binaries surface as probe/extraction
/// failures, which the caller degrades to "no media".
pub async fn extract_midpoint_frame(path: &Path) -> Result<ImagePayload, MediaError> {
    let total_frames = probe_frame_count(path).await?;
    let index = midpoint_frame_index(total_frames);

    debug!(
        file = %path.display(),
        total_frames,
        frame_index = index,
        "Extracting representative video frame"
    );

    let output = Command::new("ffmpeg")
        .args(["-v", "error", "-i"])
        .arg(path)
        .args([
            "-vf",
            &format!("select=eq(n\\,{index})"),
            "-vframes",
            "1",
            "-f",
            "image2pipe",
            "-c:v",
            "png",
            "pipe:1",
        ])
        .output()
        .await
        .map_err(|e| MediaError::ExtractionFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    if !output.status.success() || output.stdout.is_empty() {
        return Err(MediaError::ExtractionFailed {
            path: path.display().to_string(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(ImagePayload::new("image/png", output.stdout))
}

/// Count video frames via packet count on the first video stream.
async fn probe_frame_count(path: &Path) -> Result<u64, MediaError> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-count_packets",
            "-show_entries",
            "stream=nb_read_packets",
            "-of",
            "csv=p=0",
        ])
        .arg(path)
        .output()
        .await
        .map_err(|e| MediaError::ProbeFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(MediaError::ProbeFailed {
            path: path.display().to_string(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse::<u64>()
        .map_err(|e| MediaError::ProbeFailed {
            path: path.display().to_string(),
            reason: format!("unparseable frame count: {e}"),
        })
}
