//! File inspection: mime type from the extension, duration from the MP4
//! `mvhd` box.

use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use bytes::Buf;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::error::MediaError;

/// Longest accepted video, in seconds.
pub const MAX_VIDEO_SECS: f64 = 300.0;

/// Upper bound on the `moov` box we are willing to buffer.
const MAX_MOOV_BYTES: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct VideoInfo {
    pub path: PathBuf,
    pub mime: &'static str,
    pub duration_secs: f64,
}

pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "3gp" => "video/3gpp",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime)
}

fn is_iso_bmff(mime: &str) -> bool {
    matches!(mime, "video/mp4" | "video/quicktime" | "video/3gpp")
}

pub fn probe_image(path: &Path) -> Result<&'static str, MediaError> {
    match mime_for_path(path) {
        Some(mime) if mime.starts_with("image/") => Ok(mime),
        other => Err(MediaError::NotAnImage {
            mime: other.unwrap_or("application/octet-stream").to_string(),
        }),
    }
}

/// Check the mime type and read the duration. Length limits are the
/// caller's concern.
pub async fn probe_video(path: &Path) -> Result<VideoInfo, MediaError> {
    let mime = match mime_for_path(path) {
        Some(mime) if mime.starts_with("video/") => mime,
        other => {
            return Err(MediaError::NotAVideo {
                mime: other.unwrap_or("application/octet-stream").to_string(),
            })
        }
    };

    let unreadable = || MediaError::UnreadableMetadata {
        path: path.to_path_buf(),
    };
    if !is_iso_bmff(mime) {
        return Err(unreadable());
    }

    let mut file = File::open(path).await.map_err(|source| MediaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let moov = find_moov(&mut file).await.ok_or_else(unreadable)?;
    let duration_secs = mvhd_duration(&moov).ok_or_else(unreadable)?;

    Ok(VideoInfo {
        path: path.to_path_buf(),
        mime,
        duration_secs,
    })
}

/// Walk top-level boxes until `moov` and return its payload.
async fn find_moov(file: &mut File) -> Option<Vec<u8>> {
    let file_len = file.metadata().await.ok()?.len();
    let mut offset = 0u64;

    while offset + 8 <= file_len {
        file.seek(SeekFrom::Start(offset)).await.ok()?;
        let mut header = [0u8; 8];
        file.read_exact(&mut header).await.ok()?;
        let mut buf = &header[..];
        let size32 = buf.get_u32();
        let kind = [buf[0], buf[1], buf[2], buf[3]];

        let (box_len, header_len) = match size32 {
            0 => (file_len - offset, 8),
            1 => {
                let mut large = [0u8; 8];
                file.read_exact(&mut large).await.ok()?;
                (u64::from_be_bytes(large), 16)
            }
            n => (u64::from(n), 8),
        };
        if box_len < header_len || box_len > file_len - offset {
            return None;
        }

        if &kind == b"moov" {
            let payload_len = box_len - header_len;
            if payload_len > MAX_MOOV_BYTES {
                return None;
            }
            let mut payload = vec![0u8; payload_len as usize];
            file.read_exact(&mut payload).await.ok()?;
            return Some(payload);
        }
        offset += box_len;
    }
    None
}

/// Duration in seconds from the `mvhd` child of a `moov` payload.
pub fn mvhd_duration(moov: &[u8]) -> Option<f64> {
    let mut buf = moov;
    while buf.remaining() >= 8 {
        let size = buf.get_u32() as usize;
        let mut kind = [0u8; 4];
        buf.copy_to_slice(&mut kind);
        if size < 8 || size - 8 > buf.remaining() {
            return None;
        }
        let (mut body, rest) = buf.split_at(size - 8);
        buf = rest;
        if &kind != b"mvhd" {
            continue;
        }

        if body.remaining() < 4 {
            return None;
        }
        let version = body.get_u8();
        body.advance(3);
        let (timescale, duration) = match version {
            0 if body.remaining() >= 16 => {
                body.advance(8);
                (body.get_u32(), u64::from(body.get_u32()))
            }
            1 if body.remaining() >= 28 => {
                body.advance(16);
                (body.get_u32(), body.get_u64())
            }
            _ => return None,
        };
        if timescale == 0 {
            return None;
        }
        return Some(duration as f64 / f64::from(timescale));
    }
    None
}
