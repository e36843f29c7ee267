//! PNG snapshot export.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use crate::foundation::error::{GalleyError, GalleyResult};
use crate::render::backend::FrameRGBA;

/// Encode a frame as PNG at `path`, creating parent directories as needed.
///
/// The encoder expects straight alpha; premultiplied frames are converted
/// first. Exporting an empty frame is an error (there is nothing to save).
pub fn write_png(frame: &FrameRGBA, path: &Path) -> GalleyResult<()> {
    if frame.is_empty() {
        return Err(GalleyError::render("cannot export an empty frame"));
    }

    let straight;
    let data: &[u8] = if frame.premultiplied {
        straight = unpremultiply(&frame.data);
        &straight
    } else {
        &frame.data
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Timestamped default snapshot name, `kitchen-design-<unix-millis>.png`.
pub fn snapshot_filename() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("kitchen-design-{millis}.png")
}

/// Convert premultiplied RGBA8 bytes back to straight alpha.
fn unpremultiply(premul: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(premul.len());
    for px in premul.chunks_exact(4) {
        let a = px[3];
        if a == 0 {
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        let un = |c: u8| -> u8 {
            ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
        };
        out.extend_from_slice(&[un(px[0]), un(px[1]), un(px[2]), a]);
    }
    out
}
