use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, TryRecvError};

use anyhow::{Context, Result};
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// The quad's texture, usable from the very first frame.
///
/// Starts as a 1x1 placeholder so rendering never waits on disk or decode.
/// When created via [`load`](Self::load), a named thread decodes the image
/// and hands it back over an mpsc channel; [`poll`](Self::poll) drains the
/// channel at the top of a tick and swaps in the full texture with a
/// CPU-built mip chain. Each swap bumps `generation` so the renderer knows
/// to rebuild its bind group.
///
/// The decode thread owns nothing but the path and the sender; all GPU work
/// happens on the event-loop thread inside `poll`.
pub struct TextureSlot {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    generation: u64,
    resident: bool,
    pending: Option<mpsc::Receiver<Result<RgbaImage>>>,
}

impl TextureSlot {
    /// Slot holding only the 1x1 placeholder color.
    pub fn placeholder(device: &wgpu::Device, queue: &wgpu::Queue, rgba: [u8; 4]) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("quadrille placeholder texture"),
            size: wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: Some(1),
            },
            wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            generation: 0,
            resident: false,
            pending: None,
        }
    }

    /// Placeholder slot plus a background decode of `path`.
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
        placeholder: [u8; 4],
    ) -> Self {
        let mut slot = Self::placeholder(device, queue, placeholder);

        let (tx, rx) = mpsc::channel();
        let path_buf: PathBuf = path.to_path_buf();

        let spawned = std::thread::Builder::new()
            .name("quad-texture-decode".to_string())
            .spawn(move || {
                // The receiver may be gone if the app exits mid-decode.
                let _ = tx.send(decode(&path_buf));
            });

        match spawned {
            Ok(_) => {
                log::debug!("decoding texture from {}", path.display());
                slot.pending = Some(rx);
            }
            Err(err) => {
                log::warn!("failed to spawn texture decode thread: {err}");
            }
        }

        slot
    }

    /// Drains the decode channel; called once per tick before rendering.
    ///
    /// Nonblocking. On a finished decode the full texture replaces the
    /// placeholder; on a failed decode the placeholder stays and the error
    /// is logged once.
    pub fn poll(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        let Some(rx) = self.pending.as_ref() else { return };

        match rx.try_recv() {
            Ok(Ok(img)) => {
                self.upload(device, queue, img);
                self.pending = None;
            }
            Ok(Err(err)) => {
                log::warn!("texture decode failed, keeping placeholder: {err:#}");
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::warn!("texture decode thread vanished, keeping placeholder");
                self.pending = None;
            }
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    /// Bumped on every texture swap; renderers compare this against the
    /// generation their bind group was built for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once the real image (not the placeholder) is on the GPU.
    pub fn is_resident(&self) -> bool {
        self.resident
    }

    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, img: RgbaImage) {
        let (width, height) = img.dimensions();
        let mip_level_count = mip_level_count(width, height);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("quadrille quad texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        write_level(queue, &texture, 0, &img);

        // Each level halves the previous one; `Queue::write_texture` has no
        // row-alignment requirement, so odd widths upload as-is.
        let mut level_img = img;
        for level in 1..mip_level_count {
            let (lw, lh) = mip_dimensions(width, height, level);
            level_img = imageops::resize(&level_img, lw, lh, FilterType::Triangle);
            write_level(queue, &texture, level, &level_img);
        }

        self.view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        self.texture = texture;
        self.generation += 1;
        self.resident = true;

        log::debug!(
            "texture resident: {}x{}, {} mip levels, generation {}",
            width,
            height,
            mip_level_count,
            self.generation
        );
    }
}

fn decode(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?;
    Ok(img.to_rgba8())
}

fn write_level(queue: &wgpu::Queue, texture: &wgpu::Texture, level: u32, img: &RgbaImage) {
    let (w, h) = img.dimensions();
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: level,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        img.as_raw(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * w),
            rows_per_image: Some(h),
        },
        wgpu::Extent3d {
            width: w,
            height: h,
            depth_or_array_layers: 1,
        },
    );
}

/// Full chain: `floor(log2(max_dim)) + 1` levels down to 1x1.
fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Dimensions of `level`, each axis halving per level but never below 1.
fn mip_dimensions(width: u32, height: u32, level: u32) -> (u32, u32) {
    ((width >> level).max(1), (height >> level).max(1))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mip_count_for_power_of_two() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(2, 2), 2);
        assert_eq!(mip_level_count(256, 256), 9);
    }

    #[test]
    fn mip_count_uses_larger_axis() {
        // 640 needs 10 bits, 480 needs 9; the chain follows the larger.
        assert_eq!(mip_level_count(640, 480), 10);
        assert_eq!(mip_level_count(480, 640), 10);
    }

    #[test]
    fn mip_dimensions_halve_and_clamp() {
        assert_eq!(mip_dimensions(640, 480, 0), (640, 480));
        assert_eq!(mip_dimensions(640, 480, 1), (320, 240));
        assert_eq!(mip_dimensions(640, 480, 9), (1, 1));
    }

    #[test]
    fn narrow_axis_bottoms_out_at_one() {
        assert_eq!(mip_dimensions(256, 4, 3), (32, 1));
        assert_eq!(mip_dimensions(256, 4, 4), (16, 1));
        assert_eq!(mip_dimensions(256, 4, 8), (1, 1));
    }
}
