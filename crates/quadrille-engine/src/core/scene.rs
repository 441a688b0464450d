use std::path::PathBuf;

use crate::chord::BindingTable;
use crate::transform::TransformState;

/// Where the quad's texture comes from.
///
/// The placeholder is always shown first; when `path` is set, a decode
/// thread replaces it with the image once ready. The pale-yellow default
/// matches the classic "texture not loaded yet" fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSource {
    pub placeholder: [u8; 4],
    pub path: Option<PathBuf>,
}

impl TextureSource {
    pub const DEFAULT_PLACEHOLDER: [u8; 4] = [255, 245, 157, 255];
}

impl Default for TextureSource {
    fn default() -> Self {
        Self {
            placeholder: Self::DEFAULT_PLACEHOLDER,
            path: None,
        }
    }
}

/// Everything a frontend hands to the runtime: the binding table, the
/// starting transform, the texture source and the clear color.
///
/// A scene is plain data; the runtime turns it into a scheduler, a texture
/// slot and a clear color and owns those from then on.
#[derive(Debug, Clone)]
pub struct Scene {
    pub bindings: BindingTable,
    pub initial_transform: TransformState,
    pub texture: TextureSource,
    pub clear_color: [f64; 4],
}

impl Scene {
    pub fn new(bindings: BindingTable, initial_transform: TransformState) -> Self {
        Self {
            bindings,
            initial_transform,
            texture: TextureSource::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}
