//! Asset loading. Today that means exactly one thing: the quad texture.

mod texture;

pub use texture::TextureSlot;
