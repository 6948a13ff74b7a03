/// Data that can be copied verbatim into a uniform buffer.
///
/// The shader reads the bytes through its own std140-flavored view, so
/// implementors must already be laid out the way the shader expects; see the
/// `hitbox-gpu` structs.
pub trait UniformBufferable {
    fn data(&self) -> &[u8];
}
