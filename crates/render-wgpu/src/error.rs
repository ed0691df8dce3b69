use cottage_common::TextureId;

/// Errors raised while building GPU resources at startup.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    #[error("shader '{label}' failed to compile: {message}")]
    Shader { label: &'static str, message: String },
    #[error("pipeline '{label}' is invalid: {message}")]
    Pipeline { label: &'static str, message: String },
    #[error("texture '{name}' ({width}x{height}) exceeds the device limit of {limit}")]
    TextureTooLarge {
        name: String,
        width: u32,
        height: u32,
        limit: u32,
    },
    #[error("scene references texture {0:?} that was not uploaded")]
    MissingTexture(TextureId),
}

/// Run `f` inside a validation error scope and turn a captured error into
/// the error built by `on_error`.
pub(crate) fn validated<T>(
    device: &wgpu::Device,
    f: impl FnOnce() -> T,
    on_error: impl FnOnce(String) -> GpuError,
) -> Result<T, GpuError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = f();
    match pollster::block_on(device.pop_error_scope()) {
        Some(err) => Err(on_error(err.to_string())),
        None => Ok(value),
    }
}
