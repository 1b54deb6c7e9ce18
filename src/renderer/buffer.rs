use glow::HasContext;
use std::rc::Rc;

use super::vertex::Vertex;
use crate::error::Error;

/// Static vertex data living in an `ARRAY_BUFFER`.
pub struct VertexBuffer {
    gl: Rc<glow::Context>,
    pub buf: glow::Buffer,
    pub len: usize,
}

impl VertexBuffer {
    /// Creates the buffer, binds it and uploads `content`.
    ///
    /// A vertex array must already be bound for the binding to be recorded in it.
    pub fn new(gl: Rc<glow::Context>, content: &[Vertex]) -> Result<Self, Error> {
        let bytes = Vertex::as_bytes(content);
        assert_ne!(bytes.len(), 0);

        let buf = unsafe { gl.create_buffer() }.map_err(|message| Error::Object {
            kind: "vertex buffer",
            message,
        })?;

        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(buf));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);
        }

        log::debug!("uploaded {} bytes of vertex data", bytes.len());

        Ok(VertexBuffer {
            gl,
            buf,
            len: content.len(),
        })
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe { self.gl.delete_buffer(self.buf) }
    }
}
