use glow::HasContext;
use std::rc::Rc;

use super::vertex::STRIDE;
use crate::error::Error;

/// Records which buffer feeds which shader input and with what layout.
pub struct VertexArray {
    gl: Rc<glow::Context>,
    pub vao: glow::VertexArray,
}

impl VertexArray {
    /// Creates the vertex array and leaves it bound, so that the following
    /// buffer binding and attribute pointers are captured by it.
    pub fn new(gl: Rc<glow::Context>) -> Result<Self, Error> {
        let vao = unsafe { gl.create_vertex_array() }.map_err(|message| Error::Object {
            kind: "vertex array",
            message,
        })?;

        let vertex_array = VertexArray { gl, vao };
        vertex_array.bind();
        Ok(vertex_array)
    }

    pub fn bind(&self) {
        unsafe { self.gl.bind_vertex_array(Some(self.vao)) }
    }

    /// Describes a float attribute of `components` values starting `offset`
    /// bytes into each vertex of the currently bound `ARRAY_BUFFER`.
    pub fn attribute(&self, location: u32, components: i32, offset: i32) {
        unsafe {
            self.gl.enable_vertex_attrib_array(location);
            self.gl.vertex_attrib_pointer_f32(
                location,
                components,
                glow::FLOAT,
                false,
                STRIDE,
                offset,
            );
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe { self.gl.delete_vertex_array(self.vao) }
    }
}
