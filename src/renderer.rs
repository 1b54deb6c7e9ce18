use glow::HasContext;
use std::rc::Rc;

mod buffer;
mod pipeline;
mod surface;
mod vertex;
mod vertex_array;

use crate::config::CLEAR_COLOR;
use crate::error::Error;
use buffer::VertexBuffer;
use pipeline::{Pipeline, FRAGMENT_SOURCE, VERTEX_SOURCE};
pub use surface::Surface;
use vertex::{
    Vertex, COLOR_COMPONENTS, COLOR_OFFSET, POSITION_COMPONENTS, POSITION_OFFSET, TRIANGLE,
};
use vertex_array::VertexArray;

/// Owns every GL object needed to draw the triangle.
///
/// Fields drop in reverse order of creation: program, buffer, vertex array.
pub struct Renderer {
    gl: Rc<glow::Context>,
    pipeline: Pipeline,
    vertex_buffer: VertexBuffer,
    vertex_array: VertexArray,
}

impl Renderer {
    pub fn new(gl: Rc<glow::Context>) -> Result<Self, Error> {
        // The vertex array has to be bound before the buffer and the
        // attribute pointers, it captures both.
        let vertex_array = VertexArray::new(Rc::clone(&gl))?;
        let vertex_buffer = VertexBuffer::new(Rc::clone(&gl), &TRIANGLE)?;

        let pipeline = Pipeline::new(Rc::clone(&gl), VERTEX_SOURCE, FRAGMENT_SOURCE)?;

        let position = pipeline.attribute("position")?;
        let color = pipeline.attribute("color")?;
        vertex_array.attribute(position, POSITION_COMPONENTS, POSITION_OFFSET);
        vertex_array.attribute(color, COLOR_COMPONENTS, COLOR_OFFSET);

        pipeline.bind();

        log::info!(
            "setup complete: {} vertices ({} bytes), gl error {:#x}",
            vertex_buffer.len,
            Vertex::as_bytes(&TRIANGLE).len(),
            unsafe { gl.get_error() }
        );

        Ok(Renderer {
            gl,
            pipeline,
            vertex_buffer,
            vertex_array,
        })
    }

    pub fn render(&self) {
        let [r, g, b, a] = CLEAR_COLOR;
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.pipeline.bind();
        self.vertex_array.bind();
        unsafe {
            self.gl
                .draw_arrays(glow::TRIANGLES, 0, self.vertex_buffer.len as i32);
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) }
    }
}
