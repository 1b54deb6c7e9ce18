use glow::HasContext;
use std::rc::Rc;

use crate::error::Error;

pub const VERTEX_SOURCE: &str = include_str!("../data/triangle.vert");
pub const FRAGMENT_SOURCE: &str = include_str!("../data/triangle.frag");

/// A compiled shader stage. Deleted as soon as it goes out of scope; once
/// attached to a linked program the driver keeps what it needs.
struct Shader {
    gl: Rc<glow::Context>,
    shader: glow::Shader,
}

impl Shader {
    fn compile(gl: Rc<glow::Context>, stage: u32, source: &str) -> Result<Self, Error> {
        let name = stage_name(stage);
        let shader = unsafe { gl.create_shader(stage) }.map_err(|message| Error::Object {
            kind: name,
            message,
        })?;
        let shader = Shader { gl, shader };

        unsafe {
            shader.gl.shader_source(shader.shader, source);
            shader.gl.compile_shader(shader.shader);

            if !shader.gl.get_shader_compile_status(shader.shader) {
                return Err(Error::Compile {
                    stage: name,
                    log: shader.gl.get_shader_info_log(shader.shader),
                });
            }
        }

        Ok(shader)
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { self.gl.delete_shader(self.shader) }
    }
}

fn stage_name(stage: u32) -> &'static str {
    match stage {
        glow::VERTEX_SHADER => "vertex shader",
        glow::FRAGMENT_SHADER => "fragment shader",
        _ => "shader",
    }
}

/// Linked vertex + fragment program.
pub struct Pipeline {
    gl: Rc<glow::Context>,
    pub program: glow::Program,
}

impl Pipeline {
    pub fn new(gl: Rc<glow::Context>, vs_source: &str, fs_source: &str) -> Result<Self, Error> {
        let vs = Shader::compile(Rc::clone(&gl), glow::VERTEX_SHADER, vs_source)?;
        let fs = Shader::compile(Rc::clone(&gl), glow::FRAGMENT_SHADER, fs_source)?;

        let program = unsafe { gl.create_program() }.map_err(|message| Error::Object {
            kind: "program",
            message,
        })?;
        let pipeline = Pipeline { gl, program };

        unsafe {
            let gl = &pipeline.gl;
            gl.attach_shader(program, vs.shader);
            gl.attach_shader(program, fs.shader);
            gl.link_program(program);

            let linked = gl.get_program_link_status(program);
            gl.detach_shader(program, vs.shader);
            gl.detach_shader(program, fs.shader);

            if !linked {
                return Err(Error::Link(gl.get_program_info_log(program)));
            }
        }

        Ok(pipeline)
    }

    /// Location of a vertex input. Only meaningful after linking.
    pub fn attribute(&self, name: &'static str) -> Result<u32, Error> {
        unsafe { self.gl.get_attrib_location(self.program, name) }
            .ok_or(Error::MissingAttribute(name))
    }

    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.program)) }
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.program) }
    }
}
