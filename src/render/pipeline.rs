use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation,
    WebGlVertexArrayObject,
};
use crate::curve::SampledCurve;
use crate::data::DisplayConfig;
use crate::math::Mat4;
use crate::mesh::Mesh;
use super::geometry::{curve_strip, frame_lines, vertex_count, FrameVector};
use super::shaders::{colors, FLAT_FRAGMENT_SHADER, FLAT_VERTEX_SHADER};
use super::webgl::WebGLContext;

/// Cached uniform locations of the flat shader
struct FlatUniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
}

/// A vertex array plus the buffer backing it
struct LineBatch {
    vao: WebGlVertexArrayObject,
    _buffer: WebGlBuffer,
    count: i32,
}

struct MeshBatch {
    vao: WebGlVertexArrayObject,
    _vertex_buffer: WebGlBuffer,
    _index_buffer: WebGlBuffer,
    index_count: i32,
}

/// Draws the curve, its frame vectors and the flying object
pub struct RenderPipeline {
    ctx: WebGLContext,
    program: WebGlProgram,
    uniforms: FlatUniforms,

    curve: Option<LineBatch>,
    tangents: Option<LineBatch>,
    normals: Option<LineBatch>,
    binormals: Option<LineBatch>,
    object: Option<MeshBatch>,

    display: DisplayConfig,

    width: i32,
    height: i32,
}

impl RenderPipeline {
    pub fn new(gl: WebGl2RenderingContext, width: i32, height: i32) -> Result<Self, String> {
        let ctx = WebGLContext::new(gl);
        let program = ctx.create_program(FLAT_VERTEX_SHADER, FLAT_FRAGMENT_SHADER)?;

        let uniforms = FlatUniforms {
            model: ctx.get_uniform_location(&program, "u_model"),
            view: ctx.get_uniform_location(&program, "u_view"),
            projection: ctx.get_uniform_location(&program, "u_projection"),
            color: ctx.get_uniform_location(&program, "u_color"),
        };

        Ok(Self {
            ctx,
            program,
            uniforms,
            curve: None,
            tangents: None,
            normals: None,
            binormals: None,
            object: None,
            display: DisplayConfig::default(),
            width,
            height,
        })
    }

    fn upload_lines(&self, data: &[f32]) -> Result<LineBatch, String> {
        let buffer = self.ctx.create_buffer_f32(data, WebGl2RenderingContext::STATIC_DRAW)?;
        let vao = self.ctx.create_position_vao(&buffer)?;
        Ok(LineBatch {
            vao,
            _buffer: buffer,
            count: vertex_count(data),
        })
    }

    /// Upload the curve strip and all three sets of frame lines
    pub fn upload_curve(&mut self, curve: &SampledCurve) -> Result<(), String> {
        self.curve = Some(self.upload_lines(&curve_strip(curve))?);
        self.tangents = Some(self.upload_lines(&frame_lines(curve, FrameVector::Tangent))?);
        self.normals = Some(self.upload_lines(&frame_lines(curve, FrameVector::Normal))?);
        self.binormals = Some(self.upload_lines(&frame_lines(curve, FrameVector::Binormal))?);

        log::debug!(
            "uploaded curve: {} strip vertices, {} normal segments",
            self.curve.as_ref().map_or(0, |b| b.count),
            self.normals.as_ref().map_or(0, |b| b.count / 2)
        );
        Ok(())
    }

    /// Upload the object mesh
    pub fn upload_mesh(&mut self, mesh: &Mesh) -> Result<(), String> {
        let gl = &self.ctx.gl;

        let vertex_buffer = self.ctx.create_buffer_f32(&mesh.vertex_data(), WebGl2RenderingContext::STATIC_DRAW)?;
        let index_data = mesh.index_data();
        let index_buffer = self.ctx.create_index_buffer(&index_data, WebGl2RenderingContext::STATIC_DRAW)?;

        let vao = self.ctx.create_vao()?;
        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&vertex_buffer));
        gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));

        // Position (location 0), tightly packed xyz
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 3, WebGl2RenderingContext::FLOAT, false, 0, 0);

        gl.bind_vertex_array(None);

        self.object = Some(MeshBatch {
            vao,
            _vertex_buffer: vertex_buffer,
            _index_buffer: index_buffer,
            index_count: index_data.len() as i32,
        });
        Ok(())
    }

    pub fn set_display(&mut self, display: DisplayConfig) {
        self.display = display;
    }

    fn draw_lines(&self, batch: &Option<LineBatch>, mode: u32, color: [f32; 4]) {
        let Some(batch) = batch else { return };
        if batch.count == 0 {
            return;
        }
        let gl = &self.ctx.gl;
        self.ctx.uniform_4f(self.uniforms.color.as_ref(), color[0], color[1], color[2], color[3]);
        gl.bind_vertex_array(Some(&batch.vao));
        gl.draw_arrays(mode, 0, batch.count);
    }

    /// Render a frame: curve and frame vectors in world space, then the
    /// object under its model matrix
    pub fn render(&self, view: &Mat4, projection: &Mat4, object_model: &Mat4) {
        let gl = &self.ctx.gl;

        self.ctx.viewport(0, 0, self.width, self.height);
        let bg = colors::BACKGROUND;
        self.ctx.clear(bg[0], bg[1], bg[2], bg[3]);
        self.ctx.enable_depth_test();

        gl.use_program(Some(&self.program));
        self.ctx.uniform_matrix4fv(self.uniforms.view.as_ref(), &view.to_gl());
        self.ctx.uniform_matrix4fv(self.uniforms.projection.as_ref(), &projection.to_gl());
        self.ctx.uniform_matrix4fv(self.uniforms.model.as_ref(), &Mat4::identity().to_gl());

        self.draw_lines(&self.curve, WebGl2RenderingContext::LINE_STRIP, colors::CURVE);
        self.draw_lines(&self.tangents, WebGl2RenderingContext::LINES, colors::TANGENT);
        if self.display.show_normals {
            self.draw_lines(&self.normals, WebGl2RenderingContext::LINES, colors::NORMAL);
        }
        if self.display.show_binormals {
            self.draw_lines(&self.binormals, WebGl2RenderingContext::LINES, colors::BINORMAL);
        }

        if let Some(object) = &self.object {
            self.ctx.uniform_matrix4fv(self.uniforms.model.as_ref(), &object_model.to_gl());
            let c = colors::OBJECT;
            self.ctx.uniform_4f(self.uniforms.color.as_ref(), c[0], c[1], c[2], c[3]);
            gl.bind_vertex_array(Some(&object.vao));
            gl.draw_elements_with_i32(
                WebGl2RenderingContext::TRIANGLES,
                object.index_count,
                WebGl2RenderingContext::UNSIGNED_INT,
                0,
            );
        }

        gl.bind_vertex_array(None);
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        log::debug!("resize to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    /// Width over height of the drawing area
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
