use crate::frame::FramePlan;
use std::fmt::Write;

/// Backend-agnostic renderer interface.
///
/// A renderer consumes a [`FramePlan`] and produces output. It never touches
/// camera or scene state; the plan is the only input.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given plan.
    fn render(&mut self, plan: &FramePlan) -> Self::Output;
}

/// Text renderer for the CLI, logs and tests.
///
/// Counts frames so consecutive outputs can be told apart.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    frames: u64,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, plan: &FramePlan) -> String {
        self.frames += 1;
        let mut out = String::new();
        let p = plan.camera_position;
        let f = plan.camera_front;
        let l = plan.light.position;

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "=== Frame {} ({}, fov={:.1}) ===",
            self.frames,
            plan.mode.label(),
            plan.fov_degrees
        );
        let _ = writeln!(
            out,
            "Camera: pos=({:.2}, {:.2}, {:.2}) front=({:.3}, {:.3}, {:.3})",
            p.x, p.y, p.z, f.x, f.y, f.z
        );
        let _ = writeln!(out, "Light: pos=({:.2}, {:.2}, {:.2})", l.x, l.y, l.z);
        let _ = writeln!(
            out,
            "Draws: {} ({} vertices)",
            plan.draws.len(),
            plan.total_vertices()
        );
        for (i, draw) in plan.draws.iter().enumerate() {
            let origin = draw.model.transform_point3(glam::Vec3::ZERO);
            let _ = writeln!(
                out,
                "  {i}: {:<18} mesh={} tex={} verts={} at=({:.2}, {:.2}, {:.2})",
                draw.object,
                draw.mesh.0,
                draw.texture.0,
                draw.vertex_count,
                origin.x,
                origin.y,
                origin.z
            );
        }
        if plan.lamp.is_some() {
            out.push_str("Lamp: shown\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, PointLight, Projection, ProjectionMode};
    use cottage_scene::Scene;

    fn house_plan(mode: ProjectionMode) -> FramePlan {
        let projection = Projection {
            mode,
            ..Projection::default()
        };
        FramePlan::build(
            &Camera::default(),
            &projection,
            1.5,
            PointLight::default(),
            &Scene::house(),
        )
    }

    #[test]
    fn lists_every_draw_in_order() {
        let mut renderer = DebugTextRenderer::new();
        let output = renderer.render(&house_plan(ProjectionMode::Perspective));

        assert!(output.contains("Frame 1 (perspective"));
        assert!(output.contains("Draws: 9"));
        let ground = output.find("0: ground").expect("ground listed");
        let bushes = output.find("8: bushes").expect("bushes listed");
        assert!(ground < bushes);
        assert!(!output.contains("Lamp"));
    }

    #[test]
    fn reports_mode_and_counts_frames() {
        let mut renderer = DebugTextRenderer::new();
        renderer.render(&house_plan(ProjectionMode::Perspective));
        let output = renderer.render(&house_plan(ProjectionMode::Orthographic).with_lamp(0.5));
        assert_eq!(renderer.frames_rendered(), 2);
        assert!(output.contains("Frame 2 (orthographic"));
        assert!(output.contains("Lamp: shown"));
    }

    #[test]
    fn reports_camera_start() {
        let mut renderer = DebugTextRenderer::new();
        let output = renderer.render(&house_plan(ProjectionMode::Perspective));
        assert!(output.contains("pos=(-0.50, 1.00, 4.00)"));
    }
}
