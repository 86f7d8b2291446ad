use super::*;
use crate::foundation::core::{BezPath, Rgba8};

#[derive(Default)]
struct MockBackend {
    calls: Vec<&'static str>,
}

impl PassBackend for MockBackend {
    fn begin(&mut self, _canvas: Canvas) -> InkResult<()> {
        self.calls.push("begin");
        Ok(())
    }

    fn exec_op(&mut self, op: &DrawOp) -> InkResult<()> {
        self.calls.push(match op {
            DrawOp::Image { .. } => "image",
            DrawOp::Stroke { .. } => "stroke",
            DrawOp::Reveal { .. } => "reveal",
        });
        Ok(())
    }

    fn readback(&mut self, plan: &RenderPlan) -> InkResult<Raster> {
        self.calls.push("readback");
        Ok(Raster::transparent(plan.canvas))
    }
}

fn plan(canvas: Canvas) -> RenderPlan {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((3.0, 2.0));
    RenderPlan {
        canvas,
        ops: vec![
            DrawOp::Image {
                raster: Raster::transparent(canvas),
                opacity: 1.0,
            },
            DrawOp::Stroke {
                path: path.clone(),
                color: Rgba8::RED,
                stroke_width: 1.0,
                opacity: 1.0,
            },
            DrawOp::Reveal {
                content: Raster::transparent(canvas),
                mask: path,
                stroke_width: 1.0,
                opacity: 1.0,
            },
        ],
    }
}

#[test]
fn execute_plan_calls_in_expected_order() {
    let canvas = Canvas::new(4, 3).unwrap();
    let mut backend = MockBackend::default();
    let out = execute_plan(&mut backend, &plan(canvas)).unwrap();
    assert_eq!(out.canvas(), canvas);
    assert_eq!(
        backend.calls,
        vec!["begin", "image", "stroke", "reveal", "readback"]
    );
}

#[test]
fn execute_plan_rejects_zero_canvas_before_touching_backend() {
    let mut backend = MockBackend::default();
    let bad = RenderPlan {
        canvas: Canvas {
            width: 0,
            height: 0,
        },
        ops: vec![],
    };
    assert!(execute_plan(&mut backend, &bad).is_err());
    assert!(backend.calls.is_empty());
}
