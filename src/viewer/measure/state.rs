//! Gesture state machine for the measuring tools.
//!
//! The angle tool deliberately mixes interaction styles: the first leg is
//! placed by drag, the vertex by a separate click, the second leg by drag
//! again. The states below make that flow explicit instead of inferring it
//! from optional fields.

use bevy::prelude::*;

use super::super::tools::ViewerTool;
use super::geometry::{distance, DEGENERATE_EPSILON};
use super::measurement::Measurement;

/// Transient pointer-gesture state. All points are image-space.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum MeasureGesture {
    /// No interaction in progress
    #[default]
    Idle,
    /// Button held after the first press (any measuring tool)
    Dragging { anchor: Vec2 },
    /// Angle only: first leg released, waiting for the vertex click
    AwaitingVertex { anchor: Vec2 },
    /// Angle only: vertex placed, second leg follows the cursor
    DraggingAngle { anchor: Vec2, vertex: Vec2 },
}

impl MeasureGesture {
    /// Pointer-press transition. The pan tool never starts a gesture.
    #[must_use]
    pub fn on_press(self, tool: ViewerTool, point: Vec2) -> MeasureGesture {
        if !tool.is_measure_tool() {
            return MeasureGesture::Idle;
        }

        match self {
            MeasureGesture::Idle => MeasureGesture::Dragging { anchor: point },
            MeasureGesture::AwaitingVertex { anchor } if tool == ViewerTool::Angle => {
                // The discrete vertex click
                MeasureGesture::DraggingAngle {
                    anchor,
                    vertex: point,
                }
            }
            // Stale angle state under another tool starts over
            MeasureGesture::AwaitingVertex { .. } => MeasureGesture::Dragging { anchor: point },
            // A press while already pressed should not occur; keep state
            other => other,
        }
    }

    /// Pointer-release transition. Returns the next state and, when the
    /// gesture completed, the measurement to commit.
    #[must_use]
    pub fn on_release(
        self,
        tool: ViewerTool,
        point: Vec2,
    ) -> (MeasureGesture, Option<Measurement>) {
        match self {
            MeasureGesture::Dragging { anchor } => match tool {
                ViewerTool::Ruler => (
                    MeasureGesture::Idle,
                    Some(Measurement::Ruler {
                        start: anchor,
                        end: point,
                    }),
                ),
                ViewerTool::Circle => (
                    MeasureGesture::Idle,
                    Some(Measurement::Circle {
                        center: anchor,
                        edge: point,
                    }),
                ),
                // An angle is never committed with two points; wait for the
                // vertex click instead
                ViewerTool::Angle => (MeasureGesture::AwaitingVertex { anchor }, None),
                ViewerTool::Pan => (MeasureGesture::Idle, None),
            },
            MeasureGesture::DraggingAngle { anchor, vertex } => {
                // Releasing on the vertex is the tail of the vertex click,
                // not an end-point placement
                if distance(point, vertex) < DEGENERATE_EPSILON {
                    (MeasureGesture::DraggingAngle { anchor, vertex }, None)
                } else {
                    (
                        MeasureGesture::Idle,
                        Some(Measurement::Angle {
                            a: anchor,
                            vertex,
                            b: point,
                        }),
                    )
                }
            }
            other => (other, None),
        }
    }

    /// Discard the in-progress gesture (right click, tool switch).
    #[must_use]
    pub fn cancel(self) -> MeasureGesture {
        MeasureGesture::Idle
    }

    /// Shape to draw for the in-progress gesture with the cursor at
    /// `cursor`. The first angle leg previews as a plain segment until the
    /// vertex exists.
    pub fn preview(&self, tool: ViewerTool, cursor: Vec2) -> Option<Measurement> {
        match *self {
            MeasureGesture::Idle => None,
            MeasureGesture::Dragging { anchor } => match tool {
                ViewerTool::Circle => Some(Measurement::Circle {
                    center: anchor,
                    edge: cursor,
                }),
                ViewerTool::Ruler | ViewerTool::Angle => Some(Measurement::Ruler {
                    start: anchor,
                    end: cursor,
                }),
                ViewerTool::Pan => None,
            },
            MeasureGesture::AwaitingVertex { anchor } => Some(Measurement::Ruler {
                start: anchor,
                end: cursor,
            }),
            MeasureGesture::DraggingAngle { anchor, vertex } => Some(Measurement::Angle {
                a: anchor,
                vertex,
                b: cursor,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_ruler_drag_commits_exactly_one() {
        let gesture = MeasureGesture::Idle;

        let gesture = gesture.on_press(ViewerTool::Ruler, Vec2::new(0.0, 0.0));
        assert!(matches!(gesture, MeasureGesture::Dragging { .. }));

        // Pointer moves do not commit
        assert!(gesture
            .preview(ViewerTool::Ruler, Vec2::new(10.0, 0.0))
            .is_some());

        let (gesture, committed) = gesture.on_release(ViewerTool::Ruler, Vec2::new(10.0, 0.0));
        assert_eq!(gesture, MeasureGesture::Idle);
        assert_eq!(
            committed,
            Some(Measurement::Ruler {
                start: Vec2::new(0.0, 0.0),
                end: Vec2::new(10.0, 0.0),
            })
        );
    }

    #[test]
    fn test_circle_drag_commits_center_and_edge() {
        let gesture = MeasureGesture::Idle.on_press(ViewerTool::Circle, Vec2::new(10.0, 10.0));
        let (gesture, committed) = gesture.on_release(ViewerTool::Circle, Vec2::new(10.0, 13.0));

        assert_eq!(gesture, MeasureGesture::Idle);
        assert_eq!(
            committed,
            Some(Measurement::Circle {
                center: Vec2::new(10.0, 10.0),
                edge: Vec2::new(10.0, 13.0),
            })
        );
    }

    #[test]
    fn test_angle_first_release_commits_nothing() {
        let gesture = MeasureGesture::Idle.on_press(ViewerTool::Angle, Vec2::new(0.0, 0.0));
        let (gesture, committed) = gesture.on_release(ViewerTool::Angle, Vec2::new(5.0, 0.0));

        assert_eq!(committed, None);
        assert_eq!(
            gesture,
            MeasureGesture::AwaitingVertex {
                anchor: Vec2::new(0.0, 0.0)
            }
        );
    }

    #[test]
    fn test_angle_vertex_click_then_drag_commits_three_points() {
        let a = Vec2::new(0.0, 0.0);
        let vertex = Vec2::new(5.0, 0.0);
        let b = Vec2::new(5.0, 5.0);

        let gesture = MeasureGesture::Idle.on_press(ViewerTool::Angle, a);
        let (gesture, _) = gesture.on_release(ViewerTool::Angle, Vec2::new(4.0, 0.0));

        // Second press places the vertex
        let gesture = gesture.on_press(ViewerTool::Angle, vertex);
        assert_eq!(gesture, MeasureGesture::DraggingAngle { anchor: a, vertex });

        let (gesture, committed) = gesture.on_release(ViewerTool::Angle, b);
        assert_eq!(gesture, MeasureGesture::Idle);
        assert_eq!(committed, Some(Measurement::Angle { a, vertex, b }));
    }

    #[test]
    fn test_angle_release_on_vertex_does_not_commit() {
        let a = Vec2::new(0.0, 0.0);
        let vertex = Vec2::new(5.0, 0.0);

        let gesture = MeasureGesture::DraggingAngle { anchor: a, vertex };
        let (gesture, committed) = gesture.on_release(ViewerTool::Angle, vertex);

        // The click that placed the vertex ends here; the gesture stays live
        assert_eq!(committed, None);
        assert_eq!(gesture, MeasureGesture::DraggingAngle { anchor: a, vertex });
    }

    #[test]
    fn test_pan_press_never_starts_a_gesture() {
        let gesture = MeasureGesture::Idle.on_press(ViewerTool::Pan, Vec2::new(3.0, 3.0));
        assert_eq!(gesture, MeasureGesture::Idle);
    }

    #[test]
    fn test_cancel_discards_in_progress_state() {
        let gesture = MeasureGesture::Idle.on_press(ViewerTool::Ruler, Vec2::ZERO);
        assert_eq!(gesture.cancel(), MeasureGesture::Idle);

        let gesture = MeasureGesture::AwaitingVertex { anchor: Vec2::ZERO };
        assert_eq!(gesture.cancel(), MeasureGesture::Idle);
    }

    #[test]
    fn test_stale_angle_state_restarts_under_other_tool() {
        let gesture = MeasureGesture::AwaitingVertex { anchor: Vec2::ZERO };
        let gesture = gesture.on_press(ViewerTool::Ruler, Vec2::new(2.0, 2.0));
        assert_eq!(
            gesture,
            MeasureGesture::Dragging {
                anchor: Vec2::new(2.0, 2.0)
            }
        );
    }

    #[test]
    fn test_idle_release_is_noop() {
        let (gesture, committed) =
            MeasureGesture::Idle.on_release(ViewerTool::Ruler, Vec2::new(1.0, 1.0));
        assert_eq!(gesture, MeasureGesture::Idle);
        assert_eq!(committed, None);
    }

    #[test]
    fn test_preview_shapes_per_tool() {
        let anchor = Vec2::new(1.0, 1.0);
        let cursor = Vec2::new(4.0, 5.0);
        let dragging = MeasureGesture::Dragging { anchor };

        assert!(matches!(
            dragging.preview(ViewerTool::Ruler, cursor),
            Some(Measurement::Ruler { .. })
        ));
        assert!(matches!(
            dragging.preview(ViewerTool::Circle, cursor),
            Some(Measurement::Circle { .. })
        ));
        // First angle leg previews as a segment
        assert!(matches!(
            dragging.preview(ViewerTool::Angle, cursor),
            Some(Measurement::Ruler { .. })
        ));
        assert_eq!(MeasureGesture::Idle.preview(ViewerTool::Ruler, cursor), None);
    }
}
