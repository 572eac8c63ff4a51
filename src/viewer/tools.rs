use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

/// Interaction mode for pointer gestures over the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerTool {
    /// Drag to pan, scroll to zoom. Never draws.
    #[default]
    Pan,
    /// Drag a segment, labeled with its length in pixels.
    Ruler,
    /// Drag from center to edge, labeled with the radius.
    Circle,
    /// Drag the first leg, click the vertex, drag the second leg.
    Angle,
}

impl ViewerTool {
    pub fn display_name(&self) -> &'static str {
        match self {
            ViewerTool::Pan => "Pan (P)",
            ViewerTool::Ruler => "Ruler (R)",
            ViewerTool::Circle => "Circle (C)",
            ViewerTool::Angle => "Angle (A)",
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            ViewerTool::Pan => CursorIcon::System(SystemCursorIcon::Grab),
            ViewerTool::Ruler => CursorIcon::System(SystemCursorIcon::Crosshair),
            ViewerTool::Circle => CursorIcon::System(SystemCursorIcon::Crosshair),
            ViewerTool::Angle => CursorIcon::System(SystemCursorIcon::Crosshair),
        }
    }

    pub fn all() -> &'static [ViewerTool] {
        &[
            ViewerTool::Pan,
            ViewerTool::Ruler,
            ViewerTool::Circle,
            ViewerTool::Angle,
        ]
    }

    /// True for tools whose gestures commit measurements.
    pub fn is_measure_tool(&self) -> bool {
        matches!(self, ViewerTool::Ruler | ViewerTool::Circle | ViewerTool::Angle)
    }
}

#[derive(Resource, Default)]
pub struct CurrentTool {
    pub tool: ViewerTool,
}

pub fn handle_tool_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut current_tool: ResMut<CurrentTool>,
    mut contexts: EguiContexts,
) {
    // Don't change tools if typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let new_tool = if keyboard.just_pressed(KeyCode::KeyP) {
        Some(ViewerTool::Pan)
    } else if keyboard.just_pressed(KeyCode::KeyR) {
        Some(ViewerTool::Ruler)
    } else if keyboard.just_pressed(KeyCode::KeyC) {
        Some(ViewerTool::Circle)
    } else if keyboard.just_pressed(KeyCode::KeyA) {
        Some(ViewerTool::Angle)
    } else {
        None
    };

    if let Some(tool) = new_tool {
        current_tool.tool = tool;
    }
}

pub fn update_cursor_icon(
    current_tool: Res<CurrentTool>,
    mut window_query: Query<(Entity, &Window), With<PrimaryWindow>>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok((entity, _window)) = window_query.single_mut() else {
        return;
    };

    // Use default cursor over UI, tool cursor over the image
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        commands
            .entity(entity)
            .insert(CursorIcon::System(SystemCursorIcon::Default));
        return;
    }

    commands.entity(entity).insert(current_tool.tool.cursor_icon());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(ViewerTool::Pan.display_name(), "Pan (P)");
        assert_eq!(ViewerTool::Ruler.display_name(), "Ruler (R)");
        assert_eq!(ViewerTool::Circle.display_name(), "Circle (C)");
        assert_eq!(ViewerTool::Angle.display_name(), "Angle (A)");
    }

    #[test]
    fn test_display_names_contain_shortcuts() {
        // Each display name should contain its keyboard shortcut in parentheses
        for tool in ViewerTool::all() {
            let name = tool.display_name();
            assert!(name.contains('('), "Display name should contain shortcut: {}", name);
            assert!(name.contains(')'), "Display name should contain shortcut: {}", name);
        }
    }

    #[test]
    fn test_all_returns_all_tools() {
        let all = ViewerTool::all();
        assert_eq!(all.len(), 4);
        assert!(all.contains(&ViewerTool::Pan));
        assert!(all.contains(&ViewerTool::Ruler));
        assert!(all.contains(&ViewerTool::Circle));
        assert!(all.contains(&ViewerTool::Angle));
    }

    #[test]
    fn test_is_measure_tool() {
        assert!(!ViewerTool::Pan.is_measure_tool());
        assert!(ViewerTool::Ruler.is_measure_tool());
        assert!(ViewerTool::Circle.is_measure_tool());
        assert!(ViewerTool::Angle.is_measure_tool());
    }

    #[test]
    fn test_default_tool_is_pan() {
        assert_eq!(ViewerTool::default(), ViewerTool::Pan);
    }

    #[test]
    fn test_current_tool_default() {
        let current = CurrentTool::default();
        assert_eq!(current.tool, ViewerTool::Pan);
    }

    #[test]
    fn test_measure_tools_have_crosshair() {
        for tool in ViewerTool::all().iter().filter(|t| t.is_measure_tool()) {
            assert_eq!(
                tool.cursor_icon(),
                CursorIcon::System(SystemCursorIcon::Crosshair)
            );
        }
    }

    #[test]
    fn test_pan_tool_has_grab_cursor() {
        assert_eq!(
            ViewerTool::Pan.cursor_icon(),
            CursorIcon::System(SystemCursorIcon::Grab)
        );
    }
}
