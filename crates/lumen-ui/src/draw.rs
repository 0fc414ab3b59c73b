//! Immediate-mode draw commands
//!
//! The country list emits draw commands instead of touching a GPU surface
//! directly. The renderer that consumes them lives outside this crate.

use crate::Color;

/// Immediate-mode draw command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Draw rectangle
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
        corner_radius: f32,
    },
    /// Draw text
    Text {
        x: f32,
        y: f32,
        text: String,
        color: Color,
        size: f32,
    },
    /// Draw a named image asset
    Icon {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        name: String,
        /// Desaturate the asset when drawing
        grayscale: bool,
    },
}

impl DrawCmd {
    /// Asset name, if this command draws one. Mostly useful in tests.
    pub fn icon_name(&self) -> Option<&str> {
        match self {
            DrawCmd::Icon { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name() {
        let cmd = DrawCmd::Icon {
            x: 0.0,
            y: 0.0,
            w: 16.0,
            h: 12.0,
            name: "de-plain".to_string(),
            grayscale: false,
        };
        assert_eq!(cmd.icon_name(), Some("de-plain"));

        let rect = DrawCmd::Rect {
            x: 0.0,
            y: 0.0,
            w: 1.0,
            h: 1.0,
            color: Color::BLACK,
            corner_radius: 0.0,
        };
        assert_eq!(rect.icon_name(), None);
    }
}
