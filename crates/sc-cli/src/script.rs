//! JSON draw scripts.
//!
//! A script names the canvas size and a list of commands that are applied
//! in order, e.g.
//!
//! ```json
//! { "width": 64, "height": 48,
//!   "commands": [ { "op": "fill", "color": "#3366ff" },
//!                 { "op": "fill_rect", "x": 4, "y": 4, "w": 20, "h": 10 } ] }
//! ```

use sc_raster::{Canvas, Color};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub commands: Vec<Command>,
}

/// One drawing step. Colors accept `#RRGGBB` or a color name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Fill { color: Color },
    Stroke { color: Color },
    StrokeWidth { width: u32 },
    NoStroke,
    FillRect { x: i32, y: i32, w: i32, h: i32 },
    Rect { x: i32, y: i32, w: i32, h: i32 },
    /// Clears to white when no color is given.
    Clear {
        #[serde(default)]
        color: Color,
    },
}

impl Script {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Run every command against a fresh canvas.
    pub fn render(&self) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height);
        for (i, cmd) in self.commands.iter().enumerate() {
            log::trace!("SCRIPT #{i} {cmd:?}");
            cmd.apply(&mut canvas);
        }
        canvas
    }
}

impl Command {
    pub fn apply(&self, canvas: &mut Canvas) {
        match *self {
            Command::Fill { color } => canvas.fill(color),
            Command::Stroke { color } => canvas.stroke(color),
            Command::StrokeWidth { width } => canvas.set_stroke_width(width),
            Command::NoStroke => canvas.no_stroke(),
            Command::FillRect { x, y, w, h } => canvas.fill_rect(x, y, w, h),
            Command::Rect { x, y, w, h } => canvas.rect(x, y, w, h),
            Command::Clear { color } => canvas.clear(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_every_op() {
        let script = Script::from_json(
            r##"{
                "width": 4, "height": 2,
                "commands": [
                    { "op": "clear" },
                    { "op": "fill", "color": "red" },
                    { "op": "stroke", "color": "#0000FF" },
                    { "op": "stroke_width", "width": 2 },
                    { "op": "no_stroke" },
                    { "op": "fill_rect", "x": 0, "y": 0, "w": 2, "h": 2 },
                    { "op": "rect", "x": -1, "y": 1, "w": 3, "h": 3 }
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(
            script.commands,
            vec![
                Command::Clear { color: Color::WHITE },
                Command::Fill { color: Color::RED },
                Command::Stroke { color: Color::BLUE },
                Command::StrokeWidth { width: 2 },
                Command::NoStroke,
                Command::FillRect { x: 0, y: 0, w: 2, h: 2 },
                Command::Rect { x: -1, y: 1, w: 3, h: 3 },
            ]
        );
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let err = Script::from_json(
            r##"{ "width": 1, "height": 1,
                  "commands": [ { "op": "fill", "color": "#12345" } ] }"##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("6 digits"), "{err}");
    }

    #[test]
    fn unknown_op_is_rejected() {
        let result = Script::from_json(
            r#"{ "width": 1, "height": 1, "commands": [ { "op": "circle" } ] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn render_applies_commands_in_order() {
        let script = Script::from_json(
            r#"{ "width": 4, "height": 4,
                 "commands": [
                    { "op": "clear", "color": "black" },
                    { "op": "no_stroke" },
                    { "op": "fill", "color": "green" },
                    { "op": "fill_rect", "x": 0, "y": 0, "w": 4, "h": 4 },
                    { "op": "fill", "color": "red" },
                    { "op": "fill_rect", "x": 1, "y": 1, "w": 2, "h": 2 }
                 ] }"#,
        )
        .unwrap();

        let canvas = script.render();
        assert_eq!(canvas.pixel(0, 0), Some(Color::GREEN));
        assert_eq!(canvas.pixel(1, 1), Some(Color::RED));
        assert_eq!(canvas.pixel(2, 2), Some(Color::RED));
        assert_eq!(canvas.pixel(3, 3), Some(Color::GREEN));
        assert_eq!(canvas.fill_color(), Color::RED);
    }

    #[test]
    fn empty_script_renders_black() {
        let canvas = Script::from_json(r#"{ "width": 2, "height": 2 }"#)
            .unwrap()
            .render();
        assert!(canvas.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn demo_scene_renders() {
        let script = Script::from_json(include_str!("../../../demos/scene.json")).unwrap();
        let canvas = script.render();

        assert_eq!((canvas.width(), canvas.height()), (64, 48));
        // Frame outline
        assert_eq!(canvas.pixel(0, 0), Some(Color::GREEN));
        assert_eq!(canvas.pixel(63, 47), Some(Color::GREEN));
        // Stroked blue box
        assert_eq!(canvas.pixel(4, 4), Some(Color::BLACK));
        assert_eq!(canvas.pixel(10, 10), Some(Color::rgb(0x33, 0x66, 0xFF)));
        // Unstroked red box
        assert_eq!(canvas.pixel(36, 24), Some(Color::RED));
        // Background
        assert_eq!(canvas.pixel(32, 2), Some(Color::WHITE));
    }
}
