//! The drawing surface abstraction and the styles used on it.

use crate::geometry::Coord;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Orange,
    LightBlue,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    /// Dash and gap lengths; `None` draws a solid line.
    pub dash: Option<[f64; 2]>,
}

impl LineStyle {
    /// Preview of the tangent or chord through the operands.
    pub const TANGENT: LineStyle = LineStyle {
        color: Color::Orange,
        width: 1.0,
        dash: Some([4.0, 4.0]),
    };

    /// The modular line swept from the operands to the third point.
    pub const SECANT: LineStyle = LineStyle {
        color: Color::Orange,
        width: 2.0,
        dash: None,
    };

    /// Reflection from -R to R.
    pub const REFLECTION: LineStyle = LineStyle {
        color: Color::Red,
        width: 2.0,
        dash: Some([3.0, 2.0]),
    };
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DotStyle {
    pub fill: Color,
    /// Outline width, zero for none.
    pub stroke: f64,
}

impl DotStyle {
    pub const CURVE: DotStyle = DotStyle {
        fill: Color::LightBlue,
        stroke: 0.0,
    };
    pub const BASE: DotStyle = DotStyle {
        fill: Color::Black,
        stroke: 1.0,
    };
    pub const OPERAND: DotStyle = DotStyle {
        fill: Color::Red,
        stroke: 1.0,
    };
    pub const THIRD: DotStyle = DotStyle {
        fill: Color::Orange,
        stroke: 1.0,
    };
    pub const RESULT: DotStyle = DotStyle {
        fill: Color::Red,
        stroke: 2.0,
    };
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// `P`, `2P`, `13P` next to a point.
    Label,
    /// `(x, y)` under a label.
    Coordinates,
    /// The ∞ symbol shown when a sum leaves the affine plane.
    Infinity,
    /// Full-width narration text.
    Banner,
}

/// Something the animations can draw on.
///
/// Positions are in field coordinates; implementations own the mapping onto
/// pixels or whatever else they render to.
pub trait RenderSurface {
    /// A saved copy of everything drawn so far.
    type Snapshot: Clone;

    fn draw_line(&mut self, from: Coord, to: Coord, style: &LineStyle);

    fn draw_dot(&mut self, center: Coord, radius: f64, style: &DotStyle);

    fn draw_text(&mut self, text: &str, at: Coord, style: TextStyle);

    fn clear(&mut self);

    fn snapshot(&self) -> Self::Snapshot;

    fn restore(&mut self, snapshot: &Self::Snapshot);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Coord,
        to: Coord,
        style: LineStyle,
    },
    Dot {
        center: Coord,
        radius: f64,
        style: DotStyle,
    },
    Text {
        text: String,
        at: Coord,
        style: TextStyle,
    },
}

/// A surface that keeps the list of draw commands currently on screen.
///
/// Used by the tests and by headless drivers.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clears: usize,
    restores: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Coord, &Coord, &LineStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { from, to, style } => Some((from, to, style)),
            _ => None,
        })
    }

    pub fn dots(&self) -> impl Iterator<Item = (&Coord, &DotStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Dot { center, style, .. } => Some((center, style)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, wanted: &str) -> bool {
        self.texts().any(|text| text == wanted)
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn restores(&self) -> usize {
        self.restores
    }
}

impl RenderSurface for RecordingSurface {
    type Snapshot = Vec<DrawCommand>;

    fn draw_line(&mut self, from: Coord, to: Coord, style: &LineStyle) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            style: *style,
        });
    }

    fn draw_dot(&mut self, center: Coord, radius: f64, style: &DotStyle) {
        self.commands.push(DrawCommand::Dot {
            center,
            radius,
            style: *style,
        });
    }

    fn draw_text(&mut self, text: &str, at: Coord, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            style,
        });
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.commands.clone()
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) {
        self.commands.clone_from(snapshot);
        self.restores += 1;
    }
}
