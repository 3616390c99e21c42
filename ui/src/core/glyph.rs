//! Outline glyphs (24×24 stroke icons) used by the logo, toggle and tab bar.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Menu,
    Close,
    Layers,
    Code,
    Sparkles,
    Home,
    Briefcase,
    Zap,
    BookOpen,
    User,
}

/// One SVG primitive of a glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Polyline(&'static str),
    Polygon(&'static str),
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32, rx: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
}

pub const VIEW_BOX: &str = "0 0 24 24";

impl Glyph {
    pub const ALL: [Glyph; 10] = [
        Glyph::Menu,
        Glyph::Close,
        Glyph::Layers,
        Glyph::Code,
        Glyph::Sparkles,
        Glyph::Home,
        Glyph::Briefcase,
        Glyph::Zap,
        Glyph::BookOpen,
        Glyph::User,
    ];

    pub fn shapes(self) -> &'static [Shape] {
        match self {
            Glyph::Menu => &[
                Shape::Line { x1: 3.0, y1: 12.0, x2: 21.0, y2: 12.0 },
                Shape::Line { x1: 3.0, y1: 6.0, x2: 21.0, y2: 6.0 },
                Shape::Line { x1: 3.0, y1: 18.0, x2: 21.0, y2: 18.0 },
            ],
            Glyph::Close => &[
                Shape::Line { x1: 18.0, y1: 6.0, x2: 6.0, y2: 18.0 },
                Shape::Line { x1: 6.0, y1: 6.0, x2: 18.0, y2: 18.0 },
            ],
            Glyph::Layers => &[
                Shape::Polygon("12 2 2 7 12 12 22 7 12 2"),
                Shape::Polyline("2 17 12 22 22 17"),
                Shape::Polyline("2 12 12 17 22 12"),
            ],
            Glyph::Code => &[
                Shape::Polyline("16 18 22 12 16 6"),
                Shape::Polyline("8 6 2 12 8 18"),
            ],
            Glyph::Sparkles => &[Shape::Path(
                "M9.813 15.904 9 18.75l-.813-2.846a4.5 4.5 0 0 0-3.09-3.09L2.25 12l2.846-.813a4.5 4.5 0 0 0 3.09-3.09L9 5.25l.813 2.846a4.5 4.5 0 0 0 3.09 3.09L15.75 12l-2.846.813a4.5 4.5 0 0 0-3.09 3.09ZM18.259 8.715 18 9.75l-.259-1.035a3.375 3.375 0 0 0-2.455-2.456L14.25 6l1.036-.259a3.375 3.375 0 0 0 2.455-2.456L18 2.25l.259 1.035a3.375 3.375 0 0 0 2.456 2.456L21.75 6l-1.035.259a3.375 3.375 0 0 0-2.456 2.456Z",
            )],
            Glyph::Home => &[
                Shape::Path("M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
                Shape::Polyline("9 22 9 12 15 12 15 22"),
            ],
            Glyph::Briefcase => &[
                Shape::Rect { x: 2.0, y: 7.0, width: 20.0, height: 14.0, rx: 2.0 },
                Shape::Path("M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"),
            ],
            Glyph::Zap => &[Shape::Polygon("13 2 3 14 12 14 11 22 21 10 12 10 13 2")],
            Glyph::BookOpen => &[
                Shape::Path("M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"),
                Shape::Path("M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"),
            ],
            Glyph::User => &[
                Shape::Path("M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"),
                Shape::Circle { cx: 12.0, cy: 7.0, r: 4.0 },
            ],
        }
    }

    /// Stroke width tuned per icon family.
    pub fn stroke_width(self) -> &'static str {
        match self {
            Glyph::Sparkles => "1.5",
            _ => "2",
        }
    }
}
