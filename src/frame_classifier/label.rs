/// Shape classes in the order the network emits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeLabel {
    Circle,
    Square,
    Arc,
    Line,
}

impl ShapeLabel {
    pub const ALL: [ShapeLabel; 4] = [
        ShapeLabel::Circle,
        ShapeLabel::Square,
        ShapeLabel::Arc,
        ShapeLabel::Line,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeLabel::Circle => "circle",
            ShapeLabel::Square => "square",
            ShapeLabel::Arc => "arc",
            ShapeLabel::Line => "line",
        }
    }
}

impl std::fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
