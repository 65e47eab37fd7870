use std::fmt;

/// One step of an addition animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Label,
    Tangent,
    TanPause,
    Sweep,
    Line,
    LinePause,
    Negate,
    InfinitySymbol,
    Done,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Label => "label",
            Phase::Tangent => "tangent",
            Phase::TanPause => "tanPause",
            Phase::Sweep => "sweep",
            Phase::Line => "line",
            Phase::LinePause => "linePause",
            Phase::Negate => "negate",
            Phase::InfinitySymbol => "infiniteSymbol",
            Phase::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which picture an addition needs, fixed when the animation is created.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The sum is affine: sweep the line to -R and reflect.
    Finite,
    /// The operands are negatives of each other: a vertical line to ∞.
    Infinite,
    /// An operand is ∞ and the sum is simply the other operand.
    Identity,
}

const FINITE: [Phase; 7] = [
    Phase::Label,
    Phase::Tangent,
    Phase::TanPause,
    Phase::Sweep,
    Phase::LinePause,
    Phase::Negate,
    Phase::Done,
];

const INFINITE: [Phase; 7] = [
    Phase::Label,
    Phase::Tangent,
    Phase::TanPause,
    Phase::Line,
    Phase::LinePause,
    Phase::InfinitySymbol,
    Phase::Done,
];

const IDENTITY: [Phase; 2] = [Phase::Label, Phase::Done];

impl Variant {
    pub fn phases(&self) -> &'static [Phase] {
        match self {
            Variant::Finite => &FINITE,
            Variant::Infinite => &INFINITE,
            Variant::Identity => &IDENTITY,
        }
    }
}
