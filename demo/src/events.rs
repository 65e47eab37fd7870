use curve::Point;

/// What a demonstration reports back to its driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DemoEvent {
    /// `multiple` times the base has just been drawn as `point`.
    Step { multiple: u64, point: Point },
    /// The demonstration (or one round of it) ended on `point`.
    Finished(Point),
}
