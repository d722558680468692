/// The three axes of a box, in the order extents are declared: height, width, length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Height,
    Width,
    Length,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Height, Axis::Width, Axis::Length];

    pub fn index(self) -> usize {
        match self {
            Axis::Height => 0,
            Axis::Width => 1,
            Axis::Length => 2,
        }
    }
}
