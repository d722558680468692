use crate::geometry::Dimension;

/// One of the six axis-aligned rotations of a (height, width, length) triple.
///
/// The variant name lists which declared extent ends up on the box's height, width and length
/// axis respectively, e.g. [`Orientation::Lhw`] puts the length on the height axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Hwl,
    Hlw,
    Whl,
    Wlh,
    Lhw,
    Lwh,
}

impl Orientation {
    pub const ALL: [Orientation; 6] = [
        Orientation::Hwl,
        Orientation::Hlw,
        Orientation::Whl,
        Orientation::Wlh,
        Orientation::Lhw,
        Orientation::Lwh,
    ];

    pub fn apply(self, dim: &Dimension) -> Dimension {
        let Dimension {
            height: h,
            width: w,
            length: l,
        } = *dim;
        let (height, width, length) = match self {
            Orientation::Hwl => (h, w, l),
            Orientation::Hlw => (h, l, w),
            Orientation::Whl => (w, h, l),
            Orientation::Wlh => (w, l, h),
            Orientation::Lhw => (l, h, w),
            Orientation::Lwh => (l, w, h),
        };
        Dimension {
            height,
            width,
            length,
        }
    }
}
