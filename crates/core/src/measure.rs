//! Host measurement contract.

/// Width or height the widget reports when the host leaves it free.
pub const DESIRED_SIZE: i32 = 100;

/// Constraint imposed by the host on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The host has no preference.
    Unspecified,
    /// The widget may be at most this large.
    AtMost(i32),
    /// The widget must be exactly this large.
    Exactly(i32),
}

impl MeasureSpec {
    /// Resolve this constraint against the desired size.
    pub fn resolve(self, desired: i32) -> i32 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(size) => desired.min(size),
            Self::Unspecified => desired,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// Measure a bar. Content never influences the result.
pub fn measure(width: MeasureSpec, height: MeasureSpec) -> Size {
    Size {
        width: width.resolve(DESIRED_SIZE),
        height: height.resolve(DESIRED_SIZE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_uses_desired_size() {
        let size = measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size, Size { width: 100, height: 100 });
    }

    #[test]
    fn exact_wins_even_when_larger() {
        let size = measure(MeasureSpec::Exactly(700), MeasureSpec::Exactly(40));
        assert_eq!(size, Size { width: 700, height: 40 });
    }

    #[test]
    fn at_most_caps_desired_size() {
        let size = measure(MeasureSpec::AtMost(64), MeasureSpec::AtMost(300));
        assert_eq!(size, Size { width: 64, height: 100 });
    }
}
