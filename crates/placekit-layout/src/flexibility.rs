//! Flexibility metadata consumed by container layouts

/// Priority for growing or shrinking along one axis.
///
/// `None` marks the axis inflexible: a container never resizes it. Larger
/// values yield first when space is distributed. Leaf layouts only carry this;
/// interpreting it is the container's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Flex(pub Option<i32>);

impl Flex {
    pub const INFLEXIBLE: Flex = Flex(None);
    pub const LOW: Flex = Flex(Some(-1000));
    pub const DEFAULT: Flex = Flex(Some(0));
    pub const HIGH: Flex = Flex(Some(1000));
    pub const MAX: Flex = Flex(Some(i32::MAX));

    pub fn is_flexible(&self) -> bool {
        self.0.is_some()
    }
}

/// Per-axis flexibility of a layout node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Flexibility {
    pub horizontal: Flex,
    pub vertical: Flex,
}

impl Flexibility {
    pub const fn new(horizontal: Flex, vertical: Flex) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Flexible on both axes at default priority.
    pub const FLEXIBLE: Self = Self::new(Flex::DEFAULT, Flex::DEFAULT);

    /// Fixed on both axes.
    pub const INFLEXIBLE: Self = Self::new(Flex::INFLEXIBLE, Flex::INFLEXIBLE);

    /// Yields space before default-priority siblings.
    pub const LOW: Self = Self::new(Flex::LOW, Flex::LOW);

    /// Claims space before default-priority siblings.
    pub const HIGH: Self = Self::new(Flex::HIGH, Flex::HIGH);
}

impl Default for Flexibility {
    fn default() -> Self {
        Self::FLEXIBLE
    }
}
