use core::fmt;

/// An item together with the priority it is currently queued under.
///
/// Two nodes are equal when their items are equal; the priority does not take
/// part in equality.
#[derive(Debug, Clone)]
pub struct PriorityNode<T> {
    pub item: T,
    pub priority: f64,
}

impl<T> PriorityNode<T> {
    pub fn new(item: T, priority: f64) -> Self {
        PriorityNode { item, priority }
    }

    /// Splits the node into its item and priority.
    pub fn into_parts(self) -> (T, f64) {
        (self.item, self.priority)
    }
}

impl<T: PartialEq> PartialEq for PriorityNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.item.eq(&other.item)
    }
}

impl<T: Eq> Eq for PriorityNode<T> {}

impl<T: fmt::Display> fmt::Display for PriorityNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.item, self.priority)
    }
}
