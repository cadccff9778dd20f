/// An inclusive longitude interval.
///
/// Unlike most ranges, a reversed interval (`from > to`) is allowed and
/// simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeRange {
    pub from: f64,
    pub to: f64,
}

impl LongitudeRange {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Returns true if `from <= lng <= to`.
    pub fn contains(&self, lng: f64) -> bool {
        self.from <= lng && lng <= self.to
    }

    /// Returns true if no longitude can satisfy the range.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn is_empty(&self) -> bool {
        // NaN bounds count as empty
        !(self.from <= self.to)
    }
}
