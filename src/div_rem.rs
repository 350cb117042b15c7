use num_traits::PrimInt;

/// Remainder that always takes the sign of the divisor, so that for a positive divisor the
/// result lies in `[0, divisor)`. The `%` operator truncates towards zero and gives negative
/// remainders for negative dividends, which is never what we want when counting weekdays.
pub(crate) trait RemFloor: Sized {
    fn rem_floor(&self, other: Self) -> Self;
}

impl<T: PrimInt> RemFloor for T {
    fn rem_floor(&self, other: Self) -> Self {
        let zero = Self::zero();
        let r = *self % other;
        if (r < zero && other > zero) || (r > zero && other < zero) {
            r + other
        } else {
            r
        }
    }
}
