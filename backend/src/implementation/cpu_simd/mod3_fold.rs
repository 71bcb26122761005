/// `x mod 3` by digit folding.
///
/// `256`, `16` and `4` are all congruent to 1 modulo 3, so summing the digits
/// in those bases preserves the residue. After four folds the value is at
/// most 6 and two conditional subtractions finish the reduction.
#[inline(always)]
pub fn mod3_fold(x: u16) -> u16 {
    let mut r: u16 = (x >> 8) + (x & 0xFF);
    r = (r >> 4) + (r & 0xF);
    r = (r >> 2) + (r & 0x3);
    r = (r >> 2) + (r & 0x3);
    r -= 3 * (r >= 3) as u16;
    r -= 3 * (r >= 3) as u16;
    r
}
