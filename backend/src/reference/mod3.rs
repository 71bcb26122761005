/// Portable `x mod 3`.
#[inline(always)]
pub fn mod3_ref(x: u16) -> u16 {
    x % 3
}
