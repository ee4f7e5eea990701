//! Morton (Z-order) bit interleaving.
//!
//! `x` supplies the even bits of the code and `y` the odd bits, so cells that are
//! neighbours in 2D stay close in the 1D order.

#[inline]
fn spread_u16(v: u16) -> u32 {
    let mut a = v as u32;
    a = (a | (a << 8)) & 0x00FF_00FF;
    a = (a | (a << 4)) & 0x0F0F_0F0F;
    a = (a | (a << 2)) & 0x3333_3333;
    a = (a | (a << 1)) & 0x5555_5555;
    a
}

#[inline]
fn compact_u32(d: u32) -> u16 {
    let mut a = d & 0x5555_5555;
    a = (a | (a >> 1)) & 0x3333_3333;
    a = (a | (a >> 2)) & 0x0F0F_0F0F;
    a = (a | (a >> 4)) & 0x00FF_00FF;
    a = (a | (a >> 8)) & 0x0000_FFFF;
    a as u16
}

#[inline]
fn spread_u32(v: u32) -> u64 {
    let mut a = v as u64;
    a = (a | (a << 16)) & 0x0000_FFFF_0000_FFFF;
    a = (a | (a << 8)) & 0x00FF_00FF_00FF_00FF;
    a = (a | (a << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    a = (a | (a << 2)) & 0x3333_3333_3333_3333;
    a = (a | (a << 1)) & 0x5555_5555_5555_5555;
    a
}

#[inline]
fn compact_u64(d: u64) -> u32 {
    let mut a = d & 0x5555_5555_5555_5555;
    a = (a | (a >> 1)) & 0x3333_3333_3333_3333;
    a = (a | (a >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    a = (a | (a >> 4)) & 0x00FF_00FF_00FF_00FF;
    a = (a | (a >> 8)) & 0x0000_FFFF_0000_FFFF;
    a = (a | (a >> 16)) & 0x0000_0000_FFFF_FFFF;
    a as u32
}

/// Interleaves two 16-bit coordinates into a 32-bit Morton code.
#[inline]
pub fn encode_u16(x: u16, y: u16) -> u32 {
    spread_u16(x) | (spread_u16(y) << 1)
}

/// Inverse of [`encode_u16`].
#[inline]
pub fn decode_u32(code: u32) -> (u16, u16) {
    (compact_u32(code), compact_u32(code >> 1))
}

/// Interleaves two 32-bit coordinates into a 64-bit Morton code.
#[inline]
pub fn encode_u32(x: u32, y: u32) -> u64 {
    spread_u32(x) | (spread_u32(y) << 1)
}

/// Inverse of [`encode_u32`].
#[inline]
pub fn decode_u64(code: u64) -> (u32, u32) {
    (compact_u64(code), compact_u64(code >> 1))
}
