#[cfg(feature = "bit_ext")]
pub mod bit_ext;

pub mod texture;

/// Scales a 4 bit value to 8 bits.
/// Bits above the low nibble are discarded, and the low nibble of the result is always zero.
pub const fn scale4to8(b: u8) -> u8 {
	(b & 0x0F) << 4
}

#[test]
fn test_scale4to8() {
	assert_eq!(scale4to8(0), 0);
	assert_eq!(scale4to8(1), 16);
	assert_eq!(scale4to8(15), 240);
	assert_eq!(scale4to8(0x1F), 240);
}
