use bitvec::prelude::*;

/// Views a packed 1 bit per pixel row, leftmost pixel first.
///
/// Bit 7 of each byte holds the leftmost of its eight pixels.
#[inline]
pub fn row_bits(row: &[u8]) -> &BitSlice<u8, Msb0> {
	row.view_bits::<Msb0>()
}

/// Returns the bit of pixel `x` within a packed row as 0 or 1
#[inline]
pub fn pixel_bit(row: &[u8], x: usize) -> u8 {
	row_bits(row)[x] as u8
}

#[test]
fn test_pixel_bit() {
	let row = [0b1000_0000, 0b0000_0001];

	assert_eq!(pixel_bit(&row, 0), 1);
	for x in 1..15 {
		assert_eq!(pixel_bit(&row, x), 0);
	}
	assert_eq!(pixel_bit(&row, 15), 1);
}

#[test]
fn test_row_bits_len() {
	assert_eq!(row_bits(&[0xFF; 5]).len(), 40);
	assert_eq!(row_bits(&[0xA5]).iter_ones().collect::<Vec<_>>(), vec![0, 2, 5, 7]);
}
