use bitflags::bitflags;

use spk_core::bit_ext::pixel_bit;

use crate::{
	DatImportError,
	planar_size
};

pub const NUM_PLANES: usize = 4;

bitflags! {
	/// Palette index bit contributed by each plane
	pub struct Planes: u8 {
		const BLUE = 0b0001;
		const GREEN = 0b0010;
		const RED = 0b0100;
		const INTENSITY = 0b1000;
	}
}

/// Order in which the planes of a scanline are stored
pub const PLANE_ORDER: [Planes; NUM_PLANES] = [Planes::BLUE, Planes::GREEN, Planes::RED, Planes::INTENSITY];

/// Deinterleaves four bitplanes into one palette index (0-15) per pixel.
///
/// Each scanline holds `width / 8` bytes of every plane, stored blue, green, red,
/// then intensity. Trailing data past the last scanline is ignored.
pub fn decode(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, DatImportError> {
	planar_size(data, width, height, NUM_PLANES)?;

	let row_bytes = width / 8;
	let mut indices = Vec::with_capacity(width * height);

	if row_bytes == 0 {
		return Ok(indices);
	}

	for line in data.chunks_exact(row_bytes * NUM_PLANES).take(height) {
		let planes = [
			&line[..row_bytes],
			&line[row_bytes..2 * row_bytes],
			&line[2 * row_bytes..3 * row_bytes],
			&line[3 * row_bytes..],
		];

		for x in 0..width {
			let mut index = Planes::empty();

			for (plane, flag) in planes.iter().zip(PLANE_ORDER) {
				if pixel_bit(plane, x) == 1 {
					index |= flag;
				}
			}

			indices.push(index.bits());
		}
	}

	Ok(indices)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_bit_order() {
		// one 8 pixel scanline: blue, green, red, intensity
		let data = [0b1000_0000, 0, 0, 0];
		let indices = decode(&data, 8, 1).unwrap();

		assert_eq!(indices, vec![1, 0, 0, 0, 0, 0, 0, 0]);
	}

	#[test]
	fn test_plane_weights() {
		let data = [0b0100_0001, 0b0010_0001, 0b0001_0001, 0b0000_1001];
		let indices = decode(&data, 8, 1).unwrap();

		assert_eq!(indices, vec![0, 1, 2, 4, 8, 0, 0, 15]);
	}

	#[test]
	fn test_scanline_layout() {
		// 16x2: two bytes per plane row
		let mut data = vec![0u8; 16];
		data[1] = 0x01; // row 0, blue, pixel 15
		data[6] = 0x80; // row 0, intensity, pixel 0
		data[8 + 4] = 0xFF; // row 1, red, pixels 0-7

		let indices = decode(&data, 16, 2).unwrap();

		assert_eq!(indices.len(), 32);
		assert_eq!(indices[0], 8);
		assert_eq!(indices[15], 1);
		assert!(indices[16..24].iter().all(|i| *i == 4));
		assert!(indices[24..].iter().all(|i| *i == 0));
	}

	#[test]
	fn test_index_range() {
		let data: Vec<u8> = (0..320 * 24 / 2).map(|i| (i * 37 + 11) as u8).collect();
		let indices = decode(&data, 320, 24).unwrap();

		assert_eq!(indices.len(), 320 * 24);
		assert!(indices.iter().all(|i| *i <= 15));
	}

	#[test]
	fn test_zeroed() {
		let indices = decode(&[0; 32], 8, 8).unwrap();
		assert_eq!(indices, vec![0; 64]);
	}

	#[test]
	fn test_trailing_data() {
		assert_eq!(decode(&[0xFF; 40], 8, 8).unwrap(), vec![15; 64]);
	}

	#[test]
	fn test_errors() {
		assert!(matches!(decode(&[0; 31], 8, 8),
			Err(DatImportError::DataSize { expected: 32, actual: 31 })));
		assert!(matches!(decode(&[0; 64], 12, 8), Err(DatImportError::Width(12))));
		assert_eq!(decode(&[], 0, 8).unwrap(), Vec::<u8>::new());
	}

	#[test]
	fn test_oversized_dimensions() {
		assert!(matches!(decode(&[0; 8], usize::MAX - 7, 4),
			Err(DatImportError::DataSize { expected: usize::MAX, actual: 8 })));
		assert!(matches!(decode(&[0; 8], 8, usize::MAX),
			Err(DatImportError::DataSize { .. })));
	}
}
