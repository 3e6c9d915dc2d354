use spk_core::bit_ext::row_bits;

use crate::{
	DatImportError,
	planar_size
};

pub const GLYPH_ON: u8 = 255;
pub const GLYPH_OFF: u8 = 0;

/// Unpacks a 1 bit per pixel glyph sheet into one intensity byte per pixel
pub fn decode(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, DatImportError> {
	let expected = planar_size(data, width, height, 1)?;

	Ok(row_bits(&data[..expected]).iter()
		.map(|bit| if *bit { GLYPH_ON } else { GLYPH_OFF })
		.collect())
}
