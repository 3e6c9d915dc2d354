use std::{
	fs::File,
	io::{
		self,
		BufWriter,
		Write
	},
	path::Path
};

use thiserror::Error;

use spk_core::texture::{
	PixelFormat,
	Texture
};

/// Largest palette a PLTE chunk can hold
pub const MAX_PALETTE_SIZE: usize = 256;

#[derive(Debug, Error)]
pub enum PngExportError {
	#[error("PNG encoding error")]
	Encoding {
		#[from]
		source: png::EncodingError,
	},
	#[error("I/O error")]
	IO {
		#[from]
		source: io::Error,
	},
	#[error("Indexed texture has {0} palette entries, expected 1 to 256")]
	PaletteSize(usize),
	#[error("Texture has {actual} pixels, expected {expected}")]
	PixelCount {
		expected: usize,
		actual: usize,
	},
}

/// Encodes a texture as an 8 bit indexed or grayscale PNG
#[cfg(feature = "export")]
pub fn write_png<W>(tex: &Texture, w: W) -> Result<(), PngExportError>
where
	W: Write,
{
	let expected = tex.width * tex.height;
	if tex.indices.len() != expected {
		return Err(PngExportError::PixelCount {
			expected: expected,
			actual: tex.indices.len(),
		});
	}

	let mut encoder = png::Encoder::new(w, tex.width as u32, tex.height as u32);
	encoder.set_depth(png::BitDepth::Eight);

	match tex.format {
		PixelFormat::Indexed => {
			if tex.palette.is_empty() || tex.palette.len() > MAX_PALETTE_SIZE {
				return Err(PngExportError::PaletteSize(tex.palette.len()));
			}

			encoder.set_color(png::ColorType::Indexed);
			encoder.set_palette(tex.palette.iter().flat_map(|c| c.to_array()).collect::<Vec<u8>>());
		},
		PixelFormat::Grayscale => encoder.set_color(png::ColorType::Grayscale),
	}

	let mut writer = encoder.write_header()?;
	writer.write_image_data(&tex.indices)?;
	writer.finish()?;

	Ok(())
}

/// Writes a texture to a PNG file, replacing any existing file
#[cfg(feature = "export")]
pub fn save_png<P>(tex: &Texture, filepath: P) -> Result<(), PngExportError>
where
	P: AsRef<Path>,
{
	let file = File::create(filepath)?;
	let mut w = BufWriter::new(file);
	write_png(tex, &mut w)?;
	w.flush()?;

	Ok(())
}

#[cfg(all(test, feature = "export"))]
mod tests {
	use spk_core::texture::Color;

	use super::*;

	fn decode(data: &[u8]) -> (png::OutputInfo, Vec<u8>, Option<Vec<u8>>) {
		let decoder = png::Decoder::new(data);
		let mut reader = decoder.read_info().unwrap();
		let palette = reader.info().palette.as_ref().map(|p| p.to_vec());
		let mut buf = vec![0; reader.output_buffer_size()];
		let info = reader.next_frame(&mut buf).unwrap();
		buf.truncate(info.buffer_size());
		(info, buf, palette)
	}

	#[test]
	fn test_write_indexed() {
		let mut tex = Texture::new(PixelFormat::Indexed, 4, 2);
		tex.palette = vec![Color::gray(0), Color::new(0xF0, 0x10, 0x20)];
		tex.palette.resize(256, Color::new(0xF0, 0x10, 0x20));
		tex.indices = vec![0, 1, 1, 0, 1, 0, 0, 1];

		let mut out = vec![];
		write_png(&tex, &mut out).unwrap();

		let (info, pixels, palette) = decode(&out);
		assert_eq!((info.width, info.height), (4, 2));
		assert_eq!(info.color_type, png::ColorType::Indexed);
		assert_eq!(pixels, tex.indices);

		let palette = palette.unwrap();
		assert_eq!(palette.len(), 256 * 3);
		assert_eq!(&palette[3..6], &[0xF0, 0x10, 0x20]);
	}

	#[test]
	fn test_write_grayscale() {
		let mut tex = Texture::new(PixelFormat::Grayscale, 8, 1);
		tex.indices = vec![0, 255, 0, 255, 255, 255, 0, 0];

		let mut out = vec![];
		write_png(&tex, &mut out).unwrap();

		let (info, pixels, palette) = decode(&out);
		assert_eq!(info.color_type, png::ColorType::Grayscale);
		assert_eq!(info.bit_depth, png::BitDepth::Eight);
		assert_eq!(pixels, tex.indices);
		assert!(palette.is_none());
	}

	#[test]
	fn test_write_errors() {
		let mut tex = Texture::new(PixelFormat::Indexed, 2, 2);
		tex.indices = vec![0; 4];
		assert!(matches!(write_png(&tex, vec![]), Err(PngExportError::PaletteSize(0))));

		tex.palette = vec![Color::gray(0)];
		tex.indices = vec![0; 3];
		assert!(matches!(write_png(&tex, vec![]),
			Err(PngExportError::PixelCount { expected: 4, actual: 3 })));
	}
}
