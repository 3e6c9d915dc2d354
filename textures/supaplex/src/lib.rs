pub mod bitplane;
pub mod font;
pub mod format;
pub mod palette;

#[cfg(all(feature = "import", feature = "export"))]
pub mod batch;

use std::io;
use thiserror::Error;

#[cfg(feature = "import")]
use std::{
	fs,
	path::Path
};

#[cfg(feature = "import")]
use spk_core::texture::{
	PixelFormat,
	Texture
};

use format::{
	Decoder,
	FormatDescriptor
};

use palette::{
	Palette,
	PaletteBank
};

#[derive(Debug, Error)]
pub enum DatImportError {
	#[error("Input too short: expected at least {expected} bytes, got {actual}")]
	DataSize {
		expected: usize,
		actual: usize,
	},
	#[error("I/O error")]
	IO {
		#[from]
		source: io::Error,
	},
	#[error("Invalid palette data size: {0} bytes")]
	PaletteSize(usize),
	#[error("Unknown DAT file: {0}")]
	UnknownFormat(String),
	#[error("Image width {0} is not a multiple of 8")]
	Width(usize),
}

/// Checks that `data` holds `planes` packed 1 bit planes of `width` x `height` pixels,
/// returning the number of bytes they occupy
pub(crate) fn planar_size(data: &[u8], width: usize, height: usize, planes: usize)
	-> Result<usize, DatImportError>
{
	if width % 8 != 0 {
		return Err(DatImportError::Width(width));
	}

	let expected = (width / 8).checked_mul(planes)
		.and_then(|n| n.checked_mul(height))
		.unwrap_or(usize::MAX);

	if data.len() < expected {
		return Err(DatImportError::DataSize {
			expected: expected,
			actual: data.len(),
		});
	}

	Ok(expected)
}

/// Parses the contents of a `PALETTES.DAT` file
pub fn load_palette_bank(data: &[u8]) -> Result<PaletteBank, DatImportError> {
	PaletteBank::read(data)
}

/// Decodes the raw contents of a DAT file.
///
/// Bitplane images come back with their resolved 16 color palette, glyph sheets
/// with none.
pub fn decode_image(format: &FormatDescriptor, data: &[u8], bank: Option<&PaletteBank>)
	-> Result<(Vec<u8>, Option<Palette>), DatImportError>
{
	match format.decoder {
		Decoder::Bitplane4(rule) => {
			let indices = bitplane::decode(data, format.width, format.height)?;
			Ok((indices, Some(palette::resolve(rule, bank))))
		},
		Decoder::Font1Bit => Ok((font::decode(data, format.width, format.height)?, None)),
	}
}

/// Reads a DAT file, picking its format from the file name
#[cfg(feature = "import")]
pub fn read_dat<P>(filepath: P, bank: Option<&PaletteBank>) -> Result<Texture, DatImportError>
where
	P: AsRef<Path>,
{
	let filepath = filepath.as_ref();
	let name = filepath.file_name()
		.map(|n| n.to_string_lossy().into_owned())
		.unwrap_or_default();
	let format = format::resolve_format(&name)?;

	let input = fs::read(filepath)?;
	to_texture(format, &input, bank)
}

/// Decodes DAT contents into a texture ready for image output
#[cfg(feature = "import")]
pub fn to_texture(format: &FormatDescriptor, data: &[u8], bank: Option<&PaletteBank>)
	-> Result<Texture, DatImportError>
{
	let (indices, pal) = decode_image(format, data, bank)?;

	let mut texture = match pal {
		Some(ref p) => {
			let mut tex = Texture::new(PixelFormat::Indexed, format.width, format.height);
			tex.palette = palette::expand_for_output(p);
			tex
		},
		None => Texture::new(PixelFormat::Grayscale, format.width, format.height),
	};

	texture.indices = indices;
	Ok(texture)
}
