use spk_core::texture::Color;

use crate::{
	DatImportError,
	format::PaletteRule
};

pub const NUM_COLORS: usize = 16;
pub const ENTRY_SIZE: usize = 4;
pub const BLOCK_SIZE: usize = NUM_COLORS * ENTRY_SIZE;
pub const OUTPUT_SIZE: usize = 256;

pub type Palette = [Color; NUM_COLORS];

const TITLE_RAW: [u8; BLOCK_SIZE] = [
	0x02, 0x03, 0x05, 0x00, 0x0D, 0x0A, 0x04, 0x0C, 0x02, 0x06, 0x06, 0x02, 0x03, 0x09, 0x09, 0x03,
	0x0B, 0x08, 0x03, 0x06, 0x02, 0x07, 0x07, 0x0A, 0x08, 0x06, 0x0D, 0x09, 0x06, 0x04, 0x0B, 0x01,
	0x09, 0x01, 0x00, 0x04, 0x0B, 0x01, 0x00, 0x04, 0x0D, 0x01, 0x00, 0x0C, 0x0F, 0x01, 0x00, 0x0C,
	0x0F, 0x06, 0x04, 0x0C, 0x02, 0x05, 0x06, 0x08, 0x0F, 0x0C, 0x06, 0x0E, 0x0C, 0x0C, 0x0D, 0x0E,
];

const TITLE1_RAW: [u8; BLOCK_SIZE] = [
	0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F, 0x08, 0x08, 0x08, 0x08, 0x0A, 0x0A, 0x0A, 0x07,
	0x0A, 0x0A, 0x0A, 0x07, 0x0B, 0x0B, 0x0B, 0x07, 0x0E, 0x01, 0x01, 0x04, 0x09, 0x09, 0x09, 0x07,
	0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x09, 0x00, 0x00, 0x04, 0x0B, 0x00, 0x00, 0x0C,
	0x08, 0x08, 0x08, 0x08, 0x05, 0x05, 0x05, 0x08, 0x06, 0x06, 0x06, 0x08, 0x08, 0x08, 0x08, 0x08,
];

const TITLE2_RAW: [u8; BLOCK_SIZE] = [
	0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F, 0x06, 0x06, 0x06, 0x08, 0x0A, 0x0A, 0x0A, 0x07,
	0x0A, 0x0A, 0x0A, 0x07, 0x0B, 0x0B, 0x0B, 0x07, 0x0E, 0x01, 0x01, 0x04, 0x09, 0x09, 0x09, 0x07,
	0x01, 0x03, 0x07, 0x00, 0x08, 0x08, 0x08, 0x08, 0x09, 0x00, 0x00, 0x04, 0x0B, 0x00, 0x00, 0x0C,
	0x00, 0x02, 0x0A, 0x01, 0x05, 0x05, 0x05, 0x08, 0x06, 0x06, 0x06, 0x08, 0x08, 0x08, 0x08, 0x07,
];

/// Palettes compiled into the game for the title screens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinPalette {
	Title,
	Title1,
	Title2,
}

impl BuiltinPalette {
	pub fn raw(self) -> &'static [u8; BLOCK_SIZE] {
		match self {
			BuiltinPalette::Title => &TITLE_RAW,
			BuiltinPalette::Title1 => &TITLE1_RAW,
			BuiltinPalette::Title2 => &TITLE2_RAW,
		}
	}

	pub fn palette(self) -> Palette {
		block_palette(self.raw())
	}
}

/// A single 4 byte palette record as stored on disk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
	pub red: u8,
	pub green: u8,
	pub blue: u8,
	/// Carried by the format but not applied to the color
	pub intensity: u8,
}

impl PaletteEntry {
	/// Reads the first 4 bytes of `bytes`
	pub fn from_bytes(bytes: &[u8]) -> PaletteEntry {
		PaletteEntry {
			red: bytes[0],
			green: bytes[1],
			blue: bytes[2],
			intensity: bytes[3],
		}
	}

	pub fn color(&self) -> Color {
		Color::from_rgb444(self.red, self.green, self.blue)
	}
}

/// Converts one block of 16 palette entries
pub fn block_palette(raw: &[u8; BLOCK_SIZE]) -> Palette {
	let mut palette = [Color::default(); NUM_COLORS];

	for (color, entry) in palette.iter_mut().zip(raw.chunks_exact(ENTRY_SIZE)) {
		*color = PaletteEntry::from_bytes(entry).color();
	}

	palette
}

/// Parses one 64 byte block of 16 palette entries
pub fn parse_palette_block(raw: &[u8]) -> Result<Palette, DatImportError> {
	let block: &[u8; BLOCK_SIZE] = raw.try_into()
		.map_err(|_| DatImportError::PaletteSize(raw.len()))?;

	Ok(block_palette(block))
}

/// An evenly spaced 16 step gray ramp from black to white
pub fn grayscale() -> Palette {
	let mut palette = [Color::default(); NUM_COLORS];

	for (i, color) in palette.iter_mut().enumerate() {
		*color = Color::gray((i * 17) as u8);
	}

	palette
}

/// Expands a palette to a full 256 entry table for indexed image output.
/// Slots past the 16th repeat the last color.
pub fn expand_for_output(palette: &Palette) -> Vec<Color> {
	let mut table = Vec::with_capacity(OUTPUT_SIZE);
	table.extend_from_slice(palette);
	table.resize(OUTPUT_SIZE, palette[NUM_COLORS - 1]);
	table
}

/// The palettes stored consecutively in a `PALETTES.DAT` file
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteBank {
	pub palettes: Vec<Palette>,
}

impl PaletteBank {
	pub fn read(data: &[u8]) -> Result<PaletteBank, DatImportError> {
		if data.len() % BLOCK_SIZE != 0 {
			return Err(DatImportError::PaletteSize(data.len()));
		}

		let palettes = data.chunks_exact(BLOCK_SIZE)
			.map(parse_palette_block)
			.collect::<Result<Vec<_>, _>>()?;

		Ok(PaletteBank {
			palettes: palettes,
		})
	}

	pub fn get(&self, index: usize) -> Option<&Palette> {
		self.palettes.get(index)
	}

	pub fn len(&self) -> usize {
		self.palettes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.palettes.is_empty()
	}
}

/// Picks the palette for a bitplane image.
///
/// A missing bank or an index past its end is not an error: the grayscale ramp is
/// returned instead so the image stays legible.
pub fn resolve(rule: PaletteRule, bank: Option<&PaletteBank>) -> Palette {
	match rule {
		PaletteRule::Builtin(builtin) => builtin.palette(),
		PaletteRule::Bank(index) => match bank.and_then(|b| b.get(index)) {
			Some(palette) => *palette,
			None => {
				log::debug!("palette {} unavailable, using grayscale", index);
				grayscale()
			},
		},
	}
}
