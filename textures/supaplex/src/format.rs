use crate::{
	DatImportError,
	palette::BuiltinPalette
};

/// Where a bitplane image gets its colors from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteRule {
	/// A palette compiled into the game
	Builtin(BuiltinPalette),
	/// An entry of `PALETTES.DAT`
	Bank(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoder {
	/// Four interleaved bitplanes forming a 16 color indexed image
	Bitplane4(PaletteRule),
	/// A single bitplane of font glyphs, without colors
	Font1Bit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatDescriptor {
	pub name: &'static str,
	pub width: usize,
	pub height: usize,
	pub decoder: Decoder,
}

impl FormatDescriptor {
	const fn bitplane(name: &'static str, width: usize, height: usize, rule: PaletteRule) -> FormatDescriptor {
		FormatDescriptor {
			name: name,
			width: width,
			height: height,
			decoder: Decoder::Bitplane4(rule),
		}
	}

	const fn font(name: &'static str, width: usize, height: usize) -> FormatDescriptor {
		FormatDescriptor {
			name: name,
			width: width,
			height: height,
			decoder: Decoder::Font1Bit,
		}
	}

	/// File name of the converted image, e.g. `menu.png` for `MENU.DAT`
	pub fn output_name(&self) -> String {
		let stem = self.name.strip_suffix(".DAT").unwrap_or(self.name);
		format!("{}.png", stem.to_ascii_lowercase())
	}
}

/// Every DAT file with known dimensions, in default extraction order
pub static FORMATS: [FormatDescriptor; 12] = [
	FormatDescriptor::bitplane("MENU.DAT", 320, 200, PaletteRule::Bank(1)),
	FormatDescriptor::bitplane("CONTROLS.DAT", 320, 200, PaletteRule::Bank(2)),
	FormatDescriptor::bitplane("BACK.DAT", 320, 200, PaletteRule::Bank(1)),
	FormatDescriptor::bitplane("GFX.DAT", 320, 200, PaletteRule::Bank(1)),
	FormatDescriptor::bitplane("TITLE.DAT", 320, 200, PaletteRule::Builtin(BuiltinPalette::Title)),
	FormatDescriptor::bitplane("TITLE1.DAT", 320, 200, PaletteRule::Builtin(BuiltinPalette::Title1)),
	FormatDescriptor::bitplane("TITLE2.DAT", 320, 200, PaletteRule::Builtin(BuiltinPalette::Title2)),
	FormatDescriptor::bitplane("PANEL.DAT", 320, 24, PaletteRule::Bank(1)),
	FormatDescriptor::bitplane("MOVING.DAT", 320, 462, PaletteRule::Bank(1)),
	FormatDescriptor::bitplane("FIXED.DAT", 640, 16, PaletteRule::Bank(1)),
	FormatDescriptor::font("CHARS6.DAT", 512, 8),
	FormatDescriptor::font("CHARS8.DAT", 512, 8),
];

/// Looks up a DAT file by name, ignoring case
pub fn resolve_format(name: &str) -> Result<&'static FormatDescriptor, DatImportError> {
	FORMATS.iter()
		.find(|f| f.name.eq_ignore_ascii_case(name))
		.ok_or_else(|| DatImportError::UnknownFormat(name.to_string()))
}
