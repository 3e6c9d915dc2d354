use crate::scale4to8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
	pub red: u8,
	pub green: u8,
	pub blue: u8,
}

impl Color {
	pub const fn new(red: u8, green: u8, blue: u8) -> Color {
		Color {
			red: red,
			green: green,
			blue: blue,
		}
	}

	/// Builds a color from 4 bit channels, each widened with `value << 4`
	pub const fn from_rgb444(red: u8, green: u8, blue: u8) -> Color {
		Color::new(scale4to8(red), scale4to8(green), scale4to8(blue))
	}

	pub const fn gray(level: u8) -> Color {
		Color::new(level, level, level)
	}

	pub fn to_array(&self) -> [u8; 3] {
		[self.red, self.green, self.blue]
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
	/// One palette index per byte
	Indexed,
	/// One intensity level per byte, no palette
	Grayscale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
	pub format: PixelFormat,
	pub palette: Vec<Color>,
	pub indices: Vec<u8>,
	pub width: usize,
	pub height: usize,
}

impl Texture {
	pub fn new(format: PixelFormat, width: usize, height: usize) -> Texture {
		Texture {
			format: format,
			palette: vec![],
			indices: vec![],
			width: width,
			height: height,
		}
	}

	/// Uses the palette and indices to build a pixel array.
	/// Indices outside the palette resolve to black.
	pub fn pixels(&self) -> Vec<Color> {
		match self.format {
			PixelFormat::Indexed => self.indices.iter()
				.map(|i| self.palette.get(*i as usize).copied().unwrap_or_default())
				.collect(),
			PixelFormat::Grayscale => self.indices.iter().map(|l| Color::gray(*l)).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_rgb444() {
		assert_eq!(Color::from_rgb444(0x0D, 0x0A, 0x04), Color::new(0xD0, 0xA0, 0x40));
		assert_eq!(Color::from_rgb444(15, 15, 15).to_array(), [0xF0; 3]);
		assert_eq!(Color::from_rgb444(0x1F, 0x20, 0x3F), Color::new(0xF0, 0x00, 0xF0));
	}

	#[test]
	fn test_pixels() {
		let mut tex = Texture::new(PixelFormat::Indexed, 2, 2);
		tex.palette = vec![Color::gray(0), Color::new(255, 0, 0)];
		tex.indices = vec![0, 1, 1, 0];

		assert_eq!(tex.pixels(), vec![Color::gray(0), Color::new(255, 0, 0), Color::new(255, 0, 0), Color::gray(0)]);

		let mut glyphs = Texture::new(PixelFormat::Grayscale, 2, 1);
		glyphs.indices = vec![0, 255];
		assert_eq!(glyphs.pixels(), vec![Color::gray(0), Color::gray(255)]);
	}
}
