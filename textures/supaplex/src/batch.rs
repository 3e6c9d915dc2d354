//! Converts a directory of DAT files to PNG images in one pass.

use std::{
	fs,
	io,
	path::{
		Path,
		PathBuf
	}
};

use thiserror::Error;

use spk_textures_png::{
	PngExportError,
	save_png
};

use crate::{
	DatImportError,
	format::{
		FORMATS,
		FormatDescriptor,
		resolve_format
	},
	load_palette_bank,
	palette::PaletteBank,
	to_texture
};

pub const PALETTES_FILE: &str = "PALETTES.DAT";

#[derive(Debug, Error)]
pub enum BatchError {
	#[error("Palette file not found: {}", .0.display())]
	PaletteFile(PathBuf),
	#[error("Could not load palette file {}: {source}", .path.display())]
	Palette {
		path: PathBuf,
		source: DatImportError,
	},
}

/// Failure to convert one DAT file; never aborts the batch
#[derive(Debug, Error)]
pub enum ConvertError {
	#[error("{0}")]
	Export(#[from] PngExportError),
	#[error("{0}")]
	Import(#[from] DatImportError),
	#[error("I/O error: {0}")]
	IO(#[from] io::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
	pub dat_dir: PathBuf,
	pub output_dir: PathBuf,
	/// Explicit `PALETTES.DAT`; looked up in `dat_dir` when absent
	pub palette_file: Option<PathBuf>,
	/// DAT file names to convert; every known file when absent
	pub files: Option<Vec<String>>,
}

impl Default for BatchConfig {
	fn default() -> BatchConfig {
		BatchConfig {
			dat_dir: PathBuf::from("."),
			output_dir: PathBuf::from("dat_png"),
			palette_file: None,
			files: None,
		}
	}
}

#[derive(Debug)]
pub enum Outcome {
	Written(PathBuf),
	Unknown,
	Missing(PathBuf),
	Failed(ConvertError),
}

#[derive(Debug)]
pub struct FileReport {
	pub name: String,
	pub outcome: Outcome,
}

#[derive(Debug, Default)]
pub struct BatchReport {
	pub files: Vec<FileReport>,
}

impl BatchReport {
	/// Number of images written
	pub fn written(&self) -> usize {
		self.files.iter().filter(|f| matches!(f.outcome, Outcome::Written(_))).count()
	}

	/// A batch succeeds when at least one image was written
	pub fn succeeded(&self) -> bool {
		self.written() > 0
	}

	pub fn outcome(&self, name: &str) -> Option<&Outcome> {
		self.files.iter().find(|f| f.name.eq_ignore_ascii_case(name)).map(|f| &f.outcome)
	}
}

/// Loads the palette bank for a batch.
///
/// A missing or malformed explicit palette file is fatal. The implicit
/// `PALETTES.DAT` is optional; if it cannot be used the bank-based images fall
/// back to grayscale.
pub fn load_bank(config: &BatchConfig) -> Result<Option<PaletteBank>, BatchError> {
	if let Some(ref path) = config.palette_file {
		if !path.is_file() {
			return Err(BatchError::PaletteFile(path.clone()));
		}

		return read_bank(path)
			.map(Some)
			.map_err(|e| BatchError::Palette {
				path: path.clone(),
				source: e,
			});
	}

	let candidate = config.dat_dir.join(PALETTES_FILE);
	if !candidate.is_file() {
		log::debug!("no {} in {}", PALETTES_FILE, config.dat_dir.display());
		return Ok(None);
	}

	match read_bank(&candidate) {
		Ok(bank) => Ok(Some(bank)),
		Err(e) => {
			log::warn!("Ignoring {}: {}", candidate.display(), e);
			Ok(None)
		},
	}
}

fn read_bank(path: &Path) -> Result<PaletteBank, DatImportError> {
	let bank = load_palette_bank(&fs::read(path)?)?;
	log::debug!("loaded {} palettes from {}", bank.len(), path.display());
	Ok(bank)
}

/// Converts every selected DAT file, recording the outcome of each
pub fn run(config: &BatchConfig) -> Result<BatchReport, BatchError> {
	let bank = load_bank(config)?;

	let names: Vec<String> = match config.files {
		Some(ref files) => files.iter().map(|f| f.to_ascii_uppercase()).collect(),
		None => FORMATS.iter().map(|f| f.name.to_string()).collect(),
	};

	let mut report = BatchReport::default();

	for name in names {
		let outcome = match resolve_format(&name) {
			Ok(format) => convert_one(config, format, bank.as_ref()),
			Err(_) => {
				log::warn!("Skipping unknown DAT file: {}", name);
				Outcome::Unknown
			},
		};

		report.files.push(FileReport {
			name: name,
			outcome: outcome,
		});
	}

	if !report.succeeded() {
		log::error!("No files converted");
	}

	Ok(report)
}

fn convert_one(config: &BatchConfig, format: &FormatDescriptor, bank: Option<&PaletteBank>) -> Outcome {
	let dat_path = config.dat_dir.join(format.name);
	if !dat_path.is_file() {
		log::warn!("Missing {}, skipping", dat_path.display());
		return Outcome::Missing(dat_path);
	}

	let out_path = config.output_dir.join(format.output_name());

	match convert(format, &dat_path, &out_path, bank) {
		Ok(()) => {
			log::info!("Wrote {}", out_path.display());
			Outcome::Written(out_path)
		},
		Err(e) => {
			log::error!("Failed to convert {}: {}", format.name, e);
			Outcome::Failed(e)
		},
	}
}

/// Decodes one DAT file and writes it as a PNG image
pub fn convert(format: &FormatDescriptor, dat_path: &Path, out_path: &Path, bank: Option<&PaletteBank>)
	-> Result<(), ConvertError>
{
	let data = fs::read(dat_path)?;
	let texture = to_texture(format, &data, bank)?;

	if let Some(parent) = out_path.parent() {
		fs::create_dir_all(parent)?;
	}

	save_png(&texture, out_path)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_report() {
		let mut report = BatchReport::default();
		assert!(!report.succeeded());

		report.files.push(FileReport {
			name: "LEVELS.DAT".to_string(),
			outcome: Outcome::Unknown,
		});
		report.files.push(FileReport {
			name: "MENU.DAT".to_string(),
			outcome: Outcome::Written(PathBuf::from("menu.png")),
		});

		assert_eq!(report.written(), 1);
		assert!(report.succeeded());
		assert!(matches!(report.outcome("levels.dat"), Some(Outcome::Unknown)));
		assert!(report.outcome("GFX.DAT").is_none());
	}

	#[test]
	fn test_missing_palette_file() {
		let config = BatchConfig {
			palette_file: Some(PathBuf::from("no/such/PALETTES.DAT")),
			..BatchConfig::default()
		};

		assert!(matches!(load_bank(&config), Err(BatchError::PaletteFile(_))));
		assert!(matches!(run(&config), Err(BatchError::PaletteFile(_))));
	}
}
