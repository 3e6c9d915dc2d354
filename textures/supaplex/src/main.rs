use std::{
	path::PathBuf,
	process::ExitCode
};

use clap::{
	ArgAction,
	Parser
};

use spk_textures_supaplex::batch::{
	self,
	BatchConfig
};

/// Extract Supaplex DAT graphics into PNG files
#[derive(Debug, Parser)]
#[command(name = "spdat2png", version)]
struct Args {
	/// Directory containing the .DAT files
	#[arg(long, default_value = ".")]
	dat_dir: PathBuf,

	/// Destination directory for the PNG files
	#[arg(long, default_value = "dat_png")]
	output_dir: PathBuf,

	/// Path to PALETTES.DAT. Defaults to PALETTES.DAT in the DAT directory;
	/// without one, images other than the title screens come out in grayscale.
	#[arg(long)]
	palette_file: Option<PathBuf>,

	/// Specific DAT files to extract. Defaults to every known file present in the DAT directory.
	#[arg(long, num_args = 0..)]
	files: Option<Vec<String>>,

	/// More log output (-v debug, -vv trace)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

impl Args {
	fn to_config(&self) -> BatchConfig {
		BatchConfig {
			dat_dir: self.dat_dir.clone(),
			output_dir: self.output_dir.clone(),
			palette_file: self.palette_file.clone(),
			files: self.files.clone().filter(|f| !f.is_empty()),
		}
	}
}

fn main() -> ExitCode {
	let args = Args::parse();

	let level = match args.verbose {
		0 => "info",
		1 => "debug",
		_ => "trace",
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
		.format_timestamp(None)
		.init();

	match batch::run(&args.to_config()) {
		Ok(report) if report.succeeded() => ExitCode::SUCCESS,
		Ok(_) => ExitCode::FAILURE,
		Err(e) => {
			log::error!("{}", e);
			ExitCode::FAILURE
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_args() {
		let args = Args::parse_from(["spdat2png", "--dat-dir", "res", "--files", "menu.dat", "panel.dat", "-vv"]);
		let config = args.to_config();

		assert_eq!(config.dat_dir, PathBuf::from("res"));
		assert_eq!(config.output_dir, PathBuf::from("dat_png"));
		assert_eq!(config.files, Some(vec!["menu.dat".to_string(), "panel.dat".to_string()]));
		assert_eq!(args.verbose, 2);
	}

	#[test]
	fn test_empty_files() {
		let args = Args::parse_from(["spdat2png", "--files"]);
		assert_eq!(args.to_config(), BatchConfig::default());
	}
}
