use clap::Parser;
use fbpatch::patch_file;
use simple_fs::SPath;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fbpatch")]
#[command(about = "Patch flutter-pi sources to render through /dev/fb0", long_about = None)]
#[command(version)]
struct Cli {
	/// Path to the flutter-pi source file to patch in place
	file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt().with_target(false).init();

	let cli = Cli::parse();
	let path = SPath::from_std_path(cli.file)?;

	let report = patch_file(&path)?;

	println!("Patched {path}");
	for item in report.items {
		let status = if item.applied() { "ok" } else { "skip" };
		println!("  - {status:>4}: {}", item.label());
	}

	Ok(())
}
