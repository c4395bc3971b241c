use crate::{PatchReport, Result, patch_with_report};
use simple_fs::{SPath, read_to_string};
use std::fs;
use tracing::debug;

/// Patches the file at `path` in place with the fbdev sequence.
///
/// The file is read fully, transformed in memory, and overwritten in one
/// write, so a failure before the write leaves the file untouched. The
/// overwrite itself is blind: no backup, no temp-file rename, and no conflict
/// detection against concurrent writers.
pub fn patch_file(path: &SPath) -> Result<PatchReport> {
	let original = read_to_string(path).map_err(crate::Error::simple_fs)?;

	let (patched, report) = patch_with_report(&original);
	debug!(
		"patched '{path}' ({} of {} operations applied)",
		report.applied_count(),
		report.items.len()
	);

	fs::write(path, patched).map_err(|err| crate::Error::io_write_file(path.to_string(), err))?;

	Ok(report)
}
