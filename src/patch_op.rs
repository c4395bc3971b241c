use crate::{OpStatus, PatchReport, Result};
use regex::{NoExpand, Regex};
use tracing::{debug, warn};

/// Line-comment marker prefixed to disabled statements.
const DISABLE_PREFIX: &str = "// ";

/// One step of a patch sequence.
///
/// Descriptors are immutable configuration: built once at startup, never
/// mutated, and applied in order over the source text.
#[derive(Debug, Clone)]
pub enum PatchOp {
	/// Replaces the first occurrence of `needle` with `replacement`.
	///
	/// Insert-after and insert-before are both expressed this way: the
	/// replacement re-states the needle verbatim and carries the new content
	/// on the appropriate side of it.
	Replace {
		label: &'static str,
		needle: &'static str,
		replacement: &'static str,
	},

	/// Replaces the first span matched by `pattern` (start marker through end
	/// marker inclusive) with `replacement`, discarding whatever was between
	/// the markers. See [`PatchOp::span`].
	SpanReplace {
		label: &'static str,
		pattern: Regex,
		replacement: &'static str,
	},

	/// Comments out every occurrence of the literal statement `stmt` by
	/// prefixing it with `// `. The statement text stays in the file.
	Disable {
		label: &'static str,
		stmt: &'static str,
	},
}

impl PatchOp {
	/// Builds a `SpanReplace` from a literal marker pair.
	///
	/// The markers are escaped; only the lazy dot-all span between them is a
	/// wildcard, so the first start marker and the nearest following end
	/// marker bound exactly what gets discarded.
	pub fn span(
		label: &'static str,
		start_marker: &str,
		end_marker: &str,
		replacement: &'static str,
	) -> Result<Self> {
		let pattern = Regex::new(&format!(
			"(?s){}.*?{}",
			regex::escape(start_marker),
			regex::escape(end_marker)
		))?;

		Ok(PatchOp::SpanReplace {
			label,
			pattern,
			replacement,
		})
	}

	pub fn label(&self) -> &'static str {
		match self {
			PatchOp::Replace { label, .. } => label,
			PatchOp::SpanReplace { label, .. } => label,
			PatchOp::Disable { label, .. } => label,
		}
	}

	/// Applies this operation, returning the next version of the text and
	/// whether the anchor matched.
	///
	/// A missing anchor or span is a silent no-op: the text passes through
	/// unchanged, and the miss is surfaced only through the returned status
	/// and a `warn!`.
	pub fn apply(&self, content: String) -> (String, OpStatus) {
		let (content, applied) = match self {
			PatchOp::Replace { needle, replacement, .. } => {
				if content.contains(needle) {
					(content.replacen(needle, replacement, 1), true)
				} else {
					(content, false)
				}
			}

			PatchOp::SpanReplace { pattern, replacement, .. } => {
				if pattern.is_match(&content) {
					let next = pattern.replacen(&content, 1, NoExpand(replacement)).into_owned();
					(next, true)
				} else {
					(content, false)
				}
			}

			PatchOp::Disable { stmt, .. } => {
				if content.contains(stmt) {
					(content.replace(stmt, &format!("{DISABLE_PREFIX}{stmt}")), true)
				} else {
					(content, false)
				}
			}
		};

		if applied {
			debug!("applied op '{}'", self.label());
		} else {
			warn!("anchor not found for op '{}', text left unchanged", self.label());
		}

		(
			content,
			OpStatus {
				label: self.label(),
				applied,
			},
		)
	}
}

/// Runs `ops` in sequence over `content`.
///
/// Each operation consumes the text produced by the previous one, so order is
/// a hard dependency when a later anchor is introduced by an earlier
/// replacement.
pub fn apply_ops(ops: &[PatchOp], content: impl Into<String>) -> (String, PatchReport) {
	let mut content = content.into();
	let mut items = Vec::with_capacity(ops.len());

	for op in ops {
		let (next, status) = op.apply(content);
		content = next;
		items.push(status);
	}

	(content, PatchReport { items })
}

// region:    --- Tests


// endregion: --- Tests
