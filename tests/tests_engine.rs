//! Engine-level property tests: ordering, no-op, span, and disablement
//! behavior against a minimal synthetic flutter-pi source.

use assertables::{assert_contains, assert_not_contains};
use fbpatch::{PatchOp, apply_ops, patch, patch_ops, patch_with_report};

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

const SOURCE: &str = include_str!("data/flutter-pi-min.c");

#[test]
fn test_engine_repatch_is_not_idempotent() -> Result<()> {
	// -- Exec
	let once = patch(SOURCE);
	let twice = patch(&once);

	// -- Check
	// The anchors (headers, main signature) survive in the patched output, so
	// a second run matches them again and duplicates the injected content.
	assert_ne!(once, twice, "re-running the sequence should keep injecting");
	assert_eq!(once.matches("// FBDEV HACK START").count(), 1);
	assert_eq!(twice.matches("// FBDEV HACK START").count(), 2);

	Ok(())
}

#[test]
fn test_engine_init_call_before_block_lands_wrong() -> Result<()> {
	// -- Setup & Fixtures
	// Swap the block insertion and the init-call insertion.
	let mut reordered: Vec<PatchOp> = patch_ops().to_vec();
	reordered.swap(1, 2);

	// -- Exec
	let expected = patch(SOURCE);
	let (out, _report) = apply_ops(&reordered, SOURCE);

	// -- Check
	// In the correct order the init call directly follows the signature. With
	// the order swapped the block insertion pushes it away from the signature.
	let adjacency = "int main(int argc, char **argv) {\n    init_fbdev();";
	assert_contains!(expected, adjacency);
	assert_not_contains!(out, adjacency);
	assert_ne!(out, expected);

	Ok(())
}

#[test]
fn test_engine_span_replace_discards_delimited_region() -> Result<()> {
	// -- Setup & Fixtures
	let op = PatchOp::span("rewrite block", "START", "END", "START\nfresh content\nEND")?;
	let input = "before\nSTART\nold line one\nold line two\nEND\nafter\n";

	// -- Exec
	let (out, status) = op.apply(input.to_string());

	// -- Check
	assert!(status.applied());
	assert_contains!(out, "START\nfresh content\nEND");
	assert_not_contains!(out, "old line one");
	assert_not_contains!(out, "old line two");
	assert_contains!(out, "before\n");
	assert_contains!(out, "\nafter\n");

	Ok(())
}

#[test]
fn test_engine_missing_anchors_pass_through_unchanged() -> Result<()> {
	// -- Setup & Fixtures
	let input = "nothing in here matches any anchor\nnot even close\n";

	// -- Exec
	let (out, report) = patch_with_report(input);

	// -- Check
	assert_eq!(out, input, "text must pass through byte-for-byte");
	assert_eq!(report.applied_count(), 0);
	assert!(!report.fully_applied());
	for item in &report.items {
		assert!(!item.applied(), "op '{}' should not have applied", item.label());
	}

	Ok(())
}

#[test]
fn test_engine_disablement_prefixes_instead_of_deleting() -> Result<()> {
	// -- Exec
	let out = patch(SOURCE);

	// -- Check
	for stmt in ["ok = setup_paths(&flutterpi);", "ok = setup_config(&flutterpi);"] {
		let occurrences: Vec<usize> = out.match_indices(stmt).map(|(idx, _)| idx).collect();
		assert!(!occurrences.is_empty(), "'{stmt}' should survive as a comment");
		for idx in occurrences {
			assert!(
				out[..idx].ends_with("// "),
				"'{stmt}' at byte {idx} should be comment-prefixed"
			);
		}
	}

	Ok(())
}
