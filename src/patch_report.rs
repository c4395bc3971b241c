#[derive(Debug, Clone)]
pub struct PatchReport {
	pub items: Vec<OpStatus>,
}

/// Outcome of one operation of the sequence, in application order.
///
/// `applied: false` is the silent no-op case: the anchor or span was absent
/// and the text passed through that operation unchanged.
#[derive(Debug, Clone)]
pub struct OpStatus {
	pub label: &'static str,
	pub applied: bool,
}

impl PatchReport {
	pub fn fully_applied(&self) -> bool {
		self.items.iter().all(|item| item.applied)
	}

	pub fn applied_count(&self) -> usize {
		self.items.iter().filter(|item| item.applied).count()
	}
}

impl OpStatus {
	pub fn label(&self) -> &'static str {
		self.label
	}

	pub fn applied(&self) -> bool {
		self.applied
	}
}
