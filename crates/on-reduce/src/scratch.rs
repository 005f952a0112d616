use on_core::CompId;

/// Per-pass bookkeeping, dropped when the pass ends.
///
/// `removed` slots are folded into a new component and go away at
/// compaction; `fresh` slots hold a component this pass just synthesized and
/// are not used as seeds again.
#[derive(Debug)]
pub(crate) struct Scratch {
    removed: Vec<bool>,
    fresh: Vec<bool>,
}

impl Scratch {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            removed: vec![false; len],
            fresh: vec![false; len],
        }
    }

    pub(crate) fn remove(&mut self, id: CompId) {
        self.removed[id.usize()] = true;
    }

    pub(crate) fn mark_fresh(&mut self, id: CompId) {
        self.fresh[id.usize()] = true;
    }

    /// Still a candidate seed in this pass.
    pub(crate) fn is_open(&self, id: CompId) -> bool {
        !self.removed[id.usize()] && !self.fresh[id.usize()]
    }

    pub(crate) fn removed(&self) -> &[bool] {
        &self.removed
    }
}
