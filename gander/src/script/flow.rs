//! Conditional branch tracking for `if`/`elseif`/`else`/`endif`.
//!
//! One [`Frame`] per open `if`.  Invariant: a frame's `active` can only be
//! true while its parent frame (or top level) is active, so checking the
//! innermost frame answers "should this statement execute".

/// Maximum `if` nesting depth.  Exceeding it is an unrecoverable parse error
/// rather than a silently dropped frame, which would mis-scope everything
/// after the overflow.
pub const MAX_IF_DEPTH: usize = 32;

/// Returned by [`FlowStack::push_if`] when nesting exceeds [`MAX_IF_DEPTH`].
#[derive(Debug, PartialEq, Eq)]
pub struct DepthExceeded;

#[derive(Debug, Clone, Copy)]
struct Frame {
    /// The current branch of this `if` chain is executing.
    active: bool,
    /// Some earlier branch of this chain already executed.
    satisfied: bool,
}

/// Stack of open conditional frames.
#[derive(Debug, Default)]
pub struct FlowStack {
    frames: Vec<Frame>,
}

impl FlowStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Should statements at the current position be dispatched?
    pub fn active(&self) -> bool {
        self.frames.last().map_or(true, |f| f.active)
    }

    /// `if(cond)` — push a frame.
    pub fn push_if(&mut self, cond: bool) -> Result<(), DepthExceeded> {
        if self.frames.len() >= MAX_IF_DEPTH {
            return Err(DepthExceeded);
        }
        let active = self.active() && cond;
        self.frames.push(Frame { active, satisfied: active });
        Ok(())
    }

    /// `elseif(cond)` — `cond` is only evaluated when the branch is reachable.
    pub fn handle_elseif(&mut self, cond: impl FnOnce() -> bool) {
        let parent = self.parent_active();
        if let Some(top) = self.frames.last_mut() {
            if parent && !top.satisfied {
                top.active = cond();
                top.satisfied |= top.active;
            } else {
                top.active = false;
            }
        }
        // elseif with no open frame: ignored
    }

    /// `else` — activates iff no earlier branch of the chain ran.
    pub fn handle_else(&mut self) {
        let parent = self.parent_active();
        if let Some(top) = self.frames.last_mut() {
            top.active = parent && !top.satisfied;
            if top.active {
                top.satisfied = true;
            }
        }
    }

    /// `endif` — pop a frame.  An unmatched `endif` is ignored.
    pub fn pop(&mut self) {
        self.frames.pop();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Activation state of the scope enclosing the innermost frame.
    fn parent_active(&self) -> bool {
        match self.frames.len() {
            0 | 1 => true,
            n => self.frames[n - 2].active,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
