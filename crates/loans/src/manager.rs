use crate::loan_id::LoanId;

/// Hands out loan ids in increasing order.
///
/// Only the last id handed out is tracked (and persisted); ids are never
/// reused, so once [`LoanId::MAX`] has been issued the manager is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoanIdManager {
    last_used: Option<LoanId>,
}

impl LoanIdManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume after `last_used`, as read back from storage.
    pub fn resume_after(last_used: LoanId) -> Self {
        Self {
            last_used: Some(last_used),
        }
    }

    pub fn last_used(&self) -> Option<LoanId> {
        self.last_used
    }

    /// The id the next call to [`LoanIdManager::next_available_id`] returns.
    pub fn peek(&self) -> Option<LoanId> {
        match self.last_used {
            None => Some(LoanId::MIN),
            Some(last) => last.next(),
        }
    }

    /// Issues the next id, or `None` when every id has been used.
    pub fn next_available_id(&mut self) -> Option<LoanId> {
        let next = self.peek()?;
        self.last_used = Some(next);
        Some(next)
    }
}
