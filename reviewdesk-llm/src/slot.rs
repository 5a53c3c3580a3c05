//! Single-slot guard for report requests.
//!
//! At most one report request may be outstanding. A second attempt while the
//! slot is held is rejected with [`ReportError::Busy`]; nothing is queued.

use crate::error::ReportError;
use crate::report::ReportGenerator;
use reviewdesk_core::Note;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The slot itself. Cheap to clone; clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct ReportSlot {
    busy: Arc<AtomicBool>,
}

impl ReportSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Atomically claim the slot.
    pub fn try_claim(&self) -> Result<SlotClaim, ReportError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ReportError::Busy)?;
        Ok(SlotClaim {
            busy: Arc::clone(&self.busy),
        })
    }

    /// Claim the slot and bind it to a snapshot of notes.
    pub fn begin(&self, notes: Vec<Note>) -> Result<ReportJob, ReportError> {
        let claim = self.try_claim()?;
        Ok(ReportJob {
            notes,
            _claim: claim,
        })
    }
}

/// Proof of holding the slot. Dropping it releases the slot.
#[derive(Debug)]
pub struct SlotClaim {
    busy: Arc<AtomicBool>,
}

impl Drop for SlotClaim {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// A claimed report request over a fixed snapshot of notes.
#[derive(Debug)]
pub struct ReportJob {
    notes: Vec<Note>,
    _claim: SlotClaim,
}

impl ReportJob {
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Run the request. The slot is released when this returns.
    pub async fn run(self, generator: &ReportGenerator) -> Result<String, ReportError> {
        generator.generate(&self.notes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_claim_is_rejected() {
        let slot = ReportSlot::new();
        let claim = slot.try_claim().unwrap();
        assert!(slot.is_busy());
        assert_eq!(slot.try_claim().unwrap_err(), ReportError::Busy);
        drop(claim);
        assert!(!slot.is_busy());
    }

    #[test]
    fn test_claim_released_on_drop_allows_reclaim() {
        let slot = ReportSlot::new();
        {
            let _claim = slot.try_claim().unwrap();
        }
        assert!(slot.try_claim().is_ok());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let slot = ReportSlot::new();
        let other = slot.clone();
        let _claim = slot.try_claim().unwrap();
        assert!(other.is_busy());
        assert!(matches!(other.begin(Vec::new()), Err(ReportError::Busy)));
    }

    #[test]
    fn test_job_holds_slot_until_dropped() {
        let slot = ReportSlot::new();
        let job = slot.begin(Vec::new()).unwrap();
        assert!(job.notes().is_empty());
        assert!(slot.is_busy());
        drop(job);
        assert!(!slot.is_busy());
    }
}
