use std::collections::HashMap;

use crate::types::TodoId;

/// Sequence numbers for time writes, one slot per record.
///
/// Local time is authoritative; a server response only gets applied when it
/// answers the latest write issued for its record. Anything older arrived out
/// of order and is dropped.
#[derive(Debug, Default)]
pub struct SyncLedger {
    next_seq: u64,
    latest: HashMap<TodoId, u64>,
}

impl SyncLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new write for `id` and return its sequence number.
    pub fn issue(&mut self, id: &TodoId) -> u64 {
        self.next_seq += 1;
        self.latest.insert(id.clone(), self.next_seq);
        self.next_seq
    }

    /// Whether a response for write `seq` is still current. The slot is freed
    /// once its latest write has been answered.
    pub fn accept(&mut self, id: &TodoId, seq: u64) -> bool {
        match self.latest.get(id) {
            Some(&latest) if latest == seq => {
                self.latest.remove(id);
                true
            }
            _ => false,
        }
    }

    /// Drop any pending write for a record that no longer exists.
    pub fn forget(&mut self, id: &TodoId) {
        self.latest.remove(id);
    }

    pub fn in_flight(&self, id: &TodoId) -> bool {
        self.latest.contains_key(id)
    }
}
