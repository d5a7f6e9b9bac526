use std::time::{SystemTime, UNIX_EPOCH};

use crate::player::PlayerId;

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Hands out timestamp-derived player ids.
///
/// Ids are the current time in milliseconds, bumped past the last id issued
/// and every id already in the roster, so two adds in the same millisecond or
/// a clock that went backwards still yield a fresh id.
pub struct IdGenerator {
    clock: fn() -> u64,
    last: PlayerId,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::with_clock(now_millis)
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self { clock, last: 0 }
    }

    pub fn next(&mut self, existing: impl IntoIterator<Item = PlayerId>) -> PlayerId {
        let existing: Vec<PlayerId> = existing.into_iter().collect();
        let floor = existing.iter().copied().fold(self.last, PlayerId::max);
        let id = match floor.checked_add(1) {
            Some(above) => (self.clock)().max(above),
            // Nothing is left above the largest id; fill the lowest gap.
            None => smallest_unused(&existing),
        };
        self.last = id;
        id
    }
}

fn smallest_unused(existing: &[PlayerId]) -> PlayerId {
    let mut ids = existing.to_vec();
    ids.sort_unstable();
    ids.dedup();

    let mut candidate: PlayerId = 1;
    for id in ids {
        if id < candidate {
            continue;
        }
        if id != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}
