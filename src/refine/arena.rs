use bitvec::vec::BitVec;

use super::BufferId;

/// Allocator for [BufferIds](BufferId); reuses released ids, lowest first, the way GL reuses
/// buffer names.
///
/// # Invariants
///
/// * `BufferId(i + 1)` is live ⟺ `flags[i] == true`
#[derive(Debug, Default, Clone)]
pub struct BufferArena {
    flags: BitVec,
}

impl BufferArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> BufferId {
        let slot = match self.flags.first_zero() {
            Some(i) => {
                self.flags.set(i, true);
                i
            }
            None => {
                self.flags.push(true);
                self.flags.len() - 1
            }
        };
        // slot 0 maps to id 1; id 0 stays reserved
        BufferId(slot as u32 + 1)
    }

    /// Release `id`; return whether it was live.
    pub fn release(&mut self, id: BufferId) -> bool {
        match (id.get() as usize).checked_sub(1) {
            Some(slot) if slot < self.flags.len() => self.flags.replace(slot, false),
            _ => false,
        }
    }

    pub fn is_live(&self, id: BufferId) -> bool {
        match (id.get() as usize).checked_sub(1) {
            Some(slot) => self.flags.get(slot).map(|b| *b).unwrap_or(false),
            None => false,
        }
    }

    /// Number of live ids.
    #[inline]
    pub fn live(&self) -> usize {
        self.flags.count_ones()
    }
}
