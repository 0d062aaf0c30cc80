//! Heap-backed block store.
//!
//! `MemoryStore` keeps the whole block array in one `Vec<u8>` and tracks the
//! allocator's notify hooks in a bitmap-free count, which is all the tests
//! need to assert freelist accounting. Blocks are zero-filled at
//! construction, matching a freshly formatted device.

use crate::error::Result;

use super::{check_transfer, BlockStore};

#[derive(Debug)]
pub struct MemoryStore {
    block_size: usize,
    num_blocks: u32,
    data: Vec<u8>,
    allocated: Vec<bool>,
}

impl MemoryStore {
    pub fn new(block_size: usize, num_blocks: u32) -> Self {
        Self {
            block_size,
            num_blocks,
            data: vec![0u8; block_size * num_blocks as usize],
            allocated: vec![false; num_blocks as usize],
        }
    }

    /// Number of blocks the allocator has claimed and not released.
    pub fn allocated_count(&self) -> usize {
        self.allocated.iter().filter(|a| **a).count()
    }

    pub fn is_allocated(&self, n: u32) -> bool {
        self.allocated.get(n as usize).copied().unwrap_or(false)
    }
}

impl BlockStore for MemoryStore {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn num_blocks(&self) -> u32 {
        self.num_blocks
    }

    fn read_block(&self, n: u32, buf: &mut [u8]) -> Result<()> {
        check_transfer(n, self.num_blocks, buf.len(), self.block_size)?;
        let offset = n as usize * self.block_size;
        buf.copy_from_slice(&self.data[offset..offset + self.block_size]);
        Ok(())
    }

    fn write_block(&mut self, n: u32, buf: &[u8]) -> Result<()> {
        check_transfer(n, self.num_blocks, buf.len(), self.block_size)?;
        let offset = n as usize * self.block_size;
        self.data[offset..offset + self.block_size].copy_from_slice(buf);
        Ok(())
    }

    fn notify_allocate(&mut self, n: u32) {
        if let Some(slot) = self.allocated.get_mut(n as usize) {
            *slot = true;
        }
    }

    fn notify_deallocate(&mut self, n: u32) {
        if let Some(slot) = self.allocated.get_mut(n as usize) {
            *slot = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;

    #[test]
    fn new_store_is_zero_filled() {
        let store = MemoryStore::new(32, 4);
        let mut buf = [0xFFu8; 32];
        store.read_block(3, &mut buf).unwrap();
        assert_eq!(buf, [0u8; 32]);
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut store = MemoryStore::new(16, 4);
        let block = [0xABu8; 16];
        store.write_block(2, &block).unwrap();

        let mut buf = [0u8; 16];
        store.read_block(2, &mut buf).unwrap();
        assert_eq!(buf, block);

        store.read_block(1, &mut buf).unwrap();
        assert_eq!(buf, [0u8; 16]);
    }

    #[test]
    fn read_past_end_is_buffer_error() {
        let store = MemoryStore::new(16, 4);
        let mut buf = [0u8; 16];
        let err = store.read_block(4, &mut buf).unwrap_err();
        assert!(matches!(err, IndexError::Buffer { .. }));
    }

    #[test]
    fn partial_block_write_is_size_error() {
        let mut store = MemoryStore::new(16, 4);
        let err = store.write_block(0, &[0u8; 8]).unwrap_err();
        assert!(matches!(err, IndexError::Size { .. }));
    }

    #[test]
    fn notify_hooks_track_allocation() {
        let mut store = MemoryStore::new(16, 4);
        assert_eq!(store.allocated_count(), 0);

        store.notify_allocate(2);
        store.notify_allocate(3);
        assert_eq!(store.allocated_count(), 2);
        assert!(store.is_allocated(2));

        store.notify_deallocate(2);
        assert_eq!(store.allocated_count(), 1);
        assert!(!store.is_allocated(2));
    }
}
