//! Memory-mapped file store.
//!
//! `MmapStore` maps a single index file into the process address space and
//! serves whole-block transfers as bounds-checked slice copies. The file is
//! sized once at create time (`num_blocks * block_size`); the index reuses
//! blocks through its freelist rather than growing the file, so no remap
//! path exists and page references never dangle.
//!
//! The file format is nothing but concatenated blocks:
//!
//! ```text
//! Offset 0:              Block 0 (superblock)
//! Offset block_size:     Block 1 (root)
//! Offset 2*block_size:   Block 2
//! ...
//! ```
//!
//! `sync` flushes the map; there is no fsync contract on individual writes.

use std::fs::OpenOptions;
use std::path::Path;

use memmap2::MmapMut;

use crate::error::{IndexError, Result};

use super::{check_transfer, BlockStore};

#[derive(Debug)]
pub struct MmapStore {
    mmap: MmapMut,
    block_size: usize,
    num_blocks: u32,
}

impl MmapStore {
    pub fn create<P: AsRef<Path>>(path: P, block_size: usize, num_blocks: u32) -> Result<Self> {
        if block_size == 0 || num_blocks == 0 {
            return Err(IndexError::Size {
                expected: 1,
                actual: 0,
            });
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.set_len(block_size as u64 * num_blocks as u64)?;

        // SAFETY: the file was just created with exclusive read/write access
        // and sized to a whole number of blocks. The map's lifetime is tied
        // to MmapStore and every access is bounds-checked in check_transfer.
        let mmap = unsafe { MmapMut::map_mut(&file)? };

        Ok(Self {
            mmap,
            block_size,
            num_blocks,
        })
    }

    pub fn open<P: AsRef<Path>>(path: P, block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(IndexError::Size {
                expected: 1,
                actual: 0,
            });
        }

        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let file_size = file.metadata()?.len();

        if file_size == 0 || file_size % block_size as u64 != 0 {
            return Err(IndexError::Size {
                expected: block_size,
                actual: (file_size % block_size as u64) as usize,
            });
        }

        // SAFETY: same argument as in create; the length check above
        // guarantees the map covers a whole number of blocks.
        let mmap = unsafe { MmapMut::map_mut(&file)? };

        Ok(Self {
            mmap,
            block_size,
            num_blocks: (file_size / block_size as u64) as u32,
        })
    }

    pub fn sync(&self) -> Result<()> {
        self.mmap.flush()?;
        Ok(())
    }
}

impl BlockStore for MmapStore {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn num_blocks(&self) -> u32 {
        self.num_blocks
    }

    fn read_block(&self, n: u32, buf: &mut [u8]) -> Result<()> {
        check_transfer(n, self.num_blocks, buf.len(), self.block_size)?;
        let offset = n as usize * self.block_size;
        buf.copy_from_slice(&self.mmap[offset..offset + self.block_size]);
        Ok(())
    }

    fn write_block(&mut self, n: u32, buf: &[u8]) -> Result<()> {
        check_transfer(n, self.num_blocks, buf.len(), self.block_size)?;
        let offset = n as usize * self.block_size;
        self.mmap[offset..offset + self.block_size].copy_from_slice(buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_sizes_file_to_block_multiple() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("idx.blk");

        let store = MmapStore::create(&path, 64, 10).unwrap();
        assert_eq!(store.block_size(), 64);
        assert_eq!(store.num_blocks(), 10);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 640);
    }

    #[test]
    fn writes_persist_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("idx.blk");

        let mut store = MmapStore::create(&path, 32, 4).unwrap();
        store.write_block(3, &[0x5Au8; 32]).unwrap();
        store.sync().unwrap();
        drop(store);

        let store = MmapStore::open(&path, 32).unwrap();
        assert_eq!(store.num_blocks(), 4);
        let mut buf = [0u8; 32];
        store.read_block(3, &mut buf).unwrap();
        assert_eq!(buf, [0x5Au8; 32]);
    }

    #[test]
    fn open_rejects_misaligned_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("idx.blk");
        std::fs::write(&path, [0u8; 100]).unwrap();

        let err = MmapStore::open(&path, 64).unwrap_err();
        assert!(matches!(err, crate::error::IndexError::Size { .. }));
    }

    #[test]
    fn open_rejects_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("idx.blk");
        std::fs::write(&path, []).unwrap();

        assert!(MmapStore::open(&path, 64).is_err());
    }

    #[test]
    fn out_of_range_block_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("idx.blk");
        let mut store = MmapStore::create(&path, 32, 4).unwrap();

        assert!(store.write_block(4, &[0u8; 32]).is_err());
    }
}
