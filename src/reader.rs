use std::io::{self, Read};

use crate::error::PeekError;
use crate::geometry::BLOCK_SIZE;

/// One raw sector as read from the image.
pub type Sector = [u8; BLOCK_SIZE];

/// Reads consecutive sectors from the front of a stream.  No seeking is
/// performed, so any `Read` implementation will do.
pub struct SectorReader<R: Read> {
    inner: R,
    sectors_read: usize,
}

impl<R: Read> SectorReader<R> {
    pub fn new(inner: R) -> SectorReader<R> {
        SectorReader {
            inner,
            sectors_read: 0,
        }
    }

    /// Read the next sector.  A stream which ends partway through a sector
    /// yields `PeekError::Truncated`.
    pub fn read_sector(&mut self) -> io::Result<Sector> {
        let mut sector = [0u8; BLOCK_SIZE];
        match self.inner.read_exact(&mut sector) {
            Ok(()) => {}
            Err(ref e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                log::debug!("stream ended inside sector {}", self.sectors_read);
                return Err(PeekError::Truncated.into());
            }
            Err(e) => return Err(e),
        }
        self.sectors_read += 1;
        Ok(sector)
    }

    /// Number of complete sectors consumed so far.
    #[inline]
    pub fn sectors_read(&self) -> usize {
        self.sectors_read
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_sequential_reads() {
        let mut data = vec![0x11u8; BLOCK_SIZE];
        data.extend(vec![0x22u8; BLOCK_SIZE]);
        let mut reader = SectorReader::new(Cursor::new(data));
        assert!(reader.read_sector().unwrap().iter().all(|&b| b == 0x11));
        assert!(reader.read_sector().unwrap().iter().all(|&b| b == 0x22));
        assert_eq!(reader.sectors_read(), 2);
        assert_eq!(reader.into_inner().position(), 2 * BLOCK_SIZE as u64);
    }

    #[test]
    fn test_truncated_sector() {
        let mut reader = SectorReader::new(Cursor::new(vec![0u8; BLOCK_SIZE + 10]));
        reader.read_sector().unwrap();
        let e = reader.read_sector().unwrap_err();
        assert!(e == PeekError::Truncated);
        assert_eq!(reader.sectors_read(), 1);
    }

    #[test]
    fn test_empty_stream() {
        let mut reader = SectorReader::new(io::empty());
        assert!(reader.read_sector().unwrap_err() == PeekError::Truncated);
    }

    #[test]
    fn test_trailing_bytes_untouched() {
        // Error tables follow the sector data and are left unread.
        let mut data = vec![0u8; BLOCK_SIZE];
        data.extend(&[1, 2, 3]);
        let mut reader = SectorReader::new(Cursor::new(data));
        reader.read_sector().unwrap();
        assert_eq!(reader.into_inner().position(), BLOCK_SIZE as u64);
    }
}
