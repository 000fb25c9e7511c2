use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use crate::dump::{DumpOptions, SectorDumper};
use crate::error::PeekError;
use crate::geometry::Geometry;
use crate::reader::SectorReader;

/// A disk image stream whose length has been matched against a known
/// geometry, ready to be dumped front to back.
pub struct DiskImage<R: Read> {
    reader: R,
    geometry: &'static Geometry,
}

impl DiskImage<BufReader<File>> {
    /// Open a disk image file.  The geometry is determined from the file
    /// size alone.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<DiskImage<BufReader<File>>> {
        let path = path.as_ref();
        let unreadable = |e: io::Error| -> io::Error {
            log::debug!("cannot open {}: {}", path.display(), e);
            PeekError::Unreadable.into()
        };
        let file = File::open(path).map_err(unreadable)?;
        let length = file.metadata().map_err(unreadable)?.len();
        DiskImage::new(BufReader::new(file), length)
    }
}

impl<R: Read> DiskImage<R> {
    /// Wrap a stream of `length` bytes.  The stream is dropped, closing any
    /// underlying file, if the length matches no known geometry.
    pub fn new(reader: R, length: u64) -> io::Result<DiskImage<R>> {
        let geometry = match Geometry::find_by_size(length) {
            Some(geometry) => geometry,
            None => {
                log::debug!("no geometry is {} bytes long", length);
                return Err(PeekError::InvalidSize.into());
            }
        };
        log::debug!("{} byte image: {}", length, geometry);
        Ok(DiskImage { reader, geometry })
    }

    #[inline]
    pub fn geometry(&self) -> &'static Geometry {
        self.geometry
    }

    /// Dump every sector, in order, to `writer`.  Any error table trailing
    /// the sector data is not read.  Returns the number of sectors written.
    pub fn dump<W: Write>(self, writer: W, options: DumpOptions) -> io::Result<usize> {
        let mut sectors = SectorReader::new(self.reader);
        let mut dumper = SectorDumper::new(writer, options);
        for (index, location) in self.geometry.locations() {
            log::trace!("sector {} at {}", index, location);
            let sector = sectors.read_sector()?;
            dumper.dump(&sector, location)?;
        }
        dumper.flush()?;
        Ok(sectors.sectors_read())
    }
}

/// Open the disk image at `path` and dump it to `writer`.
pub fn dump<P: AsRef<Path>, W: Write>(
    path: P,
    writer: W,
    options: DumpOptions,
) -> io::Result<usize> {
    DiskImage::open(path)?.dump(writer, options)
}
