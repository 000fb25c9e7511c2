//! Print the raw sectors of a Commodore 1541 disk image (D64) as a hex dump.
//!
//! Every sector is shown as 16 rows of 16 bytes, labelled with its track and
//! sector, followed by a column of the bytes rendered as PETSCII text.  The
//! disk image is read strictly front to back; no attempt is made to
//! interpret the directory, the BAM, or file chains.
//!
//! Four image layouts are recognised, by file size alone:
//!
//! * 35 tracks (683 sectors), with or without an appended error table.
//! * 40 tracks (768 sectors), with or without an appended error table.
//!
//! Error tables are accommodated but never read.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use d64peek::{DiskImage, DumpOptions};
//! # fn dump_disk() -> io::Result<()> {
//!
//! let image = DiskImage::open("/tmp/disk.d64")?;
//! let options = DumpOptions {
//!     hide_text: false,
//!     hex_locations: true,
//! };
//! image.dump(io::stdout(), options)?;
//! # Ok(())
//! # }
//! ```
//!
//! The first rows of the dump look like this:
//!
//! ```text
//! T=01    00 00 00 00 00 00 00 00  00 00 00 00 00 00 00 00    ................
//! S=00    00 00 00 00 00 00 00 00  00 00 00 00 00 00 00 00    ................
//!         00 00 00 00 00 00 00 00  00 00 00 00 00 00 00 00    ................
//! ```
//!
//! # License
//!
//! D64peek is distributed under the terms of both the MIT license and the
//! Apache License (Version 2.0).

pub mod dump;
pub mod geometry;
pub mod image;
pub mod petscii;
pub mod reader;

mod error;

pub use crate::dump::{DumpOptions, SectorDumper};
pub use crate::error::PeekError;
pub use crate::geometry::{Geometry, Location, BLOCK_SIZE};
pub use crate::image::DiskImage;
pub use crate::reader::{Sector, SectorReader};
