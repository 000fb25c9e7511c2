use std::io::{self, Write};

use crate::geometry::{Location, BLOCK_SIZE};
use crate::petscii::PetsciiText;

const COLUMNS: usize = 16;

/// Width of the track/sector label column, e.g. "T=18   ".
const LABEL_WIDTH: usize = 7;

/// Options controlling how each sector is rendered.  These are fixed before
/// the first sector is dumped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DumpOptions {
    /// Omit the PETSCII text column.
    pub hide_text: bool,
    /// Print track and sector numbers in hexadecimal.
    pub hex_locations: bool,
}

/// Writes sectors to an output stream as blocks of 16 rows, separated by
/// blank lines.
pub struct SectorDumper<W: Write> {
    writer: W,
    options: DumpOptions,
    first: bool,
}

impl<W: Write> SectorDumper<W> {
    pub fn new(writer: W, options: DumpOptions) -> SectorDumper<W> {
        SectorDumper {
            writer,
            options,
            first: true,
        }
    }

    fn write_label(&mut self, prefix: char, value: u8) -> io::Result<()> {
        let label = if self.options.hex_locations {
            format!("{}={:02X}", prefix, value)
        } else {
            format!("{}={:02}", prefix, value)
        };
        write!(self.writer, "{:<width$}", label, width = LABEL_WIDTH)
    }

    /// Write a single sector located at `location`.
    pub fn dump(&mut self, sector: &[u8; BLOCK_SIZE], location: Location) -> io::Result<()> {
        if self.first {
            self.first = false;
        } else {
            writeln!(self.writer)?;
        }

        for (i, row) in sector.chunks(COLUMNS).enumerate() {
            match i {
                0 => self.write_label('T', location.track())?,
                1 => self.write_label('S', location.sector())?,
                _ => write!(self.writer, "{:width$}", "", width = LABEL_WIDTH)?,
            }

            for (k, b) in row.iter().enumerate() {
                if k == COLUMNS / 2 {
                    write!(self.writer, " ")?;
                }
                write!(self.writer, " {:02X}", b)?;
            }

            if !self.options.hide_text {
                write!(self.writer, "    {}", PetsciiText(row))?;
            }

            writeln!(self.writer)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(sectors: &[([u8; BLOCK_SIZE], Location)], options: DumpOptions) -> String {
        let mut dumper = SectorDumper::new(Vec::new(), options);
        for (sector, location) in sectors {
            dumper.dump(sector, *location).unwrap();
        }
        String::from_utf8(dumper.into_inner()).unwrap()
    }

    fn counting_sector() -> [u8; BLOCK_SIZE] {
        let mut sector = [0u8; BLOCK_SIZE];
        for (i, b) in sector.iter_mut().enumerate() {
            *b = i as u8;
        }
        sector
    }

    #[test]
    fn test_row_layout() {
        let output = render(&[(counting_sector(), Location(18, 1))], DumpOptions::default());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(
            lines[0],
            "T=18    00 01 02 03 04 05 06 07  08 09 0A 0B 0C 0D 0E 0F    ................"
        );
        assert_eq!(
            lines[1],
            "S=01    10 11 12 13 14 15 16 17  18 19 1A 1B 1C 1D 1E 1F    ................"
        );
        assert_eq!(
            lines[2],
            "        20 21 22 23 24 25 26 27  28 29 2A 2B 2C 2D 2E 2F     !\"#$%&'()*+,-./"
        );
        assert_eq!(
            lines[4],
            "        40 41 42 43 44 45 46 47  48 49 4A 4B 4C 4D 4E 4F    @abcdefghijklmno"
        );
        assert_eq!(
            lines[15],
            "        F0 F1 F2 F3 F4 F5 F6 F7  F8 F9 FA FB FC FD FE FF    ................"
        );
    }

    #[test]
    fn test_hide_text() {
        let options = DumpOptions {
            hide_text: true,
            ..Default::default()
        };
        let output = render(&[(counting_sector(), Location(1, 0))], options);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "T=01    00 01 02 03 04 05 06 07  08 09 0A 0B 0C 0D 0E 0F"
        );
        for line in lines {
            assert_eq!(line.len(), 7 + 16 * 3 + 1);
        }
    }

    #[test]
    fn test_hex_locations() {
        let options = DumpOptions {
            hex_locations: true,
            ..Default::default()
        };
        let output = render(&[([0u8; BLOCK_SIZE], Location(31, 10))], options);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("T=1F    00"));
        assert!(lines[1].starts_with("S=0A    00"));

        let output = render(&[([0u8; BLOCK_SIZE], Location(31, 10))], DumpOptions::default());
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("T=31    00"));
        assert!(lines[1].starts_with("S=10    00"));
    }

    #[test]
    fn test_blank_line_between_sectors() {
        let sectors = [
            ([0xAAu8; BLOCK_SIZE], Location(1, 0)),
            ([0xBBu8; BLOCK_SIZE], Location(1, 1)),
            ([0xCCu8; BLOCK_SIZE], Location(1, 2)),
        ];
        let output = render(&sectors, DumpOptions::default());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3 * 16 + 2);
        assert!(!lines[0].is_empty());
        assert!(lines[16].is_empty());
        assert!(lines[17].starts_with("T=01    BB"));
        assert!(lines[33].is_empty());
        assert!(lines[34].starts_with("T=01    CC"));
        assert!(output.ends_with(" CC    LLLLLLLLLLLLLLLL\n"));
    }
}
