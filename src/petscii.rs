use std::fmt;

/// Display approximations for every byte value.  Printable PETSCII
/// characters map onto their nearest ASCII equivalent; control codes and
/// graphics characters show as a dot.  Note that PETSCII swaps the cases
/// relative to ASCII in the unshifted range.
static DISPLAY_TABLE: [u8; 256] = build_display_table();

const fn build_display_table() -> [u8; 256] {
    let mut table = [b'.'; 256];
    let mut i = 0x20;
    while i < 0x60 {
        table[i] = match i {
            0x41..=0x5A => i as u8 + 0x20,
            _ => i as u8,
        };
        i += 1;
    }
    i = 0x61;
    while i <= 0x7A {
        table[i] = i as u8 - 0x20;
        i += 1;
    }
    // Shifted space
    table[0xA0] = b' ';
    i = 0xC1;
    while i <= 0xDA {
        table[i] = i as u8 - 0x80;
        i += 1;
    }
    table
}

/// Return the character used to display a raw byte.
#[inline]
pub fn display_char(byte: u8) -> char {
    DISPLAY_TABLE[byte as usize] as char
}

/// Renders a byte slice as a line of display characters, one per byte.
pub struct PetsciiText<'a>(pub &'a [u8]);

impl<'a> fmt::Display for PetsciiText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.0 {
            write!(f, "{}", display_char(*b))?;
        }
        Ok(())
    }
}
