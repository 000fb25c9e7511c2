extern crate clap;
extern crate d64peek;

use clap::{App, AppSettings, Arg};
use std::ffi::OsStr;
use std::io::{self, BufWriter, Write};
use std::process;

use d64peek::{DiskImage, DumpOptions, PeekError};

// Possible exit codes
static EXIT_FAILURE: i32 = 1;

/// Error messages are prefixed with the program name in bold.
static ERROR_PREFIX: &str = "\x1b[1md64peek:\x1b[0m";

fn main() {
    env_logger::init();

    // Unrecognized flags are accepted as positional values and otherwise
    // ignored; only the last positional value names the disk image.
    let matches = App::new("d64peek")
        .about(
            "Prints the contents of a Commodore 1541 disk image (D64 file) to the \
             standard output.",
        )
        .setting(AppSettings::AllowLeadingHyphen)
        .setting(AppSettings::DisableVersion)
        .arg(
            Arg::with_name("hide_petscii")
                .short("p")
                .help("Do not display PETSCII data."),
        )
        .arg(
            Arg::with_name("hex")
                .short("x")
                .help("Display track and sector values in hexadecimal."),
        )
        .arg(Arg::with_name("FILE").multiple(true))
        .get_matches();

    let options = DumpOptions {
        hide_text: matches.is_present("hide_petscii"),
        hex_locations: matches.is_present("hex"),
    };
    let diskimage = matches.values_of_os("FILE").and_then(|values| values.last());

    if let Err(e) = run(diskimage, options) {
        // A closed pipe leaves nowhere to report to.
        if e.kind() != io::ErrorKind::BrokenPipe {
            let _ = writeln!(io::stdout(), "{} {}", ERROR_PREFIX, e);
        }
        process::exit(EXIT_FAILURE);
    }
}

fn run(diskimage: Option<&OsStr>, options: DumpOptions) -> io::Result<()> {
    let diskimage = diskimage.ok_or_else(|| io::Error::from(PeekError::NoInputFile))?;
    let image = DiskImage::open(diskimage)?;
    let stdout = io::stdout();
    let count = image.dump(BufWriter::new(stdout.lock()), options)?;
    log::debug!("dumped {} sectors", count);
    Ok(())
}
