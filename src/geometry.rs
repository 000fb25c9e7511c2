use std::fmt;

/// The size of every sector on a 1541 disk.
pub const BLOCK_SIZE: usize = 256;

/// A run of consecutive tracks that share the same number of sectors.  The
/// 1541 writes more sectors on the longer outer tracks.
#[derive(Clone, Copy, Debug)]
struct Zone {
    first_track: u8,
    sectors: u8,
    first_index: usize,
}

// Zones are listed outermost first.  The last zone extends through the
// nonstandard tracks 36-40 found on 40-track images.
#[rustfmt::skip]
static ZONES: [Zone; 4] = [
    Zone { first_track: 1,  sectors: 21, first_index: 0,   }, // 1-17
    Zone { first_track: 18, sectors: 19, first_index: 357, }, // 18-24
    Zone { first_track: 25, sectors: 18, first_index: 490, }, // 25-30
    Zone { first_track: 31, sectors: 17, first_index: 598, }, // 31-40
];

impl Zone {
    fn containing_index(index: usize) -> &'static Zone {
        ZONES
            .iter()
            .rev()
            .find(|zone| index >= zone.first_index)
            .unwrap_or(&ZONES[0])
    }

    fn containing_track(track: u8) -> &'static Zone {
        ZONES
            .iter()
            .rev()
            .find(|zone| track >= zone.first_track)
            .unwrap_or(&ZONES[0])
    }
}

/// A track and sector pair.  Tracks are numbered from 1, sectors from 0.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Location(pub u8, pub u8);

impl Location {
    #[inline]
    pub fn new(track: u8, sector: u8) -> Location {
        Location(track, sector)
    }

    /// Map a linear sector index onto its track and sector.  The index is
    /// not checked against any particular image; callers iterate within
    /// the bounds of a `Geometry`.
    pub fn from_index(index: usize) -> Location {
        let zone = Zone::containing_index(index);
        let offset = index - zone.first_index;
        let sectors = zone.sectors as usize;
        Location(
            zone.first_track + (offset / sectors) as u8,
            (offset % sectors) as u8,
        )
    }

    #[inline]
    pub fn track(&self) -> u8 {
        self.0
    }

    #[inline]
    pub fn sector(&self) -> u8 {
        self.1
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

/// Return the number of sectors on a given track.
pub fn sectors_in_track(track: u8) -> u8 {
    Zone::containing_track(track).sectors
}

/// A `Geometry` specifies the track layout of a disk image, and also whether
/// it has an error table appended or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub tracks: u8,
    pub with_error_table: bool,
}

static GEOMETRY_35: Geometry = Geometry {
    tracks: 35,
    with_error_table: false,
};

static GEOMETRY_35_ERRORS: Geometry = Geometry {
    tracks: 35,
    with_error_table: true,
};

static GEOMETRY_40: Geometry = Geometry {
    tracks: 40,
    with_error_table: false,
};

static GEOMETRY_40_ERRORS: Geometry = Geometry {
    tracks: 40,
    with_error_table: true,
};

static ALLOWED_GEOMETRIES: [&Geometry; 4] = [
    &GEOMETRY_35,
    &GEOMETRY_35_ERRORS,
    &GEOMETRY_40,
    &GEOMETRY_40_ERRORS,
];

impl Geometry {
    /// Given a disk image file size, return the matching geometry.
    pub fn find_by_size(size: u64) -> Option<&'static Geometry> {
        ALLOWED_GEOMETRIES
            .iter()
            .copied()
            .find(|geometry| geometry.size() as u64 == size)
    }

    /// Return the 35-track geometry.
    #[inline]
    pub fn standard(with_error_table: bool) -> &'static Geometry {
        if with_error_table {
            &GEOMETRY_35_ERRORS
        } else {
            &GEOMETRY_35
        }
    }

    /// Return the 40-track geometry.
    #[inline]
    pub fn extended(with_error_table: bool) -> &'static Geometry {
        if with_error_table {
            &GEOMETRY_40_ERRORS
        } else {
            &GEOMETRY_40
        }
    }

    /// Return the total number of sectors on all tracks.
    pub fn sectors(&self) -> usize {
        (1..=self.tracks)
            .map(|track| sectors_in_track(track) as usize)
            .sum()
    }

    /// Return the total number of bytes used to represent a disk image in
    /// this geometry.  The error table is one byte for every sector.
    pub fn size(&self) -> usize {
        let data = self.sectors() * BLOCK_SIZE;
        if self.with_error_table {
            data + self.sectors()
        } else {
            data
        }
    }

    /// Iterate every sector of this geometry in image order, paired with its
    /// linear index.
    pub fn locations(&self) -> impl Iterator<Item = (usize, Location)> {
        (0..self.sectors()).map(|index| (index, Location::from_index(index)))
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} tracks, {} sectors, {}",
            self.tracks,
            self.sectors(),
            if self.with_error_table {
                "with error table"
            } else {
                "no error table"
            }
        )
    }
}
