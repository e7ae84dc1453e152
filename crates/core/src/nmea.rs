//! GGA position sentence parsing
//!
//! The GNSS receiver hands the sampling loop a framed sentence: the block
//! prefix up to (but excluding) the `*` checksum delimiter. The parser
//! therefore works on checksum-less text and validates fields instead.
//! Only GGA carries the fix-quality indicator this system keys on; other
//! sentence types report no fix.
//!
//! Field layout consumed (`$--GGA,time,lat,N/S,lon,E/W,quality,...`):
//! latitude as `ddmm.mmmm`, longitude as `dddmm.mmmm`, hemisphere letters
//! selecting the sign, quality `0` meaning no fix.

/// Geodetic position extracted from a sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in degrees, south negative.
    pub latitude: f32,
    /// Longitude in degrees, west negative.
    pub longitude: f32,
}

/// Sentence-parsing capability of the GNSS sampling loop.
///
/// `None` means "no fix": malformed text, a non-position sentence, or a
/// receiver that has not acquired satellites yet.
pub trait PositionParser {
    /// Parse one framed (checksum-less) sentence.
    fn parse(&mut self, sentence: &[u8]) -> Option<Position>;
}

/// GGA parser accepting any talker prefix (`$GPGGA`, `$GNGGA`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct GgaParser;

impl GgaParser {
    /// Create a parser.
    pub const fn new() -> Self {
        Self
    }
}

impl PositionParser for GgaParser {
    fn parse(&mut self, sentence: &[u8]) -> Option<Position> {
        let mut fields = sentence.split(|&b| b == b',');

        let header = fields.next()?;
        if header.len() != 6 || header[0] != b'$' || &header[3..6] != b"GGA" {
            return None;
        }

        let _time = fields.next()?;
        let lat_raw = fields.next()?;
        let lat_hem = fields.next()?;
        let lon_raw = fields.next()?;
        let lon_hem = fields.next()?;
        let quality = fields.next()?;

        // Quality 0 (or an empty field) is an explicit "no fix".
        match quality.first() {
            Some(b'0') | None => return None,
            Some(_) => {}
        }

        let latitude = coordinate(lat_raw, 2)?;
        let longitude = coordinate(lon_raw, 3)?;

        let latitude = match lat_hem.first() {
            Some(b'N') => latitude,
            Some(b'S') => -latitude,
            _ => return None,
        };
        let longitude = match lon_hem.first() {
            Some(b'E') => longitude,
            Some(b'W') => -longitude,
            _ => return None,
        };

        Some(Position {
            latitude,
            longitude,
        })
    }
}

/// Convert a `d..dmm.mmmm` coordinate field into decimal degrees.
///
/// `deg_digits` is 2 for latitude, 3 for longitude.
fn coordinate(raw: &[u8], deg_digits: usize) -> Option<f32> {
    if raw.len() <= deg_digits {
        return None;
    }

    let mut degrees: u32 = 0;
    for &b in &raw[..deg_digits] {
        if !b.is_ascii_digit() {
            return None;
        }
        degrees = degrees * 10 + (b - b'0') as u32;
    }

    let minutes = parse_f32(&raw[deg_digits..])?;
    Some(degrees as f32 + minutes / 60.0)
}

/// Parse an unsigned decimal (`mm.mmmm`) from ASCII.
fn parse_f32(raw: &[u8]) -> Option<f32> {
    let mut int_part: u32 = 0;
    let mut frac_part: u32 = 0;
    let mut frac_scale: f32 = 1.0;
    let mut seen_digit = false;
    let mut in_fraction = false;

    for &b in raw {
        match b {
            b'0'..=b'9' => {
                seen_digit = true;
                if in_fraction {
                    frac_part = frac_part * 10 + (b - b'0') as u32;
                    frac_scale *= 10.0;
                } else {
                    int_part = int_part * 10 + (b - b'0') as u32;
                }
            }
            b'.' if !in_fraction => in_fraction = true,
            _ => return None,
        }
    }

    if !seen_digit {
        return None;
    }
    Some(int_part as f32 + frac_part as f32 / frac_scale)
}
