use scene::region::{EncodedSurface, EncodedSurfaceError};

/// Binary PGM (P5) decoder for the encoded index surface.
///
/// The asset is a plain 8-bit grid: row 0 is the north edge, one byte per
/// cell, each byte a region index. Only maxval 255 is supported since the
/// index alphabet is exactly the 8-bit range.
#[derive(Debug)]
pub enum SurfacePgmError {
    UnsupportedMagic { found: String },
    Header { reason: String },
    UnsupportedMaxval { maxval: u32 },
    TruncatedRaster { expected: usize, actual: usize },
    Surface(EncodedSurfaceError),
}

impl std::fmt::Display for SurfacePgmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfacePgmError::UnsupportedMagic { found } => {
                write!(f, "expected P5 magic, found {found:?}")
            }
            SurfacePgmError::Header { reason } => write!(f, "malformed PGM header: {reason}"),
            SurfacePgmError::UnsupportedMaxval { maxval } => {
                write!(f, "unsupported maxval {maxval}, only 255 is supported")
            }
            SurfacePgmError::TruncatedRaster { expected, actual } => {
                write!(f, "raster holds {actual} bytes, expected {expected}")
            }
            SurfacePgmError::Surface(e) => write!(f, "invalid surface grid: {e}"),
        }
    }
}

impl std::error::Error for SurfacePgmError {}

pub fn surface_from_pgm_bytes(bytes: &[u8]) -> Result<EncodedSurface, SurfacePgmError> {
    if bytes.len() < 2 || &bytes[..2] != b"P5" {
        let found = String::from_utf8_lossy(&bytes[..bytes.len().min(2)]).into_owned();
        return Err(SurfacePgmError::UnsupportedMagic { found });
    }

    let mut pos = 2;
    let width = read_header_value(bytes, &mut pos)?;
    let height = read_header_value(bytes, &mut pos)?;
    let maxval = read_header_value(bytes, &mut pos)?;
    if maxval != 255 {
        return Err(SurfacePgmError::UnsupportedMaxval { maxval });
    }

    // Exactly one whitespace byte separates the header from the raster.
    if pos >= bytes.len() || !bytes[pos].is_ascii_whitespace() {
        return Err(SurfacePgmError::Header {
            reason: "missing raster separator".to_string(),
        });
    }
    pos += 1;

    let expected = width as usize * height as usize;
    let raster = &bytes[pos..];
    if raster.len() < expected {
        return Err(SurfacePgmError::TruncatedRaster {
            expected,
            actual: raster.len(),
        });
    }

    EncodedSurface::new(width, height, raster[..expected].to_vec())
        .map_err(SurfacePgmError::Surface)
}

/// Reads the next decimal header field, skipping whitespace and `#` comment
/// lines.
fn read_header_value(bytes: &[u8], pos: &mut usize) -> Result<u32, SurfacePgmError> {
    loop {
        while *pos < bytes.len() && bytes[*pos].is_ascii_whitespace() {
            *pos += 1;
        }
        if *pos < bytes.len() && bytes[*pos] == b'#' {
            while *pos < bytes.len() && bytes[*pos] != b'\n' {
                *pos += 1;
            }
        } else {
            break;
        }
    }

    let start = *pos;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    if start == *pos {
        return Err(SurfacePgmError::Header {
            reason: format!("expected decimal value at byte {start}"),
        });
    }

    // Digits only, so utf8 and u32 conversion can only fail on overflow.
    std::str::from_utf8(&bytes[start..*pos])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| SurfacePgmError::Header {
            reason: format!("header value at byte {start} out of range"),
        })
}
