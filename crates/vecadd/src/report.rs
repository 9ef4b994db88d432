//! Output formatting.
//!
//! Float results are printed one lane per line with six fractional digits,
//! the same text C's `printf("%f\n", x)` produces for these values:
//!
//! ```text
//! 0.000000
//! 2.000000
//! 4.000000
//! 6.000000
//! ```

use std::io::Write;

use crate::error::Result;

/// Digits after the decimal point in every float line.
pub const FRACTION_DIGITS: usize = 6;

/// Format one float lane.
///
/// ```
/// assert_eq!(vecadd::report::format_lane(14.0), "14.000000");
/// ```
#[must_use]
pub fn format_lane(value: f32) -> String {
    format!("{:.*}", FRACTION_DIGITS, value)
}

/// Write each lane on its own line, lane 0 first.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the writer fails.
pub fn write_lanes<W: Write + ?Sized>(out: &mut W, lanes: &[f32]) -> Result<()> {
    for &lane in lanes {
        writeln!(out, "{}", format_lane(lane))?;
    }
    Ok(())
}

/// Write integer lanes as a single space-separated line, lane 0 first.
///
/// The line ends in a newline with no trailing space.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the writer fails.
pub fn write_dump_line<W: Write + ?Sized>(out: &mut W, lanes: &[i32]) -> Result<()> {
    let mut sep = "";
    for lane in lanes {
        write!(out, "{sep}{lane}")?;
        sep = " ";
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lane() {
        assert_eq!(format_lane(0.0), "0.000000");
        assert_eq!(format_lane(2.0), "2.000000");
        assert_eq!(format_lane(-3.5), "-3.500000");
        assert_eq!(format_lane(0.1), "0.100000");
    }

    #[test]
    fn test_write_lanes() {
        let mut out = Vec::new();
        write_lanes(&mut out, &[0.0, 2.0, 4.0, 6.0]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0.000000\n2.000000\n4.000000\n6.000000\n"
        );
    }

    #[test]
    fn test_write_lanes_empty() {
        let mut out = Vec::new();
        write_lanes(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_dump_line() {
        let mut out = Vec::new();
        write_dump_line(&mut out, &[9, 8, 7, 6, 5, 4, 3, 2]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "9 8 7 6 5 4 3 2\n");
    }

    #[test]
    fn test_write_error_propagates() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let err = write_lanes(&mut Closed, &[1.0]).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
