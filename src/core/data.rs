//! Number-like sample conversion + streaming text ingest.

use std::io::{BufRead, BufReader, Read};

use crate::core::error::{InputError, SparkError, ValueError, ValueSlot};

// --- Sample ---

/// A value that may be converted to a finite `f64`.
///
/// Non-finite results (NaN, ±∞) count as failed conversions.
pub trait Sample {
    /// The value as a finite float, or `None` if it is not numeric.
    fn to_f64(&self) -> Option<f64>;

    /// Human-readable rendering used in error messages.
    fn describe(&self) -> String;
}

macro_rules! lossless_sample {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            #[inline]
            fn to_f64(&self) -> Option<f64> {
                Some(f64::from(*self))
            }
            fn describe(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

macro_rules! wide_sample {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            #[inline]
            #[allow(clippy::cast_precision_loss)]
            fn to_f64(&self) -> Option<f64> {
                Some(*self as f64)
            }
            fn describe(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

lossless_sample!(i8, i16, i32, u8, u16, u32);
wide_sample!(i64, i128, isize, u64, u128, usize);

impl Sample for f64 {
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        f64::from(*self).to_f64()
    }
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Sample for [u8] {
    fn to_f64(&self) -> Option<f64> {
        parse_f64(self)
    }
    fn describe(&self) -> String {
        format!("{:?}", String::from_utf8_lossy(self))
    }
}

impl Sample for Vec<u8> {
    fn to_f64(&self) -> Option<f64> {
        self.as_slice().to_f64()
    }
    fn describe(&self) -> String {
        self.as_slice().describe()
    }
}

impl Sample for str {
    fn to_f64(&self) -> Option<f64> {
        self.as_bytes().to_f64()
    }
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl Sample for String {
    fn to_f64(&self) -> Option<f64> {
        self.as_str().to_f64()
    }
    fn describe(&self) -> String {
        self.as_str().describe()
    }
}

impl<T: Sample + ?Sized> Sample for &T {
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        (**self).to_f64()
    }
    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Convert `value`, tagging a failure with `slot`.
///
/// # Errors
/// [`ValueError`] if `value` is not a finite number.
#[inline]
pub fn convert<S: Sample + ?Sized>(value: &S, slot: ValueSlot) -> Result<f64, ValueError> {
    value.to_f64().ok_or_else(|| ValueError {
        slot,
        text: value.describe(),
    })
}

/// Convert a whole sequence, in order. The first failure aborts.
///
/// # Errors
/// [`ValueError`] naming the position of the first unconvertible element.
pub fn collect_samples<I>(series: I) -> Result<Vec<f64>, ValueError>
where
    I: IntoIterator,
    I::Item: Sample,
{
    series
        .into_iter()
        .enumerate()
        .map(|(i, s)| convert(&s, ValueSlot::Sample(i)))
        .collect()
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

/// U+2212 MINUS SIGN, as UTF-8.
const UNICODE_MINUS: &[u8] = "\u{2212}".as_bytes();

fn parse_f64(bytes: &[u8]) -> Option<f64> {
    let bytes = trim(bytes);
    let val = match bytes.strip_prefix(UNICODE_MINUS) {
        Some(rest) => -lexical_core::parse::<f64>(rest).ok()?,
        None => lexical_core::parse::<f64>(bytes).ok()?,
    };
    val.is_finite().then_some(val)
}

#[inline]
fn is_separator(b: u8) -> bool {
    b == b',' || b.is_ascii_whitespace()
}

// --- Streaming ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read whitespace/comma separated samples from `src`.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
/// * [`SparkError::InvalidInput`] on I/O failure or a line that is not UTF-8.
/// * [`SparkError::InvalidValue`] on the first token that is not a number.
pub fn read_samples<R: Read>(src: R) -> Result<Vec<f64>, SparkError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut data = Vec::<f64>::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(InputError::Io)?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if std::str::from_utf8(&buf).is_err() {
            return Err(InputError::NotText { line: line_no }.into());
        }
        let line = trim(&buf);
        if line.is_empty() || line[0] == b'#' {
            continue;
        }

        for token in line.split(|&b| is_separator(b)).filter(|t| !t.is_empty()) {
            data.push(convert(token, ValueSlot::Sample(data.len()))?);
        }
    }
    Ok(data)
}

/// # Errors
/// See [`read_samples`]; opening `path` failing is `InvalidInput` too.
pub fn read_samples_from_path(path: &str) -> Result<Vec<f64>, SparkError> {
    if path == "-" {
        read_samples(std::io::stdin().lock())
    } else {
        let file = std::fs::File::open(path).map_err(InputError::Io)?;
        read_samples(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_convert_directly() {
        assert_eq!(3_i32.to_f64(), Some(3.0));
        assert_eq!(7_u64.to_f64(), Some(7.0));
        assert_eq!(2.5_f32.to_f64(), Some(2.5));
        assert_eq!(f64::NAN.to_f64(), None);
        assert_eq!(f64::NEG_INFINITY.to_f64(), None);
    }

    #[test]
    fn text_is_trimmed_and_parsed() {
        assert_eq!(" 1.25 ".to_f64(), Some(1.25));
        assert_eq!("-3".to_f64(), Some(-3.0));
        assert_eq!("\u{2212}3".to_f64(), Some(-3.0));
        assert_eq!("1e3".to_f64(), Some(1000.0));
        assert_eq!("x".to_f64(), None);
        assert_eq!("".to_f64(), None);
        assert_eq!("nan".to_f64(), None);
    }

    #[test]
    fn failure_names_element_and_position() {
        let err = collect_samples(["1", "x", "3"]).unwrap_err();
        assert_eq!(err.slot, ValueSlot::Sample(1));
        assert_eq!(err.text, "\"x\"");
    }

    #[test]
    fn reader_splits_on_commas_and_whitespace() {
        let text = "# header\n1, 2 3\n\n\t4,5\r\n";
        assert_eq!(
            read_samples(text.as_bytes()).unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn reader_reports_global_sample_position() {
        let err = read_samples("1 2\n3 oops\n".as_bytes()).unwrap_err();
        match err {
            SparkError::InvalidValue(e) => {
                assert_eq!(e.slot, ValueSlot::Sample(3));
                assert_eq!(e.text, "\"oops\"");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_text_input_is_invalid_input() {
        let err = read_samples(&b"1 2\n\xff\xfe\n"[..]).unwrap_err();
        assert!(matches!(
            err,
            SparkError::InvalidInput(InputError::NotText { line: 2 })
        ));
    }

    #[test]
    fn empty_input_is_empty_series() {
        assert!(read_samples(&b""[..]).unwrap().is_empty());
    }
}
