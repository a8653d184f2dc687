//! Decimal number printing.
//!
//! The two-digit printer is the classic `DD\n` helper: tens digit, ones
//! digit, newline, plus a NUL that is built but never sent. Wider values go
//! through [`u64_to_decimal`] / [`i64_to_decimal`].

use slopcrt_abi::Fd;

use crate::arch::NATIVE;
use crate::config;
use crate::platform::Platform;
use crate::sys;

/// Bytes transmitted by the two-digit printer.
pub const TWO_DIGIT_LEN: usize = 3;

/// Buffer size that fits any `i64`, a newline and a NUL.
pub const DECIMAL_BUF_LEN: usize = 22;

#[inline(always)]
const fn ascii_digit(d: i32) -> u8 {
    (b'0' as i32).wrapping_add(d) as u8
}

/// Format `x` as `[tens, ones, '\n', 0]`.
///
/// `x` must be in `0..=99`; debug builds assert it.
#[inline]
pub fn two_digit(x: i32) -> [u8; 4] {
    debug_assert!((0..=99).contains(&x), "two_digit: {} is out of range", x);
    two_digit_unchecked(x)
}

/// [`two_digit`] without the range check.
///
/// Division truncates toward zero, so out-of-range input yields the same
/// wrapped bytes as `(x / 10) % 10 + '0'` and `x % 10 + '0'` do in C: `123`
/// prints as `23`, and negative values produce characters below `'0'`.
pub const fn two_digit_unchecked(x: i32) -> [u8; 4] {
    [ascii_digit((x / 10) % 10), ascii_digit(x % 10), b'\n', 0]
}

/// Write the two-digit form of `x` to `fd` through `platform`.
///
/// Exactly [`TWO_DIGIT_LEN`] bytes are requested. The result is ignored: a
/// short or failed write is not reported.
pub fn print_on<P: Platform + ?Sized>(platform: &P, fd: Fd, x: i32) {
    let buf = two_digit(x);
    let _ = sys::write_on(platform, fd, &buf[..TWO_DIGIT_LEN]);
}

pub fn print_to(fd: Fd, x: i32) {
    print_on(&NATIVE, fd, x);
}

/// Print `x` to the configured output descriptor (stdout by default).
pub fn print(x: i32) {
    print_to(config::config().output_fd, x);
}

/// Write the decimal digits of `value` into `buffer`, NUL terminated.
///
/// Returns the digit count, or 0 (with `buffer[0] = 0` when possible) if the
/// digits and terminator do not fit.
pub fn u64_to_decimal(value: u64, buffer: &mut [u8]) -> usize {
    let Some(capacity) = buffer.len().checked_sub(1) else {
        return 0;
    };

    let mut digits = [0u8; 20];
    let mut count = 0;
    let mut v = value;
    loop {
        digits[count] = b'0' + (v % 10) as u8;
        count += 1;
        v /= 10;
        if v == 0 {
            break;
        }
    }

    if count > capacity {
        buffer[0] = 0;
        return 0;
    }

    for (slot, digit) in buffer.iter_mut().zip(digits[..count].iter().rev()) {
        *slot = *digit;
    }
    buffer[count] = 0;
    count
}

/// Signed variant of [`u64_to_decimal`]; negative values get a leading `-`.
pub fn i64_to_decimal(value: i64, buffer: &mut [u8]) -> usize {
    if value >= 0 {
        return u64_to_decimal(value as u64, buffer);
    }
    if buffer.len() < 2 {
        if let Some(first) = buffer.first_mut() {
            *first = 0;
        }
        return 0;
    }

    buffer[0] = b'-';
    let len = u64_to_decimal(value.unsigned_abs(), &mut buffer[1..]);
    if len == 0 {
        buffer[0] = 0;
        return 0;
    }
    len + 1
}

/// Write the full decimal form of `value` and a newline to `fd`.
pub fn print_decimal_on<P: Platform + ?Sized>(platform: &P, fd: Fd, value: i64) {
    let mut buf = [0u8; DECIMAL_BUF_LEN];
    let len = i64_to_decimal(value, &mut buf[..DECIMAL_BUF_LEN - 1]);
    buf[len] = b'\n';
    let _ = sys::write_on(platform, fd, &buf[..=len]);
}

pub fn print_decimal_to(fd: Fd, value: i64) {
    print_decimal_on(&NATIVE, fd, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Recorder;
    use std::vec;

    #[test]
    fn every_value_in_range_formats_as_two_digits() {
        for x in 0..=99 {
            let expected = [b'0' + (x / 10) as u8, b'0' + (x % 10) as u8, b'\n', 0];
            assert_eq!(two_digit(x), expected, "x = {}", x);
        }
    }

    #[test]
    fn examples() {
        assert_eq!(&two_digit(42)[..TWO_DIGIT_LEN], b"42\n");
        assert_eq!(&two_digit(0)[..TWO_DIGIT_LEN], b"00\n");
        assert_eq!(&two_digit(99)[..TWO_DIGIT_LEN], b"99\n");
        assert_eq!(&two_digit(7)[..TWO_DIGIT_LEN], b"07\n");
    }

    #[test]
    fn out_of_range_follows_truncating_arithmetic() {
        assert_eq!(two_digit_unchecked(123), *b"23\n\0");
        assert_eq!(two_digit_unchecked(100), *b"00\n\0");
        assert_eq!(two_digit_unchecked(-5), [b'0', b'0' - 5, b'\n', 0]);
        assert_eq!(two_digit_unchecked(-42), [b'0' - 4, b'0' - 2, b'\n', 0]);
        let _ = two_digit_unchecked(i32::MIN);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn out_of_range_asserts_in_debug() {
        let _ = two_digit(100);
    }

    #[test]
    fn printer_sends_exactly_three_bytes_to_the_given_fd() {
        let rec = Recorder::new();
        print_on(&rec, Fd::new(4), 42);
        assert_eq!(rec.writes(), vec![(Fd::new(4), b"42\n".to_vec())]);
        assert_eq!(rec.request_count(), 1);
    }

    #[test]
    fn printer_is_deterministic() {
        let rec = Recorder::new();
        print_on(&rec, Fd::STDOUT, 58);
        print_on(&rec, Fd::STDOUT, 58);
        let writes = rec.writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0], writes[1]);
    }

    #[test]
    fn printer_ignores_write_failures() {
        let rec = Recorder::new().with_responses(&[-9, 1]);
        print_on(&rec, Fd::STDOUT, 10);
        print_on(&rec, Fd::STDOUT, 11);
        assert_eq!(rec.bytes_for(Fd::STDOUT), b"1");
        assert_eq!(rec.request_count(), 2);
    }

    #[test]
    fn unsigned_decimal() {
        let mut buf = [0xffu8; 24];
        assert_eq!(u64_to_decimal(0, &mut buf), 1);
        assert_eq!(&buf[..2], b"0\0");
        assert_eq!(u64_to_decimal(u64::MAX, &mut buf), 20);
        assert_eq!(&buf[..21], b"18446744073709551615\0");
    }

    #[test]
    fn signed_decimal_including_min() {
        let mut buf = [0u8; 24];
        let len = i64_to_decimal(-1234, &mut buf);
        assert_eq!(&buf[..len], b"-1234");
        let len = i64_to_decimal(i64::MIN, &mut buf);
        assert_eq!(&buf[..len], b"-9223372036854775808");
    }

    #[test]
    fn decimal_reports_truncation() {
        let mut buf = [0xffu8; 3];
        assert_eq!(u64_to_decimal(123, &mut buf), 0);
        assert_eq!(buf[0], 0);
        assert_eq!(u64_to_decimal(12, &mut buf), 2);
        assert_eq!(i64_to_decimal(-12, &mut buf), 0);
        assert_eq!(u64_to_decimal(1, &mut []), 0);
    }

    #[test]
    fn decimal_printer_appends_newline() {
        let rec = Recorder::new();
        print_decimal_on(&rec, Fd::STDOUT, -90210);
        print_decimal_on(&rec, Fd::STDOUT, i64::MAX);
        assert_eq!(rec.bytes_for(Fd::STDOUT), b"-90210\n9223372036854775807\n");
    }
}
