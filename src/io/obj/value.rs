//! Text formatting of values written into an obj document
//!
//! Floating-point values use the C `%.Ng` "general" notation so that the
//! output matches what other obj producers write, and so that the default
//! precision of 17 significant digits round-trips every `f64` exactly.

use std::fmt::Write;

use crate::types::{Color, Vector2, Vector3, Vector4};

/// Number of significant decimal digits needed to round-trip an `f64`
/// through text and back (`max_digits10`)
pub const ROUND_TRIP_DIGITS_F64: usize = 17;

/// Number of significant decimal digits needed to round-trip an `f32`
pub const ROUND_TRIP_DIGITS_F32: usize = 9;

/// Most significant digits in the exact decimal expansion of any `f64`.
/// Past this every further digit is a trailing zero that `%g` drops.
const MAX_SIGNIFICANT_DIGITS: usize = 767;

/// A value that can be written into an obj document.
///
/// `precision` is the document's current number of significant digits; only
/// floating-point data is affected by it.
pub trait ObjValue {
    /// Append the text form of this value to `out`
    fn write_value(&self, out: &mut String, precision: usize);
}

impl<T: ObjValue + ?Sized> ObjValue for &T {
    fn write_value(&self, out: &mut String, precision: usize) {
        (**self).write_value(out, precision)
    }
}

impl ObjValue for f64 {
    fn write_value(&self, out: &mut String, precision: usize) {
        write_float(out, *self, precision)
    }
}

impl ObjValue for f32 {
    fn write_value(&self, out: &mut String, precision: usize) {
        write_float(out, *self as f64, precision)
    }
}

macro_rules! impl_obj_value_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl ObjValue for $t {
                fn write_value(&self, out: &mut String, _precision: usize) {
                    // Writing into a String cannot fail
                    let _ = write!(out, "{}", self);
                }
            }
        )*
    };
}

impl_obj_value_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl ObjValue for bool {
    fn write_value(&self, out: &mut String, _precision: usize) {
        out.push(if *self { '1' } else { '0' });
    }
}

impl ObjValue for str {
    fn write_value(&self, out: &mut String, _precision: usize) {
        out.push_str(self);
    }
}

impl ObjValue for String {
    fn write_value(&self, out: &mut String, _precision: usize) {
        out.push_str(self);
    }
}

impl ObjValue for Vector2 {
    fn write_value(&self, out: &mut String, precision: usize) {
        write_components(out, &[self.x, self.y], precision)
    }
}

impl ObjValue for Vector3 {
    fn write_value(&self, out: &mut String, precision: usize) {
        write_components(out, &[self.x, self.y, self.z], precision)
    }
}

impl ObjValue for Vector4 {
    fn write_value(&self, out: &mut String, precision: usize) {
        write_components(out, &[self.x, self.y, self.z, self.w], precision)
    }
}

/// Vertex data with two or three components, written as a position or
/// texture coordinate record
pub trait Coordinates: ObjValue + Copy {
    /// Number of components written
    const DIMENSION: usize;
}

impl Coordinates for Vector2 {
    const DIMENSION: usize = 2;
}

impl Coordinates for Vector3 {
    const DIMENSION: usize = 3;
}

impl ObjValue for Color {
    fn write_value(&self, out: &mut String, _precision: usize) {
        let _ = write!(out, "{} {} {} {}", self.r, self.g, self.b, self.a);
    }
}

/// Space separated float components
fn write_components(out: &mut String, components: &[f64], precision: usize) {
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_float(out, *c, precision);
    }
}

/// Format `value` with `precision` significant digits into a new string
pub fn format_float(value: f64, precision: usize) -> String {
    let mut out = String::new();
    write_float(&mut out, value, precision);
    out
}

/// Append `value` formatted like C's `%.{precision}g`.
///
/// A precision of 0 is treated as 1. Precisions above 767 give the same
/// text as 767.
pub fn write_float(out: &mut String, value: f64, precision: usize) {
    let precision = precision.clamp(1, MAX_SIGNIFICANT_DIGITS);

    if value.is_nan() {
        out.push_str("nan");
        return;
    }
    if value.is_infinite() {
        out.push_str(if value < 0.0 { "-inf" } else { "inf" });
        return;
    }
    if value == 0.0 {
        out.push_str(if value.is_sign_negative() { "-0" } else { "0" });
        return;
    }

    // The decimal exponent after rounding to `precision` digits picks the notation
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        out.push_str(&scientific);
        return;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        out.push_str(trim_fraction(mantissa));
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        let _ = write!(out, "{:02}", exponent.unsigned_abs());
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        let fixed = format!("{:.*}", decimals, value);
        out.push_str(trim_fraction(&fixed));
    }
}

/// Strip trailing zeros after a decimal point, and the point itself
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
