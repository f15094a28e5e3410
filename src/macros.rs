/// Parses `$text` as `$ty`, mapping a failure to
/// `ParseError::InvalidNumericField` tagged with `$name`.
macro_rules! parse_field {
    ($text:expr, $ty:ty, $name:expr) => {
        match $text.parse::<$ty>() {
            Ok(v) => v,
            Err(_) => {
                return Err($crate::err::ParseError::InvalidNumericField(
                    $name,
                    $text.to_string(),
                ))
            }
        }
    };
}

// Like `parse_field!` but additionally rejects NaN and infinities, which
// `f64::from_str` happily accepts ("inf", "NaN").
macro_rules! parse_finite {
    ($text:expr, $name:expr) => {{
        let v = parse_field!($text, f64, $name);
        if !v.is_finite() {
            return Err($crate::err::ParseError::InvalidNumericField(
                $name,
                $text.to_string(),
            ));
        }
        v
    }};
}
