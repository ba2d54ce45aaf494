/// Render a microsecond latency value for display.
///
/// NaN is the backend's "no samples yet" marker and renders empty. Values
/// under a millisecond stay in µs; everything else switches to ms, with one
/// decimal of precision until 10 ms.
pub fn format_latency(micros: f64) -> String {
    if micros.is_nan() {
        String::new()
    } else if micros < 1000.0 {
        format!("{micros:.0} µs")
    } else if micros < 10000.0 {
        format!("{:.1} ms", micros / 1000.0)
    } else {
        format!("{:.0} ms", micros / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_renders_empty() {
        assert_eq!(format_latency(f64::NAN), "");
    }

    #[test]
    fn sub_millisecond_stays_in_micros() {
        assert_eq!(format_latency(500.0), "500 µs");
        assert_eq!(format_latency(0.0), "0 µs");
        assert_eq!(format_latency(999.4), "999 µs");
    }

    #[test]
    fn small_millis_keep_one_decimal() {
        assert_eq!(format_latency(1000.0), "1.0 ms");
        assert_eq!(format_latency(1500.0), "1.5 ms");
        assert_eq!(format_latency(9950.0), "9.9 ms");
    }

    #[test]
    fn large_millis_round_to_whole() {
        assert_eq!(format_latency(10000.0), "10 ms");
        assert_eq!(format_latency(15000.0), "15 ms");
        assert_eq!(format_latency(123456.0), "123 ms");
    }
}
