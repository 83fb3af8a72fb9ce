//! Fixed-point conversions for SHT1x raw words
//!
//! All arithmetic is 16-bit with wrap-around and truncating division, in
//! the same order of operations as the sensor firmware has always used, so
//! readings are bit-identical to the deployed clocks. Values are in
//! hundredths of a unit (2534 = 25.34).

/// Temperature in hundredths of a degree C, as an unsigned 16-bit word
///
/// Below 39.60 degrees of raw offset the value wraps; cast to `i16` to get
/// the signed temperature.
pub const fn temperature_centi(raw: u16) -> u16 {
    raw.wrapping_sub(3960)
}

/// Relative humidity in hundredths of a percent
///
/// `temperature_centi` is the most recent temperature reading (zero until
/// one has been taken). The temperature compensation term is added as is,
/// without scaling.
pub const fn humidity_centi(temperature_centi: u16, raw: u16) -> u16 {
    let mut temp_term = temperature_centi.wrapping_sub(2500) as i16;
    let factor = 8u16.wrapping_mul(raw) / 1000 + 1;
    temp_term /= 100;
    let temp_term = (temp_term as u16).wrapping_mul(factor);

    let linear = (raw / 100).wrapping_mul(367);
    let quarter = raw.wrapping_mul(4) / 100;
    let square = quarter.wrapping_mul(quarter) / 10;

    linear
        .wrapping_sub(square)
        .wrapping_sub(204)
        .wrapping_add(temp_term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_offset() {
        assert_eq!(temperature_centi(6460), 2500);
        assert_eq!(temperature_centi(3960), 0);
    }

    #[test]
    fn test_temperature_below_offset_is_negative() {
        assert_eq!(temperature_centi(400) as i16, -3560);
    }

    #[test]
    fn test_humidity_at_reference_temperature() {
        // 367 * 10 - (40 * 40) / 10 - 204 = 3306, no compensation at 25 C
        assert_eq!(humidity_centi(2500, 1000), 3306);
    }

    #[test]
    fn test_humidity_temperature_compensation() {
        // (3500 - 2500) / 100 * (8000 / 1000 + 1) = 90
        assert_eq!(humidity_centi(3500, 1000), 3396);
        // Before any temperature reading: -25 * 9 = -225
        assert_eq!(humidity_centi(0, 1000), 3081);
    }

    #[test]
    fn test_humidity_truncates_each_step() {
        // 1099 / 100 = 10, 4396 / 100 = 43, 1849 / 10 = 184
        assert_eq!(humidity_centi(2500, 1099), 3670 - 184 - 204);
    }
}
