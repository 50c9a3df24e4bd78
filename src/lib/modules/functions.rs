pub fn fahrenheit_to_celsius(
    temp_f: f32, // air temperature [°F]
) -> f32 {
    (temp_f - 32.0) * 5.0 / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_conversion_reference_points() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert!((fahrenheit_to_celsius(70.0) - 21.111_11).abs() < 1e-4);
    }
}
