//! Parsing functions for threshold lists and limit pairs.

/// Parse a comma-separated threshold list, e.g. "0.25,0.5,0.9"
///
/// Thresholds are kept in the given order; each must be a finite value in
/// [0.0, 1.0) so the fixed 1.0 upper limit stays above it.
pub fn parse_thresholds(raw: &str) -> Result<Vec<f32>, String> {
    let mut thresholds = Vec::new();
    for part in raw.split(',') {
        let value = part
            .trim()
            .parse::<f32>()
            .map_err(|_| format!("Invalid threshold value: {}", part))?;
        if !value.is_finite() || !(0.0..1.0).contains(&value) {
            return Err(format!("Threshold {} must be in range [0.0, 1.0)", value));
        }
        thresholds.push(value);
    }
    Ok(thresholds)
}

/// Parse inclusive limits in format "MIN,MAX"
pub fn parse_limits(raw: &str) -> Result<(f32, f32), String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("Limits must be in format MIN,MAX, got: {}", raw));
    }

    let min = parts[0]
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("Invalid min limit: {}", parts[0]))?;
    let max = parts[1]
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("Invalid max limit: {}", parts[1]))?;

    if min >= max {
        return Err(format!("Min limit {} must be below max limit {}", min, max));
    }

    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_thresholds_keeps_order() {
        let thresholds = parse_thresholds("0.9, 0.25,0.5").unwrap();
        assert_eq!(thresholds, vec![0.9, 0.25, 0.5]);
    }

    #[test]
    fn test_parse_thresholds_rejects_garbage() {
        assert!(parse_thresholds("0.5,abc").is_err());
        assert!(parse_thresholds("").is_err());
    }

    #[test]
    fn test_parse_thresholds_rejects_out_of_range() {
        assert!(parse_thresholds("1.0").is_err());
        assert!(parse_thresholds("-0.1").is_err());
        assert!(parse_thresholds("0.5,1.5").is_err());
    }

    #[test]
    fn test_parse_limits() {
        assert_eq!(parse_limits("0.0,1.0").unwrap(), (0.0, 1.0));
        assert_eq!(parse_limits(" 0.2 , 0.8 ").unwrap(), (0.2, 0.8));
    }

    #[test]
    fn test_parse_limits_rejects_bad_input() {
        assert!(parse_limits("0.5").is_err());
        assert!(parse_limits("0.5,0.2").is_err());
        assert!(parse_limits("0.5,0.5").is_err());
        assert!(parse_limits("a,b").is_err());
    }
}
