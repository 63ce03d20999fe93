//! Two six-sided dice.

/// Ways to roll each total 2..=12 with two dice, indexed by `total - 2`.
const WAYS: [u8; 11] = [1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];

/// Probability of rolling `total` with two dice. Zero outside 2..=12.
pub fn dice_probability(total: u8) -> f64 {
    match total {
        2..=12 => WAYS[(total - 2) as usize] as f64 / 36.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ProductionNumber;

    #[test]
    fn test_full_distribution_sums_to_one() {
        let total: f64 = (2..=12).map(dice_probability).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_production_numbers_exclude_seven() {
        let total: f64 = ProductionNumber::VALID
            .iter()
            .map(|&v| ProductionNumber::new(v).unwrap().probability())
            .sum();
        assert!((total - 30.0 / 36.0).abs() < 1e-9);
        assert!((total + dice_probability(7) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_known_values() {
        assert!((dice_probability(2) - 1.0 / 36.0).abs() < 1e-12);
        assert!((dice_probability(6) - 5.0 / 36.0).abs() < 1e-12);
        assert!((dice_probability(8) - 5.0 / 36.0).abs() < 1e-12);
        assert!((dice_probability(7) - 6.0 / 36.0).abs() < 1e-12);
        assert_eq!(dice_probability(1), 0.0);
        assert_eq!(dice_probability(13), 0.0);
    }
}
