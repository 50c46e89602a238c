//! Rating rules: accepted range and the aggregate shown on a project.

/// Lowest star value a rater may submit.
pub const MIN_RATING: i64 = 1;

/// Highest star value a rater may submit.
pub const MAX_RATING: i64 = 5;

/// Validate that a submitted rating lies within `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(rating: i64) -> Result<(), String> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(format!(
            "Rating must be an integer between {MIN_RATING} and {MAX_RATING}, got {rating}"
        ))
    }
}

/// Mean of `values` rounded to one decimal place, or `0.0` when empty.
pub fn average_rating<I>(values: I) -> f64
where
    I: IntoIterator<Item = i64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0_i64, 0_i64), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    let mean = sum as f64 / count as f64;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for r in 1..=5 {
            assert!(validate_rating(r).is_ok(), "rating {r} should be valid");
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-3).is_err());
    }

    #[test]
    fn empty_average_is_zero() {
        assert_eq!(average_rating(Vec::new()), 0.0);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        // 4 + 5 + 5 = 14 / 3 = 4.666..
        assert_eq!(average_rating([4, 5, 5]), 4.7);
        // 1 + 2 = 1.5 exactly
        assert_eq!(average_rating([1, 2]), 1.5);
        // 1 + 1 + 2 = 1.333..
        assert_eq!(average_rating([1, 1, 2]), 1.3);
    }

    #[test]
    fn single_value_is_its_own_average() {
        assert_eq!(average_rating([2]), 2.0);
    }
}
