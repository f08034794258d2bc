//! Reference token generation.
//!
//! Tokens look like `[Ref:J4L5/250917/101545]`: an alternating letter/digit
//! pattern followed by the local date and time of generation.

use chrono::{Local, NaiveDateTime};
use rand::Rng;
use refwidget_types::ReferenceToken;
use refwidget_types::token::PATTERN_LEN;

/// Generate a token from the local clock and the thread-local RNG.
pub fn generate() -> ReferenceToken {
    // Capture the instant once so date and time come from the same snapshot
    let now = Local::now().naive_local();
    generate_at(&now, &mut rand::rng())
}

/// Generate a token for a fixed instant with a caller-provided random source.
pub fn generate_at<R: Rng>(at: &NaiveDateTime, rng: &mut R) -> ReferenceToken {
    ReferenceToken::from_draws(random_draws(rng), at)
}

/// Uniform draws over the letter range on even positions, digit range on odd.
fn random_draws<R: Rng>(rng: &mut R) -> [u8; PATTERN_LEN] {
    std::array::from_fn(|i| {
        if i % 2 == 0 {
            rng.random_range(0..26u8)
        } else {
            rng.random_range(0..10u8)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 17)
            .unwrap()
            .and_hms_opt(10, 15, 45)
            .unwrap()
    }

    /// `^\[Ref:[A-Z][0-9][A-Z][0-9]/\d{6}/\d{6}\]$`
    fn has_token_shape(s: &str) -> bool {
        let bytes = s.as_bytes();
        if bytes.len() != 24 || !s.starts_with("[Ref:") || !s.ends_with(']') {
            return false;
        }
        let body = &bytes[5..23];
        body[0].is_ascii_uppercase()
            && body[1].is_ascii_digit()
            && body[2].is_ascii_uppercase()
            && body[3].is_ascii_digit()
            && body[4] == b'/'
            && body[5..11].iter().all(u8::is_ascii_digit)
            && body[11] == b'/'
            && body[12..18].iter().all(u8::is_ascii_digit)
    }

    #[test]
    fn generated_tokens_have_expected_shape() {
        for _ in 0..500 {
            let token = generate();
            assert!(has_token_shape(token.as_str()), "{token}");
        }
    }

    #[test]
    fn seeded_tokens_have_expected_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let at = fixed_instant();
        for _ in 0..1000 {
            let token = generate_at(&at, &mut rng);
            assert!(has_token_shape(token.as_str()), "{token}");
        }
    }

    #[test]
    fn same_instant_shares_date_and_time() {
        let mut rng = StdRng::seed_from_u64(42);
        let at = fixed_instant();
        let a = generate_at(&at, &mut rng);
        let b = generate_at(&at, &mut rng);
        assert_eq!(a.date_segment(), "250917");
        assert_eq!(a.time_segment(), "101545");
        assert_eq!(a.date_segment(), b.date_segment());
        assert_eq!(a.time_segment(), b.time_segment());
    }

    #[test]
    fn repeated_draws_vary_the_pattern() {
        let mut rng = StdRng::seed_from_u64(1);
        let at = fixed_instant();
        let patterns: std::collections::HashSet<String> = (0..50)
            .map(|_| generate_at(&at, &mut rng).pattern().to_string())
            .collect();
        // 67,600 possible patterns; 50 draws collapsing to one is not a real outcome
        assert!(patterns.len() > 1);
    }

    #[test]
    fn pattern_covers_full_alphabet_and_digit_range() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut letters = [false; 26];
        let mut digits = [false; 10];
        let at = fixed_instant();
        for _ in 0..5000 {
            let token = generate_at(&at, &mut rng);
            let b = token.pattern().as_bytes();
            letters[(b[0] - b'A') as usize] = true;
            letters[(b[2] - b'A') as usize] = true;
            digits[(b[1] - b'0') as usize] = true;
            digits[(b[3] - b'0') as usize] = true;
        }
        assert!(letters.iter().all(|&seen| seen));
        assert!(digits.iter().all(|&seen| seen));
    }
}
