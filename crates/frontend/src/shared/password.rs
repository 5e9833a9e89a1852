//! Strong password suggestions for new user accounts.

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "@$!%*?&";

pub const PASSWORD_LENGTH: usize = 8;

fn pick(set: &str, rng: &mut impl FnMut() -> f64) -> char {
    let chars: Vec<char> = set.chars().collect();
    let index = ((rng() * chars.len() as f64) as usize).min(chars.len() - 1);
    chars[index]
}

/// One character from every class, the rest from all of them, then a
/// Fisher-Yates shuffle. `rng` returns values in `[0, 1)`.
pub fn generate_strong_password_with(mut rng: impl FnMut() -> f64) -> String {
    let all: String = [LOWER, UPPER, DIGITS, SPECIAL].concat();
    let mut chars: Vec<char> = vec![
        pick(LOWER, &mut rng),
        pick(UPPER, &mut rng),
        pick(DIGITS, &mut rng),
        pick(SPECIAL, &mut rng),
    ];
    while chars.len() < PASSWORD_LENGTH {
        chars.push(pick(&all, &mut rng));
    }
    for i in (1..chars.len()).rev() {
        let j = ((rng() * (i + 1) as f64) as usize).min(i);
        chars.swap(i, j);
    }
    chars.into_iter().collect()
}

pub fn generate_strong_password() -> String {
    generate_strong_password_with(js_sys::Math::random)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_strong(password: &str) -> bool {
        password.chars().count() >= PASSWORD_LENGTH
            && password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| SPECIAL.contains(c))
    }

    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn test_generated_passwords_are_strong() {
        for seed in 0..200 {
            let password = generate_strong_password_with(lcg(seed));
            assert_eq!(password.chars().count(), PASSWORD_LENGTH);
            assert!(is_strong(&password), "weak password {}", password);
        }
    }

    #[test]
    fn test_degenerate_rng_stays_in_bounds() {
        let password = generate_strong_password_with(|| 0.999_999_999);
        assert!(is_strong(&password));
        let password = generate_strong_password_with(|| 0.0);
        assert!(is_strong(&password));
    }

    #[test]
    fn test_is_strong() {
        assert!(is_strong("aB3$efgh"));
        assert!(!is_strong("abcdefgh"));
        assert!(!is_strong("aB3$"));
    }
}
