//! CPF (Brazilian taxpayer id) validation and formatting

fn digits(raw: &str) -> Vec<u32> {
    raw.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Mod-11 check digit over `digits`, weighted from `digits.len() + 1` down to 2
fn check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(d, w)| d * w)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Check a CPF, ignoring any punctuation around the digits
pub fn validate_cpf(raw: &str) -> bool {
    let d = digits(raw);
    if d.len() != 11 {
        return false;
    }
    // 000.000.000-00, 111.111.111-11, ... pass the checksum but are invalid
    if d.iter().all(|&x| x == d[0]) {
        return false;
    }
    check_digit(&d[..9]) == d[9] && check_digit(&d[..10]) == d[10]
}

/// `000.000.000-00` for an 11-digit CPF, otherwise just the digits
pub fn format_cpf(raw: &str) -> String {
    let d: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if d.len() == 11 {
        format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpf() {
        assert!(validate_cpf("52998224725"));
        assert!(validate_cpf("529.982.247-25"));
        assert!(validate_cpf("111.444.777-35"));
    }

    #[test]
    fn test_invalid_check_digits() {
        assert!(!validate_cpf("52998224724"));
        assert!(!validate_cpf("111.444.777-53"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        assert!(!validate_cpf("111.111.111-11"));
        assert!(!validate_cpf("00000000000"));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("5299822472"));
        assert!(!validate_cpf("529982247250"));
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
        assert_eq!(format_cpf("529.982.247-25"), "529.982.247-25");
        assert_eq!(format_cpf("12-34"), "1234");
    }
}
