//! Referral coupon codes: PREFIX + name stem + two-digit suffix

use rand::Rng;

/// Characters of the name kept in the coupon
const NAME_STEM_LEN: usize = 8;

/// Upper-cased name with whitespace removed, cut to the stem length
pub fn name_stem(name: &str) -> String {
    name.split_whitespace()
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(NAME_STEM_LEN)
        .collect()
}

/// Build one candidate coupon; uniqueness is checked by the caller
pub fn generate_coupon<R: Rng + ?Sized>(prefix: &str, name: &str, rng: &mut R) -> String {
    let suffix: u8 = rng.gen_range(10..=99);
    format!("{}{}{}", prefix, name_stem(name), suffix)
}
