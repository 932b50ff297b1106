//! Value truncation and masking
//!
//! Lengths are counted in chars, not bytes.

const MASK_CHAR: char = '*';

/// Cut `value` to `width` chars, appending `...` when anything was dropped.
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let mut out: String = value.chars().take(width).collect();
        out.push_str("...");
        out
    } else {
        value.to_string()
    }
}

/// Mask a secret, keeping two chars visible at each end.
///
/// A secret shorter than four chars is fully masked at its own length.
/// Longer secrets are truncated to `width` first, so the result is never
/// longer than `width`; a truncated form under four chars is fully masked.
pub fn mask_secret(value: &str, width: usize) -> String {
    let full_len = value.chars().count();
    if full_len < 4 {
        return MASK_CHAR.to_string().repeat(full_len);
    }

    let visible: Vec<char> = value.chars().take(width).collect();
    let len = visible.len();
    if len < 4 {
        return MASK_CHAR.to_string().repeat(len);
    }

    let mut out = String::with_capacity(len);
    out.extend(&visible[..2]);
    out.extend(std::iter::repeat(MASK_CHAR).take(len - 4));
    out.extend(&visible[len - 2..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_secrets_are_fully_masked() {
        assert_eq!(mask_secret("", 50), "");
        assert_eq!(mask_secret("a", 50), "*");
        assert_eq!(mask_secret("abc", 50), "***");
    }

    #[test]
    fn secrets_keep_two_chars_each_side() {
        assert_eq!(mask_secret("abcd", 50), "abcd");
        assert_eq!(mask_secret("abcdef", 50), "ab**ef");
        assert_eq!(mask_secret("p@ssw0rd!", 50), "p@*****d!");
    }

    #[test]
    fn long_secrets_are_capped_at_width() {
        let secret = "abcdefghijklmnopqrstuvwxyz";
        let masked = mask_secret(secret, 10);
        assert_eq!(masked, "ab******ij");
        assert_eq!(masked.chars().count(), 10);
    }

    #[test]
    fn tiny_width_masks_everything() {
        assert_eq!(mask_secret("abcdefgh", 3), "***");
    }

    #[test]
    fn short_secret_keeps_its_length_below_width() {
        assert_eq!(mask_secret("abc", 2), "***");
        assert_eq!(mask_secret("ab", 0), "**");
    }

    #[test]
    fn multibyte_secrets_count_chars() {
        assert_eq!(mask_secret("ключики", 50), "кл***ки");
    }

    #[test]
    fn truncate_appends_ellipsis_only_when_cut() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate("exactly5", 8), "exactly5");
        assert_eq!(truncate("abcdefghij", 4), "abcd...");
    }
}
