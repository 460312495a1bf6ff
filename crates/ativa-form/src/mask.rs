const PHONE_PATTERN: &str = "(00) 00000-0000";

/// Format a phone number for display as `(00) 00000-0000`.
///
/// Only digits are kept; separators are emitted as digits fill the pattern,
/// and digits beyond the pattern are dropped. The result is for display
/// only: validation and submission always use the raw value.
pub fn mask_phone(raw: &str) -> String {
  let mut digits = raw.chars().filter(|c| c.is_ascii_digit());
  let mut masked = String::with_capacity(PHONE_PATTERN.len());
  let mut pending = String::new();

  for slot in PHONE_PATTERN.chars() {
    if slot != '0' {
      pending.push(slot);
      continue;
    }
    let Some(digit) = digits.next() else {
      break;
    };
    masked.push_str(&pending);
    pending.clear();
    masked.push(digit);
  }

  masked
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_full_number() {
    assert_eq!(mask_phone("11999999999"), "(11) 99999-9999");
  }

  #[test]
  fn test_partial_input() {
    assert_eq!(mask_phone(""), "");
    assert_eq!(mask_phone("1"), "(1");
    assert_eq!(mask_phone("11"), "(11");
    assert_eq!(mask_phone("119"), "(11) 9");
    assert_eq!(mask_phone("1199999"), "(11) 99999");
    assert_eq!(mask_phone("11999999"), "(11) 99999-9");
  }

  #[test]
  fn test_ignores_existing_formatting_and_overflow() {
    assert_eq!(mask_phone("(11) 99999-9999"), "(11) 99999-9999");
    assert_eq!(mask_phone("+55 11 99999-9999"), "(55) 11999-9999");
  }
}
