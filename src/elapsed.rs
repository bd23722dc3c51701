use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Elapsed(pub(crate) f64);

impl Display for Elapsed {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.0 < 60.0 {
      write!(f, "{:.2} seconds", truncate(self.0))
    } else {
      let minutes = (self.0 / 60.0) as u64;

      write!(f, "{}m {:.2}s", minutes, truncate(self.0 % 60.0))
    }
  }
}

// Two decimals without rounding up: 119.999 prints `1m 59.99s`, never `1m 60.00s`.
fn truncate(seconds: f64) -> f64 {
  (seconds * 100.0).floor() / 100.0
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn under_a_minute() {
    assert_eq!(Elapsed(0.0).to_string(), "0.00 seconds");
    assert_eq!(Elapsed(12.0).to_string(), "12.00 seconds");
    assert_eq!(Elapsed(59.999).to_string(), "59.99 seconds");
  }

  #[test]
  fn exactly_a_minute() {
    assert_eq!(Elapsed(60.0).to_string(), "1m 0.00s");
  }

  #[test]
  fn over_a_minute() {
    assert_eq!(Elapsed(125.5).to_string(), "2m 5.50s");
  }

  #[test]
  fn seconds_never_round_up_to_a_minute() {
    assert_eq!(Elapsed(119.999).to_string(), "1m 59.99s");
  }
}
