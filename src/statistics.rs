use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Statistics {
  pub(crate) accuracy: Option<f64>,
  pub(crate) errors_left: Option<usize>,
  pub(crate) generated: Option<String>,
  pub(crate) speed: Option<f64>,
  pub(crate) total_errors: Option<usize>,
  pub(crate) total_time: Option<f64>,
}

impl Statistics {
  pub(crate) fn extract(text: &str) -> Result<Self> {
    Ok(Self {
      accuracy: float(text, r"Accuracy:\s*([\d.]+)%")?,
      errors_left: integer(text, r"Errors Left \(Unfixed\):\s*(\d+)")?,
      generated: capture(text, r"Generated:\s*(.+)")?.map(|value| value.trim().to_owned()),
      speed: float(text, r"Speed:\s*([\d.]+)\s*words per minute")?,
      total_errors: integer(text, r"Total Errors Made:\s*(\d+)")?,
      total_time: float(text, r"Total Time:\s*([\d.]+)\s*seconds")?,
    })
  }

  pub(crate) fn lines(&self) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(total_errors) = self.total_errors {
      lines.push(format!("Total Errors Made: {total_errors}"));
    }

    if let Some(errors_left) = self.errors_left {
      lines.push(format!("Errors Left (Unfixed): {errors_left}"));
    }

    if let Some(total_time) = self.total_time {
      lines.push(format!("Total Time: {}", Elapsed(total_time)));
    }

    if let Some(accuracy) = self.accuracy {
      lines.push(format!("Accuracy: {accuracy:.2}%"));
    }

    if let Some(speed) = self.speed {
      lines.push(format!("Speed: {speed:.2} words per minute"));
    }

    if let Some(generated) = &self.generated {
      lines.push(format!("Generated: {generated}"));
    }

    lines
  }
}

impl Display for Statistics {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "Typing Statistics\n{}", "=".repeat(50))?;

    for line in self.lines() {
      write!(f, "\n{line}")?;
    }

    Ok(())
  }
}

fn capture(text: &str, pattern: &str) -> Result<Option<String>> {
  Ok(
    Regex::new(pattern)?
      .captures(text)
      .and_then(|captures| captures.get(1))
      .map(|value| value.as_str().to_owned()),
  )
}

fn float(text: &str, pattern: &str) -> Result<Option<f64>> {
  capture(text, pattern)?
    .map(|value| {
      value
        .parse()
        .map_err(|_| anyhow!("`{value}` is not a valid number"))
    })
    .transpose()
}

fn integer(text: &str, pattern: &str) -> Result<Option<usize>> {
  capture(text, pattern)?
    .map(|value| {
      value
        .parse()
        .map_err(|_| anyhow!("`{value}` is not a valid count"))
    })
    .transpose()
}
