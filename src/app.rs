use super::*;

#[derive(Clone, Debug)]
pub(crate) struct App {
  path: PathBuf,
}

impl App {
  pub(crate) fn new(path: PathBuf) -> Self {
    Self { path }
  }

  pub(crate) fn run(self) -> Result {
    if !self.path.exists() {
      println!("Error: stats.txt not found at {}", self.path.display());
      return Ok(());
    }

    let content = match fs::read_to_string(&self.path) {
      Ok(content) => content,
      Err(error) => {
        println!("Error reading stats.txt: {error}");
        return Ok(());
      }
    };

    println!("{}\n", Statistics::extract(&content)?);

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_ends_the_run_normally() {
    let app = App::new(PathBuf::from("does/not/exist/stats.txt"));

    assert!(app.run().is_ok());
  }
}
