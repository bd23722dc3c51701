use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Arguments {
  #[clap(long, short, default_value = "client/stats.txt")]
  path: PathBuf,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    App::new(self.path).run()
  }
}
