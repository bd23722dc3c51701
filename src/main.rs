use {
  anyhow::anyhow,
  clap::Parser,
  crate::{app::App, arguments::Arguments, elapsed::Elapsed, statistics::Statistics},
  regex::Regex,
  std::{
    fmt::{self, Display, Formatter},
    fs,
    path::PathBuf,
    process,
  },
};

mod app;
mod arguments;
mod elapsed;
mod statistics;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
