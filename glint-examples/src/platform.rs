//! Platform services implementation.

use crate::CLIOpts;
use glint_examples::PlatformServices;
use std::path::{Path, PathBuf};

/// Directory assets are read from when none is given on the command line.
const DEFAULT_ASSET_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Desktop implementation of the [`PlatformServices`] API.
#[derive(Debug)]
pub struct DesktopPlatformServices {
  asset_root: PathBuf,
}

impl DesktopPlatformServices {
  pub fn new(cli_opts: &CLIOpts) -> Self {
    let asset_root = cli_opts
      .assets
      .clone()
      .unwrap_or_else(|| Path::new(DEFAULT_ASSET_ROOT).to_owned());

    log::debug!("asset root: {}", asset_root.display());

    Self { asset_root }
  }
}

impl PlatformServices for DesktopPlatformServices {
  fn asset_path(&self, name: &str) -> PathBuf {
    self.asset_root.join(name)
  }
}
