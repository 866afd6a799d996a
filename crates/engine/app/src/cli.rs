//! Command line arguments shared by Folio applications
//!
//! Applications flatten [`CommonArgs`] into their own parser:
//!
//! ```
//! use app::cli::CommonArgs;
//! use clap::Parser;
//!
//! #[derive(Parser)]
//! struct MyAppArgs {
//!     #[command(flatten)]
//!     common: CommonArgs,
//!
//!     /// My app-specific flag
//!     #[arg(long)]
//!     my_flag: bool,
//! }
//!
//! let args = MyAppArgs::parse_from(["my-app", "--frames", "10"]);
//! assert_eq!(args.common.frames, 10);
//! ```

use clap::Args;
use std::path::PathBuf;

/// Environment variable naming a scene file when `--config` is absent
pub const SCENE_ENV: &str = "FOLIO_SCENE";

/// Common command line arguments shared by all Folio applications
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Load scene configuration from a Lua file
    #[arg(long, short = 'c', value_name = "PATH", env = SCENE_ENV)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate headlessly
    #[arg(long, short = 'f', value_name = "FRAMES", default_value_t = 0)]
    pub frames: u64,

    /// Log every frame at debug level
    #[arg(long, short = 'd')]
    pub debug: bool,
}

impl CommonArgs {
    /// Get the config path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    /// Default log filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}
