use std::path::PathBuf;

pub struct Config {
    /// Directory every output table is written into.
    pub output_dir: PathBuf,
    /// Quiet level. `1` hides headers and statistics, `2` also silences info logging.
    pub quiet: u8,
}
