use data_id::FileId;
use fs_registry::Registry;

use crate::{error::AppError, util::parse_dirs};

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "rename",
    about = "Move a file to a new relative path within its directory"
)]
pub struct Rename {
    #[clap(
        long,
        default_value = ".",
        help = "The directories to index, as `name=path` entries separated by `;`"
    )]
    dirs: String,
    #[clap(
        long,
        default_value = "/f/",
        help = "The prefix composed with each file's id to form its URL"
    )]
    url_prefix: String,
    #[clap(help = "The id of the file to rename")]
    id: FileId,
    #[clap(help = "The new path, relative to the file's directory")]
    new_path: String,
}

impl Rename {
    pub fn run(&self) -> Result<(), AppError> {
        let dirs = parse_dirs(&self.dirs)?;
        let registry = Registry::new(dirs, &self.url_prefix)?;

        let record = registry.rename(&self.id, &self.new_path)?;
        println!(
            "[{}] {} -> {}",
            record.namespace(),
            record.relative_path(),
            record.url()
        );

        Ok(())
    }
}
