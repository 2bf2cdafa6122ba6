use fs_registry::Registry;

use crate::{error::AppError, util::parse_dirs};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List the files under the configured directories")]
pub struct List {
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
    #[clap(long, short = 'i', action, help = "Show entries' ids")]
    ids: bool,
    #[clap(long, short = 'u', action, help = "Show entries' URLs")]
    urls: bool,
    #[clap(long, action, help = "Print the records as JSON")]
    json: bool,
}

impl List {
    pub fn run(&self) -> Result<(), AppError> {
        let dirs = parse_dirs(&self.dirs)?;
        let registry = Registry::new(dirs, &self.url_prefix)?;
        let records = registry.list();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        for record in records {
            let mut line =
                format!("[{}] {}", record.namespace(), record.relative_path());
            if self.ids {
                line = format!("{} {}", record.id(), line);
            }
            if self.urls {
                line.push_str(" -> ");
                line.push_str(record.url());
            }
            println!("{}", line);
        }

        Ok(())
    }
}
