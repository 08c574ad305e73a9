use anyhow::Context;

use crate::util::calendar_src::SrcArgs;

use super::Cmd;

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub src: SrcArgs,
}

impl Args {
    /// Names in all directories, sorted and deduplicated.
    fn eval(&self) -> anyhow::Result<Vec<String>> {
        let mut names = Vec::new();
        for dir in self.src.dirs() {
            let found = dir
                .names()
                .with_context(|| format!("Listing calendars in {:?}", dir.root()))?;
            log::debug!("{} calendars in {:?}", found.len(), dir.root());
            names.extend(found);
        }
        names.sort_unstable();
        names.dedup();
        Ok(names)
    }
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        for name in self.eval()? {
            println!("{name}");
        }
        Ok(())
    }
}
