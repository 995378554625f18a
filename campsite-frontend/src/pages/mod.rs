mod campsite;
mod directory;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Directory,
}

impl Page {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Directory => "/directory",
        }
    }
}

pub use self::{campsite::*, directory::*};
