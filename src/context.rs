use std::path::PathBuf;

use crate::renderer::generate_renderer;

#[derive(Debug)]
pub(crate) struct Context {
    pub posts_dir: PathBuf,
    pub projects_dir: PathBuf,

    pub handlebars: handlebars::Handlebars<'static>,
}

impl Context {
    pub fn new(posts_dir: PathBuf, projects_dir: PathBuf) -> anyhow::Result<Self> {
        Ok(Self {
            posts_dir,
            projects_dir,
            handlebars: generate_renderer()?,
        })
    }
}
