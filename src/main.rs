use anyhow::bail;
use clap::{command, Arg};
use context::Context;
use std::path::PathBuf;

mod context;
mod index;
mod post;
mod project;
mod prompt;
mod record;
mod renderer;
mod slug;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        if interrupted(&err) {
            println!("\n\nCancelled.");
        } else {
            println!("\nError: {err:#}");
        }
    }
}

fn run() -> anyhow::Result<()> {
    let matches = command!()
        .args(&[
            Arg::new("posts_dir")
                .help("Directory holding post markdown files and posts.json")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("posts"),
            Arg::new("projects_dir")
                .help("Directory holding projects.json")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("projects"),
        ])
        .get_matches();

    let posts_dir: &PathBuf = matches.get_one("posts_dir").unwrap();
    if !posts_dir.exists() || !posts_dir.is_dir() {
        bail!("posts_dir must be a directory.");
    }
    let projects_dir: &PathBuf = matches.get_one("projects_dir").unwrap();
    if !projects_dir.exists() || !projects_dir.is_dir() {
        bail!("projects_dir must be a directory.");
    }

    let ctx = Context::new(posts_dir.to_owned(), projects_dir.to_owned())?;

    println!("What would you like to add?\n");
    println!("1. Blog Post");
    println!("2. Project");
    println!("3. Exit");
    println!();

    let choice = prompt::line("Enter choice (1-3)")?;
    dispatch(&ctx, &choice)
}

/// Single menu selection per run; anything other than "1"/"2"/"3" reports
/// an invalid choice and the run ends.
fn dispatch(ctx: &Context, choice: &str) -> anyhow::Result<()> {
    match choice {
        "1" => post::add(ctx),
        "2" => project::add(ctx),
        "3" => {
            println!("Goodbye!");
            Ok(())
        }
        _ => {
            println!("Invalid choice. Please run again and select 1, 2, or 3.");
            Ok(())
        }
    }
}

/// A Ctrl-C during a prompt surfaces as an interrupted I/O error somewhere
/// in the chain; report it as a cancellation rather than a failure.
fn interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::Interrupted)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn context_in(root: &Path) -> Context {
        let posts_dir = root.join("posts");
        let projects_dir = root.join("projects");
        std::fs::create_dir(&posts_dir).unwrap();
        std::fs::create_dir(&projects_dir).unwrap();
        Context::new(posts_dir, projects_dir).unwrap()
    }

    fn dir_is_empty(dir: &Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[test]
    fn exit_choice_touches_no_files() {
        let dir = tempdir().unwrap();
        let ctx = context_in(dir.path());

        dispatch(&ctx, "3").unwrap();

        assert!(dir_is_empty(&ctx.posts_dir));
        assert!(dir_is_empty(&ctx.projects_dir));
    }

    #[test]
    fn unknown_choice_touches_no_files() {
        let dir = tempdir().unwrap();
        let ctx = context_in(dir.path());

        dispatch(&ctx, "4").unwrap();
        dispatch(&ctx, "exit").unwrap();

        assert!(dir_is_empty(&ctx.posts_dir));
        assert!(dir_is_empty(&ctx.projects_dir));
    }
}
