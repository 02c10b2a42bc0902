use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use log::debug;
use serde::Serialize;

use crate::{context::Context, index, prompt, record::Post, slug::slugify};

#[derive(Serialize, Debug)]
struct ScaffoldData<'a> {
    title: &'a str,
}

/// Field values for a new post as gathered from the prompts. Slug and date
/// defaults are already resolved; the description default is applied by
/// `Post::new`.
#[derive(Debug)]
pub(crate) struct NewPost {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub date: String,
}

pub(crate) fn add(ctx: &Context) -> anyhow::Result<()> {
    println!("=== Add New Blog Post ===\n");

    let title = prompt::line("Post title")?;
    if title.is_empty() {
        println!("Error: Title cannot be empty");
        return Ok(());
    }

    let description = prompt::line("Brief description")?;

    let default_slug = slugify(&title);
    let slug = prompt::line_or_default("URL slug", &default_slug)?;

    let default_date = chrono::Local::now().format("%B %-d, %Y").to_string();
    let date = prompt::line_or_default("Date", &default_date)?;

    let input = NewPost {
        title,
        description,
        slug,
        date,
    };

    let md_path = scaffold_path(&ctx.posts_dir, &input.slug);
    let overwrite_confirmed = if md_path.exists() {
        println!();
        prompt::confirm(&format!("{} already exists. Overwrite?", md_path.display()))?
    } else {
        true
    };

    create_post(ctx, input, overwrite_confirmed)?;

    Ok(())
}

/// Performs the writes for a gathered post and owns the abort guards: an
/// empty title, or an existing scaffold without a confirmed overwrite,
/// returns without touching the filesystem. Returns whether the post was
/// created.
pub(crate) fn create_post(
    ctx: &Context,
    input: NewPost,
    overwrite_confirmed: bool,
) -> anyhow::Result<bool> {
    if input.title.is_empty() {
        println!("Error: Title cannot be empty");
        return Ok(false);
    }

    let md_path = scaffold_path(&ctx.posts_dir, &input.slug);
    if md_path.exists() && !overwrite_confirmed {
        println!("Cancelled.");
        return Ok(false);
    }

    let post = Post::new(input.title, input.slug, input.date, input.description);

    write_scaffold(ctx, &post)?;
    println!("\n✓ Created {}", md_path.display());

    let index_path = update_index(&ctx.posts_dir, post)?;
    println!("✓ Updated {}", index_path.display());

    println!(
        "\nYour new post is ready! Edit {} to add your content.",
        md_path.display()
    );
    println!("When done, commit and push to GitHub to publish.");

    Ok(true)
}

fn scaffold_path(posts_dir: &Path, slug: &str) -> PathBuf {
    posts_dir.join(format!("{slug}.md"))
}

fn write_scaffold(ctx: &Context, post: &Post) -> anyhow::Result<PathBuf> {
    let out_path = scaffold_path(&ctx.posts_dir, &post.slug);
    debug!("Writing scaffold to {out_path:?}");

    let fd = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&out_path)?;
    ctx.handlebars
        .render_to_write("post", &ScaffoldData { title: &post.title }, fd)
        .with_context(|| format!("while writing scaffold for {:?}", post.slug))?;

    Ok(out_path)
}

fn update_index(posts_dir: &Path, post: Post) -> anyhow::Result<PathBuf> {
    let index_path = posts_dir.join("posts.json");

    let mut posts: Vec<Post> = index::load(&index_path)?;
    let slug = post.slug.clone();
    index::upsert(&mut posts, post, |existing| existing.slug == slug);
    index::save(&index_path, &posts)?;

    Ok(index_path)
}
