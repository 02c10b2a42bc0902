use std::path::{Path, PathBuf};

use crate::{context::Context, index, prompt, record::Project};

pub(crate) fn add(ctx: &Context) -> anyhow::Result<()> {
    println!("=== Add New Project ===\n");

    let title = prompt::line("Project title")?;
    if title.is_empty() {
        println!("Error: Title cannot be empty");
        return Ok(());
    }

    let url = prompt::line("Project URL (GitHub, live demo, etc.)")?;
    if url.is_empty() {
        println!("Error: URL cannot be empty");
        return Ok(());
    }

    let description = prompt::line("Brief description")?;

    let project = Project::new(title, url, description);
    let index_path = update_index(&ctx.projects_dir, project)?;
    println!("\n✓ Updated {}", index_path.display());

    println!("\nYour new project has been added!");
    println!("Commit and push to GitHub to publish.");

    Ok(())
}

fn update_index(projects_dir: &Path, project: Project) -> anyhow::Result<PathBuf> {
    let index_path = projects_dir.join("projects.json");

    let mut projects: Vec<Project> = index::load(&index_path)?;
    let title = project.title.clone();
    index::upsert(&mut projects, project, |existing| {
        existing.same_title(&title)
    });
    index::save(&index_path, &projects)?;

    Ok(index_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn project(title: &str) -> Project {
        Project::new(title.to_string(), "https://example.com".into(), String::new())
    }

    #[test]
    fn update_index_replaces_title_case_insensitively() {
        let dir = tempdir().unwrap();

        update_index(dir.path(), project("foo")).unwrap();
        let index_path = update_index(dir.path(), project("Foo")).unwrap();

        let projects: Vec<Project> = index::load(&index_path).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Foo");
    }

    #[test]
    fn update_index_keeps_newest_first() {
        let dir = tempdir().unwrap();

        update_index(dir.path(), project("alpha")).unwrap();
        let index_path = update_index(dir.path(), project("beta")).unwrap();

        let projects: Vec<Project> = index::load(&index_path).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "beta");
        assert_eq!(projects[1].title, "alpha");
    }
}
