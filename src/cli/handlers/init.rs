use crate::config::{AuditConfig, CONFIG_FILE};
use crate::model::{PageEntry, PagePriority, PageStatus};
use crate::registry::{Registry, RegistryFormat};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Starter registry written next to a fresh config.
fn example_registry() -> Result<Registry> {
    let pages = vec![
        PageEntry::new("/", "Home", "General", PageStatus::Complete)
            .with_priority(PagePriority::High),
        PageEntry::new("/divorce", "Divorce in Arizona", "Divorce", PageStatus::Partial)
            .with_priority(PagePriority::High),
        PageEntry::new(
            "/custody",
            "Legal Decision-Making and Parenting Time",
            "Custody",
            PageStatus::Placeholder,
        ),
        PageEntry::new("/faq", "Frequently Asked Questions", "Resources", PageStatus::Planned)
            .with_priority(PagePriority::Low)
            .with_notes("Collect questions from intake forms"),
    ];
    Ok(Registry::new(pages)?)
}

/// Write through a temp file in the same directory, then rename into place.
fn atomic_write(target: &Path, content: &str) -> Result<()> {
    let dir = target
        .parent()
        .context("Target path has no parent directory")?;
    let mut temp_file = NamedTempFile::new_in(dir).context("Failed to create temp file")?;
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write temp file")?;
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temp file")?;
    temp_file
        .persist(target)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    Ok(())
}

pub fn handle_init(pages_dir: Option<String>, registry: Option<String>, force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Project already initialized at {}", config_path.display());
    }

    let mut config = AuditConfig::default();
    if let Some(dir) = pages_dir {
        config.project.pages_dir = dir;
    }
    if let Some(file) = registry {
        config.project.registry = file;
    }

    let registry_path = config.registry_path(&cwd);
    let format = RegistryFormat::from_path(&registry_path)?;

    config.save(&config_path)?;

    let registry_created = if registry_path.exists() {
        false
    } else {
        if let Some(parent) = registry_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = example_registry()?.render(format)?;
        atomic_write(&registry_path, &content)?;
        true
    };

    println!(
        "{} siteaudit project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config:   {}", config_path.display());
    if registry_created {
        println!("  Registry: {}", registry_path.display());
    } else {
        println!("  Registry: {} (kept existing)", registry_path.display());
    }
    println!("  Pages:    {}", cwd.join(&config.project.pages_dir).display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_registry_is_valid() {
        let registry = example_registry().unwrap();
        assert_eq!(registry.len(), 4);
        for format in [RegistryFormat::Yaml, RegistryFormat::Toml, RegistryFormat::Json] {
            let rendered = registry.render(format).unwrap();
            assert_eq!(Registry::parse(&rendered, format).unwrap(), registry);
        }
    }
}
