// ABOUTME: Profile subcommands: print the store location, show the profile, import a profile file

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::{ImportArgs, OutputFormat, ShowArgs};
use crate::components::{render_sections, sections_to_text};
use crate::models::Profile;
use crate::store::ProfileStore;

pub fn path(store: &dyn ProfileStore) {
    println!("{}", store.profile_path().display());
}

pub async fn show(store: &dyn ProfileStore, args: ShowArgs, format: OutputFormat) -> Result<()> {
    if args.path.is_none() && !store.profile_exists().await? {
        println!("No profile found at {}", store.profile_path().display());
        return Ok(());
    }

    let json = store.load_profile(args.path).await?;
    let profile = Profile::from_json(&json).context("Stored profile is not valid")?;
    print!("{}", format_profile(&profile, format)?);
    Ok(())
}

pub async fn import(store: &dyn ProfileStore, args: ImportArgs) -> Result<()> {
    let profile = read_profile_file(&args.file)?;
    store.save_profile(profile.to_json_pretty()?, None).await?;

    info!("Imported profile from {}", args.file.display());
    println!(
        "Imported {} into {}",
        args.file.display(),
        store.profile_path().display()
    );
    Ok(())
}

fn read_profile_file(file: &Path) -> Result<Profile> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    Profile::from_json(&content).with_context(|| format!("{} is not a valid profile", file.display()))
}

pub fn format_profile(profile: &Profile, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", profile.to_json_pretty()?)),
        OutputFormat::Text => {
            let sections = render_sections(profile);
            if sections.is_empty() {
                Ok("Profile is empty\n".to_string())
            } else {
                Ok(sections_to_text(&sections))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FileProfileStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_import_normalises_and_saves() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("extracted.json");
        std::fs::write(&source, r#"{"skills":["Rust"],"extra":true}"#).unwrap();
        let store = FileProfileStore::new(temp_dir.path().join("store").join("profile.json"));

        import(&store, ImportArgs { file: source }).await.unwrap();

        let saved = store.load_profile(None).await.unwrap();
        let profile = Profile::from_json(&saved).unwrap();
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
        assert!(!saved.contains("extra"));
    }

    #[tokio::test]
    async fn test_import_rejects_invalid_profile() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("bad.json");
        std::fs::write(&source, r#"{"education":[{"degree":"BSc"}]}"#).unwrap();
        let store = FileProfileStore::new(temp_dir.path().join("profile.json"));

        let err = import(&store, ImportArgs { file: source }).await.unwrap_err();

        assert!(err.to_string().contains("is not a valid profile"));
        assert!(!store.profile_exists().await.unwrap());
    }

    #[test]
    fn test_format_empty_profile_as_text() {
        let text = format_profile(&Profile::default(), OutputFormat::Text).unwrap();
        assert_eq!(text, "Profile is empty\n");
    }
}
