//! Generate command handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use erdb::generators::write_output;
use erdb::loaders::FileSource;
use erdb::schema::SchemaStore;
use erdb::GameVersion;
use tracing::info;

use crate::config::Config;
use crate::entity::EntityKind;

/// Game versions named by a `--version` argument
pub fn resolve_versions(source: &FileSource, arg: &str) -> Result<Vec<GameVersion>> {
    match arg {
        "all" | "latest" => {
            let versions = source.versions().with_context(|| {
                format!("Failed to list game versions in {}", source.root().display())
            })?;
            if versions.is_empty() {
                bail!("No game versions found in {}", source.root().display());
            }
            if arg == "all" {
                Ok(versions)
            } else {
                Ok(versions.last().copied().into_iter().collect())
            }
        }
        version => Ok(vec![version
            .parse()
            .with_context(|| format!("Invalid game version '{}'", version))?]),
    }
}

pub fn load_schemas(dir: &Path) -> Result<SchemaStore> {
    SchemaStore::load_dir(dir)
        .with_context(|| format!("Failed to load schemas from {}", dir.display()))
}

/// Handle the generate command
pub fn run(
    entities: Vec<EntityKind>,
    game_version: &str,
    data_dir: Option<PathBuf>,
    schema_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    minimize: bool,
) -> Result<()> {
    let config = Config::load()?;
    let source = FileSource::new(config.data_dir(data_dir));
    let schemas = load_schemas(&config.schema_dir(schema_dir))?;
    let output_dir = config.output_dir(output_dir);

    let entities = EntityKind::selected(entities);
    let versions = resolve_versions(&source, game_version)?;

    for version in &versions {
        for kind in &entities {
            let output = kind
                .generate(&source, &schemas, version)
                .with_context(|| format!("Failed to generate {} for {}", kind, version))?;

            let path = output_dir.join(version.to_string()).join(kind.output_file());
            write_output(&path, &output, minimize)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            info!("{} {}: {} entries -> {}", version, kind, output.len(), path.display());
        }
    }

    println!(
        "Generated {} entity type(s) for {} version(s) into {}",
        entities.len(),
        versions.len(),
        output_dir.display()
    );
    Ok(())
}
