//! Import command handler

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use erdb::loaders::FileSource;

use super::generate::{load_schemas, resolve_versions};
use crate::config::Config;
use crate::directus::DirectusClient;
use crate::entity::EntityKind;

/// Directus connection settings after flags and config are merged
pub struct CmsLogin {
    pub endpoint: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Handle the import command
pub fn run(
    entities: Vec<EntityKind>,
    game_version: &str,
    data_dir: Option<PathBuf>,
    schema_dir: Option<PathBuf>,
    login: CmsLogin,
    folder: &str,
) -> Result<()> {
    let config = Config::load()?;

    let endpoint = config
        .cms_endpoint(login.endpoint)
        .context("No Directus endpoint given (use --endpoint or erdb configure --cms-endpoint)")?;
    let email = config
        .cms_email(login.email)
        .context("No Directus email given (use --email or erdb configure --cms-email)")?;
    let password = login
        .password
        .context("No Directus password given (use --password or ERDB_CMS_PASSWORD)")?;

    let source = FileSource::new(config.data_dir(data_dir));
    let schemas = load_schemas(&config.schema_dir(schema_dir))?;
    let entities = EntityKind::selected(entities);

    if game_version == "all" {
        bail!("Import targets a single game version; pass 'latest' or an explicit version");
    }
    let version = resolve_versions(&source, game_version)?
        .pop()
        .context("No game version to import")?;

    // Generate everything up front so a failing entity type never leaves the
    // CMS half imported
    let mut generated = Vec::with_capacity(entities.len());
    for kind in &entities {
        let properties = kind.schema(&schemas)?.properties;
        let output = kind
            .generate(&source, &schemas, &version)
            .with_context(|| format!("Failed to generate {} for {}", kind, version))?;
        generated.push((*kind, properties, output));
    }

    DirectusClient::with_user(&endpoint, &email, &password, |client| {
        client.enter_folder(folder, true, |client| -> Result<()> {
            for (kind, properties, output) in &generated {
                let collection = kind.collection();
                client
                    .update_collection(&collection, properties)
                    .with_context(|| format!("Failed to create collection {}", collection))?;
                client
                    .import_data(&collection, output)
                    .with_context(|| format!("Failed to import {}", collection))?;
            }
            Ok(())
        })
    })?;

    println!(
        "Imported {} entity type(s) for {} into {}",
        generated.len(),
        version,
        endpoint
    );
    Ok(())
}
