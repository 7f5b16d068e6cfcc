//! Entity types selectable on the command line

use std::fmt;

use clap::ValueEnum;
use erdb::generators::{
    self, AshesOfWar, BolsteringMaterials, CorrectionGraphs, EntityGenerator, Output, Tools,
};
use erdb::loaders::DataSource;
use erdb::schema::{Schema, SchemaStore};
use erdb::GameVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    AshesOfWar,
    BolsteringMaterials,
    Tools,
    CorrectionGraphs,
}

/// Run `$body` with `$g` bound to the generator type of `$kind`
macro_rules! with_generator {
    ($kind:expr, $g:ident => $body:expr) => {
        match $kind {
            EntityKind::AshesOfWar => {
                type $g = AshesOfWar;
                $body
            }
            EntityKind::BolsteringMaterials => {
                type $g = BolsteringMaterials;
                $body
            }
            EntityKind::Tools => {
                type $g = Tools;
                $body
            }
            EntityKind::CorrectionGraphs => {
                type $g = CorrectionGraphs;
                $body
            }
        }
    };
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::AshesOfWar,
        EntityKind::BolsteringMaterials,
        EntityKind::Tools,
        EntityKind::CorrectionGraphs,
    ];

    /// The given kinds, or every kind when none are given
    pub fn selected(kinds: Vec<EntityKind>) -> Vec<EntityKind> {
        if kinds.is_empty() {
            Self::ALL.to_vec()
        } else {
            kinds
        }
    }

    pub fn output_file(self) -> &'static str {
        with_generator!(self, G => G::OUTPUT_FILE)
    }

    pub fn schema_file(self) -> &'static str {
        with_generator!(self, G => G::SCHEMA_FILE)
    }

    pub fn element_name(self) -> &'static str {
        with_generator!(self, G => G::ELEMENT_NAME)
    }

    /// CMS collection name, derived from the output file name
    pub fn collection(self) -> String {
        self.output_file()
            .trim_end_matches(".json")
            .replace('-', "_")
    }

    pub fn schema(self, store: &SchemaStore) -> erdb::Result<Schema> {
        with_generator!(self, G => G::schema(store))
    }

    pub fn generate<S: DataSource + ?Sized>(
        self,
        source: &S,
        schemas: &SchemaStore,
        version: &GameVersion,
    ) -> erdb::Result<Output> {
        with_generator!(self, G => generators::generate::<G, S>(source, schemas, version))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => write!(f, "{}", value.get_name()),
            None => write!(f, "{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(EntityKind::AshesOfWar.to_string(), "ashes-of-war");
        assert_eq!(EntityKind::AshesOfWar.output_file(), "ashes-of-war.json");
        assert_eq!(EntityKind::BolsteringMaterials.element_name(), "BolsteringMaterials");
        assert_eq!(EntityKind::Tools.schema_file(), "tools.schema.json");
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(EntityKind::AshesOfWar.collection(), "ashes_of_war");
        assert_eq!(EntityKind::CorrectionGraphs.collection(), "correction_graph");
    }

    #[test]
    fn test_output_files_unique() {
        let mut files: Vec<&str> = EntityKind::ALL.iter().map(|k| k.output_file()).collect();
        files.sort_unstable();
        files.dedup();
        assert_eq!(files.len(), EntityKind::ALL.len());
    }

    #[test]
    fn test_selected_defaults_to_all() {
        assert_eq!(EntityKind::selected(Vec::new()).len(), 4);
        assert_eq!(EntityKind::selected(vec![EntityKind::Tools]), vec![EntityKind::Tools]);
    }
}
