//! Local segment manager component

use std::path::{Path, PathBuf};
use std::sync::Arc;

use locus_application::ports::registry::{COMPONENTS, ComponentEntry};
use locus_domain::constants::LOCAL_SEGMENT_MANAGER_IMPLEMENTATION;
use locus_domain::error::{Error, Result};
use locus_domain::ports::Component;
use locus_domain::value_objects::{MigrationsPolicy, Setting, Settings};

/// Segment manager keeping segments under the persist directory
#[derive(Debug)]
pub struct LocalSegmentManager {
    root: PathBuf,
    migrations: MigrationsPolicy,
}

impl LocalSegmentManager {
    /// Root the manager at `persist_directory`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            root: PathBuf::from(settings.validate_text(Setting::PersistDirectory)?),
            migrations: settings.migrations_policy,
        })
    }

    /// Directory holding all segments
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Migration handling at startup
    pub fn migrations(&self) -> MigrationsPolicy {
        self.migrations
    }

    /// Directory for one collection's segments
    pub fn segment_path(&self, collection: &str) -> Result<PathBuf> {
        let valid = !collection.is_empty()
            && collection
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));
        if !valid {
            return Err(Error::invalid_argument(format!(
                "Invalid collection name: '{collection}'"
            )));
        }
        Ok(self.root.join(collection))
    }
}

impl Component for LocalSegmentManager {
    fn component_name(&self) -> &str {
        "local-segments"
    }
}

#[linkme::distributed_slice(COMPONENTS)]
static LOCAL_SEGMENT_MANAGER_COMPONENT: ComponentEntry = ComponentEntry {
    identifier: LOCAL_SEGMENT_MANAGER_IMPLEMENTATION,
    description: "Segment manager rooted at the persist directory",
    factory: |settings: &Settings| Ok(Arc::new(LocalSegmentManager::from_settings(settings)?)),
};
