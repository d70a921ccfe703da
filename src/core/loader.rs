//! Content loading: read every discovered namespace file and flatten its keys.

use indexmap::IndexMap;

use crate::{
    core::{parsers::json::flatten_keys, parsers::json::parse_json_bytes, resolve::TranslationFile},
    error::{Error, Result},
    fs::FileSystem,
};

/// Namespace name → flattened key paths, in namespace discovery order.
pub type NamespaceMap = IndexMap<String, Vec<String>>;

/// Load and flatten every file, sequentially and in the given order.
///
/// When two files map to the same namespace the later one replaces the
/// earlier one's keys; the namespace keeps its first position.
pub fn load(files: &[TranslationFile], fs: &dyn FileSystem) -> Result<NamespaceMap> {
    let mut namespaces = NamespaceMap::new();

    for file in files {
        let bytes = fs.read(&file.path).map_err(|source| Error::Read {
            path: file.path.clone(),
            source,
        })?;
        let keys = parse_json_bytes(&file.path, &bytes)?
            .map(|json| flatten_keys(&json))
            .unwrap_or_default();
        tracing::debug!(
            namespace = %file.namespace,
            path = %file.path.display(),
            keys = keys.len(),
            "loaded namespace"
        );

        if namespaces.insert(file.namespace.clone(), keys).is_some() {
            tracing::warn!(
                namespace = %file.namespace,
                path = %file.path.display(),
                "duplicate namespace, keeping keys from the last file"
            );
        }
    }

    Ok(namespaces)
}
