//! Path template resolution.
//!
//! A template such as `locales/{{lang}}/{{ns}}.json` is expanded into the list
//! of discovered languages and one [`TranslationFile`] per namespace file of the
//! default language.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use glob::Pattern;
use regex::Regex;

use crate::{
    error::{Error, Result},
    fs::FileSystem,
};

pub const NAMESPACE_PLACEHOLDER: &str = "{{ns}}";
pub const LANGUAGE_PLACEHOLDER: &str = "{{lang}}";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{.*?\}\}").expect("placeholder regex is valid"));

/// A namespace file discovered for the default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    pub path: PathBuf,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory names found under the `{{lang}}` prefix, in enumeration order.
    pub languages: Vec<String>,
    /// `None` when the template has no `{{lang}}` placeholder.
    pub default_language: Option<String>,
    /// The glob pattern that was expanded to find namespace files.
    pub pattern: String,
    pub files: Vec<TranslationFile>,
}

/// Placeholder tokens (`{{...}}`) appearing in a template, in order.
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .find_iter(template)
        .map(|m| m.as_str())
        .collect()
}

/// Resolve a path template against the filesystem.
///
/// A relative template is anchored at `base_dir`, whose path is escaped before
/// it becomes part of the glob pattern.
///
/// Fails with [`Error::Configuration`] before any filesystem access when the
/// template has no `{{ns}}` placeholder, and with [`Error::NoTranslationFiles`]
/// when the pattern matches nothing.
pub fn resolve(
    template: &str,
    explicit_language: Option<&str>,
    base_dir: &Path,
    fs: &dyn FileSystem,
) -> Result<ResolvedPaths> {
    let tokens = placeholders(template);
    if !tokens.contains(&NAMESPACE_PLACEHOLDER) {
        return Err(Error::configuration(format!(
            "no {} (namespace) placeholder found in path '{}'",
            NAMESPACE_PLACEHOLDER, template
        )));
    }
    for token in tokens
        .iter()
        .filter(|t| **t != NAMESPACE_PLACEHOLDER && **t != LANGUAGE_PLACEHOLDER)
    {
        tracing::debug!(token, "ignoring unknown placeholder");
    }

    let (languages, default_language, template) = match template.find(LANGUAGE_PLACEHOLDER) {
        Some(index) => {
            let prefix = base_dir.join(language_prefix(&template[..index]));
            let languages = fs
                .list_dirs(&prefix)
                .map_err(|e| Error::discovery(prefix.display().to_string(), e))?;
            tracing::debug!(?languages, prefix = %prefix.display(), "discovered languages");

            let default_language = select_default_language(&languages, explicit_language)?;
            let template =
                template.replace(LANGUAGE_PLACEHOLDER, &Pattern::escape(&default_language));
            (languages, Some(default_language), template)
        }
        None => (Vec::new(), None, template.to_string()),
    };

    let pattern = anchor_pattern(base_dir, &template.replace(NAMESPACE_PLACEHOLDER, "*"));
    let files = fs
        .glob(&pattern)
        .map_err(|e| Error::discovery(pattern.clone(), e))?
        .into_iter()
        .map(|path| {
            let namespace = namespace_from_path(&path.to_string_lossy());
            TranslationFile { path, namespace }
        })
        .collect::<Vec<_>>();
    tracing::debug!(pattern = %pattern, count = files.len(), "matched namespace files");
    if files.is_empty() {
        return Err(Error::NoTranslationFiles { pattern });
    }

    Ok(ResolvedPaths {
        languages,
        default_language,
        pattern,
        files,
    })
}

fn language_prefix(prefix: &str) -> &Path {
    if prefix.is_empty() {
        Path::new(".")
    } else {
        Path::new(prefix)
    }
}

/// Prefix a relative glob pattern with the escaped `base_dir`.
fn anchor_pattern(base_dir: &Path, pattern: &str) -> String {
    if base_dir.as_os_str().is_empty() || Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }
    let base = Pattern::escape(&base_dir.to_string_lossy());
    Path::new(&base).join(pattern).to_string_lossy().into_owned()
}

fn select_default_language(languages: &[String], explicit: Option<&str>) -> Result<String> {
    match explicit {
        Some(lang) => {
            if !languages.iter().any(|l| l == lang) {
                tracing::warn!(lang, "default language was not found among language directories");
            }
            Ok(lang.to_string())
        }
        None => languages
            .first()
            .cloned()
            .ok_or_else(|| Error::configuration("no valid language found")),
    }
}

/// Derive a namespace from a file path: the base name without its final
/// extension, lowercased.
///
/// Both `/` and `\` are treated as separators regardless of the host OS.
///
/// ```
/// use i18n_typegen::core::resolve::namespace_from_path;
///
/// assert_eq!(namespace_from_path("locales/en/Common.json"), "common");
/// assert_eq!(namespace_from_path(r"C:\locales\en\sign-up.json"), "sign-up");
/// ```
pub fn namespace_from_path(path: &str) -> String {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem = match file_name.rfind('.') {
        Some(index) if index > 0 => &file_name[..index],
        _ => file_name,
    };
    stem.to_lowercase()
}
