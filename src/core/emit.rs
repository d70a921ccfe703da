//! TypeScript module generation.
//!
//! The emitted module is self-contained: enums for languages and namespaces,
//! one key union per namespace, two lookup interfaces keyed by the namespace
//! enum, and a fixed set of helper types exposed as `TranslationMapping` and
//! `TranslationsMapping`.
//!
//! Output is a pure function of its inputs, so unchanged translation files
//! always produce byte-identical text.

use std::{collections::HashMap, fmt::Write};

use crate::{
    core::loader::NamespaceMap,
    error::{Error, Result},
    utils::to_pascal_identifier,
};

pub const DEFAULT_DELIMITER: &str = ":";

/// Number of tuple elements `PickMultiple` can distinguish. Longer tuples only
/// contribute their first `MAX_PICK_ARITY` namespaces.
pub const MAX_PICK_ARITY: usize = 7;

const KEY_SUFFIX: &str = "Keys";
const SINGLE_MAP: &str = "SingleMap";
const NAMESPACED_MAP: &str = "NamespacedMap";

const HEADER: &str = "\
// THIS FILE IS AUTOMATICALLY GENERATED BY i18n-typegen
// DO NOT EDIT MANUALLY, YOUR CHANGES WILL BE OVERWRITTEN
";

const MAPPING_ALIASES: &str = "\
export type TranslationMapping<X extends Namespace> = PickMap<X>;
export type TranslationsMapping<X extends Namespace[]> = PickMultiple<X>;
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Separator between namespace and key in `NamespacedMap` template literals.
    pub delimiter: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

/// Render the complete TypeScript module.
pub fn emit(languages: &[String], namespaces: &NamespaceMap, options: &EmitOptions) -> String {
    let mut sections = vec![HEADER.to_string()];

    if !languages.is_empty() {
        sections.push(enum_declaration("Language", languages));
    }
    let names: Vec<String> = namespaces.keys().cloned().collect();
    sections.push(enum_declaration("Namespace", &names));
    sections.push(key_types(namespaces));
    sections.push(translation_key_type(namespaces));
    sections.push(single_map(namespaces));
    sections.push(namespaced_map(namespaces, &options.delimiter));
    sections.push(pick_helpers());
    sections.push(MAPPING_ALIASES.to_string());

    sections.retain(|section| !section.is_empty());
    sections.join("\n")
}

/// Fail when two languages or two namespaces normalize to the same identifier,
/// which would emit duplicate enum members and key type aliases.
pub fn check_identifiers(languages: &[String], namespaces: &NamespaceMap) -> Result<()> {
    unique_identifiers("language", languages.iter())?;
    unique_identifiers("namespace", namespaces.keys())
}

fn unique_identifiers<'a>(kind: &str, names: impl Iterator<Item = &'a String>) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for name in names {
        let ident = to_pascal_identifier(name);
        if let Some(first) = seen.get(&ident) {
            return Err(Error::configuration(format!(
                "{kind}s '{first}' and '{name}' both map to the identifier '{ident}'"
            )));
        }
        seen.insert(ident, name);
    }
    Ok(())
}

/// `export enum Name { Ident = 'value', ... }`
fn enum_declaration(name: &str, values: &[String]) -> String {
    let mut out = format!("export enum {} {{\n", name);
    for (i, value) in values.iter().enumerate() {
        let separator = if i + 1 < values.len() { "," } else { "" };
        let _ = writeln!(
            out,
            "  {} = {}{}",
            to_pascal_identifier(value),
            string_literal(value),
            separator
        );
    }
    out.push_str("}\n");
    out
}

fn key_type_name(namespace: &str) -> String {
    format!("{}{}", to_pascal_identifier(namespace), KEY_SUFFIX)
}

fn namespace_member(namespace: &str) -> String {
    format!("Namespace.{}", to_pascal_identifier(namespace))
}

/// Join union members, falling back to `never` for an empty union.
fn union(members: impl IntoIterator<Item = String>) -> String {
    let joined = members.into_iter().collect::<Vec<_>>().join(" | ");
    if joined.is_empty() {
        "never".to_string()
    } else {
        joined
    }
}

fn key_types(namespaces: &NamespaceMap) -> String {
    let mut out = String::new();
    for (namespace, keys) in namespaces {
        let _ = writeln!(
            out,
            "export type {} = {};",
            key_type_name(namespace),
            union(keys.iter().map(|key| string_literal(key)))
        );
    }
    out
}

fn translation_key_type(namespaces: &NamespaceMap) -> String {
    format!(
        "export type TranslationKey = {};\n",
        union(namespaces.keys().map(|ns| key_type_name(ns)))
    )
}

fn single_map(namespaces: &NamespaceMap) -> String {
    let mut out = format!("interface {} {{\n", SINGLE_MAP);
    for namespace in namespaces.keys() {
        let _ = writeln!(
            out,
            "  [{}]: {};",
            namespace_member(namespace),
            key_type_name(namespace)
        );
    }
    out.push_str("}\n");
    out
}

fn namespaced_map(namespaces: &NamespaceMap, delimiter: &str) -> String {
    let mut out = format!("interface {} {{\n", NAMESPACED_MAP);
    for namespace in namespaces.keys() {
        let _ = writeln!(
            out,
            "  [{}]: `{}{}${{{}}}`;",
            namespace_member(namespace),
            escape_template_literal(namespace),
            escape_template_literal(delimiter),
            key_type_name(namespace)
        );
    }
    out.push_str("}\n");
    out
}

/// `PickMap` and the fixed-arity `PickMultiple` conditional chain.
///
/// A single selected namespace resolves through `SingleMap`; two or more
/// resolve to the union of their `NamespacedMap` entries so keys stay
/// unambiguous across namespaces.
fn pick_helpers() -> String {
    let mut out = format!("type PickMap<X extends Namespace> = {}[X];\n", SINGLE_MAP);
    out.push_str("type PickMultiple<X extends Namespace[]> =");

    for arity in 1..MAX_PICK_ARITY {
        let lead = if arity == 1 { " " } else { "\n  : " };
        let _ = write!(
            out,
            "{}X extends {{ length: {} }} ? {}",
            lead,
            arity,
            pick_union(arity)
        );
    }
    let _ = writeln!(out, "\n  : {};", pick_union(MAX_PICK_ARITY));
    out
}

fn pick_union(arity: usize) -> String {
    let map = if arity == 1 { SINGLE_MAP } else { NAMESPACED_MAP };
    (0..arity)
        .map(|i| format!("{}[X[{}]]", map, i))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Single-quoted TypeScript string literal.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Escape text placed inside a backtick template literal.
fn escape_template_literal(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
