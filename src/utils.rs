//! Common utility functions shared across the codebase.

/// Converts a namespace or language string into a PascalCase identifier.
///
/// The string is split on `_`, then on `-`, then on any other character that
/// cannot appear in a TypeScript identifier. Each segment keeps its casing
/// except for the first character, which is uppercased. A leading digit (or an
/// empty result) gets a `_` prefix.
///
/// # Examples
///
/// ```
/// use i18n_typegen::utils::to_pascal_identifier;
///
/// assert_eq!(to_pascal_identifier("common"), "Common");
/// assert_eq!(to_pascal_identifier("sign-up"), "SignUp");
/// assert_eq!(to_pascal_identifier("error_codes"), "ErrorCodes");
/// assert_eq!(to_pascal_identifier("zh-CN"), "ZhCN");
/// ```
pub fn to_pascal_identifier(text: &str) -> String {
    let ident: String = text
        .split('_')
        .flat_map(|part| part.split('-'))
        .flat_map(|part| part.split(|c: char| !is_identifier_char(c)))
        .map(capitalize)
        .collect();

    match ident.chars().next() {
        Some(first) if !first.is_ascii_digit() => ident,
        _ => format!("_{}", ident),
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '$'
}
