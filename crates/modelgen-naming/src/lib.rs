//! Naming conventions shared by every generated artifact.
//!
//! All conversions are pure, ASCII-only and locale independent. This crate has
//! no dependencies and can be used by any other modelgen crate.

// ============================================================================
// Case Conversion
// ============================================================================

/// Convert snake_case (or kebab-case) to PascalCase.
///
/// Every segment keeps its first character upper-cased and the rest
/// lower-cased. Empty segments (leading, trailing or doubled separators)
/// contribute nothing.
///
/// # Examples
/// ```
/// use modelgen_naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("room_type"), "RoomType");
/// assert_eq!(to_pascal_case("user"), "User");
/// assert_eq!(to_pascal_case("userID"), "Userid");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for segment in s.split(['_', '-']) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    result
}

/// Convert PascalCase to camelCase by lower-casing the first character.
///
/// # Examples
/// ```
/// use modelgen_naming::to_camel_case;
///
/// assert_eq!(to_camel_case("RoomType"), "roomType");
/// assert_eq!(to_camel_case("Id"), "id");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(s.len());
            result.push(first.to_ascii_lowercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Convert PascalCase to kebab-case.
///
/// Each upper-case character after the first position starts a new word.
///
/// # Examples
/// ```
/// use modelgen_naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("RoomType"), "room-type");
/// assert_eq!(to_kebab_case("Categories"), "categories");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    split_words(s, '-')
}

/// Convert PascalCase or kebab-case back to snake_case.
///
/// # Examples
/// ```
/// use modelgen_naming::to_snake_case;
///
/// assert_eq!(to_snake_case("RoomType"), "room_type");
/// assert_eq!(to_snake_case("room-type"), "room_type");
/// ```
pub fn to_snake_case(s: &str) -> String {
    split_words(&s.replace('-', "_"), '_')
}

fn split_words(s: &str, separator: char) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut previous: Option<char> = None;
    for c in s.chars() {
        if c.is_ascii_uppercase() && previous.is_some_and(|p| p != separator) {
            result.push(separator);
        }
        result.push(c.to_ascii_lowercase());
        previous = Some(c);
    }
    result
}

/// Convert snake_case to space separated title words.
///
/// # Examples
/// ```
/// use modelgen_naming::humanize;
///
/// assert_eq!(humanize("room_rack"), "Room Rack");
/// ```
pub fn humanize(s: &str) -> String {
    s.split('_')
        .filter(|segment| !segment.is_empty())
        .map(to_pascal_case)
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Pluralization
// ============================================================================

/// Pluralize a PascalCase class name.
///
/// A trailing `y` becomes `ies`, a trailing `s` or `x` gets `es`, anything
/// else gets `s`.
///
/// # Examples
/// ```
/// use modelgen_naming::pluralize;
///
/// assert_eq!(pluralize("Category"), "Categories");
/// assert_eq!(pluralize("Address"), "Addresses");
/// assert_eq!(pluralize("Box"), "Boxes");
/// assert_eq!(pluralize("Room"), "Rooms");
/// ```
pub fn pluralize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('y') {
        format!("{}ies", stem)
    } else if name.ends_with('s') || name.ends_with('x') {
        format!("{}es", name)
    } else {
        format!("{}s", name)
    }
}

// ============================================================================
// Reference Naming
// ============================================================================

/// Suffix that marks a PascalCase column name as a reference to another table.
pub const REFERENCE_SUFFIX: &str = "Id";

/// Return the referenced type name when `pascal` follows the `<Type>Id`
/// convention.
///
/// A bare `Id` is the table's own key, not a reference.
///
/// # Examples
/// ```
/// use modelgen_naming::reference_target;
///
/// assert_eq!(reference_target("RoomId"), Some("Room"));
/// assert_eq!(reference_target("Id"), None);
/// assert_eq!(reference_target("Paid"), None);
/// ```
pub fn reference_target(pascal: &str) -> Option<&str> {
    if pascal.len() > REFERENCE_SUFFIX.len() {
        pascal.strip_suffix(REFERENCE_SUFFIX)
    } else {
        None
    }
}
