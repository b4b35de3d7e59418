//! `ORDER BY` construction and `LIKE` pattern escaping.
//!
//! Sort columns are derived from the closed [`SortField`] enum, never
//! from request text, so the interpolated clause cannot carry user
//! input. Every clause ends with a `p.id` tie-break to keep the order
//! total even when all sort keys compare equal.

use matrika_types::{SortDirection, SortField, SortKey};

/// The qualified column name for a sort field.
const fn column(field: SortField) -> &'static str {
    match field {
        SortField::FirstName => "p.first_name",
        SortField::LastName => "p.last_name",
        SortField::BirthDate => "p.birth_date",
    }
}

/// The SQL keyword for a sort direction.
const fn direction(dir: SortDirection) -> &'static str {
    match dir {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    }
}

/// Build a complete `ORDER BY` clause body for the given sort keys.
///
/// An empty slice yields just the `p.id ASC` tie-break, which is the
/// behavior of the municipality listing (no default sort of its own).
pub(crate) fn order_by_clause(sort: &[SortKey]) -> String {
    let mut parts: Vec<String> = sort
        .iter()
        .map(|key| format!("{} {}", column(key.field), direction(key.direction)))
        .collect();
    parts.push("p.id ASC".to_owned());
    parts.join(", ")
}

/// Escape `LIKE` wildcards in a user-supplied prefix.
///
/// The queries declare `ESCAPE '\'`, so backslash itself must be
/// escaped first.
pub(crate) fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listing_order() {
        let clause = order_by_clause(&[
            SortKey::asc(SortField::LastName),
            SortKey::asc(SortField::FirstName),
        ]);
        assert_eq!(clause, "p.last_name ASC, p.first_name ASC, p.id ASC");
    }

    #[test]
    fn descending_birth_date_order() {
        let clause = order_by_clause(&[SortKey::desc(SortField::BirthDate)]);
        assert_eq!(clause, "p.birth_date DESC, p.id ASC");
    }

    #[test]
    fn empty_sort_keeps_the_tie_break() {
        assert_eq!(order_by_clause(&[]), "p.id ASC");
    }

    #[test]
    fn plain_prefix_is_untouched() {
        assert_eq!(escape_like("Nov"), "Nov");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
