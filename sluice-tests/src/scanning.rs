use indoc::indoc;
use sluice::{PrepareOptions, PreparedQuery, Region, ScanPolicy, SqlError};

/// Well formed queries and the number of placeholders they contain.
pub const WELL_FORMED: &[(&str, usize)] = &[
    ("SELECT 1", 0),
    ("SELECT ?", 1),
    ("SELECT ?, ?, ?", 3),
    ("??", 2),
    ("SELECT * FROM t WHERE name = '?'", 0),
    ("SELECT * FROM t WHERE name = \"?\"", 0),
    ("SELECT 'it''s a ?' FROM t WHERE a = ?", 1),
    ("SELECT \"odd\"\"?\" FROM t WHERE a = ?", 1),
    ("SELECT 1 -- why ?\nWHERE a = ?", 1),
    ("SELECT 1 -- trailing ?", 0),
    ("SELECT /* ? */ ? /**/ ?", 2),
    // Block comments do not nest
    ("SELECT ? /* nested /* */ ? */ ?", 3),
    ("SELECT a-?", 1),
    ("SELECT a/?", 1),
    ("SELECT 'é?' || ? FROM ü", 1),
    (
        indoc! {r#"
            SELECT "emp"."name", 'It''s ?' AS quote -- comment with ?
            FROM emp /* multi
               line ? comment */
            WHERE emp.id = ?
              AND emp.dept IN (?, ?)
        "#},
        3,
    ),
];

/// Queries ending inside an unterminated region, with the placeholders found
/// before the region opens.
pub const UNTERMINATED: &[(&str, Region, usize)] = &[
    ("SELECT 1 WHERE x = '", Region::String, 0),
    ("SELECT ? WHERE x = 'it''s", Region::String, 1),
    ("SELECT ?, \"col", Region::QuotedIdentifier, 1),
    ("SELECT ? /* ?", Region::BlockComment, 1),
];

pub fn scanning(options: &PrepareOptions) {
    for (sql, expected) in WELL_FORMED {
        let query = PreparedQuery::prepare_with(sql, options)
            .unwrap_or_else(|e| panic!("Failed to prepare `{sql}`: {e:#}"));
        assert_eq!(query.param_count(), *expected, "Wrong count for `{sql}`");
        assert_eq!(query.params().len(), *expected);
        for offset in query.placeholder_offsets() {
            assert_eq!(&query.sql()[*offset..*offset + 1], "?");
        }
    }
    crate::silent_logs! {
        for (sql, region, found) in UNTERMINATED {
            let result = PreparedQuery::prepare_with(sql, options);
            match options.scan_policy {
                ScanPolicy::Strict => {
                    let error = result.expect_err(&format!("`{sql}` should not prepare"));
                    assert!(
                        matches!(
                            error.downcast_ref::<SqlError>(),
                            Some(SqlError::MalformedSql { region: r, .. }) if r == region
                        ),
                        "Unexpected error for `{sql}`: {error:#}"
                    );
                }
                ScanPolicy::Lenient => {
                    let query =
                        result.unwrap_or_else(|e| panic!("Failed to prepare `{sql}`: {e:#}"));
                    assert_eq!(query.param_count(), *found, "Wrong count for `{sql}`");
                }
            }
        }
    }
}
