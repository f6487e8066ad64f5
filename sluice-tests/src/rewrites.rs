use sluice::{EmptyCatalogQualifier, PrepareOptions, PreparedQuery};

pub fn rewrites(options: &PrepareOptions) {
    let rewrite_catalog = options.rewrites.names().any(|v| v == "empty_catalog_qualifier");

    // Untouched when the pattern is absent
    for sql in [
        "SELECT * FROM idx WHERE a = ?",
        "SELECT \"\" AS empty FROM idx",
        "SELECT \"a\".\"b\" FROM \"a\"",
    ] {
        let query = PreparedQuery::prepare_with(sql, options).expect("Failed to prepare");
        assert_eq!(query.sql(), sql);
    }

    let query = PreparedQuery::prepare_with("SELECT * FROM \"\".idx WHERE a = ?", options)
        .expect("Failed to prepare the query with an empty catalog");
    assert_eq!(query.param_count(), 1);
    if rewrite_catalog {
        assert_eq!(query.sql(), "SELECT * FROM idx WHERE a = ?");
        assert_eq!(query.placeholder_offsets(), [28]);
    } else {
        assert_eq!(query.sql(), "SELECT * FROM \"\".idx WHERE a = ?");
        assert_eq!(query.placeholder_offsets(), [31]);
    }
    assert!(query.get_param(1).is_ok());

    // Quoted table name after the empty catalog
    let query = PreparedQuery::prepare_with(
        "SELECT \"\".\"library\".\"name\" FROM \"\".\"library\" WHERE \"\".\"library\".\"page_count\" > ?",
        options,
    )
    .expect("Failed to prepare the query with quoted names");
    assert_eq!(query.param_count(), 1);
    if rewrite_catalog {
        assert_eq!(
            query.sql(),
            "SELECT \"library\".\"name\" FROM \"library\" WHERE \"library\".\"page_count\" > ?"
        );
        assert!(!query.sql().contains(EmptyCatalogQualifier::PATTERN));
    }
}
