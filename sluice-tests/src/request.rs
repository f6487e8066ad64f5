use sluice::{DataType, PrepareOptions, PreparedQuery, QueryRequest, TypedParamValue, Value};

pub fn request(options: &PrepareOptions) {
    let mut query = PreparedQuery::prepare_with(
        "SELECT name FROM emp WHERE dept = ? AND age > ? AND active = ?",
        options,
    )
    .expect("Failed to prepare the query");
    query
        .bind(1, "R&D")
        .and_then(|q| q.bind(2, 30))
        .expect("Failed to bind");

    let request = QueryRequest::from_prepared(&query);
    assert_eq!(request.query, query.sql());
    assert_eq!(
        request.params,
        [
            TypedParamValue {
                type_name: "KEYWORD",
                value: Value::Varchar("R&D".into()),
            },
            TypedParamValue {
                type_name: "INTEGER",
                value: Value::Integer(30),
            },
            TypedParamValue {
                type_name: "KEYWORD",
                value: Value::Null,
            },
        ]
    );
    let json = request
        .clone()
        .with_fetch_size(1000)
        .to_json()
        .expect("Failed to serialize the request");
    assert_eq!(
        json,
        r#"{"query":"SELECT name FROM emp WHERE dept = ? AND age > ? AND active = ?","params":[{"type":"KEYWORD","value":"R&D"},{"type":"INTEGER","value":30},{"type":"KEYWORD","value":null}],"fetch_size":1000}"#
    );

    // The request reflects the latest binding
    query
        .set_param(3, Value::Boolean(true), DataType::Boolean)
        .expect("Failed to set");
    let request: QueryRequest = (&query).into();
    assert_eq!(
        request.params[2],
        TypedParamValue {
            type_name: "BOOLEAN",
            value: Value::Boolean(true),
        }
    );

    // No parameters, no params field
    let query = PreparedQuery::prepare_with("SELECT 1", options).expect("Failed to prepare");
    let json = QueryRequest::from_prepared(&query)
        .with_time_zone("Z")
        .to_json()
        .expect("Failed to serialize the request");
    assert_eq!(json, r#"{"query":"SELECT 1","time_zone":"Z"}"#);
}
