#[cfg(test)]
mod tests {
    use indoc::indoc;
    use sluice_core::{
        DataType, ParamSlot, PrepareOptions, PreparedQuery, Rewrites, ScanPolicy, SqlError, Value,
    };

    fn index_error(result: sluice_core::Result<ParamSlot>) -> i64 {
        match result
            .expect_err("Should fail")
            .downcast_ref::<SqlError>()
        {
            Some(SqlError::InvalidParameterIndex(i)) => *i,
            other => panic!("Unexpected error {other:?}"),
        }
    }

    #[test]
    fn prepare() {
        let query = PreparedQuery::prepare("SELECT * FROM \"\".idx WHERE a = ?").unwrap();
        assert_eq!(query.sql(), "SELECT * FROM idx WHERE a = ?");
        assert_eq!(query.param_count(), 1);
        assert_eq!(query.placeholder_offsets(), [28]);
        assert_eq!(query.get_param(1).unwrap(), ParamSlot::default());

        let query = PreparedQuery::prepare(String::from("SELECT 1")).unwrap();
        assert_eq!(query.param_count(), 0);
        assert!(query.params().is_empty());
    }

    #[test]
    fn prepare_malformed() {
        let error = PreparedQuery::prepare("SELECT 1 WHERE x = '").unwrap_err();
        assert!(matches!(
            error.downcast_ref::<SqlError>(),
            Some(SqlError::MalformedSql { .. })
        ));
        let error = PreparedQuery::prepare("SELECT ? /* ?").unwrap_err();
        assert!(matches!(
            error.downcast_ref::<SqlError>(),
            Some(SqlError::MalformedSql { .. })
        ));

        let options = PrepareOptions::default().with_scan_policy(ScanPolicy::Lenient);
        let query = PreparedQuery::prepare_with("SELECT ? WHERE x = '?", &options).unwrap();
        assert_eq!(query.param_count(), 1);
        assert_eq!(query.sql(), "SELECT ? WHERE x = '?");
    }

    #[test]
    fn prepare_without_rewrites() {
        let options = PrepareOptions::default().with_rewrites(Rewrites::none());
        let query = PreparedQuery::prepare_with("SELECT * FROM \"\".idx WHERE a = ?", &options)
            .unwrap();
        assert_eq!(query.sql(), "SELECT * FROM \"\".idx WHERE a = ?");
        assert_eq!(query.param_count(), 1);
    }

    #[test]
    fn positions() {
        let mut query = PreparedQuery::prepare("SELECT ?, ?").unwrap();
        assert_eq!(index_error(query.get_param(0)), 0);
        assert_eq!(index_error(query.get_param(3)), 3);
        assert_eq!(index_error(query.get_param(-7)), -7);
        assert!(query.get_param(1).is_ok());
        assert!(query.get_param(2).is_ok());

        query
            .set_param(2, Value::Integer(5), DataType::Integer)
            .unwrap();
        let error = query
            .set_param(3, Value::Integer(6), DataType::Integer)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid parameter index [3]"
        );
        assert_eq!(
            query.get_param(2).unwrap(),
            ParamSlot::new(Value::Integer(5), DataType::Integer)
        );
        assert_eq!(query.get_param(1).unwrap(), ParamSlot::default());
    }

    #[test]
    fn copy_out() {
        let mut query = PreparedQuery::prepare("SELECT ?").unwrap();
        let mut slot = query.get_param(1).unwrap();
        slot.value = Value::Boolean(true);
        assert_eq!(query.get_param(1).unwrap().value, Value::Null);

        query.bind(1, 10i64).unwrap();
        let params = query.params();
        query.clear_params();
        assert_eq!(params[0].value, Value::Long(10));
        assert_eq!(query.params()[0].value, Value::Null);
    }

    #[test]
    fn bind_value() {
        let mut query = PreparedQuery::prepare("SELECT ?, ?, ?").unwrap();
        query
            .bind_value(1, Value::Integer(5))
            .and_then(|q| q.bind_value(2, Value::Varchar("x".into())))
            .unwrap();
        assert_eq!(
            query.get_param(1).unwrap(),
            ParamSlot::new(Value::Integer(5), DataType::Integer)
        );
        assert_eq!(
            query.get_param(2).unwrap(),
            ParamSlot::new(Value::Varchar("x".into()), DataType::Keyword)
        );
        query.bind_value(3, Value::Null).unwrap();
        assert_eq!(query.get_param(3).unwrap().data_type, DataType::Null);
        assert!(query.bind_value(4, Value::Null).is_err());
    }

    #[test]
    fn display() {
        let mut query = PreparedQuery::prepare("SELECT ? || ?, ?").unwrap();
        query
            .bind(1, "it's")
            .and_then(|q| q.bind(2, 7))
            .unwrap();
        assert_eq!(
            query.to_string(),
            "SELECT ? || ?, ? [KEYWORD 'it''s', INTEGER 7, KEYWORD null]"
        );
        let query = PreparedQuery::prepare("SELECT 1").unwrap();
        assert_eq!(query.to_string(), "SELECT 1 []");

        let long = format!("SELECT {} ?", "x".repeat(600));
        let query = PreparedQuery::prepare(&long).unwrap();
        let rendered = query.to_string();
        assert!(rendered.len() < long.len());
        assert!(rendered.ends_with("... [KEYWORD null]"), "{rendered}");
    }

    #[test]
    fn multiline() {
        let sql = indoc! {"
            SELECT e.name, d.name -- department ?
            FROM \"\".emp e
            JOIN \"\".dept d ON e.dept_id = d.id
            WHERE e.hired > ?
              AND d.name <> 'R&D?'
        "};
        let query = PreparedQuery::prepare(sql).unwrap();
        assert_eq!(query.param_count(), 1);
        assert!(!query.sql().contains("\"\"."));
        let offset = query.placeholder_offsets()[0];
        assert!(query.sql()[..offset].ends_with("e.hired > "));
    }
}
