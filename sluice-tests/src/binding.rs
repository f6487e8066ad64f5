use rust_decimal::Decimal;
use sluice::{AsValue, DataType, ParamSlot, PrepareOptions, PreparedQuery, SqlError, Value};
use std::str::FromStr;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

fn assert_invalid_index(query: &PreparedQuery, position: i64) {
    let error = query
        .get_param(position)
        .expect_err(&format!("Position {position} should be rejected"));
    assert_eq!(
        error.downcast_ref::<SqlError>(),
        Some(&SqlError::InvalidParameterIndex(position))
    );
}

pub fn binding(options: &PrepareOptions) {
    let mut query = PreparedQuery::prepare_with(
        "INSERT INTO trade (id, symbol, price, quantity, day, at, tags, raw) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        options,
    )
    .expect("Failed to prepare the insert");
    let count = query.param_count();
    assert_eq!(count, 8);

    // Fresh slots
    for i in 1..=count as i64 {
        assert_eq!(query.get_param(i).unwrap(), ParamSlot::default());
        assert_eq!(
            query.get_param(i).unwrap(),
            ParamSlot::new(Value::Null, DataType::Keyword)
        );
    }
    assert_eq!(query.unbound_positions(), (1..=count).collect::<Vec<_>>());

    // Explicit types
    let day = Date::from_calendar_date(2025, Month::March, 14).unwrap();
    let at = PrimitiveDateTime::new(day, Time::from_hms_milli(9, 30, 0, 250).unwrap());
    let bound = [
        (Value::Long(9_007_199_254_740_993), DataType::Long),
        (Value::Varchar("ACME".into()), DataType::Keyword),
        (
            Value::Decimal(Decimal::from_str("101.25").unwrap()),
            DataType::ScaledFloat,
        ),
        (Value::Short(300), DataType::Short),
        (Value::Date(day), DataType::Date),
        (Value::Timestamp(at), DataType::Datetime),
        (Value::Varchar("energy, futures".into()), DataType::Text),
        (Value::Blob(vec![0xde_u8, 0xad].into_boxed_slice()), DataType::Binary),
    ];
    for (i, (value, data_type)) in bound.iter().enumerate() {
        query
            .set_param(i as i64 + 1, value.clone(), *data_type)
            .expect("Failed to set the parameter");
    }
    for (i, (value, data_type)) in bound.iter().enumerate() {
        let slot = query.get_param(i as i64 + 1).unwrap();
        assert_eq!(&slot.value, value);
        assert_eq!(&slot.data_type, data_type);
        let param = &query.params()[i];
        assert_eq!(param.type_name, data_type.name());
        assert_eq!(&param.value, value);
    }
    assert!(query.unbound_positions().is_empty());
    assert_eq!(query.param_count(), count);

    // Out of range positions leave everything as it was
    let before = query.params();
    crate::silent_logs! {
        for position in [0, -1, i64::MIN, count as i64 + 1, i64::MAX] {
            assert_invalid_index(&query, position);
            let error = query
                .set_param(position, Value::Boolean(true), DataType::Boolean)
                .expect_err("Setting out of range should fail");
            assert!(matches!(
                error.downcast_ref::<SqlError>(),
                Some(SqlError::InvalidParameterIndex(p)) if *p == position
            ));
            assert!(query.bind(position, 1).is_err());
        }
    }
    assert_eq!(query.params(), before);
    assert_eq!(query.param_count(), count);

    // Overwriting replaces value and type together
    query
        .set_param(3, Value::Null, DataType::Null)
        .expect("Failed to set a null");
    assert_eq!(
        query.get_param(3).unwrap(),
        ParamSlot::new(Value::Null, DataType::Null)
    );
    assert!(query.unbound_positions().is_empty());

    // Inferred types
    let id = Uuid::new_v4();
    let zoned = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    query
        .bind(1, id)
        .and_then(|q| q.bind(2, Some("ACME")))
        .and_then(|q| q.bind(3, 99.5f64))
        .and_then(|q| q.bind(4, None::<i32>))
        .and_then(|q| q.bind(5, day))
        .and_then(|q| q.bind(6, zoned))
        .and_then(|q| q.bind(7, false))
        .and_then(|q| q.bind(8, vec![1u8, 2, 3]))
        .expect("Failed to bind the parameters");
    let types: Vec<_> = query.params().iter().map(|v| v.type_name).collect();
    assert_eq!(
        types,
        [
            "KEYWORD", "KEYWORD", "DOUBLE", "INTEGER", "DATE", "DATETIME", "BOOLEAN", "BINARY"
        ]
    );
    assert_eq!(
        query.get_param(1).unwrap().value,
        Value::Varchar(id.hyphenated().to_string())
    );
    assert_eq!(query.get_param(4).unwrap().value, Value::Null);
    assert_eq!(query.get_param(8).unwrap().value, vec![1u8, 2, 3].as_value());
    assert_eq!(<Option<Date>>::data_type(), DataType::Date);

    // Clearing
    query.clear_params();
    assert_eq!(query.param_count(), count);
    for param in query.params() {
        assert_eq!(param.type_name, "KEYWORD");
        assert_eq!(param.value, Value::Null);
    }
    assert_eq!(query.unbound_positions().len(), count);
    query.bind(2, "again").expect("Failed to bind after clearing");
    assert_eq!(query.unbound_positions(), [1, 3, 4, 5, 6, 7, 8]);

    // No placeholders at all
    let mut query =
        PreparedQuery::prepare_with("SELECT '?' FROM dual", options).expect("Failed to prepare");
    assert_eq!(query.param_count(), 0);
    assert!(query.params().is_empty());
    crate::silent_logs! {
        assert_invalid_index(&query, 1);
    }
    query.clear_params();
    assert_eq!(query.param_count(), 0);
}
