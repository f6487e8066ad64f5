#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use sluice::{AsValue, DataType, PreparedQuery, QueryRequest, TypedParamValue, Value};
    use std::str::FromStr;
    use time::macros::{date, datetime, time};
    use uuid::Uuid;

    macro_rules! test_json {
        ($value:expr, $expected:expr) => {{
            let value: Value = $value.into();
            assert_eq!(
                serde_json::to_value(&value).expect("Could not serialize"),
                $expected
            );
        }};
    }

    #[test]
    fn values() {
        test_json!(Value::Null, json!(null));
        test_json!(true, json!(true));
        test_json!(-8i8, json!(-8));
        test_json!(1234i16, json!(1234));
        test_json!(-2147483648i32, json!(-2147483648i64));
        test_json!(9223372036854775807i64, json!(9223372036854775807i64));
        test_json!(200u8, json!(200));
        test_json!(0.5f32, json!(0.5));
        test_json!(-1.25f64, json!(-1.25));
        test_json!(Decimal::from_str("12.5").unwrap(), json!(12.5));
        test_json!("O'Reilly", json!("O'Reilly"));
        test_json!(vec![0x00u8, 0xff, 0x10], json!("00ff10"));
        test_json!(date!(2024 - 02 - 29), json!("2024-02-29"));
        test_json!(time!(23:59:01.5), json!("23:59:01.5"));
        test_json!(time!(0:00:00.000_001), json!("00:00:00.000001"));
        test_json!(
            datetime!(1999-12-31 23:59:59),
            json!("1999-12-31T23:59:59.0")
        );
        test_json!(
            datetime!(2020-01-01 0:00 UTC),
            json!("2020-01-01T00:00:00.0+00:00")
        );
        test_json!(
            datetime!(2020-01-01 10:30 +02:00),
            json!("2020-01-01T10:30:00.0+02:00")
        );
        let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        test_json!(id, json!("67e55044-10b1-426f-9247-bb680e5fe0c8"));
    }

    #[test]
    fn zoned_timestamps() {
        test_json!(
            datetime!(2020-01-01 10:30 +01:00:30),
            json!("2020-01-01T10:30:00.0+01:00:30")
        );
        test_json!(
            datetime!(2020-01-01 10:30:00.25 -05:30),
            json!("2020-01-01T10:30:00.25-05:30")
        );
        test_json!(
            datetime!(-0001-01-01 0:00 UTC),
            json!("-0001-01-01T00:00:00.0+00:00")
        );

        let mut query = PreparedQuery::prepare("SELECT ?, ?").unwrap();
        query
            .bind(1, datetime!(2020-01-01 10:30 +01:00:30))
            .and_then(|q| q.bind(2, datetime!(-0001-01-01 0:00 UTC)))
            .unwrap();
        let json = QueryRequest::from_prepared(&query).to_json().unwrap();
        assert!(json.contains(r#""value":"2020-01-01T10:30:00.0+01:00:30""#), "{json}");
        assert!(json.contains(r#""value":"-0001-01-01T00:00:00.0+00:00""#), "{json}");
        assert_eq!(
            query.to_string(),
            "SELECT ?, ? [DATETIME '2020-01-01T10:30:00.0+01:00:30', DATETIME '-0001-01-01T00:00:00.0+00:00']"
        );
        assert_eq!(
            Value::from(datetime!(2020-01-01 10:30 +01:00:30)).to_string(),
            "'2020-01-01T10:30:00.0+01:00:30'"
        );
    }

    #[test]
    fn non_finite_floats() {
        for value in [
            Value::Double(f64::NAN),
            Value::Double(f64::INFINITY),
            Value::Float(f32::NEG_INFINITY),
        ] {
            let error = serde_json::to_string(&value).expect_err("Should not serialize");
            assert!(error.to_string().contains("non finite"), "{error}");
        }
        let mut query = PreparedQuery::prepare("SELECT ?").unwrap();
        query.bind(1, f64::NAN).unwrap();
        assert!(QueryRequest::from_prepared(&query).to_json().is_err());
        assert_eq!(query.to_string(), "SELECT ? [DOUBLE NaN]");
    }

    #[test]
    fn typed_param_value() {
        let param = TypedParamValue {
            type_name: DataType::HalfFloat.name(),
            value: 1.5f32.as_value(),
        };
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({ "type": "HALF_FLOAT", "value": 1.5 })
        );
    }

    #[test]
    fn request_order() {
        let mut query = PreparedQuery::prepare("SELECT ? + ? + ?").unwrap();
        query.bind(3, 3i64).unwrap();
        query.bind(1, 1i64).unwrap();
        let body = serde_json::to_value(QueryRequest::from_prepared(&query)).unwrap();
        assert_eq!(
            body,
            json!({
                "query": "SELECT ? + ? + ?",
                "params": [
                    { "type": "LONG", "value": 1 },
                    { "type": "KEYWORD", "value": null },
                    { "type": "LONG", "value": 3 },
                ]
            })
        );
    }
}
