/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be string literals; any other leaf is converted with
/// [`to_value`](crate::to_value) and becomes `null` if that fails.
///
/// # Examples
///
/// ```rust
/// use serde_omitjson::json;
///
/// let value = json!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "manager": null
/// });
/// assert_eq!(value.to_string(), r#"{"name":"Alice","tags":["a","b"],"manager":null}"#);
/// ```
#[macro_export]
macro_rules! json {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::json!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::json!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($s:expr) => {
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Number, Value};

    #[test]
    fn test_json_macro_primitives() {
        assert_eq!(json!(null), Value::Null);
        assert_eq!(json!(true), Value::Bool(true));
        assert_eq!(json!(false), Value::Bool(false));
        assert_eq!(json!(42), Value::Number(Number::Int(42)));
        assert_eq!(json!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(json!("hello"), Value::String("hello".to_string()));
        assert_eq!(json!(f64::NAN), Value::Null);
    }

    #[test]
    fn test_json_macro_arrays() {
        assert_eq!(json!([]), Value::Array(vec![]));
        assert_eq!(
            json!([1, "two", null]),
            Value::Array(vec![Value::from(1), Value::from("two"), Value::Null])
        );
    }

    #[test]
    fn test_json_macro_objects() {
        assert_eq!(json!({}), Value::Object(Map::new()));

        let obj = json!({
            "name": "Alice",
            "nested": { "age": 30 }
        });
        assert_eq!(obj.get("name"), Some(&Value::from("Alice")));
        assert_eq!(
            obj.get("nested").and_then(|n| n.get("age")),
            Some(&Value::Number(Number::Int(30)))
        );
    }
}
