use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of a sparse payload.
///
/// `Unset` when the key is absent from the payload, `Null` when it is
/// explicitly `null`, `Value` otherwise. Struct fields must be annotated with
/// `#[serde(default)]` so that absent keys deserialize to `Unset`.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Unset => Field::Unset,
            Self::Null => Field::Null,
            Self::Value(value) => Field::Value(f(value)),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// `Unset` and `Null` both serialize as `null`.
impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default)]
        name: Field<String>,
        #[serde(default)]
        image: Field<String>,
        #[serde(default)]
        price: Field<f64>,
    }

    #[test]
    fn distinguishes_absent_null_and_value() {
        let payload: Payload =
            serde_json::from_value(json!({ "image": null, "price": 12.5 })).unwrap();

        assert_eq!(payload.name, Field::Unset);
        assert_eq!(payload.image, Field::Null);
        assert_eq!(payload.price, Field::Value(12.5));
    }

    #[test]
    fn an_explicit_empty_string_is_a_value() {
        let payload: Payload = serde_json::from_value(json!({ "name": "" })).unwrap();

        assert_eq!(payload.name, Field::Value(String::new()));
    }

    #[test]
    fn serializes_values_and_absence_as_json() {
        assert_eq!(serde_json::to_value(Field::Value("Rice")).unwrap(), json!("Rice"));
        assert_eq!(serde_json::to_value(Field::<String>::Null).unwrap(), json!(null));
        assert_eq!(serde_json::to_value(Field::<String>::Unset).unwrap(), json!(null));

        let payload: Payload =
            serde_json::from_value(json!({ "price": Field::Value(4.25) })).unwrap();
        assert_eq!(payload.price, Field::Value(4.25));
    }

    #[test]
    fn map_preserves_presence() {
        assert_eq!(Field::Value(2).map(|v| v * 2), Field::Value(4));
        assert_eq!(Field::<i32>::Null.map(|v| v * 2), Field::Null);
        assert!(Field::<i32>::Unset.map(|v| v * 2).is_unset());
    }
}
