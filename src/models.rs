use serde::{Deserialize, Serialize};

/// A single todo record, used both as request payload and response body
///
/// The identifier is not part of the record; it is the key the record is
/// stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Todo {
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(name: impl Into<String>) -> Self {
        Todo {
            name: name.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_defaults_to_false() {
        let todo: Todo = serde_json::from_str(r#"{"name":"Buy groceries"}"#).unwrap();
        assert_eq!(todo, Todo::new("Buy groceries"));
    }

    #[test]
    fn serializes_both_fields() {
        let todo = Todo {
            name: "Buy vegetables".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Buy vegetables", "completed": true}));
    }

    #[test]
    fn rejects_missing_or_non_string_name() {
        assert!(serde_json::from_str::<Todo>(r#"{"completed":true}"#).is_err());
        assert!(serde_json::from_str::<Todo>(r#"{"name":null}"#).is_err());
        assert!(serde_json::from_str::<Todo>(r#"{"name":42}"#).is_err());
    }

    #[test]
    fn ignores_unknown_fields() {
        let todo: Todo =
            serde_json::from_str(r#"{"name":"x","completed":false,"id":"7"}"#).unwrap();
        assert_eq!(todo, Todo::new("x"));
    }
}
