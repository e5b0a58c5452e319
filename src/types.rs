use serde::{Deserialize, Serialize};

/// A user record as the backend stores it. The panel only ever holds a
/// transient copy; the backend owns the data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Input buffer for the creation form. Doubles as the POST body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewUserDraft {
    pub name: String,
    pub email: String,
}

/// Input buffer for the update form. The id stays a raw string while the
/// operator is typing and is only parsed at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateDraft {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UpdateDraft {
    /// `None` when the id field is not a plain integer.
    pub fn parsed_id(&self) -> Option<i64> {
        self.id.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integer_ids() {
        let draft = UpdateDraft {
            id: "42".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.parsed_id(), Some(42));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let draft = UpdateDraft {
            id: " 7 ".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.parsed_id(), Some(7));
    }

    #[test]
    fn rejects_non_integer_ids() {
        for id in ["", "abc", "9x", "1.5"] {
            let draft = UpdateDraft {
                id: id.to_string(),
                ..Default::default()
            };
            assert_eq!(draft.parsed_id(), None, "id {:?} should not parse", id);
        }
    }
}
