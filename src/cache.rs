use crate::types::User;

/// Client-held mirror of the server's user collection.
///
/// Best effort only: each successful request patches it in place (last write
/// wins), and it is never re-validated against the server after the initial
/// load, so it drifts when requests fail partially or someone else mutates
/// the backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    users: Vec<User>,
}

impl DisplayList {
    /// Replaces the contents with a freshly fetched collection, newest first.
    /// The backend appends new records, so the fetch order is reversed for
    /// display.
    pub fn reset(&mut self, mut fetched: Vec<User>) {
        fetched.reverse();
        self.users = fetched;
    }

    pub fn prepend(&mut self, user: User) {
        self.users.insert(0, user);
    }

    /// Rewrites the name/email of the entry with `id`, keeping its position.
    /// Returns whether an entry matched.
    pub fn rewrite(&mut self, id: i64, name: &str, email: &str) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.name = name.to_string();
                user.email = email.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.users.retain(|u| u.id != id);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    pub fn ids(&self) -> Vec<i64> {
        self.users.iter().map(|u| u.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name),
        }
    }

    #[test]
    fn reset_reverses_fetch_order() {
        let mut list = DisplayList::default();
        list.reset(vec![user(1, "a"), user(2, "b"), user(3, "c")]);
        assert_eq!(list.ids(), vec![3, 2, 1]);
    }

    #[test]
    fn reset_replaces_previous_contents() {
        let mut list = DisplayList::default();
        list.reset(vec![user(1, "a")]);
        list.reset(vec![user(2, "b"), user(3, "c")]);
        assert_eq!(list.ids(), vec![3, 2]);
    }

    #[test]
    fn prepend_puts_new_user_first() {
        let mut list = DisplayList::default();
        list.reset(vec![user(1, "a"), user(2, "b")]);
        list.prepend(user(9, "x"));
        assert_eq!(list.ids(), vec![9, 2, 1]);
    }

    #[test]
    fn rewrite_changes_only_the_matching_entry_in_place() {
        let mut list = DisplayList::default();
        list.reset(vec![user(1, "a"), user(2, "b"), user(3, "c")]);
        assert!(list.rewrite(2, "bob", "bob@example.com"));
        assert_eq!(list.ids(), vec![3, 2, 1]);
        let rewritten = list.iter().find(|u| u.id == 2).unwrap();
        assert_eq!(rewritten.name, "bob");
        assert_eq!(rewritten.email, "bob@example.com");
        let untouched = list.iter().find(|u| u.id == 3).unwrap();
        assert_eq!(untouched.name, "c");
    }

    #[test]
    fn rewrite_of_absent_id_is_a_noop() {
        let mut list = DisplayList::default();
        list.reset(vec![user(1, "a"), user(2, "b")]);
        let before = list.clone();
        assert!(!list.rewrite(99, "x", "x@example.com"));
        assert_eq!(list, before);
    }

    #[test]
    fn remove_deletes_exactly_the_matching_entry() {
        let mut list = DisplayList::default();
        list.reset(vec![user(1, "a"), user(2, "b"), user(3, "c")]);
        list.remove(2);
        assert_eq!(list.ids(), vec![3, 1]);
    }

    #[test]
    fn remove_of_absent_id_leaves_the_list_alone() {
        let mut list = DisplayList::default();
        list.reset(vec![user(1, "a")]);
        list.remove(99);
        assert_eq!(list.ids(), vec![1]);
    }

    #[test]
    fn contains_reports_membership() {
        let mut list = DisplayList::default();
        list.reset(vec![user(1, "a"), user(2, "b")]);
        assert!(list.contains(1));
        assert!(!list.contains(3));
    }
}
