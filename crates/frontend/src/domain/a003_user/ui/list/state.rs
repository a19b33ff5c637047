use contracts::domain::a003_user::User;

use crate::shared::crud::ListColumns;

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

impl ListColumns for User {
    const HEADERS: &'static [&'static str] = &["User", "Email", "Organization", "Role", "Joined"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.email.clone(),
            or_dash(&self.organizations_name),
            or_dash(&self.role),
            self.created_on.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::{table_rows, Created, ListState};
    use contracts::domain::a003_user::CreateUserDto;

    fn user(name: &str) -> User {
        User {
            id: format!("u-{}", name),
            username: name.into(),
            email: format!("{}@example.com", name),
            organizations_name: "Acme".into(),
            role: "admin".into(),
            created_on: "2024-05-01".into(),
        }
    }

    #[test]
    fn test_cells_follow_header_order() {
        let cells = user("akash").cells();
        assert_eq!(cells.len(), User::HEADERS.len());
        assert_eq!(cells, ["akash", "akash@example.com", "Acme", "admin", "2024-05-01"]);
    }

    #[test]
    fn test_empty_collection_renders_no_rows() {
        let mut state = ListState::<User>::default();
        state.apply_fetch(Ok(Vec::new()));
        assert!(table_rows(&state).is_empty());
    }

    #[test]
    fn test_created_user_waits_for_refetch() {
        let mut state = ListState::<User>::default();
        state.apply_fetch(Ok(vec![user("akash")]));
        let dto = CreateUserDto {
            username: "mira".into(),
            email_id: "mira@example.com".into(),
            user_password: "pw".into(),
            organizations_name: "Acme".into(),
            ignore_policies: true,
        };

        assert!(state.apply_created(Created::Submitted(dto)));

        let rows = table_rows(&state);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].cells[0], "mira");
        assert_eq!(rows[1].cells[3], "-");
        assert!(rows[1].provisional);
        assert!(!rows[0].provisional);
    }
}
