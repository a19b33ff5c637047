use contracts::domain::a002_role::Role;

use crate::shared::crud::ListColumns;

impl ListColumns for Role {
    const HEADERS: &'static [&'static str] = &["Role", "Description", "Permissions", "Created"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.role_name.clone(),
            self.description.clone().unwrap_or_else(|| "-".to_string()),
            permissions_label(self),
            self.created_on.clone(),
        ]
    }
}

/// Known levels get their display label; unknown values are shown as sent
fn permissions_label(role: &Role) -> String {
    role.permission_level()
        .map(|level| level.label().to_string())
        .unwrap_or_else(|| role.permissions.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::{table_rows, ListState};

    fn role(name: &str, description: Option<&str>, permissions: &str) -> Role {
        Role {
            id: format!("id-{}", name),
            role_name: name.into(),
            description: description.map(str::to_string),
            permissions: permissions.into(),
            created_on: "2024-03-01".into(),
        }
    }

    #[test]
    fn test_cells_follow_header_order() {
        let cells = role("marketing_admin", Some("Marketing"), "admin").cells();
        assert_eq!(cells, ["marketing_admin", "Marketing", "Admin", "2024-03-01"]);
        assert_eq!(cells.len(), Role::HEADERS.len());
    }

    #[test]
    fn test_missing_description_and_unknown_level() {
        let cells = role("ops", None, "root").cells();
        assert_eq!(cells[1], "-");
        assert_eq!(cells[2], "root");
    }

    #[test]
    fn test_rows_keep_server_order() {
        let mut state = ListState::<Role>::default();
        state.apply_fetch(Ok(vec![role("b", None, "read"), role("a", None, "write")]));
        let names: Vec<String> = table_rows(&state).into_iter().map(|r| r.cells[0].clone()).collect();
        assert_eq!(names, ["b", "a"]);
    }
}
