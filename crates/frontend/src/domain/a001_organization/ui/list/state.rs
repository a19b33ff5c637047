use contracts::domain::a001_organization::Organization;

use crate::shared::crud::ListColumns;

impl ListColumns for Organization {
    const HEADERS: &'static [&'static str] = &["Organization", "ID", "Owner", "Created"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.organizations_name.clone(),
            self.id.clone(),
            self.owner.clone(),
            self.created_on.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::{table_rows, Created, ListState, RowCells};

    fn acme() -> Organization {
        Organization {
            id: "1".into(),
            organizations_name: "Acme".into(),
            owner: "Jane".into(),
            created_on: "2024-01-01".into(),
        }
    }

    #[test]
    fn test_one_cell_per_header() {
        assert_eq!(acme().cells().len(), Organization::HEADERS.len());
    }

    #[test]
    fn test_created_tenant_appends_row_with_returned_values() {
        let mut state = ListState::<Organization>::default();
        state.apply_fetch(Ok(Vec::new()));

        let refetch = state.apply_created(Created::Echoed(acme()));

        assert!(!refetch);
        assert_eq!(
            table_rows(&state),
            vec![RowCells {
                cells: vec!["Acme".into(), "1".into(), "Jane".into(), "2024-01-01".into()],
                provisional: false,
            }]
        );
    }

    #[test]
    fn test_row_count_matches_collection() {
        let mut state = ListState::<Organization>::default();
        let mut globex = acme();
        globex.id = "2".into();
        globex.organizations_name = "Globex".into();
        state.apply_fetch(Ok(vec![acme(), globex]));

        let rows = table_rows(&state);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].cells[0], "Globex");
        assert_eq!(rows[1].cells[1], "2");
    }
}
