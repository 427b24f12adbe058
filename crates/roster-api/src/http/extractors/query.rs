//! Query parameter extractors for list endpoints.

use serde::Deserialize;

use roster_types::view::{RemarksFilter, SortDirection, SortField, SortState, ViewQuery};

use crate::http::error::AppError;

/// Query parameters for the contractor list and export endpoints.
#[derive(Debug, Deserialize, Default)]
pub struct ContractorListQuery {
    /// Case-insensitive text matched against every field.
    #[serde(default)]
    pub search: String,
    /// Remarks filter (`all`, `empty`, or a remarks substring).
    #[serde(default)]
    pub filter: RemarksFilter,
    /// Current sort field.
    pub sort: Option<String>,
    /// Current sort order (asc, desc).
    pub order: Option<String>,
    /// Header click: toggle the sort state on this field before projecting.
    pub toggle: Option<String>,
}

impl ContractorListQuery {
    /// Resolve the parameters into a projector query, applying `toggle` to
    /// the `sort`/`order` state.
    pub fn to_view_query(&self) -> Result<ViewQuery, AppError> {
        let field = match &self.sort {
            Some(s) => s.parse::<SortField>().map_err(AppError::Validation)?,
            None => SortField::default(),
        };
        let direction = match &self.order {
            Some(o) => o.parse::<SortDirection>().map_err(AppError::Validation)?,
            None => SortDirection::default(),
        };

        let mut sort = SortState::new(field, direction);
        if let Some(toggle) = &self.toggle {
            sort = sort.toggle(toggle.parse::<SortField>().map_err(AppError::Validation)?);
        }

        Ok(ViewQuery {
            search: self.search.clone(),
            remarks: self.filter.clone(),
            sort,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serial_ascending() {
        let query = ContractorListQuery::default().to_view_query().unwrap();
        assert_eq!(query, ViewQuery::default());
    }

    #[test]
    fn test_toggle_same_field_flips() {
        let params = ContractorListQuery {
            sort: Some("name".into()),
            order: Some("asc".into()),
            toggle: Some("name".into()),
            ..Default::default()
        };
        let query = params.to_view_query().unwrap();
        assert_eq!(query.sort, SortState::new(SortField::Name, SortDirection::Desc));
    }

    #[test]
    fn test_toggle_new_field_resets_ascending() {
        let params = ContractorListQuery {
            sort: Some("name".into()),
            order: Some("desc".into()),
            toggle: Some("address".into()),
            ..Default::default()
        };
        let query = params.to_view_query().unwrap();
        assert_eq!(query.sort, SortState::new(SortField::Address, SortDirection::Asc));
    }

    #[test]
    fn test_bad_order_is_validation_error() {
        let params = ContractorListQuery {
            order: Some("sideways".into()),
            ..Default::default()
        };
        assert!(matches!(params.to_view_query(), Err(AppError::Validation(_))));
    }
}
