use super::error::QueryError;
use super::params::ListParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The literal token "desc" sorts descending; anything else, including
    /// absence, is treated per the API contract. Absent defaults to
    /// descending, any other present value sorts ascending.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None => SortDirection::Desc,
            Some("desc") => SortDirection::Desc,
            Some(_) => SortDirection::Asc,
        }
    }

    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Single-column sort directive for the list query.
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(sort_by: &str, direction: SortDirection) -> Self {
        Self {
            column: Self::column_for(sort_by),
            direction,
        }
    }

    pub fn from_params(params: &ListParams) -> Self {
        Self::new(&params.sort_by, params.sort_order)
    }

    /// API field names are camelCase; the known timestamp fields map to
    /// their columns. Unknown names pass through unchanged and surface as
    /// a datastore error if no such column exists.
    fn column_for(field: &str) -> String {
        match field {
            "createdAt" => "created_at".to_string(),
            "updatedAt" => "updated_at".to_string(),
            other => other.to_string(),
        }
    }

    pub fn to_order_sql(&self) -> Result<String, QueryError> {
        Self::validate_column(&self.column)?;
        Ok(format!(
            "ORDER BY \"{}\" {}",
            self.column,
            self.direction.to_sql()
        ))
    }

    fn validate_column(column: &str) -> Result<(), QueryError> {
        let mut chars = column.chars();
        let valid_first = matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_');
        if !valid_first || !column.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(QueryError::InvalidSortColumn(column.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desc_token_sorts_descending() {
        assert_eq!(SortDirection::from_token(Some("desc")), SortDirection::Desc);
    }

    #[test]
    fn any_other_token_sorts_ascending() {
        assert_eq!(SortDirection::from_token(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::from_token(Some("DESC")), SortDirection::Asc);
        assert_eq!(SortDirection::from_token(Some("banana")), SortDirection::Asc);
    }

    #[test]
    fn absent_token_defaults_to_descending() {
        assert_eq!(SortDirection::from_token(None), SortDirection::Desc);
    }

    #[test]
    fn created_at_maps_to_column() {
        let spec = SortSpec::new("createdAt", SortDirection::Desc);
        assert_eq!(spec.to_order_sql().unwrap(), "ORDER BY \"created_at\" DESC");
    }

    #[test]
    fn unknown_field_passes_through() {
        let spec = SortSpec::new("price", SortDirection::Asc);
        assert_eq!(spec.to_order_sql().unwrap(), "ORDER BY \"price\" ASC");
    }

    #[test]
    fn malformed_column_is_rejected() {
        let spec = SortSpec::new("price; DROP TABLE products", SortDirection::Asc);
        assert!(spec.to_order_sql().is_err());
    }
}
