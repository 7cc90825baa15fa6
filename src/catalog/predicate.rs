use rust_decimal::Decimal;

use super::params::ListParams;

/// Expression matching the GIN index in schema.sql; full-text matching is
/// delegated entirely to Postgres.
const SEARCH_VECTOR_SQL: &str =
    "to_tsvector('english', \"name\" || ' ' || \"description\" || ' ' || array_to_string(\"tags\", ' '))";

/// Typed value awaiting a positional bind on the final query.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Number(Decimal),
}

/// Request-scoped predicate over the products table. Soft-deleted rows
/// never match, regardless of the other constraints.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn from_params(params: &ListParams) -> Self {
        Self {
            category: params.category.clone(),
            min_price: params.min_price,
            max_price: params.max_price,
            search: params.search.clone(),
        }
    }

    /// Render to a parameterized WHERE clause body. Placeholders start at
    /// `$starting_param_index + 1` so the clause can be embedded after
    /// other bound parameters.
    pub fn to_where_sql(&self, starting_param_index: usize) -> (String, Vec<BindValue>) {
        let mut conditions = vec!["\"is_active\" = TRUE".to_string()];
        let mut params: Vec<BindValue> = vec![];
        let mut index = starting_param_index;

        if let Some(category) = &self.category {
            params.push(BindValue::Text(category.clone()));
            index += 1;
            conditions.push(format!("\"category\" = ${}", index));
        }

        if let Some(min) = self.min_price {
            params.push(BindValue::Number(min));
            index += 1;
            conditions.push(format!("\"price\" >= ${}", index));
        }

        if let Some(max) = self.max_price {
            params.push(BindValue::Number(max));
            index += 1;
            conditions.push(format!("\"price\" <= ${}", index));
        }

        if let Some(search) = &self.search {
            params.push(BindValue::Text(search.clone()));
            index += 1;
            conditions.push(format!(
                "{} @@ plainto_tsquery('english', ${})",
                SEARCH_VECTOR_SQL, index
            ));
        }

        (conditions.join(" AND "), params)
    }
}
