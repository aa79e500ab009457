use super::{Pagination, WhereClause};
use serde_json::Value;

/// Chainable SQL query builder.
///
/// Every method takes `self` by value and returns the extended builder, so a
/// scope handler receives one query state and hands back the next. Nothing here
/// talks to a database; [`QueryBuilder::build_sql`] only renders text.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    base_table: String,
    select_fields: Vec<String>,
    where_clauses: Vec<WhereClause>,
    order_by: Vec<String>,
    pagination: Option<Pagination>,
}

impl QueryBuilder {
    /// Create a new query builder for the given table
    pub fn new(table: &str) -> Self {
        Self {
            base_table: table.to_string(),
            select_fields: vec!["*".to_string()],
            where_clauses: Vec::new(),
            order_by: Vec::new(),
            pagination: None,
        }
    }

    pub fn table(&self) -> &str {
        &self.base_table
    }

    /// Set specific fields to select
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Add a WHERE clause; clauses are ANDed in insertion order
    pub fn where_clause(mut self, clause: WhereClause) -> Self {
        self.where_clauses.push(clause);
        self
    }

    pub fn where_eq(self, field: &str, value: Value) -> Self {
        self.where_clause(WhereClause::compare(field, "=", value))
    }

    pub fn where_cmp(self, field: &str, operator: &str, value: Value) -> Self {
        self.where_clause(WhereClause::compare(field, operator, value))
    }

    pub fn where_in(self, field: &str, values: Vec<Value>) -> Self {
        self.where_clause(WhereClause::in_condition(field, values))
    }

    pub fn where_between(self, field: &str, start: Value, end: Value) -> Self {
        self.where_clause(WhereClause::between(field, start, end))
    }

    pub fn where_null(self, field: &str) -> Self {
        self.where_clause(WhereClause::is_null(field))
    }

    /// Add ORDER BY clause
    pub fn order_by(mut self, field: &str, direction: &str) -> Self {
        self.order_by.push(format!("{field} {direction}"));
        self
    }

    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, "ASC")
    }

    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, "DESC")
    }

    pub fn paginate(mut self, page: u32, per_page: u32) -> Self {
        self.pagination = Some(Pagination::page(page, per_page));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.pagination.get_or_insert_with(Pagination::default).limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.pagination.get_or_insert_with(Pagination::default).offset = Some(offset);
        self
    }

    /// Build the complete SQL query string
    pub fn build_sql(&self) -> String {
        let mut sql = format!(
            "SELECT {} FROM {}",
            self.select_fields.join(", "),
            self.base_table
        );

        if !self.where_clauses.is_empty() {
            let parts: Vec<String> = self.where_clauses.iter().map(WhereClause::to_sql).collect();
            sql.push_str(" WHERE ");
            sql.push_str(&parts.join(" AND "));
        }

        if !self.order_by.is_empty() {
            sql.push_str(&format!(" ORDER BY {}", self.order_by.join(", ")));
        }

        if let Some(ref pagination) = self.pagination {
            sql.push_str(&pagination.to_sql());
        }

        sql
    }
}
