//! # Query Builder
//!
//! A small, chainable SQL-text builder used as the default query target for
//! scopes. Scope handlers extend it by value; the result renders through
//! [`QueryBuilder::build_sql`].
//!
//! ```rust
//! use scope_applicator::query_builder::QueryBuilder;
//! use serde_json::json;
//!
//! let sql = QueryBuilder::new("products")
//!     .where_eq("active", json!(true))
//!     .order_asc("name")
//!     .limit(20)
//!     .build_sql();
//! assert_eq!(sql, "SELECT * FROM products WHERE active = true ORDER BY name ASC LIMIT 20");
//! ```

pub mod builder;
pub mod conditions;
pub mod pagination;

pub use builder::QueryBuilder;
pub use conditions::{Condition, LogicalOperator, WhereClause};
pub use pagination::Pagination;
