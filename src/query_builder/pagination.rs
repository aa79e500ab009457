/// LIMIT/OFFSET parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Pagination {
    /// Page-based pagination; pages are 1-indexed and page 0 is treated as page 1
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            limit: Some(per_page),
            offset: Some(page.saturating_sub(1).saturating_mul(per_page)),
        }
    }

    pub fn to_sql(&self) -> String {
        let mut sql = String::new();
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_based_pagination() {
        let pagination = Pagination::page(3, 10);
        assert_eq!(pagination.limit, Some(10));
        assert_eq!(pagination.offset, Some(20));
        assert_eq!(pagination.to_sql(), " LIMIT 10 OFFSET 20");
    }

    #[test]
    fn test_page_zero_is_first_page() {
        assert_eq!(Pagination::page(0, 25), Pagination::page(1, 25));
    }

    #[test]
    fn test_empty_pagination_renders_nothing() {
        assert_eq!(Pagination::default().to_sql(), "");
    }
}
