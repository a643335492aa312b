use crate::ModelError;
use crate::article_query::{
    ArticleQuery, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD, SortDirection, SortOrder,
};

const MAX_PAGE_SIZE: u32 = 1000;

/// Builder for validated [`ArticleQuery`] instances.
#[derive(Debug, Default)]
pub struct ArticleQueryBuilder {
    page: Option<u32>,
    size: Option<u32>,
    sort: Vec<(String, SortDirection)>,
}

impl ArticleQueryBuilder {
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort.push((field.into(), direction));
        self
    }

    /// Parse a `field,direction` spec as accepted by the server.
    #[track_caller]
    pub fn sort_spec(self, spec: &str) -> Result<Self, ModelError> {
        let (field, direction) = match spec.split_once(',') {
            Some((field, direction)) => match direction.trim().parse::<SortDirection>() {
                Ok(direction) => (field, direction),
                Err(e) => return Err(ModelError::validation(e)),
            },
            None => (spec, SortDirection::Asc),
        };
        Ok(self.sort_by(field.trim(), direction))
    }

    /// Build the query with validation.
    #[track_caller]
    pub fn build(self) -> Result<ArticleQuery, ModelError> {
        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);

        if size == 0 {
            return Err(ModelError::validation("Page size must be non-zero"));
        }

        if size > MAX_PAGE_SIZE {
            return Err(ModelError::validation(format!(
                "Page size {size} exceeds maximum of {MAX_PAGE_SIZE}"
            )));
        }

        if self.sort.iter().any(|(field, _)| field.is_empty()) {
            return Err(ModelError::validation("Sort field cannot be empty"));
        }

        let sort = if self.sort.is_empty() {
            vec![SortOrder {
                field: DEFAULT_SORT_FIELD.to_string(),
                direction: SortDirection::Asc,
            }]
        } else {
            self.sort
                .into_iter()
                .map(|(field, direction)| SortOrder { field, direction })
                .collect()
        };

        Ok(ArticleQuery {
            page: self.page.unwrap_or(DEFAULT_PAGE),
            size,
            sort,
        })
    }
}
