use crate::AppError;
use crate::error::FilterError;
use crate::storage::config::{Config, Filter};
use std::path::PathBuf;

/// Result of saving a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Saved filter management over the config file
pub struct FilterService {
    config: Config,
    path: Option<PathBuf>,
}

impl FilterService {
    /// `path` of `None` means the default config location
    pub fn new(config: Config, path: Option<PathBuf>) -> Self {
        Self { config, path }
    }

    pub fn filters(&self) -> &[Filter] {
        &self.config.filters
    }

    /// Insert or replace the filter keyed by (name, type) and persist
    pub fn save(&mut self, filter: Filter) -> Result<SaveOutcome, AppError> {
        let outcome = match self
            .config
            .filters
            .iter_mut()
            .find(|f| f.matches(&filter.name, &filter.filter_type))
        {
            Some(existing) => {
                *existing = filter;
                SaveOutcome::Updated
            }
            None => {
                self.config.filters.push(filter);
                SaveOutcome::Created
            }
        };

        self.persist()?;
        Ok(outcome)
    }

    /// Saved filters, optionally restricted to one type
    pub fn list(&self, filter_type: Option<&str>) -> Vec<&Filter> {
        self.config
            .filters
            .iter()
            .filter(|f| filter_type.is_none_or(|t| t.is_empty() || f.filter_type == t))
            .collect()
    }

    /// Remove the filter keyed by (name, type) and persist
    ///
    /// Nothing is written when the filter does not exist.
    pub fn delete(&mut self, name: &str, filter_type: &str) -> Result<(), AppError> {
        let position = self
            .config
            .filters
            .iter()
            .position(|f| f.matches(name, filter_type))
            .ok_or_else(|| not_found(name, filter_type))?;

        self.config.filters.remove(position);
        self.persist()
    }

    /// Expression stored under (name, type)
    pub fn resolve(&self, name: &str, filter_type: &str) -> Result<String, FilterError> {
        self.config
            .filters
            .iter()
            .find(|f| f.matches(name, filter_type))
            .map(|f| f.expression.clone())
            .ok_or_else(|| not_found(name, filter_type))
    }

    /// Pick the query filter from an inline expression or a saved filter name
    ///
    /// Empty strings count as absent. Supplying both is a conflict.
    pub fn resolve_expression(
        &self,
        inline: Option<&str>,
        name: Option<&str>,
        filter_type: &str,
    ) -> Result<Option<String>, FilterError> {
        let inline = inline.filter(|s| !s.is_empty());
        let name = name.filter(|s| !s.is_empty());

        match (inline, name) {
            (Some(_), Some(_)) => Err(FilterError::Conflict),
            (None, Some(name)) => self.resolve(name, filter_type).map(Some),
            (Some(expression), None) => Ok(Some(expression.to_string())),
            (None, None) => Ok(None),
        }
    }

    fn persist(&self) -> Result<(), AppError> {
        self.config.save(self.path.clone()).map_err(AppError::from)
    }
}

fn not_found(name: &str, filter_type: &str) -> FilterError {
    FilterError::NotFound {
        name: name.to_string(),
        filter_type: filter_type.to_string(),
    }
}
