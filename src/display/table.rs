use crate::storage::config::Filter;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};

/// Formatter for tabular terminal output
pub struct TableDisplay {
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            use_colors: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Set color usage
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn header_cell(&self, title: &str) -> Cell {
        let cell = Cell::new(title).add_attribute(Attribute::Bold);
        if self.use_colors {
            cell.fg(Color::Cyan)
        } else {
            cell
        }
    }

    /// Render saved filters as a table
    pub fn render_filters(&self, filters: &[&Filter]) -> String {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(
            ["Name", "Type", "Description", "Filter"]
                .into_iter()
                .map(|title| self.header_cell(title)),
        );

        for filter in filters {
            table.add_row(vec![
                Cell::new(&filter.name),
                Cell::new(&filter.filter_type),
                Cell::new(&filter.description),
                Cell::new(&filter.expression),
            ]);
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_filters_contains_all_fields() {
        let windows = Filter::new("windows", "hosts", "Windows hosts", "platform_name:'Windows'");
        let linux = Filter::new("linux", "hosts", "", "platform_name:'Linux'");

        let output = TableDisplay::new()
            .with_colors(false)
            .render_filters(&[&windows, &linux]);

        for expected in ["Name", "Type", "Description", "Filter", "windows", "Windows hosts", "platform_name:'Linux'"] {
            assert!(output.contains(expected), "missing {:?} in\n{}", expected, output);
        }
    }

    #[test]
    fn test_render_empty_filter_list_has_header_only() {
        let output = TableDisplay::new().with_colors(false).render_filters(&[]);
        assert!(output.contains("Name"));
        assert!(!output.contains("hosts"));
    }
}
