//! Plain-text rendering of a [`DashboardView`].

use std::fmt;

use libdash_app::dashboard::DashboardView;
use libdash_domain::category::Category;

/// Displays a dashboard snapshot as text.
pub struct Rendered<'a>(pub &'a DashboardView);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "Library overview")?;
        match view.stats {
            Some(stats) => {
                let metrics = &view.metrics;
                writeln!(f, "  Total books        {:>8}", stats.total_books)?;
                writeln!(
                    f,
                    "  Available books    {:>8}  {}% available, {}",
                    stats.available_books,
                    metrics.availability_percentage,
                    metrics.availability_label
                )?;
                writeln!(f, "  Borrowed books     {:>8}", metrics.borrowed_books)?;
                writeln!(f, "  Active borrowers   {:>8}", stats.active_borrowers)?;
                writeln!(
                    f,
                    "  Transactions       {:>8}  usage rate {}%",
                    stats.total_transactions, metrics.usage_rate
                )?;
                writeln!(f, "  The library is {}.", metrics.stock_pulse)?;
            }
            None => writeln!(f, "  (no summary loaded)")?,
        }

        writeln!(f)?;
        writeln!(f, "Today's activity")?;
        match view.quick_stats {
            Some(today) => {
                writeln!(f, "  Books added        {:>8}", today.books_added)?;
                writeln!(f, "  Books borrowed     {:>8}", today.books_borrowed)?;
                writeln!(f, "  Books returned     {:>8}", today.books_returned)?;
            }
            None => writeln!(f, "  (not available)")?,
        }

        writeln!(f)?;
        writeln!(f, "Categories ({})", view.categories.len())?;
        if view.categories.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for category in &view.categories {
            category_row(f, category)?;
        }

        if let Some(error) = &view.error {
            writeln!(f)?;
            writeln!(f, "Error: {error}")?;
        }
        Ok(())
    }
}

fn category_row(f: &mut fmt::Formatter<'_>, category: &Category) -> fmt::Result {
    write!(
        f,
        "  #{:<5} {:<24}",
        category.category_id, category.category_name
    )?;
    if let Some(editor) = category.who_edited.as_deref().filter(|s| !s.is_empty()) {
        write!(f, " edited by {editor}")?;
    }
    writeln!(f)?;
    if let Some(description) = category
        .category_description
        .as_deref()
        .filter(|s| !s.is_empty())
    {
        writeln!(f, "         {description}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libdash_app::form::CategoryForm;
    use libdash_domain::id::CategoryId;
    use libdash_domain::metrics::StockMetrics;
    use libdash_domain::stats::{DashboardStats, QuickStats};

    fn view() -> DashboardView {
        let stats = DashboardStats {
            total_books: 100,
            available_books: 45,
            active_borrowers: 7,
            total_transactions: 250,
        };
        DashboardView {
            stats: Some(stats),
            metrics: StockMetrics::from(&stats),
            categories: vec![Category {
                category_description: Some("Made-up stories".to_string()),
                who_edited: Some("Admin".to_string()),
                ..Category::new(CategoryId::new(1), "Fiction")
            }],
            quick_stats: Some(QuickStats {
                books_added: 12,
                books_borrowed: 8,
                books_returned: 5,
            }),
            form: CategoryForm::default(),
            error: None,
            is_loading: false,
            is_submitting: false,
        }
    }

    #[test]
    fn should_render_stats_with_labels() {
        let text = Rendered(&view()).to_string();

        assert!(text.contains("45% available, Good"));
        assert!(text.contains("usage rate 250%"));
        assert!(text.contains("The library is getting busy."));
        assert!(text.contains("Borrowed books           55"));
    }

    #[test]
    fn should_render_categories_and_today() {
        let text = Rendered(&view()).to_string();

        assert!(text.contains("Categories (1)"));
        assert!(text.contains("Fiction"));
        assert!(text.contains("edited by Admin"));
        assert!(text.contains("Made-up stories"));
        assert!(text.contains("Books added              12"));
    }

    #[test]
    fn should_render_placeholders_and_error() {
        let view = DashboardView {
            stats: None,
            categories: Vec::new(),
            quick_stats: None,
            error: Some("Failed to fetch dashboard data".to_string()),
            ..view()
        };

        let text = Rendered(&view).to_string();

        assert!(text.contains("(no summary loaded)"));
        assert!(text.contains("(none)"));
        assert!(text.ends_with("Error: Failed to fetch dashboard data\n"));
    }
}
