use recipe_core::{AppViewModel, ModalView, Tab};
use scraper::Html;

/// Renders the view model as plain text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(tab_bar(view));

    if view.tab == Tab::Search {
        lines.push(search_status(view));
    }

    if view.cards.is_empty() {
        lines.push(match view.tab {
            Tab::Search => "  (no results)".to_string(),
            Tab::Favourites => "  (no favourites yet)".to_string(),
        });
    }
    for (index, card) in view.cards.iter().enumerate() {
        let marker = if card.is_favourite { "*" } else { " " };
        lines.push(format!(
            "  {:>2}. [{}] {} (#{})",
            index + 1,
            marker,
            card.title,
            card.recipe_id
        ));
    }

    if view.tab == Tab::Search && view.can_load_more {
        lines.push("  (type `more` for the next page)".to_string());
    }

    if let Some(modal) = &view.modal {
        lines.extend(render_modal(modal));
    }

    if let Some(failure) = &view.last_failure {
        lines.push(format!("! {failure}"));
    }
    lines
}

fn tab_bar(view: &AppViewModel) -> String {
    let (search, favourites) = match view.tab {
        Tab::Search => ("[Recipe Search]", "Favourites"),
        Tab::Favourites => ("Recipe Search", "[Favourites]"),
    };
    format!(
        "== {search} | {favourites} ({}) ==",
        view.favourite_count
    )
}

fn search_status(view: &AppViewModel) -> String {
    let mut status = if view.page == 0 {
        "no search yet".to_string()
    } else {
        format!("\"{}\" page {}", view.search_term, view.page)
    };
    if view.search_pending {
        status.push_str(" (loading...)");
    }
    status
}

fn render_modal(modal: &ModalView) -> Vec<String> {
    let mut lines = vec![format!("-- {} (#{}) --", modal.title, modal.recipe_id)];
    if modal.loading {
        lines.push("loading summary...".to_string());
    } else if let Some(summary) = &modal.summary {
        lines.push(summary_text(summary));
    }
    lines.push("(type `close` to dismiss)".to_string());
    lines
}

/// Summaries arrive as HTML fragments; keep only the text.
fn summary_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text = fragment.root_element().text().collect::<String>();
    text.trim().to_string()
}
