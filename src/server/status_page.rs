//! Status page presenter.
//!
//! Turns a `LobbySnapshot` into the HTML served at `/status`. All placeholder
//! substitution happens here, so the templates only print what they are given.

use minijinja::Environment;
use serde::Serialize;

use crate::config::server::StatusLayout;
use crate::config::status::{
    ABSENT_PLACEHOLDER, EMPTY_HISTORY_PLACEHOLDER, RECENT_HISTORY_LEN, TIMESTAMP_FORMAT,
};
use crate::lobby::book::{HistoryWindow, LobbySnapshot};
use crate::lobby::types::{HistoryEntry, LobbyId};

const DASHBOARD_TEMPLATE: &str = "dashboard.html";
const TABLE_TEMPLATE: &str = "table.html";

#[derive(Serialize, Debug)]
struct HistoryRow {
    timestamp: String,
    pc1_id: String,
    pc2_id: String,
    status: &'static str,
}

#[derive(Serialize, Debug)]
struct StatusView {
    pc1_id: String,
    pc2_id: String,
    history: Vec<HistoryRow>,
    total_entries: usize,
    empty_placeholder: &'static str,
}

pub struct StatusPresenter {
    layout: StatusLayout,
    env: Environment<'static>,
}

impl StatusPresenter {
    /// Load both templates. Auto-escaping is on since template names end in `.html`.
    pub fn new(layout: StatusLayout) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(DASHBOARD_TEMPLATE, include_str!("templates/dashboard.html"))?;
        env.add_template(TABLE_TEMPLATE, include_str!("templates/table.html"))?;
        Ok(Self { layout, env })
    }

    pub fn layout(&self) -> StatusLayout {
        self.layout
    }

    /// The slice of history this layout needs from the lobby server.
    pub fn history_window(&self) -> HistoryWindow {
        match self.layout {
            StatusLayout::Dashboard => HistoryWindow::Recent(RECENT_HISTORY_LEN),
            StatusLayout::Table => HistoryWindow::All,
        }
    }

    pub fn render(&self, snapshot: &LobbySnapshot) -> Result<String, minijinja::Error> {
        let rows = snapshot.history.iter().map(HistoryRow::from);
        let (template, history): (&str, Vec<HistoryRow>) = match self.layout {
            // Oldest first, like a scrolling log.
            StatusLayout::Dashboard => (DASHBOARD_TEMPLATE, rows.collect()),
            StatusLayout::Table => (TABLE_TEMPLATE, rows.rev().collect()),
        };
        let view = StatusView {
            pc1_id: display_id(snapshot.pc1_id.as_ref()),
            pc2_id: display_id(snapshot.pc2_id.as_ref()),
            history,
            total_entries: snapshot.total_entries,
            empty_placeholder: EMPTY_HISTORY_PLACEHOLDER,
        };
        self.env.get_template(template)?.render(view)
    }
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        HistoryRow {
            timestamp: entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            pc1_id: display_id(entry.pc1_id.as_ref()),
            pc2_id: display_id(entry.pc2_id.as_ref()),
            status: entry.status.as_str(),
        }
    }
}

fn display_id(id: Option<&LobbyId>) -> String {
    id.map_or_else(|| ABSENT_PLACEHOLDER.to_string(), |id| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lobby::book::LobbyBook;
    use crate::lobby::types::Slot;

    fn book_with(reports: &[(Slot, &str)]) -> LobbyBook {
        let mut book = LobbyBook::new();
        for (slot, id) in reports {
            book.report(*slot, LobbyId::new(*id));
        }
        book
    }

    #[test]
    fn test_empty_state_uses_placeholders() {
        for layout in [StatusLayout::Dashboard, StatusLayout::Table] {
            let presenter = StatusPresenter::new(layout).unwrap();
            let html = presenter
                .render(&LobbyBook::new().snapshot(presenter.history_window()))
                .unwrap();
            assert!(html.contains(ABSENT_PLACEHOLDER));
            assert!(html.contains(EMPTY_HISTORY_PLACEHOLDER));
        }
    }

    #[test]
    fn test_dashboard_shows_last_five_oldest_first() {
        let reports: Vec<(Slot, String)> =
            (0..7).map(|n| (Slot::Pc1, format!("id-{}", n))).collect();
        let reports: Vec<(Slot, &str)> = reports.iter().map(|(s, id)| (*s, id.as_str())).collect();
        let book = book_with(&reports);

        let presenter = StatusPresenter::new(StatusLayout::Dashboard).unwrap();
        assert_eq!(presenter.history_window(), HistoryWindow::Recent(RECENT_HISTORY_LEN));
        let html = presenter.render(&book.snapshot(presenter.history_window())).unwrap();

        assert!(!html.contains("id-0"));
        assert!(!html.contains("id-1"));
        let third = html.find("id-2").unwrap();
        let last = html.rfind("id-6").unwrap();
        assert!(third < last);
        assert!(!html.contains(EMPTY_HISTORY_PLACEHOLDER));
    }

    #[test]
    fn test_table_shows_everything_newest_first() {
        let book = book_with(&[(Slot::Pc1, "100"), (Slot::Pc2, "200"), (Slot::Pc2, "100")]);

        let presenter = StatusPresenter::new(StatusLayout::Table).unwrap();
        let html = presenter.render(&book.snapshot(presenter.history_window())).unwrap();

        let matched = html.find(r#"class="status-match""#).unwrap();
        let no_match = html.find(r#"class="status-no_match""#).unwrap();
        let waiting = html.find(r#"class="status-waiting""#).unwrap();
        assert!(matched < no_match && no_match < waiting);
    }

    #[test]
    fn test_ids_are_html_escaped() {
        let book = book_with(&[(Slot::Pc1, "<script>alert(1)</script>")]);
        let presenter = StatusPresenter::new(StatusLayout::Dashboard).unwrap();
        let html = presenter.render(&book.snapshot(presenter.history_window())).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
