use std::io::Write;

use chrono::Local;
use directory_core::{
    ControlKind, FilterOptions, LoadError, PageControl, PageView, Program, StatusView, ViewRenderer,
};
use directory_logging::directory_warn;

const MISSING: &str = "—";

/// Plain-text renderer: status lines, filter choices, program cards and a
/// pagination bar.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            directory_warn!("failed to write to terminal: {err}");
        }
    }
}

impl<W: Write> ViewRenderer for TerminalRenderer<W> {
    fn on_status(&mut self, status: &StatusView) {
        if let Some(message) = &status.message {
            self.line(message);
        }
    }

    fn on_catalog_loaded(&mut self, catalog: &[Program]) {
        let loaded_at = Local::now().format("%H:%M:%S");
        self.line(&format!("Loaded {} programs at {loaded_at}.", catalog.len()));
    }

    fn on_load_failed(&mut self, error: &LoadError) {
        if !error.is_no_data() {
            self.line(&format!("Details: {error}"));
        }
    }

    fn on_filter_options_changed(&mut self, options: &FilterOptions) {
        self.line(&format_choices("States", &options.states));
        self.line(&format_choices("Cities", &options.cities));
    }

    fn on_page_ready(&mut self, page: &PageView) {
        if let Some(message) = &page.empty_message {
            self.line(message);
            return;
        }
        let range = &page.window.range;
        self.line(&format!(
            "Showing {}-{} of {} programs",
            range.start + 1,
            range.end,
            page.total_matches
        ));
        for program in &page.programs {
            self.line(&format_card(program));
        }
        if page.window.has_controls() {
            self.line(&format_controls(&page.window.controls));
        }
    }
}

pub fn format_choices(label: &str, values: &[String]) -> String {
    let mut text = format!("{label}: All {label}");
    for value in values {
        text.push_str(" | ");
        text.push_str(value);
    }
    text
}

pub fn format_card(program: &Program) -> String {
    let or_missing = |value: &str| {
        if value.is_empty() {
            MISSING.to_string()
        } else {
            value.to_string()
        }
    };
    let mut card = format!(
        "\n{}\n  Address: {}\n  Phone: {}\n  Email: {}",
        program.name,
        or_missing(&program.address),
        or_missing(&program.phone),
        or_missing(&program.email)
    );
    if let Some(website) = program.website_url() {
        card.push_str(&format!("\n  Website: {website}"));
    }
    card
}

pub fn format_controls(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|control| match (control.kind, control.page) {
            (ControlKind::Prev, _) if control.disabled => "(Prev)".to_string(),
            (ControlKind::Prev, _) => "< Prev".to_string(),
            (ControlKind::Next, _) if control.disabled => "(Next)".to_string(),
            (ControlKind::Next, _) => "Next >".to_string(),
            (ControlKind::Ellipsis, _) => "…".to_string(),
            (ControlKind::Page, Some(page)) if control.active => format!("[{page}]"),
            (ControlKind::Page, Some(page)) => page.to_string(),
            (ControlKind::Page, None) => String::new(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use directory_core::{DirectoryOptions, PageCursor, Paginator};

    use super::*;

    fn program(name: &str) -> Program {
        Program {
            name: name.to_string(),
            ..Program::default()
        }
    }

    #[test]
    fn card_uses_placeholder_and_normalized_website() {
        let card = format_card(&Program {
            name: "Food Bank".to_string(),
            website: "foodbank.org".to_string(),
            phone: "555-0100".to_string(),
            ..Program::default()
        });
        assert_eq!(
            card,
            "\nFood Bank\n  Address: —\n  Phone: 555-0100\n  Email: —\n  Website: https://foodbank.org"
        );
        assert!(!format_card(&program("Plain")).contains("Website"));
    }

    #[test]
    fn controls_mark_active_and_disabled() {
        let mut cursor = PageCursor::new(1);
        cursor.set(1, 6);
        let window = Paginator::default().paginate(6, &mut cursor);
        assert_eq!(format_controls(&window.controls), "(Prev) [1] 2 3 … 6 Next >");
    }

    #[test]
    fn choices_list_all_first() {
        assert_eq!(
            format_choices("States", &["CA".to_string(), "NY".to_string()]),
            "States: All States | CA | NY"
        );
        assert_eq!(format_choices("Cities", &[]), "Cities: All Cities");
    }

    #[test]
    fn page_render_through_renderer() {
        let options = DirectoryOptions::default();
        let mut cursor = options.cursor();
        let window = options.paginator().paginate(14, &mut cursor);
        let page = PageView {
            programs: vec![program("A"), program("B")],
            window,
            total_matches: 14,
            empty_message: None,
        };

        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.on_page_ready(&page);
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.starts_with("Showing 1-12 of 14 programs\n"));
        assert!(text.contains("\nA\n"));
        assert!(text.ends_with("(Prev) [1] 2 Next >\n"));
    }

    #[test]
    fn failure_details_skip_no_data() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.on_load_failed(&LoadError::EmptyCatalog);
        renderer.on_load_failed(&LoadError::Timeout { timeout_ms: 5 });
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "Details: request timed out after 5 ms\n");
    }
}
