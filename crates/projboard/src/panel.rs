//! Text panels: the render targets behind the list views.
//!
//! A [`TextPanel`] turns the items it is handed into plain text lines and
//! keeps them until the next render replaces them. [`TextPanel::boxed`]
//! frames those lines in a rounded border sized to the panel width.

use std::cell::RefCell;
use std::rc::Rc;

use projboard_runtime::{RenderTarget, RuntimeError};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::views::ProjectItemView;

/// Narrowest panel that still fits a border, padding, and some text.
pub const MIN_PANEL_WIDTH: u16 = 16;

const EMPTY_PLACEHOLDER: &str = "No projects";

#[derive(Debug)]
struct PanelState {
    title: String,
    width: u16,
    lines: Vec<String>,
}

/// Shared handle to a panel's text. Clones see the same lines.
#[derive(Debug, Clone)]
pub struct TextPanel {
    state: Rc<RefCell<PanelState>>,
}

impl TextPanel {
    #[must_use]
    pub fn new(title: impl Into<String>, width: u16) -> Self {
        Self {
            state: Rc::new(RefCell::new(PanelState {
                title: title.into(),
                width: width.max(MIN_PANEL_WIDTH),
                lines: vec![EMPTY_PLACEHOLDER.to_string()],
            })),
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.state.borrow().width
    }

    /// Content lines from the last render, without the border.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.state.borrow().lines.clone()
    }

    /// Content framed in a rounded border, every line exactly `width` cells.
    #[must_use]
    pub fn boxed(&self) -> Vec<String> {
        let state = self.state.borrow();
        let width = usize::from(state.width);
        // Border plus one space of padding on each side.
        let inner = width - 4;

        let title = fit(&format!(" {} ", state.title), width - 4);
        let title_width = title.width();
        let mut out = Vec::with_capacity(state.lines.len() + 2);
        out.push(format!(
            "╭─{title}{}╮",
            "─".repeat(width - 3 - title_width)
        ));
        for line in &state.lines {
            out.push(format!("│ {} │", pad(&fit(line, inner), inner)));
        }
        out.push(format!("╰{}╯", "─".repeat(width - 2)));
        out
    }
}

impl RenderTarget<ProjectItemView> for TextPanel {
    fn render(&mut self, items: &[ProjectItemView]) -> Result<(), RuntimeError> {
        let mut state = self.state.try_borrow_mut().map_err(|_| {
            RuntimeError::render(self.title_for_error(), "panel is being read during render")
        })?;

        state.lines.clear();
        if items.is_empty() {
            state.lines.push(EMPTY_PLACEHOLDER.to_string());
            return Ok(());
        }
        for item in items {
            state.lines.push(item.heading());
            if !item.description.is_empty() {
                state.lines.push(format!("  {}", item.description));
            }
        }
        Ok(())
    }
}

impl TextPanel {
    fn title_for_error(&self) -> String {
        self.state
            .try_borrow()
            .map(|state| state.title.clone())
            .unwrap_or_else(|_| "panel".to_string())
    }
}

/// Truncate `text` to at most `max` display cells, marking the cut with `…`.
fn fit(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Right-pad `text` with spaces to `width` display cells.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Project;

    fn item(title: &str, description: &str, manday: u32) -> ProjectItemView {
        ProjectItemView::new(&Project::new(title, description, manday))
    }

    #[test]
    fn empty_render_shows_placeholder() {
        let mut panel = TextPanel::new("Active Projects", 40);
        panel.render(&[item("A", "alpha project", 5)]).unwrap();
        panel.render(&[]).unwrap();
        assert_eq!(panel.lines(), vec![EMPTY_PLACEHOLDER]);
    }

    #[test]
    fn render_replaces_previous_lines() {
        let mut panel = TextPanel::new("Active Projects", 40);
        let a = item("A", "alpha project", 5);
        let b = item("B", "beta project", 25);

        panel.render(std::slice::from_ref(&a)).unwrap();
        panel.render(&[a.clone(), b.clone()]).unwrap();

        assert_eq!(
            panel.lines(),
            vec![
                a.heading(),
                "  alpha project".to_string(),
                b.heading(),
                "  beta project".to_string(),
            ]
        );
    }

    #[test]
    fn boxed_lines_have_panel_width() {
        let mut panel = TextPanel::new("Active Projects", 30);
        panel
            .render(&[item("日本語のタイトル", "a rather long description that will not fit", 40)])
            .unwrap();

        let boxed = panel.boxed();
        assert_eq!(boxed.len(), panel.lines().len() + 2);
        for line in &boxed {
            assert_eq!(line.width(), 30, "line {line:?}");
        }
        assert!(boxed[0].starts_with("╭─ Active Projects "));
        assert!(boxed[2].contains('…'));
    }

    #[test]
    fn narrow_width_is_clamped() {
        let panel = TextPanel::new("A very long panel title", 3);
        assert_eq!(panel.width(), MIN_PANEL_WIDTH);
        for line in panel.boxed() {
            assert_eq!(line.width(), usize::from(MIN_PANEL_WIDTH));
        }
    }

    #[test]
    fn fit_respects_wide_characters() {
        assert_eq!(fit("abc", 3), "abc");
        assert_eq!(fit("abcdef", 4), "abc…");
        // Each CJK character is two cells wide.
        let cut = fit("日本語", 4);
        assert!(cut.width() <= 4);
        assert!(cut.ends_with('…'));
    }
}
