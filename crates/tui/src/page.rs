//! Row layout of the page for the terminal viewer.

use folio_core::MeasuredLayout;
use folio_protocol::{Block, LinkTarget, SectionBounds, SectionId, SectionView, ThemeToken};

/// Virtual pixels per terminal row. Chosen so the scroll-spy's nav-bar bias
/// (100 px) spans five rows, roughly the share of the screen the browser nav
/// bar covers.
pub const ROW_PX: f64 = 20.0;

const BAR_WIDTH: usize = 20;
const MIN_SECTION_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct PageLine {
    pub text: String,
    pub token: ThemeToken,
    pub bold: bool,
}

impl PageLine {
    fn new(text: impl Into<String>, token: ThemeToken) -> Self {
        Self {
            text: text.into(),
            token,
            bold: false,
        }
    }

    fn bold(text: impl Into<String>, token: ThemeToken) -> Self {
        Self {
            text: text.into(),
            token,
            bold: true,
        }
    }

    fn blank() -> Self {
        Self::new("", ThemeToken::TextPrimary)
    }
}

/// The whole page flattened into rows, plus each section's extent.
#[derive(Debug, Clone)]
pub struct PageRows {
    pub lines: Vec<PageLine>,
    /// First row of each section, indexed by [`SectionId::index`].
    pub starts: [usize; 6],
    /// Section geometry in virtual pixels, for the scroll-spy.
    pub layout: MeasuredLayout,
}

impl PageRows {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn start_of(&self, id: SectionId) -> usize {
        self.starts[id.index()]
    }
}

pub fn layout_page(sections: &[SectionView], width: u16) -> PageRows {
    let width = usize::from(width.max(20));
    let mut lines = Vec::new();
    let mut starts = [0; 6];
    let mut layout = MeasuredLayout::new();

    for view in sections {
        let start = lines.len();
        starts[view.id.index()] = start;

        lines.push(PageLine::blank());
        push_heading(&mut lines, &view.title.to_uppercase(), width, ThemeToken::Accent);
        if let Some(subtitle) = &view.subtitle {
            push_wrapped(&mut lines, subtitle, width, "", ThemeToken::TextSecondary);
        }
        lines.push(PageLine::blank());
        for block in &view.blocks {
            push_block(&mut lines, block, width);
        }
        while lines.len() - start < MIN_SECTION_ROWS {
            lines.push(PageLine::blank());
        }

        let rows = lines.len() - start;
        layout.set(
            view.id,
            SectionBounds::new(start as f64 * ROW_PX, rows as f64 * ROW_PX),
        );
    }

    PageRows {
        lines,
        starts,
        layout,
    }
}

fn push_block(lines: &mut Vec<PageLine>, block: &Block, width: usize) {
    match block {
        Block::Heading { text, .. } => push_heading(lines, text, width, ThemeToken::TextPrimary),
        Block::Text { text, color } => push_wrapped(lines, text, width, "", *color),
        Block::Badge { text } => lines.push(PageLine::new(format!("[{text}]"), ThemeToken::BadgeText)),
        Block::KeyValue { key, value } => {
            let pad = width.saturating_sub(key.chars().count() + value.chars().count() + 2).max(1);
            lines.push(PageLine::new(
                format!("{key}{}[{value}]", " ".repeat(pad)),
                ThemeToken::TextSecondary,
            ));
        }
        Block::Bullets { items } => {
            for item in items {
                push_wrapped(lines, item, width, "  • ", ThemeToken::TextSecondary);
            }
        }
        Block::Progress { label, percent } => {
            lines.push(PageLine::new(progress_bar(label, *percent), ThemeToken::ProgressFill));
        }
        Block::ContactLine { kind, text } => {
            push_wrapped(lines, text, width, &format!("{} ", kind.glyph()), ThemeToken::TextSecondary);
        }
        Block::Link { label, target, primary } => {
            let hint = match target {
                LinkTarget::Section(id) => format!("  (press {})", id.index() + 1),
                LinkTarget::External(href) => format!("  {href}"),
            };
            let token = if *primary { ThemeToken::Accent } else { ThemeToken::TextPrimary };
            push_wrapped(lines, &format!("‹ {label} ›{hint}"), width, "", token);
        }
        Block::Avatar { .. } => {}
        Block::Card { blocks, .. } => {
            for inner in blocks {
                push_block(lines, inner, width);
            }
            lines.push(PageLine::blank());
        }
        Block::Columns { columns } => {
            for inner in columns.iter().flatten() {
                push_block(lines, inner, width);
            }
        }
    }
}

fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let subsequent = " ".repeat(indent.chars().count());
    let options = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(&subsequent);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

fn push_wrapped(lines: &mut Vec<PageLine>, text: &str, width: usize, indent: &str, token: ThemeToken) {
    lines.extend(wrap(text, width, indent).into_iter().map(|l| PageLine::new(l, token)));
}

fn push_heading(lines: &mut Vec<PageLine>, text: &str, width: usize, token: ThemeToken) {
    lines.extend(wrap(text, width, "").into_iter().map(|l| PageLine::bold(l, token)));
}

fn progress_bar(label: &str, percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!(
        "{label:<12} {}{} {percent:>3}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SectionLayout;
    use folio_core::model::Portfolio;
    use folio_core::views::build_page;

    fn rows(width: u16) -> PageRows {
        let portfolio = Portfolio::builtin().unwrap();
        layout_page(&build_page(&portfolio), width)
    }

    #[test]
    fn sections_are_contiguous_and_ordered() {
        let page = rows(80);
        let mut expected_top = 0.0;
        for id in SectionId::ALL {
            let bounds = page.layout.bounds(id).unwrap();
            assert_eq!(bounds.top, expected_top, "{id} does not follow its predecessor");
            assert_eq!(bounds.top, page.start_of(id) as f64 * ROW_PX);
            assert!(bounds.height >= MIN_SECTION_ROWS as f64 * ROW_PX);
            expected_top = bounds.bottom();
        }
        assert_eq!(expected_top, page.len() as f64 * ROW_PX);
    }

    #[test]
    fn narrow_terminals_wrap_text() {
        let wide = rows(200);
        let narrow = rows(40);
        assert!(narrow.len() > wide.len());
        assert!(narrow.lines.iter().all(|l| l.text.chars().count() <= 40));
    }

    #[test]
    fn progress_bar_scales() {
        assert_eq!(progress_bar("HTML", 90).matches('█').count(), 18);
        assert_eq!(progress_bar("CSS", 0).matches('░').count(), BAR_WIDTH);
        assert!(progress_bar("Java", 80).ends_with(" 80%"));
    }
}
