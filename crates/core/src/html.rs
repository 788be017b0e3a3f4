//! HTML renderer: turns section views into one standalone page.

use folio_protocol::{
    Block, Color, ContactKind, LinkTarget, Reveal, SectionId, SectionView, ThemeToken,
};

use crate::model::Portfolio;

/// Class toggled on the navigation entry of the active section.
pub const ACTIVE_CLASS: &str = "active";
/// Class added to a `.reveal` element once it has entered the viewport.
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub dark: bool,
    /// Path of the wasm-bindgen JS glue. `None` renders a script-free page
    /// with no entrance animations.
    pub wasm_module: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            dark: false,
            wasm_module: Some("./pkg/folio_wasm.js".to_string()),
        }
    }
}

/// Render the complete page document.
pub fn render_page(portfolio: &Portfolio, sections: &[SectionView], options: &PageOptions) -> String {
    let animate = options.wasm_module.is_some();
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!(
        "<title>{} | {}</title>\n",
        escape_html(&portfolio.profile.name),
        escape_html(&portfolio.profile.headline),
    ));
    html.push_str("<style>\n");
    html.push_str(&stylesheet(options.dark));
    html.push_str("</style>\n</head>\n<body>\n");

    render_nav(&mut html, &portfolio.profile.brand);

    html.push_str("<main>\n");
    for view in sections {
        render_section(&mut html, view, animate);
    }
    html.push_str("</main>\n");

    html.push_str(&format!(
        "<footer><p>{}</p></footer>\n",
        escape_html(&portfolio.footer)
    ));

    if let Some(module) = &options.wasm_module {
        html.push_str(&format!(
            "<script type=\"module\">\nimport init, {{ mount }} from \"{}\";\nawait init();\nwindow.folio = mount();\n</script>\n",
            escape_js_string(module),
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_nav(html: &mut String, brand: &str) {
    html.push_str("<nav class=\"nav\">\n<div class=\"nav-inner\">\n");
    html.push_str(&format!("<div class=\"brand\">{}</div>\n", escape_html(brand)));
    html.push_str("<div class=\"nav-links\">\n");
    for id in SectionId::ALL {
        // Matches the scroll-spy's initial state.
        let class = if id == SectionId::Home {
            format!("nav-link {ACTIVE_CLASS}")
        } else {
            "nav-link".to_string()
        };
        html.push_str(&format!(
            "<a class=\"{class}\" href=\"#{id}\" data-section=\"{id}\">{}</a>\n",
            id.label(),
        ));
    }
    html.push_str("</div>\n</div>\n</nav>\n");
}

fn render_section(html: &mut String, view: &SectionView, animate: bool) {
    let id = view.id;
    html.push_str(&format!("<section id=\"{id}\" class=\"section section-{id}\">\n"));
    html.push_str("<div class=\"container\">\n");

    let (tag, class) = if id == SectionId::Home {
        ("h1", "hero-title")
    } else {
        ("h2", "section-title")
    };
    html.push_str(&format!("<header{}>\n", reveal_attrs(view.title_reveal, animate)));
    html.push_str(&format!(
        "<{tag} class=\"{class}\">{}</{tag}>\n",
        escape_html(&view.title)
    ));
    if let Some(subtitle) = &view.subtitle {
        html.push_str(&format!(
            "<p class=\"subtitle\">{}</p>\n",
            escape_html(subtitle)
        ));
    }
    html.push_str("</header>\n");

    for block in &view.blocks {
        render_block(html, block, animate);
    }

    html.push_str("</div>\n</section>\n");
}

fn render_block(html: &mut String, block: &Block, animate: bool) {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(3, 6);
            html.push_str(&format!("<h{level}>{}</h{level}>\n", escape_html(text)));
        }
        Block::Text { text, color } => {
            html.push_str(&format!(
                "<p class=\"{}\">{}</p>\n",
                text_class(*color),
                escape_html(text)
            ));
        }
        Block::Badge { text } => {
            html.push_str(&format!(
                "<span class=\"badge\">{}</span>\n",
                escape_html(text)
            ));
        }
        Block::KeyValue { key, value } => {
            html.push_str(&format!(
                "<div class=\"kv\"><span>{}</span><span class=\"badge\">{}</span></div>\n",
                escape_html(key),
                escape_html(value)
            ));
        }
        Block::Bullets { items } => {
            html.push_str("<ul class=\"bullets\">\n");
            for item in items {
                html.push_str(&format!("<li>{}</li>\n", escape_html(item)));
            }
            html.push_str("</ul>\n");
        }
        Block::Progress { label, percent } => {
            let percent = (*percent).min(100);
            html.push_str(&format!(
                "<div class=\"skill\"><div class=\"kv\"><span>{}</span><span class=\"muted\">{percent}%</span></div>\
                 <div class=\"progress\" role=\"progressbar\" aria-valuenow=\"{percent}\" aria-valuemin=\"0\" aria-valuemax=\"100\">\
                 <div class=\"progress-fill\" style=\"width:{percent}%\"></div></div></div>\n",
                escape_html(label),
            ));
        }
        Block::ContactLine { kind, text } => {
            html.push_str(&format!(
                "<div class=\"contact-line contact-{}\"><span class=\"icon\" aria-hidden=\"true\">{}</span><span>{}</span></div>\n",
                contact_class(*kind),
                kind.glyph(),
                escape_html(text)
            ));
        }
        Block::Link {
            label,
            target,
            primary,
        } => {
            let class = if *primary { "btn btn-primary" } else { "btn" };
            let attrs = match target {
                LinkTarget::Section(id) => format!("href=\"#{id}\" data-section=\"{id}\""),
                LinkTarget::External(href) if href.starts_with("mailto:") => {
                    format!("href=\"{}\"", escape_html(href))
                }
                LinkTarget::External(href) => format!(
                    "href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"",
                    escape_html(href)
                ),
            };
            html.push_str(&format!(
                "<a class=\"{class}\" {attrs}>{}</a>\n",
                escape_html(label)
            ));
        }
        Block::Avatar { src, alt, size } => {
            html.push_str(&format!(
                "<img class=\"avatar\" src=\"{}\" alt=\"{}\" width=\"{size}\" height=\"{size}\">\n",
                escape_html(src),
                escape_html(alt)
            ));
        }
        Block::Card { blocks, reveal } => {
            html.push_str(&format!(
                "<div{}>\n",
                class_with_reveal("card", *reveal, animate)
            ));
            for inner in blocks {
                render_block(html, inner, animate);
            }
            html.push_str("</div>\n");
        }
        Block::Columns { columns } => {
            html.push_str("<div class=\"columns\">\n");
            for column in columns {
                html.push_str("<div class=\"column\">\n");
                for inner in column {
                    render_block(html, inner, animate);
                }
                html.push_str("</div>\n");
            }
            html.push_str("</div>\n");
        }
    }
}

fn reveal_attrs(reveal: Option<Reveal>, animate: bool) -> String {
    match reveal {
        Some(reveal) if animate => format!(
            " class=\"reveal reveal-{}\" style=\"transition-delay:{}ms\"",
            reveal.from.as_str(),
            reveal.delay_ms
        ),
        _ => String::new(),
    }
}

fn class_with_reveal(base: &str, reveal: Option<Reveal>, animate: bool) -> String {
    match reveal {
        Some(reveal) if animate => format!(
            " class=\"{base} reveal reveal-{}\" style=\"transition-delay:{}ms\"",
            reveal.from.as_str(),
            reveal.delay_ms
        ),
        _ => format!(" class=\"{base}\""),
    }
}

fn text_class(token: ThemeToken) -> &'static str {
    match token {
        ThemeToken::Accent => "accent",
        ThemeToken::TextPrimary => "strong",
        _ => "muted",
    }
}

fn contact_class(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Phone => "phone",
        ContactKind::Email => "email",
        ContactKind::Location => "location",
        ContactKind::Grade => "grade",
    }
}

/// Palette for the page.
pub fn resolve_color(token: ThemeToken, dark: bool) -> Color {
    if dark {
        match token {
            ThemeToken::Background => Color::rgb(0x0f, 0x17, 0x2a),
            ThemeToken::Surface => Color::rgb(0x1e, 0x29, 0x3b),
            ThemeToken::Border => Color::rgb(0x33, 0x41, 0x55),
            ThemeToken::NavBackground => Color::rgba(0x0f, 0x17, 0x2a, 0.9),
            ThemeToken::NavText => Color::rgb(0xcb, 0xd5, 0xe1),
            ThemeToken::NavActive | ThemeToken::Accent => Color::rgb(0x60, 0xa5, 0xfa),
            ThemeToken::TextPrimary => Color::rgb(0xff, 0xff, 0xff),
            ThemeToken::TextSecondary => Color::rgb(0xcb, 0xd5, 0xe1),
            ThemeToken::ProgressTrack => Color::rgb(0x33, 0x41, 0x55),
            ThemeToken::ProgressFill => Color::rgb(0x60, 0xa5, 0xfa),
            ThemeToken::BadgeBackground => Color::rgb(0x33, 0x41, 0x55),
            ThemeToken::BadgeText => Color::rgb(0xe2, 0xe8, 0xf0),
            ThemeToken::Highlight => Color::rgb(0xea, 0xb3, 0x08),
        }
    } else {
        match token {
            ThemeToken::Background => Color::rgb(0xef, 0xf6, 0xff),
            ThemeToken::Surface => Color::rgb(0xff, 0xff, 0xff),
            ThemeToken::Border => Color::rgb(0xe2, 0xe8, 0xf0),
            ThemeToken::NavBackground => Color::rgba(0xff, 0xff, 0xff, 0.9),
            ThemeToken::NavText => Color::rgb(0x47, 0x55, 0x69),
            ThemeToken::NavActive | ThemeToken::Accent => Color::rgb(0x25, 0x63, 0xeb),
            ThemeToken::TextPrimary => Color::rgb(0x0f, 0x17, 0x2a),
            ThemeToken::TextSecondary => Color::rgb(0x47, 0x55, 0x69),
            ThemeToken::ProgressTrack => Color::rgb(0xe2, 0xe8, 0xf0),
            ThemeToken::ProgressFill => Color::rgb(0x25, 0x63, 0xeb),
            ThemeToken::BadgeBackground => Color::rgb(0xf1, 0xf5, 0xf9),
            ThemeToken::BadgeText => Color::rgb(0x0f, 0x17, 0x2a),
            ThemeToken::Highlight => Color::rgb(0xea, 0xb3, 0x08),
        }
    }
}

fn stylesheet(dark: bool) -> String {
    let c = |token| resolve_color(token, dark).to_css();
    format!(
        r#":root {{ --bg: {bg}; --surface: {surface}; --border: {border}; --nav-bg: {nav_bg}; --nav-text: {nav_text}; --nav-active: {nav_active}; --text: {text}; --muted: {muted}; --accent: {accent}; --track: {track}; --fill: {fill}; --badge-bg: {badge_bg}; --badge-text: {badge_text}; --highlight: {highlight}; }}
* {{ box-sizing: border-box; }}
html {{ scroll-behavior: smooth; }}
body {{ margin: 0; font-family: system-ui, -apple-system, sans-serif; background: var(--bg); color: var(--text); line-height: 1.6; }}
.nav {{ position: fixed; top: 0; left: 0; right: 0; z-index: 50; background: var(--nav-bg); backdrop-filter: blur(12px); border-bottom: 1px solid var(--border); }}
.nav-inner {{ max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; height: 4rem; display: flex; justify-content: space-between; align-items: center; }}
.brand {{ font-weight: 700; font-size: 1.25rem; color: var(--accent); }}
.nav-links {{ display: flex; gap: 1.5rem; }}
.nav-link {{ color: var(--nav-text); text-decoration: none; font-size: .875rem; font-weight: 500; transition: color .2s; }}
.nav-link.{active} {{ color: var(--nav-active); }}
@media (max-width: 768px) {{ .nav-links {{ display: none; }} .columns {{ grid-template-columns: 1fr; }} }}
.section {{ padding: 5rem 1.5rem; }}
.section-home {{ min-height: 100vh; display: flex; align-items: center; text-align: center; }}
.container {{ max-width: 72rem; margin: 0 auto; width: 100%; }}
.hero-title {{ font-size: 3.5rem; margin: .5rem 0; }}
.section-title {{ font-size: 2.75rem; text-align: center; margin-bottom: 3rem; }}
.subtitle {{ color: var(--accent); font-size: 1.4rem; font-weight: 600; }}
.section:not(.section-home) .subtitle {{ color: var(--muted); font-size: 1.1rem; font-weight: 400; text-align: center; }}
.card {{ background: var(--surface); border-radius: .75rem; padding: 2rem; margin-bottom: 2rem; }}
.section-home .card {{ background: transparent; }}
.columns {{ display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }}
.avatar {{ border-radius: 50%; border: 4px solid var(--surface); }}
.muted {{ color: var(--muted); }}
.accent {{ color: var(--accent); font-weight: 600; }}
.badge {{ display: inline-block; background: var(--badge-bg); color: var(--badge-text); border-radius: 9999px; padding: .1rem .7rem; font-size: .8rem; }}
.kv {{ display: flex; justify-content: space-between; align-items: center; margin: .4rem 0; }}
.bullets {{ padding-left: 1.2rem; color: var(--muted); font-size: .9rem; }}
.skill {{ margin: 1rem 0; }}
.progress {{ height: .5rem; background: var(--track); border-radius: 9999px; overflow: hidden; }}
.progress-fill {{ height: 100%; background: var(--fill); }}
.contact-line {{ display: flex; gap: .75rem; align-items: center; margin: .5rem 0; color: var(--muted); }}
.section-home .contact-line {{ display: inline-flex; margin: 1rem; }}
.contact-grade .icon {{ color: var(--highlight); }}
.icon {{ color: var(--accent); }}
.btn {{ display: inline-block; margin: .5rem; padding: .75rem 2rem; border-radius: 9999px; border: 2px solid var(--border); background: var(--surface); color: var(--text); text-decoration: none; }}
.btn-primary {{ background: var(--accent); border-color: var(--accent); color: #fff; }}
.reveal {{ opacity: 0; transition: opacity .8s ease, transform .8s ease; }}
.reveal-below {{ transform: translateY(30px); }}
.reveal-left {{ transform: translateX(-30px); }}
.reveal-right {{ transform: translateX(30px); }}
.reveal.{visible} {{ opacity: 1; transform: none; }}
footer {{ padding: 2rem 1.5rem; text-align: center; color: var(--muted); border-top: 1px solid var(--border); }}
"#,
        bg = c(ThemeToken::Background),
        surface = c(ThemeToken::Surface),
        border = c(ThemeToken::Border),
        nav_bg = c(ThemeToken::NavBackground),
        nav_text = c(ThemeToken::NavText),
        nav_active = c(ThemeToken::NavActive),
        text = c(ThemeToken::TextPrimary),
        muted = c(ThemeToken::TextSecondary),
        accent = c(ThemeToken::Accent),
        track = c(ThemeToken::ProgressTrack),
        fill = c(ThemeToken::ProgressFill),
        badge_bg = c(ThemeToken::BadgeBackground),
        badge_text = c(ThemeToken::BadgeText),
        highlight = c(ThemeToken::Highlight),
        active = ACTIVE_CLASS,
        visible = VISIBLE_CLASS,
    )
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape text for a double-quoted JS string inside an inline `<script>`.
/// Entities are not decoded there, so `</` is broken up instead.
pub fn escape_js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '<' => out.push_str("\\u003c"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::build_page;

    fn render(options: &PageOptions) -> String {
        let portfolio = Portfolio::builtin().unwrap();
        let sections = build_page(&portfolio);
        render_page(&portfolio, &sections, options)
    }

    #[test]
    fn page_has_every_section() {
        let html = render(&PageOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        for id in SectionId::ALL {
            assert!(html.contains(&format!("<section id=\"{id}\"")), "missing {id}");
            assert!(html.contains(&format!("data-section=\"{id}\"")), "no nav for {id}");
        }
    }

    #[test]
    fn home_is_initially_active() {
        let html = render(&PageOptions::default());
        assert!(html.contains(
            "<a class=\"nav-link active\" href=\"#home\" data-section=\"home\">Home</a>"
        ));
        assert_eq!(html.matches("nav-link active").count(), 1);
    }

    #[test]
    fn escapes_content() {
        let html = render(&PageOptions::default());
        // "Web Technologies & Database", "Let's Connect"
        assert!(html.contains("Web Technologies &amp; Database"));
        assert!(html.contains("Let&#39;s Connect"));
        assert!(!html.contains("Technologies & Database"));
    }

    #[test]
    fn static_page_has_no_script_or_reveals() {
        let html = render(&PageOptions {
            dark: false,
            wasm_module: None,
        });
        assert!(!html.contains("<script"));
        assert!(!html.contains("class=\"card reveal"));
    }

    #[test]
    fn animated_page_loads_wasm_and_staggers() {
        let html = render(&PageOptions::default());
        assert!(html.contains("import init, { mount } from \"./pkg/folio_wasm.js\""));
        assert!(html.contains("class=\"card reveal reveal-below\" style=\"transition-delay:300ms\""));
        assert!(html.contains("reveal-left"));
        assert!(html.contains("reveal-right"));
    }

    #[test]
    fn module_path_is_escaped_for_script_text() {
        let html = render(&PageOptions {
            dark: false,
            wasm_module: Some("./pkg/a&b\"</script>.js".to_string()),
        });
        assert!(html.contains("from \"./pkg/a&b\\\"\\u003c/script>.js\";"));
        assert!(!html.contains("&amp;b"));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn js_string_escaping() {
        assert_eq!(escape_js_string(r"a\b"), r"a\\b");
        assert_eq!(escape_js_string("say \"hi\""), r#"say \"hi\""#);
        assert_eq!(escape_js_string("line\nbreak"), r"line\nbreak");
        assert_eq!(escape_js_string("</script>"), r"\u003c/script>");
        assert_eq!(escape_js_string("./pkg/folio_wasm.js"), "./pkg/folio_wasm.js");
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let html = render(&PageOptions::default());
        assert!(html.contains(
            "href=\"https://www.linkedin.com/in/megatsraif\" target=\"_blank\" rel=\"noopener noreferrer\""
        ));
        assert!(html.contains("href=\"mailto:megatsyakir.raif@gmail.com\">Send Email</a>"));
    }

    #[test]
    fn progress_bars_carry_levels() {
        let html = render(&PageOptions::default());
        assert!(html.contains("style=\"width:90%\""));
        assert!(html.contains("aria-valuenow=\"85\""));
    }

    #[test]
    fn dark_palette() {
        let light = render(&PageOptions::default());
        let dark = render(&PageOptions {
            dark: true,
            ..PageOptions::default()
        });
        assert!(light.contains("--bg: #eff6ff"));
        assert!(dark.contains("--bg: #0f172a"));
    }
}
