//! Content → section views. Each builder is a pure function of the
//! portfolio; renderers never look at the content records directly.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod skills;

use folio_protocol::{Block, Reveal, RevealFrom, SectionId, SectionView};

use crate::model::Portfolio;

/// Build every section, in display order.
pub fn build_page(portfolio: &Portfolio) -> Vec<SectionView> {
    SectionId::ALL
        .into_iter()
        .map(|id| build_section(portfolio, id))
        .collect()
}

pub fn build_section(portfolio: &Portfolio, id: SectionId) -> SectionView {
    match id {
        SectionId::Home => hero::build_hero(portfolio),
        SectionId::About => about::build_about(portfolio),
        SectionId::Education => education::build_education(portfolio),
        SectionId::Experience => experience::build_experience(portfolio),
        SectionId::Skills => skills::build_skills(portfolio),
        SectionId::Contact => contact::build_contact(portfolio),
    }
}

/// Titled section whose heading rises in from below.
fn titled(id: SectionId, title: &str) -> SectionView {
    SectionView {
        id,
        title: title.to_string(),
        subtitle: None,
        title_reveal: Some(Reveal::new(RevealFrom::Below)),
        blocks: Vec::new(),
    }
}

/// Two-column layout: the left column slides in from the left, the right one
/// from the right.
fn split_columns(left: Vec<Block>, right: Vec<Block>) -> Block {
    let wrap = |blocks: Vec<Block>, from: RevealFrom| -> Vec<Block> {
        blocks
            .into_iter()
            .map(|block| match block {
                Block::Card { blocks, reveal: None } => Block::Card {
                    blocks,
                    reveal: Some(Reveal::new(from)),
                },
                other => other,
            })
            .collect()
    };
    Block::Columns {
        columns: vec![wrap(left, RevealFrom::Left), wrap(right, RevealFrom::Right)],
    }
}

fn card(blocks: Vec<Block>) -> Block {
    Block::Card {
        blocks,
        reveal: None,
    }
}

fn heading(level: u8, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_six_sections_in_order() {
        let portfolio = Portfolio::builtin().unwrap();
        let page = build_page(&portfolio);
        let ids: Vec<_> = page.iter().map(|v| v.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }

    #[test]
    fn split_columns_animates_from_each_side() {
        let Block::Columns { columns } =
            split_columns(vec![card(Vec::new())], vec![card(Vec::new()), card(Vec::new())])
        else {
            panic!("expected columns");
        };
        let froms: Vec<Vec<_>> = columns
            .iter()
            .map(|col| {
                col.iter()
                    .filter_map(|b| match b {
                        Block::Card { reveal, .. } => reveal.map(|r| r.from),
                        _ => None,
                    })
                    .collect()
            })
            .collect();
        assert_eq!(
            froms,
            vec![
                vec![RevealFrom::Left],
                vec![RevealFrom::Right, RevealFrom::Right]
            ]
        );
    }
}
