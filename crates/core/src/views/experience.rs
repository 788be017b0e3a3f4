use folio_protocol::{Block, Reveal, RevealFrom, SectionId, SectionView, ThemeToken};

use super::{heading, titled};
use crate::model::Portfolio;

/// One card per role, staggered 100 ms apart.
pub fn build_experience(portfolio: &Portfolio) -> SectionView {
    let mut view = titled(SectionId::Experience, "Leadership Experience");
    view.blocks = portfolio
        .experience
        .iter()
        .enumerate()
        .map(|(i, exp)| Block::Card {
            blocks: vec![
                heading(3, &exp.title),
                Block::Text {
                    text: exp.organization.clone(),
                    color: ThemeToken::Accent,
                },
                Block::Badge {
                    text: exp.period.clone(),
                },
                Block::Bullets {
                    items: exp.achievements.clone(),
                },
            ],
            reveal: Some(Reveal::staggered(RevealFrom::Below, i)),
        })
        .collect();
    view
}
