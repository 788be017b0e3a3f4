use folio_protocol::{Block, ContactKind, Reveal, RevealFrom, SectionId, SectionView, ThemeToken};

use super::{heading, titled};
use crate::model::Portfolio;

pub fn build_education(portfolio: &Portfolio) -> SectionView {
    let mut view = titled(SectionId::Education, "Education");
    view.blocks = portfolio
        .education
        .iter()
        .enumerate()
        .map(|(i, edu)| {
            let result = if edu.highlight_result {
                Block::ContactLine {
                    kind: ContactKind::Grade,
                    text: edu.result.clone(),
                }
            } else {
                Block::Text {
                    text: edu.result.clone(),
                    color: ThemeToken::TextSecondary,
                }
            };
            Block::Card {
                blocks: vec![
                    heading(3, &edu.institution),
                    Block::Text {
                        text: edu.qualification.clone(),
                        color: ThemeToken::Accent,
                    },
                    Block::Badge {
                        text: edu.period.clone(),
                    },
                    result,
                ],
                reveal: Some(Reveal::staggered(RevealFrom::Below, i)),
            }
        })
        .collect();
    view
}
