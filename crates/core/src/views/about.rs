use folio_protocol::{Block, SectionId, SectionView, ThemeToken};

use super::{card, heading, split_columns, titled};
use crate::model::Portfolio;

pub fn build_about(portfolio: &Portfolio) -> SectionView {
    let mut profile_card = vec![heading(3, "Profile")];
    profile_card.extend(portfolio.profile.bio.iter().map(|p| Block::Text {
        text: p.clone(),
        color: ThemeToken::TextSecondary,
    }));

    let mut languages = vec![heading(4, "Languages")];
    languages.extend(portfolio.languages.iter().map(|l| Block::KeyValue {
        key: l.name.clone(),
        value: l.fluency.clone(),
    }));

    let achievement = vec![
        heading(4, "Achievement"),
        Block::Text {
            text: portfolio.achievement.clone(),
            color: ThemeToken::TextSecondary,
        },
    ];

    let mut view = titled(SectionId::About, "About Me");
    view.blocks.push(split_columns(
        vec![card(profile_card)],
        vec![card(languages), card(achievement)],
    ));
    view
}
