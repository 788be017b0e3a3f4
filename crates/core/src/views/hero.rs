use folio_protocol::{
    Block, ContactKind, LinkTarget, Reveal, RevealFrom, SectionId, SectionView, ThemeToken,
};

use crate::model::Portfolio;

const AVATAR_SIZE: u32 = 160;

/// Landing section: portrait, name, headline, calls to action.
///
/// Everything here is visible on load, so the whole section animates as one
/// card as soon as the page mounts.
pub fn build_hero(portfolio: &Portfolio) -> SectionView {
    let profile = &portfolio.profile;

    let mut facts = vec![Block::ContactLine {
        kind: ContactKind::Location,
        text: profile.location.clone(),
    }];
    if let Some(cgpa) = &profile.cgpa {
        facts.push(Block::ContactLine {
            kind: ContactKind::Grade,
            text: format!("CGPA: {cgpa}"),
        });
    }

    let mut blocks = vec![
        Block::Avatar {
            src: profile.avatar.clone(),
            alt: profile.name.clone(),
            size: AVATAR_SIZE,
        },
        Block::Text {
            text: profile.summary.clone(),
            color: ThemeToken::TextSecondary,
        },
        Block::Link {
            label: "View My Experience".into(),
            target: LinkTarget::Section(SectionId::Experience),
            primary: true,
        },
        Block::Link {
            label: "Get In Touch".into(),
            target: LinkTarget::Section(SectionId::Contact),
            primary: false,
        },
    ];
    blocks.extend(facts);

    SectionView {
        id: SectionId::Home,
        title: profile.name.clone(),
        subtitle: Some(profile.headline.clone()),
        title_reveal: None,
        blocks: vec![Block::Card {
            blocks,
            reveal: Some(Reveal::new(RevealFrom::Below)),
        }],
    }
}
