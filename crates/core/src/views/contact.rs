use folio_protocol::{
    Block, ContactKind, LinkTarget, Reveal, RevealFrom, SectionId, SectionView, ThemeToken,
};

use super::{card, heading, split_columns, titled};
use crate::model::Portfolio;

pub fn build_contact(portfolio: &Portfolio) -> SectionView {
    let contact = &portfolio.contact;

    let info = vec![
        heading(3, "Contact Information"),
        Block::ContactLine {
            kind: ContactKind::Phone,
            text: contact.phone.clone(),
        },
        Block::ContactLine {
            kind: ContactKind::Email,
            text: contact.email.clone(),
        },
        Block::ContactLine {
            kind: ContactKind::Location,
            text: contact.address.clone(),
        },
    ];

    let mut right = Vec::new();
    if let Some(reference) = &portfolio.reference {
        let mut blocks = vec![heading(3, "Reference"), heading(4, &reference.name)];
        blocks.extend(reference.position.iter().map(|line| Block::Text {
            text: line.clone(),
            color: ThemeToken::TextSecondary,
        }));
        blocks.push(Block::ContactLine {
            kind: ContactKind::Phone,
            text: reference.phone.clone(),
        });
        blocks.push(Block::ContactLine {
            kind: ContactKind::Email,
            text: reference.email.clone(),
        });
        right.push(card(blocks));
    }

    let mut links = vec![Block::Link {
        label: "Send Email".into(),
        target: LinkTarget::External(portfolio.mailto()),
        primary: true,
    }];
    if let Some(linkedin) = &contact.linkedin {
        links.push(Block::Link {
            label: "LinkedIn Profile".into(),
            target: LinkTarget::External(linkedin.clone()),
            primary: false,
        });
    }

    let mut view = titled(SectionId::Contact, "Let's Connect");
    view.subtitle = Some(contact.pitch.clone());
    view.blocks.push(split_columns(vec![card(info)], right));
    view.blocks.push(Block::Card {
        blocks: links,
        reveal: Some(Reveal::staggered(RevealFrom::Below, 2)),
    });
    view
}
