use folio_protocol::{Block, SectionId, SectionView};

use super::{card, heading, split_columns, titled};
use crate::model::{Portfolio, SkillGroup};

/// Skill groups alternate between the left and right column.
pub fn build_skills(portfolio: &Portfolio) -> SectionView {
    let (mut left, mut right) = (Vec::new(), Vec::new());
    for (i, group) in portfolio.skills.iter().enumerate() {
        let target = if i % 2 == 0 { &mut left } else { &mut right };
        target.push(card(group_blocks(group)));
    }

    let mut view = titled(SectionId::Skills, "Technical Skills");
    view.blocks.push(split_columns(left, right));
    view
}

fn group_blocks(group: &SkillGroup) -> Vec<Block> {
    let mut blocks = vec![heading(4, &group.title)];
    blocks.extend(group.skills.iter().map(|s| Block::Progress {
        label: s.name.clone(),
        percent: s.level,
    }));
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_split_into_two_columns() {
        let portfolio = Portfolio::builtin().unwrap();
        let view = build_skills(&portfolio);
        let [Block::Columns { columns }] = view.blocks.as_slice() else {
            panic!("expected a single columns block");
        };
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].len(), 1);
        assert_eq!(columns[1].len(), 1);
    }
}
