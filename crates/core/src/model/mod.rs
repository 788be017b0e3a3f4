pub mod portfolio;

pub use portfolio::{
    Contact, ContentError, Education, Experience, Language, Portfolio, Profile, Reference, Skill,
    SkillGroup,
};
