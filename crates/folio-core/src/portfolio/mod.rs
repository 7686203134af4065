mod models;
mod sample;

pub use models::{
    About, Card, Cert, Contact, ContactLink, Hero, Portfolio, Project, SkillCategory, Stat,
    TimelineItem,
};
