use clap::ValueEnum;

#[derive(Debug, PartialEq, Eq, Clone, Copy, ValueEnum)]
pub enum ScreenId {
    Landing,   // Hero, promos, featured menu, testimonials
    Dashboard, // Employee order board
}

impl ScreenId {
    pub fn other(self) -> ScreenId {
        match self {
            ScreenId::Landing => ScreenId::Dashboard,
            ScreenId::Dashboard => ScreenId::Landing,
        }
    }
}
