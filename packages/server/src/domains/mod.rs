// Domain modules - one per directory collection, plus informational
// articles and lead-generation submissions

pub mod articles;
pub mod daycares;
pub mod events;
pub mod faith_communities;
pub mod providers;
pub mod schools;
pub mod submissions;
