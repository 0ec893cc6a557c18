pub mod bbcnews;
pub mod dailystar;
pub mod dawn;
pub mod thehindu;
pub mod whitehouse;
