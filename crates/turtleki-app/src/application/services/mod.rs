mod data_transfer_service;
mod game_service;
mod quest_service;

#[cfg(test)]
mod quest_service_test;

pub use data_transfer_service::DataTransferService;
pub use game_service::GameService;
pub use quest_service::QuestService;
