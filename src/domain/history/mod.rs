mod model;
mod repository;

pub use model::BookingRecord;
pub use repository::HistoryRepository;
