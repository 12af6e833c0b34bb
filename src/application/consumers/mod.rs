mod updated_at;

pub use updated_at::UpdatedAtConsumer;
