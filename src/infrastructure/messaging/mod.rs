mod logging_publisher;
mod redis_queue;

pub use logging_publisher::LoggingPublisher;
pub use redis_queue::RedisMessageQueue;
