mod order;

pub use order::OrderRepository;
