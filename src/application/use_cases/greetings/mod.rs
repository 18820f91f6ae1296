//! Greeting Use Cases

mod greet;

pub use greet::GreetUseCase;
